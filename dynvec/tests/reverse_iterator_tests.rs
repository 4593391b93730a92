use dynvec::DynVec;

#[test]
fn test_reverse_iterator_populated_array() {
    let dynvec = DynVec::from(["first", "second", "third"]);

    let items: Vec<_> = dynvec.iter_rev().collect();
    assert_eq!(items, vec![&"third", &"second", &"first"]);
}

#[test]
fn test_reverse_iterator_empty_array() {
    let dynvec: DynVec<u8> = DynVec::new();

    assert_eq!(dynvec.iter_rev().count(), 0);
}

#[test]
fn test_reverse_iterator_single_item() {
    let dynvec = DynVec::from(["only"]);

    let items: Vec<_> = dynvec.iter_rev().collect();
    assert_eq!(items, vec![&"only"]);
}

#[test]
fn test_reverse_iterator_partial_consumption() {
    let dynvec = DynVec::from([1, 2, 3, 4]);

    let mut iter = dynvec.iter_rev();
    assert_eq!(iter.next(), Some(&4));
    assert_eq!(iter.next(), Some(&3));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next_back(), Some(&1));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_reverse_iterator_mut() {
    let mut dynvec = DynVec::from([1, 2, 3]);

    let mut next = 10;
    for value in dynvec.iter_rev_mut() {
        *value = next;
        next += 1;
    }

    assert_eq!(dynvec.as_slice(), &[12, 11, 10]);
}

#[test]
fn test_reverse_iterator_offset() {
    let dynvec = DynVec::from(['a', 'b', 'c', 'd']);

    let mut iter = dynvec.iter_rev();
    assert_eq!(iter.offset(), 4);
    assert_eq!(iter.next(), Some(&'d'));
    assert_eq!(iter.offset(), 3);

    // The element just before the offset is the next one yielded
    let offset = iter.offset();
    assert_eq!(iter.next(), Some(&dynvec[offset - 1]));
    assert_eq!(iter.offset(), 2);
    assert_eq!(iter.as_slice(), &['a', 'b']);

    assert_eq!(iter.next_back(), Some(&'a'));
    assert_eq!(iter.offset(), 2);
    assert_eq!(iter.next(), Some(&'b'));
    assert_eq!(iter.offset(), 1);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.offset(), 1);
}

#[test]
fn test_reverse_iterator_offset_on_empty_array() {
    let dynvec: DynVec<u8> = DynVec::new();
    assert_eq!(dynvec.iter_rev().offset(), 0);
}

#[test]
fn test_reverse_iterator_mut_offset() {
    let mut dynvec = DynVec::from([1, 2, 3]);

    let mut iter = dynvec.iter_rev_mut();
    assert_eq!(iter.offset(), 3);
    if let Some(value) = iter.next() {
        *value *= 10;
    }
    assert_eq!(iter.offset(), 2);
    if let Some(value) = iter.next_back() {
        *value *= 100;
    }
    assert_eq!(iter.offset(), 2);
    assert_eq!(iter.len(), 1);

    assert_eq!(dynvec.as_slice(), &[100, 2, 30]);
}

#[test]
fn test_reverse_iterator_clone_is_independent() {
    let dynvec = DynVec::from([1, 2, 3]);

    let mut iter = dynvec.iter_rev();
    iter.next();
    let snapshot = iter.clone();
    iter.next();

    assert_eq!(snapshot.offset(), 2);
    assert_eq!(iter.offset(), 1);
    assert_eq!(snapshot.copied().collect::<Vec<_>>(), vec![2, 1]);
}
