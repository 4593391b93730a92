use dynvec::{DynVec, DynVecError};

#[test]
fn test_new_is_empty_without_capacity() {
    let dynvec: DynVec<i32> = DynVec::new();

    assert_eq!(dynvec.len(), 0);
    assert!(dynvec.is_empty());
    assert_eq!(dynvec.capacity(), 0);
}

#[test]
fn test_push_back_doubles_capacity() {
    let mut dynvec = DynVec::new();
    let mut capacities = Vec::new();

    for i in 0..9 {
        dynvec.push_back(i).unwrap();
        capacities.push(dynvec.capacity());
    }

    assert_eq!(capacities, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn test_push_back_values_in_order() {
    let mut dynvec = DynVec::new();
    for i in 0..100 {
        dynvec.push_back(i * 3).unwrap();
    }

    assert_eq!(dynvec.len(), 100);
    for i in 0..100 {
        assert_eq!(dynvec[i], i * 3);
    }
}

#[test]
fn test_reserve_is_exact() {
    let mut dynvec: DynVec<u8> = DynVec::new();
    dynvec.reserve(10).unwrap();

    assert_eq!(dynvec.capacity(), 10);
    assert_eq!(dynvec.len(), 0);
}

#[test]
fn test_reserve_smaller_is_noop() {
    let mut dynvec = DynVec::with_capacity(10).unwrap();
    dynvec.push_back(1).unwrap();
    let before = dynvec.as_ptr();

    dynvec.reserve(5).unwrap();
    dynvec.reserve(10).unwrap();

    assert_eq!(dynvec.capacity(), 10);
    assert_eq!(dynvec.as_ptr(), before);
    assert_eq!(dynvec.as_slice(), &[1]);
}

#[test]
fn test_reserve_keeps_addresses_stable() {
    let mut dynvec = DynVec::new();
    dynvec.reserve(64).unwrap();
    let origin = dynvec.as_ptr();

    for i in 0..63 {
        dynvec.push_back(i).unwrap();
    }
    dynvec.insert(10, 99).unwrap();
    dynvec.erase(10).unwrap();
    dynvec.push_back(63).unwrap();

    assert_eq!(dynvec.len(), 64);
    assert_eq!(dynvec.as_ptr(), origin);
    assert_eq!(dynvec.capacity(), 64);

    // One more element forces the buffer to move
    dynvec.push_back(64).unwrap();
    assert_eq!(dynvec.capacity(), 128);
}

#[test]
fn test_reserve_past_max_size() {
    let mut dynvec: DynVec<u8> = DynVec::with_max_size(8);

    assert_eq!(
        dynvec.reserve(9),
        Err(DynVecError::LengthError {
            requested: 9,
            max_size: 8
        })
    );
    assert_eq!(dynvec.capacity(), 0);
    assert!(dynvec.reserve(8).is_ok());
}

#[test]
fn test_with_capacity_past_allocator_limit() {
    let result: Result<DynVec<u64>, _> = DynVec::with_capacity(usize::MAX);
    assert_eq!(
        result.unwrap_err(),
        DynVecError::LengthError {
            requested: usize::MAX,
            max_size: isize::MAX as usize / 8
        }
    );
}

#[test]
fn test_max_size_clamped_to_allocator_limit() {
    let dynvec: DynVec<u32> = DynVec::with_max_size(usize::MAX);
    assert_eq!(dynvec.max_size(), isize::MAX as usize / 4);

    let dynvec: DynVec<u32> = DynVec::with_max_size(5);
    assert_eq!(dynvec.max_size(), 5);
}

#[test]
fn test_growth_clamped_to_max_size() {
    let mut dynvec = DynVec::with_max_size(6);
    for i in 0..5 {
        dynvec.push_back(i).unwrap();
    }
    assert_eq!(dynvec.capacity(), 6);

    dynvec.push_back(5).unwrap();
    assert_eq!(dynvec.capacity(), 6);

    assert_eq!(
        dynvec.push_back(6),
        Err(DynVecError::LengthError {
            requested: 7,
            max_size: 6
        })
    );
    assert_eq!(dynvec.len(), 6);
}

#[test]
fn test_resize_grow_with_fill() {
    let mut dynvec = DynVec::from([1, 2]);
    dynvec.resize(5, 7).unwrap();

    assert_eq!(dynvec.as_slice(), &[1, 2, 7, 7, 7]);
    assert_eq!(dynvec.capacity(), 5);
}

#[test]
fn test_resize_shrink_keeps_capacity() {
    let mut dynvec = DynVec::from([1, 2, 3, 4, 5]);
    dynvec.resize(2, 0).unwrap();

    assert_eq!(dynvec.as_slice(), &[1, 2]);
    assert_eq!(dynvec.capacity(), 5);
}

#[test]
fn test_resize_shrink_is_destructive() {
    let mut dynvec = DynVec::from([1, 2, 3, 4, 5]);
    let original_len = dynvec.len();

    dynvec.resize(2, 0).unwrap();
    dynvec.resize(original_len, 0).unwrap();

    assert_eq!(dynvec.len(), original_len);
    assert_eq!(dynvec.as_slice(), &[1, 2, 0, 0, 0]);
}

#[test]
fn test_resize_default() {
    let mut dynvec: DynVec<String> = DynVec::new();
    dynvec.resize_default(3).unwrap();

    assert_eq!(dynvec.len(), 3);
    assert!(dynvec.iter().all(String::is_empty));
}

#[test]
fn test_resize_past_max_size() {
    let mut dynvec = DynVec::with_max_size(3);
    dynvec.push_back(1).unwrap();

    assert_eq!(
        dynvec.resize(4, 0),
        Err(DynVecError::LengthError {
            requested: 4,
            max_size: 3
        })
    );
    assert_eq!(dynvec.as_slice(), &[1]);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut dynvec = DynVec::from([1, 2, 3]);
    dynvec.reserve(10).unwrap();

    dynvec.clear();

    assert!(dynvec.is_empty());
    assert_eq!(dynvec.capacity(), 10);
}

#[test]
fn test_zero_sized_elements() {
    let mut dynvec = DynVec::new();
    for _ in 0..1000 {
        dynvec.push_back(()).unwrap();
    }

    assert_eq!(dynvec.len(), 1000);
    assert_eq!(dynvec.max_size(), usize::MAX);
    assert_eq!(dynvec.capacity(), 1024);
}
