use dynvec::{DynVec, DynVecError};

#[test]
fn test_error_messages_quality() {
    let dynvec = DynVec::from([1]);
    let message = format!("{}", dynvec.at(4).unwrap_err());
    assert!(message.contains("index 4"));
    assert!(message.contains("length 1"));

    let mut dynvec: DynVec<u8> = DynVec::with_max_size(3);
    let message = format!("{}", dynvec.reserve(10).unwrap_err());
    assert!(message.contains("requested 10"));
    assert!(message.contains("maximum is 3"));
}

#[test]
fn test_error_types_implement_standard_traits() {
    let error = DynVecError::OutOfRange {
        index: 1,
        length: 0,
    };
    let cloned = error.clone();
    assert_eq!(error, cloned);

    let debug = format!("{error:?}");
    assert!(debug.contains("OutOfRange"));

    let boxed: Box<dyn std::error::Error> = Box::new(error);
    assert!(boxed.source().is_none());
}

#[test]
fn test_errors_propagate_with_question_mark() {
    fn fill(dynvec: &mut DynVec<u32>, count: u32) -> Result<usize, DynVecError> {
        for i in 0..count {
            dynvec.push_back(i)?;
        }
        Ok(dynvec.len())
    }

    let mut dynvec = DynVec::with_max_size(3);
    assert_eq!(fill(&mut dynvec, 3), Ok(3));
    assert_eq!(
        fill(&mut dynvec, 1),
        Err(DynVecError::LengthError {
            requested: 4,
            max_size: 3
        })
    );
}

#[test]
fn test_failed_operations_leave_array_unchanged() {
    let mut dynvec = DynVec::with_max_size(4);
    dynvec.assign_iter([1, 2, 3]).unwrap();
    let capacity = dynvec.capacity();

    assert!(dynvec.insert(9, 0).is_err());
    assert!(dynvec.insert_n(0, 2, 0).is_err());
    assert!(dynvec.insert_iter(0, [7, 8]).is_err());
    assert!(dynvec.erase(3).is_err());
    assert!(dynvec.erase_range(3, 2).is_err());
    assert!(dynvec.resize(5, 0).is_err());

    assert_eq!(dynvec.as_slice(), &[1, 2, 3]);
    assert_eq!(dynvec.capacity(), capacity);
}

#[test]
fn test_allocator_refusal_is_an_error() {
    let mut dynvec: DynVec<[u8; 1 << 20]> = DynVec::new();
    let max_size = dynvec.max_size();

    assert_eq!(
        dynvec.reserve(max_size),
        Err(DynVecError::AllocationFailed { capacity: max_size })
    );
    assert_eq!(dynvec.capacity(), 0);
    assert!(dynvec.is_empty());
}

#[test]
fn test_allocator_refusal_keeps_contents() {
    let mut dynvec = DynVec::from([1u8, 2, 3]);
    let max_size = dynvec.max_size();

    assert_eq!(
        dynvec.reserve(max_size),
        Err(DynVecError::AllocationFailed { capacity: max_size })
    );
    assert_eq!(dynvec.as_slice(), &[1, 2, 3]);
    assert_eq!(dynvec.capacity(), 3);

    // Still usable afterwards
    dynvec.push_back(4).unwrap();
    assert_eq!(dynvec.as_slice(), &[1, 2, 3, 4]);

    let message = format!(
        "{}",
        DynVecError::AllocationFailed { capacity: max_size }
    );
    assert!(message.contains("Allocation failed"));
}
