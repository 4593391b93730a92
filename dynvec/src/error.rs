use thiserror::Error;

/// Error types for `DynVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynVecError {
    /// Requested element count exceeds the maximum the array can hold
    #[error("Length error: requested {requested} elements, but the maximum is {max_size}")]
    LengthError {
        /// Number of elements requested
        requested: usize,
        /// Maximum number of elements the array can hold
        max_size: usize,
    },
    /// Position is beyond the current array length
    #[error("Out of range: index {index} is beyond array length {length}")]
    OutOfRange {
        /// Position that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// The allocator could not provide a buffer of the requested capacity
    #[error("Allocation failed: could not allocate {capacity} slots")]
    AllocationFailed {
        /// Capacity that was requested from the allocator
        capacity: usize,
    },
}
