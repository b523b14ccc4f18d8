use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// Branching factor below 2 was requested
    InvalidBranchingFactor(usize),
    /// `pop_max` was called on a heap with no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidBranchingFactor(d) => {
                write!(f, "branching factor must be at least 2, got {d}")
            }
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}
