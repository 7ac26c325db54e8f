//! Error types for todo list operations.

use thiserror::Error;

/// A specialized Result type for todo list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when operating on a todo list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// An index outside `[0, len)` was passed to a positional operation.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
}

impl Error {
    /// Creates an out-of-range error.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_display() {
        let error = Error::index_out_of_range(10, 3);
        assert_eq!(
            error.to_string(),
            "index 10 out of range for list of length 3"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> = Box::new(Error::index_out_of_range(5, 0));
        assert!(error.to_string().contains("out of range"));
    }
}
