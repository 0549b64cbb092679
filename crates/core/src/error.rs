/// Errors that can occur while generating a fizzbuzz sequence
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {name} modulus must be non-zero (got {value})")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("Range {start}..={end} is too large to generate ({len} labels)")]
    RangeTooLarge { start: i64, end: i64, len: u128 },
}

/// Result type alias for fizzbuzz operations
pub type Result<T> = std::result::Result<T, Error>;
