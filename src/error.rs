use thiserror::Error;

/// Errors returned while configuring, generating or clustering point sets.
#[derive(Debug, Error)]
pub enum Error {
    /// A required control field was left empty.
    #[error("Please provide {name}")]
    MissingParameter {
        /// Human-readable field name.
        name: &'static str,
    },

    /// A control field could not be parsed as a number.
    #[error("{name} must be a number, got {value:?}")]
    InvalidNumber {
        /// Human-readable field name.
        name: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// The drawing area leaves no room once the edge offset is removed.
    #[error("invalid bounds: {width}x{height} with offset {offset} leaves an empty range")]
    InvalidBounds {
        width: i64,
        height: i64,
        offset: i64,
    },

    /// Input is empty where at least one point is required.
    #[error("empty input")]
    EmptyInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
