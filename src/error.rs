use thiserror::Error;

/// SQLSTATE reported for an invalid column index
pub const SQL_STATE_INVALID_COLUMN_INDEX: &str = "S1002";

/// SQLSTATE reported for every other driver-side failure
pub const SQL_STATE_GENERAL_ERROR: &str = "S1000";

#[derive(Debug, Error)]
pub enum Error {
    #[error("Column index out of range: {column} (expected 1..={count})")]
    OutOfRange { column: usize, count: usize },

    #[error("Bad config error: {0}")]
    BadConfigError(String),

    #[error("Invalid packet")]
    InvalidPacket,

    #[error("Unexpected end of packet")]
    UnexpectedEof,

    #[error("Interceptor error: {0}")]
    Interceptor(String),
}

impl Error {
    /// The SQLSTATE-style diagnostic code attached to this error
    pub fn sql_state(&self) -> &'static str {
        match self {
            Error::OutOfRange { .. } => SQL_STATE_INVALID_COLUMN_INDEX,
            _ => SQL_STATE_GENERAL_ERROR,
        }
    }
}

impl<A, S, V> From<zerocopy::ConvertError<A, S, V>> for Error {
    fn from(_: zerocopy::ConvertError<A, S, V>) -> Self {
        Error::InvalidPacket
    }
}

impl From<std::convert::Infallible> for Error {
    fn from(err: std::convert::Infallible) -> Self {
        match err {}
    }
}

pub type Result<T> = std::result::Result<T, Error>;
