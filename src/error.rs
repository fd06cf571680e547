use thiserror::Error;

use crate::http::TransportError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Any failure while sending a request or reading its response.
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: TransportError,
    },

    #[error("URI format error: {0}")]
    UriFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Wrap a failure as a request error, keeping it as the source.
    pub fn request(source: impl Into<TransportError>) -> Self {
        let source = source.into();
        AppError::Request {
            message: source.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_request_error_keeps_message_and_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = AppError::request(io);

        assert_eq!(err.to_string(), "connection refused");
        let source = err.source().expect("source should be preserved");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("source should be the original io::Error");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionRefused);
    }
}
