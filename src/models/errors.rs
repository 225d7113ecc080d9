use thiserror::Error;

/// Errors raised by the tournament's outer surface.
///
/// The simulations themselves never fail; only talking to the terminal can.
#[derive(Debug, Error)]
pub enum GamesError {
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GamesError
pub type GamesResult<T> = Result<T, GamesError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_convert_and_display() {
        let err: GamesError = io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into();
        assert_eq!(err.to_string(), "I/O error: stdin closed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
