use compact_str::CompactString;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CountdownError>;

#[derive(Debug, Clone, Error)]
pub enum CountdownError {
    #[error("Failure reading configuration file: {0}")]
    ConfigError(CompactString),
    #[error("Invalid target timestamp: {0}")]
    InvalidTarget(CompactString),
    #[error("Invalid duration: {0}")]
    InvalidDuration(CompactString),
    #[error("Terminal error: {0}")]
    Terminal(CompactString),

    #[error("{0}")]
    GeneralError(CompactString),
}

impl From<std::io::Error> for CountdownError {
    fn from(e: std::io::Error) -> Self {
        CountdownError::Terminal(e.to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CountdownError::InvalidTarget("tomorrow-ish".into());
        assert_eq!(err.to_string(), "Invalid target timestamp: tomorrow-ish");

        let err = CountdownError::GeneralError("boom".into());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_io_error_maps_to_terminal() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "no tty");
        let err: CountdownError = io.into();
        assert!(matches!(err, CountdownError::Terminal(_)));
    }
}
