//! Crate error type
//!
//! Configuration errors exit with status 2, terminal failures with 1.

use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// A configuration value was rejected before reaching the game
    InvalidConfiguration {
        option: &'static str,
        value: String,
        reason: &'static str,
    },
    /// Writing to or configuring the terminal failed
    Terminal(io::Error),
}

impl Error {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfiguration { .. } => 2,
            Self::Terminal(_) => 1,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                option,
                value,
                reason,
            } => write!(f, "invalid configuration: {option}={value:?} ({reason})"),
            Self::Terminal(err) => write!(f, "terminal error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Terminal(err) => Some(err),
            Self::InvalidConfiguration { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Terminal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_option_and_value() {
        let err = Error::InvalidConfiguration {
            option: "framerate",
            value: "fast".to_string(),
            reason: "not a number",
        };
        assert_eq!(
            err.to_string(),
            "invalid configuration: framerate=\"fast\" (not a number)"
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_io_errors_convert() {
        let err: Error = io::Error::other("closed").into();
        assert!(matches!(err, Error::Terminal(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
