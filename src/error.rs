//! Unified error type.

use std::fmt;
use std::path::PathBuf;

/// The error type returned by trellis's fallible operations.
///
/// Application-level outcomes (404, 405, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// startup and infrastructure failures: a bad configuration value, a page
/// that cannot be loaded, binding to a port or accepting a connection.
#[derive(Debug)]
pub enum Error {
    /// Socket-level failure.
    Io(std::io::Error),
    /// A page could not be read or does not have the expected shape.
    Template { path: PathBuf, reason: String },
    /// An environment value could not be parsed.
    Config { key: &'static str, value: String, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Template { path, reason } => {
                write!(f, "template {}: {reason}", path.display())
            }
            Self::Config { key, value, reason } => {
                write!(f, "config {key}={value:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Template { .. } | Self::Config { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_source() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken"));
        assert_eq!(err.to_string(), "io: taken");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn config_errors_name_the_key() {
        let err = Error::Config {
            key: "TRELLIS_ADDR",
            value: "nope".to_owned(),
            reason: "invalid socket address syntax".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            r#"config TRELLIS_ADDR="nope": invalid socket address syntax"#
        );
    }
}
