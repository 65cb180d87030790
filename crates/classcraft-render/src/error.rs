//! Error types for breakpoint configuration.
//!
//! Chaining and rendering never fail: unsupported payloads are skipped
//! silently in the mode that cannot express them. Errors only exist at the
//! configuration boundary, when a breakpoint token table is loaded from a
//! file or a string.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::breakpoint::Breakpoint;

/// Error returned when a breakpoint token table cannot be loaded or is invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The YAML or JSON source could not be deserialized.
    #[error("failed to parse breakpoint tokens{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the deserializer.
        message: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token would produce a malformed class name.
    #[error("invalid token '{token}' for breakpoint '{breakpoint}': {reason}")]
    InvalidToken {
        breakpoint: Breakpoint,
        token: String,
        reason: &'static str,
    },

    /// The file extension does not name a supported format.
    #[error("unsupported config format for {} (expected .yaml, .yml or .json)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A breakpoint name did not match any known breakpoint.
    #[error("unknown breakpoint '{0}'")]
    UnknownBreakpoint(String),
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p: &Path| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_without_path() {
        let err = ConfigError::Parse {
            path: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "failed to parse breakpoint tokens: bad indent");
    }

    #[test]
    fn parse_error_with_path() {
        let err = ConfigError::Parse {
            path: Some(PathBuf::from("tokens.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("in tokens.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn invalid_token_names_breakpoint() {
        let err = ConfigError::InvalidToken {
            breakpoint: Breakpoint::Laptop,
            token: "m d".to_string(),
            reason: "contains whitespace",
        };
        let msg = err.to_string();
        assert!(msg.contains("'m d'"));
        assert!(msg.contains("laptop"));
    }

    #[test]
    fn load_error_exposes_source() {
        use std::error::Error as _;

        let err = ConfigError::Load {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.yaml"));
    }
}
