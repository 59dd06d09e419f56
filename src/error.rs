//! Crate-level error types.

use std::fmt;

/// Errors produced by the devorient crate.
///
/// The orientation controls themselves never fail; these cover the
/// surrounding surfaces (options files, replay traces, platform setup).
#[derive(Debug)]
pub enum DevorientError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Malformed replay trace line.
    Trace {
        /// 1-based line number in the trace.
        line: usize,
        /// Parser message.
        message: String,
    },
    /// Host platform refused an operation (listener registration, etc.).
    Platform(String),
}

impl fmt::Display for DevorientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Trace { line, message } => {
                write!(f, "trace error on line {line}: {message}")
            }
            Self::Platform(msg) => write!(f, "platform error: {msg}"),
        }
    }
}

impl std::error::Error for DevorientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DevorientError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_error_names_line() {
        let err = DevorientError::Trace {
            line: 7,
            message: "unknown variant".into(),
        };
        assert_eq!(err.to_string(), "trace error on line 7: unknown variant");
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error;
        let err = DevorientError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(DevorientError::OptionsParse("x".into()).source().is_none());
    }
}
