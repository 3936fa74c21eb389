//! Crate-level error types.

use std::fmt;

/// Errors produced by the interpose crate.
///
/// The interpolation hot path never errors; every failure there degrades to
/// a silent no-op. The variants below only surface from configuration
/// preset I/O.
#[derive(Debug)]
pub enum InterpError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML config parsing/serialization failure.
    ConfigParse(String),
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => {
                write!(f, "config parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for InterpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(_) => None,
        }
    }
}

impl From<std::io::Error> for InterpError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
