//! Crate-level error types.

use std::fmt;

use crate::slot::SlotId;

/// Errors produced by the vitrine crate.
#[derive(Debug)]
pub enum CarouselError {
    /// `initialize` called on a carousel that is already initialized.
    AlreadyInitialized,
    /// A slot id that does not belong to this carousel.
    UnknownSlot(SlotId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options/content parsing or serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyInitialized => {
                write!(f, "carousel has already been initialized")
            }
            Self::UnknownSlot(id) => write!(f, "unknown display slot {id}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CarouselError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CarouselError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
