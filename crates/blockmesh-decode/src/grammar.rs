//! Input grammars for block names.

use blockmesh_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Marker used by contiguous block names in mesh dumps.
pub const DEFAULT_PREFIX_MARKER: char = 'Z';
/// Marker opening delimited block names.
pub const DEFAULT_DELIMITED_MARKER: &str = "b#";
/// Separator inside delimited block names.
pub const DEFAULT_SEPARATOR: char = ':';

/// How a block name is written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grammar {
    /// A marker character followed by contiguous digits, e.g. `Z0172`.
    Prefixed {
        /// Leading character that picks names out of text. Decoding skips
        /// the first character without checking it.
        marker: char,
    },
    /// A marker, digits, a separator, digits, e.g. `b#12:34`.
    ///
    /// Digits on both sides of the separator form one path.
    Delimited {
        /// Leading marker, not part of the path
        marker: String,
        /// Single separator between the two digit runs
        separator: char,
    },
}

impl Default for Grammar {
    fn default() -> Self {
        Self::prefixed(DEFAULT_PREFIX_MARKER)
    }
}

impl Grammar {
    /// Prefixed grammar with the given marker.
    pub const fn prefixed(marker: char) -> Self {
        Self::Prefixed { marker }
    }

    /// Delimited grammar with the given marker and separator.
    pub fn delimited(marker: impl Into<String>, separator: char) -> Self {
        Self::Delimited {
            marker: marker.into(),
            separator,
        }
    }

    /// Delimited grammar with the `b#...:...` defaults.
    pub fn delimited_default() -> Self {
        Self::delimited(DEFAULT_DELIMITED_MARKER, DEFAULT_SEPARATOR)
    }

    /// Marker text for this grammar.
    pub fn marker(&self) -> String {
        match self {
            Self::Prefixed { marker } => marker.to_string(),
            Self::Delimited { marker, .. } => marker.clone(),
        }
    }

    /// Reject grammars whose markers could be mistaken for path digits.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Prefixed { marker } => {
                if marker.is_ascii_digit() || marker.is_whitespace() {
                    return Err(Error::InvalidConfig(format!(
                        "prefix marker `{marker}` must not be a digit or whitespace"
                    )));
                }
            }
            Self::Delimited { marker, separator } => {
                if marker.is_empty() {
                    return Err(Error::InvalidConfig(
                        "delimited marker must not be empty".into(),
                    ));
                }
                if marker.chars().any(char::is_whitespace) {
                    return Err(Error::InvalidConfig(format!(
                        "delimited marker `{marker}` must not contain whitespace"
                    )));
                }
                if separator.is_ascii_digit() || separator.is_whitespace() {
                    return Err(Error::InvalidConfig(format!(
                        "separator `{separator}` must not be a digit or whitespace"
                    )));
                }
            }
        }
        Ok(())
    }
}
