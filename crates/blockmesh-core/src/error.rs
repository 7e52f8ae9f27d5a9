//! Error types for blockmesh.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A block identifier that cannot be decoded
    #[error("Invalid identifier `{token}`: {fault}")]
    InvalidIdentifier {
        /// The offending token, verbatim
        token: String,
        /// What is wrong with it
        fault: IdentifierFault,
    },

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Build an [`Error::InvalidIdentifier`] for `token`.
    pub fn invalid_identifier(token: impl Into<String>, fault: IdentifierFault) -> Self {
        Self::InvalidIdentifier {
            token: token.into(),
            fault,
        }
    }

    /// The identifier fault, if this is an [`Error::InvalidIdentifier`].
    pub const fn fault(&self) -> Option<&IdentifierFault> {
        match self {
            Self::InvalidIdentifier { fault, .. } => Some(fault),
            _ => None,
        }
    }
}

/// Reasons a block identifier is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierFault {
    /// Nothing to decode
    #[error("token is empty")]
    Empty,

    /// Delimited token does not start with the grammar's marker
    #[error("expected marker `{0}`")]
    MissingMarker(String),

    /// A character that is not `0`..`7` where a digit was expected
    #[error("`{found}` at position {position} is not an octal digit")]
    NotOctal {
        /// The character found
        found: char,
        /// Character index within the token
        position: usize,
    },

    /// Delimited token without its separator
    #[error("missing separator `{0}`")]
    MissingSeparator(char),

    /// More digits than the deepest supported level
    #[error("depth {depth} exceeds maximum level {max}")]
    TooDeep {
        /// Number of digits in the token
        depth: usize,
        /// Deepest supported level
        max: u32,
    },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
