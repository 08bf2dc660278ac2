use thiserror::Error;

use crate::transport::TransportError;

/// Failure of one betting call.
///
/// Serialization and deserialization failures are raised here; transport
/// failures are carried through untouched.
#[derive(Error, Debug)]
pub enum BettingError {
    /// The request envelope could not be encoded. Nothing was sent.
    #[error("failed to encode {method} request: {source}")]
    Serialization {
        method: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The reply did not match the expected result shape.
    #[error("failed to decode {method} response: {source}")]
    Deserialization {
        method: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BettingError {
    pub fn is_transport(&self) -> bool {
        matches!(self, BettingError::Transport(_))
    }

    /// The transport failure, if that is what this is.
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            BettingError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
