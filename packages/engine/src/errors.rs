//! Engine error type.

use thiserror::Error;

/// Domain error for every fallible engine operation.
///
/// Preconditions are checked before any mutation, so a returned error means
/// the game state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The action exists but is not legal for this player right now.
    #[error("{detail}")]
    IllegalAction { detail: String },

    /// The action name is not part of the game's vocabulary.
    #[error("({action}) is not a valid action.")]
    UnknownAction { action: String },

    /// The state key does not exist or is not available in the current phase.
    #[error("state ({key}) is unavailable")]
    UnavailableState { key: String },

    /// Action parameters are missing, mistyped, or out of range.
    #[error("{detail}")]
    InvalidParameter { detail: String },

    /// A component-level precondition was violated.
    #[error("{detail}")]
    ProtocolViolation { detail: String },

    /// The named player is not seated at this game.
    #[error("{name} is not a member of the current game.")]
    UnknownPlayer { name: String },

    /// The game was constructed with unusable inputs.
    #[error("{detail}")]
    InvalidConfiguration { detail: String },
}

impl GameError {
    pub fn illegal_action(detail: impl Into<String>) -> Self {
        GameError::IllegalAction {
            detail: detail.into(),
        }
    }

    pub fn unknown_action(action: impl Into<String>) -> Self {
        GameError::UnknownAction {
            action: action.into(),
        }
    }

    pub fn unavailable_state(key: impl Into<String>) -> Self {
        GameError::UnavailableState { key: key.into() }
    }

    pub fn invalid_parameter(detail: impl Into<String>) -> Self {
        GameError::InvalidParameter {
            detail: detail.into(),
        }
    }

    pub fn protocol(detail: impl Into<String>) -> Self {
        GameError::ProtocolViolation {
            detail: detail.into(),
        }
    }

    pub fn unknown_player(name: impl Into<String>) -> Self {
        GameError::UnknownPlayer { name: name.into() }
    }

    pub fn invalid_configuration(detail: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            detail: detail.into(),
        }
    }
}
