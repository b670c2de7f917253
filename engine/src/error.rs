use thiserror::Error;

/// Everything the engine can refuse to do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The raw character definition is missing a field or has the wrong shape.
    #[error("malformed character definition: {0}")]
    MalformedDefinition(String),

    #[error("'{0}' is not a valid damage type, submit a valid damage type or check the spelling of your request")]
    UnrecognizedDamageType(String),

    #[error("{action} amount must be zero or greater (got {amount})")]
    InvalidAmount { action: Action, amount: i32 },
}

/// The mutation an [`EngineError::InvalidAmount`] was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Heal,
    TempHp,
    Damage,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Action::Heal => "heal",
            Action::TempHp => "temporary hp",
            Action::Damage => "damage",
        })
    }
}

/// Reject negative amounts before anything is mutated.
pub(crate) fn non_negative(action: Action, amount: i32) -> Result<i32, EngineError> {
    if amount < 0 {
        Err(EngineError::InvalidAmount { action, amount })
    } else {
        Ok(amount)
    }
}
