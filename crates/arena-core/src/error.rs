use thiserror::Error;

/// Static configuration that must be rejected before the bot starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena dimension `{name}` must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    #[error("ballistics parameter `{name}` is out of range: {value}")]
    InvalidBallistics { name: &'static str, value: f32 },

    #[error("`{name}` must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f32 },
}

/// A fault a policy could not recover from within one tick.
///
/// The [`Brain`](crate::Brain) logs these and substitutes a neutral command; they never reach
/// the host.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolicyError {
    #[error("choice `{choice}` failed: {message}")]
    Choice { choice: &'static str, message: String },

    #[error("behavior tree did not settle within {steps} resolution steps")]
    TreeStepBudget { steps: usize },

    #[error("behavior tree is malformed: {0}")]
    MalformedTree(String),
}
