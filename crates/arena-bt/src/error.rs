use arena_core::PolicyError;
use thiserror::Error;

/// Faults in the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BtError {
    #[error("`{node}` needs at least one child")]
    EmptyComposite { node: &'static str },

    #[error("`{node}` takes exactly {expected} child, got {found}")]
    ChildCount {
        node: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("`{node}` repeat count must be positive")]
    ZeroCount { node: &'static str },

    #[error("resolution step budget must be positive")]
    ZeroStepBudget,

    #[error("`{node}` routed to missing child {index}")]
    MissingChild { node: &'static str, index: usize },

    #[error("tree did not settle within {steps} resolution steps")]
    StepBudget { steps: usize },
}

impl From<BtError> for PolicyError {
    fn from(err: BtError) -> Self {
        match err {
            BtError::StepBudget { steps } => PolicyError::TreeStepBudget { steps },
            other => PolicyError::MalformedTree(other.to_string()),
        }
    }
}
