use arena_core::ActuationCommand;

/// Status travelling along the cursor.
///
/// `Evaluating` only moves down (parent to child), `Success`/`Failure` only move up, and
/// `Action` ends the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success,
    Failure,
    Evaluating,
    Action,
}

/// Terminal result a node reports to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Success,
    Failure,
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success => Status::Success,
            Outcome::Failure => Status::Failure,
        }
    }
}

/// Where a control node sends the cursor next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Enter the child at this index with `Evaluating`.
    Down(usize),
    /// Report to the parent. The node has already reset itself.
    Up(Outcome),
}

/// What a leaf does on one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskStatus {
    /// Still running; this is the command for the tick.
    Action(ActuationCommand),
    Success,
    Failure,
}

impl TaskStatus {
    pub fn from_bool(ok: bool) -> Self {
        if ok {
            TaskStatus::Success
        } else {
            TaskStatus::Failure
        }
    }
}
