//! Control nodes: composites and decorators.
//!
//! Each node is a tiny state machine over the [`Status`] arriving at it. Entering with
//! `Evaluating` starts it; `Success`/`Failure` are its child's report. Whenever a node answers
//! [`Flow::Up`] it has already put its own state back to the construction value.

use crate::status::{Flow, Outcome, Status};

/// Runs children in order; fails fast on the first failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    current: usize,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, input: Status, children: usize) -> Flow {
        match input {
            Status::Evaluating => {
                self.current = 0;
                Flow::Down(0)
            }
            Status::Failure => {
                self.reset();
                Flow::Up(Outcome::Failure)
            }
            Status::Success | Status::Action => {
                self.current += 1;
                if self.current < children {
                    Flow::Down(self.current)
                } else {
                    self.reset();
                    Flow::Up(Outcome::Success)
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Tries children in order; succeeds on the first success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    current: usize,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, input: Status, children: usize) -> Flow {
        match input {
            Status::Evaluating => {
                self.current = 0;
                Flow::Down(0)
            }
            Status::Success | Status::Action => {
                self.reset();
                Flow::Up(Outcome::Success)
            }
            Status::Failure => {
                self.current += 1;
                if self.current < children {
                    Flow::Down(self.current)
                } else {
                    self.reset();
                    Flow::Up(Outcome::Failure)
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inverter;

impl Inverter {
    pub fn resolve(&mut self, input: Status) -> Flow {
        match input {
            Status::Evaluating => Flow::Down(0),
            Status::Success | Status::Action => Flow::Up(Outcome::Failure),
            Status::Failure => Flow::Up(Outcome::Success),
        }
    }
}

/// Runs the child `times` times whatever it reports, then succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatXTimes {
    times: u32,
    done: u32,
}

impl RepeatXTimes {
    pub fn new(times: u32) -> Self {
        Self { times, done: 0 }
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn resolve(&mut self, input: Status) -> Flow {
        if input == Status::Evaluating {
            return Flow::Down(0);
        }
        self.done += 1;
        if self.done >= self.times {
            self.reset();
            Flow::Up(Outcome::Success)
        } else {
            Flow::Down(0)
        }
    }

    pub fn reset(&mut self) {
        self.done = 0;
    }
}

/// Runs the child until it succeeds, giving up after `times` failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryXTimes {
    times: u32,
    failures: u32,
}

impl TryXTimes {
    pub fn new(times: u32) -> Self {
        Self { times, failures: 0 }
    }

    pub fn times(&self) -> u32 {
        self.times
    }

    pub fn resolve(&mut self, input: Status) -> Flow {
        match input {
            Status::Evaluating => Flow::Down(0),
            Status::Success | Status::Action => {
                self.reset();
                Flow::Up(Outcome::Success)
            }
            Status::Failure => {
                self.failures += 1;
                if self.failures >= self.times {
                    self.reset();
                    Flow::Up(Outcome::Failure)
                } else {
                    Flow::Down(0)
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.failures = 0;
    }
}

/// Loops the child until it fails, then succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatUntilFailure;

impl RepeatUntilFailure {
    pub fn resolve(&mut self, input: Status) -> Flow {
        match input {
            Status::Failure => Flow::Up(Outcome::Success),
            _ => Flow::Down(0),
        }
    }
}

/// Loops the child until it succeeds, then succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepeatUntilSuccess;

impl RepeatUntilSuccess {
    pub fn resolve(&mut self, input: Status) -> Flow {
        match input {
            Status::Success | Status::Action => Flow::Up(Outcome::Success),
            _ => Flow::Down(0),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlwaysSuccess;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlwaysFailure;

fn forced(input: Status, outcome: Outcome) -> Flow {
    match input {
        Status::Evaluating => Flow::Down(0),
        _ => Flow::Up(outcome),
    }
}

/// The closed set of control nodes a tree is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Sequence(Sequence),
    Selector(Selector),
    Inverter(Inverter),
    RepeatXTimes(RepeatXTimes),
    TryXTimes(TryXTimes),
    RepeatUntilFailure(RepeatUntilFailure),
    RepeatUntilSuccess(RepeatUntilSuccess),
    AlwaysSuccess(AlwaysSuccess),
    AlwaysFailure(AlwaysFailure),
}

impl Control {
    pub fn name(&self) -> &'static str {
        match self {
            Control::Sequence(_) => "Sequence",
            Control::Selector(_) => "Selector",
            Control::Inverter(_) => "Inverter",
            Control::RepeatXTimes(_) => "RepeatXTimes",
            Control::TryXTimes(_) => "TryXTimes",
            Control::RepeatUntilFailure(_) => "RepeatUntilFailure",
            Control::RepeatUntilSuccess(_) => "RepeatUntilSuccess",
            Control::AlwaysSuccess(_) => "AlwaysSuccess",
            Control::AlwaysFailure(_) => "AlwaysFailure",
        }
    }

    /// Composites take any positive number of children; decorators exactly one.
    pub fn is_composite(&self) -> bool {
        matches!(self, Control::Sequence(_) | Control::Selector(_))
    }

    /// Repeat count, for the counting decorators.
    pub fn count(&self) -> Option<u32> {
        match self {
            Control::RepeatXTimes(n) => Some(n.times()),
            Control::TryXTimes(n) => Some(n.times()),
            _ => None,
        }
    }

    pub fn resolve(&mut self, input: Status, children: usize) -> Flow {
        match self {
            Control::Sequence(n) => n.resolve(input, children),
            Control::Selector(n) => n.resolve(input, children),
            Control::Inverter(n) => n.resolve(input),
            Control::RepeatXTimes(n) => n.resolve(input),
            Control::TryXTimes(n) => n.resolve(input),
            Control::RepeatUntilFailure(n) => n.resolve(input),
            Control::RepeatUntilSuccess(n) => n.resolve(input),
            Control::AlwaysSuccess(_) => forced(input, Outcome::Success),
            Control::AlwaysFailure(_) => forced(input, Outcome::Failure),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Control::Sequence(n) => n.reset(),
            Control::Selector(n) => n.reset(),
            Control::RepeatXTimes(n) => n.reset(),
            Control::TryXTimes(n) => n.reset(),
            Control::Inverter(_)
            | Control::RepeatUntilFailure(_)
            | Control::RepeatUntilSuccess(_)
            | Control::AlwaysSuccess(_)
            | Control::AlwaysFailure(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(node: &mut Control, children: usize, reports: &[Status]) -> Vec<Flow> {
        let mut flows = vec![node.resolve(Status::Evaluating, children)];
        for r in reports {
            flows.push(node.resolve(*r, children));
        }
        flows
    }

    #[test]
    fn sequence_walks_children_then_succeeds() {
        let mut seq = Control::Sequence(Sequence::new());
        let flows = drive(&mut seq, 3, &[Status::Success, Status::Success, Status::Success]);
        assert_eq!(
            flows,
            vec![
                Flow::Down(0),
                Flow::Down(1),
                Flow::Down(2),
                Flow::Up(Outcome::Success)
            ]
        );
        assert_eq!(seq, Control::Sequence(Sequence::new()));
    }

    #[test]
    fn sequence_fails_fast_and_resets() {
        let mut seq = Control::Sequence(Sequence::new());
        let flows = drive(&mut seq, 3, &[Status::Success, Status::Failure]);
        assert_eq!(flows.last(), Some(&Flow::Up(Outcome::Failure)));
        assert_eq!(seq, Control::Sequence(Sequence::new()));
    }

    #[test]
    fn selector_succeeds_on_first_success_and_fails_when_exhausted() {
        let mut sel = Control::Selector(Selector::new());
        let flows = drive(&mut sel, 3, &[Status::Failure, Status::Success]);
        assert_eq!(flows, vec![Flow::Down(0), Flow::Down(1), Flow::Up(Outcome::Success)]);
        assert_eq!(sel, Control::Selector(Selector::new()));

        let flows = drive(&mut sel, 2, &[Status::Failure, Status::Failure]);
        assert_eq!(flows.last(), Some(&Flow::Up(Outcome::Failure)));
        assert_eq!(sel, Control::Selector(Selector::new()));
    }

    #[test]
    fn inverter_swaps_outcomes() {
        let mut inv = Control::Inverter(Inverter);
        assert_eq!(inv.resolve(Status::Evaluating, 1), Flow::Down(0));
        assert_eq!(inv.resolve(Status::Success, 1), Flow::Up(Outcome::Failure));
        assert_eq!(inv.resolve(Status::Failure, 1), Flow::Up(Outcome::Success));
    }

    #[test]
    fn repeat_runs_child_exactly_x_times() {
        let mut rep = Control::RepeatXTimes(RepeatXTimes::new(3));
        let flows = drive(&mut rep, 1, &[Status::Failure, Status::Success, Status::Failure]);
        assert_eq!(
            flows,
            vec![
                Flow::Down(0),
                Flow::Down(0),
                Flow::Down(0),
                Flow::Up(Outcome::Success)
            ]
        );
        assert_eq!(rep, Control::RepeatXTimes(RepeatXTimes::new(3)));
    }

    #[test]
    fn try_gives_up_after_x_failures_and_resets_on_success() {
        let mut tr = Control::TryXTimes(TryXTimes::new(2));
        let flows = drive(&mut tr, 1, &[Status::Failure, Status::Failure]);
        assert_eq!(flows.last(), Some(&Flow::Up(Outcome::Failure)));
        assert_eq!(tr, Control::TryXTimes(TryXTimes::new(2)));

        let flows = drive(&mut tr, 1, &[Status::Failure, Status::Success]);
        assert_eq!(flows.last(), Some(&Flow::Up(Outcome::Success)));
        assert_eq!(tr, Control::TryXTimes(TryXTimes::new(2)));
    }

    #[test]
    fn loops_stop_on_their_terminal_status() {
        let mut until_fail = Control::RepeatUntilFailure(RepeatUntilFailure);
        assert_eq!(until_fail.resolve(Status::Success, 1), Flow::Down(0));
        assert_eq!(until_fail.resolve(Status::Failure, 1), Flow::Up(Outcome::Success));

        let mut until_ok = Control::RepeatUntilSuccess(RepeatUntilSuccess);
        assert_eq!(until_ok.resolve(Status::Failure, 1), Flow::Down(0));
        assert_eq!(until_ok.resolve(Status::Success, 1), Flow::Up(Outcome::Success));
    }

    #[test]
    fn forced_outcomes_ignore_the_child() {
        let mut ok = Control::AlwaysSuccess(AlwaysSuccess);
        assert_eq!(ok.resolve(Status::Evaluating, 1), Flow::Down(0));
        assert_eq!(ok.resolve(Status::Failure, 1), Flow::Up(Outcome::Success));

        let mut fail = Control::AlwaysFailure(AlwaysFailure);
        assert_eq!(fail.resolve(Status::Success, 1), Flow::Up(Outcome::Failure));
    }
}
