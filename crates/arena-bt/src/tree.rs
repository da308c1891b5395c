use arena_core::{
    ActuationCommand, DebugEvent, DebugSink, Policy, PolicyError, TickContext, WorldSnapshot,
};

use crate::error::BtError;
use crate::nodes::{
    AlwaysFailure, AlwaysSuccess, Control, Inverter, RepeatUntilFailure, RepeatUntilSuccess,
    RepeatXTimes, Selector, Sequence, TryXTimes,
};
use crate::status::{Flow, Status, TaskStatus};
use crate::task::Task;

/// Resolution steps allowed per tick before the tree is declared stuck.
pub const DEFAULT_MAX_STEPS: usize = 256;

/// Index of a node in its tree. The root is always `NodeId(0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Owned description of a tree, consumed by [`BehaviorTree::new`].
pub enum TreeNode {
    Control {
        node: Control,
        children: Vec<TreeNode>,
    },
    Task(Box<dyn Task>),
}

impl TreeNode {
    pub fn task(task: impl Task) -> Self {
        TreeNode::Task(Box::new(task))
    }

    fn control(node: Control, children: Vec<TreeNode>) -> Self {
        TreeNode::Control { node, children }
    }

    pub fn sequence(children: Vec<TreeNode>) -> Self {
        Self::control(Control::Sequence(Sequence::new()), children)
    }

    pub fn selector(children: Vec<TreeNode>) -> Self {
        Self::control(Control::Selector(Selector::new()), children)
    }

    pub fn inverter(child: TreeNode) -> Self {
        Self::control(Control::Inverter(Inverter), vec![child])
    }

    pub fn repeat(times: u32, child: TreeNode) -> Self {
        Self::control(Control::RepeatXTimes(RepeatXTimes::new(times)), vec![child])
    }

    pub fn retry(times: u32, child: TreeNode) -> Self {
        Self::control(Control::TryXTimes(TryXTimes::new(times)), vec![child])
    }

    pub fn repeat_until_failure(child: TreeNode) -> Self {
        Self::control(Control::RepeatUntilFailure(RepeatUntilFailure), vec![child])
    }

    pub fn repeat_until_success(child: TreeNode) -> Self {
        Self::control(Control::RepeatUntilSuccess(RepeatUntilSuccess), vec![child])
    }

    pub fn always_success(child: TreeNode) -> Self {
        Self::control(Control::AlwaysSuccess(AlwaysSuccess), vec![child])
    }

    pub fn always_failure(child: TreeNode) -> Self {
        Self::control(Control::AlwaysFailure(AlwaysFailure), vec![child])
    }
}

enum Kind {
    Control(Control),
    Task(Box<dyn Task>),
}

struct Slot {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: Kind,
}

/// A behavior tree with a persistent cursor.
///
/// Nodes live in a flat arena; parents own their children by index, and going "up" is an
/// explicit lookup of the recorded parent index rather than a back pointer.
///
/// Each tick resumes at the cursor. Control nodes route it with [`Flow`]; the tick ends when a
/// task returns [`TaskStatus::Action`], whose command is returned and whose node keeps the
/// cursor. If the cursor walks off the root the tree is exhausted: it resets to the root and the
/// tick yields a neutral command.
pub struct BehaviorTree {
    slots: Vec<Slot>,
    cursor: NodeId,
    resume: Status,
    max_steps: usize,
}

impl BehaviorTree {
    /// Flattens and validates `root`.
    pub fn new(root: TreeNode) -> Result<Self, BtError> {
        let mut slots = Vec::new();
        Self::flatten(root, None, &mut slots)?;
        Ok(Self {
            slots,
            cursor: NodeId(0),
            resume: Status::Evaluating,
            max_steps: DEFAULT_MAX_STEPS,
        })
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Result<Self, BtError> {
        if max_steps == 0 {
            return Err(BtError::ZeroStepBudget);
        }
        self.max_steps = max_steps;
        Ok(self)
    }

    fn flatten(
        node: TreeNode,
        parent: Option<NodeId>,
        slots: &mut Vec<Slot>,
    ) -> Result<NodeId, BtError> {
        let id = NodeId(slots.len());
        match node {
            TreeNode::Task(task) => {
                slots.push(Slot {
                    parent,
                    children: Vec::new(),
                    kind: Kind::Task(task),
                });
            }
            TreeNode::Control { node, children } => {
                let name = node.name();
                if node.is_composite() {
                    if children.is_empty() {
                        return Err(BtError::EmptyComposite { node: name });
                    }
                } else if children.len() != 1 {
                    return Err(BtError::ChildCount {
                        node: name,
                        expected: 1,
                        found: children.len(),
                    });
                }
                if node.count() == Some(0) {
                    return Err(BtError::ZeroCount { node: name });
                }

                slots.push(Slot {
                    parent,
                    children: Vec::with_capacity(children.len()),
                    kind: Kind::Control(node),
                });
                for child in children {
                    let child_id = Self::flatten(child, Some(id), slots)?;
                    slots[id.0].children.push(child_id);
                }
            }
        }
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn is_at_root(&self) -> bool {
        self.cursor == NodeId(0)
    }

    /// Status the next tick will resume with: `Action` while a task is mid-flight, otherwise
    /// `Evaluating`.
    pub fn last_status(&self) -> Status {
        self.resume
    }

    /// Name of the node under the cursor.
    pub fn cursor_name(&self) -> &'static str {
        match self.slots.get(self.cursor.0).map(|s| &s.kind) {
            Some(Kind::Control(c)) => c.name(),
            Some(Kind::Task(t)) => t.name(),
            None => "",
        }
    }

    /// Returns every node in the subtree at `id` to its construction state.
    fn reset_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(NodeId(i)) = stack.pop() {
            let Some(slot) = self.slots.get_mut(i) else {
                continue;
            };
            match &mut slot.kind {
                Kind::Control(c) => c.reset(),
                Kind::Task(t) => t.reset(),
            }
            stack.extend(slot.children.iter().copied());
        }
    }

    /// Walks the cursor until a task acts, the tree is exhausted, or the step budget runs out.
    ///
    /// A task error resets the tree and is returned as-is.
    pub fn try_tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, PolicyError> {
        let mut status = self.resume;

        for _ in 0..self.max_steps {
            let id = self.cursor;
            let Some(slot) = self.slots.get_mut(id.0) else {
                self.reset();
                return Err(BtError::MissingChild {
                    node: "cursor",
                    index: id.0,
                }
                .into());
            };

            let outcome = match &mut slot.kind {
                Kind::Task(task) => {
                    let result = task.tick(ctx, world, debug);
                    match result {
                        Ok(TaskStatus::Action(cmd)) => {
                            self.resume = Status::Action;
                            debug.emit(DebugEvent::status(ctx.tick, task.name()));
                            return Ok(cmd);
                        }
                        Ok(TaskStatus::Success) => {
                            task.reset();
                            Status::Success
                        }
                        Ok(TaskStatus::Failure) => {
                            task.reset();
                            Status::Failure
                        }
                        Err(err) => {
                            self.reset();
                            return Err(err);
                        }
                    }
                }
                Kind::Control(node) => match node.resolve(status, slot.children.len()) {
                    Flow::Down(index) => {
                        let Some(&child) = slot.children.get(index) else {
                            let node = node.name();
                            self.reset();
                            return Err(BtError::MissingChild { node, index }.into());
                        };
                        self.cursor = child;
                        status = Status::Evaluating;
                        continue;
                    }
                    Flow::Up(outcome) => {
                        self.reset_subtree(id);
                        outcome.into()
                    }
                },
            };

            match self.slots[id.0].parent {
                Some(parent) => {
                    self.cursor = parent;
                    status = outcome;
                }
                None => {
                    tracing::trace!(tick = ctx.tick, ?outcome, "behavior tree exhausted");
                    self.reset();
                    return Ok(ActuationCommand::neutral());
                }
            }
        }

        let steps = self.max_steps;
        self.reset();
        Err(BtError::StepBudget { steps }.into())
    }

    pub fn reset(&mut self) {
        self.reset_subtree(NodeId(0));
        self.cursor = NodeId(0);
        self.resume = Status::Evaluating;
    }
}

impl Policy for BehaviorTree {
    fn tick(
        &mut self,
        ctx: &TickContext,
        world: &WorldSnapshot,
        debug: &mut dyn DebugSink,
    ) -> Result<ActuationCommand, PolicyError> {
        self.try_tick(ctx, world, debug)
    }

    fn reset(&mut self) {
        BehaviorTree::reset(self);
    }
}
