//! Behavior tree evaluator.
//!
//! Unlike a tree that is re-ticked from the root, [`BehaviorTree`] keeps a cursor on the node it
//! was resolving when the last tick produced an action and resumes there on the next tick. Only
//! leaves ([`Task`]) can produce an action; control nodes only route the cursor up and down.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod nodes;
pub mod status;
pub mod task;
pub mod tree;

pub use error::BtError;
pub use nodes::{
    AlwaysFailure, AlwaysSuccess, Control, Inverter, RepeatUntilFailure, RepeatUntilSuccess,
    RepeatXTimes, Selector, Sequence, TryXTimes,
};
pub use status::{Flow, Outcome, Status, TaskStatus};
pub use task::{Condition, Task};
pub use tree::{BehaviorTree, NodeId, TreeNode, DEFAULT_MAX_STEPS};
