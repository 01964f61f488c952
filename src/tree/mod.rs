//! Behavior-tree model.
//!
//! A tree is built once from [`NodeBuilder`]s and is immutable afterwards.
//! Construction assigns every node its depth and a canonical path, which the
//! diff engine uses as the node's primary key:
//!
//! ```text
//! BehaviorTree
//! BehaviorTree/Sequence[0]
//! BehaviorTree/Sequence[0]/Action[@ID='OpenGripper']
//! BehaviorTree/Sequence[0]/Delay[0]
//! ```

mod document;
mod kind;
mod node;
mod outline;
mod stats;


pub use document::{DEFAULT_TREE_NAME, Document};
pub use kind::NodeKind;
pub use node::{ID_ATTRIBUTE, Node, NodeBuilder, PreOrder};
pub use outline::render_outline;
pub use stats::{DocumentStats, TreeStats};
