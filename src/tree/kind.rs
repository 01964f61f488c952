//! Node classification by tag name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Control-flow tags: nodes that tick their children in some order.
const CONTROL_TAGS: &[&str] = &[
    "Sequence",
    "Selector",
    "Fallback",
    "Parallel",
    "ReactiveSequence",
    "ReactiveFallback",
    "IfThenElse",
    "WhileDoElse",
    "ForEach",
    "Switch",
    "StatefulActionNode",
    "Control",
    "MultiRobotControl",
];

/// Decorator tags: nodes that wrap and modify a single child.
const DECORATOR_TAGS: &[&str] = &[
    "Inverter",
    "ForceSuccess",
    "ForceFailure",
    "Repeat",
    "Retry",
    "Timeout",
    "Delay",
    "BlackboardPrecondition",
    "KeepRunningUntilFailure",
    "Decorator",
    "ReportFailure",
    "RetryUntilSuccessful",
    "BlackboardPostCheckString",
    "BlackboardPostCheckInt",
    "BlackboardPostCheckBool",
];

const SUBTREE_TAG: &str = "SubTree";
const CONDITION_TAG: &str = "Condition";
const ACTION_PREFIX: &str = "Action";
const ALWAYS_SUCCESS: &str = "AlwaysSuccess";
const ALWAYS_FAILURE: &str = "AlwaysFailure";

/// Category of a behavior-tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Control,
    Action,
    Condition,
    Decorator,
    Subtree,
}

impl NodeKind {
    /// Classify a tag name.
    ///
    /// Unknown tags are treated as custom leaf actions.
    #[allow(clippy::if_same_then_else)]
    pub fn classify(tag: &str) -> Self {
        if CONTROL_TAGS.contains(&tag) {
            NodeKind::Control
        } else if DECORATOR_TAGS.contains(&tag) {
            NodeKind::Decorator
        } else if tag == SUBTREE_TAG {
            NodeKind::Subtree
        } else if tag == CONDITION_TAG {
            NodeKind::Condition
        } else if tag.starts_with(ACTION_PREFIX) || tag == ALWAYS_SUCCESS || tag == ALWAYS_FAILURE
        {
            NodeKind::Action
        } else {
            NodeKind::Action
        }
    }

    /// Lowercase label used in signatures and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Control => "control",
            NodeKind::Action => "action",
            NodeKind::Condition => "condition",
            NodeKind::Decorator => "decorator",
            NodeKind::Subtree => "subtree",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
