//! btdiff: structural diff for BehaviorTree.CPP XML files.
//!
//! The core is [`compare::compare`], which classifies every node of two trees
//! as added, removed, modified, unchanged or moved. The other modules parse
//! XML into trees, pick which tree to compare, and render reports.

pub mod cli;
pub mod commands;
pub mod compare;
pub mod config;
pub mod document_diff;
pub mod error;
pub mod exit_codes;
pub mod logging;
pub mod parser;
pub mod report;
pub mod select;
pub mod tree;

#[cfg(test)]
pub(crate) mod test_support;
