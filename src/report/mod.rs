//! Diff reports.
//!
//! Results are first copied into a [`Report`], then rendered either as plain
//! text ([`render_text`]) or as JSON ([`render_json`]).

mod json;
mod model;
mod summary;
mod text;


pub use json::render_json;
pub use model::{ChangeRecord, Report, Sources, SubtreeRefRecord, TreeReport};
pub use summary::Summary;
pub use text::{format_change, format_node_info, render_text};
