//! Per-kind change counts.

use crate::compare::{Change, ChangeKind};
use serde::Serialize;
use std::fmt;

/// Number of changes of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub moved: usize,
    pub unchanged: usize,
}

impl Summary {
    /// Count the changes of one tree.
    pub fn of(changes: &[Change<'_>]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change.kind() {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
                ChangeKind::Moved => summary.moved += 1,
                ChangeKind::Unchanged => summary.unchanged += 1,
            }
        }
        summary
    }

    /// Total number of non-`Unchanged` entries.
    pub fn changed(&self) -> usize {
        self.added + self.removed + self.modified + self.moved
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Added: {}", self.added)?;
        writeln!(f, "  Removed: {}", self.removed)?;
        writeln!(f, "  Modified: {}", self.modified)?;
        writeln!(f, "  Moved: {}", self.moved)?;
        write!(f, "  Unchanged: {}", self.unchanged)
    }
}
