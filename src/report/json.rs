//! JSON report output.

use super::model::Report;
use crate::error::{BtDiffError, Result};

/// Serialize a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| BtDiffError::UserError(format!("failed to serialize report: {}", e)))
}
