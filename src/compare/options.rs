//! Tunables for content comparison.

use regex::Regex;

/// Options for [`compare_with`](super::compare_with).
///
/// The default options compare every attribute.
#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    ignore_attributes: Vec<Regex>,
}

impl CompareOptions {
    /// Build options that skip attributes whose names match any of `patterns`.
    pub fn ignoring(patterns: &[String]) -> Result<Self, regex::Error> {
        let ignore_attributes = patterns
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { ignore_attributes })
    }

    /// Whether `name` is excluded from content comparison.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore_attributes.iter().any(|re| re.is_match(name))
    }
}
