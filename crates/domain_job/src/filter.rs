//! Job search filters
//!
//! Optional criteria for listing jobs. Absent criteria contribute nothing to
//! the final query; an entirely empty filter means an unfiltered scan.

use serde::{Deserialize, Serialize};

/// Optional search criteria for listing jobs.
///
/// - `title_contains`: case-insensitive substring match on the title
/// - `min_salary`: strict (exclusive) lower bound on salary
/// - `has_equity`: when `Some(true)`, only jobs with equity greater than zero;
///   `Some(false)` and `None` both leave equity unconstrained. The flag is a
///   strict boolean, not a presence check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobFilter {
    pub title_contains: Option<String>,
    pub min_salary: Option<i64>,
    pub has_equity: Option<bool>,
}

impl JobFilter {
    /// Filters by case-insensitive title substring
    pub fn with_title_contains(mut self, substring: impl Into<String>) -> Self {
        self.title_contains = Some(substring.into());
        self
    }

    /// Filters to salaries strictly greater than the given bound
    pub fn with_min_salary(mut self, min_salary: i64) -> Self {
        self.min_salary = Some(min_salary);
        self
    }

    /// Filters to jobs with equity greater than zero (when `true`)
    pub fn with_has_equity(mut self, has_equity: bool) -> Self {
        self.has_equity = Some(has_equity);
        self
    }

    /// Returns true when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.title_contains.is_none() && self.min_salary.is_none() && self.has_equity != Some(true)
    }
}
