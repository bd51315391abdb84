//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for jobs, update payloads, and search
//! filters. These fixtures are designed to be consistent and predictable
//! for unit tests.

use rust_decimal_macros::dec;

use domain_job::{JobFilter, JobPatch, NewJob};

use crate::builders::TestJobBuilder;

/// Canned job data
pub struct JobFixtures;

impl JobFixtures {
    /// A salaried engineering role with no equity
    pub fn engineer() -> NewJob {
        TestJobBuilder::new().build()
    }

    /// A low-salary role with no equity
    pub fn intern() -> NewJob {
        TestJobBuilder::new()
            .with_title("Intern")
            .with_salary(30_000)
            .build()
    }

    /// An unsalaried founding role paid mostly in equity
    pub fn founder() -> NewJob {
        TestJobBuilder::new()
            .with_title("Founding Engineer")
            .without_salary()
            .with_equity(dec!(0.15))
            .with_company_handle("startup")
            .build()
    }
}

/// Canned partial-update payloads
pub struct PatchFixtures;

impl PatchFixtures {
    /// Raises the salary only
    pub fn salary_bump() -> JobPatch {
        JobPatch::default().with_salary(95_000)
    }

    /// Retitles and regrades in one payload
    pub fn retitle() -> JobPatch {
        JobPatch::default()
            .with_title("Senior Engineer")
            .with_salary(140_000)
    }

    /// Touches every mutable field
    pub fn full() -> JobPatch {
        JobPatch::default()
            .with_title("Staff Engineer")
            .with_salary(180_000)
            .with_equity(dec!(0.02))
    }
}

/// Canned search filters
pub struct FilterFixtures;

impl FilterFixtures {
    /// Case-insensitive title search
    pub fn title(substring: &str) -> JobFilter {
        JobFilter::default().with_title_contains(substring)
    }

    /// Salaries strictly above 100k
    pub fn high_salary() -> JobFilter {
        JobFilter::default().with_min_salary(100_000)
    }

    /// Jobs granting any equity
    pub fn equity_only() -> JobFilter {
        JobFilter::default().with_has_equity(true)
    }

    /// All three criteria combined
    pub fn combined() -> JobFilter {
        JobFilter::default()
            .with_title_contains("engineer")
            .with_min_salary(100_000)
            .with_has_equity(true)
    }
}
