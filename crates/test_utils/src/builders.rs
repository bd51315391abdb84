//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use rust_decimal::Decimal;

use domain_job::NewJob;

/// Builder for constructing test job data
pub struct TestJobBuilder {
    title: String,
    salary: Option<i64>,
    equity: Option<Decimal>,
    company_handle: String,
}

impl Default for TestJobBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestJobBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            title: "Software Engineer".to_string(),
            salary: Some(100_000),
            equity: None,
            company_handle: "acme".to_string(),
        }
    }

    /// Sets the job title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the salary
    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    /// Clears the salary
    pub fn without_salary(mut self) -> Self {
        self.salary = None;
        self
    }

    /// Sets the equity share
    pub fn with_equity(mut self, equity: Decimal) -> Self {
        self.equity = Some(equity);
        self
    }

    /// Sets the company handle
    pub fn with_company_handle(mut self, handle: impl Into<String>) -> Self {
        self.company_handle = handle.into();
        self
    }

    /// Builds the `NewJob`
    pub fn build(self) -> NewJob {
        NewJob {
            title: self.title,
            salary: self.salary,
            equity: self.equity,
            company_handle: self.company_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_builder_defaults_are_valid() {
        let job = TestJobBuilder::new().build();
        assert!(job.validate().is_ok());
        assert_eq!(job.company_handle, "acme");
    }

    #[test]
    fn test_builder_overrides() {
        let job = TestJobBuilder::new()
            .with_title("Founder")
            .without_salary()
            .with_equity(dec!(0.5))
            .build();

        assert_eq!(job.title, "Founder");
        assert_eq!(job.salary, None);
        assert_eq!(job.equity, Some(dec!(0.5)));
    }
}
