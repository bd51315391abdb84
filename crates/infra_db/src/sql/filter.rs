//! WHERE clause construction for job search filters
//!
//! Converts an optional-criteria record into AND-composed predicates. Filter
//! values are bound as parameters; the only inline comparison is the fixed
//! `equity > 0`, which carries no caller data.

use domain_job::{FieldValue, JobFilter};

/// A WHERE clause with its positionally aligned bound values.
///
/// `sql` is empty when no criterion is active, so an empty filter produces an
/// unfiltered query with no `WHERE` keyword at all. Placeholder indices start
/// at the `first_placeholder` the clause was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub sql: String,
    pub values: Vec<FieldValue>,
}

impl WhereClause {
    /// Returns true when no predicate was generated
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Builds a WHERE clause from the given filter.
///
/// Predicates compose with `AND` in a fixed order: title substring, minimum
/// salary, equity flag.
///
/// - `title_contains` becomes `title ILIKE $n`, bound to `%<substring>%`
/// - `min_salary` becomes `salary > $n`, bound
/// - `has_equity == Some(true)` becomes `equity > 0` (fixed comparison,
///   no parameter)
///
/// `first_placeholder` is the index the first generated parameter should
/// take; callers composing this clause after other parameters are
/// responsible for passing the correct offset.
///
/// # Example
///
/// ```rust
/// use domain_job::JobFilter;
/// use infra_db::sql::build_where_clause;
///
/// let filter = JobFilter::default().with_title_contains("dev").with_has_equity(true);
/// let clause = build_where_clause(&filter, 1);
/// assert_eq!(clause.sql, "WHERE title ILIKE $1 AND equity > 0");
/// assert_eq!(clause.values.len(), 1);
/// ```
pub fn build_where_clause(filter: &JobFilter, first_placeholder: usize) -> WhereClause {
    let mut predicates: Vec<String> = Vec::new();
    let mut values: Vec<FieldValue> = Vec::new();
    let mut next_placeholder = first_placeholder;

    if let Some(substring) = &filter.title_contains {
        predicates.push(format!("title ILIKE ${next_placeholder}"));
        values.push(FieldValue::Text(format!("%{substring}%")));
        next_placeholder += 1;
    }

    if let Some(min_salary) = filter.min_salary {
        predicates.push(format!("salary > ${next_placeholder}"));
        values.push(FieldValue::Int(min_salary));
        next_placeholder += 1;
    }

    if filter.has_equity == Some(true) {
        predicates.push("equity > 0".to_string());
    }

    let sql = if predicates.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", predicates.join(" AND "))
    };

    WhereClause { sql, values }
}
