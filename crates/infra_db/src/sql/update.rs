//! SET clause construction for partial updates
//!
//! Converts a non-empty field/value enumeration into a SET clause and an
//! ordered argument list. The i-th entry (1-indexed) becomes
//! `"<column>"=$<i>` with its value at index `i - 1` of the returned vector,
//! so the clause and the values stay positionally aligned by construction.

use domain_job::FieldValue;

use crate::error::RepositoryError;
use crate::sql::field_map::FieldMap;

/// A SET clause with its positionally aligned bound values.
///
/// `values.len()` always equals the number of placeholders in `clause`, and
/// placeholder `$i` corresponds to `values[i - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pub clause: String,
    pub values: Vec<FieldValue>,
}

/// Builds a SET clause from the given entries, resolving each semantic field
/// name through the field map.
///
/// Pure function: enumeration order is the callers', placeholders are
/// numbered contiguously from `$1`.
///
/// # Errors
///
/// Returns `RepositoryError::Validation` when `entries` is empty, before any
/// statement could be executed.
///
/// # Example
///
/// ```rust
/// use domain_job::JobPatch;
/// use infra_db::sql::{build_set_clause, JOB_FIELD_MAP};
///
/// let patch = JobPatch::default().with_title("Engineer").with_salary(90_000);
/// let set = build_set_clause(patch.entries(), &JOB_FIELD_MAP).unwrap();
/// assert_eq!(set.clause, r#""title"=$1, "salary"=$2"#);
/// assert_eq!(set.values.len(), 2);
/// ```
pub fn build_set_clause(
    entries: Vec<(&'static str, FieldValue)>,
    field_map: &FieldMap,
) -> Result<SetClause, RepositoryError> {
    if entries.is_empty() {
        return Err(RepositoryError::validation("No data to update"));
    }

    let mut assignments = Vec::with_capacity(entries.len());
    let mut values = Vec::with_capacity(entries.len());
    for (index, (name, value)) in entries.into_iter().enumerate() {
        assignments.push(format!("\"{}\"=${}", field_map.resolve(name), index + 1));
        values.push(value);
    }

    Ok(SetClause {
        clause: assignments.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_job::JobPatch;
    use crate::sql::field_map::JOB_FIELD_MAP;

    #[test]
    fn test_title_and_salary_clause() {
        let patch = JobPatch::default().with_title("Engineer").with_salary(90_000);

        let set = build_set_clause(patch.entries(), &JOB_FIELD_MAP).unwrap();

        assert_eq!(set.clause, r#""title"=$1, "salary"=$2"#);
        assert_eq!(
            set.values,
            vec![
                FieldValue::Text("Engineer".to_string()),
                FieldValue::Int(90_000),
            ]
        );
    }

    #[test]
    fn test_empty_entries_rejected() {
        let err = build_set_clause(Vec::new(), &JOB_FIELD_MAP).unwrap_err();

        assert!(matches!(err, RepositoryError::Validation(_)));
        assert!(err.to_string().contains("No data"));
    }

    #[test]
    fn test_mapped_field_uses_column_name() {
        let entries = vec![("companyHandle", FieldValue::Text("acme".to_string()))];

        let set = build_set_clause(entries, &JOB_FIELD_MAP).unwrap();

        assert_eq!(set.clause, r#""company_handle"=$1"#);
    }

    #[test]
    fn test_single_field_clause() {
        let patch = JobPatch::default().with_salary(95_000);

        let set = build_set_clause(patch.entries(), &JOB_FIELD_MAP).unwrap();

        assert_eq!(set.clause, r#""salary"=$1"#);
        assert_eq!(set.values, vec![FieldValue::Int(95_000)]);
    }

    #[test]
    fn test_placeholder_count_matches_value_count() {
        use rust_decimal_macros::dec;

        let patch = JobPatch::default()
            .with_title("Engineer")
            .with_salary(90_000)
            .with_equity(dec!(0.25));

        let set = build_set_clause(patch.entries(), &JOB_FIELD_MAP).unwrap();

        assert_eq!(set.values.len(), 3);
        assert_eq!(set.clause.matches('$').count(), 3);
        assert!(set.clause.contains("$3"));
    }
}
