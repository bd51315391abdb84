//! Parameterized query construction
//!
//! This module turns caller intent into SQL fragments plus ordered
//! bound-argument lists:
//!
//! - [`field_map`]: translates semantic field names to physical column names
//! - [`update`]: builds a SET clause from a partial-update payload
//! - [`filter`]: builds WHERE predicates from optional search criteria
//!
//! # Parameter Binding Contract
//!
//! Every fragment builder here upholds the same contract: placeholders are
//! numbered contiguously, in the same order as the values vector it returns,
//! so placeholder `$i` always corresponds to `values[i-1]`. Caller-supplied
//! data never appears in the SQL text itself, including row ids.

pub mod field_map;
pub mod filter;
pub mod update;

pub use field_map::{FieldMap, JOB_FIELD_MAP};
pub use filter::{build_where_clause, WhereClause};
pub use update::{build_set_clause, SetClause};

use domain_job::FieldValue;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// Binds an ordered value list onto a query, preserving positional order.
///
/// The values must have been produced together with the SQL text they are
/// bound against; this function only appends, it never reorders.
pub(crate) fn bind_values<'q, O>(
    query: QueryAs<'q, Postgres, O, PgArguments>,
    values: &[FieldValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    values.iter().fold(query, |query, value| match value {
        FieldValue::Text(text) => query.bind(text.clone()),
        FieldValue::Int(int) => query.bind(*int),
        FieldValue::Decimal(decimal) => query.bind(*decimal),
    })
}
