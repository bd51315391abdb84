//! Semantic-to-column field name translation
//!
//! A [`FieldMap`] is an immutable, process-wide configuration value for one
//! entity type. It is passed explicitly to the fragment builders, never
//! looked up implicitly, and never mutated.

/// A fixed table translating semantic field names to physical column names.
///
/// Unmapped names pass through unchanged: a missing mapping is a deliberate
/// passthrough, not a failure. Passthrough names are not validated against an
/// allow-list of real columns, so they must come from a declared field
/// enumeration (see `JobPatch::entries`), never from arbitrary caller keys.
#[derive(Debug, Clone, Copy)]
pub struct FieldMap {
    entries: &'static [(&'static str, &'static str)],
}

impl FieldMap {
    /// Creates a field map over a static translation table
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Resolves a semantic field name to its column name.
    ///
    /// Returns the mapped column if one exists, otherwise the input unchanged.
    /// Pure lookup; no error cases.
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::sql::JOB_FIELD_MAP;
    ///
    /// assert_eq!(JOB_FIELD_MAP.resolve("companyHandle"), "company_handle");
    /// assert_eq!(JOB_FIELD_MAP.resolve("salary"), "salary");
    /// ```
    pub fn resolve<'a>(&self, name: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(semantic, _)| *semantic == name)
            .map(|(_, column)| *column)
            .unwrap_or(name)
    }
}

/// Field map for the `jobs` table.
///
/// Only `companyHandle` differs from its column name; the mutable fields
/// (`title`, `salary`, `equity`) pass through.
pub const JOB_FIELD_MAP: FieldMap = FieldMap::new(&[("companyHandle", "company_handle")]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_name_resolves_to_column() {
        assert_eq!(JOB_FIELD_MAP.resolve("companyHandle"), "company_handle");
    }

    #[test]
    fn test_unmapped_name_passes_through() {
        assert_eq!(JOB_FIELD_MAP.resolve("salary"), "salary");
        assert_eq!(JOB_FIELD_MAP.resolve("title"), "title");
    }

    #[test]
    fn test_empty_map_passes_everything_through() {
        let map = FieldMap::new(&[]);
        assert_eq!(map.resolve("anything"), "anything");
    }
}
