//! Typed column references.

use crate::model::order_by::SortSpecification;
use std::marker::PhantomData;

/// Capability required to format a placeholder for a column's value.
///
/// This is what a [`RenderingStrategy`](crate::render::RenderingStrategy)
/// receives when asked for placeholder text; it exposes only what the
/// strategy may need to pick a formatting behavior.
pub trait BindableColumn {
    /// The raw column name.
    fn name(&self) -> &str;

    /// The result-column alias, if any.
    fn alias(&self) -> Option<&str>;

    /// The alias if present, else the raw name.
    fn alias_or_name(&self) -> &str {
        self.alias().unwrap_or_else(|| self.name())
    }
}

/// A typed reference to a column or expression.
///
/// Carries an optional table alias (qualifier) and an optional result-column
/// alias, plus a type tag `T` used only to select placeholder-formatting
/// behavior. Identity is structural; the value is immutable.
#[derive(Debug)]
pub struct SqlField<T> {
    name: String,
    table_alias: Option<String>,
    alias: Option<String>,
    _type: PhantomData<fn() -> T>,
}

impl<T> SqlField<T> {
    /// Create a field reference for a bare column name or expression.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_alias: None,
            alias: None,
            _type: PhantomData,
        }
    }

    /// Qualify the field with a table alias (`u.id`).
    pub fn with_table_alias(mut self, table_alias: impl Into<String>) -> Self {
        self.table_alias = Some(table_alias.into());
        self
    }

    /// Give the field a result-column alias (`id as user_id`).
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The raw column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The table alias qualifying this field, if any.
    pub fn table_alias(&self) -> Option<&str> {
        self.table_alias.as_deref()
    }

    /// The result-column alias, if any.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// The name prefixed by the table alias when one is present.
    pub fn name_with_table_alias(&self) -> String {
        match &self.table_alias {
            Some(t) => format!("{}.{}", t, self.name),
            None => self.name.clone(),
        }
    }

    /// A copy of this field with the table alias stripped.
    ///
    /// Used when the field is referenced as a bare column name, e.g. in a
    /// `set` clause where the table already qualifies the statement.
    pub fn ignoring_alias(&self) -> SqlField<T> {
        SqlField {
            name: self.name.clone(),
            table_alias: None,
            alias: self.alias.clone(),
            _type: PhantomData,
        }
    }

    /// An ascending sort specification for this field.
    pub fn asc(&self) -> SortSpecification {
        SortSpecification::ascending(self.alias_or_name())
    }

    /// A descending sort specification for this field.
    pub fn desc(&self) -> SortSpecification {
        SortSpecification::descending(self.alias_or_name())
    }

    /// Drop the type tag. The rendered form is unchanged.
    pub(crate) fn erase<U>(&self) -> SqlField<U> {
        SqlField {
            name: self.name.clone(),
            table_alias: self.table_alias.clone(),
            alias: self.alias.clone(),
            _type: PhantomData,
        }
    }
}

impl<T> BindableColumn for SqlField<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

// Manual impls so `T` needs no bounds; the tag is phantom.
impl<T> Clone for SqlField<T> {
    fn clone(&self) -> Self {
        self.erase()
    }
}

impl<T> PartialEq for SqlField<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.table_alias == other.table_alias
            && self.alias == other.alias
    }
}

impl<T> Eq for SqlField<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_with_table_alias() {
        let f = SqlField::<i64>::new("id").with_table_alias("u");
        assert_eq!(f.name_with_table_alias(), "u.id");
        assert_eq!(SqlField::<i64>::new("id").name_with_table_alias(), "id");
    }

    #[test]
    fn test_ignoring_alias_strips_qualifier() {
        let f = SqlField::<String>::new("name")
            .with_table_alias("u")
            .with_alias("user_name");
        let bare = f.ignoring_alias();
        assert_eq!(bare.name_with_table_alias(), "name");
        // The result-column alias survives; only the qualifier is stripped.
        assert_eq!(bare.alias(), Some("user_name"));
        // The original is untouched.
        assert_eq!(f.name_with_table_alias(), "u.name");
    }

    #[test]
    fn test_alias_or_name() {
        let f = SqlField::<i32>::new("created_at").with_alias("created");
        assert_eq!(f.alias_or_name(), "created");
        assert_eq!(SqlField::<i32>::new("created_at").alias_or_name(), "created_at");
    }

    #[test]
    fn test_sort_specifications() {
        let f = SqlField::<i32>::new("age");
        assert_eq!(f.asc().alias_or_name(), "age");
        assert!(!f.asc().is_descending());
        assert!(f.desc().is_descending());
    }
}
