//! Field/value assignment lists for update and insert statements.

use crate::model::field::SqlField;
use crate::value::Value;

/// An immutable (field, optional value) pair.
///
/// An absent value is an explicit NULL assignment, rendered literally and
/// binding no parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValuePair<T = Value> {
    field: SqlField<T>,
    value: Option<Value>,
}

impl<T> FieldValuePair<T> {
    /// Pair a field with a value.
    pub fn of(field: SqlField<T>, value: T) -> Self
    where
        T: Into<Value>,
    {
        Self {
            field,
            value: Some(value.into()),
        }
    }

    /// Pair a field with an explicit NULL.
    pub fn of_null(field: SqlField<T>) -> Self {
        Self { field, value: None }
    }

    pub fn field(&self) -> &SqlField<T> {
        &self.field
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// A copy of this pair whose field has the table alias stripped.
    pub fn ignoring_alias(&self) -> Self {
        Self {
            field: self.field.ignoring_alias(),
            value: self.value.clone(),
        }
    }

    fn erase(self) -> FieldValuePair<Value> {
        FieldValuePair {
            field: self.field.erase(),
            value: self.value,
        }
    }
}

/// An ordered, frozen list of field/value assignments.
///
/// Order reflects the order assignments were added and is preserved in
/// rendering. Built via [`SetClause::builder`]; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    pairs: Vec<FieldValuePair<Value>>,
}

impl SetClause {
    /// Start accumulating assignments.
    pub fn builder() -> SetClauseBuilder {
        SetClauseBuilder { pairs: Vec::new() }
    }

    /// The assignments, in insertion order.
    pub fn pairs(&self) -> &[FieldValuePair<Value>] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Accumulating builder for [`SetClause`].
///
/// Freezing consumes the builder, so a frozen clause can never observe
/// later mutation of the accumulator.
#[derive(Debug, Clone, Default)]
pub struct SetClauseBuilder {
    pairs: Vec<FieldValuePair<Value>>,
}

impl SetClauseBuilder {
    /// Assign a value to a field.
    pub fn set<T: Into<Value>>(mut self, field: SqlField<T>, value: T) -> Self {
        self.pairs.push(FieldValuePair::of(field, value).erase());
        self
    }

    /// Assign an explicit NULL to a field.
    pub fn set_null<T>(mut self, field: SqlField<T>) -> Self {
        self.pairs.push(FieldValuePair::of_null(field).erase());
        self
    }

    /// Freeze the assignments in insertion order.
    pub fn build(self) -> SetClause {
        SetClause { pairs: self.pairs }
    }

    /// Freeze with every field's table alias stripped, for statements that
    /// reference bare column names.
    pub fn build_ignoring_alias(self) -> SetClause {
        SetClause {
            pairs: self.pairs.iter().map(|p| p.ignoring_alias()).collect(),
        }
    }
}
