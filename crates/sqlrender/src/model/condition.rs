//! Condition trees for `where` and `having` clauses.
//!
//! A [`Condition`] is a read-only model value; turning it into SQL text and
//! bound parameters is the condition renderer's job, which threads the
//! statement's shared parameter sequence through every node so parameter
//! names stay unique across the whole statement.

use crate::value::Value;

/// A node in a boolean condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// All sub-conditions must hold.
    And(Vec<Condition>),

    /// At least one sub-condition must hold.
    Or(Vec<Condition>),

    /// Negate the inner condition.
    Not(Box<Condition>),

    /// `column <op> <placeholder>`
    Compare {
        column: String,
        op: &'static str,
        value: Value,
    },

    /// `column IS [NOT] NULL`
    IsNull { column: String, negated: bool },

    /// `column [NOT] IN (<placeholders>)`
    In {
        column: String,
        values: Vec<Value>,
        negated: bool,
    },

    /// `column [NOT] BETWEEN <placeholder> AND <placeholder>`
    Between {
        column: String,
        low: Value,
        high: Value,
        negated: bool,
    },

    /// A raw SQL fragment binding no parameters.
    Raw(String),
}

impl Condition {
    /// `column = value`
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "=", value)
    }

    /// `column <> value`
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<>", value)
    }

    /// `column > value`
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, ">", value)
    }

    /// `column >= value`
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, ">=", value)
    }

    /// `column < value`
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<", value)
    }

    /// `column <= value`
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, "<=", value)
    }

    /// `column like pattern`
    pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, "like", pattern)
    }

    fn compare(column: impl Into<String>, op: &'static str, value: impl Into<Value>) -> Self {
        Condition::Compare {
            column: column.into(),
            op,
            value: value.into(),
        }
    }

    /// `column is null`
    pub fn is_null(column: impl Into<String>) -> Self {
        Condition::IsNull {
            column: column.into(),
            negated: false,
        }
    }

    /// `column is not null`
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Condition::IsNull {
            column: column.into(),
            negated: true,
        }
    }

    /// `column in (values...)`
    ///
    /// An empty list can match nothing and renders as `1=0`.
    pub fn in_list(column: impl Into<String>, values: Vec<Value>) -> Self {
        if values.is_empty() {
            return Condition::Raw("1=0".to_string());
        }
        Condition::In {
            column: column.into(),
            values,
            negated: false,
        }
    }

    /// `column not in (values...)`
    ///
    /// An empty list excludes nothing and renders as `1=1`.
    pub fn not_in(column: impl Into<String>, values: Vec<Value>) -> Self {
        if values.is_empty() {
            return Condition::Raw("1=1".to_string());
        }
        Condition::In {
            column: column.into(),
            values,
            negated: true,
        }
    }

    /// `column between low and high`
    pub fn between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Condition::Between {
            column: column.into(),
            low: low.into(),
            high: high.into(),
            negated: false,
        }
    }

    /// `column not between low and high`
    pub fn not_between(
        column: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        Condition::Between {
            column: column.into(),
            low: low.into(),
            high: high.into(),
            negated: true,
        }
    }

    /// All of the given conditions.
    pub fn and(conditions: Vec<Condition>) -> Self {
        Condition::And(conditions)
    }

    /// Any of the given conditions.
    pub fn or(conditions: Vec<Condition>) -> Self {
        Condition::Or(conditions)
    }

    /// The negation of a condition.
    pub fn not(condition: Condition) -> Self {
        Condition::Not(Box::new(condition))
    }

    /// A raw SQL fragment with no bound values.
    pub fn raw(sql: impl Into<String>) -> Self {
        Condition::Raw(sql.into())
    }

    /// Returns `true` if the tree contains no renderable condition.
    pub fn is_empty(&self) -> bool {
        match self {
            Condition::And(cs) | Condition::Or(cs) => {
                cs.is_empty() || cs.iter().all(|c| c.is_empty())
            }
            Condition::Not(inner) => inner.is_empty(),
            _ => false,
        }
    }
}
