//! The structural model of one select body.

use crate::model::condition::Condition;
use crate::model::field::SqlField;
use crate::model::join::JoinClause;
use crate::value::Value;

/// One select body: projection, source, joins, filter, and grouping, prior
/// to any set-operator combination or trailing order-by/limit/offset.
///
/// When a select statement unions several expressions, every expression
/// after the first carries a `connector` phrase (e.g. `"union"` or
/// `"union all"`) that the renderer emits before its body.
///
/// Constructed once via [`builder`](Self::builder) and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryExpressionModel {
    connector: Option<String>,
    distinct: bool,
    select_list: Vec<SqlField<Value>>,
    table: String,
    table_alias: Option<String>,
    joins: Vec<JoinClause>,
    where_clause: Option<Condition>,
    group_by: Vec<String>,
    having: Option<Condition>,
}

impl QueryExpressionModel {
    /// Start building an expression selecting from the given table.
    pub fn builder(table: impl Into<String>) -> QueryExpressionModelBuilder {
        QueryExpressionModelBuilder {
            connector: None,
            distinct: false,
            select_list: Vec::new(),
            table: table.into(),
            table_alias: None,
            joins: Vec::new(),
            where_clause: None,
            group_by: Vec::new(),
            having: None,
        }
    }

    pub fn connector(&self) -> Option<&str> {
        self.connector.as_deref()
    }

    pub fn is_distinct(&self) -> bool {
        self.distinct
    }

    /// The projected fields. An empty list renders as `*`.
    pub fn select_list(&self) -> &[SqlField<Value>] {
        &self.select_list
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn table_alias(&self) -> Option<&str> {
        self.table_alias.as_deref()
    }

    pub fn joins(&self) -> &[JoinClause] {
        &self.joins
    }

    pub fn where_clause(&self) -> Option<&Condition> {
        self.where_clause.as_ref()
    }

    pub fn group_by(&self) -> &[String] {
        &self.group_by
    }

    pub fn having(&self) -> Option<&Condition> {
        self.having.as_ref()
    }
}

/// Accumulating builder for [`QueryExpressionModel`].
#[derive(Debug, Clone)]
pub struct QueryExpressionModelBuilder {
    connector: Option<String>,
    distinct: bool,
    select_list: Vec<SqlField<Value>>,
    table: String,
    table_alias: Option<String>,
    joins: Vec<JoinClause>,
    where_clause: Option<Condition>,
    group_by: Vec<String>,
    having: Option<Condition>,
}

impl QueryExpressionModelBuilder {
    /// Set the set-operator phrase emitted before this expression.
    pub fn connector(mut self, connector: impl Into<String>) -> Self {
        self.connector = Some(connector.into());
        self
    }

    /// Select distinct rows.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add one projected field.
    pub fn column<T>(mut self, field: &SqlField<T>) -> Self {
        self.select_list.push(field.erase());
        self
    }

    /// Add several projected fields.
    pub fn columns<T>(mut self, fields: &[SqlField<T>]) -> Self {
        for field in fields {
            self.select_list.push(field.erase());
        }
        self
    }

    /// Alias the source table.
    pub fn table_alias(mut self, alias: impl Into<String>) -> Self {
        self.table_alias = Some(alias.into());
        self
    }

    /// Add a join.
    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Set the `where` condition tree.
    pub fn where_clause(mut self, condition: Condition) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Add a `group by` term.
    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by.push(column.into());
        self
    }

    /// Set the `having` condition tree.
    pub fn having(mut self, condition: Condition) -> Self {
        self.having = Some(condition);
        self
    }

    /// Freeze the accumulated state into an immutable model.
    pub fn build(self) -> QueryExpressionModel {
        QueryExpressionModel {
            connector: self.connector,
            distinct: self.distinct,
            select_list: self.select_list,
            table: self.table,
            table_alias: self.table_alias,
            joins: self.joins,
            where_clause: self.where_clause,
            group_by: self.group_by,
            having: self.having,
        }
    }
}
