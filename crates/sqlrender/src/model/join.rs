//! Join specifications for query expressions.

/// The kind of join to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinType {
    /// The SQL keyword phrase for this join kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinType::Inner => "join",
            JoinType::Left => "left join",
            JoinType::Right => "right join",
            JoinType::Full => "full join",
        }
    }
}

/// One join: kind, joined table phrase, and the `on` condition text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    join_type: JoinType,
    table: String,
    on: String,
}

impl JoinClause {
    /// An inner join.
    pub fn inner(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self::new(JoinType::Inner, table, on)
    }

    /// A left outer join.
    pub fn left(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self::new(JoinType::Left, table, on)
    }

    /// A right outer join.
    pub fn right(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self::new(JoinType::Right, table, on)
    }

    /// A full outer join.
    pub fn full(table: impl Into<String>, on: impl Into<String>) -> Self {
        Self::new(JoinType::Full, table, on)
    }

    fn new(join_type: JoinType, table: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            join_type,
            table: table.into(),
            on: on.into(),
        }
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn on(&self) -> &str {
        &self.on
    }
}
