//! Update statement rendering.

use crate::error::{RenderError, RenderResult};
use crate::model::{Condition, SetClause};
use crate::param::{ParameterSequence, Parameters};
use crate::render::condition::ConditionRenderer;
use crate::render::strategy::{RenderingStrategy, BINDING_NAMESPACE};
use tracing::debug;

/// Renders `update <table> set <assignments> [where ...]`.
///
/// The set clause and the where tree draw from one shared sequence, so their
/// parameter names can never collide.
pub struct UpdateRenderer<'a> {
    table: &'a str,
    set_clause: &'a SetClause,
    where_clause: Option<&'a Condition>,
    strategy: &'a dyn RenderingStrategy,
    owned_sequence: ParameterSequence,
    external_sequence: Option<&'a ParameterSequence>,
}

impl<'a> UpdateRenderer<'a> {
    pub fn new(
        table: &'a str,
        set_clause: &'a SetClause,
        strategy: &'a dyn RenderingStrategy,
    ) -> Self {
        Self {
            table,
            set_clause,
            where_clause: None,
            strategy,
            owned_sequence: ParameterSequence::new(),
            external_sequence: None,
        }
    }

    /// Restrict the update with a condition tree.
    pub fn where_clause(mut self, condition: &'a Condition) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Continue a caller-supplied sequence instead of a fresh one.
    pub fn sequence(mut self, sequence: &'a ParameterSequence) -> Self {
        self.external_sequence = Some(sequence);
        self
    }

    fn shared_sequence(&self) -> &ParameterSequence {
        self.external_sequence.unwrap_or(&self.owned_sequence)
    }

    pub fn render(&self) -> RenderResult<UpdateStatement> {
        if self.set_clause.is_empty() {
            return Err(RenderError::EmptySetClause);
        }

        let mut parameters = Parameters::new();
        let sequence = self.shared_sequence();

        let mut assignments = Vec::with_capacity(self.set_clause.len());
        for pair in self.set_clause.pairs() {
            let field_phrase = pair.field().name_with_table_alias();
            match pair.value() {
                Some(value) => {
                    let name = sequence.next_name();
                    let placeholder = self.strategy.format_placeholder(
                        pair.field(),
                        BINDING_NAMESPACE,
                        &name,
                    );
                    parameters.insert_unique(name, value.clone())?;
                    assignments.push(format!("{field_phrase} = {placeholder}"));
                }
                None => assignments.push(format!("{field_phrase} = null")),
            }
        }

        let mut sql = format!("update {} set {}", self.table, assignments.join(", "));

        if let Some(condition) = self.where_clause {
            if !condition.is_empty() {
                let (fragment, where_parameters) =
                    ConditionRenderer::new(sequence, self.strategy)
                        .render(condition)?
                        .into_parts();
                if !fragment.is_empty() {
                    sql.push_str(" where ");
                    sql.push_str(&fragment);
                }
                parameters.merge(where_parameters)?;
            }
        }

        debug!(sql = %sql, parameters = parameters.len(), "rendered update statement");
        Ok(UpdateStatement { sql, parameters })
    }
}

/// The final immutable output of an update render.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateStatement {
    sql: String,
    parameters: Parameters,
}

impl UpdateStatement {
    /// The complete SQL text.
    pub fn statement(&self) -> &str {
        &self.sql
    }

    /// The full parameter map, keys unique by construction.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
