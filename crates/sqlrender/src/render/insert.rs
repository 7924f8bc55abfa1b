//! Insert statement rendering.

use crate::error::{RenderError, RenderResult};
use crate::model::SetClause;
use crate::param::{ParameterSequence, Parameters};
use crate::render::strategy::{RenderingStrategy, BINDING_NAMESPACE};
use tracing::debug;

/// Renders an insert field/value list into a fields phrase and a values
/// phrase, positionally aligned.
///
/// Fields always render as bare column names; the inserted table qualifies
/// the statement on its own.
pub struct InsertRenderer<'a> {
    table: &'a str,
    pairs: &'a SetClause,
    strategy: &'a dyn RenderingStrategy,
    owned_sequence: ParameterSequence,
    external_sequence: Option<&'a ParameterSequence>,
}

impl<'a> InsertRenderer<'a> {
    pub fn new(table: &'a str, pairs: &'a SetClause, strategy: &'a dyn RenderingStrategy) -> Self {
        Self {
            table,
            pairs,
            strategy,
            owned_sequence: ParameterSequence::new(),
            external_sequence: None,
        }
    }

    /// Continue a caller-supplied sequence instead of a fresh one.
    pub fn sequence(mut self, sequence: &'a ParameterSequence) -> Self {
        self.external_sequence = Some(sequence);
        self
    }

    pub fn render(&self) -> RenderResult<InsertStatement> {
        if self.pairs.is_empty() {
            return Err(RenderError::EmptySetClause);
        }

        let sequence = self.external_sequence.unwrap_or(&self.owned_sequence);
        let mut parameters = Parameters::new();
        let mut fields = Vec::with_capacity(self.pairs.len());
        let mut values = Vec::with_capacity(self.pairs.len());

        for pair in self.pairs.pairs() {
            fields.push(pair.field().name().to_string());
            match pair.value() {
                Some(value) => {
                    let name = sequence.next_name();
                    let placeholder = self.strategy.format_placeholder(
                        pair.field(),
                        BINDING_NAMESPACE,
                        &name,
                    );
                    parameters.insert_unique(name, value.clone())?;
                    values.push(placeholder);
                }
                None => values.push("null".to_string()),
            }
        }

        let statement = InsertStatement {
            table: self.table.to_string(),
            fields_phrase: format!("({})", fields.join(", ")),
            values_phrase: format!("values ({})", values.join(", ")),
            parameters,
        };
        debug!(
            sql = %statement.statement(),
            parameters = statement.parameters().len(),
            "rendered insert statement"
        );
        Ok(statement)
    }
}

/// The final immutable output of an insert render: the fields phrase, the
/// values phrase, and the parameter map.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    table: String,
    fields_phrase: String,
    values_phrase: String,
    parameters: Parameters,
}

impl InsertStatement {
    /// The parenthesized column list, e.g. `(a, b, c)`.
    pub fn fields_phrase(&self) -> &str {
        &self.fields_phrase
    }

    /// The values clause, e.g. `values (:p1, :p2, null)`.
    pub fn values_phrase(&self) -> &str {
        &self.values_phrase
    }

    /// The complete SQL text.
    pub fn statement(&self) -> String {
        format!(
            "insert into {} {} {}",
            self.table, self.fields_phrase, self.values_phrase
        )
    }

    /// The full parameter map, keys unique by construction.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
