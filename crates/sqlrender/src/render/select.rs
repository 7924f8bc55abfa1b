//! Top-level select rendering and the final statement object.

use crate::error::{RenderError, RenderResult};
use crate::model::{OrderByModel, SelectModel, SortSpecification, SqlField};
use crate::param::{ParameterSequence, Parameters};
use crate::render::query_expression::{QueryExpressionCollector, QueryExpressionRenderer};
use crate::render::strategy::{RenderingStrategy, BINDING_NAMESPACE};
use tracing::debug;

/// Fixed logical key for the statement's limit slot.
pub const LIMIT_PARAMETER: &str = "_limit";
/// Fixed logical key for the statement's offset slot.
pub const OFFSET_PARAMETER: &str = "_offset";

/// Renders a [`SelectModel`] into a [`SelectStatement`].
///
/// Drives one [`QueryExpressionRenderer`] per expression over a single
/// shared [`ParameterSequence`], folds the results, then appends the
/// `order by`, `limit`, and `offset` clauses.
pub struct SelectRenderer<'a> {
    model: &'a SelectModel,
    strategy: &'a dyn RenderingStrategy,
    owned_sequence: ParameterSequence,
    external_sequence: Option<&'a ParameterSequence>,
}

impl<'a> SelectRenderer<'a> {
    /// A renderer with a fresh parameter sequence.
    pub fn new(model: &'a SelectModel, strategy: &'a dyn RenderingStrategy) -> Self {
        Self {
            model,
            strategy,
            owned_sequence: ParameterSequence::new(),
            external_sequence: None,
        }
    }

    /// A renderer continuing a caller-supplied sequence, for composing this
    /// render inside a larger statement without reusing parameter names.
    pub fn with_sequence(
        model: &'a SelectModel,
        strategy: &'a dyn RenderingStrategy,
        sequence: &'a ParameterSequence,
    ) -> Self {
        Self {
            model,
            strategy,
            owned_sequence: ParameterSequence::new(),
            external_sequence: Some(sequence),
        }
    }

    fn sequence(&self) -> &ParameterSequence {
        self.external_sequence.unwrap_or(&self.owned_sequence)
    }

    /// Render the model. The model is never mutated; a failed render
    /// produces no statement.
    pub fn render(&self) -> RenderResult<SelectStatement> {
        if self.model.query_expressions().is_empty() {
            return Err(RenderError::MissingQueryExpressions);
        }

        let mut collector = QueryExpressionCollector::new();
        for expression in self.model.query_expressions() {
            let rendered =
                QueryExpressionRenderer::new(expression, self.sequence(), self.strategy)
                    .render()?;
            collector.add(rendered)?;
        }
        let (query_expression, mut parameters) = collector.collect().into_parts();

        let order_by_clause = self.model.order_by().map(render_order_by);

        let limit_clause = match self.model.limit() {
            Some(limit) => Some(self.render_limit(&mut parameters, limit)?),
            None => None,
        };
        let offset_clause = match self.model.offset() {
            Some(offset) => Some(self.render_offset(&mut parameters, offset)?),
            None => None,
        };

        let statement = SelectStatement {
            query_expression,
            order_by_clause,
            limit_clause,
            offset_clause,
            parameters,
        };
        debug!(
            sql = %statement.statement(),
            parameters = statement.parameters().len(),
            "rendered select statement"
        );
        Ok(statement)
    }

    fn render_limit(&self, parameters: &mut Parameters, limit: i64) -> RenderResult<String> {
        let column = SqlField::<i64>::new(LIMIT_PARAMETER);
        let placeholder =
            self.strategy
                .format_placeholder(&column, BINDING_NAMESPACE, LIMIT_PARAMETER);
        parameters.insert_unique(LIMIT_PARAMETER, limit)?;
        Ok(format!("limit {placeholder}"))
    }

    fn render_offset(&self, parameters: &mut Parameters, offset: i64) -> RenderResult<String> {
        let column = SqlField::<i64>::new(OFFSET_PARAMETER);
        let placeholder =
            self.strategy
                .format_placeholder(&column, BINDING_NAMESPACE, OFFSET_PARAMETER);
        parameters.insert_unique(OFFSET_PARAMETER, offset)?;
        Ok(format!("offset {placeholder}"))
    }
}

fn render_order_by(model: &OrderByModel) -> String {
    let phrases: Vec<_> = model.specs().iter().map(order_by_phrase).collect();
    format!("order by {}", phrases.join(", "))
}

fn order_by_phrase(spec: &SortSpecification) -> String {
    if spec.is_descending() {
        format!("{} DESC", spec.alias_or_name())
    } else {
        spec.alias_or_name().to_string()
    }
}

/// The final immutable output of a select render: the statement's clause
/// phrases and the full parameter map.
///
/// [`statement`](Self::statement) assembles the fixed clause order: query
/// body, order by, limit, offset.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    query_expression: String,
    order_by_clause: Option<String>,
    limit_clause: Option<String>,
    offset_clause: Option<String>,
    parameters: Parameters,
}

impl SelectStatement {
    /// The combined query-expression phrase (all unioned bodies).
    pub fn query_expression(&self) -> &str {
        &self.query_expression
    }

    pub fn order_by_clause(&self) -> Option<&str> {
        self.order_by_clause.as_deref()
    }

    pub fn limit_clause(&self) -> Option<&str> {
        self.limit_clause.as_deref()
    }

    pub fn offset_clause(&self) -> Option<&str> {
        self.offset_clause.as_deref()
    }

    /// The complete SQL text, clauses in fixed order separated by spaces.
    pub fn statement(&self) -> String {
        let mut parts = vec![self.query_expression.as_str()];
        parts.extend(self.order_by_clause.as_deref());
        parts.extend(self.limit_clause.as_deref());
        parts.extend(self.offset_clause.as_deref());
        parts.join(" ")
    }

    /// The full parameter map, keys unique by construction.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }
}
