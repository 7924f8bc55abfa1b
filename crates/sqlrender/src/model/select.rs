//! The full select statement model.

use crate::error::RenderResult;
use crate::model::order_by::OrderByModel;
use crate::model::query_expression::QueryExpressionModel;
use crate::render::{RenderingStrategy, SelectRenderer, SelectStatement};

/// The full select statement: one query expression, or several when the
/// statement is a union, plus optional trailing order-by/limit/offset.
///
/// Constructed once and read-only afterwards; the same model may be rendered
/// any number of times, each render producing independent output.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectModel {
    query_expressions: Vec<QueryExpressionModel>,
    order_by: Option<OrderByModel>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectModel {
    /// A select model over a single query expression.
    pub fn of(expression: QueryExpressionModel) -> Self {
        Self::builder().query_expression(expression).build()
    }

    /// Start building a select model.
    pub fn builder() -> SelectModelBuilder {
        SelectModelBuilder {
            query_expressions: Vec::new(),
            order_by: None,
            limit: None,
            offset: None,
        }
    }

    /// The query expressions, in statement order.
    pub fn query_expressions(&self) -> &[QueryExpressionModel] {
        &self.query_expressions
    }

    pub fn order_by(&self) -> Option<&OrderByModel> {
        self.order_by.as_ref()
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Render this model with a fresh parameter sequence.
    pub fn render(&self, strategy: &dyn RenderingStrategy) -> RenderResult<SelectStatement> {
        SelectRenderer::new(self, strategy).render()
    }
}

/// Accumulating builder for [`SelectModel`].
#[derive(Debug, Clone)]
pub struct SelectModelBuilder {
    query_expressions: Vec<QueryExpressionModel>,
    order_by: Option<OrderByModel>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectModelBuilder {
    /// Append a query expression. Expressions render in insertion order.
    pub fn query_expression(mut self, expression: QueryExpressionModel) -> Self {
        self.query_expressions.push(expression);
        self
    }

    pub fn order_by(mut self, order_by: OrderByModel) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Freeze the accumulated state into an immutable model.
    ///
    /// A model with no query expressions builds fine but fails to render
    /// with [`RenderError::MissingQueryExpressions`](crate::RenderError).
    pub fn build(self) -> SelectModel {
        SelectModel {
            query_expressions: self.query_expressions,
            order_by: self.order_by,
            limit: self.limit,
            offset: self.offset,
        }
    }
}
