//! Renderers: structural model in, parameterized SQL out.
//!
//! Rendering is a synchronous, side-effect-free transformation. Every
//! renderer threads one shared [`ParameterSequence`](crate::ParameterSequence)
//! through all nested rendering sites of a statement, which is what makes
//! the output parameter map collision-free by construction.

mod condition;
mod fragment;
mod insert;
mod query_expression;
mod select;
mod strategy;
mod update;

pub use fragment::FragmentAndParameters;
pub use insert::{InsertRenderer, InsertStatement};
pub use query_expression::{QueryExpressionCollector, QueryExpressionRenderer};
pub use select::{SelectRenderer, SelectStatement, LIMIT_PARAMETER, OFFSET_PARAMETER};
pub use strategy::{
    AtNamedStrategy, NamedBindStrategy, NamespacedHashStrategy, QuestionMarkStrategy,
    RenderingStrategy, BINDING_NAMESPACE,
};
pub use update::{UpdateRenderer, UpdateStatement};

#[cfg(test)]
mod tests;
