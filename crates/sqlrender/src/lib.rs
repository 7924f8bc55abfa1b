//! # sqlrender
//!
//! Renders structural SQL statement models into parameterized statements.
//!
//! ## Features
//!
//! - **Deterministic composition**: nested and unioned query expressions
//!   render with globally unique parameter names, minted from one shared
//!   [`ParameterSequence`] per statement
//! - **Collision-checked merging**: per-fragment parameter maps are merged
//!   with fail-fast duplicate detection, never silent overwrites
//! - **Injectable placeholder syntax**: placeholder text is always produced
//!   by a caller-supplied [`RenderingStrategy`] (named tokens, positional
//!   markers, namespaced template tokens)
//! - **Execution-ready output**: parameter maps are insertion-ordered and
//!   their values implement `ToSql` for parameterized Postgres execution
//!
//! ## Usage
//!
//! ```ignore
//! use sqlrender::{Condition, NamedBindStrategy, QueryExpressionModel, SelectModel};
//!
//! let model = SelectModel::builder()
//!     .query_expression(
//!         QueryExpressionModel::builder("users")
//!             .where_clause(Condition::eq("status", "active"))
//!             .build(),
//!     )
//!     .limit(10)
//!     .build();
//!
//! let statement = model.render(&NamedBindStrategy)?;
//! assert_eq!(
//!     statement.statement(),
//!     "select * from users where status = :p1 limit :_limit"
//! );
//! ```
//!
//! Model construction (this crate only reads models) and statement execution
//! (the parameter map and SQL text are handed off as-is) are both out of
//! scope here.

pub mod error;
pub mod model;
pub mod param;
pub mod render;
pub mod value;

pub use error::{RenderError, RenderResult};
pub use model::{
    BindableColumn, Condition, FieldValuePair, JoinClause, JoinType, OrderByModel,
    QueryExpressionModel, QueryExpressionModelBuilder, SelectModel, SelectModelBuilder,
    SetClause, SetClauseBuilder, SortSpecification, SqlField,
};
pub use param::{ParameterSequence, Parameters};
pub use render::{
    AtNamedStrategy, FragmentAndParameters, InsertRenderer, InsertStatement, NamedBindStrategy,
    NamespacedHashStrategy, QueryExpressionCollector, QueryExpressionRenderer,
    QuestionMarkStrategy, RenderingStrategy, SelectRenderer, SelectStatement, UpdateRenderer,
    UpdateStatement, BINDING_NAMESPACE, LIMIT_PARAMETER, OFFSET_PARAMETER,
};
pub use value::Value;
