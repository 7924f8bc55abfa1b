//! Read-only structural models of SQL statements.
//!
//! Model objects are constructed once (typically by a DSL layer) and treated
//! as immutable inputs by the renderers in [`crate::render`]. Rendering never
//! mutates a model; the same model may be rendered repeatedly.

mod condition;
mod field;
mod join;
mod order_by;
mod query_expression;
mod select;
mod set_clause;

pub use condition::Condition;
pub use field::{BindableColumn, SqlField};
pub use join::{JoinClause, JoinType};
pub use order_by::{OrderByModel, SortSpecification};
pub use query_expression::{QueryExpressionModel, QueryExpressionModelBuilder};
pub use select::{SelectModel, SelectModelBuilder};
pub use set_clause::{FieldValuePair, SetClause, SetClauseBuilder};
