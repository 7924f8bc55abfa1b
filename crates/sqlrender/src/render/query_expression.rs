//! Renders one query expression and folds several into a statement body.

use crate::error::RenderResult;
use crate::model::QueryExpressionModel;
use crate::param::{ParameterSequence, Parameters};
use crate::render::condition::ConditionRenderer;
use crate::render::fragment::FragmentAndParameters;
use crate::render::strategy::RenderingStrategy;

/// Renders a single select body into SQL text plus its local parameter map.
///
/// All parameter names are minted from the shared sequence passed in, so
/// they cannot collide with names produced by sibling or ancestor
/// expressions rendered from the same sequence.
pub struct QueryExpressionRenderer<'a> {
    model: &'a QueryExpressionModel,
    sequence: &'a ParameterSequence,
    strategy: &'a dyn RenderingStrategy,
}

impl<'a> QueryExpressionRenderer<'a> {
    pub fn new(
        model: &'a QueryExpressionModel,
        sequence: &'a ParameterSequence,
        strategy: &'a dyn RenderingStrategy,
    ) -> Self {
        Self {
            model,
            sequence,
            strategy,
        }
    }

    pub fn render(&self) -> RenderResult<FragmentAndParameters> {
        let mut parameters = Parameters::new();
        let mut sql = String::new();

        if let Some(connector) = self.model.connector() {
            sql.push_str(connector);
            sql.push(' ');
        }

        sql.push_str("select ");
        if self.model.is_distinct() {
            sql.push_str("distinct ");
        }
        sql.push_str(&self.select_list_phrase());

        sql.push_str(" from ");
        sql.push_str(self.model.table());
        if let Some(alias) = self.model.table_alias() {
            sql.push(' ');
            sql.push_str(alias);
        }

        for join in self.model.joins() {
            sql.push(' ');
            sql.push_str(join.join_type().keyword());
            sql.push(' ');
            sql.push_str(join.table());
            sql.push_str(" on ");
            sql.push_str(join.on());
        }

        let conditions = ConditionRenderer::new(self.sequence, self.strategy);

        if let Some(where_clause) = self.model.where_clause() {
            if !where_clause.is_empty() {
                let (fragment, where_parameters) =
                    conditions.render(where_clause)?.into_parts();
                if !fragment.is_empty() {
                    sql.push_str(" where ");
                    sql.push_str(&fragment);
                }
                parameters.merge(where_parameters)?;
            }
        }

        if !self.model.group_by().is_empty() {
            sql.push_str(" group by ");
            sql.push_str(&self.model.group_by().join(", "));
        }

        if let Some(having) = self.model.having() {
            if !having.is_empty() {
                let (fragment, having_parameters) = conditions.render(having)?.into_parts();
                if !fragment.is_empty() {
                    sql.push_str(" having ");
                    sql.push_str(&fragment);
                }
                parameters.merge(having_parameters)?;
            }
        }

        Ok(FragmentAndParameters::of(sql, parameters))
    }

    fn select_list_phrase(&self) -> String {
        if self.model.select_list().is_empty() {
            return "*".to_string();
        }
        self.model
            .select_list()
            .iter()
            .map(|field| match field.alias() {
                Some(alias) => format!("{} as {}", field.name_with_table_alias(), alias),
                None => field.name_with_table_alias(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Folds the rendered fragments of one or more query expressions into a
/// single combined phrase and parameter map, preserving expression order.
///
/// Parameter keys minted from one shared sequence cannot collide; the
/// collector asserts that invariant on merge and fails fast instead of
/// overwriting.
#[derive(Debug, Default)]
pub struct QueryExpressionCollector {
    fragments: Vec<String>,
    parameters: Parameters,
}

impl QueryExpressionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one expression's output, merging its parameters.
    pub fn add(&mut self, fragment: FragmentAndParameters) -> RenderResult<()> {
        let (sql, parameters) = fragment.into_parts();
        self.fragments.push(sql);
        self.parameters.merge(parameters)
    }

    /// The combined query-expression phrase and parameter map.
    pub fn collect(self) -> FragmentAndParameters {
        FragmentAndParameters::of(self.fragments.join(" "), self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use crate::model::{Condition, JoinClause, SqlField};
    use crate::render::strategy::NamedBindStrategy;
    use crate::value::Value;

    fn render(model: &QueryExpressionModel) -> FragmentAndParameters {
        let sequence = ParameterSequence::new();
        QueryExpressionRenderer::new(model, &sequence, &NamedBindStrategy)
            .render()
            .unwrap()
    }

    #[test]
    fn test_star_projection_by_default() {
        let model = QueryExpressionModel::builder("foo").build();
        assert_eq!(render(&model).fragment(), "select * from foo");
    }

    #[test]
    fn test_column_list_with_aliases() {
        let id = SqlField::<i64>::new("id").with_table_alias("u");
        let name = SqlField::<String>::new("name")
            .with_table_alias("u")
            .with_alias("user_name");
        let model = QueryExpressionModel::builder("users")
            .table_alias("u")
            .column(&id)
            .column(&name)
            .build();
        assert_eq!(
            render(&model).fragment(),
            "select u.id, u.name as user_name from users u"
        );
    }

    #[test]
    fn test_distinct() {
        let model = QueryExpressionModel::builder("users").distinct().build();
        assert_eq!(render(&model).fragment(), "select distinct * from users");
    }

    #[test]
    fn test_joins_and_where() {
        let model = QueryExpressionModel::builder("users")
            .table_alias("u")
            .join(JoinClause::inner("orders o", "u.id = o.user_id"))
            .where_clause(Condition::eq("u.status", "active"))
            .build();
        let out = render(&model);
        assert_eq!(
            out.fragment(),
            "select * from users u join orders o on u.id = o.user_id where u.status = :p1"
        );
        assert_eq!(out.parameters().len(), 1);
    }

    #[test]
    fn test_group_by_and_having() {
        let model = QueryExpressionModel::builder("orders")
            .column(&SqlField::<i64>::new("user_id"))
            .column(&SqlField::<i64>::new("count(*)").with_alias("order_count"))
            .group_by("user_id")
            .having(Condition::gt("count(*)", 5i64))
            .build();
        let out = render(&model);
        assert_eq!(
            out.fragment(),
            "select user_id, count(*) as order_count from orders group by user_id having count(*) > :p1"
        );
    }

    #[test]
    fn test_where_and_having_share_sequence() {
        let model = QueryExpressionModel::builder("orders")
            .where_clause(Condition::eq("status", "paid"))
            .group_by("user_id")
            .having(Condition::gt("sum(total)", 100i64))
            .build();
        let out = render(&model);
        let names: Vec<_> = out.parameters().names().collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[test]
    fn test_connector_prefix() {
        let model = QueryExpressionModel::builder("bar")
            .connector("union")
            .build();
        assert_eq!(render(&model).fragment(), "union select * from bar");
    }

    #[test]
    fn test_collector_preserves_expression_order() {
        let mut collector = QueryExpressionCollector::new();
        let mut first = Parameters::new();
        first.insert_unique("p1", 1i64).unwrap();
        let mut second = Parameters::new();
        second.insert_unique("p2", 2i64).unwrap();
        collector
            .add(FragmentAndParameters::of("select * from a where x = :p1", first))
            .unwrap();
        collector
            .add(FragmentAndParameters::of(
                "union select * from b where y = :p2",
                second,
            ))
            .unwrap();
        let out = collector.collect();
        assert_eq!(
            out.fragment(),
            "select * from a where x = :p1 union select * from b where y = :p2"
        );
        let names: Vec<_> = out.parameters().names().collect();
        assert_eq!(names, vec!["p1", "p2"]);
    }

    #[test]
    fn test_collector_rejects_collisions() {
        let mut collector = QueryExpressionCollector::new();
        let mut first = Parameters::new();
        first.insert_unique("p1", 1i64).unwrap();
        let mut second = Parameters::new();
        second.insert_unique("p1", 2i64).unwrap();
        collector
            .add(FragmentAndParameters::of("select * from a", first))
            .unwrap();
        let err = collector
            .add(FragmentAndParameters::of("union select * from b", second))
            .unwrap_err();
        assert_eq!(err, RenderError::duplicate_parameter("p1"));
    }

    #[test]
    fn test_rendering_is_pure() {
        let model = QueryExpressionModel::builder("users")
            .where_clause(Condition::eq("id", Value::Int8(1)))
            .build();
        let first = render(&model);
        let second = render(&model);
        assert_eq!(first, second);
    }
}
