//! Renders condition trees into SQL fragments with bound parameters.

use crate::error::RenderResult;
use crate::model::{Condition, SqlField};
use crate::param::{ParameterSequence, Parameters};
use crate::render::fragment::FragmentAndParameters;
use crate::render::strategy::{RenderingStrategy, BINDING_NAMESPACE};
use crate::value::Value;

/// Renders one condition tree, minting every parameter name from the
/// statement's shared sequence so uniqueness holds across sibling fragments.
pub(crate) struct ConditionRenderer<'a> {
    sequence: &'a ParameterSequence,
    strategy: &'a dyn RenderingStrategy,
}

impl<'a> ConditionRenderer<'a> {
    pub(crate) fn new(
        sequence: &'a ParameterSequence,
        strategy: &'a dyn RenderingStrategy,
    ) -> Self {
        Self { sequence, strategy }
    }

    pub(crate) fn render(&self, condition: &Condition) -> RenderResult<FragmentAndParameters> {
        let mut parameters = Parameters::new();
        let fragment = self.render_node(condition, &mut parameters)?;
        Ok(FragmentAndParameters::of(fragment, parameters))
    }

    fn render_node(
        &self,
        condition: &Condition,
        parameters: &mut Parameters,
    ) -> RenderResult<String> {
        Ok(match condition {
            Condition::And(conditions) => {
                self.render_group(conditions, " and ", parameters)?
            }
            Condition::Or(conditions) => self.render_group(conditions, " or ", parameters)?,
            Condition::Not(inner) => {
                let sql = self.render_node(inner, parameters)?;
                if sql.is_empty() {
                    String::new()
                } else {
                    format!("not ({sql})")
                }
            }
            Condition::Compare { column, op, value } => {
                let placeholder = self.bind(column, value, parameters)?;
                format!("{column} {op} {placeholder}")
            }
            Condition::IsNull { column, negated } => {
                if *negated {
                    format!("{column} is not null")
                } else {
                    format!("{column} is null")
                }
            }
            Condition::In {
                column,
                values,
                negated,
            } => {
                let mut placeholders = Vec::with_capacity(values.len());
                for value in values {
                    placeholders.push(self.bind(column, value, parameters)?);
                }
                let op = if *negated { "not in" } else { "in" };
                format!("{column} {op} ({})", placeholders.join(", "))
            }
            Condition::Between {
                column,
                low,
                high,
                negated,
            } => {
                let low_ph = self.bind(column, low, parameters)?;
                let high_ph = self.bind(column, high, parameters)?;
                let op = if *negated { "not between" } else { "between" };
                format!("{column} {op} {low_ph} and {high_ph}")
            }
            Condition::Raw(sql) => sql.clone(),
        })
    }

    /// Mint a name, bind the value, and return the formatted placeholder.
    fn bind(
        &self,
        column: &str,
        value: &Value,
        parameters: &mut Parameters,
    ) -> RenderResult<String> {
        let name = self.sequence.next_name();
        let field = SqlField::<Value>::new(column);
        let placeholder = self
            .strategy
            .format_placeholder(&field, BINDING_NAMESPACE, &name);
        parameters.insert_unique(name, value.clone())?;
        Ok(placeholder)
    }

    fn render_group(
        &self,
        conditions: &[Condition],
        joiner: &str,
        parameters: &mut Parameters,
    ) -> RenderResult<String> {
        let mut parts = Vec::with_capacity(conditions.len());
        for condition in conditions {
            if condition.is_empty() {
                continue;
            }
            let sql = self.render_node(condition, parameters)?;
            if sql.is_empty() {
                continue;
            }
            // Parenthesize a nested group of the opposite connective.
            let mixed = matches!(
                (joiner, condition),
                (" and ", Condition::Or(_)) | (" or ", Condition::And(_))
            );
            if mixed {
                parts.push(format!("({sql})"));
            } else {
                parts.push(sql);
            }
        }
        Ok(parts.join(joiner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::strategy::NamedBindStrategy;

    fn render(condition: &Condition) -> FragmentAndParameters {
        let sequence = ParameterSequence::new();
        ConditionRenderer::new(&sequence, &NamedBindStrategy)
            .render(condition)
            .unwrap()
    }

    #[test]
    fn test_compare() {
        let out = render(&Condition::eq("status", "active"));
        assert_eq!(out.fragment(), "status = :p1");
        assert_eq!(out.parameters().get("p1"), Some(&Value::Text("active".into())));
    }

    #[test]
    fn test_and_group() {
        let out = render(&Condition::and(vec![
            Condition::eq("status", "active"),
            Condition::gt("age", 18i32),
        ]));
        assert_eq!(out.fragment(), "status = :p1 and age > :p2");
        assert_eq!(out.parameters().len(), 2);
    }

    #[test]
    fn test_nested_or_parenthesized() {
        let out = render(&Condition::and(vec![
            Condition::eq("status", "active"),
            Condition::or(vec![
                Condition::eq("role", "admin"),
                Condition::eq("role", "owner"),
            ]),
        ]));
        assert_eq!(
            out.fragment(),
            "status = :p1 and (role = :p2 or role = :p3)"
        );
    }

    #[test]
    fn test_in_list() {
        let out = render(&Condition::in_list(
            "id",
            vec![Value::Int8(1), Value::Int8(2), Value::Int8(3)],
        ));
        assert_eq!(out.fragment(), "id in (:p1, :p2, :p3)");
        let names: Vec<_> = out.parameters().names().collect();
        assert_eq!(names, vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_between() {
        let out = render(&Condition::between("age", 18i32, 65i32));
        assert_eq!(out.fragment(), "age between :p1 and :p2");
    }

    #[test]
    fn test_not_between() {
        let out = render(&Condition::not_between("age", 18i32, 65i32));
        assert_eq!(out.fragment(), "age not between :p1 and :p2");
        assert_eq!(out.parameters().len(), 2);
    }

    #[test]
    fn test_not() {
        let out = render(&Condition::not(Condition::eq("banned", true)));
        assert_eq!(out.fragment(), "not (banned = :p1)");
    }

    #[test]
    fn test_is_null_binds_nothing() {
        let out = render(&Condition::is_null("deleted_at"));
        assert_eq!(out.fragment(), "deleted_at is null");
        assert!(out.parameters().is_empty());
    }

    #[test]
    fn test_empty_members_skipped() {
        let out = render(&Condition::and(vec![
            Condition::and(vec![]),
            Condition::eq("a", 1i32),
        ]));
        assert_eq!(out.fragment(), "a = :p1");
    }
}
