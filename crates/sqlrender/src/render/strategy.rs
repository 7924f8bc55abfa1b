//! Placeholder formatting strategies.

use crate::model::BindableColumn;

/// The binding namespace passed to a strategy for every parameter this crate
/// mints, ordinary and synthetic alike.
pub const BINDING_NAMESPACE: &str = "parameters";

/// Formats the placeholder token embedded in SQL text for one parameter.
///
/// The renderers never construct placeholder syntax themselves; they always
/// delegate here, so the same rendering logic works under any binding
/// convention. Implementations must be pure formatting functions.
pub trait RenderingStrategy {
    /// Format the placeholder for `parameter_name`, bound to a value of the
    /// given column, inside the given binding namespace.
    fn format_placeholder(
        &self,
        column: &dyn BindableColumn,
        namespace: &str,
        parameter_name: &str,
    ) -> String;
}

/// Named tokens with a leading colon: `:p1`, `:_limit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedBindStrategy;

impl RenderingStrategy for NamedBindStrategy {
    fn format_placeholder(
        &self,
        _column: &dyn BindableColumn,
        _namespace: &str,
        parameter_name: &str,
    ) -> String {
        format!(":{parameter_name}")
    }
}

/// Named tokens with a leading at-sign: `@p1`, `@_limit`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AtNamedStrategy;

impl RenderingStrategy for AtNamedStrategy {
    fn format_placeholder(
        &self,
        _column: &dyn BindableColumn,
        _namespace: &str,
        parameter_name: &str,
    ) -> String {
        format!("@{parameter_name}")
    }
}

/// Positional `?` markers.
///
/// Valid because the rendered parameter map preserves insertion order, which
/// matches placeholder order in the SQL text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionMarkStrategy;

impl RenderingStrategy for QuestionMarkStrategy {
    fn format_placeholder(
        &self,
        _column: &dyn BindableColumn,
        _namespace: &str,
        _parameter_name: &str,
    ) -> String {
        "?".to_string()
    }
}

/// Namespaced `#{parameters.p1}` tokens, for template-mapper execution
/// layers that resolve bindings through a named map.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamespacedHashStrategy;

impl RenderingStrategy for NamespacedHashStrategy {
    fn format_placeholder(
        &self,
        _column: &dyn BindableColumn,
        namespace: &str,
        parameter_name: &str,
    ) -> String {
        format!("#{{{namespace}.{parameter_name}}}")
    }
}
