//! Order-by model types.

/// A single sort term: the token to emit plus direction.
///
/// The token is the field's alias when one is present, else its raw name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpecification {
    token: String,
    descending: bool,
}

impl SortSpecification {
    /// An ascending sort on the given token.
    pub fn ascending(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            descending: false,
        }
    }

    /// A descending sort on the given token.
    pub fn descending(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            descending: true,
        }
    }

    /// The token to emit in the `order by` clause.
    pub fn alias_or_name(&self) -> &str {
        &self.token
    }

    /// Whether this term sorts descending.
    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

/// An ordered sequence of sort specifications.
///
/// Sequence order is significant and preserved in rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByModel {
    specs: Vec<SortSpecification>,
}

impl OrderByModel {
    /// Build an order-by model from sort terms, in emission order.
    pub fn of(specs: Vec<SortSpecification>) -> Self {
        Self { specs }
    }

    /// The sort terms, in emission order.
    pub fn specs(&self) -> &[SortSpecification] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_preserved() {
        let model = OrderByModel::of(vec![
            SortSpecification::ascending("a"),
            SortSpecification::descending("b"),
        ]);
        let tokens: Vec<_> = model.specs().iter().map(|s| s.alias_or_name()).collect();
        assert_eq!(tokens, vec!["a", "b"]);
        assert!(model.specs()[1].is_descending());
    }
}
