//! A rendered SQL fragment paired with its local parameter map.

use crate::param::Parameters;

/// The output of rendering one model fragment: SQL text plus the parameters
/// minted while rendering it.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentAndParameters {
    fragment: String,
    parameters: Parameters,
}

impl FragmentAndParameters {
    /// Pair a fragment with its parameters.
    pub fn of(fragment: impl Into<String>, parameters: Parameters) -> Self {
        Self {
            fragment: fragment.into(),
            parameters,
        }
    }

    /// A fragment binding no parameters.
    pub fn from_fragment(fragment: impl Into<String>) -> Self {
        Self::of(fragment, Parameters::new())
    }

    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Split into `(fragment, parameters)`.
    pub fn into_parts(self) -> (String, Parameters) {
        (self.fragment, self.parameters)
    }
}
