use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variable bindings to use when evaluating an expression.
///
/// An environment is only ever supplied at evaluation time; it is never part of an expression.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Env {
    /// The variables in the environment.
    vars: HashMap<String, f64>,
}

impl Env {
    /// Creates a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the environment, replacing any previous value.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Adds a variable to the environment, returning the environment.
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Get the value of a variable in the environment.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns the variables in the environment.
    pub fn get_vars(&self) -> &HashMap<String, f64> {
        &self.vars
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Env {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            vars: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, f64); N]> for Env {
    fn from(vars: [(S, f64); N]) -> Self {
        vars.into_iter().collect()
    }
}
