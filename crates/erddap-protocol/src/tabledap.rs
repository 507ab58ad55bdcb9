//! Tabledap query suffixes: a variable list plus comparison constraints.
//!
//! ```text
//! sst,time&sst>=10&time<=2020-01-01
//! ```
//!
//! Values are passed through verbatim. Escaping for the wire is the
//! transport's job.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of a tabledap constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Ge => ">=",
            Operator::Le => "<=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `{variable}{operator}{value}` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    pub variable: String,
    pub operator: Operator,
    pub value: String,
}

impl Constraint {
    pub fn new(variable: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
            operator,
            value: value.into(),
        }
    }

    /// Clause text, e.g. `sst>=10`.
    pub fn clause(&self) -> String {
        format!("{}{}{}", self.variable, self.operator, self.value)
    }
}

/// Constraints keyed by (variable, operator), iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    entries: Vec<Constraint>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value for `(variable, operator)`.
    ///
    /// An existing entry keeps its position and has its value replaced.
    pub fn set(&mut self, variable: impl Into<String>, operator: Operator, value: impl Into<String>) {
        let variable = variable.into();
        let value = value.into();

        match self
            .entries
            .iter_mut()
            .find(|c| c.variable == variable && c.operator == operator)
        {
            Some(existing) => existing.value = value,
            None => self.entries.push(Constraint::new(variable, operator, value)),
        }
    }

    /// Builder form of [`Constraints::set`].
    pub fn with(mut self, variable: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        self.set(variable, operator, value);
        self
    }

    pub fn get(&self, variable: &str, operator: Operator) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.variable == variable && c.operator == operator)
            .map(|c| c.value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Constraint> for Constraints {
    fn from_iter<I: IntoIterator<Item = Constraint>>(iter: I) -> Self {
        let mut constraints = Constraints::new();
        for c in iter {
            constraints.set(c.variable, c.operator, c.value);
        }
        constraints
    }
}

/// Build a tabledap query suffix.
///
/// The selected variables are comma-joined. When at least one constraint
/// exists, `&` and the `&`-joined clauses follow; with no constraints the
/// bare variable list is returned.
pub fn build_tabledap_suffix<S: AsRef<str>>(selected_variables: &[S], constraints: &Constraints) -> String {
    let variables = join_names(selected_variables);

    if constraints.is_empty() {
        return variables;
    }

    let clauses: Vec<String> = constraints.iter().map(Constraint::clause).collect();
    format!("{}&{}", variables, clauses.join("&"))
}

pub(crate) fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(",")
}
