//! Conditions guarding `<choose>` branches.

use crate::node::Node;
use crate::{Error, Result};

/// How the individual results of a test are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Every tested value must match.
    #[default]
    All,
    /// At least one tested value must match.
    Any,
    /// No tested value may match.
    None,
}

impl MatchMode {
    pub fn from_csl(value: &str) -> Option<Self> {
        match value {
            "all" => Some(MatchMode::All),
            "any" => Some(MatchMode::Any),
            "none" => Some(MatchMode::None),
            _ => None,
        }
    }
}

/// The test an `If` condition performs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionTest {
    /// The item type equals each listed type.
    Type(Vec<String>),
    /// Each listed variable is present.
    Variable(Vec<String>),
    /// Each listed variable is present and numeric.
    IsNumeric(Vec<String>),
}

/// A branch condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `if`/`else-if`. A condition without a test never matches.
    If {
        test: Option<ConditionTest>,
        match_mode: MatchMode,
    },
    /// `else` always matches.
    Else,
}

impl Condition {
    /// Build an `If` condition from an optional `match` literal.
    ///
    /// An unknown match literal is a configuration error.
    pub fn new_if(test: Option<ConditionTest>, match_literal: Option<&str>) -> Result<Self> {
        let match_mode = match match_literal {
            None => MatchMode::default(),
            Some(value) => {
                MatchMode::from_csl(value).ok_or_else(|| Error::invalid_value("if", "match", value))?
            }
        };
        Ok(Condition::If { test, match_mode })
    }

    pub fn if_type<S: Into<String>>(types: impl IntoIterator<Item = S>, match_mode: MatchMode) -> Self {
        Condition::If {
            test: Some(ConditionTest::Type(types.into_iter().map(Into::into).collect())),
            match_mode,
        }
    }

    pub fn if_variable<S: Into<String>>(
        variables: impl IntoIterator<Item = S>,
        match_mode: MatchMode,
    ) -> Self {
        Condition::If {
            test: Some(ConditionTest::Variable(
                variables.into_iter().map(Into::into).collect(),
            )),
            match_mode,
        }
    }

    /// Build a condition from an `if`, `else-if` or `else` element.
    ///
    /// Test attributes hold whitespace-separated lists. When an element
    /// carries several, `type` wins over `variable`, which wins over
    /// `is-numeric`.
    pub fn from_node(node: &Node) -> Result<Self> {
        match node.name.as_str() {
            "else" => Ok(Condition::Else),
            "if" | "else-if" => {
                let split = |value: &str| -> Vec<String> {
                    value.split_whitespace().map(str::to_string).collect()
                };

                let test = if let Some(types) = node.get_attribute("type") {
                    Some(ConditionTest::Type(split(types)))
                } else if let Some(variables) = node.get_attribute("variable") {
                    Some(ConditionTest::Variable(split(variables)))
                } else {
                    node.get_attribute("is-numeric")
                        .map(|v| ConditionTest::IsNumeric(split(v)))
                };

                let match_mode = match node.get_attribute("match") {
                    None => MatchMode::default(),
                    Some(value) => MatchMode::from_csl(value)
                        .ok_or_else(|| Error::invalid_value(&node.name, "match", value))?,
                };

                Ok(Condition::If { test, match_mode })
            }
            other => Err(Error::UnexpectedElement {
                expected: "if".to_string(),
                found: other.to_string(),
            }),
        }
    }
}
