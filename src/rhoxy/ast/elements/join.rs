//! Receive: `for(x <- @chan ; y <- @other) { body }`
//!
//! One-action and multi-action receives share the same shape: a [Join] holding its
//! actions in source order.

use super::process::Proc;
use super::variable::VariableP;
use serde::{Deserialize, Serialize};

/// A destructuring form in a receive action's binding position
///
/// Only single-variable patterns exist today. Serializes as the inner node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    Variable(VariableP),
}

impl Pattern {
    pub fn variable(name: impl Into<String>) -> Self {
        Pattern::Variable(VariableP::new(name))
    }

    /// Names bound by this pattern, in source order
    pub fn bound_names(&self) -> Vec<&str> {
        match self {
            Pattern::Variable(var) => vec![var.given_name.as_str()],
        }
    }
}

/// One guarded binding of a receive: `pattern <- @chan`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename = "action")]
pub struct Action {
    pub pattern: Pattern,
    pub chan: Proc,
}

impl Action {
    pub fn new(pattern: Pattern, chan: Proc) -> Self {
        Self { pattern, chan }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Join {
    /// At least one action, in source order
    pub actions: Vec<Action>,
    pub body: Box<Proc>,
}

impl Join {
    pub fn new(actions: Vec<Action>, body: Proc) -> Self {
        Self {
            actions,
            body: Box::new(body),
        }
    }
}
