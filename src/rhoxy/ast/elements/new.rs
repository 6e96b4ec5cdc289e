//! Name restriction: `new x, y in { body }`
//!
//! The resource-binding form ``new stdout(`rho:io:stdout`) in { .. }`` and its legacy
//! spelling with `lookup` reduce to the same node; the bound URI rides on the [Variable].

use super::process::Proc;
use super::variable::Variable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct New {
    /// At least one declared name, in source order
    pub vars: Vec<Variable>,
    pub body: Box<Proc>,
}

impl New {
    pub fn new(vars: Vec<Variable>, body: Proc) -> Self {
        Self {
            vars,
            body: Box::new(body),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.iter().map(|var| var.given_name.as_str())
    }
}
