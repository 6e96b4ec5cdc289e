use super::process::Proc;
use serde::{Deserialize, Serialize};

/// `bundle { proc }`. Capability restriction is the evaluator's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bundle {
    pub proc: Box<Proc>,
}

impl Bundle {
    pub fn new(proc: Proc) -> Self {
        Self {
            proc: Box::new(proc),
        }
    }
}
