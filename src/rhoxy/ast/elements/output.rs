//! Send: `@chan!(message)`

use super::process::Proc;
use serde::{Deserialize, Serialize};

/// Payload of a send. Both positions hold arbitrary processes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Output {
    pub chan: Box<Proc>,
    pub message: Box<Proc>,
}

impl Output {
    pub fn new(chan: Proc, message: Proc) -> Self {
        Self {
            chan: Box::new(chan),
            message: Box::new(message),
        }
    }
}
