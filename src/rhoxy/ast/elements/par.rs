//! Parallel composition: `P | Q | R`

use super::process::Proc;
use serde::{Deserialize, Serialize};

/// A flat list of concurrently running processes
///
/// A chain never nests: `P | Q | R` is one `Par` with three operands, not a pair
/// holding a pair. [Par::flatten] enforces this for trees built outside the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Par {
    pub procs: Vec<Proc>,
}

impl Par {
    /// Accumulate operands in order, splicing the operands of any nested `Par` in place
    pub fn flatten<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Proc>,
    {
        let mut procs = Vec::new();
        for operand in operands {
            match operand {
                Proc::Par(inner) => procs.extend(inner.procs),
                other => procs.push(other),
            }
        }
        Self { procs }
    }
}
