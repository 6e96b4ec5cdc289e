//! The process sum type
//!
//! [Proc] is closed: every process kind is one variant, so consumers get exhaustive
//! matching. Serialization follows the tagged object shape downstream evaluators read:
//!
//! ```text
//! {"tag":"send","chan":{"tag":"nil"},"message":{"tag":"ground","type":"int","value":4}}
//! ```

use super::bundle::Bundle;
use super::ground::Ground;
use super::join::{Action, Join, Pattern};
use super::new::New;
use super::output::Output;
use super::par::Par;
use super::variable::Variable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "tag", rename_all = "camelCase")]
pub enum Proc {
    Nil,
    Ground(Ground),
    Send(Output),
    Join(Join),
    Par(Par),
    New(New),
    Bundle(Bundle),
}

impl Proc {
    pub fn nil() -> Self {
        Proc::Nil
    }

    pub fn int(value: i64) -> Self {
        Proc::Ground(Ground::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Proc::Ground(Ground::String(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Proc::Ground(Ground::Bool(value))
    }

    pub fn send(chan: Proc, message: Proc) -> Self {
        Proc::Send(Output::new(chan, message))
    }

    /// Receive on one or more `(pattern name, channel)` bindings
    pub fn join<I, S>(bindings: I, body: Proc) -> Self
    where
        I: IntoIterator<Item = (S, Proc)>,
        S: Into<String>,
    {
        let actions = bindings
            .into_iter()
            .map(|(name, chan)| Action::new(Pattern::variable(name), chan))
            .collect();
        Proc::Join(Join::new(actions, body))
    }

    /// Compose two processes in parallel, flattening nested compositions
    pub fn par(left: Proc, right: Proc) -> Self {
        Proc::Par(Par::flatten([left, right]))
    }

    /// Compose any number of processes in parallel
    ///
    /// A single operand is returned unwrapped; no operands yields `Nil`.
    pub fn par_of<I>(operands: I) -> Self
    where
        I: IntoIterator<Item = Proc>,
    {
        let mut par = Par::flatten(operands);
        match par.procs.len() {
            0 => Proc::Nil,
            1 => par.procs.remove(0),
            _ => Proc::Par(par),
        }
    }

    pub fn new_names<I, S>(names: I, body: Proc) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Proc::New(New::new(
            names.into_iter().map(Variable::new).collect(),
            body,
        ))
    }

    pub fn new_vars(vars: Vec<Variable>, body: Proc) -> Self {
        Proc::New(New::new(vars, body))
    }

    pub fn bundle(proc: Proc) -> Self {
        Proc::Bundle(Bundle::new(proc))
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Proc::Nil)
    }

    /// Direct sub-processes, in source order
    pub fn subprocs(&self) -> Vec<&Proc> {
        match self {
            Proc::Nil | Proc::Ground(_) => Vec::new(),
            Proc::Send(send) => vec![send.chan.as_ref(), send.message.as_ref()],
            Proc::Join(join) => join
                .actions
                .iter()
                .map(|action| &action.chan)
                .chain(std::iter::once(join.body.as_ref()))
                .collect(),
            Proc::Par(par) => par.procs.iter().collect(),
            Proc::New(new) => vec![new.body.as_ref()],
            Proc::Bundle(bundle) => vec![bundle.proc.as_ref()],
        }
    }

    /// Pre-order walk over this process and every process nested inside it
    pub fn descendants(&self) -> Vec<&Proc> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(proc) = stack.pop() {
            out.push(proc);
            stack.extend(proc.subprocs().into_iter().rev());
        }
        out
    }

    /// Nesting depth; leaves have depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .subprocs()
            .into_iter()
            .map(Proc::depth)
            .max()
            .unwrap_or(0)
    }
}

impl From<Ground> for Proc {
    fn from(ground: Ground) -> Self {
        Proc::Ground(ground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_par_flattens_nested_operands() {
        let left = Proc::par(Proc::nil(), Proc::int(1));
        let proc = Proc::par(left, Proc::bool(true));

        assert_eq!(
            proc,
            Proc::Par(Par {
                procs: vec![Proc::Nil, Proc::int(1), Proc::bool(true)]
            })
        );
    }

    #[test]
    fn test_par_of_unwraps_single_operand() {
        assert_eq!(Proc::par_of([Proc::int(7)]), Proc::int(7));
        assert_eq!(Proc::par_of(Vec::new()), Proc::Nil);
    }

    #[test]
    fn test_join_keeps_binding_order() {
        let proc = Proc::join([("x", Proc::nil()), ("y", Proc::int(2))], Proc::nil());
        let Proc::Join(join) = proc else {
            panic!("expected join");
        };
        let names: Vec<_> = join
            .actions
            .iter()
            .flat_map(|action| action.pattern.bound_names())
            .collect();
        assert_eq!(names, vec!["x", "y"]);
    }

    #[test]
    fn test_descendants_are_pre_order() {
        let proc = Proc::send(
            Proc::int(1),
            Proc::par(Proc::bool(false), Proc::bundle(Proc::nil())),
        );
        let visited: Vec<_> = proc.descendants();

        assert_eq!(visited.len(), 6);
        assert_eq!(visited[1], &Proc::int(1));
        assert_eq!(visited[3], &Proc::bool(false));
        assert_eq!(visited[5], &Proc::Nil);
        assert_eq!(proc.depth(), 4);
    }
}
