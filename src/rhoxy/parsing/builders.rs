//! Reduction layer: grammar matches to AST nodes
//!
//! Grammar rules hand their raw captures here; these functions attach the node shapes.
//! Associative constructs are accumulated into flat lists explicitly, independent of the
//! shape the grammar combinators return, so an N-operand chain never nests into pairs.

use crate::rhoxy::ast::{Action, Bundle, Join, New, Output, Par, Pattern, Proc, Variable};

/// A declared name with the resource URI it binds, if any
pub(crate) type Decl = (String, Option<String>);

/// Reduce `first | rest[0] | rest[1] ...` to one flat `Par`, or to `first` alone
pub(crate) fn par(first: Proc, rest: Vec<Proc>) -> Proc {
    if rest.is_empty() {
        return first;
    }

    let mut procs = Vec::with_capacity(rest.len() + 1);
    procs.push(first);
    procs.extend(rest);
    Proc::Par(Par::flatten(procs))
}

pub(crate) fn send(chan: Proc, message: Proc) -> Proc {
    Proc::Send(Output::new(chan, message))
}

pub(crate) fn action(name: String, chan: Proc) -> Action {
    Action::new(Pattern::variable(name), chan)
}

/// Actions arrive in source order and stay that way; one action is not special-cased
pub(crate) fn join(actions: Vec<Action>, body: Proc) -> Proc {
    Proc::Join(Join::new(actions, body))
}

pub(crate) fn new(decls: Vec<Decl>, body: Proc) -> Proc {
    let vars = decls
        .into_iter()
        .map(|(name, uri)| match uri {
            Some(uri) => Variable::with_uri(name, uri),
            None => Variable::new(name),
        })
        .collect();
    Proc::New(New::new(vars, body))
}

pub(crate) fn bundle(proc: Proc) -> Proc {
    Proc::Bundle(Bundle::new(proc))
}
