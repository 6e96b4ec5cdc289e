//! Uniform access to every node kind
//!
//! [Proc] covers the process kinds only. Actions, patterns and variables are not processes
//! but are still nodes of the tree, so tooling that wants to visit *everything* walks the
//! borrowed [Node] view, whose variants cover all ten node kinds.

use super::elements::{
    Action, Bundle, Ground, Join, New, Output, Par, Pattern, Proc, Variable, VariableP,
};
use std::fmt;

/// The ten kinds of AST node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Nil,
    Ground,
    Send,
    Join,
    Action,
    Par,
    New,
    Bundle,
    Variable,
    VariableP,
}

impl NodeKind {
    /// The tag this kind carries in serialized trees
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Nil => "nil",
            NodeKind::Ground => "ground",
            NodeKind::Send => "send",
            NodeKind::Join => "join",
            NodeKind::Action => "action",
            NodeKind::Par => "par",
            NodeKind::New => "new",
            NodeKind::Bundle => "bundle",
            NodeKind::Variable => "variable",
            NodeKind::VariableP => "variableP",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Common interface for AST nodes
pub trait AstNode {
    fn node_kind(&self) -> NodeKind;
    fn display_label(&self) -> String;
}

/// Borrowed view of any node in a process tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node<'a> {
    Nil,
    Ground(&'a Ground),
    Send(&'a Output),
    Join(&'a Join),
    Action(&'a Action),
    Par(&'a Par),
    New(&'a New),
    Bundle(&'a Bundle),
    Variable(&'a Variable),
    VariableP(&'a VariableP),
}

impl<'a> Node<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Nil => NodeKind::Nil,
            Node::Ground(_) => NodeKind::Ground,
            Node::Send(_) => NodeKind::Send,
            Node::Join(_) => NodeKind::Join,
            Node::Action(_) => NodeKind::Action,
            Node::Par(_) => NodeKind::Par,
            Node::New(_) => NodeKind::New,
            Node::Bundle(_) => NodeKind::Bundle,
            Node::Variable(_) => NodeKind::Variable,
            Node::VariableP(_) => NodeKind::VariableP,
        }
    }

    /// Child nodes in source order
    pub fn children(&self) -> Vec<Node<'a>> {
        match *self {
            Node::Nil | Node::Ground(_) | Node::Variable(_) | Node::VariableP(_) => Vec::new(),
            Node::Send(send) => vec![
                Node::from(send.chan.as_ref()),
                Node::from(send.message.as_ref()),
            ],
            Node::Join(join) => join
                .actions
                .iter()
                .map(Node::Action)
                .chain(std::iter::once(Node::from(join.body.as_ref())))
                .collect(),
            Node::Action(action) => vec![Node::from(&action.pattern), Node::from(&action.chan)],
            Node::Par(par) => par.procs.iter().map(Node::from).collect(),
            Node::New(new) => new
                .vars
                .iter()
                .map(Node::Variable)
                .chain(std::iter::once(Node::from(new.body.as_ref())))
                .collect(),
            Node::Bundle(bundle) => vec![Node::from(bundle.proc.as_ref())],
        }
    }

    /// Short human-readable description of the node's own data, empty when it has none
    pub fn label(&self) -> String {
        match self {
            Node::Ground(ground) => format!("{} {}", ground.type_name(), ground),
            Node::Variable(var) => match &var.uri {
                Some(uri) => format!("{} `{}`", var.given_name, uri),
                None => var.given_name.clone(),
            },
            Node::VariableP(var) => var.given_name.clone(),
            Node::New(new) => new.names().collect::<Vec<_>>().join(", "),
            Node::Nil
            | Node::Send(_)
            | Node::Join(_)
            | Node::Action(_)
            | Node::Par(_)
            | Node::Bundle(_) => String::new(),
        }
    }

    /// Pre-order walk over this node and all of its descendants
    pub fn walk(&self) -> Vec<Node<'a>> {
        let mut out = Vec::new();
        let mut stack = vec![*self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().into_iter().rev());
        }
        out
    }
}

impl<'a> From<&'a Proc> for Node<'a> {
    fn from(proc: &'a Proc) -> Self {
        match proc {
            Proc::Nil => Node::Nil,
            Proc::Ground(ground) => Node::Ground(ground),
            Proc::Send(send) => Node::Send(send),
            Proc::Join(join) => Node::Join(join),
            Proc::Par(par) => Node::Par(par),
            Proc::New(new) => Node::New(new),
            Proc::Bundle(bundle) => Node::Bundle(bundle),
        }
    }
}

impl<'a> From<&'a Pattern> for Node<'a> {
    fn from(pattern: &'a Pattern) -> Self {
        match pattern {
            Pattern::Variable(var) => Node::VariableP(var),
        }
    }
}

impl AstNode for Proc {
    fn node_kind(&self) -> NodeKind {
        Node::from(self).kind()
    }

    fn display_label(&self) -> String {
        Node::from(self).label()
    }
}

impl AstNode for Action {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn display_label(&self) -> String {
        self.pattern.bound_names().join(", ")
    }
}

impl AstNode for Variable {
    fn node_kind(&self) -> NodeKind {
        NodeKind::Variable
    }

    fn display_label(&self) -> String {
        Node::Variable(self).label()
    }
}

impl AstNode for VariableP {
    fn node_kind(&self) -> NodeKind {
        NodeKind::VariableP
    }

    fn display_label(&self) -> String {
        self.given_name.clone()
    }
}
