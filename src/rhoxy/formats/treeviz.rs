//! Treeviz formatter for process trees
//!
//! One line per node, with nesting drawn by box connectors so deep trees stay scannable.
//! Each line is `<prefix><connector> <kind>: <label>`, with the label truncated to 30
//! characters and omitted when the node carries none. The root line has no connector.
//!
//! ```text
//! new: x
//! ├─ variable: x
//! └─ par
//!   ├─ send
//!   │ ├─ nil
//!   │ └─ ground: int 1
//!   └─ nil
//! ```

use crate::rhoxy::ast::{Node, Proc};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn node_line(node: &Node<'_>) -> String {
    let label = node.label();
    if label.is_empty() {
        node.kind().to_string()
    } else {
        format!("{}: {}", node.kind(), truncate(&label, 30))
    }
}

pub fn to_treeviz_str(proc: &Proc) -> String {
    let root = Node::from(proc);
    let mut result = node_line(&root);
    result.push('\n');
    append_children(&mut result, &root.children(), "");
    result
}

fn append_node(result: &mut String, node: &Node<'_>, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    result.push_str(&format!("{}{} {}\n", prefix, connector, node_line(node)));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &node.children(), &new_prefix);
}

fn append_children(result: &mut String, children: &[Node<'_>], prefix: &str) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_node(result, child, prefix, is_last);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_is_a_single_line() {
        assert_eq!(to_treeviz_str(&Proc::bool(true)), "ground: bool true\n");
    }

    #[test]
    fn test_nested_connectors() {
        let proc = Proc::bundle(Proc::par(Proc::send(Proc::nil(), Proc::int(1)), Proc::nil()));
        assert_eq!(
            to_treeviz_str(&proc),
            "bundle\n└─ par\n  ├─ send\n  │ ├─ nil\n  │ └─ ground: int 1\n  └─ nil\n"
        );
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let proc = Proc::string("a".repeat(40));
        let line = to_treeviz_str(&proc);
        assert!(line.ends_with("...\n"));
        assert!(line.chars().count() < 50);
    }
}
