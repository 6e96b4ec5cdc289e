//! XML-like AST tag serialization
//!
//! Serializes a process tree to an XML-like format that directly reflects the node structure.
//!
//! ## Format
//!
//! - Node kind → tag name
//! - Node label (ground value, declared names) → text content
//! - Children → nested tags (no wrapper)
//!
//! ## Example
//!
//! ```text
//! <join>
//!   <action>
//!     <variableP>x</variableP>
//!     <nil></nil>
//!   </action>
//!   <ground>int 4</ground>
//! </join>
//! ```

use crate::rhoxy::ast::{Node, Proc};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn visit(&mut self, node: Node<'_>) {
        let tag = node.kind().tag();
        self.push_indent(&format!("<{tag}>"));
        self.output.push_str(&escape_xml(&node.label()));

        let children = node.children();
        if !children.is_empty() {
            self.output.push('\n');
            self.indent_level += 1;
            for child in children {
                self.visit(child);
            }
            self.indent_level -= 1;
            self.push_indent("");
        }

        self.output.push_str(&format!("</{tag}>\n"));
    }
}

/// Serialize a process and everything under it
pub fn serialize_proc(proc: &Proc) -> String {
    let mut serializer = TagSerializer {
        output: String::new(),
        indent_level: 0,
    };
    serializer.visit(Node::from(proc));
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
