// src/signatures/mod.rs
//! Structural signatures: function and method names with their parameter
//! lists, in declaration order.

use std::fmt;

use serde::Serialize;
use tree_sitter::{Node, Tree};

use crate::error::Result;
use crate::lang::Lang;
use crate::source::SourceFile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralSignature {
    pub name: String,
    /// Parameter list exactly as written, including delimiters.
    pub parameters: String,
}

impl fmt::Display for StructuralSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.parameters)
    }
}

/// Parses `file` and collects its signatures.
///
/// # Errors
/// Returns `ParserInitializationFailed` if the file cannot be parsed.
pub fn extract(file: &SourceFile) -> Result<Vec<StructuralSignature>> {
    let tree = file.parse()?;
    Ok(collect(&tree, file.lang, &file.bytes))
}

/// Pre-order walk of `tree`, so nested declarations follow their parent.
#[must_use]
pub fn collect(tree: &Tree, lang: Lang, source: &[u8]) -> Vec<StructuralSignature> {
    let kinds = lang.function_kinds();
    let mut signatures = Vec::new();
    let mut stack = vec![tree.root_node()];

    while let Some(node) = stack.pop() {
        if kinds.contains(&node.kind()) {
            if let Some(sig) = signature_of(node, source) {
                signatures.push(sig);
            }
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.named_children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    signatures
}

fn signature_of(node: Node, source: &[u8]) -> Option<StructuralSignature> {
    let name = node.child_by_field_name("name")?.utf8_text(source).ok()?;
    let parameters = node
        .child_by_field_name("parameters")
        .and_then(|p| p.utf8_text(source).ok())
        .unwrap_or("()");

    Some(StructuralSignature {
        name: name.to_string(),
        parameters: parameters.to_string(),
    })
}
