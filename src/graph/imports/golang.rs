// src/graph/imports/golang.rs
//! Go internal references.
//!
//! Two sources feed the result: import declarations whose path starts with
//! the module name from `go.mod`, and `alias.Symbol(...)` calls whose alias
//! names a package known to the [`PackagePathIndex`].

use std::collections::HashSet;

use tree_sitter::{Node, Tree};

use super::{ImportStrategy, NodeImport};
use crate::error::Result;
use crate::graph::module::ModuleDescriptor;
use crate::graph::package_index::PackagePathIndex;
use crate::source::SourceFile;

pub struct GolangStrategy;

impl ImportStrategy for GolangStrategy {
    fn extract(&self, file: &SourceFile, index: &PackagePathIndex) -> Result<Vec<NodeImport>> {
        let module = ModuleDescriptor::load(&file.path)?;
        let tree = file.parse()?;
        Ok(resolve(&tree, file, &module.name, index))
    }
}

/// Collects declared and call-site references for one parsed file,
/// deduplicated and in first-seen order.
#[must_use]
pub fn resolve(
    tree: &Tree,
    file: &SourceFile,
    module: &str,
    index: &PackagePathIndex,
) -> Vec<NodeImport> {
    let root = tree.root_node();
    let mut seen = HashSet::new();
    let mut imports = Vec::new();

    let declared = declared_imports(root, &file.bytes)
        .into_iter()
        .filter_map(|path| internal_package_key(module, &path));
    let called = symbol_references(root, &file.bytes, index, &file.id);

    for target in declared.chain(called) {
        if seen.insert(target.clone()) {
            imports.push(NodeImport::new(file.id.clone(), target));
        }
    }

    imports
}

/// Import path literals from top-level `import` declarations, single and grouped.
#[must_use]
pub fn declared_imports(root: Node, source: &[u8]) -> Vec<String> {
    let mut paths = Vec::new();
    let mut cursor = root.walk();

    for decl in root.children(&mut cursor) {
        if decl.kind() != "import_declaration" {
            continue;
        }
        let mut decl_cursor = decl.walk();
        for child in decl.children(&mut decl_cursor) {
            match child.kind() {
                "import_spec" => push_spec_path(child, source, &mut paths),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    for spec in child.children(&mut list_cursor) {
                        if spec.kind() == "import_spec" {
                            push_spec_path(spec, source, &mut paths);
                        }
                    }
                }
                _ => {}
            }
        }
    }

    paths
}

fn push_spec_path(spec: Node, source: &[u8], paths: &mut Vec<String>) {
    let Some(path) = spec.child_by_field_name("path") else {
        return;
    };
    if let Ok(text) = path.utf8_text(source) {
        paths.push(text.trim_matches(|c| c == '"' || c == '`').to_string());
    }
}

/// Maps an import path to its in-module package key, or `None` for external
/// imports.
///
/// Only the first path segment below the module root is kept. A leading
/// `internal` segment is Go's visibility marker and is stepped over.
#[must_use]
pub fn internal_package_key(module: &str, import: &str) -> Option<String> {
    let rest = import.strip_prefix(module)?.strip_prefix('/')?;
    let mut segments = rest.split('/').filter(|s| !s.is_empty());

    let first = segments.next()?;
    if first == "internal" {
        if let Some(next) = segments.next() {
            return Some(next.to_string());
        }
    }
    Some(first.to_string())
}

/// Resolves `alias.Symbol` call sites through the package index, keeping
/// first-seen order. `self_id` is never returned.
#[must_use]
pub fn symbol_references(
    root: Node,
    source: &[u8],
    index: &PackagePathIndex,
    self_id: &str,
) -> Vec<String> {
    let mut emitted: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for alias in call_sites(root, source) {
        for target in index.files_for(alias).into_iter().flatten() {
            if target != self_id && emitted.insert(target.as_str()) {
                found.push(target.clone());
            }
        }
    }

    found
}

/// Aliases of every `alias.Symbol(...)` call in pre-order, one per call
/// site. An explicit stack guarded by a visited set reaches each node once.
#[must_use]
pub fn call_sites<'s>(root: Node, source: &'s [u8]) -> Vec<&'s str> {
    let mut visited: HashSet<usize> = HashSet::with_capacity(source.len() / 4 + 16);
    let mut aliases = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.id()) {
            continue;
        }
        if let Some(alias) = call_alias(node, source) {
            aliases.push(alias);
        }

        let mut cursor = node.walk();
        let children: Vec<Node> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    aliases
}

/// `alias` of a `alias.Symbol(...)` call, if `node` is one.
fn call_alias<'s>(node: Node, source: &'s [u8]) -> Option<&'s str> {
    if node.kind() != "call_expression" {
        return None;
    }
    let callee = node.child_by_field_name("function")?;
    if callee.kind() != "selector_expression" {
        return None;
    }
    let operand = callee.child_by_field_name("operand")?;
    if operand.kind() != "identifier" {
        return None;
    }
    operand.utf8_text(source).ok()
}
