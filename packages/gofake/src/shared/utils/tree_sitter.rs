//! Tree-sitter Utility Functions
//!
//! Common helpers for walking tree-sitter Go syntax trees. Nodes are `Copy`,
//! so helpers take them by value and hand back nodes tied to the tree lifetime.

use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct child node by kind
#[inline]
pub fn find_child_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Find all direct children whose kind is one of `kinds`
pub fn find_children_by_kinds<'tree>(node: Node<'tree>, kinds: &[&str]) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|child| kinds.contains(&child.kind()))
        .collect();
    found
}

/// Named children in source order
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}

/// All children (named or anonymous) carrying the given field name
pub fn children_by_field<'tree>(node: Node<'tree>, field: &str) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    let children = node.children_by_field_name(field, &mut cursor).collect();
    children
}

/// Find all descendants by kind (depth-first, source order)
pub fn find_descendants_by_kind<'tree>(node: Node<'tree>, kind: &str) -> Vec<Node<'tree>> {
    let mut result = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            result.push(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    result
}

/// First `ERROR` or `MISSING` node in the tree, if the parse was not clean
pub fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    let mut stack = vec![root];
    while let Some(current) = stack.pop() {
        if current.is_error() || current.is_missing() {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                if child.has_error() || child.is_missing() {
                    stack.push(child);
                }
            }
        }
    }
    Some(root)
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
#[inline]
pub fn node_text<'src>(node: Node<'_>, source: &'src str) -> &'src str {
    &source[node.start_byte()..node.end_byte()]
}

/// Extract text content from a node as owned String
#[inline]
pub fn node_text_owned(node: Node<'_>, source: &str) -> String {
    node_text(node, source).to_string()
}

/// 1-indexed (line, column) of the node start
#[inline]
pub fn node_position(node: Node<'_>) -> (usize, usize) {
    let pos = node.start_position();
    (pos.row + 1, pos.column + 1)
}

/// Unquote a Go interpreted (`"..."`) or raw (`` `...` ``) string literal.
pub fn unquote_string_literal(literal: &str) -> String {
    let trimmed = literal.trim();
    if trimmed.len() >= 2 {
        let first = trimmed.as_bytes()[0];
        let last = trimmed.as_bytes()[trimmed.len() - 1];
        if (first == b'"' && last == b'"') || (first == b'`' && last == b'`') {
            return trimmed[1..trimmed.len() - 1].to_string();
        }
    }
    trimmed.to_string()
}

/// Reprint an anonymous type literal on one line.
///
/// Comments are dropped, whitespace runs collapse to one space, statement
/// breaks become `; ` and keyword spacing follows gofmt (`interface{`,
/// `struct{`, `func(`). String literals (struct tags) are copied untouched.
pub fn canonical_literal_text(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    for line in text.lines() {
        let compact = compact_line(line);
        if !compact.is_empty() {
            lines.push(compact);
        }
    }

    let mut out = String::new();
    for line in &lines {
        if !out.is_empty() {
            let after_open = out.ends_with('{') || out.ends_with('(') || out.ends_with(',');
            let before_close = line.starts_with('}') || line.starts_with(')');
            if after_open || before_close {
                out.push(' ');
            } else {
                out.push_str("; ");
            }
        }
        out.push_str(line);
    }

    out.replace("interface {", "interface{")
        .replace("struct {", "struct{")
        .replace("func (", "func(")
        .replace("{ }", "{}")
}

/// Trim one source line, drop a trailing `//` comment, collapse whitespace.
fn compact_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;
    let mut chars = line.trim().chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == '\\' && q == '"' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '"' | '`' | '\'' => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                quote = Some(c);
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => break,
            c if c.is_whitespace() => pending_space = !out.is_empty(),
            c => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }

    out
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse_go(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        parser.parse(code, None).unwrap()
    }

    #[test]
    fn test_find_child_by_kind() {
        let code = "package p\n\ntype T interface{}\n";
        let tree = parse_go(code);
        let root = tree.root_node();

        let clause = find_child_by_kind(root, "package_clause").unwrap();
        assert_eq!(node_text(clause, code), "package p");
        assert!(find_child_by_kind(root, "function_declaration").is_none());
    }

    #[test]
    fn test_find_descendants_by_kind() {
        let code = "package p\n\ntype A int\ntype B string\n";
        let tree = parse_go(code);

        let specs = find_descendants_by_kind(tree.root_node(), "type_spec");
        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn test_first_error_node_on_clean_tree() {
        let code = "package p\n";
        let tree = parse_go(code);
        assert!(first_error_node(tree.root_node()).is_none());
    }

    #[test]
    fn test_first_error_node_on_broken_tree() {
        let code = "package p\n\ntype T interface {\n\tM(\n";
        let tree = parse_go(code);
        assert!(first_error_node(tree.root_node()).is_some());
    }

    #[test]
    fn test_unquote_string_literal() {
        assert_eq!(unquote_string_literal("\"net/http\""), "net/http");
        assert_eq!(unquote_string_literal("`fmt`"), "fmt");
        assert_eq!(unquote_string_literal("fmt"), "fmt");
    }

    #[test]
    fn test_canonical_literal_text_single_line() {
        assert_eq!(canonical_literal_text("interface {}"), "interface{}");
        assert_eq!(canonical_literal_text("func(  string )   string"), "func( string ) string");
        assert_eq!(canonical_literal_text("struct{}"), "struct{}");
    }

    #[test]
    fn test_canonical_literal_text_multi_line() {
        let text = "interface {\n\tFoo() // comment\n\tBar(int) error\n}";
        assert_eq!(canonical_literal_text(text), "interface{ Foo(); Bar(int) error }");
    }

    #[test]
    fn test_canonical_literal_text_keeps_tags() {
        let text = "struct {\n\tA int `json:\"a  //b\"`\n}";
        assert_eq!(canonical_literal_text(text), "struct{ A int `json:\"a  //b\"` }");
    }
}
