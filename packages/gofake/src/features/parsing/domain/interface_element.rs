//! Classification of `interface_type` members
//!
//! Covers both the current grammar (`method_elem`, `type_elem`) and the older
//! one (`method_spec`, `interface_type_name`, `constraint_elem`).

use tree_sitter::Node;

use crate::features::type_model::{is_predeclared, is_predeclared_interface};
use crate::shared::utils::tree_sitter::{named_children, node_text};

#[derive(Debug, Clone, Copy)]
pub enum InterfaceElement<'tree> {
    /// Method signature with `name`, `parameters` and optional `result` fields
    Method(Node<'tree>),
    /// Embedded interface: a `type_identifier` or `qualified_type`
    Embed(Node<'tree>),
    /// Type-set term (`~int | string`, `comparable`, ...)
    TypeSet(Node<'tree>),
}

pub fn interface_elements<'tree>(
    interface_type: Node<'tree>,
    source: &str,
) -> Vec<InterfaceElement<'tree>> {
    let mut out = Vec::new();
    collect(interface_type, source, &mut out);
    out
}

fn collect<'tree>(node: Node<'tree>, source: &str, out: &mut Vec<InterfaceElement<'tree>>) {
    for child in named_children(node) {
        match child.kind() {
            "comment" => {}
            "method_elem" | "method_spec" => out.push(InterfaceElement::Method(child)),
            "method_spec_list" => collect(child, source, out),
            "type_identifier" | "qualified_type" => out.push(classify_term(child, source)),
            "interface_type_name" | "type_elem" | "constraint_elem" => {
                let terms: Vec<Node<'tree>> = named_children(child)
                    .into_iter()
                    .filter(|t| t.kind() != "comment")
                    .collect();
                match terms.as_slice() {
                    [single] => out.push(classify_term(*single, source)),
                    _ => out.push(InterfaceElement::TypeSet(child)),
                }
            }
            _ => out.push(InterfaceElement::TypeSet(child)),
        }
    }
}

fn classify_term<'tree>(term: Node<'tree>, source: &str) -> InterfaceElement<'tree> {
    match term.kind() {
        "qualified_type" => InterfaceElement::Embed(term),
        "type_identifier" => {
            let name = node_text(term, source);
            if is_predeclared(name) && !is_predeclared_interface(name) {
                InterfaceElement::TypeSet(term)
            } else {
                InterfaceElement::Embed(term)
            }
        }
        _ => InterfaceElement::TypeSet(term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::utils::tree_sitter::find_descendants_by_kind;
    use tree_sitter::Parser;

    fn classify(code: &str) -> Vec<&'static str> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        let tree = parser.parse(code, None).unwrap();
        let iface = find_descendants_by_kind(tree.root_node(), "interface_type")[0];
        interface_elements(iface, code)
            .into_iter()
            .map(|e| match e {
                InterfaceElement::Method(_) => "method",
                InterfaceElement::Embed(_) => "embed",
                InterfaceElement::TypeSet(_) => "typeset",
            })
            .collect()
    }

    #[test]
    fn test_methods_and_embeds() {
        let code = "package p\n\ntype T interface {\n\t// doc\n\tfmt.Stringer\n\tBase\n\terror\n\tM(int) string\n}\n";
        assert_eq!(classify(code), vec!["embed", "embed", "embed", "method"]);
    }

    #[test]
    fn test_type_sets() {
        let code = "package p\n\ntype Number interface {\n\t~int | ~float64\n}\n";
        assert_eq!(classify(code), vec!["typeset"]);

        let code = "package p\n\ntype Cmp interface {\n\tcomparable\n}\n";
        assert_eq!(classify(code), vec!["typeset"]);
    }
}
