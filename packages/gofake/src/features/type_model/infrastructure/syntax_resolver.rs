//! Syntax-path type resolution
//!
//! Recursive descent over tree-sitter-go type nodes. Composite shapes are
//! decomposed; anonymous function, struct and interface literals (and generic
//! instantiations) are kept as opaque text.

use tree_sitter::Node;

use crate::features::type_model::domain::{ChannelDirection, Type};
use crate::features::type_model::error::ResolveError;
use crate::shared::utils::tree_sitter::{
    canonical_literal_text, find_child_by_kind, find_descendants_by_kind, node_position,
    node_text, node_text_owned,
};

/// Resolve one type expression node into a [`Type`].
///
/// Variadic parameters are not handled here; callers wrap the element type
/// with [`Type::ellipsis`].
pub fn resolve_syntax(node: Node<'_>, source: &str) -> Result<Type, ResolveError> {
    match node.kind() {
        "parenthesized_type" => resolve_syntax(first_named(node)?, source),
        "type_identifier" => Ok(Type::basic(node_text(node, source))),
        "qualified_type" => {
            let package = field(node, "package")?;
            let name = field(node, "name")?;
            Ok(Type::qualified(
                node_text(package, source),
                node_text(name, source),
            ))
        }
        "pointer_type" => Ok(Type::pointer(resolve_syntax(first_named(node)?, source)?)),
        "slice_type" => Ok(Type::slice(resolve_syntax(field(node, "element")?, source)?)),
        "array_type" => {
            let length = field(node, "length")?;
            if length.kind() != "int_literal" {
                return Err(ResolveError::UnsupportedArrayLength {
                    text: node_text_owned(length, source),
                    line: node_position(length).0,
                });
            }
            let elem = resolve_syntax(field(node, "element")?, source)?;
            Ok(Type::array(elem, node_text(length, source)))
        }
        "map_type" => Ok(Type::map(
            resolve_syntax(field(node, "key")?, source)?,
            resolve_syntax(field(node, "value")?, source)?,
        )),
        "channel_type" => Ok(Type::channel(
            channel_direction(node),
            resolve_syntax(field(node, "value")?, source)?,
        )),
        "function_type" | "struct_type" | "interface_type" | "generic_type" => {
            Ok(opaque_literal(node, source))
        }
        other => Err(ResolveError::UnsupportedExpression {
            kind: other.to_string(),
            text: node_text_owned(node, source),
            line: node_position(node).0,
        }),
    }
}

/// Channel direction from the position of the `<-` token.
///
/// A leading arrow (`<-chan T`) receives; an arrow after the keyword
/// (`chan<- T`) sends.
pub(crate) fn channel_direction(node: Node<'_>) -> ChannelDirection {
    let mut cursor = node.walk();
    let tokens: Vec<&str> = node
        .children(&mut cursor)
        .filter(|c| !c.is_named())
        .map(|c| c.kind())
        .collect();

    match tokens.as_slice() {
        ["<-", "chan", ..] => ChannelDirection::Receive,
        ["chan", "<-", ..] => ChannelDirection::Send,
        _ => ChannelDirection::Both,
    }
}

/// Anonymous literal reprinted on one line, remembering the packages it names.
pub(crate) fn opaque_literal(node: Node<'_>, source: &str) -> Type {
    let mentions = find_descendants_by_kind(node, "qualified_type")
        .into_iter()
        .filter_map(|q| q.child_by_field_name("package"))
        .map(|p| node_text_owned(p, source))
        .collect();
    Type::literal(canonical_literal_text(node_text(node, source)), mentions)
}

fn field<'tree>(node: Node<'tree>, name: &str) -> Result<Node<'tree>, ResolveError> {
    node.child_by_field_name(name)
        .ok_or_else(|| malformed(node))
}

fn first_named(node: Node<'_>) -> Result<Node<'_>, ResolveError> {
    node.named_child(0)
        .or_else(|| find_child_by_kind(node, "type_identifier"))
        .ok_or_else(|| malformed(node))
}

fn malformed(node: Node<'_>) -> ResolveError {
    ResolveError::Malformed {
        kind: node.kind().to_string(),
        line: node_position(node).0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::{Parser, Tree};

    fn parse_go(code: &str) -> Tree {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language()).unwrap();
        parser.parse(code, None).unwrap()
    }

    /// Resolve the type of `type T <expr>` declared in a one-line source.
    fn resolve_decl(expr: &str) -> Result<Type, ResolveError> {
        let code = format!("package p\n\ntype T {}\n", expr);
        let tree = parse_go(&code);
        let spec = find_descendants_by_kind(tree.root_node(), "type_spec")[0];
        let ty = spec.child_by_field_name("type").unwrap();
        resolve_syntax(ty, &code)
    }

    #[test]
    fn test_resolve_identifiers() {
        assert_eq!(resolve_decl("int").unwrap(), Type::basic("int"));
        assert_eq!(
            resolve_decl("fmt.Stringer").unwrap(),
            Type::qualified("fmt", "Stringer")
        );
    }

    #[test]
    fn test_resolve_composites() {
        assert_eq!(
            resolve_decl("map[string][]*int").unwrap().parameter_format(),
            "map[string][]*int"
        );
        assert_eq!(
            resolve_decl("[16]byte").unwrap(),
            Type::array(Type::basic("byte"), "16")
        );
        assert_eq!(
            resolve_decl("*(io.Reader)").unwrap(),
            Type::pointer(Type::qualified("io", "Reader"))
        );
    }

    #[test]
    fn test_resolve_channels() {
        assert_eq!(
            resolve_decl("chan int").unwrap().parameter_format(),
            "chan int"
        );
        assert_eq!(
            resolve_decl("chan<- int").unwrap().parameter_format(),
            "chan<- int"
        );
        assert_eq!(
            resolve_decl("<-chan int").unwrap().parameter_format(),
            "<-chan int"
        );
    }

    #[test]
    fn test_resolve_literals_as_opaque_text() {
        let f = resolve_decl("func(io.Reader) (int, error)").unwrap();
        assert_eq!(f.parameter_format(), "func(io.Reader) (int, error)");
        assert_eq!(f.qualifiers(), vec!["io"]);

        let i = resolve_decl("interface {\n\tFoo() string\n}").unwrap();
        assert_eq!(i.parameter_format(), "interface{ Foo() string }");

        let s = resolve_decl("struct{}").unwrap();
        assert_eq!(s.parameter_format(), "struct{}");
    }

    #[test]
    fn test_non_literal_array_length_fails() {
        let err = resolve_decl("[N]int").unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedArrayLength { ref text, line: 3 } if text == "N"));
    }
}
