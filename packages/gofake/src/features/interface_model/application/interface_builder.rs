//! Interface construction
//!
//! Two construction paths converge on one [`Interface`] representation:
//! syntax (tree-sitter nodes of the scanned files) and semantic (checker
//! output for interfaces of imported packages).

use tree_sitter::Node;

use crate::features::interface_model::domain::{
    Fakeability, Identifier, Interface, Method, ModelError,
};
use crate::features::parsing::{interface_elements, InterfaceElement};
use crate::features::type_checking::domain::{CheckedFunc, CheckedInterface, CheckedVar};
use crate::features::type_model::{resolve_semantic, resolve_syntax, ResolveError, Type};
use crate::shared::utils::tree_sitter::{children_by_field, node_position, node_text};
use crate::shared::utils::SymbolGenerator;

/// Prefix of synthesized parameter and result names
pub const IDENT_PREFIX: &str = "ident";

/// Accumulates the methods and embeds of one interface.
///
/// Owns the placeholder-name counter; it restarts for every method, so
/// synthesized names only depend on the method's own signature.
#[derive(Debug)]
pub struct InterfaceBuilder {
    interface: Interface,
    symbols: SymbolGenerator,
}

impl InterfaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            interface: Interface::new(name),
            symbols: SymbolGenerator::new(IDENT_PREFIX),
        }
    }

    /// Build an interface from a `type_spec` whose type is an `interface_type`.
    pub fn from_type_spec(spec: Node<'_>, source: &str) -> Result<Interface, ModelError> {
        let name = spec
            .child_by_field_name("name")
            .map(|n| node_text(n, source))
            .ok_or_else(|| malformed(spec, source))?;
        let body = spec
            .child_by_field_name("type")
            .ok_or_else(|| malformed(spec, source))?;

        let mut builder = Self::new(name);
        if spec.child_by_field_name("type_parameters").is_some() {
            builder.set_fakeability(Fakeability::Generic);
        }

        for element in interface_elements(body, source) {
            match element {
                InterfaceElement::Method(node) => builder.add_method_from_syntax(node, source)?,
                InterfaceElement::Embed(node) => match node_text(node, source) {
                    // `any` adds nothing to a method set
                    "any" => {}
                    embed => builder.add_embed(embed),
                },
                InterfaceElement::TypeSet(_) => builder.set_fakeability(Fakeability::Constraint),
            }
        }

        Ok(builder.build())
    }

    /// Build an interface from checker output; the method set is already
    /// complete, so no embeds are recorded.
    pub fn from_checked(checked: &CheckedInterface) -> Interface {
        let mut builder = Self::new(checked.name.as_str());
        if checked.generic {
            builder.set_fakeability(Fakeability::Generic);
        } else if checked.constraint {
            builder.set_fakeability(Fakeability::Constraint);
        }
        for func in &checked.methods {
            builder.add_method_from_semantic(func);
        }
        builder.build()
    }

    /// Add a method from a `method_elem` (or `method_spec`) node.
    pub fn add_method_from_syntax(
        &mut self,
        elem: Node<'_>,
        source: &str,
    ) -> Result<(), ModelError> {
        let name = elem
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .ok_or_else(|| malformed(elem, source))?;

        let params = match elem.child_by_field_name("parameters") {
            Some(list) => syntax_params(list, source),
            None => Ok(Vec::new()),
        };
        let results = match elem.child_by_field_name("result") {
            Some(result) if result.kind() == "parameter_list" => syntax_params(result, source),
            Some(result) => resolve_syntax(result, source).map(|ty| vec![(None, ty)]),
            None => Ok(Vec::new()),
        };

        let wrap = |source: ResolveError| ModelError::Resolve {
            interface: self.interface.name.clone(),
            method: name.clone(),
            source,
        };
        let params = params.map_err(wrap)?;
        let results = results.map_err(wrap)?;

        self.push_method(name, params, results);
        Ok(())
    }

    /// Add a method from a checked function.
    ///
    /// A variadic signature carries its last parameter as a slice; it is
    /// rewritten to an ellipsis so both paths render `...T`.
    pub fn add_method_from_semantic(&mut self, func: &CheckedFunc) {
        let to_pair = |var: &CheckedVar| (declared_name(&var.name), resolve_semantic(&var.ty));

        let mut params: Vec<(Option<String>, Type)> =
            func.signature.params.iter().map(to_pair).collect();
        if func.signature.variadic {
            if let Some((_, last)) = params.last_mut() {
                *last = last.clone().into_variadic();
            }
        }
        let results = func.signature.results.iter().map(to_pair).collect();

        self.push_method(func.name.clone(), params, results);
    }

    pub fn add_embed(&mut self, name: impl Into<String>) {
        self.interface.embeds.push(name.into());
    }

    pub fn set_fakeability(&mut self, fakeability: Fakeability) {
        // Generic wins over constraint: both skip, generic is the clearer reason
        if self.interface.fakeability != Fakeability::Generic {
            self.interface.fakeability = fakeability;
        }
    }

    pub fn build(self) -> Interface {
        self.interface
    }

    fn push_method(
        &mut self,
        name: String,
        params: Vec<(Option<String>, Type)>,
        results: Vec<(Option<String>, Type)>,
    ) {
        let declared: Vec<String> = params
            .iter()
            .chain(results.iter())
            .filter_map(|(n, _)| n.clone())
            .collect();

        self.symbols.reset();
        let mut identify = |(name, ty): (Option<String>, Type)| {
            let name = name.unwrap_or_else(|| self.symbols.next_avoiding(&declared));
            Identifier::new(name, ty)
        };
        let params = params.into_iter().map(&mut identify).collect();
        let results = results.into_iter().map(&mut identify).collect();

        self.interface
            .methods
            .push(Method::new(self.interface.name.as_str(), name, params, results));
    }
}

/// `None` for unnamed and blank identifiers
fn declared_name(name: &str) -> Option<String> {
    match name {
        "" | "_" => None,
        other => Some(other.to_string()),
    }
}

/// Flatten a `parameter_list` into (declared name, type) pairs.
///
/// `a, b int` yields two pairs; an unnamed `int` yields one with no name.
fn syntax_params(
    list: Node<'_>,
    source: &str,
) -> Result<Vec<(Option<String>, Type)>, ResolveError> {
    let mut out = Vec::new();
    let mut cursor = list.walk();
    let decls: Vec<Node<'_>> = list.named_children(&mut cursor).collect();

    for decl in decls {
        let variadic = match decl.kind() {
            "parameter_declaration" => false,
            "variadic_parameter_declaration" => true,
            _ => continue,
        };
        let ty_node = decl
            .child_by_field_name("type")
            .ok_or_else(|| ResolveError::Malformed {
                kind: decl.kind().to_string(),
                line: node_position(decl).0,
            })?;
        let mut ty = resolve_syntax(ty_node, source)?;
        if variadic {
            ty = Type::ellipsis(ty);
        }

        let names = children_by_field(decl, "name");
        if names.is_empty() {
            out.push((None, ty));
        } else {
            for name in names {
                out.push((declared_name(node_text(name, source)), ty.clone()));
            }
        }
    }

    Ok(out)
}

fn malformed(node: Node<'_>, source: &str) -> ModelError {
    ModelError::MalformedElement {
        text: node_text(node, source).lines().next().unwrap_or_default().to_string(),
        line: node_position(node).0,
    }
}
