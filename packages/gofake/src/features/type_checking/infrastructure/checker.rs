//! Package-level type checker
//!
//! Checks a whole file set at once, so names declared in one file resolve in
//! another. Only what interface fakes depend on is checked: the package
//! clause, type declarations, and every type mentioned by an interface.
//!
//! Two modes:
//! - strict (`check`): the scanned package; every problem is an error.
//! - lenient (`check_lenient`): imported packages; interfaces that cannot be
//!   fully resolved are dropped, conflicting declarations keep the first.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;
use tree_sitter::Node;

use crate::features::imports::{guess_package_name, ImportBinding};
use crate::features::parsing::{interface_elements, InterfaceElement, ParsedFile};
use crate::features::type_checking::domain::{
    CheckedFunc, CheckedInterface, CheckedPackage, CheckedSignature, CheckedType, CheckedVar,
    PackageRef,
};
use crate::features::type_checking::error::CheckError;
use crate::features::type_checking::ports::PackageImporter;
use crate::features::type_model::infrastructure::syntax_resolver::channel_direction;
use crate::features::type_model::{is_predeclared, ResolveError};
use crate::shared::utils::tree_sitter::{
    canonical_literal_text, children_by_field, find_descendants_by_kind, named_children,
    node_position, node_text,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Strict,
    Lenient,
}

/// Type checker over parsed Go files.
///
/// With an importer, embeds of imported interfaces are flattened into the
/// method sets and import names that differ from their path are recognized.
#[derive(Default)]
pub struct TypeChecker<'i> {
    importer: Option<&'i dyn PackageImporter>,
}

impl<'i> TypeChecker<'i> {
    pub fn new() -> Self {
        Self { importer: None }
    }

    pub fn with_importer(importer: &'i dyn PackageImporter) -> Self {
        Self {
            importer: Some(importer),
        }
    }

    /// Check the package under generation.
    pub fn check(&self, path: &str, files: &[ParsedFile]) -> Result<CheckedPackage, CheckError> {
        self.run(path, files, Mode::Strict)
    }

    /// Check an imported package, keeping whatever resolves.
    pub fn check_lenient(
        &self,
        path: &str,
        files: &[ParsedFile],
    ) -> Result<CheckedPackage, CheckError> {
        self.run(path, files, Mode::Lenient)
    }

    fn run(&self, path: &str, files: &[ParsedFile], mode: Mode) -> Result<CheckedPackage, CheckError> {
        let first = files.first().ok_or_else(|| CheckError::NoFiles {
            path: path.to_string(),
        })?;
        let package_name = match mode {
            Mode::Strict => first.package_name().to_string(),
            Mode::Lenient => dominant_package_name(files),
        };
        let self_ref = PackageRef::new(package_name.as_str(), path);

        let mut members = Vec::new();
        for file in files {
            if file.package_name() == package_name {
                members.push(file);
                continue;
            }
            match mode {
                Mode::Strict => {
                    return Err(CheckError::MixedPackages {
                        file: file.path().to_path_buf(),
                        expected: package_name,
                        found: file.package_name().to_string(),
                    })
                }
                Mode::Lenient => {
                    debug!(package = path, file = %file.path().display(), "skipping file of another package");
                }
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // Declarations
        // ═══════════════════════════════════════════════════════════════════
        let mut declared: FxHashMap<String, (usize, Node<'_>)> = FxHashMap::default();
        for (idx, file) in members.iter().enumerate() {
            for decl in file.type_declarations() {
                let Some(name_node) = decl.child_by_field_name("name") else {
                    continue;
                };
                let name = file.text(name_node).to_string();
                if name == "_" {
                    continue;
                }
                if declared.contains_key(&name) {
                    if mode == Mode::Strict {
                        return Err(CheckError::Redeclared {
                            name,
                            file: file.path().to_path_buf(),
                            line: node_position(name_node).0,
                        });
                    }
                    continue;
                }
                declared.insert(name, (idx, decl));
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // Interface drafts
        // ═══════════════════════════════════════════════════════════════════
        let scopes: Vec<FileScope> = members.iter().map(|f| FileScope::new(f)).collect();
        let mut names: Vec<&String> = declared.keys().collect();
        names.sort();

        let mut drafts: FxHashMap<String, Draft> = FxHashMap::default();
        for name in names {
            let (idx, decl) = declared[name];
            let is_interface = decl.kind() == "type_spec"
                && decl
                    .child_by_field_name("type")
                    .map(|t| t.kind() == "interface_type")
                    .unwrap_or(false);
            if !is_interface {
                continue;
            }

            let ctx = Context {
                file: members[idx],
                scope: &scopes[idx],
                declared: &declared,
                self_ref: &self_ref,
                type_params: type_parameter_names(decl, members[idx].source()),
            };
            match self.draft_interface(name, decl, &ctx) {
                Ok(draft) => {
                    drafts.insert(name.clone(), draft);
                }
                Err(err) if mode == Mode::Lenient => {
                    debug!(package = path, interface = %name, error = %err, "dropping unresolvable interface");
                }
                Err(err) => return Err(err),
            }
        }

        // ═══════════════════════════════════════════════════════════════════
        // Method sets
        // ═══════════════════════════════════════════════════════════════════
        let interface_names: FxHashSet<&str> = declared
            .iter()
            .filter(|(_, (_, decl))| {
                decl.child_by_field_name("type")
                    .map(|t| t.kind() == "interface_type")
                    .unwrap_or(false)
            })
            .map(|(name, _)| name.as_str())
            .collect();
        let mut flattener = Flattener {
            drafts: &drafts,
            interface_names: &interface_names,
            importer: self.importer,
            memo: FxHashMap::default(),
            visiting: FxHashSet::default(),
        };
        let mut draft_names: Vec<&String> = drafts.keys().collect();
        draft_names.sort();

        let mut interfaces = Vec::new();
        for name in draft_names {
            let flat = flattener.flatten(name);
            let draft = &drafts[name];
            if !flat.complete && mode == Mode::Lenient {
                debug!(package = path, interface = %name, "dropping interface with unresolved embeds");
                continue;
            }
            interfaces.push(CheckedInterface {
                name: name.clone(),
                methods: flat.methods,
                generic: draft.generic,
                constraint: draft.constraint || flat.constraint,
            });
        }

        debug!(package = path, interfaces = interfaces.len(), mode = ?mode, "checked package");
        Ok(CheckedPackage {
            name: package_name,
            path: path.to_string(),
            interfaces,
        })
    }

    fn draft_interface(
        &self,
        name: &str,
        spec: Node<'_>,
        ctx: &Context<'_, '_>,
    ) -> Result<Draft, CheckError> {
        let mut draft = Draft {
            methods: Vec::new(),
            embeds: Vec::new(),
            generic: spec.child_by_field_name("type_parameters").is_some(),
            constraint: false,
        };
        let Some(body) = spec.child_by_field_name("type") else {
            return Ok(draft);
        };
        let source = ctx.file.source();

        for element in interface_elements(body, source) {
            match element {
                InterfaceElement::Method(node) => draft.methods.push(self.method(node, ctx)?),
                InterfaceElement::TypeSet(_) => draft.constraint = true,
                InterfaceElement::Embed(node) => match node.kind() {
                    "qualified_type" => {
                        let (package, embedded) = qualified_parts(node, source);
                        let package = self.qualifier(package, node, ctx)?;
                        draft.embeds.push(EmbedRef::Imported {
                            path: package.path,
                            name: embedded.to_string(),
                        });
                    }
                    _ => {
                        let embedded = node_text(node, source);
                        if ctx.declared.contains_key(embedded) {
                            draft.embeds.push(EmbedRef::Local(embedded.to_string()));
                        } else if embedded == "error" {
                            draft.embeds.push(EmbedRef::Error);
                        } else if embedded == "any" {
                            // adds no methods
                        } else if ctx.scope.has_dot_import {
                            draft.embeds.push(EmbedRef::Unknown(embedded.to_string()));
                        } else {
                            return Err(undefined_type(embedded, node, ctx));
                        }
                    }
                },
            }
        }

        debug!(interface = name, methods = draft.methods.len(), embeds = draft.embeds.len(), "drafted interface");
        Ok(draft)
    }

    fn method(&self, elem: Node<'_>, ctx: &Context<'_, '_>) -> Result<CheckedFunc, CheckError> {
        let source = ctx.file.source();
        let name = elem
            .child_by_field_name("name")
            .map(|n| node_text(n, source).to_string())
            .ok_or_else(|| malformed(elem, ctx))?;

        let mut variadic = false;
        let params = match elem.child_by_field_name("parameters") {
            Some(list) => self.vars(list, ctx, &mut variadic)?,
            None => Vec::new(),
        };
        let results = match elem.child_by_field_name("result") {
            Some(list) if list.kind() == "parameter_list" => {
                self.vars(list, ctx, &mut false)?
            }
            Some(ty) => vec![CheckedVar {
                name: String::new(),
                ty: self.convert(ty, ctx)?,
            }],
            None => Vec::new(),
        };

        Ok(CheckedFunc {
            name,
            signature: CheckedSignature {
                params,
                results,
                variadic,
            },
        })
    }

    fn vars(
        &self,
        list: Node<'_>,
        ctx: &Context<'_, '_>,
        variadic: &mut bool,
    ) -> Result<Vec<CheckedVar>, CheckError> {
        let source = ctx.file.source();
        let mut out = Vec::new();
        for decl in named_children(list) {
            let is_variadic = match decl.kind() {
                "parameter_declaration" => false,
                "variadic_parameter_declaration" => true,
                _ => continue,
            };
            let ty_node = decl
                .child_by_field_name("type")
                .ok_or_else(|| malformed(decl, ctx))?;
            let mut ty = self.convert(ty_node, ctx)?;
            if is_variadic {
                *variadic = true;
                ty = CheckedType::Slice { elem: Box::new(ty) };
            }

            let names = children_by_field(decl, "name");
            if names.is_empty() {
                out.push(CheckedVar {
                    name: String::new(),
                    ty,
                });
            } else {
                for n in names {
                    out.push(CheckedVar {
                        name: node_text(n, source).to_string(),
                        ty: ty.clone(),
                    });
                }
            }
        }
        Ok(out)
    }

    /// Convert a type expression, validating every name it uses.
    fn convert(&self, node: Node<'_>, ctx: &Context<'_, '_>) -> Result<CheckedType, CheckError> {
        let source = ctx.file.source();
        let child = |field: &str| node.child_by_field_name(field).ok_or_else(|| malformed(node, ctx));

        match node.kind() {
            "parenthesized_type" => {
                let inner = node.named_child(0).ok_or_else(|| malformed(node, ctx))?;
                self.convert(inner, ctx)
            }
            "type_identifier" => {
                let name = node_text(node, source);
                if ctx.declared.contains_key(name) {
                    Ok(CheckedType::Named {
                        name: name.to_string(),
                        package: Some(ctx.self_ref.clone()),
                    })
                } else if is_predeclared(name) {
                    Ok(CheckedType::Basic {
                        name: name.to_string(),
                    })
                } else if ctx.type_params.iter().any(|p| p == name) || ctx.scope.has_dot_import {
                    Ok(CheckedType::Named {
                        name: name.to_string(),
                        package: None,
                    })
                } else {
                    Err(undefined_type(name, node, ctx))
                }
            }
            "qualified_type" => {
                let (package, name) = qualified_parts(node, source);
                Ok(CheckedType::Named {
                    name: name.to_string(),
                    package: Some(self.qualifier(package, node, ctx)?),
                })
            }
            "pointer_type" => {
                let inner = node.named_child(0).ok_or_else(|| malformed(node, ctx))?;
                Ok(CheckedType::Pointer {
                    elem: Box::new(self.convert(inner, ctx)?),
                })
            }
            "slice_type" => Ok(CheckedType::Slice {
                elem: Box::new(self.convert(child("element")?, ctx)?),
            }),
            "array_type" => {
                let length = child("length")?;
                let len = parse_int_literal(node_text(length, source)).ok_or_else(|| {
                    CheckError::Resolve {
                        file: ctx.file.path().to_path_buf(),
                        source: ResolveError::UnsupportedArrayLength {
                            text: node_text(length, source).to_string(),
                            line: node_position(length).0,
                        },
                    }
                })?;
                Ok(CheckedType::Array {
                    len,
                    elem: Box::new(self.convert(child("element")?, ctx)?),
                })
            }
            "map_type" => Ok(CheckedType::Map {
                key: Box::new(self.convert(child("key")?, ctx)?),
                value: Box::new(self.convert(child("value")?, ctx)?),
            }),
            "channel_type" => Ok(CheckedType::Chan {
                direction: channel_direction(node),
                elem: Box::new(self.convert(child("value")?, ctx)?),
            }),
            "function_type" | "struct_type" | "interface_type" | "generic_type" => {
                let mut packages: Vec<PackageRef> = Vec::new();
                for qualified in find_descendants_by_kind(node, "qualified_type") {
                    let (package, _) = qualified_parts(qualified, source);
                    let package = self.qualifier(package, qualified, ctx)?;
                    if !packages.contains(&package) {
                        packages.push(package);
                    }
                }
                Ok(CheckedType::Literal {
                    text: canonical_literal_text(node_text(node, source)),
                    packages,
                })
            }
            other => Err(CheckError::Resolve {
                file: ctx.file.path().to_path_buf(),
                source: ResolveError::UnsupportedExpression {
                    kind: other.to_string(),
                    text: node_text(node, source).to_string(),
                    line: node_position(node).0,
                },
            }),
        }
    }

    /// Package bound to a qualifier in the current file.
    ///
    /// Guessed names are tried first; with an importer, default imports whose
    /// package clause differs from the path are found too.
    fn qualifier(
        &self,
        qualifier: &str,
        node: Node<'_>,
        ctx: &Context<'_, '_>,
    ) -> Result<PackageRef, CheckError> {
        if let Some(found) = ctx.scope.bindings.get(qualifier) {
            return Ok(found.clone());
        }
        if let Some(importer) = self.importer {
            for path in &ctx.scope.default_paths {
                if let Ok(package) = importer.import(path) {
                    if package.name == qualifier {
                        return Ok(package.package_ref());
                    }
                }
            }
        }
        Err(CheckError::UndefinedPackage {
            qualifier: qualifier.to_string(),
            file: ctx.file.path().to_path_buf(),
            line: node_position(node).0,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Scopes and drafts
// ═══════════════════════════════════════════════════════════════════════════

/// Names bound by one file's imports
struct FileScope {
    bindings: FxHashMap<String, PackageRef>,
    default_paths: Vec<String>,
    has_dot_import: bool,
}

impl FileScope {
    fn new(file: &ParsedFile) -> Self {
        let mut scope = Self {
            bindings: FxHashMap::default(),
            default_paths: Vec::new(),
            has_dot_import: false,
        };
        for decl in file.imports() {
            let package = PackageRef::new(guess_package_name(&decl.path), decl.path.as_str());
            match decl.binding {
                ImportBinding::Default => {
                    scope.default_paths.push(decl.path.clone());
                    scope.bindings.insert(package.name.clone(), package);
                }
                ImportBinding::Alias(alias) => {
                    scope.bindings.insert(alias, package);
                }
                ImportBinding::Dot => scope.has_dot_import = true,
                ImportBinding::Blank => {}
            }
        }
        scope
    }
}

struct Context<'f, 'tree> {
    file: &'f ParsedFile,
    scope: &'f FileScope,
    declared: &'f FxHashMap<String, (usize, Node<'tree>)>,
    self_ref: &'f PackageRef,
    type_params: Vec<String>,
}

enum EmbedRef {
    Local(String),
    Imported { path: String, name: String },
    Error,
    /// Possibly from a dot import; never resolvable here
    Unknown(String),
}

struct Draft {
    methods: Vec<CheckedFunc>,
    embeds: Vec<EmbedRef>,
    generic: bool,
    constraint: bool,
}

#[derive(Clone)]
struct Flat {
    methods: Vec<CheckedFunc>,
    constraint: bool,
    complete: bool,
}

struct Flattener<'a> {
    drafts: &'a FxHashMap<String, Draft>,
    /// Every declared interface, including drafts dropped in lenient mode
    interface_names: &'a FxHashSet<&'a str>,
    importer: Option<&'a dyn PackageImporter>,
    memo: FxHashMap<String, Flat>,
    visiting: FxHashSet<String>,
}

impl Flattener<'_> {
    /// Complete method set, sorted by name.
    fn flatten(&mut self, name: &str) -> Flat {
        if let Some(flat) = self.memo.get(name) {
            return flat.clone();
        }
        let drafts = self.drafts;
        let Some(draft) = drafts.get(name) else {
            // A dropped interface is unresolvable; any other type is a type-set term
            let dropped = self.interface_names.contains(name);
            return Flat {
                methods: Vec::new(),
                constraint: !dropped,
                complete: !dropped,
            };
        };
        if !self.visiting.insert(name.to_string()) {
            return Flat {
                methods: Vec::new(),
                constraint: false,
                complete: false,
            };
        }

        let mut flat = Flat {
            methods: draft.methods.clone(),
            constraint: false,
            complete: true,
        };
        for embed in &draft.embeds {
            match embed {
                EmbedRef::Local(embedded) => {
                    let sub = self.flatten(embedded);
                    flat.methods.extend(sub.methods);
                    flat.constraint |= sub.constraint;
                    flat.complete &= sub.complete;
                }
                EmbedRef::Error => flat.methods.push(error_method()),
                EmbedRef::Imported {
                    path,
                    name: embedded,
                } => match self.imported(path, embedded) {
                    Some(iface) => {
                        flat.methods.extend(iface.methods);
                        flat.constraint |= iface.constraint;
                        flat.complete &= !iface.generic;
                    }
                    None => flat.complete = false,
                },
                EmbedRef::Unknown(embedded) => {
                    debug!(interface = name, embed = %embedded, "embed not resolvable through dot import");
                    flat.complete = false;
                }
            }
        }
        self.visiting.remove(name);

        flat.methods.sort_by(|a, b| a.name.cmp(&b.name));
        flat.methods.dedup_by(|a, b| a.name == b.name);
        self.memo.insert(name.to_string(), flat.clone());
        flat
    }

    fn imported(&self, path: &str, name: &str) -> Option<CheckedInterface> {
        let importer = self.importer?;
        match importer.import(path) {
            Ok(package) => {
                let found = package.interface(name).cloned();
                if found.is_none() {
                    debug!(package = path, interface = name, "imported interface not found");
                }
                found
            }
            Err(err) => {
                debug!(package = path, error = %err, "import failed");
                None
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helpers
// ═══════════════════════════════════════════════════════════════════════════

fn error_method() -> CheckedFunc {
    CheckedFunc {
        name: "Error".to_string(),
        signature: CheckedSignature {
            params: Vec::new(),
            results: vec![CheckedVar {
                name: String::new(),
                ty: CheckedType::Basic {
                    name: "string".to_string(),
                },
            }],
            variadic: false,
        },
    }
}

/// Most common package clause; files of other packages are skipped
fn dominant_package_name(files: &[ParsedFile]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for file in files {
        match counts.iter_mut().find(|(name, _)| *name == file.package_name()) {
            Some((_, count)) => *count += 1,
            None => counts.push((file.package_name(), 1)),
        }
    }
    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.map(|(_, c)| count > c).unwrap_or(true) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name.to_string()).unwrap_or_default()
}

fn qualified_parts<'src>(node: Node<'_>, source: &'src str) -> (&'src str, &'src str) {
    let package = node
        .child_by_field_name("package")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))
        .unwrap_or_default();
    (package, name)
}

fn type_parameter_names(spec: Node<'_>, source: &str) -> Vec<String> {
    let Some(params) = spec.child_by_field_name("type_parameters") else {
        return Vec::new();
    };
    find_descendants_by_kind(params, "type_parameter_declaration")
        .into_iter()
        .chain(find_descendants_by_kind(params, "parameter_declaration"))
        .flat_map(|decl| children_by_field(decl, "name"))
        .map(|n| node_text(n, source).to_string())
        .collect()
}

/// Decimal, hex, octal or binary Go integer literal
fn parse_int_literal(text: &str) -> Option<u64> {
    let digits = text.replace('_', "");
    let lower = digits.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        u64::from_str_radix(bin, 2).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        u64::from_str_radix(oct, 8).ok()
    } else if lower.len() > 1 && lower.starts_with('0') {
        u64::from_str_radix(&lower[1..], 8).ok()
    } else {
        lower.parse().ok()
    }
}

fn undefined_type(name: &str, node: Node<'_>, ctx: &Context<'_, '_>) -> CheckError {
    CheckError::UndefinedType {
        name: name.to_string(),
        file: ctx.file.path().to_path_buf(),
        line: node_position(node).0,
    }
}

fn malformed(node: Node<'_>, ctx: &Context<'_, '_>) -> CheckError {
    CheckError::Resolve {
        file: ctx.file.path().to_path_buf(),
        source: ResolveError::Malformed {
            kind: node.kind().to_string(),
            line: node_position(node).0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::GoParser;
    use pretty_assertions::assert_eq;

    fn parse(files: &[(&str, &str)]) -> Vec<ParsedFile> {
        let mut parser = GoParser::new().unwrap();
        files
            .iter()
            .map(|(path, text)| parser.parse_source(*path, text.to_string()).unwrap())
            .collect()
    }

    #[test]
    fn test_cross_file_references_resolve() {
        let files = parse(&[
            (
                "a.go",
                "package p\n\nimport \"io\"\n\ntype Store interface {\n\tGet(key Key) (io.Reader, error)\n}\n",
            ),
            ("b.go", "package p\n\ntype Key string\n"),
        ]);
        let checked = TypeChecker::new().check("example.com/p", &files).unwrap();

        let store = checked.interface("Store").unwrap();
        let get = &store.methods[0];
        assert_eq!(
            get.signature.params[0].ty,
            CheckedType::Named {
                name: "Key".into(),
                package: Some(PackageRef::new("p", "example.com/p")),
            }
        );
        assert_eq!(
            get.signature.results[0].ty,
            CheckedType::Named {
                name: "Reader".into(),
                package: Some(PackageRef::new("io", "io")),
            }
        );
    }

    #[test]
    fn test_mixed_packages_fail() {
        let files = parse(&[("a.go", "package a\n"), ("b.go", "package b\n")]);
        let err = TypeChecker::new().check("x", &files).unwrap_err();
        assert!(matches!(err, CheckError::MixedPackages { ref found, .. } if found == "b"));
    }

    #[test]
    fn test_redeclared_fails() {
        let files = parse(&[
            ("a.go", "package p\n\ntype T interface{}\n"),
            ("b.go", "package p\n\ntype T int\n"),
        ]);
        let err = TypeChecker::new().check("p", &files).unwrap_err();
        assert!(matches!(err, CheckError::Redeclared { ref name, line: 3, .. } if name == "T"));
    }

    #[test]
    fn test_undefined_names_fail() {
        let files = parse(&[("a.go", "package p\n\ntype I interface {\n\tM(x Missing)\n}\n")]);
        let err = TypeChecker::new().check("p", &files).unwrap_err();
        assert!(matches!(err, CheckError::UndefinedType { ref name, line: 4, .. } if name == "Missing"));

        let files = parse(&[("a.go", "package p\n\ntype I interface {\n\tM() fmt.Stringer\n}\n")]);
        let err = TypeChecker::new().check("p", &files).unwrap_err();
        assert!(matches!(err, CheckError::UndefinedPackage { ref qualifier, .. } if qualifier == "fmt"));
    }

    #[test]
    fn test_lenient_drops_unresolvable_interfaces() {
        let files = parse(&[(
            "a.go",
            "package p\n\ntype Bad interface {\n\tM(x Missing)\n}\n\ntype Good interface {\n\tN() int\n}\n",
        )]);
        let checked = TypeChecker::new().check_lenient("p", &files).unwrap();
        let names: Vec<&str> = checked.interfaces.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Good"]);
    }

    #[test]
    fn test_method_sets_are_flattened_and_sorted() {
        let files = parse(&[(
            "a.go",
            "package p\n\ntype Reader interface {\n\tRead(p []byte) (n int, err error)\n}\n\ntype ReadCloser interface {\n\tReader\n\terror\n\tClose() error\n}\n",
        )]);
        let checked = TypeChecker::new().check("p", &files).unwrap();
        let rc = checked.interface("ReadCloser").unwrap();
        let names: Vec<&str> = rc.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Close", "Error", "Read"]);
    }

    #[test]
    fn test_variadic_parameter_is_slice_with_flag() {
        let files = parse(&[(
            "a.go",
            "package p\n\ntype Logger interface {\n\tLogf(format string, args ...interface{})\n}\n",
        )]);
        let checked = TypeChecker::new().check("p", &files).unwrap();
        let logf = &checked.interface("Logger").unwrap().methods[0];
        assert!(logf.signature.variadic);
        assert!(matches!(logf.signature.params[1].ty, CheckedType::Slice { .. }));
    }

    #[test]
    fn test_generic_and_constraint_markers() {
        let files = parse(&[(
            "a.go",
            "package p\n\ntype Getter[T any] interface {\n\tGet() T\n}\n\ntype Number interface {\n\t~int | ~float64\n}\n",
        )]);
        let checked = TypeChecker::new().check("p", &files).unwrap();
        assert!(checked.interface("Getter").unwrap().generic);
        assert!(checked.interface("Number").unwrap().constraint);
    }

    #[test]
    fn test_parse_int_literal() {
        assert_eq!(parse_int_literal("16"), Some(16));
        assert_eq!(parse_int_literal("0x10"), Some(16));
        assert_eq!(parse_int_literal("0o20"), Some(16));
        assert_eq!(parse_int_literal("020"), Some(16));
        assert_eq!(parse_int_literal("1_000"), Some(1000));
        assert_eq!(parse_int_literal("0"), Some(0));
    }
}
