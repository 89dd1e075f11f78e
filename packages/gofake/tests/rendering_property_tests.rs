//! Property-based tests for type renderings and fake generation
//!
//! Invariants:
//! - Renderings are compositional: a composite renders from its parts
//! - Syntax and semantic resolution agree on equivalent types
//! - Rendering any fakeable interface succeeds and is repeatable

mod common;

use common::*;
use gofake::features::type_checking::MemoryLocator;
use gofake::features::type_model::ChannelDirection;
use gofake::Type;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

const PREDECLARED: &[&str] = &["int", "string", "bool", "error", "byte", "float64", "any"];

/// A type together with the source text it should render as
fn type_and_text() -> impl Strategy<Value = (Type, String)> {
    let leaf = prop_oneof![
        prop::sample::select(PREDECLARED).prop_map(|name| (Type::basic(name), name.to_string())),
        Just((Type::qualified("io", "Reader"), "io.Reader".to_string())),
    ];
    leaf.prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner
                .clone()
                .prop_map(|(t, s)| (Type::pointer(t), format!("*{}", s))),
            inner
                .clone()
                .prop_map(|(t, s)| (Type::slice(t), format!("[]{}", s))),
            (inner.clone(), 1u8..16).prop_map(|((t, s), n)| (
                Type::array(t, n.to_string()),
                format!("[{}]{}", n, s)
            )),
            (inner.clone(), inner.clone()).prop_map(|((k, ks), (v, vs))| (
                Type::map(k, v),
                format!("map[{}]{}", ks, vs)
            )),
            inner.prop_map(|(t, s)| (
                Type::channel(ChannelDirection::Send, t),
                format!("chan<- {}", s)
            )),
        ]
    })
}

/// Go source for a parameter type: predeclared leaves, no channels of
/// channels
fn go_type() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(PREDECLARED).prop_map(str::to_string);
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|s| format!("*{}", s)),
            inner.clone().prop_map(|s| format!("[]{}", s)),
            (inner.clone(), 1u8..8).prop_map(|(s, n)| format!("[{}]{}", n, s)),
            (inner.clone(), inner).prop_map(|(k, v)| format!("map[{}]{}", k, v)),
        ]
    })
}

#[derive(Debug, Clone)]
struct MethodSpec {
    name: String,
    params: Vec<String>,
    named: bool,
    variadic: bool,
    results: Vec<String>,
}

impl MethodSpec {
    fn source(&self) -> String {
        let last = self.params.len().saturating_sub(1);
        let params: Vec<String> = self
            .params
            .iter()
            .enumerate()
            .map(|(i, ty)| {
                let ty = if self.variadic && i == last {
                    format!("...{}", ty)
                } else {
                    ty.clone()
                };
                if self.named {
                    format!("p{} {}", i, ty)
                } else {
                    ty
                }
            })
            .collect();
        let results = match self.results.as_slice() {
            [] => String::new(),
            [single] => format!(" {}", single),
            many => format!(" ({})", many.join(", ")),
        };
        format!("\t{}({}){}\n", self.name, params.join(", "), results)
    }
}

fn method_spec(name: String) -> impl Strategy<Value = MethodSpec> {
    (
        prop::collection::vec(go_type(), 0..4),
        any::<bool>(),
        any::<bool>(),
        prop::collection::vec(go_type(), 0..3),
    )
        .prop_map(move |(params, named, variadic, results)| MethodSpec {
            name: name.clone(),
            variadic: variadic && !params.is_empty(),
            params,
            named,
            results,
        })
}

/// Interface source with 1..5 distinct exported method names
fn interface_source() -> impl Strategy<Value = String> {
    prop::sample::subsequence(vec!["Get", "Put", "Close", "Reset", "Called", "Do"], 1..5)
        .prop_flat_map(|names| {
            names
                .into_iter()
                .map(|n| method_spec(n.to_string()))
                .collect::<Vec<_>>()
        })
        .prop_map(|methods| {
            let body: String = methods.iter().map(MethodSpec::source).collect();
            format!("package gen\n\ntype Subject interface {{\n{}}}\n", body)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_renderings_are_compositional((ty, text) in type_and_text()) {
        prop_assert_eq!(ty.parameter_format(), text.as_str());
        prop_assert_eq!(ty.field_format(), text.as_str());
        prop_assert_eq!(ty.reference_format(), "");
    }

    #[test]
    fn prop_variadic_field_is_slice((ty, text) in type_and_text()) {
        let variadic = Type::slice(ty).into_variadic();
        prop_assert!(variadic.is_ellipsis());
        prop_assert_eq!(variadic.parameter_format(), format!("...{}", text));
        prop_assert_eq!(variadic.field_format(), format!("[]{}", text));
        prop_assert_eq!(variadic.reference_format(), "...");
    }

    #[test]
    fn prop_qualifiers_are_found((ty, text) in type_and_text()) {
        let mentions_io = text.contains("io.Reader");
        prop_assert_eq!(ty.qualifiers().contains(&"io"), mentions_io);
        prop_assert!(ty.qualifiers().len() <= 1);
    }

    #[test]
    fn prop_syntax_and_semantic_agree(ty in go_type(), variadic in any::<bool>()) {
        let param = if variadic { format!("...{}", ty) } else { ty.clone() };
        let remote = format!(
            "package dep\n\ntype Remote interface {{\n\tM(v {}) {}\n}}\n",
            param, ty
        );
        let local = format!(
            "package agree\n\nimport \"example.com/dep\"\n\ntype Local interface {{\n\tM(v {}) {}\n}}\n\ntype Embedding interface {{\n\tdep.Remote\n}}\n",
            param, ty
        );
        let locator = MemoryLocator::new().with_package("example.com/dep", &[("dep.go", remote.as_str())]);
        let package = load_with(locator, "agree", &[("agree.go", local.as_str())]);

        let local = &package.interface("Local").unwrap().methods[0];
        let embedded = &package.interface("Embedding").unwrap().methods[0];
        prop_assert_eq!(local.parameters_declaration(), embedded.parameters_declaration());
        prop_assert_eq!(local.parameters_reference(), embedded.parameters_reference());
        prop_assert_eq!(local.results_declaration(), embedded.results_declaration());
        for (a, b) in local.parameters().iter().zip(embedded.parameters()) {
            prop_assert_eq!(a.field_format(), b.field_format());
        }
    }

    #[test]
    fn prop_fake_rendering_is_total_and_repeatable(src in interface_source()) {
        let package = load("gen", &[("gen.go", src.as_str())]);
        let first = generate(&package, &["Subject"]);
        let second = generate(&package, &["Subject"]);
        prop_assert_eq!(&first.bytes, &second.bytes);

        let text = source(&first);
        let subject = package.interface("Subject").unwrap();
        for method in &subject.methods {
            let hook = format!("{}Hook", method.name());
            let needle = format!("*FakeSubject) {}(", method.name());
            prop_assert!(text.contains(&needle), "missing method {}", method.name());
            prop_assert!(text.contains(&hook), "missing hook {}", hook);
        }
        prop_assert_eq!(text.matches('{').count(), text.matches('}').count());
    }
}
