//! Go type model
//!
//! A closed sum of the syntactic type shapes that can appear in an interface
//! method signature. Each value renders itself in three syntactic contexts:
//!
//! - parameter position (`name T` in a function signature),
//! - field position (a struct member of an invocation record),
//! - reference position (the suffix used when forwarding an argument).
//!
//! Renderings are computed once, when the value is constructed, from the
//! already-computed renderings of the sub-types. A `Type` is immutable after
//! construction, so the three strings can never go stale.

use serde::Serialize;

/// Direction of a channel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelDirection {
    /// `chan T`
    Both,
    /// `chan<- T`
    Send,
    /// `<-chan T`
    Receive,
}

impl ChannelDirection {
    fn keyword(&self) -> &'static str {
        match self {
            ChannelDirection::Both => "chan ",
            ChannelDirection::Send => "chan<- ",
            ChannelDirection::Receive => "<-chan ",
        }
    }
}

/// Structural shape of a [`Type`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeKind {
    /// A named or predeclared type, optionally package-qualified.
    ///
    /// Anonymous interface/struct/function types are kept as `Basic` values
    /// whose `name` is the literal's source text; `mentions` then lists the
    /// package qualifiers appearing inside the literal.
    Basic {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        qualifier: Option<String>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        mentions: Vec<String>,
    },
    Pointer {
        elem: Box<Type>,
    },
    /// Slice when `len` is empty, fixed-size array otherwise
    Array {
        len: String,
        elem: Box<Type>,
    },
    Map {
        key: Box<Type>,
        value: Box<Type>,
    },
    Channel {
        direction: ChannelDirection,
        elem: Box<Type>,
    },
    /// Trailing variadic parameter `...T`
    Ellipsis {
        elem: Box<Type>,
    },
}

/// A resolved Go type together with its three renderings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Type {
    #[serde(flatten)]
    kind: TypeKind,
    #[serde(skip)]
    parameter: String,
    #[serde(skip)]
    field: String,
    #[serde(skip)]
    reference: String,
}

impl Type {
    fn from_kind(kind: TypeKind) -> Self {
        let (parameter, field, reference) = match &kind {
            TypeKind::Basic {
                name, qualifier, ..
            } => {
                let rendered = match qualifier {
                    Some(q) => format!("{}.{}", q, name),
                    None => name.clone(),
                };
                (rendered.clone(), rendered, String::new())
            }
            TypeKind::Pointer { elem } => (
                format!("*{}", elem.parameter),
                format!("*{}", elem.field),
                elem.reference.clone(),
            ),
            TypeKind::Array { len, elem } => (
                format!("[{}]{}", len, elem.parameter),
                format!("[{}]{}", len, elem.field),
                String::new(),
            ),
            TypeKind::Map { key, value } => (
                format!("map[{}]{}", key.parameter, value.parameter),
                format!("map[{}]{}", key.field, value.field),
                String::new(),
            ),
            TypeKind::Channel { direction, elem } => (
                format!("{}{}", direction.keyword(), elem.parameter),
                format!("{}{}", direction.keyword(), elem.field),
                String::new(),
            ),
            TypeKind::Ellipsis { elem } => (
                format!("...{}", elem.parameter),
                format!("[]{}", elem.field),
                "...".to_string(),
            ),
        };

        Self {
            kind,
            parameter,
            field,
            reference,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Unqualified named or predeclared type (`int`, `Foo`)
    pub fn basic(name: impl Into<String>) -> Self {
        Self::from_kind(TypeKind::Basic {
            name: name.into(),
            qualifier: None,
            mentions: Vec::new(),
        })
    }

    /// Package-qualified named type (`io.Reader`)
    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        Self::from_kind(TypeKind::Basic {
            name: name.into(),
            qualifier: Some(qualifier.into()),
            mentions: Vec::new(),
        })
    }

    /// Anonymous type literal kept verbatim
    pub fn literal(text: impl Into<String>, mentions: Vec<String>) -> Self {
        let mut mentions = mentions;
        mentions.sort();
        mentions.dedup();
        Self::from_kind(TypeKind::Basic {
            name: text.into(),
            qualifier: None,
            mentions,
        })
    }

    pub fn pointer(elem: Type) -> Self {
        Self::from_kind(TypeKind::Pointer {
            elem: Box::new(elem),
        })
    }

    pub fn slice(elem: Type) -> Self {
        Self::array(elem, "")
    }

    pub fn array(elem: Type, len: impl Into<String>) -> Self {
        Self::from_kind(TypeKind::Array {
            len: len.into(),
            elem: Box::new(elem),
        })
    }

    pub fn map(key: Type, value: Type) -> Self {
        Self::from_kind(TypeKind::Map {
            key: Box::new(key),
            value: Box::new(value),
        })
    }

    pub fn channel(direction: ChannelDirection, elem: Type) -> Self {
        Self::from_kind(TypeKind::Channel {
            direction,
            elem: Box::new(elem),
        })
    }

    pub fn ellipsis(elem: Type) -> Self {
        Self::from_kind(TypeKind::Ellipsis {
            elem: Box::new(elem),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Renderings
    // ═══════════════════════════════════════════════════════════════════════

    /// Syntax for a parameter declaration (`...string`, `*fmt.Scanner`)
    pub fn parameter_format(&self) -> &str {
        &self.parameter
    }

    /// Syntax for a struct field declaration (variadics become slices)
    pub fn field_format(&self) -> &str {
        &self.field
    }

    /// Suffix used when forwarding a value of this type as an argument
    pub fn reference_format(&self) -> &str {
        &self.reference
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self.kind, TypeKind::Ellipsis { .. })
    }

    /// Rewrite a trailing parameter type as variadic.
    ///
    /// A slice loses one layer (`[]T` → `...T`); any other type is wrapped.
    pub fn into_variadic(self) -> Type {
        match self.kind {
            TypeKind::Array { len, elem } if len.is_empty() => Type::ellipsis(*elem),
            TypeKind::Ellipsis { .. } => self,
            _ => Type::ellipsis(self),
        }
    }

    /// Every package qualifier this type mentions, in first-seen order
    pub fn qualifiers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_qualifiers(&mut out);
        out
    }

    fn collect_qualifiers<'a>(&'a self, out: &mut Vec<&'a str>) {
        let mut push = |q: &'a str| {
            if !out.contains(&q) {
                out.push(q);
            }
        };
        match &self.kind {
            TypeKind::Basic {
                qualifier,
                mentions,
                ..
            } => {
                if let Some(q) = qualifier {
                    push(q);
                }
                for m in mentions {
                    push(m);
                }
            }
            TypeKind::Pointer { elem }
            | TypeKind::Array { elem, .. }
            | TypeKind::Channel { elem, .. }
            | TypeKind::Ellipsis { elem } => elem.collect_qualifiers(out),
            TypeKind::Map { key, value } => {
                key.collect_qualifiers(out);
                value.collect_qualifiers(out);
            }
        }
    }

    /// Unqualified type names (`Foo`, `int`), literals excluded
    pub fn unqualified_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_unqualified(&mut out);
        out
    }

    fn collect_unqualified<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.kind {
            TypeKind::Basic {
                name,
                qualifier: None,
                ..
            } => {
                let is_identifier = !name.is_empty()
                    && name.chars().all(|c| c.is_alphanumeric() || c == '_');
                if is_identifier && !out.contains(&name.as_str()) {
                    out.push(name);
                }
            }
            TypeKind::Basic { .. } => {}
            TypeKind::Pointer { elem }
            | TypeKind::Array { elem, .. }
            | TypeKind::Channel { elem, .. }
            | TypeKind::Ellipsis { elem } => elem.collect_unqualified(out),
            TypeKind::Map { key, value } => {
                key.collect_unqualified(out);
                value.collect_unqualified(out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_renderings() {
        let t = Type::basic("string");
        assert_eq!(t.parameter_format(), "string");
        assert_eq!(t.field_format(), "string");
        assert_eq!(t.reference_format(), "");

        let q = Type::qualified("fmt", "Scanner");
        assert_eq!(q.parameter_format(), "fmt.Scanner");
        assert_eq!(q.field_format(), "fmt.Scanner");
    }

    #[test]
    fn test_unqualified_names() {
        let t = Type::map(
            Type::basic("Key"),
            Type::slice(Type::pointer(Type::qualified("io", "Reader"))),
        );
        assert_eq!(t.unqualified_names(), vec!["Key"]);

        let lit = Type::literal("func(x int) Token", Vec::new());
        assert!(lit.unqualified_names().is_empty());
        assert_eq!(Type::pointer(Type::basic("int")).unqualified_names(), vec!["int"]);
    }

    #[test]
    fn test_composite_renderings() {
        let m = Type::map(Type::basic("string"), Type::slice(Type::basic("int")));
        assert_eq!(m.parameter_format(), "map[string][]int");

        let a = Type::array(Type::pointer(Type::qualified("io", "Reader")), "4");
        assert_eq!(a.field_format(), "[4]*io.Reader");
    }

    #[test]
    fn test_channel_directions() {
        let int = Type::basic("int");
        assert_eq!(
            Type::channel(ChannelDirection::Both, int.clone()).parameter_format(),
            "chan int"
        );
        assert_eq!(
            Type::channel(ChannelDirection::Send, int.clone()).parameter_format(),
            "chan<- int"
        );
        assert_eq!(
            Type::channel(ChannelDirection::Receive, int).field_format(),
            "<-chan int"
        );
    }

    #[test]
    fn test_ellipsis_renderings() {
        let e = Type::ellipsis(Type::basic("string"));
        assert_eq!(e.parameter_format(), "...string");
        assert_eq!(e.field_format(), "[]string");
        assert_eq!(e.reference_format(), "...");
    }

    #[test]
    fn test_pointer_reference_defers_to_elem() {
        let p = Type::pointer(Type::ellipsis(Type::basic("int")));
        assert_eq!(p.reference_format(), "...");
        assert_eq!(Type::pointer(Type::basic("int")).reference_format(), "");
    }

    #[test]
    fn test_into_variadic() {
        let from_slice = Type::slice(Type::basic("string")).into_variadic();
        assert_eq!(from_slice, Type::ellipsis(Type::basic("string")));

        let wrapped = Type::basic("string").into_variadic();
        assert_eq!(wrapped, Type::ellipsis(Type::basic("string")));

        let fixed = Type::array(Type::basic("byte"), "4").into_variadic();
        assert_eq!(fixed.parameter_format(), "...[4]byte");
    }

    #[test]
    fn test_qualifiers_collects_nested_and_literal_mentions() {
        let t = Type::map(
            Type::qualified("time", "Month"),
            Type::pointer(Type::literal("func(io.Reader) error", vec!["io".into()])),
        );
        assert_eq!(t.qualifiers(), vec!["time", "io"]);
    }

    #[test]
    fn test_serializes_structure_only() {
        let json = serde_json::to_value(Type::pointer(Type::qualified("fmt", "Scanner"))).unwrap();
        assert_eq!(json["kind"], "pointer");
        assert_eq!(json["elem"]["kind"], "basic");
        assert_eq!(json["elem"]["qualifier"], "fmt");
        assert!(json.get("parameter").is_none());
    }
}
