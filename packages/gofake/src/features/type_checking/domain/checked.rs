//! Semantic model produced by the type checker
//!
//! Mirrors the subset of a Go type-checker's object model the generator
//! consumes: package-level interfaces with complete method sets, and
//! fully-qualified types where named types remember their declaring package.

use serde::Serialize;

use crate::features::type_model::ChannelDirection;

/// Declaring package of a named type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PackageRef {
    /// Package name as written in its package clause
    pub name: String,
    /// Import path
    pub path: String,
}

impl PackageRef {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// A semantically resolved type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckedType {
    /// Predeclared type (`int`, `error`, ...)
    Basic { name: String },
    /// Named type, qualified by its declaring package unless it belongs to
    /// the package currently being checked
    Named {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        package: Option<PackageRef>,
    },
    Pointer { elem: Box<CheckedType> },
    Slice { elem: Box<CheckedType> },
    Array { len: u64, elem: Box<CheckedType> },
    Map {
        key: Box<CheckedType>,
        value: Box<CheckedType>,
    },
    Chan {
        direction: ChannelDirection,
        elem: Box<CheckedType>,
    },
    /// Function, struct or interface literal, or a generic instantiation
    Literal {
        text: String,
        packages: Vec<PackageRef>,
    },
}

/// Parameter or result of a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedVar {
    /// Empty for unnamed and blank parameters
    pub name: String,
    pub ty: CheckedType,
}

/// Function signature.
///
/// A variadic signature exposes its last parameter with a slice type and sets
/// `variadic`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedSignature {
    pub params: Vec<CheckedVar>,
    pub results: Vec<CheckedVar>,
    pub variadic: bool,
}

/// A method of an interface's method set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedFunc {
    pub name: String,
    pub signature: CheckedSignature,
}

/// A package-level interface type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedInterface {
    pub name: String,
    /// Complete method set, embedded methods included, sorted by name
    pub methods: Vec<CheckedFunc>,
    /// Declared with type parameters
    pub generic: bool,
    /// Contains type-set elements, usable only as a constraint
    pub constraint: bool,
}

/// Result of checking one package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckedPackage {
    pub name: String,
    pub path: String,
    pub interfaces: Vec<CheckedInterface>,
}

impl CheckedPackage {
    pub fn interface(&self, name: &str) -> Option<&CheckedInterface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn package_ref(&self) -> PackageRef {
        PackageRef::new(self.name.clone(), self.path.clone())
    }
}
