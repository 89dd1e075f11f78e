//! Interface declaration model

use serde::Serialize;

use super::method::Method;

/// Whether a fake can be generated for an interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fakeability {
    #[default]
    Fakeable,
    /// Declared with type parameters
    Generic,
    /// Contains type-set elements (`~int | string`)
    Constraint,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub methods: Vec<Method>,
    /// Embedded interfaces: `Name` for the same package, `pkg.Name` otherwise
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<String>,
    pub fakeability: Fakeability,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
            embeds: Vec::new(),
            fakeability: Fakeability::Fakeable,
        }
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Reason a fake cannot be generated, if any
    pub fn skip_reason(&self) -> Option<&'static str> {
        if self.name == "_" {
            return Some("blank interface name");
        }
        match self.fakeability {
            Fakeability::Generic => Some("generic interfaces are not supported"),
            Fakeability::Constraint => Some("constraint interfaces cannot be implemented"),
            Fakeability::Fakeable if self.methods.is_empty() => Some("interface has no methods"),
            Fakeability::Fakeable => None,
        }
    }
}
