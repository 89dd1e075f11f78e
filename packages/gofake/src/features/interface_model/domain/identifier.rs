//! Named, typed parameter or result

use serde::Serialize;

use crate::features::type_model::Type;

/// A parameter or result with its (possibly synthesized) name.
///
/// Renderings are computed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    name: String,
    #[serde(rename = "type")]
    ty: Type,
    #[serde(skip)]
    parameter: String,
    #[serde(skip)]
    reference: String,
    #[serde(skip)]
    field: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        let name = name.into();
        let parameter = format!("{} {}", name, ty.parameter_format());
        let reference = format!("{}{}", name, ty.reference_format());
        let field = format!("{} {}", title_case(&name), ty.field_format());
        Self {
            name,
            ty,
            parameter,
            reference,
            field,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// `name T`
    pub fn parameter_format(&self) -> &str {
        &self.parameter
    }

    /// `name` or `name...`
    pub fn reference_format(&self) -> &str {
        &self.reference
    }

    /// `Name T` with variadics as slices
    pub fn field_format(&self) -> &str {
        &self.field
    }

    /// Type only, as in a function type
    pub fn signature_format(&self) -> &str {
        self.ty.parameter_format()
    }

    /// Exported struct field name
    pub fn field_name(&self) -> String {
        title_case(&self.name)
    }
}

/// Uppercase the first character.
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
