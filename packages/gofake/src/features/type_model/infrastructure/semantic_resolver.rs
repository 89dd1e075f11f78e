//! Semantic-path type resolution
//!
//! Converts checker output into the same `Type` tree the syntax resolver
//! builds. The checked model is closed, so the conversion is total.

use crate::features::type_checking::domain::CheckedType;
use crate::features::type_model::domain::Type;

pub fn resolve_semantic(ty: &CheckedType) -> Type {
    match ty {
        CheckedType::Basic { name } => Type::basic(name.as_str()),
        CheckedType::Named {
            name,
            package: Some(package),
        } => Type::qualified(package.name.as_str(), name.as_str()),
        CheckedType::Named {
            name,
            package: None,
        } => Type::basic(name.as_str()),
        CheckedType::Pointer { elem } => Type::pointer(resolve_semantic(elem)),
        CheckedType::Slice { elem } => Type::slice(resolve_semantic(elem)),
        CheckedType::Array { len, elem } => Type::array(resolve_semantic(elem), len.to_string()),
        CheckedType::Map { key, value } => {
            Type::map(resolve_semantic(key), resolve_semantic(value))
        }
        CheckedType::Chan { direction, elem } => Type::channel(*direction, resolve_semantic(elem)),
        CheckedType::Literal { text, packages } => Type::literal(
            text.as_str(),
            packages.iter().map(|p| p.name.clone()).collect(),
        ),
    }
}
