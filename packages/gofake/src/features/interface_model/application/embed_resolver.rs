//! Embedded interface flattening

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::features::interface_model::application::interface_builder::IDENT_PREFIX;
use crate::features::interface_model::domain::{
    Fakeability, Identifier, Interface, Method, ModelError,
};
use crate::features::type_model::Type;

/// Fold every embedded interface's methods into the embedding interface.
///
/// Keys are interface names as they are written in an embedding position:
/// `Name` for the scanned package, `pkg.Name` for imported interfaces. The
/// resulting method order is inherited methods (in embed declaration order)
/// followed by own methods; a name reached twice is kept at its first
/// position. The predeclared `error` is understood without a declaration.
pub fn resolve_embeds(interfaces: &mut FxHashMap<String, Interface>) -> Result<(), ModelError> {
    let mut names: Vec<String> = interfaces
        .iter()
        .filter(|(_, iface)| !iface.embeds.is_empty())
        .map(|(name, _)| name.clone())
        .collect();
    names.sort();

    let mut resolver = EmbedResolver {
        interfaces,
        resolved: FxHashMap::default(),
        visiting: Vec::new(),
    };
    for name in &names {
        resolver.resolve(name)?;
    }

    let resolved = resolver.resolved;
    for (name, (methods, fakeability)) in resolved {
        if let Some(iface) = interfaces.get_mut(&name) {
            iface.methods = methods;
            iface.fakeability = fakeability;
        }
    }
    Ok(())
}

struct EmbedResolver<'a> {
    interfaces: &'a FxHashMap<String, Interface>,
    resolved: FxHashMap<String, (Vec<Method>, Fakeability)>,
    visiting: Vec<String>,
}

impl EmbedResolver<'_> {
    fn resolve(&mut self, name: &str) -> Result<(Vec<Method>, Fakeability), ModelError> {
        if let Some(done) = self.resolved.get(name) {
            return Ok(done.clone());
        }
        if let Some(start) = self.visiting.iter().position(|n| n == name) {
            let mut cycle = self.visiting[start..].to_vec();
            cycle.push(name.to_string());
            return Err(ModelError::EmbeddingCycle { cycle });
        }

        let interfaces = self.interfaces;
        let iface = match interfaces.get(name) {
            Some(iface) => iface,
            None if name == "error" => {
                return Ok((vec![builtin_error_method()], Fakeability::Fakeable))
            }
            None => {
                return Err(ModelError::EmbeddedInterfaceNotFound {
                    interface: name.to_string(),
                    embed: name.to_string(),
                })
            }
        };

        self.visiting.push(name.to_string());
        let mut fakeability = iface.fakeability;
        let mut methods = Vec::new();
        for embed in &iface.embeds {
            if !interfaces.contains_key(embed) && embed != "error" {
                return Err(ModelError::EmbeddedInterfaceNotFound {
                    interface: name.to_string(),
                    embed: embed.clone(),
                });
            }
            let (inherited, embedded_fakeability) = self.resolve(embed)?;
            if fakeability == Fakeability::Fakeable {
                fakeability = embedded_fakeability;
            }
            methods.extend(inherited.iter().map(|m| m.retag(name)));
        }
        methods.extend(iface.methods.iter().cloned());
        self.visiting.pop();

        let mut seen = FxHashSet::default();
        methods.retain(|m| seen.insert(m.name().to_string()));

        debug!(interface = name, methods = methods.len(), "resolved embeds");
        self.resolved
            .insert(name.to_string(), (methods.clone(), fakeability));
        Ok((methods, fakeability))
    }
}

/// `Error() string` of the predeclared `error` interface
fn builtin_error_method() -> Method {
    Method::new(
        "error",
        "Error",
        Vec::new(),
        vec![Identifier::new(format!("{}1", IDENT_PREFIX), Type::basic("string"))],
    )
}
