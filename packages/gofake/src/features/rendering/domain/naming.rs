//! Names of generated declarations

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::interface_model::Interface;

/// Type and constructor names generated for one interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeNames {
    pub interface: String,
    pub fake: String,
    pub testing_t: String,
    pub default_panic: String,
    pub default_fatal: String,
    pub default_error: String,
}

impl FakeNames {
    pub fn new(interface: &str) -> Self {
        let fake = format!("Fake{}", interface);
        Self {
            interface: interface.to_string(),
            testing_t: format!("{}TestingT", interface),
            default_panic: format!("New{}DefaultPanic", fake),
            default_fatal: format!("New{}DefaultFatal", fake),
            default_error: format!("New{}DefaultError", fake),
            fake,
        }
    }
}

/// Invocation record type names for one render.
///
/// `<Method>Invocation`, unless two rendered interfaces share the method name;
/// those get `<Interface><Method>Invocation`.
#[derive(Debug, Clone, Default)]
pub struct InvocationNames {
    shared: FxHashSet<String>,
}

impl InvocationNames {
    pub fn new(interfaces: &[&Interface]) -> Self {
        let mut owners: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
        for iface in interfaces {
            for method in &iface.methods {
                owners
                    .entry(method.name())
                    .or_default()
                    .insert(iface.name.as_str());
            }
        }
        let shared = owners
            .into_iter()
            .filter(|(_, owners)| owners.len() > 1)
            .map(|(method, _)| method.to_string())
            .collect();
        Self { shared }
    }

    pub fn get(&self, interface: &str, method: &str) -> String {
        if self.shared.contains(method) {
            format!("{}{}Invocation", interface, method)
        } else {
            format!("{}Invocation", method)
        }
    }
}

/// `base`, prefixed with underscores until it is not in `taken`
pub fn local_name<S: AsRef<str>>(base: &str, taken: &[S]) -> String {
    let mut name = base.to_string();
    while taken.iter().any(|t| t.as_ref() == name) {
        name.insert(0, '_');
    }
    name
}
