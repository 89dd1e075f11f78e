//! Interface method signature

use serde::Serialize;

use super::identifier::Identifier;

/// One method of an interface, tagged with the interface it belongs to.
///
/// Group renderings (comma-joined over parameters or results) are computed at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Method {
    interface: String,
    name: String,
    parameters: Vec<Identifier>,
    results: Vec<Identifier>,
    #[serde(skip)]
    renderings: GroupRenderings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct GroupRenderings {
    parameters_declaration: String,
    parameters_reference: String,
    parameters_signature: String,
    results_declaration: String,
    results_reference: String,
    results_signature: String,
}

impl GroupRenderings {
    fn compute(parameters: &[Identifier], results: &[Identifier]) -> Self {
        Self {
            parameters_declaration: join(parameters, Identifier::parameter_format),
            parameters_reference: join(parameters, Identifier::reference_format),
            parameters_signature: join(parameters, Identifier::signature_format),
            results_declaration: join(results, Identifier::parameter_format),
            results_reference: join(results, Identifier::reference_format),
            results_signature: join(results, Identifier::signature_format),
        }
    }
}

fn join(ids: &[Identifier], render: fn(&Identifier) -> &str) -> String {
    ids.iter().map(render).collect::<Vec<_>>().join(", ")
}

impl Method {
    pub fn new(
        interface: impl Into<String>,
        name: impl Into<String>,
        parameters: Vec<Identifier>,
        results: Vec<Identifier>,
    ) -> Self {
        let renderings = GroupRenderings::compute(&parameters, &results);
        Self {
            interface: interface.into(),
            name: name.into(),
            parameters,
            results,
            renderings,
        }
    }

    /// Shallow copy attributed to a composing interface
    pub fn retag(&self, interface: &str) -> Self {
        Self {
            interface: interface.to_string(),
            ..self.clone()
        }
    }

    pub fn interface(&self) -> &str {
        &self.interface
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[Identifier] {
        &self.parameters
    }

    pub fn results(&self) -> &[Identifier] {
        &self.results
    }

    pub fn has_parameters(&self) -> bool {
        !self.parameters.is_empty()
    }

    pub fn has_results(&self) -> bool {
        !self.results.is_empty()
    }

    /// `a int, b ...string`
    pub fn parameters_declaration(&self) -> &str {
        &self.renderings.parameters_declaration
    }

    /// `a, b...`
    pub fn parameters_reference(&self) -> &str {
        &self.renderings.parameters_reference
    }

    /// `int, ...string`
    pub fn parameters_signature(&self) -> &str {
        &self.renderings.parameters_signature
    }

    pub fn results_declaration(&self) -> &str {
        &self.renderings.results_declaration
    }

    pub fn results_reference(&self) -> &str {
        &self.renderings.results_reference
    }

    pub fn results_signature(&self) -> &str {
        &self.renderings.results_signature
    }

    /// Result list of a function type: empty, bare for one result,
    /// parenthesized otherwise.
    pub fn results_clause(&self) -> String {
        match self.results.len() {
            0 => String::new(),
            1 => format!(" {}", self.renderings.results_signature),
            _ => format!(" ({})", self.renderings.results_signature),
        }
    }

    /// Every identifier name declared by the signature
    pub fn identifier_names(&self) -> impl Iterator<Item = &str> {
        self.parameters
            .iter()
            .chain(self.results.iter())
            .map(Identifier::name)
    }
}
