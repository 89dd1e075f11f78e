//! Fake renderer
//!
//! Turns resolved interfaces into Go source. Per interface, in order:
//! invocation record types, the `TestingT` interface, the fake struct, the
//! default constructors, `Reset`, then every method followed by its call
//! helpers.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::features::imports::ImportRegistry;
use crate::features::interface_model::{Identifier, Interface, Method};
use crate::features::loading::LoadedPackage;
use crate::features::rendering::application::go_writer::GoWriter;
use crate::features::rendering::domain::{
    local_name, FakeNames, InvocationNames, RenderedFile, SkippedInterface,
};
use crate::features::rendering::error::RenderError;
use crate::features::type_model::is_predeclared;
use crate::shared::utils::SymbolGenerator;

/// Prefix of generated receiver names
const RECEIVER_PREFIX: &str = "_f";

pub struct FakeRenderer<'p> {
    package: &'p LoadedPackage,
}

impl<'p> FakeRenderer<'p> {
    pub fn new(package: &'p LoadedPackage) -> Self {
        Self { package }
    }

    /// Render fakes for `names`, in request order.
    ///
    /// `header` is written verbatim above the package clause. A name that is
    /// not declared fails the whole render; blank, generic, constraint and
    /// method-less interfaces are skipped with a warning.
    pub fn render<S: AsRef<str>>(
        &self,
        names: &[S],
        package_name: &str,
        header: &str,
    ) -> Result<RenderedFile, RenderError> {
        let (selected, skipped) = self.select(names)?;
        if selected.is_empty() {
            return Err(RenderError::NoValidInterfaces);
        }

        let mut imports = self.package.imports.clone();
        imports.reset_required();
        let mut needs_dot = false;
        for method in selected.iter().flat_map(|iface| &iface.methods) {
            for id in method.parameters().iter().chain(method.results()) {
                for qualifier in id.ty().qualifiers() {
                    imports.require_by_name(qualifier);
                }
                needs_dot |= id
                    .ty()
                    .unqualified_names()
                    .into_iter()
                    .any(|name| !is_predeclared(name) && !self.package.local_types.contains(name));
            }
        }
        // Names neither predeclared nor local can only come from a dot import
        if needs_dot {
            let dots = imports.require_dot_imports();
            debug!(dots, "unqualified foreign type, keeping dot imports");
        }
        let (specs, reflect) = import_specs(&selected, &imports);

        let invocations = InvocationNames::new(&selected);
        let mut emitter = Emitter {
            w: GoWriter::new(),
            receivers: SymbolGenerator::new(RECEIVER_PREFIX),
            invocations: &invocations,
            reflect: reflect.as_str(),
            package_name,
        };

        for line in header.lines() {
            emitter.w.line(line);
        }
        if !header.is_empty() {
            emitter.w.blank();
        }
        emitter.w.line(format!("package {}", package_name));
        emitter.w.blank();
        match specs.as_slice() {
            [] => {}
            [(_, single)] => {
                emitter.w.line(format!("import {}", single));
                emitter.w.blank();
            }
            many => {
                emitter.w.open("import (");
                for (_, spec) in many {
                    emitter.w.line(spec);
                }
                emitter.w.close(")");
                emitter.w.blank();
            }
        }

        for iface in &selected {
            debug!(interface = %iface.name, methods = iface.methods.len(), "rendering fake");
            emitter.fake(iface);
        }

        let mut source = emitter.w.finish();
        while source.ends_with("\n\n") {
            source.pop();
        }

        Ok(RenderedFile {
            source,
            interfaces: selected.iter().map(|i| i.name.clone()).collect(),
            skipped,
            imports: specs.into_iter().map(|(path, _)| path).collect(),
        })
    }

    fn select<S: AsRef<str>>(
        &self,
        names: &[S],
    ) -> Result<(Vec<&'p Interface>, Vec<SkippedInterface>), RenderError> {
        let mut seen = FxHashSet::default();
        let mut selected = Vec::new();
        let mut skipped = Vec::new();

        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                continue;
            }
            let reason = if name == "_" {
                Some("blank interface name")
            } else {
                let iface = self.package.interface(name).ok_or_else(|| {
                    RenderError::InterfaceNotFound {
                        name: name.to_string(),
                    }
                })?;
                match iface.skip_reason() {
                    Some(reason) => Some(reason),
                    None => {
                        selected.push(iface);
                        None
                    }
                }
            };
            if let Some(reason) = reason {
                warn!(interface = name, reason, "skipping interface");
                skipped.push(SkippedInterface {
                    name: name.to_string(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok((selected, skipped))
    }
}

/// Import specs as `(path, spec)` sorted by path, and the name `reflect` is
/// reachable under in the generated helpers.
fn import_specs(selected: &[&Interface], imports: &ImportRegistry) -> (Vec<(String, String)>, String) {
    let mut specs: Vec<(String, String)> = imports
        .required()
        .into_iter()
        .map(|import| (import.path.clone(), import.render()))
        .collect();

    let needs_reflect = selected
        .iter()
        .flat_map(|iface| &iface.methods)
        .any(Method::has_parameters);
    let mut reflect = String::from("reflect");
    if needs_reflect {
        let identifiers: FxHashSet<&str> = selected
            .iter()
            .flat_map(|iface| &iface.methods)
            .flat_map(Method::identifier_names)
            .collect();
        let existing = imports
            .required()
            .into_iter()
            .find(|import| import.path == "reflect" && !identifiers.contains(import.local_name()));
        match existing {
            Some(import) => reflect = import.local_name().to_string(),
            None => {
                let mut taken: Vec<&str> = identifiers.into_iter().collect();
                taken.extend(imports.required().into_iter().map(|i| i.local_name()));
                reflect = local_name("reflect", &taken);
                let spec = if reflect == "reflect" {
                    "\"reflect\"".to_string()
                } else {
                    format!("{} \"reflect\"", reflect)
                };
                specs.push(("reflect".to_string(), spec));
            }
        }
    }

    specs.sort();
    (specs, reflect)
}

struct Emitter<'a> {
    w: GoWriter,
    receivers: SymbolGenerator,
    invocations: &'a InvocationNames,
    reflect: &'a str,
    package_name: &'a str,
}

/// Per-method names shared by the method body and its helpers
struct MethodCtx<'m> {
    method: &'m Method,
    invocation: String,
    hook: String,
    calls: String,
    identifiers: Vec<&'m str>,
}

impl<'m> MethodCtx<'m> {
    fn new(iface: &Interface, method: &'m Method, invocations: &InvocationNames) -> Self {
        Self {
            method,
            invocation: invocations.get(&iface.name, method.name()),
            hook: format!("{}Hook", method.name()),
            calls: format!("{}Calls", method.name()),
            identifiers: method.identifier_names().collect(),
        }
    }

    fn local(&self, base: &str) -> String {
        local_name(base, &self.identifiers)
    }
}

impl Emitter<'_> {
    fn fake(&mut self, iface: &Interface) {
        let names = FakeNames::new(&iface.name);
        let declared: FxHashSet<&str> = iface.methods.iter().map(Method::name).collect();
        let methods: Vec<MethodCtx<'_>> = iface
            .methods
            .iter()
            .map(|m| MethodCtx::new(iface, m, self.invocations))
            .collect();

        for ctx in &methods {
            self.invocation(&names, ctx);
        }
        self.testing_t(&names);
        self.fake_struct(&names, &methods);
        self.constructors(&names, &methods);
        if declared.contains("Reset") {
            debug!(interface = %iface.name, "interface declares Reset, helper omitted");
        } else {
            self.reset(&names, &methods);
        }
        for ctx in &methods {
            self.method(&names, ctx);
            self.helpers(&names, ctx, &declared);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Declarations
    // ═══════════════════════════════════════════════════════════════════════

    fn invocation(&mut self, names: &FakeNames, ctx: &MethodCtx<'_>) {
        let method = ctx.method;
        self.w.comment(format!(
            "{} represents a single call of {}.{}",
            ctx.invocation,
            names.fake,
            method.name()
        ));
        if !method.has_parameters() && !method.has_results() {
            self.w.line(format!("type {} struct{{}}", ctx.invocation));
            self.w.blank();
            return;
        }

        self.w.open(format!("type {} struct {{", ctx.invocation));
        for (label, group) in [("Parameters", method.parameters()), ("Results", method.results())] {
            if group.is_empty() {
                continue;
            }
            self.w.open(format!("{} struct {{", label));
            let rows: Vec<(String, &str)> = group
                .iter()
                .map(|id| (id.field_name(), id.ty().field_format()))
                .collect();
            self.w.aligned(&rows);
            self.w.close("}");
        }
        self.w.close("}");
        self.w.blank();
    }

    fn testing_t(&mut self, names: &FakeNames) {
        self.w.comment(format!(
            "{} is the subset of *testing.T used by {}, declared here so the\n\
             generated file does not import the testing package.",
            names.testing_t, names.fake
        ));
        self.w.open(format!("type {} interface {{", names.testing_t));
        self.w.line("Error(...interface{})");
        self.w.line("Errorf(string, ...interface{})");
        self.w.line("Fatal(...interface{})");
        self.w.line("Helper()");
        self.w.close("}");
        self.w.blank();
    }

    fn fake_struct(&mut self, names: &FakeNames, methods: &[MethodCtx<'_>]) {
        self.w.comment(format!(
            "{} is a fake implementation of {} for testing.\n\
             \n\
             Assign a hook for every method the code under test is expected to call:",
            names.fake, names.interface
        ));
        if let Some(first) = methods.first() {
            let m = first.method;
            let results = if m.has_results() {
                format!(" ({})", m.results_declaration())
            } else {
                String::new()
            };
            self.w.line("//");
            self.w.line(format!("//\tf := &{}.{}{{", self.package_name, names.fake));
            self.w.line(format!(
                "//\t\t{}: func({}){} {{",
                first.hook,
                m.parameters_signature(),
                results
            ));
            self.w.line("//\t\t\t// check the parameters, report failures through t");
            if m.has_results() {
                self.w.line("//\t\t\treturn");
            }
            self.w.line("//\t\t},");
            self.w.line("//\t}");
            self.w.line("//");
            self.w.line("//\t// exercise the code under test ...");
            self.w.line("//");
            self.w.line(format!("//\tf.Assert{}CalledOnce(t)", m.name()));
        }
        self.w.line("//");
        self.w.line("// Calling a method whose hook is nil panics.");

        if methods.is_empty() {
            self.w.line(format!("type {} struct{{}}", names.fake));
            self.w.blank();
            return;
        }
        self.w.open(format!("type {} struct {{", names.fake));
        let hooks: Vec<(&str, String)> = methods
            .iter()
            .map(|ctx| {
                let m = ctx.method;
                (
                    ctx.hook.as_str(),
                    format!("func({}){}", m.parameters_signature(), m.results_clause()),
                )
            })
            .collect();
        self.w.aligned(&hooks);
        self.w.blank();
        let calls: Vec<(&str, String)> = methods
            .iter()
            .map(|ctx| (ctx.calls.as_str(), format!("[]*{}", ctx.invocation)))
            .collect();
        self.w.aligned(&calls);
        self.w.close("}");
        self.w.blank();
    }

    fn constructors(&mut self, names: &FakeNames, methods: &[MethodCtx<'_>]) {
        self.w.comment(format!(
            "{} returns an instance of {} with all hooks configured to panic",
            names.default_panic, names.fake
        ));
        self.w.open(format!("func {}() *{} {{", names.default_panic, names.fake));
        self.w.open(format!("return &{}{{", names.fake));
        for ctx in methods {
            let m = ctx.method;
            self.w.open(format!(
                "{}: func({}){} {{",
                ctx.hook,
                m.parameters_signature(),
                m.results_clause()
            ));
            self.w.line(format!(
                "panic(\"Unexpected call to {}.{}\")",
                names.interface,
                m.name()
            ));
            self.w.close("},");
        }
        self.w.close("}");
        self.w.close("}");
        self.w.blank();

        for (constructor, call) in [
            (&names.default_fatal, "Fatal"),
            (&names.default_error, "Error"),
        ] {
            self.w.comment(format!(
                "{} returns an instance of {} with all hooks configured to call t.{}",
                constructor, names.fake, call
            ));
            self.w.open(format!(
                "func {}(t {}) *{} {{",
                constructor, names.testing_t, names.fake
            ));
            self.w.open(format!("return &{}{{", names.fake));
            for ctx in methods {
                let m = ctx.method;
                let results = if m.has_results() {
                    let blanks: Vec<String> = m
                        .results()
                        .iter()
                        .map(|id| format!("_ {}", id.signature_format()))
                        .collect();
                    format!(" ({})", blanks.join(", "))
                } else {
                    String::new()
                };
                self.w.open(format!(
                    "{}: func({}){} {{",
                    ctx.hook,
                    m.parameters_signature(),
                    results
                ));
                self.w.line(format!(
                    "t.{}(\"Unexpected call to {}.{}\")",
                    call,
                    names.interface,
                    m.name()
                ));
                if m.has_results() {
                    self.w.line("return");
                }
                self.w.close("},");
            }
            self.w.close("}");
            self.w.close("}");
            self.w.blank();
        }
    }

    fn reset(&mut self, names: &FakeNames, methods: &[MethodCtx<'_>]) {
        self.w.comment("Reset clears the recorded calls of every method");
        self.w.open(format!("func (f *{}) Reset() {{", names.fake));
        for ctx in methods {
            self.w
                .line(format!("f.{} = []*{}{{}}", ctx.calls, ctx.invocation));
        }
        self.w.close("}");
        self.w.blank();
    }

    fn method(&mut self, names: &FakeNames, ctx: &MethodCtx<'_>) {
        let m = ctx.method;
        let recv = self.receiver(ctx);
        let invocation = ctx.local("invocation");
        let results = if m.has_results() {
            format!(" ({})", m.results_declaration())
        } else {
            String::new()
        };

        self.w.open(format!(
            "func ({} *{}) {}({}){} {{",
            recv,
            names.fake,
            m.name(),
            m.parameters_declaration(),
            results
        ));
        self.w.open(format!("if {}.{} == nil {{", recv, ctx.hook));
        self.w.line(format!(
            "panic(\"{}.{}() called but {}.{} is nil\")",
            names.interface,
            m.name(),
            names.fake,
            ctx.hook
        ));
        self.w.close("}");
        self.w.blank();

        self.w.line(format!("{} := new({})", invocation, ctx.invocation));
        self.w.blank();
        if m.has_parameters() {
            self.record(&invocation, "Parameters", m.parameters());
            self.w.blank();
        }

        let call = format!("{}.{}({})", recv, ctx.hook, m.parameters_reference());
        if m.has_results() {
            self.w.line(format!("{} = {}", m.results_reference(), call));
            self.w.blank();
            self.record(&invocation, "Results", m.results());
        } else {
            self.w.line(call);
        }
        self.w.blank();

        self.w.line(format!(
            "{recv}.{calls} = append({recv}.{calls}, {invocation})",
            recv = recv,
            calls = ctx.calls,
            invocation = invocation
        ));
        if m.has_results() {
            self.w.blank();
            self.w.line("return");
        }
        self.w.close("}");
        self.w.blank();
    }

    fn record(&mut self, invocation: &str, group: &str, ids: &[Identifier]) {
        for id in ids {
            self.w.line(format!(
                "{}.{}.{} = {}",
                invocation,
                group,
                id.field_name(),
                id.name()
            ));
        }
    }

    /// `f` for methods without identifiers, otherwise a fresh `_fN` that
    /// cannot shadow a parameter or result.
    fn receiver(&mut self, ctx: &MethodCtx<'_>) -> String {
        if ctx.identifiers.is_empty() {
            "f".to_string()
        } else {
            self.receivers.next_avoiding(&ctx.identifiers)
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Call helpers
    // ═══════════════════════════════════════════════════════════════════════

    fn helpers(&mut self, names: &FakeNames, ctx: &MethodCtx<'_>, declared: &FxHashSet<&str>) {
        let m = ctx.method.name();
        let fake = &names.fake;
        let t = &names.testing_t;
        let calls = &ctx.calls;

        let counting = [
            (
                format!("{}Called", m),
                "was called",
                "!= 0",
                format!("Assert{}Called", m),
                "was not called",
                "== 0",
                format!("t.Error(\"{}.{} not called, expected at least one\")", fake, m),
            ),
            (
                format!("{}NotCalled", m),
                "was not called",
                "== 0",
                format!("Assert{}NotCalled", m),
                "was called",
                "!= 0",
                format!("t.Error(\"{}.{} called, expected none\")", fake, m),
            ),
            (
                format!("{}CalledOnce", m),
                "was called exactly once",
                "== 1",
                format!("Assert{}CalledOnce", m),
                "was not called exactly once",
                "!= 1",
                format!(
                    "t.Errorf(\"{}.{} called %d times, expected 1\", len(f.{}))",
                    fake, m, calls
                ),
            ),
        ];
        for (query, query_doc, holds, assert, assert_doc, fails, report) in counting {
            if self.available(declared, &query) {
                self.w.comment(format!("{} returns true if {}.{} {}", query, fake, m, query_doc));
                self.w.open(format!("func (f *{}) {}() bool {{", fake, query));
                self.w.line(format!("return len(f.{}) {}", calls, holds));
                self.w.close("}");
                self.w.blank();
            }
            if self.available(declared, &assert) {
                self.w.comment(format!("{} calls t.Error if {}.{} {}", assert, fake, m, assert_doc));
                self.w.open(format!("func (f *{}) {}(t {}) {{", fake, assert, t));
                self.w.line("t.Helper()");
                self.w.open(format!("if len(f.{}) {} {{", calls, fails));
                self.w.line(report);
                self.w.close("}");
                self.w.close("}");
                self.w.blank();
            }
        }

        let query = format!("{}CalledN", m);
        if self.available(declared, &query) {
            self.w.comment(format!(
                "{} returns true if {}.{} was called at least n times",
                query, fake, m
            ));
            self.w.open(format!("func (f *{}) {}(n int) bool {{", fake, query));
            self.w.line(format!("return len(f.{}) >= n", calls));
            self.w.close("}");
            self.w.blank();
        }
        let assert = format!("Assert{}CalledN", m);
        if self.available(declared, &assert) {
            self.w.comment(format!(
                "{} calls t.Error if {}.{} was called less than n times",
                assert, fake, m
            ));
            self.w.open(format!("func (f *{}) {}(t {}, n int) {{", fake, assert, t));
            self.w.line("t.Helper()");
            self.w.open(format!("if len(f.{}) < n {{", calls));
            self.w.line(format!(
                "t.Errorf(\"{}.{} called %d times, expected >= %d\", len(f.{}), n)",
                fake, m, calls
            ));
            self.w.close("}");
            self.w.close("}");
            self.w.blank();
        }

        if ctx.method.has_parameters() {
            self.with_helpers(names, ctx, declared);
        }
    }

    /// Helpers matching recorded parameters with `reflect.DeepEqual`
    fn with_helpers(&mut self, names: &FakeNames, ctx: &MethodCtx<'_>, declared: &FxHashSet<&str>) {
        let method = ctx.method;
        let m = method.name();
        let fake = &names.fake;
        let params = method.parameters_declaration();
        let call = ctx.local("call");
        let found = ctx.local("found");
        let count = ctx.local("count");
        let t = ctx.local("t");
        let condition = method
            .parameters()
            .iter()
            .map(|id| {
                format!(
                    "{}.DeepEqual({}.Parameters.{}, {})",
                    self.reflect,
                    call,
                    id.field_name(),
                    id.name()
                )
            })
            .collect::<Vec<_>>()
            .join(" && ");

        let name = format!("{}CalledWith", m);
        if self.available(declared, &name) {
            let recv = self.receiver(ctx);
            self.w.comment(format!(
                "{} returns true if {}.{} was called with the given values",
                name, fake, m
            ));
            self.w.open(format!(
                "func ({} *{}) {}({}) ({} bool) {{",
                recv, fake, name, params, found
            ));
            self.find_call(&recv, &call, &condition, ctx, &[format!("{} = true", found)]);
            self.w.blank();
            self.w.line("return");
            self.w.close("}");
            self.w.blank();
        }

        let name = format!("Assert{}CalledWith", m);
        if self.available(declared, &name) {
            let recv = self.receiver(ctx);
            self.w.comment(format!(
                "{} calls t.Error if {}.{} was not called with the given values",
                name, fake, m
            ));
            self.w.open(format!(
                "func ({} *{}) {}({} {}, {}) {{",
                recv, fake, name, t, names.testing_t, params
            ));
            self.w.line(format!("{}.Helper()", t));
            self.w.line(format!("var {} bool", found));
            self.find_call(&recv, &call, &condition, ctx, &[format!("{} = true", found)]);
            self.w.blank();
            self.w.open(format!("if !{} {{", found));
            self.w.line(format!(
                "{}.Error(\"{}.{} not called with expected parameters\")",
                t, fake, m
            ));
            self.w.close("}");
            self.w.close("}");
            self.w.blank();
        }

        let name = format!("{}CalledOnceWith", m);
        if self.available(declared, &name) {
            let recv = self.receiver(ctx);
            self.w.comment(format!(
                "{} returns true if {}.{} was called exactly once with the given values",
                name, fake, m
            ));
            self.w.open(format!("func ({} *{}) {}({}) bool {{", recv, fake, name, params));
            self.w.line(format!("var {} int", count));
            self.count_calls(&recv, &call, &condition, ctx, &count);
            self.w.blank();
            self.w.line(format!("return {} == 1", count));
            self.w.close("}");
            self.w.blank();
        }

        let name = format!("Assert{}CalledOnceWith", m);
        if self.available(declared, &name) {
            let recv = self.receiver(ctx);
            self.w.comment(format!(
                "{} calls t.Error if {}.{} was not called exactly once with the given values",
                name, fake, m
            ));
            self.w.open(format!(
                "func ({} *{}) {}({} {}, {}) {{",
                recv, fake, name, t, names.testing_t, params
            ));
            self.w.line(format!("{}.Helper()", t));
            self.w.line(format!("var {} int", count));
            self.count_calls(&recv, &call, &condition, ctx, &count);
            self.w.blank();
            self.w.open(format!("if {} != 1 {{", count));
            self.w.line(format!(
                "{}.Errorf(\"{}.{} called %d times with expected parameters, expected one\", {})",
                t, fake, m, count
            ));
            self.w.close("}");
            self.w.close("}");
            self.w.blank();
        }

        let name = format!("{}ResultsForCall", m);
        if method.has_results() && self.available(declared, &name) {
            let recv = self.receiver(ctx);
            self.w.comment(format!(
                "{} returns the result values for the first call to {}.{} with the given values",
                name, fake, m
            ));
            self.w.open(format!(
                "func ({} *{}) {}({}) ({}, {} bool) {{",
                recv,
                fake,
                name,
                params,
                method.results_declaration(),
                found
            ));
            let mut body: Vec<String> = method
                .results()
                .iter()
                .map(|id| format!("{} = {}.Results.{}", id.name(), call, id.field_name()))
                .collect();
            body.push(format!("{} = true", found));
            self.find_call(&recv, &call, &condition, ctx, &body);
            self.w.blank();
            self.w.line("return");
            self.w.close("}");
            self.w.blank();
        }
    }

    /// Loop over the recorded calls, running `body` and breaking on the first
    /// match.
    fn find_call(
        &mut self,
        recv: &str,
        call: &str,
        condition: &str,
        ctx: &MethodCtx<'_>,
        body: &[String],
    ) {
        self.w
            .open(format!("for _, {} := range {}.{} {{", call, recv, ctx.calls));
        self.w.open(format!("if {} {{", condition));
        for line in body {
            self.w.line(line);
        }
        self.w.line("break");
        self.w.close("}");
        self.w.close("}");
    }

    fn count_calls(
        &mut self,
        recv: &str,
        call: &str,
        condition: &str,
        ctx: &MethodCtx<'_>,
        count: &str,
    ) {
        self.w
            .open(format!("for _, {} := range {}.{} {{", call, recv, ctx.calls));
        self.w.open(format!("if {} {{", condition));
        self.w.line(format!("{}++", count));
        self.w.close("}");
        self.w.close("}");
    }

    /// A helper is only emitted when the interface has no method of that name.
    fn available(&self, declared: &FxHashSet<&str>, helper: &str) -> bool {
        if declared.contains(helper) {
            debug!(helper, "interface declares a method named like a helper, helper omitted");
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::loading::PackageLoader;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn load(source: &str) -> LoadedPackage {
        PackageLoader::without_imports()
            .load_sources(
                "example.com/pkg",
                vec![(PathBuf::from("pkg/pkg.go"), source.to_string())],
            )
            .unwrap()
    }

    #[test]
    fn test_voider() {
        let package = load("package pkg\n\ntype Voider interface {\n\tVoidMethod()\n}\n");
        let file = FakeRenderer::new(&package)
            .render(&["Voider"], "pkg", "// header")
            .unwrap();

        assert!(file.source.starts_with("// header\n\npackage pkg\n\n// VoidMethodInvocation"));
        assert!(file.source.contains("type VoidMethodInvocation struct{}\n"));
        assert!(file.source.contains(
            "type FakeVoider struct {\n\tVoidMethodHook func()\n\n\tVoidMethodCalls []*VoidMethodInvocation\n}\n"
        ));
        assert!(file.source.contains(
            "func (f *FakeVoider) VoidMethod() {\n\tif f.VoidMethodHook == nil {\n\t\tpanic(\"Voider.VoidMethod() called but FakeVoider.VoidMethodHook is nil\")\n\t}\n\n\tinvocation := new(VoidMethodInvocation)\n\n\tf.VoidMethodHook()\n\n\tf.VoidMethodCalls = append(f.VoidMethodCalls, invocation)\n}\n"
        ));
        assert!(!file.source.contains("\nimport "));
        assert!(file.source.contains("generated file does not import the testing package"));
        assert!(!file.source.contains("CalledWith"));
        assert!(file.imports.is_empty());
    }

    #[test]
    fn test_dot_import_kept_for_foreign_type() {
        let package = load(
            "package pkg\n\nimport . \"fmt\"\n\ntype Scanning interface {\n\tScan(s *Scanner)\n}\n",
        );
        let file = FakeRenderer::new(&package)
            .render(&["Scanning"], "pkg", "")
            .unwrap();

        assert!(file.source.contains("import (\n\t. \"fmt\"\n\t\"reflect\"\n)\n"));
        assert!(file.source.contains(") Scan(s *Scanner) {\n"));
    }

    #[test]
    fn test_dot_import_dropped_for_local_types() {
        let package = load(
            "package pkg\n\nimport . \"fmt\"\n\ntype Token int\n\ntype Lexer interface {\n\tNext(skip int) (Token, error)\n}\n",
        );
        let file = FakeRenderer::new(&package)
            .render(&["Lexer"], "pkg", "")
            .unwrap();

        assert!(!file.source.contains("\"fmt\""));
        assert!(file.source.contains("import \"reflect\"\n"));
    }

    #[test]
    fn test_mapper_renderings() {
        let package = load(
            "package pkg\n\ntype Mapper interface {\n\tMapParameter(map[string]string)\n\tMapReturn() map[string]string\n}\n",
        );
        let file = FakeRenderer::new(&package)
            .render(&["Mapper"], "pkg", "")
            .unwrap();
        let src = &file.source;

        assert!(src.starts_with("package pkg\n\nimport \"reflect\"\n\n"));
        assert!(src.contains("\tParameters struct {\n\t\tIdent1 map[string]string\n\t}\n"));
        assert!(src.contains("\tMapParameterHook func(map[string]string)\n"));
        assert!(src.contains("\tMapReturnHook    func() map[string]string\n"));
        assert!(src.contains("func (_f1 *FakeMapper) MapParameter(ident1 map[string]string) {\n"));
        assert!(src.contains("\tinvocation.Parameters.Ident1 = ident1\n"));
        assert!(src.contains("func (_f2 *FakeMapper) MapParameterCalledWith(ident1 map[string]string) (found bool) {\n"));
        assert!(src.contains("\t\tif reflect.DeepEqual(call.Parameters.Ident1, ident1) {\n"));
        assert!(src.contains("func (_f6 *FakeMapper) MapReturn() (ident1 map[string]string) {\n"));
        assert!(src.contains("\tident1 = _f6.MapReturnHook()\n\n\tinvocation.Results.Ident1 = ident1\n"));
        assert!(!src.contains("MapReturnCalledWith"));
        assert!(!src.contains("MapReturnResultsForCall"));
        assert!(!src.contains("MapParameterResultsForCall"));
        assert_eq!(file.imports, vec!["reflect"]);
    }

    #[test]
    fn test_constructors() {
        let package = load(
            "package pkg\n\ntype Store interface {\n\tGet(key string) (value []byte, err error)\n}\n",
        );
        let src = FakeRenderer::new(&package)
            .render(&["Store"], "pkg", "")
            .unwrap()
            .source;

        assert!(src.contains(
            "\t\tGetHook: func(string) ([]byte, error) {\n\t\t\tpanic(\"Unexpected call to Store.Get\")\n\t\t},\n"
        ));
        assert!(src.contains("func NewFakeStoreDefaultFatal(t StoreTestingT) *FakeStore {\n"));
        assert!(src.contains(
            "\t\tGetHook: func(string) (_ []byte, _ error) {\n\t\t\tt.Fatal(\"Unexpected call to Store.Get\")\n\t\t\treturn\n\t\t},\n"
        ));
        assert!(src.contains("\t\t\tt.Error(\"Unexpected call to Store.Get\")\n"));
        assert!(src.contains("func (f *FakeStore) Reset() {\n\tf.GetCalls = []*GetInvocation{}\n}\n"));
        assert!(src.contains(
            "func (_f6 *FakeStore) GetResultsForCall(key string) (value []byte, err error, found bool) {\n"
        ));
    }

    #[test]
    fn test_colliding_locals_are_renamed() {
        let package = load(
            "package pkg\n\ntype Tricky interface {\n\tDo(f, call, invocation, t int, found bool) (count int)\n\tReset()\n}\n",
        );
        let src = FakeRenderer::new(&package)
            .render(&["Tricky"], "pkg", "")
            .unwrap()
            .source;

        assert!(src.contains("func (_f1 *FakeTricky) Do(f int, call int, invocation int, t int, found bool) (count int) {\n"));
        assert!(src.contains("\t_invocation := new(DoInvocation)\n"));
        assert!(src.contains("\t_invocation.Parameters.Invocation = invocation\n"));
        assert!(src.contains("(_found bool) {\n\tfor _, _call := range _f2.DoCalls {\n"));
        assert!(src.contains("AssertDoCalledWith(_t TrickyTestingT, f int"));
        assert!(src.contains("\tvar _count int\n"));
        assert!(!src.contains("Reset clears the recorded calls"));
        assert!(src.contains("func (f *FakeTricky) Reset() {\n\tif f.ResetHook == nil {"));
    }

    #[test]
    fn test_skip_and_missing() {
        let package = load(
            "package pkg\n\ntype Empty interface{}\n\ntype Voider interface {\n\tVoidMethod()\n}\n",
        );
        let renderer = FakeRenderer::new(&package);

        let file = renderer.render(&["Empty", "_", "Voider", "Voider"], "pkg", "").unwrap();
        assert_eq!(file.interfaces, vec!["Voider"]);
        let skipped: Vec<&str> = file.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(skipped, vec!["Empty", "_"]);

        assert!(matches!(
            renderer.render(&["Empty"], "pkg", ""),
            Err(RenderError::NoValidInterfaces)
        ));
        assert!(matches!(
            renderer.render(&["Voider", "Missing"], "pkg", ""),
            Err(RenderError::InterfaceNotFound { ref name }) if name == "Missing"
        ));
    }

    #[test]
    fn test_shared_method_names_get_prefixed_invocations() {
        let package = load(
            "package pkg\n\ntype A interface {\n\tClose() error\n}\n\ntype B interface {\n\tClose() error\n}\n",
        );
        let src = FakeRenderer::new(&package)
            .render(&["A", "B"], "pkg", "")
            .unwrap()
            .source;
        assert!(src.contains("type ACloseInvocation struct {"));
        assert!(src.contains("type BCloseInvocation struct {"));
        assert!(!src.contains("type CloseInvocation"));
    }

    #[test]
    fn test_reflect_param_gets_aliased_import() {
        let package = load("package pkg\n\ntype Mirror interface {\n\tShow(reflect bool)\n}\n");
        let file = FakeRenderer::new(&package)
            .render(&["Mirror"], "pkg", "")
            .unwrap();
        assert!(file.source.contains("import _reflect \"reflect\"\n"));
        assert!(file
            .source
            .contains("if _reflect.DeepEqual(call.Parameters.Reflect, reflect) {"));
    }
}
