//! Loader module generation.
//!
//! Renders one of two textual templates parameterized by a module's
//! import/export surface: a synchronous loader embedding the binary as
//! base64, or an asynchronous loader fetching an emitted asset through
//! streaming instantiation. Given identical inputs the output text is
//! identical; there is no I/O and no shared state.

use crate::js::{self, IdentifierPool};
use crate::template_engine::TemplateEngine;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use wasmport_analyzer::ModuleInterface;
use wasmport_core::{AssetReference, LoaderMode, Result};

/// The payload handed to the generator, tagged by loading strategy.
///
/// The payload *is* the mode: an embedded byte slice always produces a
/// synchronous loader, an asset reference always produces a streaming
/// one, so mode and payload cannot disagree.
#[derive(Debug, Clone, Copy)]
pub enum LoaderPayload<'a> {
    /// Raw module bytes, embedded inline as base64.
    Embedded(&'a [u8]),
    /// Token for a binary already handed to the host's asset emitter.
    Asset(&'a AssetReference),
}

impl LoaderPayload<'_> {
    /// The loading strategy this payload implies.
    #[must_use]
    pub const fn mode(&self) -> LoaderMode {
        match self {
            Self::Embedded(_) => LoaderMode::Sync,
            Self::Asset(_) => LoaderMode::Async,
        }
    }
}

/// How the generated asynchronous loader turns an asset token into a URL.
///
/// The fetch itself is fixed; only the URL expression is host-specific,
/// so that part is a pluggable strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetUrlStyle {
    /// Resolve the token as a path relative to the generated module:
    /// `new URL('<token>', import.meta.url)`. Works in any host that
    /// serves emitted assets next to the bundle.
    RelativeUrl,
    /// Emit `import.meta.<prefix><token>`, for hosts that substitute
    /// their own asset-URL placeholders during bundling.
    ImportMetaProperty {
        /// Placeholder prefix, e.g. `ASSET_URL_`.
        prefix: String,
    },
}

impl Default for AssetUrlStyle {
    fn default() -> Self {
        Self::RelativeUrl
    }
}

impl AssetUrlStyle {
    /// JavaScript expression evaluating to the asset's URL at runtime.
    #[must_use]
    pub fn url_expression(&self, asset: &AssetReference) -> String {
        match self {
            Self::RelativeUrl => format!(
                "new URL({}, import.meta.url)",
                js::string_literal(asset.as_str())
            ),
            Self::ImportMetaProperty { prefix } => {
                format!("import.meta.{prefix}{token}", token = asset.as_str())
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct SyncContext {
    import_statements: String,
    import_object: String,
    export_bindings: String,
    payload: String,
}

#[derive(Debug, Serialize)]
struct AsyncContext {
    import_statements: String,
    import_object: String,
    asset_url: String,
}

/// Generator for WebAssembly loader modules.
///
/// # Examples
///
/// ```
/// use wasmport_analyzer::analyze;
/// use wasmport_codegen::{LoaderGenerator, LoaderPayload};
///
/// let wasm = wat::parse_str(r#"(module (func (export "add")))"#).unwrap();
/// let interface = analyze(&wasm).unwrap();
///
/// let generator = LoaderGenerator::new().unwrap();
/// let source = generator
///     .generate(&interface, &LoaderPayload::Embedded(&wasm))
///     .unwrap();
/// assert!(source.contains("export const add = instance.exports.add;"));
/// ```
#[derive(Debug)]
pub struct LoaderGenerator<'a> {
    engine: TemplateEngine<'a>,
    url_style: AssetUrlStyle,
}

impl<'a> LoaderGenerator<'a> {
    /// Creates a generator with the default asset URL style.
    ///
    /// # Errors
    ///
    /// Returns an error if template engine initialization fails.
    pub fn new() -> Result<Self> {
        Self::with_url_style(AssetUrlStyle::default())
    }

    /// Creates a generator with an explicit asset URL style.
    ///
    /// # Errors
    ///
    /// Returns an error if template engine initialization fails.
    pub fn with_url_style(url_style: AssetUrlStyle) -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, url_style })
    }

    /// Generates the ES-module source for one WebAssembly module.
    ///
    /// The interface's orderings are preserved: import statements follow
    /// first-seen module order, export bindings follow declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`wasmport_core::Error::RenderError`] if template
    /// rendering fails.
    pub fn generate(
        &self,
        interface: &ModuleInterface,
        payload: &LoaderPayload<'_>,
    ) -> Result<String> {
        let slots = InterfaceSlots::build(interface);

        tracing::debug!(
            mode = %payload.mode(),
            import_modules = interface.import_count(),
            exports = interface.export_count(),
            "generating loader module"
        );

        match payload {
            LoaderPayload::Embedded(bytes) => {
                let context = SyncContext {
                    import_statements: slots.import_statements,
                    import_object: slots.import_object,
                    export_bindings: slots.export_bindings,
                    payload: STANDARD.encode(bytes),
                };
                self.engine.render("loader/sync", &context)
            }
            LoaderPayload::Asset(asset) => {
                let context = AsyncContext {
                    import_statements: slots.import_statements,
                    import_object: slots.import_object,
                    asset_url: self.url_style.url_expression(asset),
                };
                self.engine.render("loader/async", &context)
            }
        }
    }
}

/// The named slots shared by both templates, rendered from an interface.
struct InterfaceSlots {
    import_statements: String,
    import_object: String,
    export_bindings: String,
}

impl InterfaceSlots {
    fn build(interface: &ModuleInterface) -> Self {
        let mut pool = IdentifierPool::new();

        // Identifier-safe export names keep their exact spelling, so they
        // claim the pool first; import locals route around them.
        for name in interface.exports() {
            if js::is_legal_identifier(name) {
                pool.reserve(name);
            }
        }

        let bindings: Vec<(String, String)> = interface
            .imports()
            .keys()
            .map(|module| (module.clone(), pool.allocate(module)))
            .collect();

        Self {
            import_statements: import_statements(&bindings),
            import_object: import_object(&bindings),
            export_bindings: export_bindings(interface.exports(), &mut pool),
        }
    }
}

/// One wildcard-namespace import per module, first-seen order.
fn import_statements(bindings: &[(String, String)]) -> String {
    bindings
        .iter()
        .map(|(module, local)| {
            format!("import * as {local} from {};\n", js::string_literal(module))
        })
        .collect()
}

/// Object literal mapping each original module-name string to its
/// sanitized local; `{}` when there are no imports.
fn import_object(bindings: &[(String, String)]) -> String {
    if bindings.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = bindings
        .iter()
        .map(|(module, local)| format!("{}: {local}", js::string_literal(module)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

/// Re-export bindings in declaration order.
///
/// Identifier-safe names are combined into a single `export const`
/// declaration list. Names that cannot appear as a bare identifier are
/// bound through bracket access and re-exported under their original
/// string with the string-name export form.
fn export_bindings(exports: &[String], pool: &mut IdentifierPool) -> String {
    let mut named = Vec::new();
    let mut aliased = Vec::new();

    for name in exports {
        if js::is_legal_identifier(name) {
            named.push(format!("{name} = instance.exports.{name}"));
        } else {
            aliased.push((pool.allocate(name), name));
        }
    }

    let mut out = String::new();
    if !named.is_empty() {
        out.push_str("export const ");
        out.push_str(&named.join(", "));
        out.push_str(";\n");
    }
    for (local, name) in aliased {
        let literal = js::string_literal(name);
        out.push_str(&format!("const {local} = instance.exports[{literal}];\n"));
        out.push_str(&format!("export {{ {local} as {literal} }};\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interface(imports: &[(&str, &str)], exports: &[&str]) -> ModuleInterface {
        let mut out = ModuleInterface::new();
        for (module, name) in imports {
            out.record_import(*module, *name);
        }
        for name in exports {
            out.record_export(*name);
        }
        out
    }

    fn sync_source(interface: &ModuleInterface, bytes: &[u8]) -> String {
        LoaderGenerator::new()
            .unwrap()
            .generate(interface, &LoaderPayload::Embedded(bytes))
            .unwrap()
    }

    fn async_source(interface: &ModuleInterface, token: &str) -> String {
        let asset = AssetReference::new(token);
        LoaderGenerator::new()
            .unwrap()
            .generate(interface, &LoaderPayload::Asset(&asset))
            .unwrap()
    }

    #[test]
    fn test_payload_implies_mode() {
        let bytes = [0u8; 4];
        let asset = AssetReference::new("module.wasm");
        assert_eq!(LoaderPayload::Embedded(&bytes).mode(), LoaderMode::Sync);
        assert_eq!(LoaderPayload::Asset(&asset).mode(), LoaderMode::Async);
    }

    #[test]
    fn test_sync_scenario() {
        let iface = interface(&[("env", "log")], &["add"]);
        let source = sync_source(&iface, b"\0asm\x01\0\0\0");

        assert!(source.contains("import * as env from 'env';"));
        assert!(source.contains("const base64 = \"AGFzbQEAAAA=\";"));
        assert!(source.contains("{ 'env': env }"));
        assert!(source.contains("export const add = instance.exports.add;"));
    }

    #[test]
    fn test_sync_emits_both_decode_paths() {
        let source = sync_source(&interface(&[], &[]), &[0, 1, 2, 3]);
        assert!(source.contains("typeof Buffer === 'undefined'"));
        assert!(source.contains("Uint8Array.from(atob(base64), (c) => c.charCodeAt(0))"));
        assert!(source.contains("Buffer.from(base64, 'base64')"));
    }

    #[test]
    fn test_async_scenario() {
        let iface = interface(&[("env", "log")], &["add"]);
        let source = async_source(&iface, "assets/module.wasm");

        assert!(source.contains("import * as env from 'env';"));
        assert!(source.contains("fetch(new URL('assets/module.wasm', import.meta.url))"));
        assert!(source.contains("WebAssembly.instantiateStreaming(request, { 'env': env })"));
        assert!(source.contains("export default"));
        assert!(source.contains(".then((result) => result.instance.exports)"));
        assert!(!source.contains("base64"));
    }

    #[test]
    fn test_zero_imports_give_empty_object() {
        let source = sync_source(&interface(&[], &["run"]), &[1]);
        assert!(source.contains("new WebAssembly.Instance(module, {});"));
        assert!(!source.contains("import * as"));
    }

    #[test]
    fn test_zero_exports_give_no_export_statement() {
        let source = sync_source(&interface(&[("env", "log")], &[]), &[1]);
        assert!(!source.contains("export const"));
        assert!(!source.contains("export {"));
    }

    #[test]
    fn test_export_order_is_preserved() {
        let source = sync_source(&interface(&[], &["mul", "add", "sub"]), &[1]);
        assert!(source.contains(
            "export const mul = instance.exports.mul, \
             add = instance.exports.add, \
             sub = instance.exports.sub;"
        ));
    }

    #[test]
    fn test_module_name_sanitization_preserves_original_key() {
        let iface = interface(&[("my-module", "helper")], &[]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("import * as my_module from 'my-module';"));
        assert!(source.contains("{ 'my-module': my_module }"));
    }

    #[test]
    fn test_colliding_module_names_get_distinct_locals() {
        let iface = interface(&[("my-module", "a"), ("my.module", "b")], &[]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("import * as my_module from 'my-module';"));
        assert!(source.contains("import * as my_module_1 from 'my.module';"));
        assert!(source.contains("{ 'my-module': my_module, 'my.module': my_module_1 }"));
    }

    #[test]
    fn test_reserved_word_module_name() {
        let iface = interface(&[("default", "x")], &[]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("import * as _default from 'default';"));
        assert!(source.contains("{ 'default': _default }"));
    }

    #[test]
    fn test_export_name_shadowing_import_local() {
        // The export binding keeps its spelling; the import local yields.
        let iface = interface(&[("env", "log")], &["env"]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("import * as env_1 from 'env';"));
        assert!(source.contains("{ 'env': env_1 }"));
        assert!(source.contains("export const env = instance.exports.env;"));
    }

    #[test]
    fn test_non_identifier_export_uses_string_name_form() {
        let iface = interface(&[], &["my-export"]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("const my_export = instance.exports['my-export'];"));
        assert!(source.contains("export { my_export as 'my-export' };"));
    }

    #[test]
    fn test_reserved_word_export_uses_string_name_form() {
        let iface = interface(&[], &["delete"]);
        let source = sync_source(&iface, &[1]);

        assert!(source.contains("const _delete = instance.exports['delete'];"));
        assert!(source.contains("export { _delete as 'delete' };"));
    }

    #[test]
    fn test_async_output_independent_of_binary_size() {
        let iface = interface(&[("env", "log")], &["add"]);
        // The payload never reaches the async template; only the token does.
        let small = async_source(&iface, "module.wasm");
        let again = async_source(&iface, "module.wasm");
        assert_eq!(small, again);
    }

    #[test]
    fn test_import_meta_property_url_style() {
        let iface = interface(&[], &[]);
        let asset = AssetReference::new("ref_42");
        let generator = LoaderGenerator::with_url_style(AssetUrlStyle::ImportMetaProperty {
            prefix: "ASSET_URL_".to_string(),
        })
        .unwrap();

        let source = generator
            .generate(&iface, &LoaderPayload::Asset(&asset))
            .unwrap();
        assert!(source.contains("fetch(import.meta.ASSET_URL_ref_42)"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let iface = interface(&[("env", "log"), ("host", "now")], &["run", "stop"]);
        let first = sync_source(&iface, &[7, 7, 7]);
        let second = sync_source(&iface, &[7, 7, 7]);
        assert_eq!(first, second);
    }
}
