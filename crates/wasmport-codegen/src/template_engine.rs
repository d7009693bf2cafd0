//! Template engine for loader generation using Handlebars.
//!
//! Wraps Handlebars with the two loader templates pre-registered. Strict
//! mode is on so a missing slot fails rendering instead of silently
//! producing broken JavaScript. HTML escaping is disabled: the output is
//! JavaScript, and every string value placed into a template is already
//! escaped by [`crate::js::string_literal`].

use handlebars::Handlebars;
use serde::Serialize;
use wasmport_core::{Error, Result};

/// Template engine for loader generation.
///
/// # Examples
///
/// ```
/// use wasmport_codegen::TemplateEngine;
/// use serde_json::json;
///
/// let mut engine = TemplateEngine::new().unwrap();
/// engine.register_template_string("greet", "hello {{name}}").unwrap();
/// assert_eq!(engine.render("greet", &json!({"name": "wasm"})).unwrap(), "hello wasm");
/// ```
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new engine with the loader templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if template registration fails
    /// (should not happen with the built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing slots
        handlebars.set_strict_mode(true);
        // Output is JavaScript; values are pre-escaped for that context
        handlebars.register_escape_fn(handlebars::no_escape);

        Self::register_loader_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers the sync and async loader templates.
    fn register_loader_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                "loader/sync",
                include_str!("../templates/loader/sync.js.hbs"),
            )
            .map_err(|e| Error::RenderError {
                template: "loader/sync".to_string(),
                message: format!("registration failed: {e}"),
            })?;

        handlebars
            .register_template_string(
                "loader/async",
                include_str!("../templates/loader/async.js.hbs"),
            )
            .map_err(|e| Error::RenderError {
                template: "loader/async".to_string(),
                message: format!("registration failed: {e}"),
            })?;

        Ok(())
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if the template is not registered,
    /// the context cannot be serialized, or a referenced slot is missing.
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::RenderError {
                template: template_name.to_string(),
                message: e.to_string(),
            })
    }

    /// Registers an additional template at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RenderError`] if the template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::RenderError {
                template: name.to_string(),
                message: format!("registration failed: {e}"),
            })
    }
}

impl Default for TemplateEngine<'_> {
    fn default() -> Self {
        Self::new().expect("failed to create default TemplateEngine")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_engine_creation() {
        assert!(TemplateEngine::new().is_ok());
    }

    #[test]
    fn test_default_trait() {
        let _engine = TemplateEngine::default();
    }

    #[test]
    fn test_loader_templates_are_registered() {
        let engine = TemplateEngine::new().unwrap();

        let sync = engine.render(
            "loader/sync",
            &json!({
                "import_statements": "",
                "import_object": "{}",
                "export_bindings": "",
                "payload": "AGFzbQEAAAA=",
            }),
        );
        assert!(sync.is_ok(), "sync render failed: {:?}", sync.err());

        let r#async = engine.render(
            "loader/async",
            &json!({
                "import_statements": "",
                "import_object": "{}",
                "asset_url": "new URL('module.wasm', import.meta.url)",
            }),
        );
        assert!(r#async.is_ok(), "async render failed: {:?}", r#async.err());
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let mut engine = TemplateEngine::new().unwrap();
        engine
            .register_template_string("raw", "const s = {{value}};")
            .unwrap();

        let rendered = engine
            .render("raw", &json!({"value": "'<&>'"}))
            .unwrap();
        assert_eq!(rendered, "const s = '<&>';");
    }

    #[test]
    fn test_strict_mode_fails_on_missing_slot() {
        let engine = TemplateEngine::new().unwrap();
        let result = engine.render("loader/sync", &json!({"payload": "AA=="}));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_render_error());
    }

    #[test]
    fn test_render_unknown_template() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine.render("loader/nope", &json!({})).unwrap_err();
        assert!(err.is_render_error());
    }

    #[test]
    fn test_register_invalid_template_syntax() {
        let mut engine = TemplateEngine::new().unwrap();
        let result = engine.register_template_string("broken", "hello {{name");
        assert!(result.is_err());
    }
}
