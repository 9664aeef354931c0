//! Named request-body templates.
//!
//! A [`TemplateCache`] is an explicitly constructed registry of precompiled
//! text templates, looked up by a stable name at body-build time. Each cache
//! instance owns its own template set, so tests and embedders can run with
//! distinct sets side by side.

use std::collections::HashMap;

use handlebars::Handlebars;
use serde::Serialize;

use crate::{Error, Result};

/// Content type for which rendered output is compacted as JSON.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Cache of named, precompiled request-body templates.
///
/// Compilation happens at [`register`](Self::register) time; a compile
/// failure is stored rather than raised, and surfaces when the broken
/// template is first built against. Templates are immutable once registered.
pub struct TemplateCache {
    registry: Handlebars<'static>,
    compile_failures: HashMap<String, String>,
}

impl TemplateCache {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        // A placeholder naming a missing field is a render error, not silence.
        registry.set_strict_mode(true);
        // Bodies are JSON, not HTML; substitute field values literally.
        registry.register_escape_fn(handlebars::no_escape);
        Self {
            registry,
            compile_failures: HashMap::new(),
        }
    }

    /// Compile and store a template under `name`.
    ///
    /// A compile failure is captured and reported lazily from
    /// [`build`](Self::build); registration itself never fails.
    pub fn register(&mut self, name: &str, template_text: &str) {
        if let Err(err) = self.registry.register_template_string(name, template_text) {
            self.compile_failures
                .insert(name.to_string(), err.to_string());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registry.has_template(name) || self.compile_failures.contains_key(name)
    }

    /// Render the named template against `data` and return the body text.
    ///
    /// For `application/json` content the rendered text is compacted; if the
    /// rendered output is not valid JSON the error carries the raw text for
    /// diagnosis.
    pub fn build<T: Serialize>(&self, name: &str, data: &T, content_type: &str) -> Result<String> {
        if let Some(reason) = self.compile_failures.get(name) {
            return Err(Error::TemplateCompile {
                name: name.to_string(),
                reason: reason.clone(),
            });
        }
        if !self.registry.has_template(name) {
            return Err(Error::TemplateNotFound {
                name: name.to_string(),
            });
        }

        let rendered = self
            .registry
            .render(name, data)
            .map_err(|err| Error::TemplateExecution {
                name: name.to_string(),
                reason: err.to_string(),
            })?;

        if content_type == JSON_CONTENT_TYPE {
            let value: serde_json::Value =
                serde_json::from_str(&rendered).map_err(|err| Error::MalformedTemplateOutput {
                    name: name.to_string(),
                    raw: rendered.clone(),
                    reason: err.to_string(),
                })?;
            return Ok(value.to_string());
        }

        Ok(rendered)
    }
}

impl Default for TemplateCache {
    fn default() -> Self {
        Self::new()
    }
}
