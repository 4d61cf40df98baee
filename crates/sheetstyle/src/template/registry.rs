//! Template registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::builtin::builtin_templates;
use super::resolve::resolve;
use crate::diagnostics::DiagnosticSink;
use crate::error::StyleSpecError;
use crate::style::{StyleEntry, StyleNode, StyleSpecList};
use crate::theme::{derive_templates, Palette};

/// A named, reusable style specification.
///
/// Templates without a description are internal: they resolve like any other
/// but are left out of [`TemplateRegistry::list_described`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(alias = "es")]
    spec: StyleNode,
}

impl Template {
    /// Creates an undescribed template.
    pub fn new(spec: impl Into<StyleNode>) -> Self {
        Self {
            description: None,
            spec: spec.into(),
        }
    }

    /// Creates a template with a description.
    pub fn described(description: impl Into<String>, spec: impl Into<StyleNode>) -> Self {
        Self::new(spec).with_description(description)
    }

    /// Sets the description, returning `self` for chaining.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The style specification this template expands to.
    pub fn spec(&self) -> &StyleNode {
        &self.spec
    }
}

/// An ordered collection of named templates.
///
/// Holds hand-authored templates plus, once materialized, the templates
/// derived from its [`Palette`]. Names are unique; iteration follows
/// registration order.
///
/// # Lazy Theme Templates
///
/// Palette templates are not built until the first template reference is
/// resolved (or [`ensure_materialized`](Self::ensure_materialized) is called).
/// Materialization happens at most once per registry. A generated name that is
/// already registered at that point is skipped, so hand-authored and loaded
/// templates always win over generated ones.
///
/// # Example
///
/// ```rust
/// use sheetstyle::{RawStyleSpec, TemplateRegistry};
///
/// let mut registry = TemplateRegistry::builtin();
/// assert!(!registry.is_materialized());
///
/// let mut diagnostics: Vec<String> = Vec::new();
/// let styles = registry.resolve(
///     vec![RawStyleSpec::template(["b", "blue_medium"])],
///     &mut diagnostics,
/// );
///
/// assert!(registry.is_materialized());
/// assert_eq!(styles.len(), 1 + 8);
/// assert!(diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: Vec<(String, Template)>,
    index: HashMap<String, usize>,
    palette: Palette,
    materialized: bool,
}

impl TemplateRegistry {
    /// Creates an empty registry with an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the hand-authored templates and the office palette.
    pub fn builtin() -> Self {
        let mut registry = Self::new().with_palette(Palette::office());
        for (name, template) in builtin_templates() {
            registry.register_or_replace(name, template);
        }
        registry
    }

    /// Sets the palette used for theme templates, returning `self` for chaining.
    ///
    /// Only affects materialization that has not happened yet.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Adds a template, returning `self` for chaining.
    pub fn add(mut self, name: impl Into<String>, template: Template) -> Self {
        self.register_or_replace(name, template);
        self
    }

    /// Registers a template, replacing any template of the same name.
    ///
    /// A replaced template keeps its position in the listing order.
    /// Returns the template that was replaced, if any.
    pub fn register_or_replace(
        &mut self,
        name: impl Into<String>,
        template: Template,
    ) -> Option<Template> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(
                &mut self.templates[position].1,
                template,
            )),
            None => {
                self.index.insert(name.clone(), self.templates.len());
                self.templates.push((name, template));
                None
            }
        }
    }

    /// Loads extra templates from YAML.
    ///
    /// The document maps template names to `{ description, spec }` (the short
    /// keys `desc` and `es` are accepted too). `spec` is a style entry or a
    /// nested list of them. Nothing is registered if any template fails to
    /// parse. Returns the number of templates registered.
    ///
    /// ```rust
    /// use sheetstyle::TemplateRegistry;
    ///
    /// let mut registry = TemplateRegistry::new();
    /// let added = registry.add_yaml(r#"
    /// warning_fill:
    ///   description: "Fill: warning yellow"
    ///   spec:
    ///     cells: "sA"
    ///     style:
    ///       fill:
    ///         pattern:
    ///           color: "FFEB9C"
    /// "#).unwrap();
    ///
    /// assert_eq!(added, 1);
    /// assert_eq!(
    ///     registry.get("warning_fill").unwrap().description(),
    ///     Some("Fill: warning yellow")
    /// );
    /// ```
    pub fn add_yaml(&mut self, yaml: &str) -> Result<usize, StyleSpecError> {
        let root: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mapping = match root {
            serde_yaml::Value::Null => return Ok(0),
            serde_yaml::Value::Mapping(mapping) => mapping,
            _ => {
                return Err(StyleSpecError::Yaml(
                    "templates must be a mapping of name to definition".to_string(),
                ))
            }
        };

        let mut parsed = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            let name = match key {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(StyleSpecError::Yaml(format!(
                        "template names must be strings, got {:?}",
                        other
                    )))
                }
            };
            let template: Template = serde_yaml::from_value(value)
                .map_err(|e| StyleSpecError::template(&name, e.to_string()))?;
            parsed.push((name, template));
        }

        let added = parsed.len();
        for (name, template) in parsed {
            self.register_or_replace(name, template);
        }
        Ok(added)
    }

    /// Looks up a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.index
            .get(name)
            .map(|&position| &self.templates[position].1)
    }

    /// Returns true if a template with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.templates
            .iter()
            .map(|(name, template)| (name.as_str(), template))
    }

    /// Iterates template names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, description)` for every described template, in registration order.
    pub fn list_described(&self) -> Vec<(&str, &str)> {
        self.templates
            .iter()
            .filter_map(|(name, template)| {
                template
                    .description()
                    .map(|description| (name.as_str(), description))
            })
            .collect()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Returns true if no templates are registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The palette theme templates are derived from.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns true once theme templates have been generated.
    pub fn is_materialized(&self) -> bool {
        self.materialized
    }

    /// Generates the palette's theme templates unless already done.
    ///
    /// Returns true if this call did the work. The flag is set before any
    /// template is registered, so the generation never runs twice.
    pub fn ensure_materialized(&mut self) -> bool {
        if self.materialized {
            return false;
        }
        self.materialized = true;

        let mut added = 0usize;
        for (name, template) in derive_templates(&self.palette) {
            if self.contains(&name) {
                tracing::warn!(
                    template = %name,
                    "generated theme template shadowed by an existing template; keeping the existing one"
                );
                continue;
            }
            self.register_or_replace(name, template);
            added += 1;
        }

        tracing::debug!(
            added,
            colors = self.palette.themed().count(),
            "materialized theme templates"
        );
        true
    }

    /// Expands template references in `raw` into concrete entries.
    ///
    /// Shorthand for [`resolve`](crate::resolve) against this registry.
    pub fn resolve(
        &mut self,
        raw: impl Into<StyleSpecList>,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<StyleEntry> {
        resolve(raw, self, sink)
    }
}
