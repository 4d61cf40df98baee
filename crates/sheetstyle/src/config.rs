//! Export host configuration.
//!
//! Hosts keep the style list on the per-export configuration, either at the
//! top level (`excelStyles`) or nested under `exportOptions.excelStyles`.
//! [`ExportConfig`] reads both, resolves template references, and writes the
//! flat list back so the host's style step only ever sees concrete entries.
//!
//! ```rust
//! use sheetstyle::{ExportConfig, TemplateRegistry};
//!
//! let mut config = ExportConfig::from_json(r#"{
//!     "title": "Quarterly report",
//!     "excelStyles": { "template": "gold_medium" }
//! }"#).unwrap();
//!
//! let mut registry = TemplateRegistry::builtin();
//! let mut diagnostics: Vec<String> = Vec::new();
//! let resolved = config.apply_templates(&mut registry, &mut diagnostics).unwrap();
//!
//! assert_eq!(resolved.len(), 8);
//! assert!(!config.style_specs().unwrap().has_templates());
//! assert_eq!(config.extra["title"], "Quarterly report");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::diagnostics::DiagnosticSink;
use crate::error::StyleSpecError;
use crate::style::{StyleEntry, StyleSpecList};
use crate::template::{resolve, TemplateRegistry};

/// Per-export configuration as the host stores it.
///
/// Keys other than the style lists are kept in `extra` and survive a
/// round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Style list set directly on the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel_styles: Option<StyleSpecList>,
    /// Nested export options, consulted when `excel_styles` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_options: Option<ExportOptions>,
    /// Other host settings.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The host's nested export options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Style list set on the export options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excel_styles: Option<StyleSpecList>,
    /// Other option settings.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExportConfig {
    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, StyleSpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleSpecError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The style list the host would apply, if any.
    ///
    /// A top-level list wins over the one under `exportOptions`, even when
    /// it is empty.
    pub fn style_specs(&self) -> Option<&StyleSpecList> {
        self.excel_styles.as_ref().or_else(|| {
            self.export_options
                .as_ref()
                .and_then(|options| options.excel_styles.as_ref())
        })
    }

    /// Resolves the style list and stores the flat result at the top level.
    ///
    /// Returns the resolved entries, or `None` (leaving the configuration
    /// untouched) when there is no style list.
    pub fn apply_templates(
        &mut self,
        registry: &mut TemplateRegistry,
        sink: &mut dyn DiagnosticSink,
    ) -> Option<Vec<StyleEntry>> {
        let specs = self.style_specs()?.clone();
        let resolved = resolve(specs, registry, sink);
        self.excel_styles = Some(StyleSpecList::from(resolved.clone()));
        Some(resolved)
    }
}
