//! # Sheetstyle - Style Templates for Spreadsheet Exports
//!
//! `sheetstyle` expands named style templates inside the style list of a
//! table export, so callers can write `{ "template": "blue_medium" }` instead
//! of a dozen hand-written border and fill entries. The export host then
//! receives a flat list of concrete entries.
//!
//! ## Core Concepts
//!
//! - [`StyleEntry`]: a concrete style (cell [`Selector`] + property tree)
//! - [`RawStyleSpec`]: a caller's list item, literal entry or template reference
//! - [`Template`] / [`TemplateRegistry`]: named specifications, listed in order
//! - [`Palette`] / [`Aspect`]: theme colors and the generators that turn each
//!   one into header, row line, column line, outline, stripe and complete-table
//!   templates
//! - [`resolve`]: the expansion itself
//! - [`DiagnosticSink`]: where "template not found" and listings are written
//!
//! ## Quick Start
//!
//! ```rust
//! use sheetstyle::{RawStyleSpec, Selector, StyleEntry, TemplateRegistry};
//! use serde_json::json;
//!
//! let mut registry = TemplateRegistry::builtin();
//! let mut diagnostics: Vec<String> = Vec::new();
//!
//! let styles = registry.resolve(
//!     vec![
//!         // Literal entries pass through untouched
//!         StyleEntry::new(json!({ "font": { "sz": 10 } })).with_cells("sA").into(),
//!         // Templates expand in place; `cells` overrides every expanded selector
//!         RawStyleSpec::template(["b", "currency_eu"]).with_cells("sC"),
//!     ],
//!     &mut diagnostics,
//! );
//!
//! assert_eq!(styles.len(), 3);
//! assert_eq!(styles[0].cells, Some(Selector::from("sA")));
//! assert!(styles[1..].iter().all(|s| s.cells == Some(Selector::from("sC"))));
//! ```
//!
//! ## Theme Templates
//!
//! Every palette color except white yields six templates: `header_<color>`,
//! `rowlines_<color>`, `collines_<color>`, `outline_<color>`,
//! `stripes_<color>`, and the composite `<color>_medium`. They are generated
//! once, the first time a registry resolves a template reference.
//!
//! ```rust
//! use sheetstyle::{ColorCode, Palette, RawStyleSpec, TemplateRegistry};
//!
//! let palette = Palette::new().add("teal", ColorCode::parse("teal", "008080").unwrap());
//! let mut registry = TemplateRegistry::builtin().with_palette(palette);
//!
//! let mut diagnostics: Vec<String> = Vec::new();
//! let styles = registry.resolve(RawStyleSpec::template("teal_medium"), &mut diagnostics);
//! assert_eq!(styles.len(), 8);
//! assert!(registry.contains("stripes_teal"));
//! ```
//!
//! ## Host Configuration
//!
//! [`ExportConfig`] reads the style list from a host configuration in JSON or
//! YAML and writes the resolved list back. The [`global`] module offers the
//! same operations on one process-wide registry.

pub mod config;
pub mod diagnostics;
mod error;
pub mod global;
pub mod prelude;
pub mod style;
pub mod template;
pub mod theme;

pub use error::StyleSpecError;

pub use config::{ExportConfig, ExportOptions};
pub use diagnostics::{
    format_listing, list_templates, DiagnosticSink, StderrSink, TracingSink,
};
pub use style::{RawStyleSpec, Selector, StyleEntry, StyleNode, StyleSpecList, TemplateNames};
pub use template::{missing_template_message, resolve, Template, TemplateRegistry};
pub use theme::{Aspect, ColorCode, Palette};
