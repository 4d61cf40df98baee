//! Process-wide template registry.
//!
//! Hosts that don't want to thread a [`TemplateRegistry`] through their
//! export code can use these functions instead. They share one registry,
//! created on first use with the built-in templates and the office palette.
//! Theme templates are generated at most once for the whole process: the
//! check, the generation and the flag update all happen under one lock.
//!
//! Sinks passed to the `_with` functions run while the lock is held and must
//! not call back into this module.

use std::sync::{Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use crate::diagnostics::{list_templates as emit_listing, DiagnosticSink, StderrSink};
use crate::style::{StyleEntry, StyleSpecList};
use crate::template::{Template, TemplateRegistry};

static REGISTRY: Lazy<Mutex<TemplateRegistry>> =
    Lazy::new(|| Mutex::new(TemplateRegistry::builtin()));

fn registry() -> MutexGuard<'static, TemplateRegistry> {
    // A poisoned lock still holds a usable registry.
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Resolves `raw` against the shared registry, reporting to stderr.
///
/// ```rust
/// use sheetstyle::{global, RawStyleSpec};
///
/// let styles = global::resolve_styles(RawStyleSpec::template("stripes_green"));
/// assert_eq!(styles.len(), 1);
/// ```
pub fn resolve_styles(raw: impl Into<StyleSpecList>) -> Vec<StyleEntry> {
    resolve_styles_with(raw, &mut StderrSink)
}

/// Resolves `raw` against the shared registry, reporting to `sink`.
pub fn resolve_styles_with(
    raw: impl Into<StyleSpecList>,
    sink: &mut dyn DiagnosticSink,
) -> Vec<StyleEntry> {
    registry().resolve(raw, sink)
}

/// A snapshot of the shared registry, theme templates included.
pub fn get_templates() -> TemplateRegistry {
    let mut shared = registry();
    shared.ensure_materialized();
    shared.clone()
}

/// Adds or replaces a template in the shared registry.
///
/// Registered before the first resolution, a template also takes precedence
/// over a generated theme template of the same name.
pub fn register_template(name: impl Into<String>, template: Template) -> Option<Template> {
    registry().register_or_replace(name, template)
}

/// Writes the `name,description` listing of the shared registry to stderr.
pub fn list_templates() {
    list_templates_with(&mut StderrSink);
}

/// Emits the `name,description` listing of the shared registry to `sink`.
pub fn list_templates_with(sink: &mut dyn DiagnosticSink) {
    emit_listing(&mut registry(), sink);
}
