//! Diagnostic output.
//!
//! Resolution reports unknown template names as plain lines, and the
//! template listing is a set of `name,description` lines. Both go through a
//! [`DiagnosticSink`], so callers choose where they end up: stderr,
//! `tracing`, or a `Vec<String>` in tests.
//!
//! ```rust
//! use sheetstyle::{list_templates, TemplateRegistry};
//!
//! let mut registry = TemplateRegistry::builtin();
//! let mut lines: Vec<String> = Vec::new();
//! list_templates(&mut registry, &mut lines);
//!
//! assert_eq!(lines[0], "b,Bold");
//! assert!(lines.contains(&"blue_medium,Complete table: blue".to_string()));
//! ```

use crate::template::TemplateRegistry;

/// Destination for diagnostic lines.
pub trait DiagnosticSink {
    /// Emits one line of diagnostic output.
    fn emit_line(&mut self, line: &str);
}

/// Collects lines in memory.
impl DiagnosticSink for Vec<String> {
    fn emit_line(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn emit_line(&mut self, line: &str) {
        (**self).emit_line(line);
    }
}

/// Writes lines to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit_line(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

/// Forwards lines to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit_line(&mut self, line: &str) {
        tracing::warn!(target: "sheetstyle", "{}", line);
    }
}

/// Formats one listing line.
pub fn listing_line(name: &str, description: &str) -> String {
    format!("{},{}", name, description)
}

/// The `name,description` listing of described templates, newline-joined.
///
/// Lists the registry as it is; call
/// [`ensure_materialized`](TemplateRegistry::ensure_materialized) first to
/// include theme templates.
pub fn format_listing(registry: &TemplateRegistry) -> String {
    registry
        .list_described()
        .into_iter()
        .map(|(name, description)| listing_line(name, description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emits the listing of every described template, theme templates included.
pub fn list_templates(registry: &mut TemplateRegistry, sink: &mut dyn DiagnosticSink) {
    registry.ensure_materialized();
    for (name, description) in registry.list_described() {
        sink.emit_line(&listing_line(name, description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleEntry;
    use crate::template::Template;
    use std::sync::{Arc, Mutex};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    #[derive(Clone, Default)]
    struct WarnCapture {
        events: Arc<Mutex<Vec<(Level, String, String)>>>,
    }

    impl<S: Subscriber> Layer<S> for WarnCapture {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            struct MessageVisitor(String);

            impl tracing::field::Visit for MessageVisitor {
                fn record_debug(
                    &mut self,
                    field: &tracing::field::Field,
                    value: &dyn std::fmt::Debug,
                ) {
                    if field.name() == "message" {
                        self.0 = format!("{:?}", value);
                    }
                }
            }

            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            let meta = event.metadata();
            self.events.lock().unwrap().push((
                *meta.level(),
                meta.target().to_string(),
                visitor.0,
            ));
        }
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<String> = Vec::new();
        sink.emit_line("one");
        sink.emit_line("two");
        assert_eq!(sink, vec!["one", "two"]);
    }

    #[test]
    fn test_mut_ref_sink_forwards() {
        let mut lines: Vec<String> = Vec::new();
        {
            let mut by_ref = &mut lines;
            DiagnosticSink::emit_line(&mut by_ref, "x");
        }
        assert_eq!(lines, vec!["x"]);
    }

    #[test]
    fn test_tracing_sink_emits_warn_events() {
        let capture = WarnCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut sink = TracingSink;
        sink.emit_line("Template 'x' not found. Ignoring template.");

        let events = capture.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![(
                Level::WARN,
                "sheetstyle".to_string(),
                "Template 'x' not found. Ignoring template.".to_string()
            )]
        );
    }

    #[test]
    fn test_stderr_sink_accepts_resolution_output() {
        let mut registry = TemplateRegistry::builtin();
        let out = crate::resolve(
            crate::RawStyleSpec::template(["b", "nope"]),
            &mut registry,
            &mut StderrSink,
        );
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_format_listing_small_registry() {
        let registry = TemplateRegistry::new()
            .add("b", Template::described("Bold", StyleEntry::default()))
            .add("internal", Template::new(StyleEntry::default()))
            .add("u", Template::described("Underline", StyleEntry::default()));

        insta::assert_snapshot!(format_listing(&registry), @r"
        b,Bold
        u,Underline
        ");
    }

    #[test]
    fn test_format_listing_empty() {
        assert_eq!(format_listing(&TemplateRegistry::new()), "");
    }

    #[test]
    fn test_list_templates_materializes() {
        let mut registry = TemplateRegistry::builtin();
        let mut lines: Vec<String> = Vec::new();
        list_templates(&mut registry, &mut lines);

        assert!(registry.is_materialized());
        assert_eq!(lines.len(), 14 + 9 * 6);
        assert_eq!(lines[13], "date_medium,Date: Medium format - eg. 4 Jun 1987");
        assert_eq!(lines[14], "header_black,Header: black");
        assert_eq!(lines[19], "black_medium,Complete table: black");
        assert_eq!(lines.last().unwrap(), "green_medium,Complete table: green");
    }

    #[test]
    fn test_listing_matches_format_listing() {
        let mut registry = TemplateRegistry::builtin();
        let mut lines: Vec<String> = Vec::new();
        list_templates(&mut registry, &mut lines);
        assert_eq!(lines.join("\n"), format_listing(&registry));
    }
}
