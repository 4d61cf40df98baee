//! Expansion of template references into concrete style entries.
//!
//! Resolution walks the caller's list in order. Literal entries pass through
//! as-is. Each template reference is replaced by the flattened entries of
//! every template it names, in name order, with the reference's `cells`
//! forced onto each of them when present and not the empty string. Unknown
//! names are reported through
//! the [`DiagnosticSink`] and skipped; resolution itself never fails.

use super::registry::TemplateRegistry;
use crate::diagnostics::DiagnosticSink;
use crate::style::{RawStyleSpec, Selector, StyleEntry, StyleNode, StyleSpecList};

/// Diagnostic line emitted for a template name that isn't registered.
pub fn missing_template_message(name: &str) -> String {
    format!("Template '{}' not found. Ignoring template.", name)
}

/// Expands every template reference in `raw` against `registry`.
///
/// The registry's theme templates are materialized the first time a
/// reference is seen. Expanded entries are copies: overriding their
/// selector never touches the registry.
///
/// # Example
///
/// ```rust
/// use sheetstyle::{resolve, RawStyleSpec, Selector, StyleEntry, TemplateRegistry};
/// use serde_json::json;
///
/// let mut registry = TemplateRegistry::builtin();
/// let mut diagnostics: Vec<String> = Vec::new();
///
/// let styles = resolve(
///     vec![
///         StyleEntry::new(json!({ "font": { "sz": 9 } })).into(),
///         RawStyleSpec::template(["b", "doesNotExist"]).with_cells("sB"),
///     ],
///     &mut registry,
///     &mut diagnostics,
/// );
///
/// assert_eq!(styles.len(), 2);
/// assert_eq!(styles[1].cells, Some(Selector::from("sB")));
/// assert_eq!(
///     diagnostics,
///     vec!["Template 'doesNotExist' not found. Ignoring template."]
/// );
/// ```
pub fn resolve(
    raw: impl Into<StyleSpecList>,
    registry: &mut TemplateRegistry,
    sink: &mut dyn DiagnosticSink,
) -> Vec<StyleEntry> {
    let raw = raw.into();
    let requested = raw.len();
    let mut resolved = Vec::with_capacity(requested);
    let mut missing = 0usize;

    for item in raw {
        match item {
            RawStyleSpec::Literal(entry) => resolved.push(entry),
            RawStyleSpec::Template { template, cells } => {
                registry.ensure_materialized();
                for name in template.iter() {
                    match registry.get(name) {
                        Some(found) => expand_into(found.spec(), cells.as_ref(), &mut resolved),
                        None => {
                            missing += 1;
                            sink.emit_line(&missing_template_message(name));
                        }
                    }
                }
            }
        }
    }

    tracing::debug!(
        requested,
        resolved = resolved.len(),
        missing,
        "resolved style templates"
    );
    resolved
}

/// Appends the flattened entries of `spec`, overriding selectors with `cells`.
///
/// An empty-string selector leaves the template's own selectors in place.
fn expand_into(spec: &StyleNode, cells: Option<&Selector>, out: &mut Vec<StyleEntry>) {
    let cells = cells.filter(|cells| !matches!(cells, Selector::One(one) if one.is_empty()));
    out.extend(spec.entries().map(|entry| {
        let mut entry = entry.clone();
        if let Some(cells) = cells {
            entry.cells = Some(cells.clone());
        }
        entry
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TemplateNames;
    use crate::template::Template;
    use serde_json::json;

    fn tagged(tag: &str) -> StyleEntry {
        StyleEntry::new(json!({ "tag": tag }))
    }

    fn tag_of(entry: &StyleEntry) -> &str {
        entry.style.as_ref().unwrap()["tag"].as_str().unwrap()
    }

    fn registry() -> TemplateRegistry {
        TemplateRegistry::new()
            .add("one", Template::new(tagged("one").with_cells("s0")))
            .add(
                "nested",
                Template::new(StyleNode::Group(vec![
                    tagged("n1").with_cells("c1").into(),
                    StyleNode::Group(vec![
                        tagged("n2").with_cells("c2").into(),
                        StyleNode::Group(vec![tagged("n3").into()]),
                    ]),
                    tagged("n4").with_cells("c4").into(),
                ])),
            )
    }

    #[test]
    fn test_empty_input() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(StyleSpecList::new(), &mut registry, &mut sink);
        assert!(out.is_empty());
        assert!(sink.is_empty());
        assert!(!registry.is_materialized());
    }

    #[test]
    fn test_literals_only_do_not_materialize() {
        let mut registry = TemplateRegistry::builtin();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(vec![tagged("a"), tagged("b")], &mut registry, &mut sink);
        assert_eq!(out, vec![tagged("a"), tagged("b")]);
        assert!(!registry.is_materialized());
    }

    #[test]
    fn test_nested_template_flattens_in_order() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(RawStyleSpec::template("nested"), &mut registry, &mut sink);
        let tags: Vec<_> = out.iter().map(tag_of).collect();
        assert_eq!(tags, vec!["n1", "n2", "n3", "n4"]);
        assert_eq!(out[0].cells, Some(Selector::from("c1")));
        assert_eq!(out[2].cells, None);
    }

    #[test]
    fn test_override_applies_to_every_nested_entry() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(
            RawStyleSpec::template("nested").with_cells(["sX", "sY"]),
            &mut registry,
            &mut sink,
        );
        assert_eq!(out.len(), 4);
        assert!(out
            .iter()
            .all(|e| e.cells == Some(Selector::from(["sX", "sY"]))));
    }

    #[test]
    fn test_override_does_not_touch_registry() {
        let mut registry = registry();
        let before = registry.get("nested").cloned();
        let mut sink: Vec<String> = Vec::new();
        resolve(
            RawStyleSpec::template("nested").with_cells("sZ"),
            &mut registry,
            &mut sink,
        );
        assert_eq!(registry.get("nested").cloned(), before);

        let out = resolve(RawStyleSpec::template("nested"), &mut registry, &mut sink);
        assert_eq!(out[0].cells, Some(Selector::from("c1")));
    }

    #[test]
    fn test_unknown_name_is_reported_and_skipped() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(
            RawStyleSpec::template(["one", "missing", "one"]),
            &mut registry,
            &mut sink,
        );
        assert_eq!(out.len(), 2);
        assert_eq!(
            sink,
            vec!["Template 'missing' not found. Ignoring template.".to_string()]
        );
    }

    #[test]
    fn test_empty_string_cells_do_not_override() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(
            RawStyleSpec::template("one").with_cells(""),
            &mut registry,
            &mut sink,
        );
        assert_eq!(out, vec![tagged("one").with_cells("s0")]);
    }

    #[test]
    fn test_malformed_template_value_is_reported() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let raw: StyleSpecList = serde_json::from_value(json!([
            { "template": ["one", 5] },
            { "template": null }
        ]))
        .unwrap();
        let out = resolve(raw, &mut registry, &mut sink);

        assert_eq!(out, vec![tagged("one").with_cells("s0")]);
        assert_eq!(
            sink,
            vec![
                "Template '5' not found. Ignoring template.".to_string(),
                "Template 'null' not found. Ignoring template.".to_string(),
            ]
        );
    }

    #[test]
    fn test_interleaving_is_preserved() {
        let mut registry = registry();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(
            vec![
                RawStyleSpec::from(tagged("first")),
                RawStyleSpec::template("one"),
                RawStyleSpec::from(tagged("middle")),
                RawStyleSpec::template(["nested", "one"]),
                RawStyleSpec::from(tagged("last")),
            ],
            &mut registry,
            &mut sink,
        );
        let tags: Vec<_> = out.iter().map(tag_of).collect();
        assert_eq!(
            tags,
            vec!["first", "one", "middle", "n1", "n2", "n3", "n4", "one", "last"]
        );
    }

    #[test]
    fn test_empty_name_list_still_materializes() {
        let mut registry = TemplateRegistry::builtin();
        let mut sink: Vec<String> = Vec::new();
        let out = resolve(
            RawStyleSpec::Template {
                template: TemplateNames::Many(vec![]),
                cells: None,
            },
            &mut registry,
            &mut sink,
        );
        assert!(out.is_empty());
        assert!(registry.is_materialized());
    }

    #[test]
    fn test_missing_template_message() {
        assert_eq!(
            missing_template_message("x"),
            "Template 'x' not found. Ignoring template."
        );
    }
}
