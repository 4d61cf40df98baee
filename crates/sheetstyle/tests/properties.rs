use proptest::prelude::*;
use serde_json::json;
use sheetstyle::{resolve, RawStyleSpec, Selector, StyleEntry, TemplateRegistry};

const NAMES: &[&str] = &[
    "b",
    "u",
    "int",
    "title_medium",
    "header_blue",
    "outline_gold",
    "collines_cyan",
    "green_medium",
    "missing",
    "also_missing",
];

fn item_strategy() -> impl Strategy<Value = RawStyleSpec> {
    let literal = (0u32..1000).prop_map(|n| {
        RawStyleSpec::from(StyleEntry::new(json!({ "literal": n })).with_cells(format!("s{}", n)))
    });
    let reference = (
        prop::collection::vec(prop::sample::select(NAMES), 0..4),
        prop::option::of("s[A-Z][0-9]"),
    )
        .prop_map(|(names, cells)| {
            let names: Vec<String> = names.into_iter().map(str::to_string).collect();
            let item = RawStyleSpec::template(names);
            match cells {
                Some(cells) => item.with_cells(cells),
                None => item,
            }
        });
    prop_oneof![literal, reference]
}

fn resolve_one(registry: &mut TemplateRegistry, item: RawStyleSpec) -> (Vec<StyleEntry>, usize) {
    let mut sink: Vec<String> = Vec::new();
    let out = resolve(item, registry, &mut sink);
    (out, sink.len())
}

proptest! {
    #[test]
    fn test_resolution_is_concatenation_of_items(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let mut registry = TemplateRegistry::builtin();

        let mut expected = Vec::new();
        let mut expected_missing = 0;
        for item in items.clone() {
            let (out, missing) = resolve_one(&mut registry, item);
            expected.extend(out);
            expected_missing += missing;
        }

        let mut sink: Vec<String> = Vec::new();
        let actual = resolve(items.clone(), &mut registry, &mut sink);

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(sink.len(), expected_missing);
    }

    #[test]
    fn test_literals_keep_relative_order(
        items in prop::collection::vec(item_strategy(), 0..12)
    ) {
        let mut registry = TemplateRegistry::builtin();
        let literals: Vec<StyleEntry> = items
            .iter()
            .filter_map(|item| match item {
                RawStyleSpec::Literal(entry) => Some(entry.clone()),
                RawStyleSpec::Template { .. } => None,
            })
            .collect();

        let mut sink: Vec<String> = Vec::new();
        let out = resolve(items, &mut registry, &mut sink);
        let seen: Vec<StyleEntry> = out
            .into_iter()
            .filter(|entry| entry.style.as_ref().map_or(false, |s| s.get("literal").is_some()))
            .collect();

        prop_assert_eq!(seen, literals);
    }

    #[test]
    fn test_override_reaches_every_expanded_entry(
        names in prop::collection::vec(prop::sample::select(NAMES), 1..5),
        cells in "s[A-Z]:[0-9]"
    ) {
        let mut registry = TemplateRegistry::builtin();
        let names: Vec<String> = names.into_iter().map(str::to_string).collect();
        let mut sink: Vec<String> = Vec::new();

        let out = resolve(
            RawStyleSpec::template(names).with_cells(cells.as_str()),
            &mut registry,
            &mut sink,
        );

        let expected = Selector::from(cells.as_str());
        for entry in &out {
            prop_assert_eq!(entry.cells.as_ref(), Some(&expected));
        }
    }
}
