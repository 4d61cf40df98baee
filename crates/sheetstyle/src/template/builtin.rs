//! Hand-authored templates available in every [`TemplateRegistry::builtin`](super::TemplateRegistry::builtin).

use serde_json::json;

use super::registry::Template;
use crate::style::StyleEntry;

/// Data rows, header excluded.
const BODY: &str = "s1:-0";

fn number_format(format: &str) -> StyleEntry {
    StyleEntry::new(json!({ "numFmt": format }))
}

fn font_flag(flag: &str) -> StyleEntry {
    StyleEntry::new(json!({ "font": { flag: true } })).with_cells(BODY)
}

/// The hand-authored templates, in listing order.
pub fn builtin_templates() -> Vec<(&'static str, Template)> {
    vec![
        ("b", Template::described("Bold", font_flag("b"))),
        ("u", Template::described("Underline", font_flag("u"))),
        ("i", Template::described("Italics", font_flag("i"))),
        (
            "title_medium",
            Template::described(
                "Title: medium size",
                StyleEntry::new(json!({
                    "font": { "sz": 16 },
                    "alignment": { "vertical": "center" },
                }))
                .with_cells(["st"])
                .with_extra("height", json!(28)),
            ),
        ),
        (
            "currency_us",
            Template::described("Currency: USD", number_format("[$$-en-US] #,##0.00")),
        ),
        (
            "currency_eu",
            Template::described("Currency: Euro", number_format("[$€-x-euro2] #,##0.00")),
        ),
        (
            "currency_gb",
            Template::described("Currency: GBP", number_format("[$£-en-GB]#,##0.00")),
        ),
        (
            "int",
            Template::described("Number: Integer", number_format("#,##0;(#,##0)")),
        ),
        (
            "decimal_1",
            Template::described(
                "Number: 1 decimal place",
                number_format("#,##0.0;(#,##0.0)"),
            ),
        ),
        (
            "decimal_2",
            Template::described(
                "Number: 2 decimal places",
                number_format("#,##0.00;(#,##0.00)"),
            ),
        ),
        (
            "decimal_3",
            Template::described(
                "Number: 3 decimal places",
                number_format("#,##0.000;(#,##0.000)"),
            ),
        ),
        (
            "decimal_4",
            Template::described(
                "Number: 4 decimal places",
                number_format("#,##0.0000;(#,##0.0000)"),
            ),
        ),
        (
            "date_long",
            Template::described(
                "Date: Long format - eg. 24 September 1979",
                number_format("d mmmm yyyy"),
            ),
        ),
        (
            "date_medium",
            Template::described(
                "Date: Medium format - eg. 4 Jun 1987",
                number_format("d mmm yyyy"),
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Selector;

    #[test]
    fn test_builtin_names_in_order() {
        let names: Vec<_> = builtin_templates().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "b",
                "u",
                "i",
                "title_medium",
                "currency_us",
                "currency_eu",
                "currency_gb",
                "int",
                "decimal_1",
                "decimal_2",
                "decimal_3",
                "decimal_4",
                "date_long",
                "date_medium"
            ]
        );
    }

    #[test]
    fn test_all_builtins_are_described_single_entries() {
        for (name, template) in builtin_templates() {
            assert!(template.description().is_some(), "{} lacks a description", name);
            assert_eq!(template.spec().entry_count(), 1, "{}", name);
        }
    }

    #[test]
    fn test_bold_targets_body() {
        let (_, bold) = builtin_templates().remove(0);
        let entry = bold.spec().entries().next().unwrap();
        assert_eq!(entry.cells, Some(Selector::from("s1:-0")));
        assert_eq!(entry.style.as_ref().unwrap()["font"]["b"], json!(true));
    }

    #[test]
    fn test_title_sets_row_height() {
        let (_, title) = builtin_templates().remove(3);
        let entry = title.spec().entries().next().unwrap();
        assert_eq!(entry.extra["height"], json!(28));
        assert_eq!(entry.cells, Some(Selector::from(["st"])));
    }

    #[test]
    fn test_number_formats_have_no_selector() {
        let templates = builtin_templates();
        let (_, euro) = &templates[5];
        let entry = euro.spec().entries().next().unwrap();
        assert_eq!(entry.cells, None);
        assert_eq!(
            entry.style.as_ref().unwrap()["numFmt"],
            json!("[$€-x-euro2] #,##0.00")
        );
    }
}
