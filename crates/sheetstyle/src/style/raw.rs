//! Caller-supplied style specifications, before template expansion.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::entry::{Selector, StyleEntry};

/// One or more template names referenced by a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateNames {
    /// A single template name.
    One(String),
    /// Several template names, expanded in order.
    Many(Vec<String>),
}

impl TemplateNames {
    /// Iterates the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            TemplateNames::One(one) => std::slice::from_ref(one),
            TemplateNames::Many(many) => many,
        };
        names.iter().map(String::as_str)
    }

    /// Number of names referenced.
    pub fn len(&self) -> usize {
        match self {
            TemplateNames::One(_) => 1,
            TemplateNames::Many(many) => many.len(),
        }
    }

    /// Returns true for an empty name list.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<&str> for TemplateNames {
    fn from(name: &str) -> Self {
        TemplateNames::One(name.to_string())
    }
}

impl From<String> for TemplateNames {
    fn from(name: String) -> Self {
        TemplateNames::One(name)
    }
}

impl From<Vec<String>> for TemplateNames {
    fn from(names: Vec<String>) -> Self {
        TemplateNames::Many(names)
    }
}

impl<const N: usize> From<[&str; N]> for TemplateNames {
    fn from(names: [&str; N]) -> Self {
        TemplateNames::Many(names.iter().map(|s| s.to_string()).collect())
    }
}

/// An item of the caller's style list: a literal entry or a template reference.
///
/// Any object with a `template` key is a reference; everything else is a
/// literal [`StyleEntry`] and passes through resolution unchanged. Template
/// names that are not strings are kept in their JSON form (`5`, `null`), so
/// they fail lookup and are reported rather than passed through.
///
/// # Example
///
/// ```rust
/// use sheetstyle::{RawStyleSpec, Selector};
///
/// let item: RawStyleSpec = serde_json::from_str(
///     r#"{ "template": ["b", "u"], "cells": "sA" }"#,
/// ).unwrap();
///
/// match item {
///     RawStyleSpec::Template { template, cells } => {
///         assert_eq!(template.iter().collect::<Vec<_>>(), vec!["b", "u"]);
///         assert_eq!(cells, Some(Selector::from("sA")));
///     }
///     RawStyleSpec::Literal(_) => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawStyleSpec {
    /// Reference to one or more named templates.
    Template {
        /// Names to expand, in order.
        template: TemplateNames,
        /// Selector forced onto every expanded entry.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cells: Option<Selector>,
    },
    /// An explicit style entry.
    Literal(StyleEntry),
}

impl RawStyleSpec {
    /// Creates a template reference without a selector override.
    pub fn template(names: impl Into<TemplateNames>) -> Self {
        RawStyleSpec::Template {
            template: names.into(),
            cells: None,
        }
    }

    /// Sets the selector, returning `self` for chaining.
    ///
    /// On a reference this is the override applied to every expanded entry;
    /// on a literal it is simply the entry's own selector.
    pub fn with_cells(self, selector: impl Into<Selector>) -> Self {
        match self {
            RawStyleSpec::Template { template, .. } => RawStyleSpec::Template {
                template,
                cells: Some(selector.into()),
            },
            RawStyleSpec::Literal(entry) => RawStyleSpec::Literal(entry.with_cells(selector)),
        }
    }

    /// Returns true if this item references templates.
    pub fn is_template(&self) -> bool {
        matches!(self, RawStyleSpec::Template { .. })
    }
}

impl From<StyleEntry> for RawStyleSpec {
    fn from(entry: StyleEntry) -> Self {
        RawStyleSpec::Literal(entry)
    }
}

impl<'de> Deserialize<'de> for RawStyleSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;

        let Some(template) = object.remove("template") else {
            return serde_json::from_value(Value::Object(object))
                .map(RawStyleSpec::Literal)
                .map_err(D::Error::custom);
        };

        let template = match template {
            Value::Array(names) => TemplateNames::Many(names.into_iter().map(name_of).collect()),
            other => TemplateNames::One(name_of(other)),
        };
        let cells = match object.remove("cells") {
            None | Some(Value::Null) => None,
            Some(cells) => Some(serde_json::from_value(cells).map_err(D::Error::custom)?),
        };

        Ok(RawStyleSpec::Template { template, cells })
    }
}

fn name_of(value: Value) -> String {
    match value {
        Value::String(name) => name,
        other => other.to_string(),
    }
}

/// The caller's style list, normalized to a sequence.
///
/// Hosts may configure a single item or a list; both deserialize into a
/// list, so resolution only ever deals with sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleSpecList(Vec<RawStyleSpec>);

impl StyleSpecList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an item, returning `self` for chaining.
    pub fn push(mut self, item: impl Into<RawStyleSpec>) -> Self {
        self.0.push(item.into());
        self
    }

    /// Iterates items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, RawStyleSpec> {
        self.0.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if any item references a template.
    pub fn has_templates(&self) -> bool {
        self.0.iter().any(RawStyleSpec::is_template)
    }

    /// Consumes the list, returning its items.
    pub fn into_inner(self) -> Vec<RawStyleSpec> {
        self.0
    }
}

impl<'de> Deserialize<'de> for StyleSpecList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            Many(Vec<RawStyleSpec>),
            One(RawStyleSpec),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::Many(items) => StyleSpecList(items),
            OneOrMany::One(item) => StyleSpecList(vec![item]),
        })
    }
}

impl From<RawStyleSpec> for StyleSpecList {
    fn from(item: RawStyleSpec) -> Self {
        StyleSpecList(vec![item])
    }
}

impl From<Vec<RawStyleSpec>> for StyleSpecList {
    fn from(items: Vec<RawStyleSpec>) -> Self {
        StyleSpecList(items)
    }
}

impl From<StyleEntry> for StyleSpecList {
    fn from(entry: StyleEntry) -> Self {
        StyleSpecList(vec![RawStyleSpec::Literal(entry)])
    }
}

impl From<Vec<StyleEntry>> for StyleSpecList {
    fn from(entries: Vec<StyleEntry>) -> Self {
        entries.into_iter().map(RawStyleSpec::Literal).collect()
    }
}

impl FromIterator<RawStyleSpec> for StyleSpecList {
    fn from_iter<I: IntoIterator<Item = RawStyleSpec>>(iter: I) -> Self {
        StyleSpecList(iter.into_iter().collect())
    }
}

impl IntoIterator for StyleSpecList {
    type Item = RawStyleSpec;
    type IntoIter = std::vec::IntoIter<RawStyleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleSpecList {
    type Item = &'a RawStyleSpec;
    type IntoIter = std::slice::Iter<'a, RawStyleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
