//! Concrete style entries and the cell selectors they target.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A cell selector expression owned by the export host.
///
/// The crate never parses selectors. It only copies them, or replaces them
/// wholesale when a template reference carries an override. Hosts accept
/// either a single expression (`"s1:-0"`) or a list of them
/// (`["sh", "sf"]`), and both shapes round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selector {
    /// A single selector expression.
    One(String),
    /// Several selector expressions applied together.
    Many(Vec<String>),
}

impl Selector {
    /// Iterates the selector expressions in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            Selector::One(one) => std::slice::from_ref(one),
            Selector::Many(many) => many,
        };
        items.iter().map(String::as_str)
    }
}

impl From<&str> for Selector {
    fn from(expr: &str) -> Self {
        Selector::One(expr.to_string())
    }
}

impl From<String> for Selector {
    fn from(expr: String) -> Self {
        Selector::One(expr)
    }
}

impl From<Vec<String>> for Selector {
    fn from(exprs: Vec<String>) -> Self {
        Selector::Many(exprs)
    }
}

impl<const N: usize> From<[&str; N]> for Selector {
    fn from(exprs: [&str; N]) -> Self {
        Selector::Many(exprs.iter().map(|s| s.to_string()).collect())
    }
}

/// One concrete style instruction handed to the export host.
///
/// `style` is the host's property tree (font, fill, border, number format)
/// and is carried through uninspected. Any other keys the host understands,
/// such as `height` or `condition`, land in `extra` and are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    /// Cells the style applies to. `None` lets the host pick its default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cells: Option<Selector>,
    /// Style property tree.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    /// Remaining host keys, passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleEntry {
    /// Creates an entry with the given property tree and no selector.
    pub fn new(style: Value) -> Self {
        Self {
            cells: None,
            style: Some(style),
            extra: Map::new(),
        }
    }

    /// Sets the selector, returning `self` for chaining.
    pub fn with_cells(mut self, cells: impl Into<Selector>) -> Self {
        self.cells = Some(cells.into());
        self
    }

    /// Adds a host key next to `cells`/`style`, returning `self` for chaining.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}
