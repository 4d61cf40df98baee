//! Generators for the visual aspects of a themed table.
//!
//! Each [`Aspect`] is a pure function from a [`ColorCode`] to a style
//! specification fragment. Running all five for one color gives a complete
//! table look: colored header, thin row and column rules, an outline, and
//! light alternating stripes.

use serde_json::{json, Value};

use super::palette::ColorCode;
use crate::style::{StyleEntry, StyleNode};

/// Tint applied to border colors (lighter than the theme color).
pub const BORDER_TINT: f64 = 0.4;

/// Tint applied to stripe fills (much lighter than the theme color).
pub const STRIPE_TINT: f64 = 0.8;

/// Header text color on theme fills.
pub const DEFAULT_HEADER_FONT: &str = "FFFFFF";

/// Light fills that need dark header text to stay readable.
pub const HEADER_FONT_EXCEPTIONS: &[(&str, &str)] = &[("E7E6E6", "000000")];

/// One themed visual aspect of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aspect {
    /// Solid fill on header and footer rows.
    Header,
    /// Thin top and bottom borders on every data row.
    RowLines,
    /// Thin left and right borders on every column.
    ColLines,
    /// Thin border around the whole table.
    Outline,
    /// Light fill on every second data row.
    Stripes,
}

impl Aspect {
    /// All aspects, in the order composite templates concatenate them.
    pub const ALL: [Aspect; 5] = [
        Aspect::Header,
        Aspect::RowLines,
        Aspect::ColLines,
        Aspect::Outline,
        Aspect::Stripes,
    ];

    /// Key used as the template name prefix (`<key>_<color>`).
    pub fn key(self) -> &'static str {
        match self {
            Aspect::Header => "header",
            Aspect::RowLines => "rowlines",
            Aspect::ColLines => "collines",
            Aspect::Outline => "outline",
            Aspect::Stripes => "stripes",
        }
    }

    /// Capitalized key, used in template descriptions.
    pub fn label(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Generates this aspect's style specification for `color`.
    pub fn generate(self, color: &ColorCode) -> StyleNode {
        match self {
            Aspect::Header => header(color),
            Aspect::RowLines => rowlines(color),
            Aspect::ColLines => collines(color),
            Aspect::Outline => outline(color),
            Aspect::Stripes => stripes(color),
        }
    }
}

/// Font color used on a header filled with `fill`.
pub fn header_font_color(fill: &ColorCode) -> &'static str {
    HEADER_FONT_EXCEPTIONS
        .iter()
        .find(|(light, _)| *light == fill.as_str())
        .map(|(_, font)| *font)
        .unwrap_or(DEFAULT_HEADER_FONT)
}

fn tinted(color: &ColorCode, tint: f64) -> Value {
    json!({ "rgb": color.as_str(), "tint": tint })
}

fn thin_border(color: &ColorCode) -> Value {
    json!({ "style": "thin", "color": tinted(color, BORDER_TINT) })
}

fn header(color: &ColorCode) -> StyleNode {
    let style = json!({
        "font": { "color": header_font_color(color) },
        "fill": { "pattern": { "color": color.as_str() } },
    });
    StyleNode::from(vec![
        StyleEntry::new(style.clone()).with_cells("sh"),
        StyleEntry::new(style).with_cells("sf"),
    ])
}

fn rowlines(color: &ColorCode) -> StyleNode {
    StyleEntry::new(json!({
        "border": { "top": thin_border(color), "bottom": thin_border(color) },
    }))
    .with_cells("s1:-0")
    .into()
}

fn collines(color: &ColorCode) -> StyleNode {
    StyleNode::from(vec![StyleEntry::new(json!({
        "border": { "left": thin_border(color), "right": thin_border(color) },
    }))
    .with_cells(["sh", "sf", "sA:>"])])
}

fn outline(color: &ColorCode) -> StyleNode {
    StyleNode::from(vec![
        StyleEntry::new(json!({
            "border": { "top": thin_border(color), "bottom": thin_border(color) },
        }))
        .with_cells(["sh", "sf"]),
        StyleEntry::new(json!({ "border": { "left": thin_border(color) } }))
            .with_cells(["sA", "sAh", "sAf"]),
        StyleEntry::new(json!({ "border": { "right": thin_border(color) } }))
            .with_cells(["s>", "s>h", "s>f"]),
    ])
}

fn stripes(color: &ColorCode) -> StyleNode {
    StyleEntry::new(json!({
        "fill": { "pattern": { "color": tinted(color, STRIPE_TINT) } },
    }))
    .with_cells("s1:n,2")
    .into()
}
