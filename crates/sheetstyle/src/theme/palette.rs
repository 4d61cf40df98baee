//! Theme colors.
//!
//! A [`Palette`] is an ordered list of named [`ColorCode`]s. Each color except
//! [`UNTHEMED_COLOR`] gets its own family of table templates when the
//! registry materializes.
//!
//! ```rust
//! use sheetstyle::{ColorCode, Palette};
//!
//! let palette = Palette::new()
//!     .add("teal", ColorCode::parse("teal", "#008080").unwrap())
//!     .add("white", ColorCode::parse("white", "ffffff").unwrap());
//!
//! assert_eq!(palette.get("teal").unwrap().as_str(), "008080");
//! assert_eq!(palette.get("white").unwrap().as_str(), "FFFFFF");
//! // White is never themed.
//! assert_eq!(palette.themed().count(), 1);
//! ```

use std::fmt;

use crate::error::StyleSpecError;

/// Palette entry that never gets generated templates.
///
/// White fills and borders are invisible on a white sheet.
pub const UNTHEMED_COLOR: &str = "white";

/// A 6-hex-digit RGB color code, stored upper case without a `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorCode(String);

impl ColorCode {
    /// Parses a color code for the palette entry `name`.
    ///
    /// Accepts an optional leading `#` and either case.
    pub fn parse(name: &str, value: &str) -> Result<Self, StyleSpecError> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(StyleSpecError::InvalidColor {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        Ok(ColorCode(hex.to_ascii_uppercase()))
    }

    /// Built-in codes, already validated by the unit tests below.
    fn known(hex: &'static str) -> Self {
        ColorCode(hex.to_string())
    }

    /// The code as six upper case hex digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered mapping from color name to [`ColorCode`].
///
/// Iteration order is insertion order and drives the order of generated
/// templates. Re-adding a name replaces its code in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    colors: Vec<(String, ColorCode)>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard office theme colors.
    pub fn office() -> Self {
        [
            ("black", "000000"),
            ("white", "FFFFFF"),
            ("blue", "4472C4"),
            ("blue_gray", "44546A"),
            ("orange", "ED7D31"),
            ("gray", "A5A5A5"),
            ("light_gray", "E7E6E6"),
            ("gold", "FFC000"),
            ("cyan", "5B9BD5"),
            ("green", "70AD47"),
        ]
        .into_iter()
        .fold(Palette::new(), |palette, (name, hex)| {
            palette.add(name, ColorCode::known(hex))
        })
    }

    /// Loads a palette from a YAML mapping of name to hex code.
    ///
    /// Quote the codes: YAML reads an unquoted `808080` as a number.
    ///
    /// ```rust
    /// use sheetstyle::Palette;
    ///
    /// let palette = Palette::from_yaml(r##"
    /// navy: "1F3864"
    /// plum: "#7030A0"
    /// "##).unwrap();
    /// assert_eq!(palette.names().collect::<Vec<_>>(), vec!["navy", "plum"]);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, StyleSpecError> {
        let root: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mapping = match root {
            serde_yaml::Value::Null => return Ok(Palette::new()),
            serde_yaml::Value::Mapping(mapping) => mapping,
            _ => {
                return Err(StyleSpecError::Yaml(
                    "palette must be a mapping of color name to hex code".to_string(),
                ))
            }
        };

        let mut palette = Palette::new();
        for (key, value) in mapping {
            let name = match key {
                serde_yaml::Value::String(name) => name,
                other => {
                    return Err(StyleSpecError::Yaml(format!(
                        "color names must be strings, got {:?}",
                        other
                    )))
                }
            };
            let code = match &value {
                serde_yaml::Value::String(s) => ColorCode::parse(&name, s)?,
                other => {
                    return Err(StyleSpecError::InvalidColor {
                        name,
                        value: format!("{:?}", other),
                    })
                }
            };
            palette.insert(name, code);
        }
        Ok(palette)
    }

    /// Adds a color, returning `self` for chaining.
    pub fn add(mut self, name: impl Into<String>, code: ColorCode) -> Self {
        self.insert(name, code);
        self
    }

    /// Adds or replaces a color by mutable reference.
    pub fn insert(&mut self, name: impl Into<String>, code: ColorCode) {
        let name = name.into();
        match self.colors.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = code,
            None => self.colors.push((name, code)),
        }
    }

    /// Looks up a color by name.
    pub fn get(&self, name: &str) -> Option<&ColorCode> {
        self.colors
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, code)| code)
    }

    /// Iterates all colors in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorCode)> {
        self.colors.iter().map(|(name, code)| (name.as_str(), code))
    }

    /// Iterates color names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates the colors that get generated templates (everything but white).
    pub fn themed(&self) -> impl Iterator<Item = (&str, &ColorCode)> {
        self.iter().filter(|(name, _)| *name != UNTHEMED_COLOR)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
