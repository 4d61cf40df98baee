//! Palette-driven table themes.
//!
//! A handful of generator functions ([`Aspect`]) turn each palette color into
//! a family of templates:
//!
//! | Template            | Description             |
//! |---------------------|-------------------------|
//! | `header_<color>`    | `Header: <color>`       |
//! | `rowlines_<color>`  | `Rowlines: <color>`     |
//! | `collines_<color>`  | `Collines: <color>`     |
//! | `outline_<color>`   | `Outline: <color>`      |
//! | `stripes_<color>`   | `Stripes: <color>`      |
//! | `<color>_medium`    | `Complete table: <color>` |
//!
//! The registry runs [`derive_templates`] once, the first time a template is
//! needed. See [`TemplateRegistry::ensure_materialized`](crate::TemplateRegistry::ensure_materialized).

mod aspect;
mod materialize;
mod palette;

pub use aspect::{
    header_font_color, Aspect, BORDER_TINT, DEFAULT_HEADER_FONT, HEADER_FONT_EXCEPTIONS,
    STRIPE_TINT,
};
pub use materialize::{
    aspect_template_name, composite_template_name, derive_templates, COMPOSITE_SUFFIX,
};
pub use palette::{ColorCode, Palette, UNTHEMED_COLOR};
