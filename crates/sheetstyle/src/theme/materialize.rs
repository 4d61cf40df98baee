//! Deriving whole template families from a palette.

use super::aspect::Aspect;
use super::palette::Palette;
use crate::style::StyleNode;
use crate::template::Template;

/// Name suffix of the composite "complete table" template.
pub const COMPOSITE_SUFFIX: &str = "medium";

/// Name of the template for one aspect of one color, e.g. `header_blue`.
pub fn aspect_template_name(aspect: Aspect, color: &str) -> String {
    format!("{}_{}", aspect.key(), color)
}

/// Name of the composite template for a color, e.g. `blue_medium`.
pub fn composite_template_name(color: &str) -> String {
    format!("{}_{}", color, COMPOSITE_SUFFIX)
}

/// Builds every theme template for `palette`, in registration order.
///
/// For each themed color (palette order, white skipped) this yields the five
/// aspect templates in [`Aspect::ALL`] order, then the composite, whose spec
/// groups the five aspect specs in that same order.
pub fn derive_templates(palette: &Palette) -> Vec<(String, Template)> {
    let mut derived = Vec::with_capacity(palette.len() * (Aspect::ALL.len() + 1));

    for (color, code) in palette.themed() {
        let mut parts = Vec::with_capacity(Aspect::ALL.len());
        for aspect in Aspect::ALL {
            let spec = aspect.generate(code);
            parts.push(spec.clone());
            derived.push((
                aspect_template_name(aspect, color),
                Template::new(spec).with_description(format!("{}: {}", aspect.label(), color)),
            ));
        }
        derived.push((
            composite_template_name(color),
            Template::new(StyleNode::Group(parts))
                .with_description(format!("Complete table: {}", color)),
        ));
    }

    derived
}
