//! Named templates and their expansion.
//!
//! - [`Template`]: a described (or internal) style specification
//! - [`TemplateRegistry`]: ordered name → template map with lazy theme templates
//! - [`resolve`]: expands template references in a caller's style list

mod builtin;
mod registry;
mod resolve;

pub use builtin::builtin_templates;
pub use registry::{Template, TemplateRegistry};
pub use resolve::{missing_template_message, resolve};
