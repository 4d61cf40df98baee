//! Convenient imports for the common case.
//!
//! ```rust
//! use sheetstyle::prelude::*;
//!
//! let mut registry = TemplateRegistry::builtin();
//! let styles = registry.resolve(RawStyleSpec::template("int"), &mut StderrSink);
//! assert_eq!(styles.len(), 1);
//! ```

pub use crate::diagnostics::{DiagnosticSink, StderrSink, TracingSink};
pub use crate::style::{RawStyleSpec, Selector, StyleEntry, StyleNode, StyleSpecList};
pub use crate::template::{resolve, Template, TemplateRegistry};
pub use crate::theme::{ColorCode, Palette};
