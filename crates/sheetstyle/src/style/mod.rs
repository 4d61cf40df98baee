//! Style data model.
//!
//! - [`StyleEntry`]: a concrete style instruction (selector + property tree)
//! - [`Selector`]: opaque cell selector, one expression or several
//! - [`StyleNode`]: nested specification stored by templates
//! - [`RawStyleSpec`] / [`StyleSpecList`]: what callers write, literal entries
//!   mixed with template references

mod entry;
mod node;
mod raw;

pub use entry::{Selector, StyleEntry};
pub use node::{Entries, StyleNode};
pub use raw::{RawStyleSpec, StyleSpecList, TemplateNames};
