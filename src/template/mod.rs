//! Snippet templates for Cellery completion
//!
//! Templates are assembled through [`SnippetWriter`] from literal text,
//! indentation units, line separators and named [`TabStop`]s, so the stop
//! numbering shared between templates lives in one place ([`tabstop`]).
//!
//! # Example
//!
//! ```rust
//! use cellery_snippets::template::catalog;
//! use cellery_snippets::{collect_entities, LineEnding, NamedEntity, SnippetConfig};
//!
//! let config = SnippetConfig::new().with_line_ending(LineEnding::Lf);
//! let components = collect_entities(vec![NamedEntity::new("frontend", "comp1")]);
//! let block = catalog::cell_image_snippet_with_config(&components, &config);
//!
//! assert_eq!(
//!     block.body(),
//!     "cellery:CellImage ${1:cell} = {\n\tcomponents: {\n\t\tfrontend: comp1\n\t}\n};"
//! );
//! ```

pub mod catalog;
mod structure;
pub mod tabstop;
mod writer;

pub use catalog::{snippet, SnippetTemplate};
pub use structure::render_entities;
pub use tabstop::{tab_stops, TabStop, TabStopUsage};
pub use writer::{SnippetWriter, INDENT};
