//! Cellery Snippets - completion snippets for the Cellery configuration language
//!
//! This library assembles the tab-stop snippet bodies an editor offers when
//! writing Cellery components, cells and composites. Every operation is a pure
//! function from an optional, insertion-ordered component collection to a
//! [`SnippetBlock`].
//!
//! # Example
//!
//! ```rust
//! use cellery_snippets::{run_function_snippet, SnippetKind};
//!
//! let block = run_function_snippet();
//! assert_eq!(block.kind(), SnippetKind::Snippet);
//! assert!(block.body().contains("${1:image}"));
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod template;

pub use config::{LineEnding, SnippetConfig};
pub use error::{ConfigError, ManifestError, UnknownTemplate};
pub use model::{
    collect_entities, load_manifest, parse_manifest, EntityCollection, NamedEntity, SnippetBlock,
    SnippetKind, SNIPPET_CATEGORY,
};
pub use template::catalog::{
    cell_build_function_snippet, cell_image_snippet, component_snippet,
    composite_build_function_snippet, composite_image_snippet, run_function_snippet,
};
pub use template::{snippet, SnippetTemplate};
