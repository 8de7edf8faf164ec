//! Data model: component entities going in, snippet blocks coming out

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ManifestError;
use crate::template::tabstop::{self, TabStopUsage};

/// Classification tag attached to every snippet for completion ranking
pub const SNIPPET_CATEGORY: &str = "Snippet";

/// A component that can be referenced from a cell or composite declaration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedEntity {
    /// Human-readable label, written on the left of the map entry
    pub name: String,
    /// Identifier the surrounding code uses to address the component
    pub key: String,
}

impl NamedEntity {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }
}

/// Components keyed by reference key, iterated in insertion order
pub type EntityCollection = IndexMap<String, NamedEntity>;

/// Build a collection from entities, keyed by each entity's `key`
///
/// Later entities with a repeated key replace earlier ones in place.
pub fn collect_entities<I>(entities: I) -> EntityCollection
where
    I: IntoIterator<Item = NamedEntity>,
{
    entities
        .into_iter()
        .map(|entity| (entity.key.clone(), entity))
        .collect()
}

/// TOML structure for a component manifest
#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    components: Vec<NamedEntity>,
}

/// Load a component manifest from a TOML file
///
/// ```toml
/// [[components]]
/// key = "comp1"
/// name = "frontend"
/// ```
pub fn load_manifest(path: &Path) -> Result<EntityCollection, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let components = parse_manifest(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = components.len(),
        "loaded component manifest"
    );
    Ok(components)
}

/// Parse a component manifest from a TOML string, keeping array order
pub fn parse_manifest(content: &str) -> Result<EntityCollection, ManifestError> {
    let parsed: TomlManifest = toml::from_str(content)?;
    let mut components = EntityCollection::with_capacity(parsed.components.len());
    for entity in parsed.components {
        if components.contains_key(&entity.key) {
            return Err(ManifestError::DuplicateKey { key: entity.key });
        }
        components.insert(entity.key.clone(), entity);
    }
    Ok(components)
}

/// How the host should treat an inserted completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    /// Body contains tab-stop markers to expand
    Snippet,
}

impl std::fmt::Display for SnippetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnippetKind::Snippet => write!(f, "snippet"),
        }
    }
}

/// A rendered snippet ready to hand to a completion-item provider
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SnippetBlock {
    label: &'static str,
    body: String,
    category: &'static str,
    kind: SnippetKind,
}

impl SnippetBlock {
    pub(crate) fn new(label: &'static str, body: String) -> Self {
        Self {
            label,
            body,
            category: SNIPPET_CATEGORY,
            kind: SnippetKind::Snippet,
        }
    }

    /// Which template produced this block
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Snippet text with `$N` / `${N:text}` markers
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn kind(&self) -> SnippetKind {
        self.kind
    }

    /// Tab stops present in the body, ordered by ordinal
    pub fn tab_stops(&self) -> Vec<TabStopUsage> {
        tabstop::tab_stops(&self.body)
    }

    /// True when no ordinal carries two different placeholder texts
    pub fn is_linked_consistently(&self) -> bool {
        self.tab_stops()
            .iter()
            .all(|usage| usage.placeholders.len() <= 1)
    }

    /// Split into `(label, body, category, kind)`
    pub fn into_parts(self) -> (&'static str, String, &'static str, SnippetKind) {
        (self.label, self.body, self.category, self.kind)
    }
}
