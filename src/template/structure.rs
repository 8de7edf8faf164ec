//! Rendering of component collections as object-literal blocks

use crate::config::SnippetConfig;
use crate::model::EntityCollection;

use super::writer::INDENT;

/// Render entities as a brace-delimited map literal
///
/// Each entry is written as `name: key` on its own line, indented one unit
/// past `indent`, with commas between entries. The closing brace sits on its
/// own line at `indent`. An empty collection renders as `{}`.
///
/// ```rust
/// use cellery_snippets::template::render_entities;
/// use cellery_snippets::{collect_entities, LineEnding, NamedEntity, SnippetConfig};
///
/// let config = SnippetConfig::new().with_line_ending(LineEnding::Lf);
/// let components = collect_entities(vec![
///     NamedEntity::new("frontend", "comp1"),
///     NamedEntity::new("backend", "comp2"),
/// ]);
/// assert_eq!(
///     render_entities(&components, "", &config),
///     "{\n\tfrontend: comp1,\n\tbackend: comp2\n}"
/// );
/// ```
pub fn render_entities(entities: &EntityCollection, indent: &str, config: &SnippetConfig) -> String {
    if entities.is_empty() {
        return "{}".to_string();
    }

    let newline = config.line_ending.as_str();
    let mut out = String::from("{");
    for (i, (key, entity)) in entities.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        tracing::trace!(name = %entity.name, key = %key, "rendering entity");
        out.push_str(newline);
        out.push_str(indent);
        out.push_str(INDENT);
        out.push_str(&entity.name);
        out.push_str(": ");
        out.push_str(key);
    }
    out.push_str(newline);
    out.push_str(indent);
    out.push('}');
    out
}
