//! Tab-stop markers and the numbering shared across catalog templates
//!
//! A tab stop is written either as `$N` or as `${N:text}`. Within one snippet,
//! every occurrence of the same ordinal is a linked region: the editor mirrors
//! edits across all of them. Distinct ordinals are visited in ascending order
//! and the highest one is the last stop before the end of the snippet.
//!
//! # Numbering
//!
//! | Template               | 1              | 2     | 3                 | 4             |
//! |------------------------|----------------|-------|-------------------|---------------|
//! | component              | component name | image | component binding |               |
//! | cell / composite image | image binding  |       |                   |               |
//! | cell / composite build | component name | image | component binding | image binding |
//! | run                    | image binding  |       |                   |               |
//!
//! The build functions embed a component declaration and then refer back to
//! stops 1 and 3 inside the components map, so renaming the component in one
//! place renames it everywhere.

use std::collections::BTreeMap;
use std::fmt;

use logos::{Lexer, Logos};

/// A numbered editable region in a snippet body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabStop {
    pub ordinal: u32,
    /// Default text shown before the user types
    pub placeholder: Option<&'static str>,
}

impl TabStop {
    /// A stop without default text (`$N`)
    pub const fn plain(ordinal: u32) -> Self {
        Self {
            ordinal,
            placeholder: None,
        }
    }

    /// A stop with default text (`${N:text}`)
    pub const fn with_placeholder(ordinal: u32, placeholder: &'static str) -> Self {
        Self {
            ordinal,
            placeholder: Some(placeholder),
        }
    }
}

impl fmt::Display for TabStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.placeholder {
            Some(text) => write!(f, "${{{}:{}}}", self.ordinal, text),
            None => write!(f, "${}", self.ordinal),
        }
    }
}

// Component declaration
pub const COMPONENT_NAME: TabStop = TabStop::with_placeholder(1, "componentName");
pub const COMPONENT_IMAGE: TabStop = TabStop::with_placeholder(2, "image");
pub const COMPONENT_BINDING: TabStop = TabStop::with_placeholder(3, "component");

// Image declarations
pub const CELL_BINDING: TabStop = TabStop::with_placeholder(1, "cell");
pub const COMPOSITE_BINDING: TabStop = TabStop::with_placeholder(1, "composite");

// Build functions: 1-3 mirror the component declaration, 4 is the image
pub const BUILD_COMPONENT_NAME: TabStop = TabStop::with_placeholder(1, "component-name");
pub const BUILD_COMPONENT_IMAGE: TabStop = COMPONENT_IMAGE;
pub const BUILD_COMPONENT_BINDING: TabStop = COMPONENT_BINDING;
pub const BUILD_CELL_BINDING: TabStop = TabStop::with_placeholder(4, "cell");
pub const BUILD_COMPOSITE_BINDING: TabStop = TabStop::with_placeholder(4, "composite");

// Run function
pub const RUN_IMAGE_BINDING: TabStop = TabStop::with_placeholder(1, "image");

/// Lexical pieces of a snippet body
#[derive(Logos, Debug, Clone, PartialEq)]
enum Marker<'a> {
    #[regex(r"\$[0-9]+", parse_plain)]
    Stop(u32),

    #[regex(r"\$\{[0-9]+:[^}]*\}", parse_placeholder)]
    Placeholder((u32, &'a str)),

    // A dollar sign that does not start a marker
    #[token("$")]
    Dollar,

    #[regex(r"[^$]+")]
    Text,
}

fn parse_plain<'a>(lex: &mut Lexer<'a, Marker<'a>>) -> Option<u32> {
    lex.slice()[1..].parse().ok()
}

fn parse_placeholder<'a>(lex: &mut Lexer<'a, Marker<'a>>) -> Option<(u32, &'a str)> {
    let inner = &lex.slice()[2..lex.slice().len() - 1];
    let (ordinal, text) = inner.split_once(':')?;
    Some((ordinal.parse().ok()?, text))
}

/// How one ordinal is used within a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStopUsage {
    pub ordinal: u32,
    /// Number of markers carrying this ordinal
    pub occurrences: usize,
    /// Distinct placeholder texts, in order of first appearance
    pub placeholders: Vec<String>,
}

/// List the tab stops in a snippet body, ordered by ordinal
pub fn tab_stops(body: &str) -> Vec<TabStopUsage> {
    let mut usages: BTreeMap<u32, TabStopUsage> = BTreeMap::new();

    for token in Marker::lexer(body) {
        let (ordinal, placeholder) = match token {
            Ok(Marker::Stop(ordinal)) => (ordinal, None),
            Ok(Marker::Placeholder((ordinal, text))) => (ordinal, Some(text)),
            // Out-of-range ordinals fail to parse and are treated as text
            Ok(Marker::Dollar) | Ok(Marker::Text) | Err(_) => continue,
        };

        let usage = usages.entry(ordinal).or_insert_with(|| TabStopUsage {
            ordinal,
            occurrences: 0,
            placeholders: Vec::new(),
        });
        usage.occurrences += 1;
        if let Some(text) = placeholder {
            if !usage.placeholders.iter().any(|p| p == text) {
                usage.placeholders.push(text.to_string());
            }
        }
    }

    usages.into_values().collect()
}
