//! The fixed set of Cellery snippets offered by completion
//!
//! Every function here is pure. The plain variants use
//! [`SnippetConfig::default`]; the `_with_config` variants take the line
//! ending from the caller.

use std::fmt;
use std::str::FromStr;

use crate::config::SnippetConfig;
use crate::error::UnknownTemplate;
use crate::model::{EntityCollection, SnippetBlock};

use super::structure::render_entities;
use super::tabstop::{
    BUILD_CELL_BINDING, BUILD_COMPONENT_BINDING, BUILD_COMPONENT_IMAGE, BUILD_COMPONENT_NAME,
    BUILD_COMPOSITE_BINDING, CELL_BINDING, COMPONENT_BINDING, COMPONENT_IMAGE, COMPONENT_NAME,
    COMPOSITE_BINDING, RUN_IMAGE_BINDING,
};
use super::tabstop::TabStop;
use super::writer::{SnippetWriter, INDENT};

pub const COMPONENT_LABEL: &str = "component";
pub const CELL_IMAGE_LABEL: &str = "cell";
pub const COMPOSITE_IMAGE_LABEL: &str = "composite";
pub const CELL_BUILD_FUNCTION_LABEL: &str = "build (cell)";
pub const COMPOSITE_BUILD_FUNCTION_LABEL: &str = "build (composite)";
pub const RUN_FUNCTION_LABEL: &str = "run";

const CELL_IMAGE_TYPE: &str = "cellery:CellImage";
const COMPOSITE_IMAGE_TYPE: &str = "cellery:Composite";

/// Names the catalog operations so callers can pick one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetTemplate {
    Component,
    CellImage,
    CompositeImage,
    CellBuildFunction,
    CompositeBuildFunction,
    RunFunction,
}

impl SnippetTemplate {
    pub const ALL: [SnippetTemplate; 6] = [
        SnippetTemplate::Component,
        SnippetTemplate::CellImage,
        SnippetTemplate::CompositeImage,
        SnippetTemplate::CellBuildFunction,
        SnippetTemplate::CompositeBuildFunction,
        SnippetTemplate::RunFunction,
    ];

    /// Kebab-case identifier, accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            SnippetTemplate::Component => "component",
            SnippetTemplate::CellImage => "cell-image",
            SnippetTemplate::CompositeImage => "composite-image",
            SnippetTemplate::CellBuildFunction => "cell-build",
            SnippetTemplate::CompositeBuildFunction => "composite-build",
            SnippetTemplate::RunFunction => "run",
        }
    }

    /// The label carried by blocks this template produces
    pub fn label(self) -> &'static str {
        match self {
            SnippetTemplate::Component => COMPONENT_LABEL,
            SnippetTemplate::CellImage => CELL_IMAGE_LABEL,
            SnippetTemplate::CompositeImage => COMPOSITE_IMAGE_LABEL,
            SnippetTemplate::CellBuildFunction => CELL_BUILD_FUNCTION_LABEL,
            SnippetTemplate::CompositeBuildFunction => COMPOSITE_BUILD_FUNCTION_LABEL,
            SnippetTemplate::RunFunction => RUN_FUNCTION_LABEL,
        }
    }

    /// Whether the template renders a component collection
    pub fn takes_components(self) -> bool {
        matches!(
            self,
            SnippetTemplate::CellImage | SnippetTemplate::CompositeImage
        )
    }
}

impl fmt::Display for SnippetTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnippetTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SnippetTemplate::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| UnknownTemplate {
                name: s.to_string(),
                expected: SnippetTemplate::ALL
                    .iter()
                    .map(|t| t.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

/// Produce the snippet for `template`
///
/// Templates that do not render components ignore `components`.
pub fn snippet(
    template: SnippetTemplate,
    components: &EntityCollection,
    config: &SnippetConfig,
) -> SnippetBlock {
    match template {
        SnippetTemplate::Component => component_snippet_with_config(config),
        SnippetTemplate::CellImage => cell_image_snippet_with_config(components, config),
        SnippetTemplate::CompositeImage => composite_image_snippet_with_config(components, config),
        SnippetTemplate::CellBuildFunction => cell_build_function_snippet_with_config(config),
        SnippetTemplate::CompositeBuildFunction => {
            composite_build_function_snippet_with_config(config)
        }
        SnippetTemplate::RunFunction => run_function_snippet_with_config(config),
    }
}

fn finish(label: &'static str, body: String) -> SnippetBlock {
    tracing::debug!(label, len = body.len(), "assembled snippet");
    SnippetBlock::new(label, body)
}

/// A single component declaration
///
/// ```text
/// cellery:Component ${3:component} = {
///     name: "${1:componentName}",
///     src: {
///         image: "${2:image}"
///     }
/// };
/// ```
pub fn component_snippet() -> SnippetBlock {
    component_snippet_with_config(&SnippetConfig::default())
}

pub fn component_snippet_with_config(config: &SnippetConfig) -> SnippetBlock {
    let body = SnippetWriter::new(config)
        .text("cellery:Component ")
        .stop(COMPONENT_BINDING)
        .text(" = {")
        .line(1)
        .text("name: \"")
        .stop(COMPONENT_NAME)
        .text("\",")
        .line(1)
        .text("src: {")
        .line(2)
        .text("image: \"")
        .stop(COMPONENT_IMAGE)
        .text("\"")
        .line(1)
        .text("}")
        .line(0)
        .text("};")
        .finish();
    finish(COMPONENT_LABEL, body)
}

/// A cell image declaration listing `components`
pub fn cell_image_snippet(components: &EntityCollection) -> SnippetBlock {
    cell_image_snippet_with_config(components, &SnippetConfig::default())
}

pub fn cell_image_snippet_with_config(
    components: &EntityCollection,
    config: &SnippetConfig,
) -> SnippetBlock {
    image_snippet(CELL_IMAGE_LABEL, CELL_IMAGE_TYPE, CELL_BINDING, components, config)
}

/// A composite image declaration listing `components`
pub fn composite_image_snippet(components: &EntityCollection) -> SnippetBlock {
    composite_image_snippet_with_config(components, &SnippetConfig::default())
}

pub fn composite_image_snippet_with_config(
    components: &EntityCollection,
    config: &SnippetConfig,
) -> SnippetBlock {
    image_snippet(
        COMPOSITE_IMAGE_LABEL,
        COMPOSITE_IMAGE_TYPE,
        COMPOSITE_BINDING,
        components,
        config,
    )
}

fn image_snippet(
    label: &'static str,
    image_type: &str,
    binding: TabStop,
    components: &EntityCollection,
    config: &SnippetConfig,
) -> SnippetBlock {
    tracing::debug!(label, components = components.len(), "rendering image snippet");
    let body = SnippetWriter::new(config)
        .text(image_type)
        .text(" ")
        .stop(binding)
        .text(" = {")
        .line(1)
        .text("components: ")
        .raw(&render_entities(components, INDENT, config))
        .line(0)
        .text("};")
        .finish();
    finish(label, body)
}

/// A `build` function declaring one component and a cell holding it
pub fn cell_build_function_snippet() -> SnippetBlock {
    cell_build_function_snippet_with_config(&SnippetConfig::default())
}

pub fn cell_build_function_snippet_with_config(config: &SnippetConfig) -> SnippetBlock {
    let body = build_function(config, CELL_IMAGE_TYPE, BUILD_CELL_BINDING, 2);
    finish(CELL_BUILD_FUNCTION_LABEL, body)
}

/// A `build` function declaring one component and a composite holding it
pub fn composite_build_function_snippet() -> SnippetBlock {
    composite_build_function_snippet_with_config(&SnippetConfig::default())
}

pub fn composite_build_function_snippet_with_config(config: &SnippetConfig) -> SnippetBlock {
    // The composite entry sits one unit deeper than the cell entry
    let body = build_function(config, COMPOSITE_IMAGE_TYPE, BUILD_COMPOSITE_BINDING, 3);
    finish(COMPOSITE_BUILD_FUNCTION_LABEL, body)
}

/// Shared body of the build functions
///
/// The components map holds exactly one entry, written inline as
/// `"$1": $3` so it stays linked to the component declared above it.
fn build_function(
    config: &SnippetConfig,
    image_type: &str,
    binding: TabStop,
    entry_depth: usize,
) -> String {
    SnippetWriter::new(config)
        .text("public function build(cellery:ImageName iName) returns error? {")
        .line(1)
        .text("cellery:Component ")
        .stop(BUILD_COMPONENT_BINDING)
        .text(" = {")
        .line(2)
        .text("name: \"")
        .stop(BUILD_COMPONENT_NAME)
        .text("\",")
        .line(2)
        .text("src: {")
        .line(3)
        .text("image: \"")
        .stop(BUILD_COMPONENT_IMAGE)
        .text("\"")
        // No blank line after the image entry
        .line(2)
        .text("}")
        .line(1)
        .text("};")
        .line(1)
        .text(image_type)
        .text(" ")
        .stop(binding)
        .text(" = {")
        .line(2)
        .text("components: {")
        .line(entry_depth)
        .text("\"")
        .stop(BUILD_COMPONENT_NAME)
        .text("\": ")
        .stop(BUILD_COMPONENT_BINDING)
        .line(2)
        .text("}")
        .line(1)
        .text("};")
        .line(1)
        .text("return <@untainted> cellery:createImage(")
        .stop(binding)
        .text(", iName);")
        .line(0)
        .text("}")
        .finish()
}

/// A `run` function that constructs the image and creates an instance
pub fn run_function_snippet() -> SnippetBlock {
    run_function_snippet_with_config(&SnippetConfig::default())
}

pub fn run_function_snippet_with_config(config: &SnippetConfig) -> SnippetBlock {
    let body = SnippetWriter::new(config)
        .text("public function run(cellery:ImageName iName, map<cellery:ImageName> instances, ")
        .text("boolean startDependencies, boolean shareDependencies) ")
        .text("returns (cellery:InstanceState[]|error?) {")
        .line(1)
        .text("cellery:CellImage|cellery:Composite ")
        .stop(RUN_IMAGE_BINDING)
        .text(" = cellery:constructImage(iName);")
        .line(1)
        .text("return <@untainted> cellery:createInstance(")
        .stop(RUN_IMAGE_BINDING)
        .text(", iName, instances, startDependencies, shareDependencies);")
        .line(0)
        .text("}")
        .finish();
    finish(RUN_FUNCTION_LABEL, body)
}
