//! Integration tests: manifests and config files feeding the catalog

use std::path::Path;

use pretty_assertions::assert_eq;

use cellery_snippets::{
    cell_build_function_snippet, cell_image_snippet, component_snippet,
    composite_build_function_snippet, composite_image_snippet, load_manifest,
    run_function_snippet, snippet, EntityCollection, LineEnding, ManifestError, SnippetConfig,
    SnippetKind, SnippetTemplate, SNIPPET_CATEGORY,
};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_manifest_drives_cell_image() {
    let components = load_manifest(&fixture("components.toml")).expect("manifest should load");
    let config = SnippetConfig::new().with_line_ending(LineEnding::Lf);
    let block = snippet(SnippetTemplate::CellImage, &components, &config);

    assert_eq!(
        block.body(),
        "cellery:CellImage ${1:cell} = {\n\
         \tcomponents: {\n\
         \t\tfrontend: web,\n\
         \t\tbackend: api,\n\
         \t\tdatabase: store\n\
         \t}\n\
         };"
    );
}

#[test]
fn test_manifest_duplicate_key_rejected() {
    let result = load_manifest(&fixture("duplicate.toml"));
    match result {
        Err(ManifestError::DuplicateKey { key }) => assert_eq!(key, "api"),
        other => panic!("expected duplicate key error, got {:?}", other),
    }
}

#[test]
fn test_manifest_missing_file() {
    let result = load_manifest(&fixture("missing.toml"));
    assert!(matches!(result, Err(ManifestError::Io { .. })));
}

#[test]
fn test_config_file_line_ending() {
    let config = SnippetConfig::from_file(&fixture("snippets.toml")).expect("config should load");
    assert_eq!(config.line_ending, LineEnding::CrLf);

    let block = snippet(
        SnippetTemplate::RunFunction,
        &EntityCollection::new(),
        &config,
    );
    assert_eq!(block.body().matches("\r\n").count(), 3);
    assert!(!block.body().replace("\r\n", "").contains('\n'));
}

#[test]
fn test_every_operation_is_a_snippet() {
    let components = load_manifest(&fixture("components.toml")).unwrap();
    let blocks = [
        component_snippet(),
        cell_image_snippet(&components),
        composite_image_snippet(&components),
        cell_build_function_snippet(),
        composite_build_function_snippet(),
        run_function_snippet(),
    ];
    for block in &blocks {
        assert_eq!(block.kind(), SnippetKind::Snippet);
        assert_eq!(block.category(), SNIPPET_CATEGORY);
        assert!(!block.label().is_empty());
    }

    let mut labels: Vec<&str> = blocks.iter().map(|b| b.label()).collect();
    labels.sort_unstable();
    labels.dedup();
    assert_eq!(labels.len(), blocks.len(), "labels should be distinct");
}

#[test]
fn test_highest_ordinal_is_last_stop() {
    let components = load_manifest(&fixture("components.toml")).unwrap();
    for template in SnippetTemplate::ALL {
        let block = snippet(template, &components, &SnippetConfig::default());
        let ordinals: Vec<u32> = block.tab_stops().iter().map(|u| u.ordinal).collect();
        let expected: Vec<u32> = (1..=ordinals.len() as u32).collect();
        assert_eq!(ordinals, expected, "stops of {} should be 1..=N", template);
    }
}

#[test]
fn test_rendering_is_deterministic() {
    let components = load_manifest(&fixture("components.toml")).unwrap();
    let first = composite_image_snippet(&components);
    let second = composite_image_snippet(&load_manifest(&fixture("components.toml")).unwrap());
    assert_eq!(first, second);
}

#[test]
fn test_parallel_rendering_shares_input() {
    let components = load_manifest(&fixture("components.toml")).unwrap();
    let expected = cell_image_snippet(&components);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| cell_image_snippet(&components)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
