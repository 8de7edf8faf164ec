//! Cellery Snippets CLI
//!
//! Usage:
//!   cellery-snippets [OPTIONS] [TEMPLATE]
//!
//! Options:
//!   -c, --components <FILE>  Component manifest (TOML) for image snippets
//!       --config <FILE>      Snippet configuration file (TOML)
//!       --line-ending <EOL>  lf, crlf or native (overrides config)
//!   -m, --metadata           Print label, category and tab stops to stderr
//!   -l, --list               List available templates
//!   -h, --help               Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cellery_snippets::{
    load_manifest, snippet, EntityCollection, LineEnding, SnippetConfig, SnippetTemplate,
};

#[derive(Parser)]
#[command(name = "cellery-snippets")]
#[command(about = "Completion snippets for the Cellery configuration language")]
struct Cli {
    /// Template to render (see --list)
    template: Option<String>,

    /// Component manifest (TOML) for cell-image and composite-image
    #[arg(short, long)]
    components: Option<PathBuf>,

    /// Snippet configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Line ending: lf, crlf or native (overrides the config file)
    #[arg(long)]
    line_ending: Option<LineEnding>,

    /// Print label, category, kind and tab stops to stderr
    #[arg(short, long)]
    metadata: bool,

    /// List available templates
    #[arg(short, long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        print_templates();
        return;
    }

    let template = match cli.template.as_deref() {
        Some(name) => match name.parse::<SnippetTemplate>() {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            print_templates();
            return;
        }
    };

    // Load config, then apply overrides
    let mut config = match &cli.config {
        Some(path) => match SnippetConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => SnippetConfig::default(),
    };
    if let Some(line_ending) = cli.line_ending {
        config = config.with_line_ending(line_ending);
    }

    let components = match &cli.components {
        Some(path) => match load_manifest(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading components '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => EntityCollection::new(),
    };
    if cli.components.is_some() && !template.takes_components() {
        tracing::warn!(template = %template, "template does not use components; manifest ignored");
    }

    let block = snippet(template, &components, &config);

    if cli.metadata {
        eprintln!("label:    {}", block.label());
        eprintln!("category: {}", block.category());
        eprintln!("kind:     {}", block.kind());
        for usage in block.tab_stops() {
            eprintln!(
                "stop ${}: {} occurrence(s) [{}]",
                usage.ordinal,
                usage.occurrences,
                usage.placeholders.join(", ")
            );
        }
    }

    println!("{}", block.body());
}

fn print_templates() {
    println!("Available templates:");
    for template in SnippetTemplate::ALL {
        let input = if template.takes_components() {
            " (uses --components)"
        } else {
            ""
        };
        println!("    {:<16} {}{}", template.name(), template.label(), input);
    }
}
