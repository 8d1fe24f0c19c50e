//! `aspect-inspect`: loads Turtle model files, resolves them and prints a
//! summary of the element graph, or the whole graph as JSON.
//!
//! **Usage:**
//! ```
//! aspect-inspect [--config <toml>] [--max-depth <n>] [--meta-model-version <v>]
//!                [--namespace] [--json] [--log-level <level>] <FILES>...
//! ```
//!
//! Exits non-zero if a file cannot be read or parsed, or if resolution fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use aspect_meta_model::serializer::json;
use aspect_meta_model::{AspectModel, MetaModelVersion, PropertyId};
use aspect_model_resolver::{ResolvedModel, Resolver, ResolverConfig, TripleGraph};
use clap::Parser;
use log::{debug, info, LevelFilter};

/// Resolve Aspect Model files and inspect the result.
#[derive(Parser, Debug)]
#[command(name = "aspect-inspect", version, about = "Resolve and inspect Aspect Models")]
struct Args {
    /// Turtle files forming one model.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Resolver configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured recursion ceiling.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Forces a meta model version (2.0.0, 2.1.0 or 2.2.0).
    #[arg(long)]
    meta_model_version: Option<String>,

    /// Resolve every top-level element instead of only the aspects.
    #[arg(long)]
    namespace: bool,

    /// Print the resolved model as JSON.
    #[arg(long)]
    json: bool,

    /// Log level (off, error, warn, info, debug, trace).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!("{args:?}");

    let config = load_config(&args)?;
    let mut graph = TripleGraph::new();
    for file in &args.files {
        let src = fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let added = graph
            .load_turtle(&src, &file.display().to_string())
            .with_context(|| format!("Failed to load {}", file.display()))?;
        info!("{}: {added} statements", file.display());
    }

    let resolver = Resolver::new(&graph, config);
    let resolved = if args.namespace {
        resolver.resolve_namespace()
    } else {
        resolver.resolve_aspects()
    }
    .context("Resolution failed")?;

    if args.json {
        let doc = json::to_json(&resolved.model);
        let out = serde_json::to_string_pretty(&doc).context("Failed to serialize model")?;
        println!("{out}");
    } else {
        print_summary(&resolved);
    }
    Ok(())
}

fn load_config(args: &Args) -> Result<ResolverConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };
    if let Some(max_depth) = args.max_depth {
        config = config.with_max_depth(max_depth);
    }
    if let Some(version) = &args.meta_model_version {
        config = config.with_meta_model_version(MetaModelVersion::from_str(version)?);
    }
    Ok(config)
}

fn print_summary(resolved: &ResolvedModel) {
    let model = &resolved.model;
    let e = model.elements();
    println!(
        "Aspect model (meta model {}): {} elements",
        model.meta_model_version.as_str(),
        model.element_count()
    );
    if let Some(namespace) = &model.namespace {
        println!(
            "  namespace {} with {} top-level elements",
            namespace.urn_prefix,
            namespace.elements.len()
        );
    }
    println!(
        "  {} aspects, {} properties, {} characteristics, {} constraints, {} entities",
        e.aspects.len(),
        e.properties.len(),
        e.characteristics.len(),
        e.constraints.len(),
        e.complex_types.len()
    );
    println!(
        "  {} units, {} quantity kinds, {} operations, {} events, {} entity instances",
        e.units.len(),
        e.quantity_kinds.len(),
        e.operations.len(),
        e.events.len(),
        e.entity_instances.len()
    );

    for (_, aspect) in model.aspects() {
        println!("{}", aspect.base.urn.as_deref().unwrap_or(&aspect.base.name));
        for property in &aspect.properties {
            println!("  {}", describe_property(model, *property));
        }
    }

    for diagnostic in &resolved.diagnostics {
        println!("{diagnostic}");
    }
}

fn describe_property(model: &AspectModel, id: PropertyId) -> String {
    let property = model.property(id);
    let characteristic = property
        .characteristic
        .map(|c| model.characteristic(c).base.name.as_str())
        .unwrap_or("-");
    let optional = if property.optional { "?" } else { "" };
    format!("{}{optional}: {characteristic}", property.payload_name)
}
