//! # Protorules CLI Entry Point
//!
//! The main executable for the Protorules tool. This file drives the application lifecycle:
//!
//! 1. **Initialization**: Parses command-line arguments using [`cli::Cli`] and installs the log subscriber.
//! 2. **Schema Loading**: Decodes the descriptor set into a `DescriptorRegistry`.
//! 3. **Execution**: Classifies methods or renders configured patterns with `protorules_core`.
//! 4. **Presentation**: Formats and prints the results to standard output, errors to standard error.

mod cli;
mod formatter;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use formatter::{FormattedString, GenericError, RenderedMethod, ServiceList};
use protorules_core::config::PatternConfig;
use protorules_core::registry::DescriptorRegistry;
use protorules_core::traits::{classify, classify_service};
use std::path::Path;
use std::process;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{}", FormattedString::from(GenericError("Failed:", format!("{err:#}"))));
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Cli) -> anyhow::Result<()> {
    let registry = load_registry(&args.file_descriptor_set)?;

    match args.command {
        Commands::List => {
            println!("{}", FormattedString::from(ServiceList(registry.list_services())));
        }
        Commands::Classify { service, method } => classify_methods(&registry, &service, method)?,
        Commands::Describe { method } => {
            let (service, method_name) = method;
            let descriptor = registry.get_method_descriptor(&service, &method_name)?;
            println!("{}", FormattedString::from(classify(&descriptor)?));
        }
        Commands::Render { service, patterns } => render(&registry, &service, &patterns)?,
    }

    Ok(())
}

fn load_registry(path: &Path) -> anyhow::Result<DescriptorRegistry> {
    let registry = DescriptorRegistry::from_file(path)
        .with_context(|| format!("Cannot load descriptor set '{}'", path.display()))?;
    debug!(path = %path.display(), services = registry.list_services().len(), "loaded descriptor set");
    Ok(registry)
}

fn classify_methods(
    registry: &DescriptorRegistry,
    service: &str,
    method: Option<String>,
) -> anyhow::Result<()> {
    let traits = match method {
        Some(method) => vec![classify(&registry.get_method_descriptor(service, &method)?)?],
        None => classify_service(&registry.get_service_descriptor(service)?)?,
    };

    println!("{}", FormattedString::from(serde_json::to_value(traits)?));
    Ok(())
}

fn render(registry: &DescriptorRegistry, service: &str, patterns: &Path) -> anyhow::Result<()> {
    let config = PatternConfig::from_file(patterns)
        .with_context(|| format!("Cannot load patterns '{}'", patterns.display()))?;
    let compiled: Vec<_> = config
        .patterns
        .iter()
        .map(|definition| (definition.name.as_str(), definition.compile()))
        .collect();

    let service = registry.get_service_descriptor(service)?;

    // Surfaces schema contract violations before anything is emitted
    classify_service(&service)?;

    for method in service.methods() {
        let matched = compiled
            .iter()
            .find(|(_, pattern)| pattern.evaluate(&method));

        if matched.is_none() {
            warn!(method = method.full_name(), "no pattern matched");
        }

        let rendered = RenderedMethod {
            method: method.full_name().to_string(),
            pattern: matched.map(|(name, _)| name.to_string()),
            body: matched
                .map(|(_, pattern)| pattern.body(&method))
                .unwrap_or_default(),
        };
        println!("{}", FormattedString::from(rendered));
    }

    Ok(())
}
