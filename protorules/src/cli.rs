//! # CLI
//!
//! This module defines the command-line interface of `protorules` using `clap`.
//!
//! It is responsible for parsing user input and performing validation (e.g., ensuring methods are `package.Service/Method`).
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "protorules",
    version,
    about = "Inspect how a code generator classifies protobuf service methods"
)]
pub struct Cli {
    /// Path to the descriptor set (.bin), e.g. generated with `protoc --descriptor_set_out`
    pub file_descriptor_set: PathBuf,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all services in the descriptor set
    List,

    /// Print the classification of every method of a service as JSON
    ///
    /// ## Examples:
    ///
    /// ```bash
    /// protorules descriptors.bin classify my.pkg.Service --method ListThings
    /// ```
    Classify {
        /// Fully qualified service name (e.g. my.package.Service)
        service: String,
        /// Only classify this method
        #[arg(short, long)]
        method: Option<String>,
    },

    /// Describe the traits of a single method
    Describe {
        /// Fully qualified method name (e.g. my.package.Service/Method)
        #[arg(value_parser = parse_endpoint)]
        method: (String, String),
    },

    /// Render the first matching configured pattern for every method of a service
    Render {
        /// Fully qualified service name (e.g. my.package.Service)
        service: String,
        /// Path to the JSON pattern configuration
        #[arg(short, long)]
        patterns: PathBuf,
    },
}

fn parse_endpoint(value: &str) -> Result<(String, String), String> {
    let (service, method) = value.split_once('/').ok_or_else(|| {
        format!("Invalid method format: '{value}'. Expected 'package.Service/Method'",)
    })?;

    if service.trim().is_empty() || method.trim().is_empty() {
        return Err("Service and Method names cannot be empty".to_string());
    }

    Ok((service.to_string(), method.to_string()))
}
