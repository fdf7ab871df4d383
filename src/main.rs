//! Command-line interface for sql-literal
//!
//! # Usage Examples
//!
//! ## Single literal
//! ```bash
//! sql-literal parse --provider postgresql --type "timestamp with time zone" \
//!   "2024-06-15 10:30:00+02"
//! # {"kind":"timestamp","value":"2024-06-15 10:30:00+02:00"}
//! ```
//!
//! ## Type table
//! ```bash
//! sql-literal types --provider mysql
//! ```
//!
//! ## Edit sets
//! ```bash
//! SQL_LITERAL_PROVIDER=mysql sql-literal apply --file edits.yaml --unknown-types reject
//! ```
//!
//! Logging defaults to `info`; set `RUST_LOG=sql_literal=debug` to see lookup
//! misses and per-cell failures.

use anyhow::Context;
use clap::{Parser, Subcommand};
use sql_literal::{
    lookup_column_type, type_names, ApplySummary, EditSet, ProviderOpts, UnknownTypePolicy,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sql-literal")]
#[command(about = "Convert SQL literal text into typed values per database dialect")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a single literal and print it as JSON
    Parse {
        #[command(flatten)]
        provider_opts: ProviderOpts,

        /// Column type, e.g. "integer" or "varchar(255)"
        #[arg(long = "type", value_name = "TYPE")]
        type_name: String,

        /// Literal text to convert
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },

    /// List the type names a provider recognizes
    Types {
        #[command(flatten)]
        provider_opts: ProviderOpts,
    },

    /// Convert a YAML file of cell edits, printing one JSON line per cell
    Apply {
        /// Edit set file
        #[arg(long, value_name = "PATH")]
        file: PathBuf,

        #[command(flatten)]
        provider_opts: ProviderOpts,

        /// How to treat cells whose type has no conversion
        #[arg(long, value_enum, default_value = "text")]
        unknown_types: UnknownTypePolicy,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize logging; info unless RUST_LOG says otherwise
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            provider_opts,
            type_name,
            literal,
        } => {
            let provider = provider_opts.required()?;
            let parser = lookup_column_type(&type_name, provider).ok_or_else(|| {
                anyhow::anyhow!("No literal conversion for type '{type_name}' on {provider}")
            })?;
            let value = parser
                .apply(&literal)
                .with_context(|| format!("Failed to convert literal for type '{type_name}'"))?;
            println!("{}", serde_json::to_string(&value)?);
        }
        Commands::Types { provider_opts } => {
            let provider = provider_opts.required()?;
            for (name, kind) in type_names(provider) {
                println!("{name:<30} {kind}");
            }
        }
        Commands::Apply {
            file,
            provider_opts,
            unknown_types,
        } => {
            let edit_set = EditSet::from_file(&file)
                .with_context(|| format!("Failed to load edit set from {}", file.display()))?;
            let provider = edit_set.resolve_provider(provider_opts.provider)?;
            tracing::info!(
                "Applying {} cell edit(s) from {} for {provider}",
                edit_set.cells.len(),
                file.display()
            );

            let results = edit_set.apply(provider, unknown_types);
            for result in &results {
                println!("{}", serde_json::to_string(result)?);
            }

            let summary = ApplySummary::from_results(&results);
            tracing::info!(
                "Converted: {}, passthrough: {}, failed: {}, unsupported: {}",
                summary.converted,
                summary.passthrough,
                summary.failed,
                summary.unsupported
            );
            if !summary.is_clean() {
                anyhow::bail!(
                    "{} cell(s) failed to convert and {} had an unsupported type",
                    summary.failed,
                    summary.unsupported
                );
            }
        }
    }

    Ok(())
}
