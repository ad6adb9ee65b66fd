//! id3-tree - Main Entry Point
//!
//! Induces ID3 decision trees from categorical CSV files.

use clap::Parser;
use id3_tree::cli::{cmd_batch, cmd_build, cmd_predict, Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "id3_tree=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build { data, target, output, model, delimiter }) => {
            cmd_build(&data, target.as_deref(), output.as_deref(), model.as_deref(), delimiter)?;
        }
        Some(Commands::Batch { config }) => {
            cmd_batch(config.as_deref())?;
        }
        Some(Commands::Predict { model, data, output, delimiter }) => {
            cmd_predict(&model, &data, output.as_deref(), delimiter)?;
        }
        None => {
            // Default: the bundled dataset batch
            cmd_batch(None)?;
        }
    }

    Ok(())
}
