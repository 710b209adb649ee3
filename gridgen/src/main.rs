//! gridgen CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::GridItemCommand;

#[derive(Parser)]
#[command(name = "gridgen")]
#[command(version)]
#[command(about = "Scaffold generator for enhavo-style grid items", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the files for a new grid item in a bundle
    GridItem {
        /// Bundle name (e.g., `BlogBundle`)
        bundle: String,
        /// Item name (`PascalCase`, e.g., `Post`, `GridItem`)
        item: String,
        /// Project root containing the `src/` tree (defaults to the current directory)
        #[arg(long)]
        project_root: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GridItem {
            bundle,
            item,
            project_root,
        } => {
            let cmd = GridItemCommand::new(bundle, item, project_root)?;
            cmd.execute()?;
        }
    }

    Ok(())
}
