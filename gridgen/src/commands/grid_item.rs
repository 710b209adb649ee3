//! Grid-item scaffolding command

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;

use gridgen::{FilesystemRegistry, GridItemGenerator};

/// Generate a grid item inside a bundle
pub struct GridItemCommand {
    bundle: String,
    item: String,
    project_root: PathBuf,
}

impl GridItemCommand {
    /// Create a new command instance
    ///
    /// Falls back to the current directory when no project root is given.
    pub fn new(bundle: String, item: String, project_root: Option<PathBuf>) -> Result<Self> {
        let project_root = match project_root {
            Some(root) => root,
            None => std::env::current_dir().context("Failed to get current directory")?,
        };

        Ok(Self {
            bundle,
            item,
            project_root,
        })
    }

    /// Execute the command
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {} {} {}",
            style("Generating grid item").cyan().bold(),
            style(&self.item).green().bold(),
            style("in").cyan().bold(),
            style(&self.bundle).green().bold()
        );

        let registry = FilesystemRegistry::new(&self.project_root);
        let generator = GridItemGenerator::new(registry);

        let generated = generator
            .generate(&self.bundle, &self.item)
            .with_context(|| format!("Failed to generate grid item \"{}\"", self.item))?;

        println!(
            "\n{} {} files:",
            style("Generated").green().bold(),
            generated.files.len()
        );
        for path in &generated.files {
            println!("  {} {}", style("✓").green(), style(path.display()).dim());
        }

        println!();
        println!(
            "{}",
            style("Add this to your enhavo.yml config file under enhavo_grid -> items:").bold()
        );
        println!("{}", generated.config_entry);
        println!();

        Ok(())
    }
}
