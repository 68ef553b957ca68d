use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use sprout_core::conventions::{resolve_language, resolve_style};
use sprout_core::{barrel, generator, workspace};
use sprout_core::{ComponentName, CreateRequest, SproutConfig};

/// Create files for a component.
#[derive(Parser)]
pub struct CreateCommand {
    /// Name of the Component to create.
    pub name: Option<String>,

    /// Path where to create the Component (defaults to the current directory).
    #[arg(short, long)]
    pub path: Option<String>,

    /// Should generate typescript files.
    #[arg(
        long = "isTs",
        visible_alias = "ts",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub is_ts: Option<bool>,

    /// Should generate Scss style.
    #[arg(
        long = "isScss",
        visible_alias = "scss",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub is_scss: Option<bool>,

    /// Show the files that would be created without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CreateCommand {
    /// Execute the create command.
    pub fn execute(self) -> Result<()> {
        let cwd = std::env::current_dir().context("Failed to read current directory")?;
        let root = workspace::find_root(&cwd)?;
        let config = SproutConfig::load(&root)?;

        let language = resolve_language(self.is_ts, config.component.typescript, &root);
        let style = resolve_style(self.is_scss, config.component.scss, &root);

        let name = ComponentName::from_arg(self.name.as_deref())?;
        let target = self
            .path
            .map(PathBuf::from)
            .or_else(|| config.component.target_path(&root))
            .unwrap_or(cwd);

        let request = CreateRequest::new(name, target, language, style);

        if self.dry_run {
            return print_plan(&request);
        }

        let created = generator::generate(&request)?;
        let barrel_path = request.barrel_path();
        barrel::append_export(&barrel_path, &request.name)
            .with_context(|| format!("Failed to update {}", barrel_path.display()))?;

        println!(
            "{} Created component: {}",
            console::style("✅").green(),
            console::style(&request.name).cyan()
        );
        for file in &created.files {
            println!("   {}", console::style(file.display()).dim());
        }
        println!("   Exported from {}", console::style(barrel_path.display()).dim());

        Ok(())
    }
}

fn print_plan(request: &CreateRequest) -> Result<()> {
    request.ensure_available()?;

    let dir = request.component_dir();
    println!(
        "Would create component {} in {}",
        style(&request.name).cyan(),
        style(dir.display()).dim()
    );
    for file in request.plan() {
        println!("   {}", file.file_name);
    }
    println!(
        "Would append to {}: {}",
        request.barrel_path().display(),
        barrel::export_line(&request.name)
    );

    Ok(())
}
