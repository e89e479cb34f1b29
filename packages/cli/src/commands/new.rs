use super::CommandError;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use openbuild_document::{PageSettings, ProjectData};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project file to create
    #[arg(default_value = "page.openbuild")]
    pub path: PathBuf,

    /// Page title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Force overwrite an existing project file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new_project(args: NewArgs, cwd: &Path) -> Result<()> {
    let project_path = cwd.join(&args.path);

    if project_path.exists() && !args.force {
        return Err(CommandError::AlreadyExists(project_path).into());
    }

    println!("{}", "📝 Creating OpenBuild page...".bright_blue().bold());

    let settings = PageSettings {
        page_title: args.title.unwrap_or_default(),
        ..Default::default()
    };
    ProjectData::new(settings, Vec::new()).save(&project_path)?;
    println!("  {} Created {}", "✓".green(), args.path.display());

    // Leave an existing config alone
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    if !config_path.exists() {
        let config_json = serde_json::to_string_pretty(&Config::default())?;
        fs::write(&config_path, config_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("Next steps:");
    println!("  1. Run: openbuild list-items");
    println!("  2. Run: openbuild add {} button", args.path.display());
    println!("  3. Run: openbuild export {}", args.path.display());

    Ok(())
}
