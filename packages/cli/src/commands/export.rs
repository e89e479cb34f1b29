use super::open_project;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use openbuild_compiler_html::{export_file_name, export_html};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Project file to export
    pub project: PathBuf,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Leave out tracking snippets (overrides config)
    #[arg(long)]
    pub no_tracking: bool,
}

pub fn export(args: ExportArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let session = open_project(&cwd.join(&args.project))?;

    let mut options = config.export_options();
    if args.no_tracking {
        options.tracking_scripts = false;
    }

    let html = export_html(&session.document.to_elements(), session.page_settings(), &options);

    if args.stdout {
        print!("{}", html);
        return Ok(());
    }

    let title = &session.page_settings().page_title;
    let output_file = match &args.out_dir {
        Some(out) => cwd.join(out).join(export_file_name(title)),
        None => output_path(&config, cwd, title),
    };
    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, &html)?;
    info!(path = %output_file.display(), bytes = html.len(), "Wrote HTML export");

    println!(
        "  {} {} → {}",
        "✓".green(),
        args.project.display(),
        output_file.display()
    );
    Ok(())
}

/// Where the export of a page titled `title` goes by default
pub fn output_path(config: &Config, cwd: &Path, title: &str) -> PathBuf {
    config.get_out_dir(cwd).join(export_file_name(title))
}
