mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, export, list_items, move_element, new_project, page, remove, set, style, tree, AddArgs,
    ExportArgs, MoveArgs, NewArgs, PageArgs, RemoveArgs, SetArgs, StyleArgs, TreeArgs,
};
use std::path::Path;

/// OpenBuild CLI - build landing pages from ready-made blocks
#[derive(Parser, Debug)]
#[command(name = "openbuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an empty project file (and a default config)
    New(NewArgs),

    /// Add an element or composite item
    Add(AddArgs),

    /// List the items that can be added
    ListItems,

    /// Print the element tree
    Tree(TreeArgs),

    /// Change an element's name, content or attributes
    Set(SetArgs),

    /// Merge CSS into one breakpoint, or show computed styles
    Style(StyleArgs),

    /// Remove an element and everything inside it
    Remove(RemoveArgs),

    /// Move an element before, after or into another one
    Move(MoveArgs),

    /// Show or change page settings
    Page(PageArgs),

    /// Export the page as a standalone HTML file
    Export(ExportArgs),
}

fn run(command: Command, cwd: &Path) -> anyhow::Result<()> {
    match command {
        Command::New(args) => new_project(args, cwd),
        Command::Add(args) => add(args, cwd),
        Command::ListItems => list_items(),
        Command::Tree(args) => tree(args, cwd),
        Command::Set(args) => set(args, cwd),
        Command::Style(args) => style(args, cwd),
        Command::Remove(args) => remove(args, cwd),
        Command::Move(args) => move_element(args, cwd),
        Command::Page(args) => page(args, cwd),
        Command::Export(args) => export(args, cwd),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| run(cli.command, &cwd));

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
