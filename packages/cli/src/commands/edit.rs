use super::{open_project, save_project, CommandError};
use anyhow::Result;
use clap::{ArgGroup, Args};
use colored::Colorize;
use openbuild_document::style::style_map_to_css_string;
use openbuild_document::{Attributes, Breakpoint, ItemType};
use openbuild_editor::{DropPosition, ElementUpdate};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Project file
    pub project: PathBuf,

    /// Item to add (see `openbuild list-items`)
    pub item: ItemType,

    /// Parent element id; falls back to the page root when it cannot hold the item
    #[arg(short, long)]
    pub parent: Option<String>,
}

pub fn add(args: AddArgs, cwd: &Path) -> Result<()> {
    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    let outcome = session.add_element(args.item, args.parent.as_deref())?;
    save_project(&path, &session)?;

    let location = match (&outcome.parent, &args.parent) {
        (Some(parent), _) => format!("inside {}", parent),
        (None, Some(requested)) => format!("at page root ({} cannot hold it)", requested)
            .yellow()
            .to_string(),
        (None, None) => "at page root".to_string(),
    };
    println!(
        "  {} Added {} {} {}",
        "✓".green(),
        args.item.label(),
        outcome.id.to_string().cyan(),
        location
    );
    info!(created = outcome.created, "Added item");

    Ok(())
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Project file
    pub project: PathBuf,

    /// Element id
    pub id: String,

    /// New display name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New text (the value of an input)
    #[arg(short, long)]
    pub content: Option<String>,

    /// Attribute to set, as KEY=VALUE (repeatable)
    #[arg(short, long = "attr", value_name = "KEY=VALUE")]
    pub attributes: Vec<String>,
}

pub fn set(args: SetArgs, cwd: &Path) -> Result<()> {
    if args.name.is_none() && args.content.is_none() && args.attributes.is_empty() {
        return Err(CommandError::NothingToSet.into());
    }

    let pairs = args
        .attributes
        .iter()
        .map(|pair| parse_attribute(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    if let Some(content) = &args.content {
        session.update_element_content(&args.id, content)?;
    }

    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        attributes.set(key, value.into());
    }
    let update = ElementUpdate {
        name: args.name,
        attributes: (!attributes.is_empty()).then_some(attributes),
        ..Default::default()
    };
    if update != ElementUpdate::default() {
        session.update_element(&args.id, update)?;
    }

    save_project(&path, &session)?;
    println!("  {} Updated {}", "✓".green(), args.id.cyan());

    Ok(())
}

fn parse_attribute(pair: &str) -> Result<(&str, &str), CommandError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(CommandError::InvalidAttribute(pair.to_string())),
    }
}

#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Project file
    pub project: PathBuf,

    /// Element id
    pub id: String,

    /// CSS declarations to merge, e.g. "color: red; font-size: 18px".
    /// Without it the computed styles are printed instead.
    pub css: Option<String>,

    /// Breakpoint to edit or show (desktop, tablet, mobile)
    #[arg(short, long, default_value = "desktop")]
    pub breakpoint: Breakpoint,
}

pub fn style(args: StyleArgs, cwd: &Path) -> Result<()> {
    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    let Some(css) = args.css else {
        let computed = session.document.computed_styles(&args.id, args.breakpoint)?;
        println!("{}", style_map_to_css_string(&computed));
        return Ok(());
    };

    let parsed = session.document.apply_css(&args.id, args.breakpoint, &css)?;
    save_project(&path, &session)?;

    if parsed.is_empty() {
        println!("{}", "⚠️  No declarations found".yellow());
    } else {
        println!(
            "  {} {} [{}]: {}",
            "✓".green(),
            args.id.cyan(),
            args.breakpoint,
            style_map_to_css_string(&parsed)
        );
    }

    Ok(())
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Project file
    pub project: PathBuf,

    /// Element id; its whole subtree is removed
    pub id: String,
}

pub fn remove(args: RemoveArgs, cwd: &Path) -> Result<()> {
    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    let removed = session.delete_element(&args.id)?;
    save_project(&path, &session)?;

    println!("  {} Removed {} element(s)", "✓".green(), removed.len());

    Ok(())
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").args(["before", "after", "inside"])))]
pub struct MoveArgs {
    /// Project file
    pub project: PathBuf,

    /// Element to move
    pub id: String,

    /// Place before this element
    #[arg(long)]
    pub before: Option<String>,

    /// Place after this element
    #[arg(long)]
    pub after: Option<String>,

    /// Append inside this element
    #[arg(long)]
    pub inside: Option<String>,
}

impl MoveArgs {
    /// No target means the end of the page root
    fn target(&self) -> (Option<&str>, DropPosition) {
        if let Some(id) = &self.before {
            (Some(id), DropPosition::Before)
        } else if let Some(id) = &self.after {
            (Some(id), DropPosition::After)
        } else if let Some(id) = &self.inside {
            (Some(id), DropPosition::Inside)
        } else {
            (None, DropPosition::Inside)
        }
    }
}

pub fn move_element(args: MoveArgs, cwd: &Path) -> Result<()> {
    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    let (target, position) = args.target();
    session.move_element(&args.id, target, position)?;
    save_project(&path, &session)?;

    match target {
        Some(target) => println!(
            "  {} Moved {} {} {}",
            "✓".green(),
            args.id.cyan(),
            position,
            target
        ),
        None => println!("  {} Moved {} to page root", "✓".green(), args.id.cyan()),
    }

    Ok(())
}
