use super::{open_project, save_project};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use openbuild_document::catalog::draggable_items;
use openbuild_document::{Element, PageSetting};
use std::path::{Path, PathBuf};

/// Print every item that can be added to a page
pub fn list_items() -> Result<()> {
    println!("{}", "Available items:".bright_blue().bold());
    for item in draggable_items() {
        println!("  {:<18} {}", item.as_str().cyan(), item.label());
    }
    Ok(())
}

#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Project file
    pub project: PathBuf,
}

pub fn tree(args: TreeArgs, cwd: &Path) -> Result<()> {
    let session = open_project(&cwd.join(&args.project))?;
    let elements = session.document.to_elements();

    if elements.is_empty() {
        println!("{}", "(empty page)".dimmed());
        return Ok(());
    }

    let mut lines = Vec::new();
    for element in &elements {
        tree_lines(element, 0, &mut lines);
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn tree_lines(element: &Element, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} <{}> {}",
        "  ".repeat(depth),
        element.name,
        element.element_type,
        element.id.to_string().dimmed()
    ));
    for child in &element.children {
        tree_lines(child, depth + 1, lines);
    }
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Project file
    pub project: PathBuf,

    /// Setting to change (pageTitle, bodyBackgroundColor, ...); omit to list all
    pub setting: Option<PageSetting>,

    /// New value; an empty string clears the setting
    #[arg(requires = "setting")]
    pub value: Option<String>,
}

pub fn page(args: PageArgs, cwd: &Path) -> Result<()> {
    let path = cwd.join(&args.project);
    let mut session = open_project(&path)?;

    match (args.setting, args.value) {
        (Some(setting), Some(value)) => {
            session.update_page_setting(setting, value);
            save_project(&path, &session)?;
            println!("  {} {} = {:?}", "✓".green(), setting, session.page_settings().get(setting));
        }
        (Some(setting), None) => {
            println!("{}", session.page_settings().get(setting));
        }
        (None, _) => {
            for setting in PageSetting::ALL {
                println!(
                    "  {:<24} {:?}",
                    setting.as_str().cyan(),
                    session.page_settings().get(setting)
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use openbuild_document::ElementType;

    #[test]
    fn test_tree_lines_indent_children() {
        let element = Element::new("a", ElementType::Div)
            .with_name("Wrapper")
            .with_child(Element::new("b", ElementType::P).with_name("Text"));

        let mut lines = Vec::new();
        tree_lines(&element, 0, &mut lines);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Wrapper <div>"));
        assert!(lines[1].starts_with("  Text <p>"));
    }
}
