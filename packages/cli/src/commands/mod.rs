pub mod edit;
pub mod export;
pub mod inspect;
pub mod new;

pub use edit::{
    add, move_element, remove, set, style, AddArgs, MoveArgs, RemoveArgs, SetArgs, StyleArgs,
};
pub use export::{export, ExportArgs};
pub use inspect::{list_items, page, tree, PageArgs, TreeArgs};
pub use new::{new_project, NewArgs};

use anyhow::{Context, Result};
use openbuild_editor::EditSession;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),

    #[error("Expected KEY=VALUE, got `{0}`")]
    InvalidAttribute(String),

    #[error("Nothing to change: pass --name, --content or --attr")]
    NothingToSet,
}

/// Read a project file into a fresh edit session
pub fn open_project(path: &Path) -> Result<EditSession> {
    let json = fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;

    let mut session = EditSession::new();
    session
        .load_project(&json)
        .with_context(|| format!("Cannot load project {}", path.display()))?;
    Ok(session)
}

pub fn save_project(path: &Path, session: &EditSession) -> Result<()> {
    session
        .to_project()
        .save(path)
        .with_context(|| format!("Cannot write {}", path.display()))?;
    Ok(())
}
