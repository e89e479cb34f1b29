//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Project error: {0}")]
    Project(#[from] openbuild_document::ProjectError),

    #[error("Suggestion error: {0}")]
    Suggestion(#[from] crate::suggestion::SuggestionError),

    #[error("No element is selected")]
    NothingSelected,

    #[error("No style suggestion is staged")]
    NoSuggestion,
}
