//! # Document Mutations
//!
//! Every edit the builder can make, as a value. Mutations can be logged,
//! replayed or sent over a wire, and are applied to a [`Document`] with
//! [`Mutation::apply`].
//!
//! ## Semantics
//!
//! ### AddElement
//! - Creates the catalog template (or composite recipe) for `item`
//! - A missing or unsuitable parent puts the element at the root instead
//!
//! ### UpdateStyle / ApplyCss
//! - Merge into exactly one breakpoint bucket, property by property
//! - Other buckets are never touched
//!
//! ### RemoveElement
//! - Removes the node and all descendants
//!
//! ### MoveElement
//! - Fails if the target is the node itself or one of its descendants
//! - Fails if the new parent cannot hold the node

use crate::document::{Document, DropPosition, ElementUpdate, Node};
use openbuild_document::visitor::collect_ids;
use openbuild_document::{AttributeValue, Breakpoint, ElementId, ItemType, StyleMap};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Create an element (or composite) from the catalog
    AddElement {
        item: ItemType,
        parent_id: Option<String>,
    },

    /// Append a default item to a list
    AddListItem { list_id: String },

    /// Partial update: name/content overwrite, attributes/styles merge
    UpdateElement { node_id: String, update: ElementUpdate },

    /// Merge style properties into one breakpoint bucket
    UpdateStyle {
        node_id: String,
        breakpoint: Breakpoint,
        styles: StyleMap,
    },

    /// Parse CSS declarations and merge them into one breakpoint bucket
    ApplyCss {
        node_id: String,
        breakpoint: Breakpoint,
        css: String,
    },

    /// Replace the visible text (the `value` attribute for inputs)
    UpdateContent { node_id: String, content: String },

    SetAttribute {
        node_id: String,
        name: String,
        value: AttributeValue,
    },

    Rename { node_id: String, name: String },

    /// Remove a node and its subtree
    RemoveElement { node_id: String },

    /// Move a node relative to a target; no target means the end of the root
    MoveElement {
        node_id: String,
        target_id: Option<String>,
        position: DropPosition,
    },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Would create cycle")]
    CycleDetected,

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Duplicate element id: {0}")]
    DuplicateId(String),
}

/// Outcome of an applied mutation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// Root of the subtree the mutation created, if any
    pub added: Option<ElementId>,

    /// Every id the mutation removed
    pub removed: Vec<ElementId>,
}

impl Mutation {
    /// Apply mutation to the document with validation
    pub fn apply(&self, doc: &mut Document) -> Result<MutationResult, MutationError> {
        self.validate(doc)?;

        let mut result = MutationResult::default();

        match self {
            Mutation::AddElement { item, parent_id } => {
                let outcome = doc.add_element(*item, parent_id.as_deref())?;
                result.added = Some(outcome.id);
            }

            Mutation::AddListItem { list_id } => {
                result.added = Some(doc.add_list_item(list_id)?);
            }

            Mutation::UpdateElement { node_id, update } => {
                doc.update_element(node_id, update.clone())?;
            }

            Mutation::UpdateStyle { node_id, breakpoint, styles } => {
                doc.update_element_style(node_id, *breakpoint, styles)?;
            }

            Mutation::ApplyCss { node_id, breakpoint, css } => {
                doc.apply_css(node_id, *breakpoint, css)?;
            }

            Mutation::UpdateContent { node_id, content } => {
                doc.update_element_content(node_id, content)?;
            }

            Mutation::SetAttribute { node_id, name, value } => {
                doc.update_element_attribute(node_id, name, value.clone())?;
            }

            Mutation::Rename { node_id, name } => {
                doc.update_element_name(node_id, name)?;
            }

            Mutation::RemoveElement { node_id } => {
                let removed = doc.delete_element(node_id)?;
                result.removed = collect_ids(std::slice::from_ref(&removed));
            }

            Mutation::MoveElement { node_id, target_id, position } => {
                doc.move_element(node_id, target_id.as_deref(), *position)?;
            }
        }

        result.version = doc.version;
        Ok(result)
    }

    /// Check the mutation against the document without changing it
    pub fn validate(&self, doc: &Document) -> Result<(), MutationError> {
        match self {
            // A bad parent is not an error for adds
            Mutation::AddElement { .. } => Ok(()),

            Mutation::AddListItem { list_id } => {
                let list = Self::require(doc, list_id)?;
                if !list.element_type.is_list() {
                    return Err(MutationError::InvalidStructure(format!(
                        "list items can only be added to ul/ol, not {}",
                        list.element_type
                    )));
                }
                Ok(())
            }

            Mutation::UpdateElement { node_id, .. }
            | Mutation::UpdateStyle { node_id, .. }
            | Mutation::ApplyCss { node_id, .. }
            | Mutation::UpdateContent { node_id, .. }
            | Mutation::Rename { node_id, .. }
            | Mutation::RemoveElement { node_id } => Self::require(doc, node_id).map(|_| ()),

            Mutation::SetAttribute { node_id, name, .. } => {
                Self::require(doc, node_id)?;
                if name.is_empty() {
                    return Err(MutationError::InvalidStructure(
                        "attribute name is empty".to_string(),
                    ));
                }
                Ok(())
            }

            Mutation::MoveElement { node_id, target_id, position } => {
                doc.check_move(node_id, target_id.as_deref(), *position)
            }
        }
    }

    /// Id of the node the mutation edits, if it targets an existing one
    pub fn node_id(&self) -> Option<&str> {
        match self {
            Mutation::AddElement { .. } => None,
            Mutation::AddListItem { list_id } => Some(list_id),
            Mutation::UpdateElement { node_id, .. }
            | Mutation::UpdateStyle { node_id, .. }
            | Mutation::ApplyCss { node_id, .. }
            | Mutation::UpdateContent { node_id, .. }
            | Mutation::SetAttribute { node_id, .. }
            | Mutation::Rename { node_id, .. }
            | Mutation::RemoveElement { node_id }
            | Mutation::MoveElement { node_id, .. } => Some(node_id),
        }
    }

    fn require<'a>(doc: &'a Document, id: &str) -> Result<&'a Node, MutationError> {
        doc.get(id).ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
    }
}
