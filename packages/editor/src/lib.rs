//! # OpenBuild Editor
//!
//! Core page editing engine for OpenBuild.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: element model, catalog, styles    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: tree store + mutations + session    │
//! │  - Arena tree with id index                 │
//! │  - Validated, serializable mutations        │
//! │  - Selection, viewport, page settings       │
//! │  - Staged style suggestions                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ compiler-html: element tree → HTML page     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use openbuild_document::{Breakpoint, ElementType, StyleMap};
//! use openbuild_editor::EditSession;
//!
//! let mut session = EditSession::new();
//! let button = session.add_element(ElementType::Button.into(), None).unwrap().id;
//!
//! session.set_viewport_mode(Breakpoint::Mobile);
//! session
//!     .update_selected_style(StyleMap::from_pairs(&[("padding", "0.5rem")]))
//!     .unwrap();
//!
//! let desktop = session.document.computed_styles(button.as_str(), Breakpoint::Desktop).unwrap();
//! assert_eq!(desktop.get("padding").map(|v| v.to_string()), Some("0.75rem 1.5rem".to_string()));
//! ```

mod document;
mod errors;
mod mutations;
mod session;
mod suggestion;

pub use document::{AddOutcome, Document, DropPosition, ElementUpdate, Node, NodeKey};
pub use errors::EditorError;
pub use mutations::{Mutation, MutationError, MutationResult};
pub use session::EditSession;
pub use suggestion::{
    StyleSuggester, StyleSuggestionRequest, StyleSuggestionResponse, SuggestionError,
};
