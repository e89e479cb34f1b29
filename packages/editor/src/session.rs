//! # Edit Session Management
//!
//! Tracks editing state for one user working on one page.
//!
//! An EditSession owns the element tree together with everything the editor
//! UI keeps around it: page settings, the selected element, the viewport
//! mode being edited and a staged style suggestion.

use crate::document::{AddOutcome, Document, DropPosition, ElementUpdate, Node};
use crate::suggestion::{StyleSuggester, StyleSuggestionRequest, SuggestionError};
use crate::{EditorError, Mutation, MutationError, MutationResult};
use openbuild_document::{
    AttributeValue, Breakpoint, ElementId, ItemType, PageSetting, PageSettings, ProjectData,
    StyleMap,
};
use tracing::{debug, info};

/// Single-user edit session
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    /// Document being edited
    pub document: Document,

    page_settings: PageSettings,
    selected: Option<ElementId>,
    viewport: Breakpoint,

    /// CSS returned by the last suggestion request, waiting to be applied
    suggested_css: Option<String>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_project(project: ProjectData) -> Result<Self, EditorError> {
        let document = Document::from_elements(project.elements)?;
        Ok(Self {
            document,
            page_settings: project.page_settings,
            ..Default::default()
        })
    }

    /// Snapshot of the session as a project file
    pub fn to_project(&self) -> ProjectData {
        ProjectData::new(self.page_settings.clone(), self.document.to_elements())
    }

    /// Replace the whole session with a project read from JSON.
    ///
    /// On failure the current state is left as it was.
    pub fn load_project(&mut self, json: &str) -> Result<(), EditorError> {
        let project = ProjectData::from_json(json)?;
        let loaded = Self::from_project(project)?;

        info!(elements = loaded.document.len(), "Loaded project");
        *self = loaded;
        Ok(())
    }

    /// Apply a mutation and keep the selection pointing at a live node
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let result = mutation.apply(&mut self.document)?;
        debug!(node = ?mutation.node_id(), version = result.version, "Applied mutation");

        if let Some(added) = &result.added {
            if matches!(mutation, Mutation::AddElement { .. }) {
                self.selected = Some(added.clone());
            }
        }
        if let Some(selected) = &self.selected {
            if result.removed.contains(selected) {
                debug!(id = %selected, "Selected element removed, clearing selection");
                self.selected = None;
            }
        }

        Ok(result)
    }

    // --- Convenience wrappers ---

    /// Add an item and select it
    pub fn add_element(
        &mut self,
        item: ItemType,
        parent_id: Option<&str>,
    ) -> Result<AddOutcome, EditorError> {
        let outcome = self.document.add_element(item, parent_id)?;
        self.selected = Some(outcome.id.clone());
        Ok(outcome)
    }

    pub fn add_list_item(&mut self, list_id: &str) -> Result<ElementId, EditorError> {
        let result = self.apply(Mutation::AddListItem {
            list_id: list_id.to_string(),
        })?;
        result
            .added
            .ok_or_else(|| EditorError::Mutation(MutationError::NodeNotFound(list_id.to_string())))
    }

    pub fn update_element(&mut self, id: &str, update: ElementUpdate) -> Result<(), EditorError> {
        self.apply(Mutation::UpdateElement {
            node_id: id.to_string(),
            update,
        })?;
        Ok(())
    }

    /// Merge styles into an explicit breakpoint bucket
    pub fn update_element_style(
        &mut self,
        id: &str,
        breakpoint: Breakpoint,
        styles: StyleMap,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::UpdateStyle {
            node_id: id.to_string(),
            breakpoint,
            styles,
        })?;
        Ok(())
    }

    /// Merge styles into the selected element, for the viewport being edited
    pub fn update_selected_style(&mut self, styles: StyleMap) -> Result<(), EditorError> {
        let id = self.selected.clone().ok_or(EditorError::NothingSelected)?;
        self.update_element_style(id.as_str(), self.viewport, styles)
    }

    pub fn update_element_content(&mut self, id: &str, text: &str) -> Result<(), EditorError> {
        self.apply(Mutation::UpdateContent {
            node_id: id.to_string(),
            content: text.to_string(),
        })?;
        Ok(())
    }

    pub fn update_element_attribute(
        &mut self,
        id: &str,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::SetAttribute {
            node_id: id.to_string(),
            name: name.to_string(),
            value: value.into(),
        })?;
        Ok(())
    }

    pub fn update_element_name(&mut self, id: &str, name: &str) -> Result<(), EditorError> {
        self.apply(Mutation::Rename {
            node_id: id.to_string(),
            name: name.to_string(),
        })?;
        Ok(())
    }

    /// Remove an element and its subtree; returns the removed ids
    pub fn delete_element(&mut self, id: &str) -> Result<Vec<ElementId>, EditorError> {
        let result = self.apply(Mutation::RemoveElement { node_id: id.to_string() })?;
        Ok(result.removed)
    }

    pub fn move_element(
        &mut self,
        id: &str,
        target_id: Option<&str>,
        position: DropPosition,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::MoveElement {
            node_id: id.to_string(),
            target_id: target_id.map(str::to_string),
            position,
        })?;
        Ok(())
    }

    // --- Selection ---

    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        let node = self
            .document
            .get(id)
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))?;
        self.selected = Some(node.id.clone());
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Selected node, read from the tree so later edits are visible
    pub fn selected(&self) -> Option<&Node> {
        self.selected.as_ref().and_then(|id| self.document.get(id.as_str()))
    }

    pub fn selected_id(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    // --- Viewport ---

    pub fn set_viewport_mode(&mut self, mode: Breakpoint) {
        self.viewport = mode;
    }

    pub fn viewport_mode(&self) -> Breakpoint {
        self.viewport
    }

    /// Styles of an element as shown in the current viewport
    pub fn computed_styles(&self, id: &str) -> Result<StyleMap, EditorError> {
        Ok(self.document.computed_styles(id, self.viewport)?)
    }

    // --- Page settings ---

    pub fn page_settings(&self) -> &PageSettings {
        &self.page_settings
    }

    pub fn update_page_setting(&mut self, setting: PageSetting, value: impl Into<String>) {
        self.page_settings.set(setting, value);
    }

    // --- Style suggestions ---

    /// Ask `suggester` for CSS and stage it. The tree is not changed.
    pub fn request_suggestion<S: StyleSuggester + ?Sized>(
        &mut self,
        suggester: &S,
        description: &str,
    ) -> Result<&str, EditorError> {
        self.suggested_css = None;

        let description = description.trim();
        if description.is_empty() {
            return Err(SuggestionError::EmptyDescription.into());
        }

        let response = suggester.suggest(&StyleSuggestionRequest {
            element_description: description.to_string(),
        })?;
        debug!(bytes = response.css_rules.len(), "Staged style suggestion");

        Ok(self.suggested_css.insert(response.css_rules).as_str())
    }

    pub fn suggested_css(&self) -> Option<&str> {
        self.suggested_css.as_deref()
    }

    /// Merge the staged CSS into the selected element for the current
    /// viewport, then clear it
    pub fn apply_suggestion(&mut self) -> Result<StyleMap, EditorError> {
        let id = self.selected.clone().ok_or(EditorError::NothingSelected)?;
        let css = self.suggested_css.clone().ok_or(EditorError::NoSuggestion)?;

        let parsed = self.document.apply_css(id.as_str(), self.viewport, &css)?;
        self.suggested_css = None;
        Ok(parsed)
    }

    pub fn discard_suggestion(&mut self) {
        self.suggested_css = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openbuild_document::{ElementType, StyleValue};

    #[test]
    fn test_session_creation() {
        let session = EditSession::new();

        assert!(session.document.is_empty());
        assert!(session.selected().is_none());
        assert_eq!(session.viewport_mode(), Breakpoint::Desktop);
        assert_eq!(session.page_settings(), &PageSettings::default());
    }

    #[test]
    fn test_add_selects_new_element() {
        let mut session = EditSession::new();
        let outcome = session.add_element(ElementType::Button.into(), None).unwrap();

        assert_eq!(session.selected_id(), Some(&outcome.id));

        session.deselect();
        let result = session
            .apply(Mutation::AddElement {
                item: ItemType::Card,
                parent_id: None,
            })
            .unwrap();
        assert_eq!(session.selected_id(), result.added.as_ref());
    }

    #[test]
    fn test_selected_reflects_updates() {
        let mut session = EditSession::new();
        let id = session.add_element(ElementType::P.into(), None).unwrap().id;

        session.update_element_content(id.as_str(), "Updated").unwrap();

        assert_eq!(session.selected().unwrap().content.as_deref(), Some("Updated"));
    }

    #[test]
    fn test_select_missing_is_an_error() {
        let mut session = EditSession::new();
        assert!(matches!(
            session.select("nope"),
            Err(EditorError::Mutation(MutationError::NodeNotFound(_)))
        ));
    }

    #[test]
    fn test_delete_ancestor_clears_selection() {
        let mut session = EditSession::new();
        let card = session.add_element(ItemType::Card, None).unwrap().id;
        let title = session.document.child_ids(card.as_str()).unwrap()[1].clone();
        let other = session.add_element(ElementType::Hr.into(), None).unwrap().id;

        session.select(title.as_str()).unwrap();
        session.delete_element(other.as_str()).unwrap();
        assert_eq!(session.selected_id(), Some(&title));

        session.delete_element(card.as_str()).unwrap();
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_update_selected_style_uses_viewport() {
        let mut session = EditSession::new();
        let id = session.add_element(ElementType::H2.into(), None).unwrap().id;

        session.set_viewport_mode(Breakpoint::Mobile);
        session
            .update_selected_style(StyleMap::from_pairs(&[("fontSize", "1.2rem")]))
            .unwrap();

        let node = session.document.get(id.as_str()).unwrap();
        assert_eq!(node.styles.desktop.get("fontSize"), Some(&StyleValue::from("2rem")));
        assert_eq!(
            session.computed_styles(id.as_str()).unwrap().get("fontSize"),
            Some(&StyleValue::from("1.2rem"))
        );

        session.deselect();
        assert!(matches!(
            session.update_selected_style(StyleMap::new()),
            Err(EditorError::NothingSelected)
        ));
    }

    #[test]
    fn test_page_settings() {
        let mut session = EditSession::new();
        session.update_page_setting(PageSetting::PageTitle, "Launch Day");
        assert_eq!(session.page_settings().page_title, "Launch Day");
        assert_eq!(session.to_project().page_settings.page_title, "Launch Day");
    }
}
