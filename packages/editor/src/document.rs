//! # Document Tree Store
//!
//! Owns the element tree of one page and implements every structural and
//! content edit on it.
//!
//! Nodes live in an arena (`SlotMap`) and point at each other by key; an
//! `id → key` index makes every id-addressed operation a hash lookup instead
//! of a tree walk. The nested [`Element`] form is produced on demand with
//! [`Document::to_elements`] for saving and exporting.
//!
//! ## Failure policy
//!
//! - Operations naming an id that does not exist fail with
//!   [`MutationError::NodeNotFound`].
//! - Adding into a parent that is missing or cannot hold the new element is
//!   not an error: the element goes to the root and [`AddOutcome::parent`]
//!   says where it actually landed.
//! - Moves that would put a node inside itself fail with
//!   [`MutationError::CycleDetected`].

use crate::mutations::MutationError;
use openbuild_document::catalog::{self, Blueprint};
use openbuild_document::style;
use openbuild_document::visitor::find_duplicate_id;
use openbuild_document::{
    AttributeValue, Attributes, Breakpoint, Element, ElementId, ElementType, IdGenerator, ItemType,
    ResponsiveStyles, StyleMap,
};
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

new_key_type! {
    /// Arena key of a node
    pub struct NodeKey;
}

/// One element in the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: ElementId,
    pub element_type: ElementType,
    pub name: String,
    pub content: Option<String>,
    pub attributes: Attributes,
    pub styles: ResponsiveStyles,
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
}

impl Node {
    pub fn parent_key(&self) -> Option<NodeKey> {
        self.parent
    }

    pub fn child_keys(&self) -> &[NodeKey] {
        &self.children
    }
}

/// Where a moved node goes relative to its drop target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Before,
    After,
    Inside,
}

impl fmt::Display for DropPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DropPosition::Before => "before",
            DropPosition::After => "after",
            DropPosition::Inside => "inside",
        })
    }
}

impl FromStr for DropPosition {
    type Err = openbuild_document::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(DropPosition::Before),
            "after" => Ok(DropPosition::After),
            "inside" => Ok(DropPosition::Inside),
            other => Err(openbuild_document::UnknownVariant::new("drop position", other)),
        }
    }
}

/// Partial update for [`Document::update_element`].
///
/// `name` and `content` overwrite. `attributes` and `styles` are merged key
/// by key into what the element already has.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Attributes>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<ResponsiveStyles>,
}

impl ElementUpdate {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }
}

/// Result of [`Document::add_element`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    /// Id of the root of the created subtree
    pub id: ElementId,
    /// Parent the subtree was attached to; `None` means the tree root
    pub parent: Option<ElementId>,
    /// Number of elements created
    pub created: usize,
}

/// Editable element tree of one page
#[derive(Debug, Clone)]
pub struct Document {
    /// Increments on each successful mutation
    pub version: u64,

    nodes: SlotMap<NodeKey, Node>,
    index: HashMap<ElementId, NodeKey>,
    roots: Vec<NodeKey>,
    ids: IdGenerator,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::with_id_generator(IdGenerator::default())
    }

    /// Empty document whose ids are seeded from `namespace`
    pub fn with_namespace(namespace: &str) -> Self {
        Self::with_id_generator(IdGenerator::new(namespace))
    }

    fn with_id_generator(ids: IdGenerator) -> Self {
        Self {
            version: 0,
            nodes: SlotMap::with_key(),
            index: HashMap::new(),
            roots: Vec::new(),
            ids,
        }
    }

    /// Build the arena from a nested element tree (e.g. a loaded project)
    pub fn from_elements(elements: Vec<Element>) -> Result<Self, MutationError> {
        if let Some(id) = find_duplicate_id(&elements) {
            return Err(MutationError::DuplicateId(id.to_string()));
        }

        let mut doc = Self::new();
        for element in elements {
            let key = doc.insert_element(element, None);
            doc.roots.push(key);
        }
        debug!(nodes = doc.len(), "Built document from element tree");
        Ok(doc)
    }

    fn insert_element(&mut self, element: Element, parent: Option<NodeKey>) -> NodeKey {
        self.ids.observe(&element.id);
        let key = self.nodes.insert(Node {
            id: element.id.clone(),
            element_type: element.element_type,
            name: element.name,
            content: element.content,
            attributes: element.attributes,
            styles: element.styles,
            parent,
            children: Vec::new(),
        });
        self.index.insert(element.id, key);

        for child in element.children {
            let child_key = self.insert_element(child, Some(key));
            self.nodes[key].children.push(child_key);
        }
        key
    }

    /// Nested snapshot of the whole tree, in document order
    pub fn to_elements(&self) -> Vec<Element> {
        self.roots.iter().map(|key| self.snapshot(*key)).collect()
    }

    /// Nested snapshot of one subtree
    pub fn element(&self, id: &str) -> Option<Element> {
        self.index.get(id).map(|key| self.snapshot(*key))
    }

    fn snapshot(&self, key: NodeKey) -> Element {
        let node = &self.nodes[key];
        Element {
            id: node.id.clone(),
            element_type: node.element_type,
            name: node.name.clone(),
            content: node.content.clone(),
            attributes: node.attributes.clone(),
            styles: node.styles.clone(),
            children: node.children.iter().map(|child| self.snapshot(*child)).collect(),
        }
    }

    // --- Queries ---

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|key| &self.nodes[*key])
    }

    pub fn node(&self, key: NodeKey) -> Option<&Node> {
        self.nodes.get(key)
    }

    /// Ids of the top-level elements
    pub fn root_ids(&self) -> Vec<ElementId> {
        self.roots.iter().map(|key| self.nodes[*key].id.clone()).collect()
    }

    pub fn child_ids(&self, id: &str) -> Result<Vec<ElementId>, MutationError> {
        let key = self.key_of(id)?;
        Ok(self.nodes[key]
            .children
            .iter()
            .map(|child| self.nodes[*child].id.clone())
            .collect())
    }

    pub fn parent_id(&self, id: &str) -> Option<&ElementId> {
        let node = self.get(id)?;
        node.parent.map(|parent| &self.nodes[parent].id)
    }

    /// Effective styles of an element at `breakpoint`
    pub fn computed_styles(
        &self,
        id: &str,
        breakpoint: Breakpoint,
    ) -> Result<StyleMap, MutationError> {
        let node = self.node_ref(id)?;
        Ok(style::computed_styles(&node.styles, breakpoint))
    }

    /// Whether making `new_parent_id` the parent of `node_id` would put the
    /// node inside itself
    pub fn would_create_cycle(&self, node_id: &str, new_parent_id: &str) -> bool {
        match (self.index.get(node_id), self.index.get(new_parent_id)) {
            (Some(node), Some(parent)) => self.is_ancestor_or_self(*node, *parent),
            _ => false,
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeKey, mut key: NodeKey) -> bool {
        loop {
            if key == ancestor {
                return true;
            }
            match self.nodes[key].parent {
                Some(parent) => key = parent,
                None => return false,
            }
        }
    }

    fn key_of(&self, id: &str) -> Result<NodeKey, MutationError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| MutationError::NodeNotFound(id.to_string()))
    }

    fn node_ref(&self, id: &str) -> Result<&Node, MutationError> {
        let key = self.key_of(id)?;
        Ok(&self.nodes[key])
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node, MutationError> {
        let key = self.key_of(id)?;
        Ok(&mut self.nodes[key])
    }

    fn touch(&mut self) -> u64 {
        self.version += 1;
        self.version
    }

    // --- Linking ---

    fn siblings_mut(&mut self, parent: Option<NodeKey>) -> &mut Vec<NodeKey> {
        match parent {
            Some(parent) => &mut self.nodes[parent].children,
            None => &mut self.roots,
        }
    }

    fn siblings(&self, parent: Option<NodeKey>) -> &[NodeKey] {
        match parent {
            Some(parent) => &self.nodes[parent].children,
            None => &self.roots,
        }
    }

    /// Unlink `key` from its parent (or the root list)
    fn detach(&mut self, key: NodeKey) {
        let parent = self.nodes[key].parent.take();
        self.siblings_mut(parent).retain(|sibling| *sibling != key);
    }

    /// Link `key` under `parent` at `index` (clamped), or at the end
    fn attach(&mut self, key: NodeKey, parent: Option<NodeKey>, index: Option<usize>) {
        self.nodes[key].parent = parent;
        let siblings = self.siblings_mut(parent);
        let index = index.unwrap_or(siblings.len()).min(siblings.len());
        siblings.insert(index, key);
    }

    // --- Creation ---

    fn fresh_id(&mut self) -> ElementId {
        loop {
            let id = self.ids.new_id();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }

    fn instantiate(&mut self, blueprint: Blueprint, parent: Option<NodeKey>) -> NodeKey {
        let id = self.fresh_id();
        let name = format!("{} {}", blueprint.label, self.ids.count());
        let key = self.nodes.insert(Node {
            id: id.clone(),
            element_type: blueprint.element_type,
            name,
            content: blueprint.content,
            attributes: blueprint.attributes,
            styles: blueprint.styles,
            parent,
            children: Vec::new(),
        });
        self.index.insert(id, key);

        for child in blueprint.children {
            let child_key = self.instantiate(child, Some(key));
            self.nodes[key].children.push(child_key);
        }
        key
    }

    /// Create `item` from the catalog and append it under `parent_id`.
    ///
    /// When the parent is missing or does not accept the new element, the
    /// element is appended at the root instead.
    pub fn add_element(
        &mut self,
        item: ItemType,
        parent_id: Option<&str>,
    ) -> Result<AddOutcome, MutationError> {
        let blueprint = catalog::blueprint(item)
            .ok_or_else(|| MutationError::UnknownItemType(item.to_string()))?;
        let created = blueprint.node_count();
        let element_type = blueprint.element_type;

        let parent = match parent_id {
            None => None,
            Some(parent_id) => match self.index.get(parent_id).copied() {
                Some(key) if self.nodes[key].element_type.accepts_child(element_type) => Some(key),
                Some(key) => {
                    warn!(
                        parent_id,
                        parent_type = %self.nodes[key].element_type,
                        child_type = %element_type,
                        "Parent cannot hold element, adding to root"
                    );
                    None
                }
                None => {
                    warn!(parent_id, "Parent not found, adding to root");
                    None
                }
            },
        };

        let key = self.instantiate(blueprint, parent);
        self.attach(key, parent, None);
        self.touch();

        let id = self.nodes[key].id.clone();
        let parent = parent.map(|p| self.nodes[p].id.clone());
        debug!(id = %id, item = %item, parent = ?parent, created, "Added element");

        Ok(AddOutcome { id, parent, created })
    }

    /// Append a default list item to a `ul` / `ol`
    pub fn add_list_item(&mut self, list_id: &str) -> Result<ElementId, MutationError> {
        let key = self.key_of(list_id)?;
        let list_type = self.nodes[key].element_type;
        if !list_type.is_list() {
            return Err(MutationError::InvalidStructure(format!(
                "list items can only be added to ul/ol, not {}",
                list_type
            )));
        }

        let blueprint = catalog::blueprint(ItemType::Element(ElementType::Li))
            .ok_or_else(|| MutationError::UnknownItemType(ElementType::Li.to_string()))?;
        let item = self.instantiate(blueprint, Some(key));
        self.attach(item, Some(key), None);
        self.touch();

        Ok(self.nodes[item].id.clone())
    }

    // --- Updates ---

    pub fn update_element(&mut self, id: &str, update: ElementUpdate) -> Result<(), MutationError> {
        let node = self.node_mut(id)?;

        if let Some(name) = update.name {
            node.name = name;
        }
        if let Some(content) = update.content {
            node.content = Some(content);
        }
        if let Some(attributes) = update.attributes {
            node.attributes.merge(attributes);
        }
        if let Some(styles) = update.styles {
            node.styles.merge(&styles);
        }

        self.touch();
        debug!(id, "Updated element");
        Ok(())
    }

    /// Merge `styles` into the bucket of `breakpoint`
    pub fn update_element_style(
        &mut self,
        id: &str,
        breakpoint: Breakpoint,
        styles: &StyleMap,
    ) -> Result<(), MutationError> {
        let node = self.node_mut(id)?;
        node.styles.bucket_mut(breakpoint).merge(styles);
        self.touch();
        debug!(id, %breakpoint, properties = styles.len(), "Updated element style");
        Ok(())
    }

    /// Parse CSS declarations and merge them into the bucket of `breakpoint`.
    /// Returns what was parsed.
    pub fn apply_css(
        &mut self,
        id: &str,
        breakpoint: Breakpoint,
        css: &str,
    ) -> Result<StyleMap, MutationError> {
        let styles = style::parse_css_string(css);
        self.update_element_style(id, breakpoint, &styles)?;
        Ok(styles)
    }

    /// Set the text of an element. Inputs keep their text in the `value`
    /// attribute, everything else in `content`.
    pub fn update_element_content(&mut self, id: &str, text: &str) -> Result<(), MutationError> {
        let node = self.node_mut(id)?;
        if node.element_type == ElementType::Input {
            node.attributes.value = Some(text.to_string());
        } else {
            node.content = Some(text.to_string());
        }
        self.touch();
        Ok(())
    }

    pub fn update_element_attribute(
        &mut self,
        id: &str,
        name: &str,
        value: AttributeValue,
    ) -> Result<(), MutationError> {
        if name.is_empty() {
            return Err(MutationError::InvalidStructure("attribute name is empty".to_string()));
        }
        self.node_mut(id)?.attributes.set(name, value);
        self.touch();
        Ok(())
    }

    pub fn update_element_name(&mut self, id: &str, name: &str) -> Result<(), MutationError> {
        self.node_mut(id)?.name = name.to_string();
        self.touch();
        Ok(())
    }

    // --- Removal and reordering ---

    /// Remove an element and its whole subtree; returns the removed subtree
    pub fn delete_element(&mut self, id: &str) -> Result<Element, MutationError> {
        let key = self.key_of(id)?;
        let removed = self.snapshot(key);

        self.detach(key);
        self.drop_subtree(key);
        self.touch();

        debug!(id, remaining = self.len(), "Deleted element");
        Ok(removed)
    }

    fn drop_subtree(&mut self, key: NodeKey) {
        if let Some(node) = self.nodes.remove(key) {
            self.index.remove(&node.id);
            for child in node.children {
                self.drop_subtree(child);
            }
        }
    }

    /// Check that `move_element` would accept this move, without moving
    /// anything.
    pub fn check_move(
        &self,
        id: &str,
        target_id: Option<&str>,
        position: DropPosition,
    ) -> Result<(), MutationError> {
        let key = self.key_of(id)?;
        let Some(target_id) = target_id else {
            return Ok(());
        };
        let target = self.key_of(target_id)?;
        if key == target && position != DropPosition::Inside {
            return Ok(());
        }
        if self.is_ancestor_or_self(key, target) {
            return Err(MutationError::CycleDetected);
        }

        if let Some(parent) = self.drop_parent(target, position) {
            let parent_type = self.nodes[parent].element_type;
            let moved_type = self.nodes[key].element_type;
            if !parent_type.accepts_child(moved_type) {
                return Err(MutationError::InvalidStructure(format!(
                    "{} cannot contain {}",
                    parent_type, moved_type
                )));
            }
        }
        Ok(())
    }

    /// Parent a node dropped at `position` relative to `target` ends up under
    fn drop_parent(&self, target: NodeKey, position: DropPosition) -> Option<NodeKey> {
        match position {
            DropPosition::Inside => Some(target),
            DropPosition::Before | DropPosition::After => self.nodes[target].parent,
        }
    }

    /// Move an element next to or into `target_id`; `None` appends it at the
    /// root.
    pub fn move_element(
        &mut self,
        id: &str,
        target_id: Option<&str>,
        position: DropPosition,
    ) -> Result<(), MutationError> {
        self.check_move(id, target_id, position)?;
        let key = self.key_of(id)?;

        let Some(target_id) = target_id else {
            self.detach(key);
            self.attach(key, None, None);
            self.touch();
            debug!(id, "Moved element to root");
            return Ok(());
        };

        let target = self.key_of(target_id)?;
        if key == target {
            return Ok(());
        }

        let new_parent = self.drop_parent(target, position);
        self.detach(key);
        let index = match position {
            DropPosition::Inside => None,
            DropPosition::Before | DropPosition::After => {
                let at = self
                    .siblings(new_parent)
                    .iter()
                    .position(|sibling| *sibling == target)
                    .unwrap_or(0);
                Some(if position == DropPosition::After { at + 1 } else { at })
            }
        };
        self.attach(key, new_parent, index);
        self.touch();

        debug!(id, target_id, %position, "Moved element");
        Ok(())
    }
}
