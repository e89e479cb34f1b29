//! # Element Tree
//!
//! The persisted, tree-shaped form of a page. Each [`Element`] owns its
//! children outright, which is what gets written to and read from project
//! files and what the HTML exporter walks.

use crate::attributes::Attributes;
use crate::error::UnknownVariant;
use crate::styles::ResponsiveStyles;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Opaque element identifier, unique within a document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ElementId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Closed set of element types the builder knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Div,
    P,
    H1,
    H2,
    H3,
    Button,
    Img,
    Span,
    Ul,
    Ol,
    Li,
    A,
    Hr,
    Input,
    Textarea,
    Label,
    Icon,
}

impl ElementType {
    pub const ALL: [ElementType; 17] = [
        ElementType::Div,
        ElementType::P,
        ElementType::H1,
        ElementType::H2,
        ElementType::H3,
        ElementType::Button,
        ElementType::Img,
        ElementType::Span,
        ElementType::Ul,
        ElementType::Ol,
        ElementType::Li,
        ElementType::A,
        ElementType::Hr,
        ElementType::Input,
        ElementType::Textarea,
        ElementType::Label,
        ElementType::Icon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Div => "div",
            ElementType::P => "p",
            ElementType::H1 => "h1",
            ElementType::H2 => "h2",
            ElementType::H3 => "h3",
            ElementType::Button => "button",
            ElementType::Img => "img",
            ElementType::Span => "span",
            ElementType::Ul => "ul",
            ElementType::Ol => "ol",
            ElementType::Li => "li",
            ElementType::A => "a",
            ElementType::Hr => "hr",
            ElementType::Input => "input",
            ElementType::Textarea => "textarea",
            ElementType::Label => "label",
            ElementType::Icon => "icon",
        }
    }

    /// Tag name used when the element is written out as HTML.
    ///
    /// Icons have no HTML counterpart and are emitted as a `span` carrying
    /// their icon attributes.
    pub fn html_tag(&self) -> &'static str {
        match self {
            ElementType::Icon => "span",
            other => other.as_str(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ElementType::Ul | ElementType::Ol)
    }

    /// Whether an element of this type takes `child` as a direct child.
    ///
    /// `div`, `ul` and `ol` take anything. `li` takes anything but another
    /// `li`. Everything else is a leaf.
    pub fn accepts_child(&self, child: ElementType) -> bool {
        match self {
            ElementType::Div | ElementType::Ul | ElementType::Ol => true,
            ElementType::Li => child != ElementType::Li,
            _ => false,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("element type", s))
    }
}

/// One node of the page tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,

    #[serde(rename = "type")]
    pub element_type: ElementType,

    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default)]
    pub attributes: Attributes,

    #[serde(default)]
    pub styles: ResponsiveStyles,

    #[serde(default)]
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, element_type: ElementType) -> Self {
        Self {
            id: id.into(),
            element_type,
            name: element_type.as_str().to_string(),
            content: None,
            attributes: Attributes::default(),
            styles: ResponsiveStyles::default(),
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_styles(mut self, styles: ResponsiveStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for a descendant (or self) by id
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}
