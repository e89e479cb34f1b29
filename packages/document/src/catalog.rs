//! # Element Catalog
//!
//! Static templates for every element type the builder can create, and the
//! recipes for composite items that expand into small pre-built subtrees.
//!
//! The catalog only describes *what* to create. Ids and display names are
//! assigned by the document store when a [`Blueprint`] is instantiated.

use crate::attributes::Attributes;
use crate::element::ElementType;
use crate::error::UnknownVariant;
use crate::styles::{ResponsiveStyles, StyleMap};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Template for a single element type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub element_type: ElementType,
    pub label: &'static str,
    pub default_content: Option<&'static str>,
    pub default_attributes: &'static [(&'static str, &'static str)],
    pub default_styles: &'static [(&'static str, &'static str)],
    /// Offered in the element panel (list items are only created through lists)
    pub draggable: bool,
}

impl CatalogEntry {
    pub fn attributes(&self) -> Attributes {
        Attributes::from_pairs(self.default_attributes)
    }

    pub fn styles(&self) -> ResponsiveStyles {
        ResponsiveStyles::desktop(StyleMap::from_pairs(self.default_styles))
    }

    pub fn blueprint(&self) -> Blueprint {
        Blueprint {
            element_type: self.element_type,
            label: self.label.to_string(),
            content: self.default_content.map(str::to_string),
            attributes: self.attributes(),
            styles: self.styles(),
            children: Vec::new(),
        }
    }
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        element_type: ElementType::H1,
        label: "Heading 1",
        default_content: Some("Main Heading"),
        default_attributes: &[],
        default_styles: &[("fontSize", "2.5rem"), ("fontWeight", "bold"), ("margin", "1rem 0")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::H2,
        label: "Heading 2",
        default_content: Some("Subheading"),
        default_attributes: &[],
        default_styles: &[("fontSize", "2rem"), ("fontWeight", "bold"), ("margin", "0.8rem 0")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::H3,
        label: "Heading 3",
        default_content: Some("Section Heading"),
        default_attributes: &[],
        default_styles: &[("fontSize", "1.5rem"), ("fontWeight", "bold"), ("margin", "0.6rem 0")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::P,
        label: "Paragraph",
        default_content: Some("This is a paragraph. You can edit this text."),
        default_attributes: &[],
        default_styles: &[("fontSize", "1rem"), ("margin", "0.5rem 0"), ("lineHeight", "1.6")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Button,
        label: "Button",
        default_content: Some("Click Me"),
        default_attributes: &[],
        default_styles: &[
            ("padding", "0.75rem 1.5rem"),
            ("fontSize", "1rem"),
            ("backgroundColor", "hsl(var(--primary))"),
            ("color", "hsl(var(--primary-foreground))"),
            ("border", "none"),
            ("borderRadius", "var(--radius)"),
            ("cursor", "pointer"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Div,
        label: "Container (Div)",
        default_content: None,
        default_attributes: &[],
        default_styles: &[
            ("padding", "1rem"),
            ("minHeight", "100px"),
            ("border", "1px dashed hsl(var(--border))"),
            ("width", "100%"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Img,
        label: "Image",
        default_content: None,
        default_attributes: &[
            ("src", "https://placehold.co/200x150.png"),
            ("alt", "Placeholder image"),
        ],
        default_styles: &[("width", "200px"), ("height", "150px"), ("objectFit", "cover")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Icon,
        label: "Icon",
        default_content: None,
        default_attributes: &[("iconName", "Smile"), ("size", "24"), ("strokeWidth", "2")],
        default_styles: &[("color", "currentColor"), ("display", "inline-block")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Span,
        label: "Text Span",
        default_content: Some("Inline text"),
        default_attributes: &[],
        default_styles: &[("fontSize", "1rem")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Ul,
        label: "Unordered List",
        default_content: None,
        default_attributes: &[],
        default_styles: &[("margin", "0.5rem 0"), ("paddingLeft", "40px")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Ol,
        label: "Ordered List",
        default_content: None,
        default_attributes: &[],
        default_styles: &[("margin", "0.5rem 0"), ("paddingLeft", "40px")],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Li,
        label: "List Item",
        default_content: Some("List item"),
        default_attributes: &[],
        default_styles: &[("marginBottom", "0.25rem")],
        draggable: false,
    },
    CatalogEntry {
        element_type: ElementType::A,
        label: "Link",
        default_content: Some("Link Text"),
        default_attributes: &[("href", "#")],
        default_styles: &[
            ("color", "hsl(var(--primary))"),
            ("textDecoration", "underline"),
            ("cursor", "pointer"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Hr,
        label: "Divider (HR)",
        default_content: None,
        default_attributes: &[],
        default_styles: &[
            ("borderTop", "1px solid hsl(var(--border))"),
            ("margin", "1rem 0"),
            ("height", "auto"),
            ("width", "100%"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Input,
        label: "Text Input",
        default_content: None,
        default_attributes: &[("type", "text"), ("placeholder", "Enter text...")],
        default_styles: &[
            ("padding", "0.5rem"),
            ("border", "1px solid hsl(var(--input))"),
            ("borderRadius", "var(--radius)"),
            ("width", "100%"),
            ("boxSizing", "border-box"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Textarea,
        label: "Textarea",
        default_content: Some(""),
        default_attributes: &[("placeholder", "Enter more text...")],
        default_styles: &[
            ("padding", "0.5rem"),
            ("border", "1px solid hsl(var(--input))"),
            ("borderRadius", "var(--radius)"),
            ("minHeight", "80px"),
            ("width", "100%"),
            ("boxSizing", "border-box"),
        ],
        draggable: true,
    },
    CatalogEntry {
        element_type: ElementType::Label,
        label: "Label",
        default_content: Some("Label Text"),
        default_attributes: &[("htmlFor", "")],
        default_styles: &[("display", "block"), ("marginBottom", "0.25rem"), ("fontWeight", "500")],
        draggable: true,
    },
];

/// Look up the template for an element type
pub fn find(element_type: ElementType) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.element_type == element_type)
}

/// Every single-element template, in panel order
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Something that can be dropped onto the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Element(ElementType),
    Card,
    SectionColumns,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Element(element_type) => element_type.as_str(),
            ItemType::Card => "card",
            ItemType::SectionColumns => "section-columns",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemType::Element(element_type) => {
                find(*element_type).map(|e| e.label).unwrap_or("Element")
            }
            ItemType::Card => "Card",
            ItemType::SectionColumns => "Section (2 Columns)",
        }
    }

    /// Type of the root element this item creates
    pub fn root_type(&self) -> ElementType {
        match self {
            ItemType::Element(element_type) => *element_type,
            ItemType::Card | ItemType::SectionColumns => ElementType::Div,
        }
    }
}

impl From<ElementType> for ItemType {
    fn from(element_type: ElementType) -> Self {
        ItemType::Element(element_type)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(ItemType::Card),
            "section-columns" => Ok(ItemType::SectionColumns),
            other => other
                .parse::<ElementType>()
                .map(ItemType::Element)
                .map_err(|_| UnknownVariant::new("item type", other)),
        }
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(de::Error::custom)
    }
}

/// Items offered in the element panel, composites last
pub fn draggable_items() -> Vec<ItemType> {
    CATALOG
        .iter()
        .filter(|entry| entry.draggable)
        .map(|entry| ItemType::Element(entry.element_type))
        .chain([ItemType::Card, ItemType::SectionColumns])
        .collect()
}

/// An element subtree waiting for ids
#[derive(Debug, Clone, PartialEq)]
pub struct Blueprint {
    pub element_type: ElementType,
    /// Base of the display name
    pub label: String,
    pub content: Option<String>,
    pub attributes: Attributes,
    pub styles: ResponsiveStyles,
    pub children: Vec<Blueprint>,
}

impl Blueprint {
    fn from_catalog(element_type: ElementType) -> Option<Self> {
        find(element_type).map(CatalogEntry::blueprint)
    }

    fn labeled(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    fn attributed(mut self, pairs: &[(&str, &str)]) -> Self {
        self.attributes = Attributes::from_pairs(pairs);
        self
    }

    fn styled(mut self, styles: &[(&str, &str)]) -> Self {
        self.styles = ResponsiveStyles::desktop(StyleMap::from_pairs(styles));
        self
    }

    fn child(mut self, child: Blueprint) -> Self {
        self.children.push(child);
        self
    }

    /// Number of elements this blueprint creates
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Blueprint::node_count).sum::<usize>()
    }
}

/// Blueprint for any item. `None` only when an element type has no template.
pub fn blueprint(item: ItemType) -> Option<Blueprint> {
    match item {
        ItemType::Card => card_recipe(),
        ItemType::SectionColumns => section_columns_recipe(),
        ItemType::Element(element_type) if element_type.is_list() => {
            let list = Blueprint::from_catalog(element_type)?;
            let item = Blueprint::from_catalog(ElementType::Li)?;
            Some(list.child(item))
        }
        ItemType::Element(element_type) => Blueprint::from_catalog(element_type),
    }
}

/// Card: container with image, heading, text and call to action
pub fn card_recipe() -> Option<Blueprint> {
    let image = Blueprint::from_catalog(ElementType::Img)?
        .labeled("Card Image")
        .attributed(&[("src", "https://placehold.co/300x180.png"), ("alt", "Card image")])
        .styled(&[
            ("width", "100%"),
            ("height", "180px"),
            ("objectFit", "cover"),
            ("borderRadius", "var(--radius)"),
        ]);

    let title = Blueprint::from_catalog(ElementType::H3)?
        .labeled("Card Title")
        .content("Card Title")
        .styled(&[("fontSize", "1.25rem"), ("fontWeight", "bold"), ("margin", "0")]);

    let text = Blueprint::from_catalog(ElementType::P)?
        .labeled("Card Text")
        .content("A short description of the card content goes here.")
        .styled(&[("fontSize", "0.95rem"), ("margin", "0"), ("lineHeight", "1.5")]);

    let action = Blueprint::from_catalog(ElementType::Button)?
        .labeled("Card Button")
        .content("Learn More");

    let card = Blueprint::from_catalog(ElementType::Div)?
        .labeled("Card")
        .styled(&[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("gap", "0.75rem"),
            ("padding", "1rem"),
            ("width", "300px"),
            ("border", "1px solid hsl(var(--border))"),
            ("borderRadius", "var(--radius)"),
            ("backgroundColor", "hsl(var(--card))"),
            ("boxShadow", "0 2px 8px rgba(0, 0, 0, 0.08)"),
        ])
        .child(image)
        .child(title)
        .child(text)
        .child(action);

    Some(card)
}

/// Row with two equal flex columns
pub fn section_columns_recipe() -> Option<Blueprint> {
    let column = |label: &str| {
        Blueprint::from_catalog(ElementType::Div).map(|div| {
            div.labeled(label).styled(&[
                ("flex", "1"),
                ("padding", "1rem"),
                ("minHeight", "100px"),
                ("border", "1px dashed hsl(var(--border))"),
            ])
        })
    };

    let row = Blueprint::from_catalog(ElementType::Div)?
        .labeled("Section")
        .styled(&[
            ("display", "flex"),
            ("flexDirection", "row"),
            ("gap", "1rem"),
            ("padding", "1rem"),
            ("width", "100%"),
            ("boxSizing", "border-box"),
        ])
        .child(column("Column 1")?)
        .child(column("Column 2")?);

    Some(row)
}
