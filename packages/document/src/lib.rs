//! # OpenBuild Document Model
//!
//! The pieces every other OpenBuild crate shares:
//!
//! - [`element`]: the page tree as it is stored and exported
//! - [`attributes`] and [`styles`]: per-element attribute bags and
//!   responsive (desktop / tablet / mobile) style buckets
//! - [`style`]: CSS text conversion and breakpoint cascade resolution
//! - [`catalog`]: templates for new elements and composite items
//! - [`project`]: the project file envelope
//!
//! ```rust
//! use openbuild_document::style::{computed_styles, parse_css_string};
//! use openbuild_document::{Breakpoint, ResponsiveStyles};
//!
//! let mut styles = ResponsiveStyles::desktop(parse_css_string("color: black; font-size: 16px"));
//! styles.bucket_mut(Breakpoint::Mobile).merge(&parse_css_string("font-size: 12px"));
//!
//! let mobile = computed_styles(&styles, Breakpoint::Mobile);
//! assert_eq!(mobile.get("fontSize").map(|v| v.to_string()), Some("12px".to_string()));
//! assert_eq!(mobile.get("color").map(|v| v.to_string()), Some("black".to_string()));
//! ```

pub mod attributes;
pub mod catalog;
pub mod element;
pub mod error;
pub mod id_generator;
pub mod page;
pub mod project;
pub mod style;
pub mod styles;
pub mod visitor;

pub use attributes::{AttributeValue, Attributes};
pub use catalog::{Blueprint, CatalogEntry, ItemType};
pub use element::{Element, ElementId, ElementType};
pub use error::{ProjectError, UnknownVariant};
pub use id_generator::IdGenerator;
pub use page::{PageSetting, PageSettings};
pub use project::{ProjectData, PROJECT_VERSION};
pub use styles::{Breakpoint, ResponsiveStyles, StyleMap, StyleValue};
