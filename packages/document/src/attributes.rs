//! Element attributes: typed well-known keys plus a pass-through map

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Scalar attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl AttributeValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, AttributeValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(value) => write!(f, "{}", value),
            AttributeValue::Number(value) => write!(f, "{}", value),
            AttributeValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

/// Attribute bag of an element.
///
/// Keys with a meaning to the builder are typed fields. Anything else lands
/// in `extra` and is written back out untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_for: Option<String>,

    /// `type` of an `input`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<AttributeValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<AttributeValue>,

    #[serde(flatten, deserialize_with = "deserialize_extra")]
    pub extra: BTreeMap<String, AttributeValue>,
}

fn deserialize_extra<'de, D>(deserializer: D) -> Result<BTreeMap<String, AttributeValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Option<AttributeValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect())
}

/// Serialized names of the typed keys, in output order
pub const WELL_KNOWN_KEYS: [&str; 10] = [
    "src",
    "alt",
    "href",
    "htmlFor",
    "type",
    "placeholder",
    "value",
    "iconName",
    "size",
    "strokeWidth",
];

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs, routing well-known names to their fields
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut attributes = Self::default();
        for (name, value) in pairs {
            attributes.set(name, AttributeValue::from(*value));
        }
        attributes
    }

    pub fn get(&self, name: &str) -> Option<AttributeValue> {
        let text = |field: &Option<String>| field.clone().map(AttributeValue::Text);
        match name {
            "src" => text(&self.src),
            "alt" => text(&self.alt),
            "href" => text(&self.href),
            "htmlFor" => text(&self.html_for),
            "type" => text(&self.input_type),
            "placeholder" => text(&self.placeholder),
            "value" => text(&self.value),
            "iconName" => text(&self.icon_name),
            "size" => self.size.clone(),
            "strokeWidth" => self.stroke_width.clone(),
            other => self.extra.get(other).cloned(),
        }
    }

    /// Set one key. Well-known string keys store the value's text form.
    pub fn set(&mut self, name: &str, value: AttributeValue) {
        match name {
            "src" => self.src = Some(value.to_string()),
            "alt" => self.alt = Some(value.to_string()),
            "href" => self.href = Some(value.to_string()),
            "htmlFor" => self.html_for = Some(value.to_string()),
            "type" => self.input_type = Some(value.to_string()),
            "placeholder" => self.placeholder = Some(value.to_string()),
            "value" => self.value = Some(value.to_string()),
            "iconName" => self.icon_name = Some(value.to_string()),
            "size" => self.size = Some(value),
            "strokeWidth" => self.stroke_width = Some(value),
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        let previous = self.get(name);
        match name {
            "src" => self.src = None,
            "alt" => self.alt = None,
            "href" => self.href = None,
            "htmlFor" => self.html_for = None,
            "type" => self.input_type = None,
            "placeholder" => self.placeholder = None,
            "value" => self.value = None,
            "iconName" => self.icon_name = None,
            "size" => self.size = None,
            "strokeWidth" => self.stroke_width = None,
            other => {
                self.extra.remove(other);
            }
        }
        previous
    }

    /// Shallow merge: every key present in `other` overwrites ours
    pub fn merge(&mut self, other: Attributes) {
        for (name, value) in other.entries() {
            self.set(&name, value);
        }
    }

    /// All present keys in a stable order: well-known keys first, then the
    /// pass-through keys sorted by name.
    pub fn entries(&self) -> Vec<(String, AttributeValue)> {
        let mut entries: Vec<(String, AttributeValue)> = WELL_KNOWN_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
            .collect();
        entries.extend(
            self.extra
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
