//! Style maps and per-breakpoint style buckets

use crate::error::UnknownVariant;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A single CSS value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(serde_json::Number),
    Text(String),
}

impl StyleValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, StyleValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(value) => write!(f, "{}", value),
            StyleValue::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Number(value.into())
    }
}

/// camelCase CSS property → value, kept sorted by property name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, StyleValue>);

impl<'de> Deserialize<'de> for StyleMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` means "unset"; drop it rather than reject the file
        let raw = BTreeMap::<String, Option<StyleValue>>::deserialize(deserializer)?;
        Ok(StyleMap(
            raw.into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        ))
    }
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), StyleValue::from(*value)))
            .collect()
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.0.get(property)
    }

    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<StyleValue>,
    ) -> Option<StyleValue> {
        self.0.insert(property.into(), value.into())
    }

    pub fn remove(&mut self, property: &str) -> Option<StyleValue> {
        self.0.remove(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    /// Last-write-wins merge of `other` on top of `self`
    pub fn merge(&mut self, other: &StyleMap) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, StyleValue)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (String, StyleValue)>>(iter: I) -> Self {
        StyleMap(iter.into_iter().collect())
    }
}

impl IntoIterator for StyleMap {
    type Item = (String, StyleValue);
    type IntoIter = btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Viewport mode selecting which style bucket applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Desktop => "desktop",
            Breakpoint::Tablet => "tablet",
            Breakpoint::Mobile => "mobile",
        }
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .iter()
            .copied()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("breakpoint", s))
    }
}

/// Desktop styles plus sparse tablet/mobile overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveStyles {
    #[serde(default)]
    pub desktop: StyleMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<StyleMap>,
}

impl ResponsiveStyles {
    pub fn desktop(desktop: StyleMap) -> Self {
        Self {
            desktop,
            tablet: None,
            mobile: None,
        }
    }

    pub fn bucket(&self, breakpoint: Breakpoint) -> Option<&StyleMap> {
        match breakpoint {
            Breakpoint::Desktop => Some(&self.desktop),
            Breakpoint::Tablet => self.tablet.as_ref(),
            Breakpoint::Mobile => self.mobile.as_ref(),
        }
    }

    /// Mutable bucket for `breakpoint`, created empty if it was absent
    pub fn bucket_mut(&mut self, breakpoint: Breakpoint) -> &mut StyleMap {
        match breakpoint {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => self.tablet.get_or_insert_with(StyleMap::default),
            Breakpoint::Mobile => self.mobile.get_or_insert_with(StyleMap::default),
        }
    }

    /// Merge each bucket of `patch` into the matching bucket, property by property
    pub fn merge(&mut self, patch: &ResponsiveStyles) {
        self.desktop.merge(&patch.desktop);
        if let Some(tablet) = &patch.tablet {
            self.bucket_mut(Breakpoint::Tablet).merge(tablet);
        }
        if let Some(mobile) = &patch.mobile {
            self.bucket_mut(Breakpoint::Mobile).merge(mobile);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_style_values_are_dropped() {
        let json = r#"{ "color": "red", "margin": null, "zIndex": 3 }"#;
        let map: StyleMap = serde_json::from_str(json).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("color"), Some(&StyleValue::from("red")));
        assert_eq!(map.get("zIndex").map(|v| v.to_string()), Some("3".to_string()));
    }

    #[test]
    fn test_bucket_mut_creates_overrides() {
        let mut styles = ResponsiveStyles::default();
        assert!(styles.tablet.is_none());

        styles.bucket_mut(Breakpoint::Tablet).insert("width", "50%");
        assert_eq!(
            styles.bucket(Breakpoint::Tablet).and_then(|b| b.get("width")),
            Some(&StyleValue::from("50%"))
        );
        assert!(styles.mobile.is_none());
    }

    #[test]
    fn test_merge_is_per_property() {
        let desktop = StyleMap::from_pairs(&[("color", "red"), ("padding", "1rem")]);
        let mut styles = ResponsiveStyles::desktop(desktop);
        let patch = ResponsiveStyles {
            desktop: StyleMap::from_pairs(&[("color", "blue")]),
            tablet: None,
            mobile: Some(StyleMap::from_pairs(&[("padding", "0")])),
        };
        styles.merge(&patch);

        assert_eq!(styles.desktop.get("color"), Some(&StyleValue::from("blue")));
        assert_eq!(styles.desktop.get("padding"), Some(&StyleValue::from("1rem")));
        assert_eq!(
            styles.mobile.as_ref().and_then(|m| m.get("padding")),
            Some(&StyleValue::from("0"))
        );
    }

    #[test]
    fn test_breakpoint_parse() {
        assert_eq!("tablet".parse::<Breakpoint>().unwrap(), Breakpoint::Tablet);
        assert!("watch".parse::<Breakpoint>().is_err());
    }
}
