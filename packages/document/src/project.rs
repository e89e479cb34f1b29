//! # Project Files
//!
//! A project file is the whole editable state of a page:
//!
//! ```json
//! {
//!   "openBuildVersion": "1.0.0",
//!   "pageSettings": { "pageTitle": "...", ... },
//!   "elements": [ ... ]
//! }
//! ```
//!
//! Loading checks the envelope only (version tag, settings, element array);
//! elements are taken as serde reads them. There is no migration between
//! versions.

use crate::element::Element;
use crate::error::ProjectError;
use crate::page::PageSettings;
use crate::visitor::find_duplicate_id;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Version tag written into new project files
pub const PROJECT_VERSION: &str = "1.0.0";

/// Extension used for saved projects
pub const PROJECT_EXTENSION: &str = "openbuild";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectData {
    pub open_build_version: String,
    pub page_settings: PageSettings,
    pub elements: Vec<Element>,
}

impl Default for ProjectData {
    fn default() -> Self {
        Self::new(PageSettings::default(), Vec::new())
    }
}

impl ProjectData {
    pub fn new(page_settings: PageSettings, elements: Vec<Element>) -> Self {
        Self {
            open_build_version: PROJECT_VERSION.to_string(),
            page_settings,
            elements,
        }
    }

    /// Parse and validate project JSON
    pub fn from_json(text: &str) -> Result<Self, ProjectError> {
        let value: Value = serde_json::from_str(text)?;
        validate_envelope(&value)?;

        let project: ProjectData = serde_json::from_value(value)?;
        if let Some(id) = find_duplicate_id(&project.elements) {
            return Err(ProjectError::DuplicateId(id.to_string()));
        }

        Ok(project)
    }

    pub fn to_json(&self) -> Result<String, ProjectError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, ProjectError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn save(&self, path: &Path) -> Result<(), ProjectError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

fn validate_envelope(value: &Value) -> Result<(), ProjectError> {
    let object = value
        .as_object()
        .ok_or_else(|| ProjectError::InvalidSchema("expected a JSON object".to_string()))?;

    if !object.get("openBuildVersion").is_some_and(Value::is_string) {
        return Err(ProjectError::InvalidSchema(
            "`openBuildVersion` must be a string".to_string(),
        ));
    }
    if object.get("pageSettings").map_or(true, Value::is_null) {
        return Err(ProjectError::InvalidSchema(
            "`pageSettings` is missing".to_string(),
        ));
    }
    if !object.get("elements").is_some_and(Value::is_array) {
        return Err(ProjectError::InvalidSchema(
            "`elements` must be an array".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementType;

    const VALID: &str = r#"{
        "openBuildVersion": "1.0.0",
        "pageSettings": { "pageTitle": "Launch", "facebookPixelId": "" },
        "elements": [
            {
                "id": "x-1",
                "type": "div",
                "name": "Wrapper",
                "attributes": {},
                "styles": { "desktop": { "padding": "1rem" }, "mobile": { "padding": "0" } },
                "children": [
                    {
                        "id": "x-2", "type": "p", "name": "Text", "content": "Hi",
                        "styles": { "desktop": {} }, "children": []
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_load_valid_project() {
        let project = ProjectData::from_json(VALID).unwrap();

        assert_eq!(project.open_build_version, "1.0.0");
        assert_eq!(project.page_settings.page_title, "Launch");
        assert_eq!(project.elements.len(), 1);
        assert_eq!(project.elements[0].children[0].element_type, ElementType::P);
        assert!(project.elements[0].styles.mobile.is_some());
    }

    #[test]
    fn test_rejects_non_string_version() {
        let json = r#"{ "openBuildVersion": 1, "pageSettings": {}, "elements": [] }"#;
        assert!(matches!(
            ProjectData::from_json(json),
            Err(ProjectError::InvalidSchema(msg)) if msg.contains("openBuildVersion")
        ));
    }

    #[test]
    fn test_rejects_missing_page_settings() {
        let json = r#"{ "openBuildVersion": "1.0.0", "elements": [] }"#;
        assert!(matches!(
            ProjectData::from_json(json),
            Err(ProjectError::InvalidSchema(msg)) if msg.contains("pageSettings")
        ));
    }

    #[test]
    fn test_rejects_non_array_elements() {
        let json = r#"{ "openBuildVersion": "1.0.0", "pageSettings": {}, "elements": {} }"#;
        assert!(matches!(
            ProjectData::from_json(json),
            Err(ProjectError::InvalidSchema(msg)) if msg.contains("elements")
        ));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(ProjectData::from_json("not json"), Err(ProjectError::Json(_))));
        assert!(matches!(ProjectData::from_json("[]"), Err(ProjectError::InvalidSchema(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{ "openBuildVersion": "1.0.0", "pageSettings": {}, "elements": [
            { "id": "same", "type": "p" }, { "id": "same", "type": "span" }
        ] }"#;
        assert!(matches!(
            ProjectData::from_json(json),
            Err(ProjectError::DuplicateId(id)) if id == "same"
        ));
    }

    #[test]
    fn test_unknown_version_is_accepted_as_is() {
        let json = r#"{ "openBuildVersion": "0.9.0-beta", "pageSettings": {}, "elements": [] }"#;
        let project = ProjectData::from_json(json).unwrap();
        assert_eq!(project.open_build_version, "0.9.0-beta");
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("page.{}", PROJECT_EXTENSION));

        let original = ProjectData::from_json(VALID).unwrap();
        original.save(&path).unwrap();
        let loaded = ProjectData::load(&path).unwrap();

        assert_eq!(loaded, original);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ProjectData::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(ProjectError::Io(_))));
    }
}
