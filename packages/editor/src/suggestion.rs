//! Style suggestion boundary.
//!
//! The service that turns a plain-language description into CSS lives
//! outside this crate. The editor only knows the request and response shapes
//! and stages whatever comes back until the user applies or discards it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestionRequest {
    pub element_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSuggestionResponse {
    /// CSS declarations, e.g. `"color: red; padding: 1rem;"`
    pub css_rules: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SuggestionError {
    #[error("Describe the element before asking for a suggestion")]
    EmptyDescription,

    #[error("Suggestion service failed: {0}")]
    Service(String),
}

/// Anything that can propose CSS for a described element
pub trait StyleSuggester {
    fn suggest(
        &self,
        request: &StyleSuggestionRequest,
    ) -> Result<StyleSuggestionResponse, SuggestionError>;
}

impl<F> StyleSuggester for F
where
    F: Fn(&StyleSuggestionRequest) -> Result<StyleSuggestionResponse, SuggestionError>,
{
    fn suggest(
        &self,
        request: &StyleSuggestionRequest,
    ) -> Result<StyleSuggestionResponse, SuggestionError> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let request = StyleSuggestionRequest {
            element_description: "a bold red call to action".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"elementDescription":"a bold red call to action"}"#
        );

        let response: StyleSuggestionResponse =
            serde_json::from_str(r#"{"cssRules":"color: red;"}"#).unwrap();
        assert_eq!(response.css_rules, "color: red;");
    }

    #[test]
    fn test_closures_are_suggesters() {
        let suggester = |request: &StyleSuggestionRequest| -> Result<
            StyleSuggestionResponse,
            SuggestionError,
        > {
            Ok(StyleSuggestionResponse {
                css_rules: format!("/* {} */ color: blue;", request.element_description),
            })
        };
        let response = suggester
            .suggest(&StyleSuggestionRequest {
                element_description: "link".to_string(),
            })
            .unwrap();
        assert!(response.css_rules.ends_with("color: blue;"));
    }
}
