//! Document-level settings

use crate::error::UnknownVariant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Page-wide configuration, one per project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSettings {
    pub page_title: String,
    pub body_background_color: String,
    pub body_background_image_url: String,
    pub facebook_pixel_id: String,
    pub tiktok_pixel_id: String,
    pub google_tag_manager_id: String,
}

/// Names a single [`PageSettings`] field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSetting {
    PageTitle,
    BodyBackgroundColor,
    BodyBackgroundImageUrl,
    FacebookPixelId,
    TiktokPixelId,
    GoogleTagManagerId,
}

impl PageSetting {
    pub const ALL: [PageSetting; 6] = [
        PageSetting::PageTitle,
        PageSetting::BodyBackgroundColor,
        PageSetting::BodyBackgroundImageUrl,
        PageSetting::FacebookPixelId,
        PageSetting::TiktokPixelId,
        PageSetting::GoogleTagManagerId,
    ];

    /// Field name as it appears in project files
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSetting::PageTitle => "pageTitle",
            PageSetting::BodyBackgroundColor => "bodyBackgroundColor",
            PageSetting::BodyBackgroundImageUrl => "bodyBackgroundImageUrl",
            PageSetting::FacebookPixelId => "facebookPixelId",
            PageSetting::TiktokPixelId => "tiktokPixelId",
            PageSetting::GoogleTagManagerId => "googleTagManagerId",
        }
    }
}

impl fmt::Display for PageSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageSetting {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageSetting::ALL
            .iter()
            .copied()
            .find(|setting| setting.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("page setting", s))
    }
}

impl PageSettings {
    pub fn get(&self, setting: PageSetting) -> &str {
        match setting {
            PageSetting::PageTitle => &self.page_title,
            PageSetting::BodyBackgroundColor => &self.body_background_color,
            PageSetting::BodyBackgroundImageUrl => &self.body_background_image_url,
            PageSetting::FacebookPixelId => &self.facebook_pixel_id,
            PageSetting::TiktokPixelId => &self.tiktok_pixel_id,
            PageSetting::GoogleTagManagerId => &self.google_tag_manager_id,
        }
    }

    pub fn set(&mut self, setting: PageSetting, value: impl Into<String>) {
        let value = value.into();
        match setting {
            PageSetting::PageTitle => self.page_title = value,
            PageSetting::BodyBackgroundColor => self.body_background_color = value,
            PageSetting::BodyBackgroundImageUrl => self.body_background_image_url = value,
            PageSetting::FacebookPixelId => self.facebook_pixel_id = value,
            PageSetting::TiktokPixelId => self.tiktok_pixel_id = value,
            PageSetting::GoogleTagManagerId => self.google_tag_manager_id = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_touch_one_field() {
        let mut settings = PageSettings::default();
        settings.set(PageSetting::PageTitle, "Landing");
        settings.set("googleTagManagerId".parse().unwrap(), "GTM-123");

        assert_eq!(settings.page_title, "Landing");
        assert_eq!(settings.get(PageSetting::GoogleTagManagerId), "GTM-123");
        assert!(settings.facebook_pixel_id.is_empty());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let settings: PageSettings = serde_json::from_str(r#"{ "pageTitle": "Hi" }"#).unwrap();
        assert_eq!(settings.page_title, "Hi");
        assert_eq!(settings.tiktok_pixel_id, "");
    }
}
