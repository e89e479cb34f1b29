use openbuild_compiler_html::ExportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "openbuild.config.json";

/// OpenBuild configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory exported pages are written to
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Emit tracking snippets for ids set in the page settings
    #[serde(default = "default_tracking_scripts")]
    pub tracking_scripts: bool,

    /// Indentation of the exported document skeleton
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_out_dir() -> String {
    "dist".to_string()
}

fn default_tracking_scripts() -> bool {
    true
}

fn default_indent() -> String {
    "    ".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Get absolute path to the output directory
    pub fn get_out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            tracking_scripts: self.tracking_scripts,
            indent: self.indent.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: default_out_dir(),
            tracking_scripts: default_tracking_scripts(),
            indent: default_indent(),
        }
    }
}
