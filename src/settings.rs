use std::path::Path;

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::Result;
use crate::parser::extract::tags::{TagAction, TagTable, DEFAULT_STATUS};

pub const ENV_PREFIX: &str = "BIB_NOTES";
pub const DEFAULT_CONFIG_FILE: &str = "bib_notes.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tags: TagSettings,
    pub render: RenderSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TagSettings {
    pub default_status: String,
    /// Replaces the built-in vocabulary when non-empty.
    pub rules: Vec<TagRule>,
}

/// `status` absent means the source keyword is dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct TagRule {
    pub source: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub link_prefix: String,
    pub missing_url: String,
    pub signature: String,
}

impl Default for TagSettings {
    fn default() -> Self {
        TagSettings {
            default_status: DEFAULT_STATUS.to_string(),
            rules: Vec::new(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            link_prefix: "@".to_string(),
            missing_url: "No link available.".to_string(),
            signature: "*Generated by bib_notes*".to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then the TOML file (required only when given explicitly),
    /// then `BIB_NOTES__*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => File::from(p).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE)
                .format(FileFormat::Toml)
                .required(false),
        };
        let settings = Config::builder()
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn tag_table(&self) -> TagTable {
        if self.tags.rules.is_empty() {
            return TagTable::default().with_default_status(self.tags.default_status.clone());
        }

        let mut table = TagTable::empty(self.tags.default_status.clone());
        for rule in &self.tags.rules {
            let action = match &rule.status {
                Some(status) => TagAction::Status(status.clone()),
                None => TagAction::Drop,
            };
            table.insert(rule.source.clone(), action);
        }
        table
    }
}
