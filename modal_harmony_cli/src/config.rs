// Render configuration.
//
// Every field has a default, so an empty JSON object (or no file at all)
// is a valid configuration. Command-line flags are applied on top of the
// loaded value by the binary.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    /// `+---+` rules around the header and body.
    #[default]
    Ascii,
    /// Aligned columns only.
    None,
}

/// Which table to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Borrowed,
    Secondary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub border: Border,
    /// Spaces on each side of a cell.
    pub padding: usize,
    /// Tables rendered by `numerals all`, in order.
    pub tables: Vec<TableKind>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            format: OutputFormat::Text,
            border: Border::Ascii,
            padding: 1,
            tables: vec![TableKind::Borrowed, TableKind::Secondary],
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid render config JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(RenderConfig::from_json_str("{}").unwrap(), RenderConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config =
            RenderConfig::from_json_str(r#"{"format": "json", "tables": ["secondary"]}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.tables, vec![TableKind::Secondary]);
        assert_eq!(config.padding, 1);
        assert_eq!(config.border, Border::Ascii);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(RenderConfig::from_json_str(r#"{"format": "html"}"#).is_err());
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = RenderConfig::load(Path::new("/nonexistent/render.json")).unwrap_err();
        assert!(err.to_string().contains("could not read config file"));
    }
}
