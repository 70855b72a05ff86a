//! Runtime configuration for the demo binary.

use crate::filter::FilterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

fn default_frames() -> usize {
    100
}

/// Demo-run configuration, loaded from a JSON file.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    /// Source image replayed as the capture stream; a synthetic intensity
    /// ramp is used when absent.
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Number of frames to drive through the module.
    #[serde(default = "default_frames")]
    pub frames: usize,
    /// Where to save the last displayed frame.
    #[serde(default)]
    pub output_png: Option<PathBuf>,
    /// Optional JSON run summary.
    #[serde(default)]
    pub summary_json: Option<PathBuf>,
    /// Drive the headless callback instead of the streaming one.
    #[serde(default)]
    pub headless: bool,
    /// Placeholder-filter parameters.
    #[serde(default)]
    pub filter: FilterParams,
}

/// Load and parse a JSON demo configuration.
pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: RuntimeConfig = serde_json::from_str("{}").unwrap();
        assert!(config.input.is_none());
        assert_eq!(config.frames, 100);
        assert!(!config.headless);
        assert_eq!(config.filter.bias, FilterParams::default().bias);
    }

    #[test]
    fn camel_case_keys_are_accepted() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{"frames": 3, "outputPng": "out.png", "filter": {"scale": 1.0, "bias": 0.0}}"#,
        )
        .unwrap();
        assert_eq!(config.frames, 3);
        assert_eq!(config.output_png.as_deref(), Some(Path::new("out.png")));
        assert_eq!(config.filter.scale, 1.0);
    }
}
