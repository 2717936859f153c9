//! Editing-session configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cache::DEFAULT_CAPACITY;
use crate::errors::LogicError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Number of roots the identity cache keeps indexed. Zero disables it.
    pub cache_capacity: usize,
    /// Re-normalise the surviving parent after a delete.
    pub normalize_after_delete: bool,
    /// Keep a trailing placeholder in lists touched by a replace.
    pub preserve_ending_placeholder: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            normalize_after_delete: true,
            preserve_ending_placeholder: true,
        }
    }
}

impl EditorConfig {
    /// Reads a YAML (`.yaml`/`.yml`) or JSON file. Missing keys take their
    /// default value.
    pub fn load(path: &Path) -> Result<Self, LogicError> {
        let display = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| LogicError::io(&display, source))?;
        let is_yaml = matches!(
            path.extension().and_then(|extension| extension.to_str()),
            Some("yaml" | "yml")
        );
        let parsed = if is_yaml {
            serde_yaml::from_str(&text).map_err(|error| error.to_string())
        } else {
            serde_json::from_str(&text).map_err(|error| error.to_string())
        };
        parsed.map_err(|message| LogicError::Config {
            path: display,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_keys_use_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"cache_capacity": 2}"#).unwrap();
        assert_eq!(config.cache_capacity, 2);
        assert!(config.normalize_after_delete);
    }

    #[test]
    fn loads_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "normalize_after_delete: false").unwrap();
        let config = EditorConfig::load(file.path()).unwrap();
        assert!(!config.normalize_after_delete);
        assert_eq!(config.cache_capacity, DEFAULT_CAPACITY);
    }

    #[test]
    fn unknown_keys_are_config_errors() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"cache_size": 3}}"#).unwrap();
        let error = EditorConfig::load(file.path()).unwrap_err();
        assert!(matches!(error, LogicError::Config { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let error = EditorConfig::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(error, LogicError::Io { .. }));
    }
}
