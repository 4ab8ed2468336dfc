use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{HuffmanError, Result};

pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Tunables for the file operations, optionally read from a TOML file:
///
/// ```toml
/// buffer_size = 65536
/// compressed_extension = "huf"
/// tree_extension = "htree"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Chunk size for reads and batch size for buffered writes.
    pub buffer_size: usize,
    pub compressed_extension: String,
    pub tree_extension: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        CodecConfig {
            buffer_size: DEFAULT_BUFFER_SIZE,
            compressed_extension: "huf".to_string(),
            tree_extension: "htree".to_string(),
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CodecConfig =
            toml::from_str(text).map_err(|e| HuffmanError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            HuffmanError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.buffer_size == 0 {
            return Err(HuffmanError::config("buffer_size must be at least 1"));
        }
        for ext in [&self.compressed_extension, &self.tree_extension] {
            if ext.is_empty() || ext.contains('.') {
                return Err(HuffmanError::config(format!(
                    "invalid extension {:?}: must be non-empty and contain no dot",
                    ext
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = CodecConfig::from_toml_str("buffer_size = 4096").unwrap();
        assert_eq!(config.buffer_size, 4096);
        assert_eq!(config.compressed_extension, "huf");
        assert_eq!(config.tree_extension, "htree");
        assert_eq!(CodecConfig::from_toml_str("").unwrap(), CodecConfig::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(CodecConfig::from_toml_str("buffer_size = 0").is_err());
        assert!(CodecConfig::from_toml_str("tree_extension = \"\"").is_err());
        assert!(CodecConfig::from_toml_str("compressed_extension = \"a.b\"").is_err());
        assert!(CodecConfig::from_toml_str("unknown = 1").is_err());
        assert!(CodecConfig::from_toml_str("buffer_size = \"big\"").is_err());
    }
}
