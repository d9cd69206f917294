//! Runtime configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{RefhashError, Result};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per result.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = RefhashError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(RefhashError::InvalidConfig(format!(
                "unknown output format {other:?} (expected text or json)"
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Configuration for hashing and reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefhashConfig {
    /// Read buffer size when streaming content.
    pub chunk_size: usize,

    /// Output format for reports.
    pub output: OutputFormat,
}

impl RefhashConfig {
    /// Smallest accepted chunk size.
    pub const MIN_CHUNK_SIZE: usize = 512;

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size < Self::MIN_CHUNK_SIZE {
            return Err(RefhashError::InvalidConfig(format!(
                "chunk_size {} is below the minimum of {}",
                self.chunk_size,
                Self::MIN_CHUNK_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for RefhashConfig {
    fn default() -> Self {
        Self {
            chunk_size: 64 * 1024,
            output: OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        RefhashConfig::default().validate().unwrap();
    }

    #[test]
    fn test_small_chunk_rejected() {
        let config = RefhashConfig {
            chunk_size: 16,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(RefhashError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
