// src/config.rs
use crate::error::{Result, SeedError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_DB: &str = "oceanDubaiHackathon";
pub const DEFAULT_COLLECTION: &str = "properties";
pub const DEFAULT_INPUT: &str = "path/to/your/dataset.json";

/// Everything a seed run needs, resolved up front and handed to [`crate::seed::run`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub input: PathBuf,
    /// Interpret `$oid`, `$date` and friends as BSON types.
    pub extended_json: bool,
    /// Stop at the first failing document instead of attempting all of them.
    pub ordered: bool,
    /// Parse and print the dataset without connecting.
    pub dry_run: bool,
    pub server_selection_timeout_ms: Option<u64>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DB.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            input: PathBuf::from(DEFAULT_INPUT),
            extended_json: false,
            ordered: true,
            dry_run: false,
            server_selection_timeout_ms: None,
        }
    }
}

impl SeedConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty file deserializes as unit, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| SeedError::Config(e.to_string()))
    }

    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| SeedError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_the_stock_loader() {
        let cfg = SeedConfig::default();
        assert_eq!(cfg.uri, "mongodb://localhost:27017");
        assert_eq!(cfg.database, "oceanDubaiHackathon");
        assert_eq!(cfg.collection, "properties");
        assert_eq!(cfg.input, PathBuf::from("path/to/your/dataset.json"));
        assert!(cfg.ordered);
        assert!(!cfg.dry_run);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = SeedConfig::from_yaml_str("collection: listings\nordered: false\n").unwrap();
        assert_eq!(cfg.collection, "listings");
        assert!(!cfg.ordered);
        assert_eq!(cfg.database, DEFAULT_DB);
        assert_eq!(cfg.uri, DEFAULT_URI);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(SeedConfig::from_yaml_str("  \n").unwrap(), SeedConfig::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = SeedConfig::from_yaml_str("colection: typo\n").unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "uri: mongodb://db.internal:27018").unwrap();
        writeln!(file, "server_selection_timeout_ms: 500").unwrap();
        let cfg = SeedConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(cfg.uri, "mongodb://db.internal:27018");
        assert_eq!(cfg.server_selection_timeout_ms, Some(500));
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = SeedConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, SeedError::Config(_)));
    }
}
