//! Converter configuration from `cqn-sql.toml`.
//!
//! ```toml
//! dialect = "postgres"
//! nested_entries = "reject"
//! duplicate_dialects = "replace"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::converter::Converter;
use crate::error::{CqnError, CqnResult};
use crate::transformer::NestedEntryPolicy;
use crate::transpiler::registry::{self, DuplicatePolicy};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "cqn-sql.toml";

pub const DEFAULT_DIALECT: &str = "ansi-sql";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Registry name of the dialect to generate for.
    pub dialect: String,
    pub nested_entries: NestedEntryPolicy,
    pub duplicate_dialects: DuplicatePolicy,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            dialect: DEFAULT_DIALECT.to_string(),
            nested_entries: NestedEntryPolicy::default(),
            duplicate_dialects: DuplicatePolicy::default(),
        }
    }
}

impl ConverterConfig {
    pub fn from_toml_str(content: &str) -> CqnResult<Self> {
        toml::from_str(content).map_err(|e| CqnError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> CqnResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// `./cqn-sql.toml`, then `<config dir>/cqn-sql/config.toml`, else defaults.
    pub fn discover() -> CqnResult<Self> {
        match Self::candidates().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("cqn-sql").join("config.toml"));
        }
        paths
    }

    /// Apply the registry policy and build a converter for the named dialect.
    pub fn build(&self) -> CqnResult<Converter> {
        registry::configure(self);
        Converter::from_config(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ConverterConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.dialect, "ansi-sql");
        assert_eq!(config.nested_entries, NestedEntryPolicy::Skip);
        assert_eq!(config.duplicate_dialects, DuplicatePolicy::Replace);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = ConverterConfig::from_toml_str(
            r#"
            dialect = "postgres"
            nested_entries = "reject"
            duplicate_dialects = "reject"
            "#,
        )
        .unwrap();
        assert_eq!(config.dialect, "postgres");
        assert_eq!(config.nested_entries, NestedEntryPolicy::Reject);
        assert_eq!(config.duplicate_dialects, DuplicatePolicy::Reject);
    }

    #[test]
    fn test_invalid_policy() {
        let err = ConverterConfig::from_toml_str(r#"nested_entries = "recurse""#).unwrap_err();
        assert!(matches!(err, CqnError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dialect = \"sqlite\"").unwrap();
        let config = ConverterConfig::load(file.path()).unwrap();
        assert_eq!(config.dialect, "sqlite");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConverterConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CqnError::Io(_)));
    }

    #[test]
    fn test_build_unknown_dialect() {
        let config = ConverterConfig {
            dialect: "no-such-dialect".into(),
            ..Default::default()
        };
        let err = config.build().unwrap_err();
        assert!(matches!(err, CqnError::UnknownDialect(ref n) if n == "no-such-dialect"));
    }

    #[test]
    fn test_build_named_dialect() {
        let converter = ConverterConfig::from_toml_str(r#"dialect = "mysql""#)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(converter.dialect().name(), "mysql");
    }
}
