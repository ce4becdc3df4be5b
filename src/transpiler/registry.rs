//! Name-keyed dialect registry.
//!
//! A process-wide instance, pre-populated with the built-in dialects, sits
//! behind a lock; independent [`DialectRegistry`] values can also be built
//! and used directly.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;
use serde::Deserialize;
use tracing::debug;

use crate::config::ConverterConfig;
use crate::error::{CqnError, CqnResult};
use crate::transpiler::Dialect;
use crate::transpiler::sql::{AnsiSql, MySql, Postgres, Sqlite};

/// What `register` does when the name is already taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Last registration wins.
    #[default]
    Replace,
    /// Keep the existing entry and fail with [`CqnError::DuplicateDialect`].
    Reject,
}

#[derive(Default)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, Arc<dyn Dialect>>,
    duplicates: DuplicatePolicy,
}

impl DialectRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding ansi-sql, postgres, sqlite and mysql.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        let builtins: [Arc<dyn Dialect>; 4] = [
            Arc::new(AnsiSql),
            Arc::new(Postgres),
            Arc::new(Sqlite),
            Arc::new(MySql),
        ];
        for dialect in builtins {
            registry.dialects.insert(dialect.name().to_string(), dialect);
        }
        registry
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) {
        self.duplicates = policy;
    }

    /// Register `dialect` under its own name.
    pub fn register(&mut self, dialect: Arc<dyn Dialect>) -> CqnResult<()> {
        let name = dialect.name().to_string();
        if self.dialects.contains_key(&name) {
            if self.duplicates == DuplicatePolicy::Reject {
                return Err(CqnError::DuplicateDialect(name));
            }
            debug!(dialect = %name, "Replacing registered dialect");
        }
        self.dialects.insert(name, dialect);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Dialect>> {
        self.dialects.get(name).cloned()
    }

    /// All dialects, sorted by name.
    pub fn list(&self) -> Vec<Arc<dyn Dialect>> {
        self.dialects.values().cloned().collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.dialects.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.dialects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dialects.is_empty()
    }
}

impl std::fmt::Debug for DialectRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialectRegistry")
            .field("dialects", &self.names())
            .field("duplicates", &self.duplicates)
            .finish()
    }
}

static REGISTRY: Lazy<RwLock<DialectRegistry>> =
    Lazy::new(|| RwLock::new(DialectRegistry::with_builtins()));

// Writers never leave the map half-updated; a poisoned lock is recovered.
fn read() -> RwLockReadGuard<'static, DialectRegistry> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, DialectRegistry> {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner)
}

/// Register a dialect in the process-wide registry.
pub fn register_dialect(dialect: Arc<dyn Dialect>) -> CqnResult<()> {
    write().register(dialect)
}

/// Look up a dialect in the process-wide registry.
pub fn get_dialect(name: &str) -> Option<Arc<dyn Dialect>> {
    read().get(name)
}

/// Every dialect in the process-wide registry, sorted by name.
pub fn list_dialects() -> Vec<Arc<dyn Dialect>> {
    read().list()
}

/// Apply the configured duplicate policy to the process-wide registry.
pub fn configure(config: &ConverterConfig) {
    write().set_duplicate_policy(config.duplicate_dialects);
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Dialect for Named {
        fn name(&self) -> &str {
            self.0
        }

        fn version(&self) -> &str {
            "2.0.0"
        }
    }

    #[test]
    fn test_builtins_listed_by_name() {
        let registry = DialectRegistry::with_builtins();
        assert_eq!(registry.names(), vec!["ansi-sql", "mysql", "postgres", "sqlite"]);
        assert_eq!(registry.len(), 4);
        assert!(registry.get("oracle").is_none());
    }

    #[test]
    fn test_replace_is_default() {
        let mut registry = DialectRegistry::new();
        assert!(registry.is_empty());
        registry.register(Arc::new(AnsiSql)).unwrap();
        registry.register(Arc::new(Named("ansi-sql"))).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("ansi-sql").map(|d| d.version().to_string()), Some("2.0.0".into()));
    }

    #[test]
    fn test_reject_keeps_first() {
        let mut registry = DialectRegistry::new();
        registry.set_duplicate_policy(DuplicatePolicy::Reject);
        registry.register(Arc::new(AnsiSql)).unwrap();
        let err = registry.register(Arc::new(Named("ansi-sql"))).unwrap_err();
        assert!(matches!(err, CqnError::DuplicateDialect(ref n) if n == "ansi-sql"));
        assert_eq!(registry.get("ansi-sql").map(|d| d.version().to_string()), Some("1.0.0".into()));
    }

    #[test]
    fn test_global_registry() {
        assert!(get_dialect("postgres").is_some());
        register_dialect(Arc::new(Named("registry-test-dialect"))).unwrap();
        assert!(get_dialect("registry-test-dialect").is_some());
        assert!(
            list_dialects()
                .iter()
                .any(|d| d.name() == "registry-test-dialect")
        );
    }
}
