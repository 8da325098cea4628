//! Name-keyed cache of enum tables declared at runtime.
//!
//! `declare_enum!` types own their table directly. Enums whose members are
//! only known at runtime (parsed declarations, generated definitions) go
//! through a `Registry` instead: the first registration of a type name wins,
//! and every later one returns the table already stored.

use crate::config::EnumConfig;
use crate::declaration::{Declaration, DeclarationFile};
use crate::error::{EnumError, Result};
use crate::table::EnumTable;
use rustc_hash::FxHashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<FxHashMap<String, Arc<EnumTable>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Table for `enum_name`, populated from `declare` on first use.
    ///
    /// `declare` only runs when the type has no table yet. The write lock is
    /// held from the emptiness check until the table is stored, so concurrent
    /// callers agree on a single population.
    pub fn resolve_with<F>(
        &self,
        enum_name: &str,
        config: &EnumConfig,
        declare: F,
    ) -> Result<Arc<EnumTable>>
    where
        F: FnOnce() -> Declaration,
    {
        if let Some(table) = self.get(enum_name) {
            return Ok(table);
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = tables.get(enum_name) {
            debug!("Enum {} was populated concurrently", enum_name);
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(EnumTable::build(enum_name, &declare(), config)?);
        info!("Registered enum {} ({} members)", enum_name, table.len());
        tables.insert(enum_name.to_string(), Arc::clone(&table));
        Ok(table)
    }

    /// Register a declaration; a type name that is already registered keeps
    /// its original table.
    pub fn register(
        &self,
        enum_name: &str,
        declaration: Declaration,
        config: &EnumConfig,
    ) -> Result<Arc<EnumTable>> {
        self.resolve_with(enum_name, config, move || declaration)
    }

    pub fn register_file(&self, file: DeclarationFile) -> Result<Arc<EnumTable>> {
        let DeclarationFile {
            name,
            config,
            members,
        } = file;
        self.register(&name, members, &config)
    }

    pub fn get(&self, enum_name: &str) -> Option<Arc<EnumTable>> {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(enum_name)
            .cloned()
    }

    /// Like `get`, but an absent type is an error.
    pub fn table(&self, enum_name: &str) -> Result<Arc<EnumTable>> {
        self.get(enum_name).ok_or_else(|| EnumError::UnregisteredEnum {
            enum_name: enum_name.to_string(),
        })
    }

    pub fn contains(&self, enum_name: &str) -> bool {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(enum_name)
    }

    pub fn len(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_first_registration_wins() {
        let registry = Registry::new();
        let first = registry
            .register("Flag", Declaration::new().named("On").named("Off"), &EnumConfig::default())
            .unwrap();
        let second = registry
            .register("Flag", Declaration::new().named("Maybe"), &EnumConfig::default())
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.keys(), vec!["On", "Off"]);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_declare_runs_once() {
        let registry = Registry::new();
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            registry
                .resolve_with("Once", &EnumConfig::default(), || {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Declaration::new().named("A")
                })
                .unwrap();
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_population_agrees() {
        let registry = Arc::new(Registry::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let calls = Arc::clone(&calls);
                thread::spawn(move || {
                    registry
                        .resolve_with("Race", &EnumConfig::default(), || {
                            calls.fetch_add(1, Ordering::SeqCst);
                            Declaration::new().named("X").named("Y")
                        })
                        .unwrap()
                })
            })
            .collect();

        let tables: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(tables.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn test_failed_population_is_not_stored() {
        let registry = Registry::new();
        let decl = Declaration::new().named("A").named("a");
        assert!(registry.register("Bad", decl, &EnumConfig::default()).is_err());
        assert!(!registry.contains("Bad"));
        assert_eq!(
            registry.table("Bad").unwrap_err(),
            EnumError::UnregisteredEnum {
                enum_name: "Bad".to_string()
            }
        );
    }
}
