//! The `Indexer` facade
//!
//! An `Indexer` is a store handle plus an immutable configuration. It keeps
//! no other state: every call reads and writes the store directly, so any
//! number of indexers (in one process or many) can share one store, and a
//! single indexer can be shared across threads.
//!
//! Mutations live in `index.rs`, queries in `query.rs`.

use rindex_core::{KeyNamespace, Result, SetStore};

use crate::config::IndexConfig;

/// Keyword index over a `SetStore`
///
/// # Example
///
/// ```
/// use rindex_search::Indexer;
/// use rindex_storage::MemoryStore;
///
/// let indexer = Indexer::new(MemoryStore::new());
/// indexer.index("001", "hello world!").unwrap();
///
/// let hits = indexer.search("Hello").unwrap();
/// assert!(hits.contains("001"));
/// ```
#[derive(Debug, Clone)]
pub struct Indexer<S> {
    pub(crate) store: S,
    pub(crate) namespace: KeyNamespace,
    pub(crate) config: IndexConfig,
}

impl<S: SetStore> Indexer<S> {
    /// Create an indexer with the default configuration (`ri:` prefix)
    pub fn new(store: S) -> Self {
        let config = IndexConfig::default();
        Self {
            store,
            namespace: config.namespace(),
            config,
        }
    }

    /// Create an indexer with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration fails validation.
    pub fn with_config(store: S, config: IndexConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            namespace: config.namespace(),
            config,
        })
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Key namespace of this index
    pub fn namespace(&self) -> &KeyNamespace {
        &self.namespace
    }

    /// Active configuration
    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Consume the indexer and return its store
    pub fn into_store(self) -> S {
        self.store
    }
}
