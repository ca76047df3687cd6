//! rindex - Minimal inverted keyword index over a set-capable key-value store
//!
//! rindex maps free-text documents to sets of normalized keywords and
//! answers exact multi-keyword AND queries and keyword-prefix lookups. All
//! state lives in the store; the index itself is a stateless facade.
//!
//! # Quick Start
//!
//! ```
//! use rindex::{Indexer, MemoryStore};
//!
//! let indexer = Indexer::new(MemoryStore::new());
//!
//! // Replace semantics: old keywords are discarded
//! indexer.index("001", "hello world!")?;
//! indexer.index("001", "halo world!")?;
//!
//! // Append semantics: keywords accumulate
//! indexer.add("002", "hooray")?;
//! indexer.add("002", "world")?;
//!
//! assert_eq!(indexer.search("world")?.len(), 2);
//! assert!(indexer.search("hello")?.is_empty());
//! assert_eq!(indexer.match_prefix("ha")?, vec!["halo"]);
//!
//! indexer.remove("001")?;
//! assert_eq!(indexer.search("world")?.len(), 1);
//! # Ok::<(), rindex::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `rindex-core`: errors, key namespace, the `SetStore` capability trait
//! - `rindex-storage`: `MemoryStore` and testing utilities
//! - `rindex-search`: tokenizer, `Indexer`, configuration
//!
//! Plug in any store (for example a Redis client) by implementing
//! [`SetStore`].

pub use rindex_core::{
    escape_glob, Error, KeyNamespace, Result, ScanCursor, ScanPage, SetOp, SetStore, WriteBatch,
    DEFAULT_KEY_PREFIX,
};
pub use rindex_search::{
    is_delimiter, tokenize, tokenize_unique, IndexConfig, Indexer, PrefixMode, PrefixScan,
    ScanState, CONFIG_FILE_NAME, DEFAULT_SCAN_COUNT,
};
pub use rindex_storage::{testing, MemoryStore};
