//! Keyword index and query engine for rindex
//!
//! This crate provides:
//! - Tokenizer shared by indexing and querying
//! - `Indexer`: stateless facade over a `SetStore`
//!   - add / remove / index / keywords (index engine)
//!   - search / match_prefix (query engine)
//! - `PrefixScan`: cursor-driven keyword prefix scan
//! - `IndexConfig`: key prefix, scan batch size, prefix-match mode
//!
//! # Usage
//!
//! ```
//! use rindex_search::Indexer;
//! use rindex_storage::MemoryStore;
//!
//! let indexer = Indexer::new(MemoryStore::new());
//! indexer.index("001", "hello world!").unwrap();
//! indexer.add("002", "hooray world!").unwrap();
//!
//! assert_eq!(indexer.search("world").unwrap().len(), 2);
//! assert_eq!(indexer.match_prefix("hoo").unwrap(), vec!["hooray"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod index;
pub mod indexer;
pub mod query;
pub mod tokenizer;

// Re-export commonly used types
pub use config::{IndexConfig, PrefixMode, CONFIG_FILE_NAME, DEFAULT_SCAN_COUNT};
pub use indexer::Indexer;
pub use query::{PrefixScan, ScanState};
pub use tokenizer::{is_delimiter, tokenize, tokenize_unique};
