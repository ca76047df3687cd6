//! Storage layer for rindex
//!
//! This crate provides:
//! - MemoryStore: in-process `SetStore` (BTreeMap of FxHashSets behind one RwLock)
//! - Glob matching for cursor scans (`*`, `?`, `[...]`, `\` escapes)
//! - Testing utilities: fault injection, symmetry checking, reference model
//!
//! Remote stores implement `rindex_core::SetStore` directly; nothing in the
//! search crate depends on this one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod glob;
pub mod memory;
pub mod testing;

pub use glob::{glob_match, GlobPattern};
pub use memory::MemoryStore;
