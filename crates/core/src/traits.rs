//! Store abstraction
//!
//! This module defines the `SetStore` trait: the capability the index needs
//! from its backing key-value store. A Redis-like server fits naturally
//! (MULTI/SADD/SREM, SMEMBERS, SINTER, SCAN MATCH COUNT), and
//! `rindex_storage::MemoryStore` provides an in-process implementation.

use std::sync::Arc;

use crate::error::Result;
use crate::types::{ScanCursor, ScanPage, WriteBatch};

/// Set-capable key-value store
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync). Implementations surface every
/// failure as an error and never retry internally.
pub trait SetStore: Send + Sync {
    /// Apply every operation in `batch` as one indivisible unit.
    ///
    /// Adding an existing member and removing a missing one are both
    /// successful no-ops. A set left with no members is indistinguishable
    /// from a key that does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch could not be applied; in that case none
    /// of its operations are visible.
    fn apply(&self, batch: &WriteBatch) -> Result<()>;

    /// All members of the set at `key`; empty if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn members(&self, key: &str) -> Result<Vec<String>>;

    /// Members present in every one of the sets at `keys`.
    ///
    /// A missing key behaves as an empty set, so the intersection is empty.
    /// An empty `keys` slice yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn intersect(&self, keys: &[String]) -> Result<Vec<String>>;

    /// One step of a cursor-based key scan.
    ///
    /// Returns keys matching the glob `pattern` among the next `count`
    /// (a hint) keys after `cursor`, plus the cursor to resume from. A page
    /// may be empty while its cursor is not exhausted. The scan is finished
    /// when the returned cursor is `ScanCursor::START`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store operation fails.
    fn scan(&self, cursor: ScanCursor, pattern: &str, count: usize) -> Result<ScanPage>;
}

impl<S: SetStore + ?Sized> SetStore for Arc<S> {
    fn apply(&self, batch: &WriteBatch) -> Result<()> {
        (**self).apply(batch)
    }

    fn members(&self, key: &str) -> Result<Vec<String>> {
        (**self).members(key)
    }

    fn intersect(&self, keys: &[String]) -> Result<Vec<String>> {
        (**self).intersect(keys)
    }

    fn scan(&self, cursor: ScanCursor, pattern: &str, count: usize) -> Result<ScanPage> {
        (**self).scan(cursor, pattern, count)
    }
}

impl<S: SetStore + ?Sized> SetStore for &S {
    fn apply(&self, batch: &WriteBatch) -> Result<()> {
        (**self).apply(batch)
    }

    fn members(&self, key: &str) -> Result<Vec<String>> {
        (**self).members(key)
    }

    fn intersect(&self, keys: &[String]) -> Result<Vec<String>> {
        (**self).intersect(keys)
    }

    fn scan(&self, cursor: ScanCursor, pattern: &str, count: usize) -> Result<ScanPage> {
        (**self).scan(cursor, pattern, count)
    }
}
