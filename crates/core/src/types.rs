//! Value types exchanged with the store
//!
//! - SetOp / WriteBatch: an ordered group of set mutations applied atomically
//! - ScanCursor / ScanPage: the resumable key-scan protocol

use std::fmt;

// ============================================================================
// Write batches
// ============================================================================

/// A single set mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOp {
    /// Add `member` to the set at `key` (SADD)
    Add {
        /// Set key
        key: String,
        /// Member to add
        member: String,
    },
    /// Remove `member` from the set at `key` (SREM)
    Remove {
        /// Set key
        key: String,
        /// Member to remove
        member: String,
    },
}

impl SetOp {
    /// Key this operation touches
    pub fn key(&self) -> &str {
        match self {
            SetOp::Add { key, .. } | SetOp::Remove { key, .. } => key,
        }
    }

    /// Member this operation adds or removes
    pub fn member(&self) -> &str {
        match self {
            SetOp::Add { member, .. } | SetOp::Remove { member, .. } => member,
        }
    }
}

/// Ordered list of set mutations submitted as one all-or-nothing unit.
///
/// Stores must apply either every operation or none of them; readers never
/// observe a partially applied batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    ops: Vec<SetOp>,
}

impl WriteBatch {
    /// Create an empty batch
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create an empty batch with room for `capacity` operations
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    /// Queue an add of `member` to the set at `key`
    pub fn add(&mut self, key: impl Into<String>, member: impl Into<String>) -> &mut Self {
        self.ops.push(SetOp::Add {
            key: key.into(),
            member: member.into(),
        });
        self
    }

    /// Queue a removal of `member` from the set at `key`
    pub fn remove(&mut self, key: impl Into<String>, member: impl Into<String>) -> &mut Self {
        self.ops.push(SetOp::Remove {
            key: key.into(),
            member: member.into(),
        });
        self
    }

    /// Queued operations in submission order
    pub fn ops(&self) -> &[SetOp] {
        &self.ops
    }

    /// Number of queued operations
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl IntoIterator for WriteBatch {
    type Item = SetOp;
    type IntoIter = std::vec::IntoIter<SetOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

// ============================================================================
// Cursor scan
// ============================================================================

/// Opaque position in a cursor-based key scan.
///
/// `ScanCursor::START` is both where a scan begins and the value the store
/// returns once the key space is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScanCursor(u64);

impl ScanCursor {
    /// Initial and terminal cursor
    pub const START: ScanCursor = ScanCursor(0);

    /// Wrap a raw cursor value returned by a store
    pub const fn new(raw: u64) -> Self {
        ScanCursor(raw)
    }

    /// Raw cursor value
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// True when a returned cursor signals the end of the scan
    pub const fn is_exhausted(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ScanCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One batch of a cursor scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanPage {
    /// Cursor to pass to the next call; `START` when the scan is complete
    pub cursor: ScanCursor,
    /// Keys matching the pattern in this batch (possibly empty)
    pub keys: Vec<String>,
}

impl ScanPage {
    /// Create a page
    pub fn new(cursor: ScanCursor, keys: Vec<String>) -> Self {
        Self { cursor, keys }
    }
}
