//! In-process set store
//!
//! `MemoryStore` implements `SetStore` without a server. It is the default
//! store for embedding the index in a single process and the substitute
//! store used by tests.
//!
//! # Design
//!
//! - BTreeMap: keys kept in sorted order so cursor scans are stable
//! - FxHashSet: O(1) membership checks for set members
//! - One RwLock: a batch takes the write lock once, so readers never see a
//!   partially applied batch
//!
//! Sets that lose their last member are dropped, which makes "empty set" and
//! "missing key" the same thing, as on a Redis server.
//!
//! # Scanning
//!
//! The cursor is the ordinal position of the next key to examine in sorted
//! key order. Each call examines at most `count` keys and returns those that
//! match, so a call may return no keys while the scan is still in progress.
//! Keys inserted or removed during a scan may shift positions; like Redis,
//! a scan only guarantees to report keys present for its whole duration.

use parking_lot::RwLock;
use rindex_core::{Result, ScanCursor, ScanPage, SetOp, SetStore, WriteBatch};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use crate::glob::GlobPattern;

/// Sorted map of set keys to their members
type SetMap = BTreeMap<String, FxHashSet<String>>;

/// In-memory `SetStore`
///
/// # Example
///
/// ```
/// use rindex_core::{SetStore, WriteBatch};
/// use rindex_storage::MemoryStore;
///
/// let store = MemoryStore::new();
/// let mut batch = WriteBatch::new();
/// batch.add("ri:kw:hello", "001").add("ri:doc:001", "hello");
/// store.apply(&batch).unwrap();
///
/// assert_eq!(store.members("ri:kw:hello").unwrap(), vec!["001"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    sets: RwLock<SetMap>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            sets: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of non-empty sets
    pub fn key_count(&self) -> usize {
        self.sets.read().len()
    }

    /// True if no set holds any member
    pub fn is_empty(&self) -> bool {
        self.sets.read().is_empty()
    }

    /// True if the set at `key` exists (has at least one member)
    pub fn contains_key(&self, key: &str) -> bool {
        self.sets.read().contains_key(key)
    }

    /// Drop every set
    pub fn clear(&self) {
        self.sets.write().clear();
    }
}

fn apply_op(sets: &mut SetMap, op: &SetOp) {
    match op {
        SetOp::Add { key, member } => {
            if let Some(set) = sets.get_mut(key) {
                set.insert(member.clone());
            } else {
                let mut set = FxHashSet::default();
                set.insert(member.clone());
                sets.insert(key.clone(), set);
            }
        }
        SetOp::Remove { key, member } => {
            if let Some(set) = sets.get_mut(key) {
                set.remove(member);
                if set.is_empty() {
                    sets.remove(key);
                }
            }
        }
    }
}

fn sorted(members: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = members.collect();
    out.sort_unstable();
    out
}

impl SetStore for MemoryStore {
    fn apply(&self, batch: &WriteBatch) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        let mut sets = self.sets.write();
        for op in batch.ops() {
            apply_op(&mut sets, op);
        }
        tracing::trace!(ops = batch.len(), keys = sets.len(), "applied write batch");
        Ok(())
    }

    fn members(&self, key: &str) -> Result<Vec<String>> {
        let sets = self.sets.read();
        Ok(sets
            .get(key)
            .map(|set| sorted(set.iter().cloned()))
            .unwrap_or_default())
    }

    fn intersect(&self, keys: &[String]) -> Result<Vec<String>> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let sets = self.sets.read();

        let mut operands = Vec::with_capacity(keys.len());
        for key in keys {
            match sets.get(key) {
                Some(set) => operands.push(set),
                // A missing key is an empty set
                None => return Ok(Vec::new()),
            }
        }

        // Probe from the smallest set
        operands.sort_by_key(|set| set.len());
        let Some((smallest, rest)) = operands.split_first() else {
            return Ok(Vec::new());
        };
        Ok(sorted(
            smallest
                .iter()
                .filter(|member| rest.iter().all(|set| set.contains(*member)))
                .cloned(),
        ))
    }

    fn scan(&self, cursor: ScanCursor, pattern: &str, count: usize) -> Result<ScanPage> {
        let glob = GlobPattern::new(pattern)?;
        let sets = self.sets.read();
        let start = usize::try_from(cursor.as_u64()).unwrap_or(usize::MAX);
        let count = count.max(1);

        if start >= sets.len() {
            return Ok(ScanPage::new(ScanCursor::START, Vec::new()));
        }

        let keys: Vec<String> = sets
            .keys()
            .skip(start)
            .take(count)
            .filter(|key| glob.matches(key))
            .cloned()
            .collect();

        let next = start.saturating_add(count);
        let cursor = if next >= sets.len() {
            ScanCursor::START
        } else {
            ScanCursor::new(next as u64)
        };
        Ok(ScanPage::new(cursor, keys))
    }
}
