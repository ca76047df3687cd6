//! Fault injection for store-failure testing
//!
//! `FaultyStore` wraps any `SetStore`, counts calls per primitive and fails
//! chosen calls on demand. Used to verify that store errors short-circuit
//! engine operations and that no partial results escape.
//!
//! # Example
//!
//! ```
//! use rindex_core::{ScanCursor, SetStore};
//! use rindex_storage::testing::{FaultKind, FaultyStore, StoreOp};
//! use rindex_storage::MemoryStore;
//!
//! let store = FaultyStore::new(MemoryStore::new());
//! // Second scan call fails
//! store.fail_after(StoreOp::Scan, 1, FaultKind::Unavailable);
//!
//! assert!(store.scan(ScanCursor::START, "*", 10).is_ok());
//! assert!(store.scan(ScanCursor::START, "*", 10).is_err());
//! assert_eq!(store.calls(StoreOp::Scan), 2);
//! ```

use parking_lot::Mutex;
use rindex_core::{Error, Result, ScanCursor, ScanPage, SetStore, WriteBatch};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store primitives that can be counted and failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    /// `SetStore::apply`
    Apply,
    /// `SetStore::members`
    Members,
    /// `SetStore::intersect`
    Intersect,
    /// `SetStore::scan`
    Scan,
}

impl StoreOp {
    /// All primitives
    pub fn all() -> [StoreOp; 4] {
        [StoreOp::Apply, StoreOp::Members, StoreOp::Intersect, StoreOp::Scan]
    }

    fn index(self) -> usize {
        match self {
            StoreOp::Apply => 0,
            StoreOp::Members => 1,
            StoreOp::Intersect => 2,
            StoreOp::Scan => 3,
        }
    }
}

/// Which error an injected fault produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// `Error::StoreUnavailable`
    Unavailable,
    /// `Error::StoreError`
    Rejected,
}

impl FaultKind {
    fn to_error(self, op: StoreOp) -> Error {
        match self {
            FaultKind::Unavailable => Error::unavailable(format!("injected fault on {:?}", op)),
            FaultKind::Rejected => Error::store(format!("injected fault on {:?}", op)),
        }
    }
}

/// An armed fault: fails calls of `op` once `skip` calls have succeeded
#[derive(Debug, Clone, Copy)]
struct FailPoint {
    op: StoreOp,
    skip: usize,
    kind: FaultKind,
}

/// `SetStore` wrapper with call counting and fault injection
#[derive(Debug)]
pub struct FaultyStore<S> {
    inner: S,
    calls: [AtomicUsize; 4],
    fail_points: Mutex<Vec<FailPoint>>,
}

impl<S: SetStore> FaultyStore<S> {
    /// Wrap `inner` with no faults armed
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Default::default(),
            fail_points: Mutex::new(Vec::new()),
        }
    }

    /// Fail every call of `op` after the first `skip` calls (counted from
    /// the start of the store's life, not from now).
    pub fn fail_after(&self, op: StoreOp, skip: usize, kind: FaultKind) {
        self.fail_points.lock().push(FailPoint { op, skip, kind });
    }

    /// Fail every future call of `op`
    pub fn fail_always(&self, op: StoreOp, kind: FaultKind) {
        self.fail_after(op, 0, kind);
    }

    /// Disarm every fault
    pub fn heal(&self) {
        self.fail_points.lock().clear();
    }

    /// Number of calls made to `op`, failed ones included
    pub fn calls(&self, op: StoreOp) -> usize {
        self.calls[op.index()].load(Ordering::Acquire)
    }

    /// Number of calls made to any primitive
    pub fn total_calls(&self) -> usize {
        StoreOp::all().iter().map(|op| self.calls(*op)).sum()
    }

    /// Reset call counters (armed faults keep counting from zero again)
    pub fn reset_calls(&self) {
        for counter in &self.calls {
            counter.store(0, Ordering::Release);
        }
    }

    /// The wrapped store
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Count the call and return the injected error, if any
    fn enter(&self, op: StoreOp) -> Result<()> {
        let seen = self.calls[op.index()].fetch_add(1, Ordering::AcqRel);
        let fail_points = self.fail_points.lock();
        match fail_points.iter().find(|fp| fp.op == op && seen >= fp.skip) {
            Some(fp) => Err(fp.kind.to_error(op)),
            None => Ok(()),
        }
    }
}

impl<S: SetStore> SetStore for FaultyStore<S> {
    fn apply(&self, batch: &WriteBatch) -> Result<()> {
        self.enter(StoreOp::Apply)?;
        self.inner.apply(batch)
    }

    fn members(&self, key: &str) -> Result<Vec<String>> {
        self.enter(StoreOp::Members)?;
        self.inner.members(key)
    }

    fn intersect(&self, keys: &[String]) -> Result<Vec<String>> {
        self.enter(StoreOp::Intersect)?;
        self.inner.intersect(keys)
    }

    fn scan(&self, cursor: ScanCursor, pattern: &str, count: usize) -> Result<ScanPage> {
        self.enter(StoreOp::Scan)?;
        self.inner.scan(cursor, pattern, count)
    }
}
