//! Testing utilities for stores and stored indexes
//!
//! - **Fault injection**: `FaultyStore` counts calls per store primitive and
//!   fails chosen calls
//! - **Symmetry checker**: `check_symmetry` verifies posting sets and
//!   document keyword sets mirror each other
//! - **Reference model**: `ReferenceIndex` tracks the expected
//!   document -> keywords state
//!
//! # Example
//!
//! ```ignore
//! use rindex_storage::testing::{check_symmetry, FaultKind, FaultyStore, StoreOp};
//!
//! let store = FaultyStore::new(MemoryStore::new());
//! store.fail_always(StoreOp::Apply, FaultKind::Unavailable);
//! assert!(indexer.add("001", "hello").is_err());
//! assert!(check_symmetry(store.inner(), &namespace, 10)?.is_empty());
//! ```

mod faults;
mod reference_model;
mod symmetry;

pub use faults::{FaultKind, FaultyStore, StoreOp};
pub use reference_model::{Operation, ReferenceIndex};
pub use symmetry::{check_symmetry, SymmetryViolation};
