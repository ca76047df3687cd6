//! Core types and traits for rindex
//!
//! This crate defines the foundational types used throughout the system:
//! - Error: Error type hierarchy
//! - KeyNamespace: Key naming for posting sets and document keyword sets
//! - WriteBatch / SetOp: Atomic groups of set mutations
//! - ScanCursor / ScanPage: Cursor-based key scan protocol
//! - Traits: The `SetStore` capability implemented by backing stores

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use key::{escape_glob, KeyNamespace, DEFAULT_KEY_PREFIX};
pub use traits::SetStore;
pub use types::{ScanCursor, ScanPage, SetOp, WriteBatch};
