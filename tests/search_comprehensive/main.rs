//! Search Comprehensive Test Suite
//!
//! End-to-end tests for the keyword index over an in-memory set store.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Index Contract** (add, remove, index, keywords)
//! - **Tier 2: Query Contract** (AND search, degenerate queries, prefix match)
//! - **Tier 3: Text Normalization** (tokenizer behavior through the full pipeline)
//! - **Tier 4: Model-Based Properties** (random operation sequences vs. a reference model)
//! - **Tier 5: Concurrency** (shared store across threads)
//! - **Tier 6: Store Failures** (error propagation, atomicity)
//! - **Tier 7: Configuration** (key prefix isolation, TOML files)
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test search_comprehensive
//!
//! # Run specific tier
//! cargo test --test search_comprehensive tier4
//! ```

#[path = "../common/mod.rs"]
mod common;

// Tier 1: Index Contract
mod tier1_index_contract;



// Tier 4: Model-Based Properties
mod tier4_model_properties;

// Tier 5: Concurrency
mod tier5_concurrency;
