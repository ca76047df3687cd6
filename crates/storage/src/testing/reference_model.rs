//! Reference model for tracking expected index state
//!
//! The reference model keeps a plain in-memory copy of what each document's
//! keyword set should be, so tests can compare an index backed by a real
//! store against the expected answer for any query.
//!
//! The model works on keywords, not raw text: callers tokenize first.
//!
//! # Example
//!
//! ```
//! use rindex_storage::testing::ReferenceIndex;
//!
//! let mut model = ReferenceIndex::new();
//! model.add("001", ["hello", "world"]);
//! model.add("002", ["world"]);
//!
//! let hits = model.search(["world"]);
//! assert_eq!(hits.len(), 2);
//! ```

use std::collections::{BTreeMap, BTreeSet};

/// Operation recorded in the reference model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Keywords unioned into a document
    Add {
        /// Document ID
        doc_id: String,
        /// Keywords added
        keywords: Vec<String>,
    },
    /// Document removed
    Remove {
        /// Document ID
        doc_id: String,
    },
    /// Document keywords replaced
    Replace {
        /// Document ID
        doc_id: String,
        /// New keyword set
        keywords: Vec<String>,
    },
}

/// Expected document -> keywords state
#[derive(Debug, Default, Clone)]
pub struct ReferenceIndex {
    docs: BTreeMap<String, BTreeSet<String>>,
    ops: Vec<Operation>,
}

impl ReferenceIndex {
    /// Create an empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Union `keywords` into `doc_id`'s keyword set
    pub fn add<I, K>(&mut self, doc_id: &str, keywords: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        if !keywords.is_empty() {
            self.docs
                .entry(doc_id.to_string())
                .or_default()
                .extend(keywords.iter().cloned());
        }
        self.ops.push(Operation::Add {
            doc_id: doc_id.to_string(),
            keywords,
        });
    }

    /// Forget `doc_id` entirely
    pub fn remove(&mut self, doc_id: &str) {
        self.docs.remove(doc_id);
        self.ops.push(Operation::Remove {
            doc_id: doc_id.to_string(),
        });
    }

    /// Replace `doc_id`'s keyword set with `keywords`
    pub fn replace<I, K>(&mut self, doc_id: &str, keywords: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(Into::into).collect();
        self.docs.remove(doc_id);
        if !keywords.is_empty() {
            self.docs
                .insert(doc_id.to_string(), keywords.iter().cloned().collect());
        }
        self.ops.push(Operation::Replace {
            doc_id: doc_id.to_string(),
            keywords,
        });
    }

    /// Expected keyword set of `doc_id` (empty if unknown)
    pub fn keywords(&self, doc_id: &str) -> BTreeSet<String> {
        self.docs.get(doc_id).cloned().unwrap_or_default()
    }

    /// Documents containing every one of `keywords`; empty for no keywords
    pub fn search<I, K>(&self, keywords: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let keywords: Vec<K> = keywords.into_iter().collect();
        if keywords.is_empty() {
            return BTreeSet::new();
        }
        self.docs
            .iter()
            .filter(|(_, doc_keywords)| keywords.iter().all(|k| doc_keywords.contains(k.as_ref())))
            .map(|(doc_id, _)| doc_id.clone())
            .collect()
    }

    /// Every keyword referenced by some document that starts with `prefix`
    pub fn keywords_with_prefix(&self, prefix: &str) -> BTreeSet<String> {
        self.docs
            .values()
            .flatten()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    /// Documents with at least one keyword
    pub fn doc_ids(&self) -> impl Iterator<Item = &String> {
        self.docs.keys()
    }

    /// Every keyword referenced by some document
    pub fn all_keywords(&self) -> BTreeSet<String> {
        self.docs.values().flatten().cloned().collect()
    }

    /// Operations recorded so far, in order
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }
}
