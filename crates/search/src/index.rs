//! Index mutations
//!
//! - `add`: union a document's keywords into the index (append)
//! - `remove`: drop every keyword association of a document
//! - `index`: `remove` then `add` (replace)
//! - `keywords`: read a document's keyword set
//!
//! Each of `add` and `remove` writes both directions of every
//! keyword/document link in a single `WriteBatch`, so the posting sets and
//! the document keyword sets stay mirror images of each other.
//!
//! `index` is two batches. Between them a concurrent reader can see the
//! document with no keywords at all; callers that need read-your-write
//! across a re-index must serialize `index` calls per document themselves.

use rindex_core::{Result, SetStore, WriteBatch};
use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::indexer::Indexer;
use crate::tokenizer::tokenize_unique;

impl<S: SetStore> Indexer<S> {
    /// Add `content`'s keywords to `doc_id`, keeping any it already has.
    ///
    /// Content without keywords (empty, whitespace, punctuation) is a
    /// successful no-op that does not contact the store.
    ///
    /// # Errors
    ///
    /// Returns the store error if the batch could not be applied; nothing is
    /// written in that case.
    pub fn add(&self, doc_id: &str, content: &str) -> Result<()> {
        let keywords = tokenize_unique(content);
        if keywords.is_empty() {
            debug!(doc_id, "no keywords in content, nothing to add");
            return Ok(());
        }

        let doc_key = self.namespace.doc_key(doc_id);
        let mut batch = WriteBatch::with_capacity(keywords.len() * 2);
        for keyword in &keywords {
            batch
                .add(self.namespace.keyword_key(keyword), doc_id)
                .add(doc_key.as_str(), keyword.as_str());
        }

        self.store.apply(&batch).map_err(|e| {
            warn!(doc_id, error = %e, "add failed");
            e
        })?;
        debug!(doc_id, keywords = keywords.len(), "added document");
        Ok(())
    }

    /// Remove every keyword association of `doc_id`.
    ///
    /// Removing a document that was never indexed (or is already removed)
    /// succeeds without writing anything.
    ///
    /// # Errors
    ///
    /// Returns the store error from reading the document's keyword set or
    /// from applying the removal batch.
    pub fn remove(&self, doc_id: &str) -> Result<()> {
        let doc_key = self.namespace.doc_key(doc_id);
        let keywords = self.store.members(&doc_key).map_err(|e| {
            warn!(doc_id, error = %e, "reading document keywords failed");
            e
        })?;
        if keywords.is_empty() {
            debug!(doc_id, "document not indexed, nothing to remove");
            return Ok(());
        }

        let mut batch = WriteBatch::with_capacity(keywords.len() * 2);
        for keyword in &keywords {
            batch
                .remove(self.namespace.keyword_key(keyword), doc_id)
                .remove(doc_key.as_str(), keyword.as_str());
        }

        self.store.apply(&batch).map_err(|e| {
            warn!(doc_id, error = %e, "remove failed");
            e
        })?;
        debug!(doc_id, keywords = keywords.len(), "removed document");
        Ok(())
    }

    /// Replace `doc_id`'s keywords with those of `content`.
    ///
    /// Runs `remove` and then `add`. If `remove` fails, `add` is not
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns the first store error from either step.
    pub fn index(&self, doc_id: &str, content: &str) -> Result<()> {
        self.remove(doc_id)?;
        self.add(doc_id, content)
    }

    /// Current keyword set of `doc_id`; empty for unknown documents.
    ///
    /// # Errors
    ///
    /// Returns the store error if the read fails.
    pub fn keywords(&self, doc_id: &str) -> Result<BTreeSet<String>> {
        let members = self.store.members(&self.namespace.doc_key(doc_id))?;
        Ok(members.into_iter().collect())
    }
}
