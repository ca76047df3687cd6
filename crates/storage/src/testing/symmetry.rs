//! Symmetry checker for a stored index
//!
//! Walks every key of a namespace and verifies that posting sets and
//! document keyword sets mirror each other:
//! `K ∈ DocKeywords(D) ⟺ D ∈ PostingSet(K)`.

use rindex_core::{KeyNamespace, Result, ScanCursor, SetStore};
use std::collections::HashSet;
use std::fmt;

/// One broken half of a keyword/document link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymmetryViolation {
    /// `doc_id` is in `keyword`'s posting set but the document's keyword set
    /// lacks `keyword`
    MissingFromDocument {
        /// Keyword whose posting set holds the document
        keyword: String,
        /// Document ID
        doc_id: String,
    },
    /// `keyword` is in `doc_id`'s keyword set but the keyword's posting set
    /// lacks `doc_id`
    MissingFromPosting {
        /// Document ID
        doc_id: String,
        /// Keyword listed by the document
        keyword: String,
    },
}

impl fmt::Display for SymmetryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymmetryViolation::MissingFromDocument { keyword, doc_id } => write!(
                f,
                "posting set of '{}' lists '{}' but the document does not list the keyword",
                keyword, doc_id
            ),
            SymmetryViolation::MissingFromPosting { doc_id, keyword } => write!(
                f,
                "document '{}' lists '{}' but the keyword's posting set does not list it",
                doc_id, keyword
            ),
        }
    }
}

/// Scan `namespace` in `store` and report every symmetry violation.
///
/// An empty result means the stored index is consistent.
///
/// # Errors
///
/// Returns the first store error encountered.
pub fn check_symmetry<S: SetStore + ?Sized>(
    store: &S,
    namespace: &KeyNamespace,
    scan_count: usize,
) -> Result<Vec<SymmetryViolation>> {
    let pattern = namespace.all_keys_pattern();
    let mut keys = Vec::new();
    let mut cursor = ScanCursor::START;
    loop {
        let page = store.scan(cursor, &pattern, scan_count)?;
        keys.extend(page.keys);
        if page.cursor.is_exhausted() {
            break;
        }
        cursor = page.cursor;
    }

    let mut violations = Vec::new();
    let mut seen = HashSet::new();
    for key in &keys {
        if !seen.insert(key.as_str()) {
            continue;
        }
        if let Some(keyword) = namespace.keyword_from_key(key) {
            for doc_id in store.members(key)? {
                let doc_keywords = store.members(&namespace.doc_key(&doc_id))?;
                if !doc_keywords.iter().any(|k| k == keyword) {
                    violations.push(SymmetryViolation::MissingFromDocument {
                        keyword: keyword.to_string(),
                        doc_id,
                    });
                }
            }
        } else if let Some(doc_id) = namespace.doc_from_key(key) {
            for keyword in store.members(key)? {
                let posting = store.members(&namespace.keyword_key(&keyword))?;
                if !posting.iter().any(|d| d == doc_id) {
                    violations.push(SymmetryViolation::MissingFromPosting {
                        doc_id: doc_id.to_string(),
                        keyword,
                    });
                }
            }
        }
    }

    Ok(violations)
}
