//! Queries
//!
//! - `search`: documents containing every keyword of the query (AND)
//! - `match_prefix`: known keywords starting with a prefix, found by a
//!   cursor scan over the posting-set keys
//!
//! # Prefix scan state machine
//!
//! ```text
//!            page, cursor != START
//!              ┌──────────┐
//!              ▼          │
//! START ──► Scanning ─────┘
//!              │  page, cursor == START
//!              ├────────────────────────► Done   (keywords returned)
//!              │  store error
//!              └────────────────────────► Failed (error returned, partial keywords dropped)
//! ```

use rindex_core::{KeyNamespace, Result, ScanCursor, SetStore};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, trace, warn};

use crate::config::PrefixMode;
use crate::indexer::Indexer;
use crate::tokenizer::tokenize_unique;

impl<S: SetStore> Indexer<S> {
    /// Documents containing every keyword of `query`.
    ///
    /// Keyword order and repetition in the query do not matter. A query
    /// without keywords returns an empty set without contacting the store.
    /// The result is a set; its iteration order carries no meaning.
    ///
    /// # Errors
    ///
    /// Returns the store error if the intersection fails.
    pub fn search(&self, query: &str) -> Result<BTreeSet<String>> {
        let keywords = tokenize_unique(query);
        if keywords.is_empty() {
            return Ok(BTreeSet::new());
        }

        let keys: Vec<String> = keywords
            .iter()
            .map(|keyword| self.namespace.keyword_key(keyword))
            .collect();
        let docs = self.store.intersect(&keys).map_err(|e| {
            warn!(keywords = keys.len(), error = %e, "search failed");
            e
        })?;
        debug!(keywords = keys.len(), hits = docs.len(), "search");
        Ok(docs.into_iter().collect())
    }

    /// Known keywords that start with `query`.
    ///
    /// In `PrefixMode::Literal` (the default) the input is trimmed and
    /// lowercased and used as a single prefix: internal spaces and
    /// punctuation are part of it. In `PrefixMode::Tokenized` the input is
    /// tokenized and every token is matched as a prefix.
    ///
    /// Empty or whitespace-only input returns no keywords without contacting
    /// the store. Each keyword is reported once, in the order the store
    /// yields it.
    ///
    /// # Errors
    ///
    /// Returns the first store error; keywords collected before the error are
    /// discarded.
    pub fn match_prefix(&self, query: &str) -> Result<Vec<String>> {
        match self.config.prefix_mode {
            PrefixMode::Literal => {
                let prefix = query.trim().to_lowercase();
                if prefix.is_empty() {
                    return Ok(Vec::new());
                }
                self.scan_prefix(&prefix)
            }
            PrefixMode::Tokenized => {
                let mut matched = Vec::new();
                let mut seen = HashSet::new();
                for token in tokenize_unique(query) {
                    for keyword in self.scan_prefix(&token)? {
                        if seen.insert(keyword.clone()) {
                            matched.push(keyword);
                        }
                    }
                }
                Ok(matched)
            }
        }
    }

    fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        PrefixScan::new(&self.store, &self.namespace, prefix, self.config.scan_count).run()
    }
}

/// Where a `PrefixScan` stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// More pages to fetch, starting at this cursor
    Scanning(ScanCursor),
    /// The store returned the terminal cursor
    Done,
    /// A store call failed; collected keywords were dropped
    Failed,
}

/// Cursor-driven scan for keywords beginning with a prefix.
///
/// Drive it page by page with [`step`](PrefixScan::step) or to completion
/// with [`run`](PrefixScan::run). A page with no keys never ends the scan;
/// only the terminal cursor does.
pub struct PrefixScan<'a, S: ?Sized> {
    store: &'a S,
    namespace: &'a KeyNamespace,
    pattern: String,
    count: usize,
    state: ScanState,
    keywords: Vec<String>,
    seen: HashSet<String>,
    rounds: usize,
}

impl<'a, S: SetStore + ?Sized> PrefixScan<'a, S> {
    /// Prepare a scan for keywords starting with `prefix` (used literally)
    pub fn new(store: &'a S, namespace: &'a KeyNamespace, prefix: &str, count: usize) -> Self {
        Self {
            store,
            namespace,
            pattern: namespace.keyword_pattern(prefix),
            count,
            state: ScanState::Scanning(ScanCursor::START),
            keywords: Vec::new(),
            seen: HashSet::new(),
            rounds: 0,
        }
    }

    /// Current state
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Store round trips made so far
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Keywords collected so far
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Fetch one page and return the new state.
    ///
    /// Calling `step` on a finished scan returns its final state without
    /// contacting the store.
    ///
    /// # Errors
    ///
    /// Returns the store error and moves to `ScanState::Failed`.
    pub fn step(&mut self) -> Result<ScanState> {
        let cursor = match self.state {
            ScanState::Scanning(cursor) => cursor,
            finished => return Ok(finished),
        };

        self.rounds += 1;
        let page = match self.store.scan(cursor, &self.pattern, self.count) {
            Ok(page) => page,
            Err(e) => {
                warn!(pattern = %self.pattern, rounds = self.rounds, error = %e, "prefix scan failed");
                self.state = ScanState::Failed;
                self.keywords.clear();
                self.seen.clear();
                return Err(e);
            }
        };

        for key in page.keys {
            match self.namespace.keyword_from_key(&key) {
                Some(keyword) => {
                    if self.seen.insert(keyword.to_string()) {
                        self.keywords.push(keyword.to_string());
                    }
                }
                None => trace!(key = %key, "scan returned key outside keyword space"),
            }
        }

        self.state = if page.cursor.is_exhausted() {
            ScanState::Done
        } else {
            ScanState::Scanning(page.cursor)
        };
        Ok(self.state)
    }

    /// Scan to completion and return the matched keywords.
    ///
    /// # Errors
    ///
    /// Returns the first store error; no keywords are returned in that case.
    pub fn run(mut self) -> Result<Vec<String>> {
        while let ScanState::Scanning(_) = self.step()? {}
        debug!(
            pattern = %self.pattern,
            rounds = self.rounds,
            matches = self.keywords.len(),
            "prefix scan complete"
        );
        Ok(self.keywords)
    }
}
