//! Key naming for the index namespace
//!
//! Every key written by the index lives under a configurable prefix so that
//! several logical indexes can share one store:
//!
//! - Posting sets: `<prefix>kw:<keyword>`
//! - Document keyword sets: `<prefix>doc:<doc_id>`

/// Default namespace prefix
pub const DEFAULT_KEY_PREFIX: &str = "ri:";

const KEYWORD_TAG: &str = "kw:";
const DOC_TAG: &str = "doc:";

/// Characters with special meaning in a glob-style scan pattern
const GLOB_META: &[char] = &['*', '?', '[', ']', '\\'];

/// Builds and parses the keys of one logical index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyNamespace {
    prefix: String,
}

impl KeyNamespace {
    /// Create a namespace with the given prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The raw prefix shared by every key of this namespace
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Key of the posting set for `keyword`
    pub fn keyword_key(&self, keyword: &str) -> String {
        format!("{}{}{}", self.prefix, KEYWORD_TAG, keyword)
    }

    /// Key of the keyword set for `doc_id`
    pub fn doc_key(&self, doc_id: &str) -> String {
        format!("{}{}{}", self.prefix, DOC_TAG, doc_id)
    }

    /// Glob pattern matching every posting-set key whose keyword starts with
    /// `keyword_prefix`.
    ///
    /// Both the namespace prefix and the keyword prefix are escaped, so a
    /// `*` typed by a user matches a literal `*`.
    pub fn keyword_pattern(&self, keyword_prefix: &str) -> String {
        let mut pattern = escape_glob(&self.prefix);
        pattern.push_str(KEYWORD_TAG);
        pattern.push_str(&escape_glob(keyword_prefix));
        pattern.push('*');
        pattern
    }

    /// Glob pattern matching every key of this namespace
    pub fn all_keys_pattern(&self) -> String {
        let mut pattern = escape_glob(&self.prefix);
        pattern.push('*');
        pattern
    }

    /// Recover the bare keyword from a posting-set key.
    ///
    /// Returns `None` for keys outside this namespace's `kw:` space.
    pub fn keyword_from_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.prefix.as_str())?
            .strip_prefix(KEYWORD_TAG)
    }

    /// Recover the document ID from a document-keyword-set key.
    pub fn doc_from_key<'a>(&self, key: &'a str) -> Option<&'a str> {
        key.strip_prefix(self.prefix.as_str())?.strip_prefix(DOC_TAG)
    }
}

impl Default for KeyNamespace {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX)
    }
}

/// Escape glob metacharacters with a backslash
pub fn escape_glob(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if GLOB_META.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
