//! Glob-style pattern matching for key scans
//!
//! Supports the subset used by Redis `SCAN MATCH`:
//! - `*` any run of characters (including none)
//! - `?` exactly one character
//! - `[abc]`, `[a-z]`, `[^a-z]` character classes
//! - `\x` the literal character `x`
//!
//! A glob is translated once into an anchored `regex::Regex` and then
//! matched against every scanned key. Unterminated classes and a trailing
//! `\` are literal, as in Redis.

use regex::Regex;
use rindex_core::{Error, Result};

/// A compiled scan pattern
#[derive(Debug, Clone)]
pub struct GlobPattern {
    glob: String,
    /// `None` for globs that can match nothing (an empty `[]` class)
    regex: Option<Regex>,
}

impl GlobPattern {
    /// Compile `glob`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the translated pattern is rejected by the
    /// regex engine (for example because it is too large).
    pub fn new(glob: &str) -> Result<Self> {
        let regex = glob_to_regex(glob)
            .map(|source| Regex::new(&source))
            .transpose()
            .map_err(|e| Error::store(format!("Invalid scan pattern {:?}: {}", glob, e)))?;
        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    /// The source glob
    pub fn as_str(&self) -> &str {
        &self.glob
    }

    /// True if `text` matches the whole pattern
    pub fn matches(&self, text: &str) -> bool {
        self.regex.as_ref().map_or(false, |regex| regex.is_match(text))
    }
}

/// True if `text` matches the glob `pattern` in full.
///
/// Compiles the pattern on every call; use `GlobPattern` to match many keys.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    GlobPattern::new(pattern).map_or(false, |glob| glob.matches(text))
}

/// Translate a glob into an anchored regex source; `None` if nothing can match
fn glob_to_regex(glob: &str) -> Option<String> {
    let p: Vec<char> = glob.chars().collect();
    // `(?s)` lets `.` match newlines in keys
    let mut out = String::from("(?s)^");
    let mut i = 0;
    while i < p.len() {
        match p[i] {
            '*' => {
                out.push_str(".*");
                i += 1;
            }
            '?' => {
                out.push('.');
                i += 1;
            }
            '\\' if i + 1 < p.len() => {
                push_literal(&mut out, p[i + 1]);
                i += 2;
            }
            '[' => match translate_class(&p, i) {
                Some((class, next)) => {
                    out.push_str(&class?);
                    i = next;
                }
                None => {
                    push_literal(&mut out, '[');
                    i += 1;
                }
            },
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }
    out.push('$');
    Some(out)
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Translate the class starting at `p[start] == '['`.
///
/// Returns the regex class (`None` for the empty class `[]`, which matches
/// nothing) and the index just past the closing `]`, or `None` if the class
/// is never closed.
fn translate_class(p: &[char], start: usize) -> Option<(Option<String>, usize)> {
    let mut i = start + 1;
    let negate = p.get(i) == Some(&'^');
    if negate {
        i += 1;
    }

    let mut body = String::new();
    loop {
        let ch = *p.get(i)?;
        match ch {
            ']' => break,
            '\\' => {
                push_literal(&mut body, *p.get(i + 1)?);
                i += 2;
            }
            _ if p.get(i + 1) == Some(&'-') && p.get(i + 2).map_or(false, |&e| e != ']') => {
                let end = p[i + 2];
                let (lo, hi) = if ch <= end { (ch, end) } else { (end, ch) };
                push_literal(&mut body, lo);
                body.push('-');
                push_literal(&mut body, hi);
                i += 3;
            }
            _ => {
                push_literal(&mut body, ch);
                i += 1;
            }
        }
    }

    let class = match (body.is_empty(), negate) {
        (true, false) => None,
        (true, true) => Some(".".to_string()),
        (false, false) => Some(format!("[{}]", body)),
        (false, true) => Some(format!("[^{}]", body)),
    };
    Some((class, i + 1))
}
