//! Keyword tokenizer
//!
//! Pipeline: lowercase → split on the fixed delimiter set → drop empty pieces.
//!
//! The same function normalizes documents at index time and queries at
//! search time; exact-match search is only correct because both sides agree.
//! There is no stemming, stopword removal or minimum token length: every
//! non-delimiter character survives into some token.

/// Full-width and CJK punctuation treated as delimiters, plus the
/// ideographic (full-width) space.
const WIDE_DELIMITERS: &[char] = &[
    '\u{3000}', '～', '·', '！', '＠', '＃', '￥', '％', '…', '＆', '×', '－', '—', '＝', '＋',
    '、', '，', '。', '｜', '？', '《', '》', '；', '：', '｛', '｝', '（', '）', '“', '”', '‘',
    '’', '【', '】',
];

/// True if `c` separates keywords.
///
/// Delimiters are ASCII whitespace, every ASCII punctuation character
/// (`` \ ' ! " # $ % & ( ) * + , - . / : ; < = > ? @ [ ] ^ _ ` { | } ~ ``)
/// and a fixed set of full-width/CJK punctuation marks.
#[inline]
pub fn is_delimiter(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_whitespace() || c.is_ascii_punctuation()
    } else {
        WIDE_DELIMITERS.contains(&c)
    }
}

/// Tokenize text into keywords.
///
/// Order of appearance and duplicates are preserved. Empty, whitespace-only
/// and punctuation-only input yields no tokens.
///
/// # Example
///
/// ```
/// use rindex_search::tokenizer::tokenize;
///
/// assert_eq!(tokenize("I'm yours!"), vec!["i", "m", "yours"]);
/// assert!(tokenize("  ").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(is_delimiter)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Tokenize and deduplicate, keeping first-appearance order.
///
/// # Example
///
/// ```
/// use rindex_search::tokenizer::tokenize_unique;
///
/// let tokens = tokenize_unique("test test TEST");
/// assert_eq!(tokens, vec!["test"]);
/// ```
pub fn tokenize_unique(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tokenize(text)
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}
