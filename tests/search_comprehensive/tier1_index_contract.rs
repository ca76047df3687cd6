//! Tier 1: Index Contract
//!
//! add appends, index replaces, remove is idempotent, and the forward and
//! reverse sets stay mirror images of each other.

use crate::common::*;

/// The document lifecycle: index, re-index, index another, remove
#[test]
fn tier1_document_lifecycle() {
    let indexer = memory_indexer();

    indexer.index("001", "hello world!").unwrap();
    assert_eq!(indexer.search("hello").unwrap(), ids(&["001"]));
    assert!(indexer.search("halo").unwrap().is_empty());

    indexer.index("001", "halo world!").unwrap();
    assert_eq!(indexer.search("halo").unwrap(), ids(&["001"]));
    assert!(indexer.search("hello").unwrap().is_empty());

    indexer.index("002", "hooray world!").unwrap();
    assert_eq!(indexer.search("world").unwrap(), ids(&["001", "002"]));
    assert_eq!(indexer.search("hooray").unwrap(), ids(&["002"]));

    indexer.remove("001").unwrap();
    assert!(indexer.search("halo").unwrap().is_empty());
    assert_eq!(indexer.search("world").unwrap(), ids(&["002"]));
    assert_symmetric(&indexer);
}

/// add unions new keywords into an existing document
#[test]
fn tier1_add_appends() {
    let indexer = memory_indexer();
    indexer.add("004", "Awesome...world").unwrap();
    assert_eq!(indexer.search("awesome").unwrap(), ids(&["004"]));

    indexer.add("004", "something awful").unwrap();
    assert_eq!(indexer.search("awesome awful").unwrap(), ids(&["004"]));
    assert_eq!(
        indexer.keywords("004").unwrap(),
        ids(&["awesome", "awful", "something", "world"])
    );
}

/// index discards every keyword from the previous content
#[test]
fn tier1_index_replaces() {
    let indexer = memory_indexer();
    indexer.index("D", "a b").unwrap();
    indexer.index("D", "c").unwrap();
    assert!(indexer.search("a").unwrap().is_empty());
    assert!(indexer.search("b").unwrap().is_empty());
    assert_eq!(indexer.search("c").unwrap(), ids(&["D"]));

    let appended = memory_indexer();
    appended.add("D", "a b").unwrap();
    appended.add("D", "c").unwrap();
    assert_eq!(appended.search("a").unwrap(), ids(&["D"]));
    assert_eq!(appended.search("c").unwrap(), ids(&["D"]));
}

/// Removing a missing or already removed document succeeds
#[test]
fn tier1_remove_is_idempotent() {
    let indexer = memory_indexer();
    indexer.add("001", "kept words").unwrap();

    indexer.remove("005").unwrap();
    indexer.remove("005").unwrap();
    assert_eq!(indexer.search("kept").unwrap(), ids(&["001"]));

    indexer.remove("001").unwrap();
    indexer.remove("001").unwrap();
    assert!(indexer.search("kept").unwrap().is_empty());
    assert!(indexer.keywords("001").unwrap().is_empty());
    assert!(indexer.store().is_empty());
}

/// Re-adding the same content changes nothing
#[test]
fn tier1_add_is_idempotent() {
    let indexer = memory_indexer();
    indexer.add("1", "same same words").unwrap();
    let before = indexer.keywords("1").unwrap();
    let key_count = indexer.store().key_count();

    indexer.add("1", "words same").unwrap();
    assert_eq!(indexer.keywords("1").unwrap(), before);
    assert_eq!(indexer.store().key_count(), key_count);
}

/// Keywords shared by several documents survive removal of one of them
#[test]
fn tier1_shared_keywords_survive_removal() {
    let indexer = memory_indexer();
    indexer.add("a", "shared alpha").unwrap();
    indexer.add("b", "shared beta").unwrap();

    indexer.remove("a").unwrap();
    assert_eq!(indexer.search("shared").unwrap(), ids(&["b"]));
    assert!(indexer.search("alpha").unwrap().is_empty());
    assert_eq!(sorted(indexer.match_prefix("s").unwrap()), vec!["shared"]);
    assert_symmetric(&indexer);
}

/// Content with no keywords leaves the index untouched
#[test]
fn tier1_keywordless_content() {
    let indexer = memory_indexer();
    indexer.add("1", "! - ,   ").unwrap();
    assert!(indexer.store().is_empty());

    indexer.add("2", "words").unwrap();
    indexer.index("2", "   ").unwrap();
    assert!(indexer.keywords("2").unwrap().is_empty());
    assert!(indexer.search("words").unwrap().is_empty());
    assert!(indexer.store().is_empty());
}
