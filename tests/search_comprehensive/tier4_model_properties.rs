//! Tier 4: Model-Based Properties
//!
//! Random sequences of add/remove/index are applied both to an `Indexer`
//! and to a `ReferenceIndex`; every query must agree with the model and the
//! stored index must stay symmetric.

use crate::common::*;
use proptest::prelude::*;
use rindex::testing::{check_symmetry, ReferenceIndex};
use rindex::{tokenize, Indexer, MemoryStore};

const VOCABULARY: &[&str] = &[
    "cat", "catalog", "dog", "Dogma", "world", "hooray", "世界", "美好", "a", "ab",
];

#[derive(Debug, Clone)]
enum Op {
    Add(u8, String),
    Remove(u8),
    Index(u8, String),
}

fn content() -> impl Strategy<Value = String> {
    let separators = prop::sample::select(vec![" ", ", ", "! ", "。", "  "]);
    prop::collection::vec((prop::sample::select(VOCABULARY), separators), 0..5).prop_map(
        |parts| {
            parts
                .into_iter()
                .map(|(word, sep)| format!("{}{}", word, sep))
                .collect()
        },
    )
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0u8..5, content()).prop_map(|(d, c)| Op::Add(d, c)),
        1 => (0u8..5).prop_map(Op::Remove),
        2 => (0u8..5, content()).prop_map(|(d, c)| Op::Index(d, c)),
    ]
}

fn apply(indexer: &Indexer<MemoryStore>, model: &mut ReferenceIndex, op: &Op) {
    match op {
        Op::Add(doc, text) => {
            let doc = doc.to_string();
            indexer.add(&doc, text).unwrap();
            model.add(&doc, tokenize(text));
        }
        Op::Remove(doc) => {
            let doc = doc.to_string();
            indexer.remove(&doc).unwrap();
            model.remove(&doc);
        }
        Op::Index(doc, text) => {
            let doc = doc.to_string();
            indexer.index(&doc, text).unwrap();
            model.replace(&doc, tokenize(text));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tier4_index_matches_model(
        ops in prop::collection::vec(op(), 1..30),
        scan_count in 1usize..8,
    ) {
        let indexer = memory_indexer_with_scan_count(scan_count);
        let mut model = ReferenceIndex::new();
        for op in &ops {
            apply(&indexer, &mut model, op);
        }

        // Replayed operations, shown with any failure
        let history = model.operations();
        prop_assert_eq!(history.len(), ops.len());

        let violations = check_symmetry(indexer.store(), indexer.namespace(), scan_count).unwrap();
        prop_assert!(violations.is_empty(), "{:?}\nafter {:#?}", violations, history);

        for doc in 0u8..5 {
            let doc = doc.to_string();
            prop_assert_eq!(
                indexer.keywords(&doc).unwrap(),
                model.keywords(&doc),
                "doc {} after {:#?}",
                doc,
                history
            );
        }

        for word in VOCABULARY {
            let keyword = word.to_lowercase();
            prop_assert_eq!(
                indexer.search(word).unwrap(),
                model.search([keyword.as_str()]),
                "search {:?} after {:#?}",
                word,
                history
            );
        }

        prop_assert_eq!(
            indexer.search("cat dog").unwrap(),
            model.search(["cat", "dog"]),
            "after {:#?}",
            history
        );

        for prefix in ["c", "cat", "d", "a", "世", "x"] {
            let matched: std::collections::BTreeSet<String> =
                indexer.match_prefix(prefix).unwrap().into_iter().collect();
            prop_assert_eq!(
                matched,
                model.keywords_with_prefix(prefix),
                "prefix {:?} after {:#?}",
                prefix,
                history
            );
        }
    }

    /// Search results are independent of keyword order
    #[test]
    fn tier4_query_order_irrelevant(
        words in prop::collection::vec(prop::sample::select(VOCABULARY), 1..4),
    ) {
        let indexer = memory_indexer();
        indexer.add("1", "cat dog world").unwrap();
        indexer.add("2", "cat catalog 世界").unwrap();
        indexer.add("3", "hooray world a ab").unwrap();

        let forward = words.join(" ");
        let backward: Vec<&str> = words.iter().rev().copied().collect();
        prop_assert_eq!(
            indexer.search(&forward).unwrap(),
            indexer.search(&backward.join(" ")).unwrap()
        );
    }
}
