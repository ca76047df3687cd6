//! Tier 5: Concurrency
//!
//! Each operation is atomic at the store; composite `index` has a window in
//! which a reader can see the document absent, but never half-written.

use crate::common::*;
use rindex::{Indexer, MemoryStore};
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

fn share(indexer: Indexer<Arc<MemoryStore>>) -> Arc<Indexer<Arc<MemoryStore>>> {
    Arc::new(indexer)
}

/// Concurrent writers to distinct documents all land
#[test]
fn tier5_concurrent_adds_distinct_docs() {
    let indexer = share(shared_indexer());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let indexer = Arc::clone(&indexer);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..50 {
                    let doc = format!("t{}_{}", t, i);
                    indexer
                        .add(&doc, &format!("common thread{} item{}", t, i))
                        .unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(indexer.search("common").unwrap().len(), THREADS * 50);
    assert_eq!(indexer.search("thread3").unwrap().len(), 50);
    assert_eq!(indexer.search("common item7").unwrap().len(), THREADS);
    assert_symmetric(&indexer);
}

/// Concurrent appends to one document union together
#[test]
fn tier5_concurrent_adds_same_doc() {
    let indexer = share(shared_indexer());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let indexer = Arc::clone(&indexer);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                indexer.add("shared", &format!("word{}", t)).unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(indexer.keywords("shared").unwrap().len(), THREADS);
    assert_symmetric(&indexer);
}

/// Readers racing a re-indexing writer see either the old or new content
#[test]
fn tier5_readers_never_see_mixed_content() {
    let indexer = share(shared_indexer());
    indexer.index("doc", "old alpha").unwrap();
    let barrier = Arc::new(Barrier::new(2));

    let writer = {
        let indexer = Arc::clone(&indexer);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..200 {
                if i % 2 == 0 {
                    indexer.index("doc", "new beta").unwrap();
                } else {
                    indexer.index("doc", "old alpha").unwrap();
                }
            }
        })
    };

    let reader = {
        let indexer = Arc::clone(&indexer);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for _ in 0..200 {
                let keywords = indexer.keywords("doc").unwrap();
                let old = keywords.contains("old") || keywords.contains("alpha");
                let new = keywords.contains("new") || keywords.contains("beta");
                assert!(!(old && new), "mixed content: {:?}", keywords);
                assert!(indexer.search("old beta").unwrap().is_empty());
            }
        })
    };

    writer.join().unwrap();
    reader.join().unwrap();
    assert_eq!(indexer.keywords("doc").unwrap(), ids(&["alpha", "old"]));
    assert_symmetric(&indexer);
}

/// Removals racing additions of other documents keep the index symmetric
#[test]
fn tier5_concurrent_add_remove() {
    let indexer = share(shared_indexer());
    for i in 0..100 {
        indexer.add(&format!("r{}", i), "remove me shared").unwrap();
    }
    let barrier = Arc::new(Barrier::new(2));

    let remover = {
        let indexer = Arc::clone(&indexer);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..100 {
                indexer.remove(&format!("r{}", i)).unwrap();
            }
        })
    };
    let adder = {
        let indexer = Arc::clone(&indexer);
        let barrier = Arc::clone(&barrier);
        thread::spawn(move || {
            barrier.wait();
            for i in 0..100 {
                indexer.add(&format!("k{}", i), "keep shared").unwrap();
            }
        })
    };

    remover.join().unwrap();
    adder.join().unwrap();

    assert!(indexer.search("remove").unwrap().is_empty());
    assert_eq!(indexer.search("shared").unwrap().len(), 100);
    assert_eq!(indexer.search("keep").unwrap().len(), 100);
    assert_symmetric(&indexer);
}
