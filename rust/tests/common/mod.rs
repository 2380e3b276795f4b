#![allow(dead_code)]

use simplelog::{Config, LevelFilter, TestLogger};

use ordkit::RedBlackTree;

pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

/// Fail with the checker's report rather than a bare `false`.
pub fn assert_invariants<K: Ord, V>(tree: &RedBlackTree<K, V>) {
    if let Err(e) = tree.check_invariants_detailed() {
        panic!("invariant check failed: {}", e);
    }
}
