use std::cmp::Reverse;

use ordkit::{OrderedMap, OrderedSet};

mod common;
use common::init_logging;

fn set<const N: usize>(members: [i32; N]) -> OrderedSet<i32> {
    OrderedSet::from_members(members)
}

#[test]
fn test_insert_same_members_many_times() {
    init_logging();
    let mut s = OrderedSet::new();
    for _ in 0..1000 {
        s.insert_members([1, 2, 3]);
    }
    assert_eq!(s.count(), 3);
    assert_eq!(s.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_enumeration_strictly_increasing() {
    let s: OrderedSet<i32> = [9, -4, 17, 0, 3, 3, 12, -4, 8].into_iter().collect();
    for i in 1..s.count() {
        assert!(s[i - 1] < s[i], "{} then {}", s[i - 1], s[i]);
    }
}

#[test]
fn test_three_way_intersection() {
    init_logging();
    let s1 = set([22, 23, 1, 2, 3, 4, 5]);
    let s2 = set([22, 23, 5, 6, 7, 8, 9, 10]);
    let s3 = set([22, 23, 10, 11, 12, 13, 14, 15]);

    let expected = set([22, 23]);
    assert_eq!(s1.intersect([&s2, &s3]), expected);
    assert_eq!(s2.intersect([&s3, &s1]), expected);
    assert_eq!(s3.intersect([&s1, &s2]), expected);
}

#[test]
fn test_disjointness() {
    let s1 = set([1, 2, 3]);
    assert!(!s1.is_disjoint_with(&set([3, 4, 5])));
    assert!(s1.is_disjoint_with(&set([5, 6, 7])));
}

#[test]
fn test_union_has_no_duplicates() {
    let union = set([1, 2, 3, 4, 5]).union([&set([5, 6, 7, 8, 9])]);
    assert_eq!(union, set([1, 2, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(union.count(), 9);
}

#[test]
fn test_subtract_keeps_only_receiver_members() {
    init_logging();
    let s1 = set([1, 2, 3, 4, 5, 7, 8, 9, 10]);
    let s4 = s1.subtract([&set([4, 5, 6, 7]), &set([7, 8, 9])]);
    assert!(!s1.is_disjoint_with(&s4));
    assert_eq!(s4, set([1, 2, 3, 10]));
}

#[test]
fn test_removing_absent_member_is_noop() {
    let mut s = set([1, 2, 3]);
    assert_eq!(s.remove_members(&[1, 2]), 2);
    assert_eq!(s.count(), 1);
    assert!(!s.remove(&1));
    assert_eq!(s.count(), 1);
}

#[test]
fn test_equal_regardless_of_insertion_order() {
    let forward = set([1, 2, 3, 4, 5, 6]);
    let shuffled = set([4, 6, 1, 5, 3, 2]);
    assert_eq!(forward, shuffled);
    for i in 0..forward.count() {
        assert_eq!(forward[i], shuffled[i]);
    }
}

#[test]
fn test_in_place_variants_match_copies() {
    let a = set([1, 2, 3, 4, 5, 6]);
    let b = set([2, 4, 6, 8]);
    let c = set([4, 5, 6, 7]);

    let mut u = a.clone();
    u.union_in_place([&b, &c]);
    assert_eq!(u, a.union([&b, &c]));

    let mut i = a.clone();
    i.intersect_in_place([&b, &c]);
    assert_eq!(i, a.intersect([&b, &c]));
    assert_eq!(i, set([4, 6]));

    let mut s = a.clone();
    s.subtract_in_place([&b, &c]);
    assert_eq!(s, a.subtract([&b, &c]));
    assert_eq!(s, set([1, 3]));
}

#[test]
fn test_results_survive_source_mutation() {
    let mut a = set([1, 2, 3]);
    let b = set([3, 4]);
    let union = a.union([&b]);
    let difference = a.subtract([&b]);
    a.remove_all();
    a.insert(100);
    assert_eq!(union, set([1, 2, 3, 4]));
    assert_eq!(difference, set([1, 2]));
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Stamped {
    created: u64,
    name: &'static str,
}

#[test]
fn test_newest_first_with_reverse_keys() {
    let elements = [
        Stamped { created: 10, name: "old" },
        Stamped { created: 30, name: "new" },
        Stamped { created: 20, name: "mid" },
    ];
    let newest_first: OrderedSet<Reverse<Stamped>> =
        elements.iter().cloned().map(Reverse).collect();
    let names: Vec<_> = newest_first.iter().map(|Reverse(s)| s.name).collect();
    assert_eq!(names, vec!["new", "mid", "old"]);
}

#[test]
fn test_group_then_refine() {
    init_logging();
    let groups = OrderedMap::group_by([
        ("admin", 1),
        ("staff", 2),
        ("admin", 3),
        ("staff", 3),
        ("guest", 4),
    ]);
    assert_eq!(groups.count(), 3);

    let mut everyone = set([1, 2, 3, 4]);
    let admin = groups.get(&"admin").cloned().unwrap_or_default();
    let staff = groups.get(&"staff").cloned().unwrap_or_default();
    everyone.refine([&admin, &staff]);
    assert_eq!(everyone, set([3]));
}

#[test]
fn test_view_exposes_readers_only() {
    let s = set([5, 1, 3]);
    let view = s.view();
    assert_eq!(view.count(), 3);
    assert_eq!(view.first(), Some(&1));
    assert_eq!(view[2], 5);
    assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), vec![5, 3, 1]);
    assert_eq!(view.to_set(), s);
}
