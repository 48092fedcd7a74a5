extern crate std;

use core::cmp::Ordering;
use core::hash::BuildHasher;
use std::{format, string::String, vec, vec::Vec};

use hashbrown::{DefaultHashBuilder, HashSet};

use crate::linked_list::forward::list::ForwardList;

fn collect<T: Clone>(list: &ForwardList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_clone_is_equal_and_independent() {
    let original = ForwardList::from([1, 2, 3]);
    let mut copy = original.clone();
    assert_eq!(copy, original);
    assert_eq!(copy.len(), 3);

    copy.push_front(9);
    assert_eq!(collect(&copy), vec![9, 1, 2, 3]);
    assert_eq!(collect(&original), vec![1, 2, 3]);
    assert_ne!(copy, original);
}

#[test]
fn test_clone_empty() {
    let original = ForwardList::<String>::new();
    let copy = original.clone();
    assert!(copy.is_empty());
    assert!(copy.begin() == copy.end());
}

#[test]
fn test_clone_from_replaces_contents() {
    let source = ForwardList::from([String::from("a"), String::from("b")]);
    let mut target: ForwardList<String> = (0..5).map(|_| String::from("x")).collect();
    target.clone_from(&source);
    assert_eq!(target, source);
    assert_eq!(target.len(), 2);

    target.clone_from(&ForwardList::new());
    assert!(target.is_empty());
}

#[test]
fn test_clone_from_keeps_target_when_clone_panics() {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[derive(Debug, PartialEq)]
    struct Fragile(u32);

    impl Clone for Fragile {
        fn clone(&self) -> Self {
            if self.0 == 2 {
                panic!("clone failed");
            }
            Fragile(self.0)
        }
    }

    let source = ForwardList::from([Fragile(1), Fragile(2), Fragile(3)]);
    let mut target = ForwardList::from([Fragile(7)]);

    let result = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(result.is_err());
    assert_eq!(target.len(), 1);
    assert_eq!(target.front(), Some(&Fragile(7)));
}

#[test]
fn test_equality() {
    assert_eq!(ForwardList::from([1, 2, 3]), ForwardList::from([1, 2, 3]));
    assert_ne!(ForwardList::from([1, 2, 3]), ForwardList::from([1, 2]));
    assert_ne!(ForwardList::from([1, 2, 3]), ForwardList::from([1, 2, 4]));
    assert_eq!(ForwardList::<i32>::new(), ForwardList::new());
}

#[test]
fn test_ordering() {
    let short = ForwardList::from([1, 2]);
    let long = ForwardList::from([1, 2, 3]);
    assert!(short < long);
    assert!(long > short);
    assert!(short <= long);
    assert!(long >= short);
    assert_eq!(short.cmp(&long), Ordering::Less);

    let same = ForwardList::from([1, 2, 3]);
    assert!(long <= same);
    assert!(long >= same);
    assert_eq!(long.cmp(&same), Ordering::Equal);

    assert!(ForwardList::from([2]) > ForwardList::from([1, 9]));
    assert!(ForwardList::new() < ForwardList::from([0]));
}

#[test]
fn test_partial_ordering_with_nan() {
    let a = ForwardList::from([1.0, f64::NAN]);
    let b = ForwardList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b));
    assert!(ForwardList::from([0.5]) < ForwardList::from([1.0, f64::NAN]));
}

#[test]
fn test_hash_matches_equality() {
    let hasher = DefaultHashBuilder::default();
    let a = ForwardList::from([1, 2, 3]);
    let b: ForwardList<i32> = (1..=3).collect();
    assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(ForwardList::from([3, 2, 1]));
    set.insert(ForwardList::new());
    assert_eq!(set.len(), 3);
    assert!(set.contains(&ForwardList::from([1, 2, 3])));
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", ForwardList::from([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(format!("{:?}", ForwardList::<u8>::new()), "[]");
}
