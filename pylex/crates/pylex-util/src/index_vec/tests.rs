//! Tests for the IndexVec module.

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TestId(u32);

impl Idx for TestId {
    fn from_usize(idx: usize) -> Self {
        assert!(idx <= u32::MAX as usize);
        TestId(idx as u32)
    }

    fn index(self) -> usize {
        self.0 as usize
    }
}

#[test]
fn test_new_and_empty() {
    let vec: IndexVec<TestId, i32> = IndexVec::new();
    assert!(vec.is_empty());
    assert_eq!(vec.len(), 0);
}

#[test]
fn test_push_and_index() {
    let mut vec: IndexVec<TestId, i32> = IndexVec::new();
    let idx1 = vec.push(10);
    let idx2 = vec.push(20);

    assert_eq!(idx1, TestId(0));
    assert_eq!(idx2, TestId(1));
    assert_eq!(vec[idx1], 10);
    assert_eq!(vec[idx2], 20);
}

#[test]
fn test_index_mut_trait() {
    let mut vec: IndexVec<TestId, Vec<u8>> = IndexVec::new();
    let idx = vec.push(Vec::new());
    vec[idx].push(b'a');
    assert_eq!(vec[idx], b"a".to_vec());
}

#[test]
fn test_iter_enumerated() {
    let vec: IndexVec<TestId, char> = "abc".chars().collect();
    let pairs: Vec<_> = vec.iter_enumerated().map(|(i, c)| (i, *c)).collect();
    assert_eq!(pairs, vec![(TestId(0), 'a'), (TestId(1), 'b'), (TestId(2), 'c')]);
}

#[test]
fn test_collect_numbers_from_zero() {
    let vec: IndexVec<TestId, u8> = vec![7, 8].into_iter().collect();
    assert_eq!(vec.len(), 2);
    assert_eq!(vec[TestId(1)], 8);
}

#[test]
#[should_panic]
fn test_index_out_of_bounds() {
    let vec: IndexVec<TestId, i32> = IndexVec::new();
    let _value = vec[TestId(0)];
}

#[test]
fn test_define_idx_macro() {
    crate::define_idx!(NodeId);

    let mut vec: IndexVec<NodeId, &str> = IndexVec::new();
    let id = vec.push("node");
    assert_eq!(id, NodeId(0));
    assert_eq!(vec[id], "node");
    assert!(NodeId(1) > NodeId(0));
}

#[test]
fn test_usize_index() {
    let mut vec: IndexVec<usize, i32> = IndexVec::default();
    let idx = vec.push(5);
    assert_eq!(idx, 0);
    assert_eq!(vec[0], 5);
}
