//! Tests for copies, snapshots, and iteration order.

use crate::helpers::*;
use vbcompat::collection::Placement;

#[test]
fn test_keys_copy_unaffected_by_mutation() {
    let mut col = numbered_collection(3);
    let keys = col.keys();
    let values = col.values();

    col.add("k4", 4).unwrap();
    col.remove_key("k1");
    col.insert("k0", 0, Placement::after(0usize)).unwrap();

    assert_eq!(keys.len(), 3);
    assert_eq!(keys[0].as_deref(), Some("k1"));
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_mutate_while_walking_snapshot() {
    let mut col = numbered_collection(4);
    for value in col.snapshot() {
        if value % 2 == 0 {
            col.remove_key(&format!("k{value}"));
        }
    }
    assert_key_order(&col, &["k1", "k3"]);
}

#[test]
fn test_snapshot_is_restartable() {
    let col = numbered_collection(3);
    let first: Vec<usize> = col.snapshot().collect();
    let second: Vec<usize> = col.snapshot().rev().collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![3, 2, 1]);
}

#[test]
fn test_iteration_follows_rearranged_order() {
    let mut col = numbered_collection(3);
    col.remove_key("k1");
    col.add("k1", 1).unwrap();

    let values: Vec<usize> = col.iter().copied().collect();
    assert_eq!(values, vec![2, 3, 1]);

    let mut seen = Vec::new();
    for value in &col {
        seen.push(*value);
    }
    assert_eq!(seen, values);

    let entries: Vec<(Option<&str>, usize)> = col.entries().map(|(k, v)| (k, *v)).collect();
    assert_eq!(entries[2], (Some("k1"), 1));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_round_trip_keeps_order() {
    let mut col = numbered_collection(2);
    col.insert(None, 0, Placement::after(0usize)).unwrap();

    let json = serde_json::to_string(&col).expect("Failed to serialize");
    let back: vbcompat::Collection<usize> =
        serde_json::from_str(&json).expect("Failed to deserialize");
    assert_eq!(back, col);
}
