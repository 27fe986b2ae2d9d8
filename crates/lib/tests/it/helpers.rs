use vbcompat::{Collection, Error, collection::CollectionError, math::MathError};

// ==========================
// CORE TEST FACTORIES
// ==========================

/// Creates a collection with keys `k1..=kN` holding values `1..=N` in order.
pub fn numbered_collection(count: usize) -> Collection<usize> {
    let mut col = Collection::with_capacity(count);
    for i in 1..=count {
        col.add(format!("k{i}").as_str(), i).expect("Failed to add entry");
    }
    col
}

/// Builds a collection from `(key, value)` pairs, panicking on a repeated key.
pub fn collection_from<V>(entries: &[(&str, V)]) -> Collection<V>
where
    V: Clone,
{
    let mut col = Collection::new();
    for (key, value) in entries {
        col.add(*key, value.clone()).expect("Failed to add entry");
    }
    col
}

// ==========================
// ASSERTIONS
// ==========================

/// Returns the keys of a collection as plain strings, with `"<none>"` for keyless entries.
pub fn key_names<V>(col: &Collection<V>) -> Vec<String> {
    col.keys()
        .into_iter()
        .map(|key| key.unwrap_or_else(|| "<none>".to_string()))
        .collect()
}

/// Asserts the collection holds exactly these keys, in this order.
pub fn assert_key_order<V>(col: &Collection<V>, expected: &[&str]) {
    assert_eq!(key_names(col), expected, "Unexpected key order");
}

/// Unwraps a collection error, panicking on success or on another kind of error.
#[track_caller]
pub fn expect_collection_error<T: std::fmt::Debug>(
    result: vbcompat::Result<T>,
) -> CollectionError {
    match result {
        Err(Error::Collection(err)) => err,
        other => panic!("Expected a collection error, got {other:?}"),
    }
}

/// Unwraps a math error, panicking on success or on another kind of error.
#[track_caller]
pub fn expect_math_error<T: std::fmt::Debug>(result: vbcompat::Result<T>) -> MathError {
    match result {
        Err(Error::Math(err)) => err,
        other => panic!("Expected a math error, got {other:?}"),
    }
}
