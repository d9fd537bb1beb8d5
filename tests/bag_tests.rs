use sovran_bag::{Bag, Entries, Value};
use std::collections::HashMap;

#[test]
fn test_set_get_string() {
    let bag = Bag::new();
    bag.set("foo", "bar");

    assert_eq!(bag.get_string("foo").as_deref(), Some("bar"));
    assert_eq!(bag.get("foo"), Some(Value::String("bar".to_owned())));
}

#[test]
fn test_set_get_bool() {
    let bag = Bag::new();
    bag.set("foo", true);
    assert_eq!(bag.get_bool("foo"), Some(true));
}

#[test]
fn test_set_get_int() {
    let bag = Bag::new();
    bag.set("foo", 65535);
    assert_eq!(bag.get_int("foo"), Some(65535));
}

#[test]
fn test_set_get_bytes() {
    let bag = Bag::new();
    bag.set("blob", vec![1u8, 2, 3]);
    assert_eq!(bag.get_bytes("blob"), Some(vec![1, 2, 3]));
}

#[test]
fn test_set_get_string_map() {
    let bag = Bag::new();
    let mut headers = HashMap::new();
    headers.insert("content-type".to_owned(), "text/plain".to_owned());

    bag.set("headers", headers.clone());
    assert_eq!(bag.get_string_map("headers"), Some(headers));
}

#[test]
fn test_mixed_shapes() {
    // The scenario from the crate docs: one bag, several shapes.
    let bag = Bag::new();
    bag.set("foo", "hey, this is a string and here is a number:");
    bag.set("bar", 42);

    assert_eq!(
        bag.get_string("foo").as_deref(),
        Some("hey, this is a string and here is a number:")
    );
    assert_eq!(bag.get_int("bar"), Some(42));
}

#[test]
fn test_type_mismatch_downgrades_to_none() {
    let bag = Bag::new();
    bag.set("n", 42);

    assert_eq!(bag.get_string("n"), None);
    assert_eq!(bag.get_bool("n"), None);
    assert_eq!(bag.get_bytes("n"), None);
    assert_eq!(bag.get_string_map("n"), None);

    // The key is still there and the untyped getter still sees it.
    assert!(bag.has("n"));
    assert_eq!(bag.get("n"), Some(Value::Int(42)));
}

#[test]
fn test_absent_key() {
    let bag = Bag::new();

    assert!(!bag.has("missing"));
    assert_eq!(bag.get("missing"), None);
    assert_eq!(bag.get_string("missing"), None);
    assert_eq!(bag.get_int("missing"), None);
    assert_eq!(bag.get_bool("missing"), None);
}

#[test]
fn test_overwrite_second_write_wins() {
    let bag = Bag::new();
    bag.set("k", "a");
    bag.set("k", "b");

    assert_eq!(bag.get_string("k").as_deref(), Some("b"));
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_overwrite_may_change_shape() {
    let bag = Bag::new();
    bag.set("k", "text");
    bag.set("k", 9);

    assert_eq!(bag.get_string("k"), None);
    assert_eq!(bag.get_int("k"), Some(9));
}

#[test]
fn test_has_after_any_set() {
    let bag = Bag::new();

    bag.set("a", "s");
    bag.set("b", 1);
    bag.set("c", false);
    bag.set("d", vec![0u8]);
    bag.set("e", HashMap::<String, String>::new());

    for key in ["a", "b", "c", "d", "e"] {
        assert!(bag.has(key), "expected key {key:?} to be present");
    }
}

#[test]
fn test_from_takes_ownership_of_mapping() {
    let mut seed = Entries::new();
    seed.insert("x".to_owned(), "y".into());

    let bag = Bag::from(seed);
    assert_eq!(bag.get_string("x").as_deref(), Some("y"));
}

#[test]
fn test_entries_round_trip() {
    let b1 = Bag::new();
    b1.set("foo", "bar");

    let b2 = Bag::from(b1.entries());
    assert_eq!(b2.get_string("foo").as_deref(), Some("bar"));

    // Both bags alias the same storage.
    b2.set("baz", 7);
    assert_eq!(b1.get_int("baz"), Some(7));
}

#[test]
fn test_clone_aliases_storage() {
    let bag = Bag::new();
    let alias = bag.clone();

    alias.set("via-clone", true);
    assert_eq!(bag.get_bool("via-clone"), Some(true));
}

#[test]
fn test_snapshot_is_detached() {
    let bag = Bag::new();
    bag.set("k", "before");

    let frozen = bag.snapshot();
    bag.set("k", "after");
    bag.set("extra", 1);

    assert_eq!(frozen.len(), 1);
    assert_eq!(frozen["k"].as_str(), Some("before"));
    assert_eq!(bag.get_string("k").as_deref(), Some("after"));
}

#[test]
fn test_remove() {
    let bag = Bag::new();
    bag.set("k", 5);

    assert_eq!(bag.remove("k"), Some(Value::Int(5)));
    assert!(!bag.has("k"));
    assert_eq!(bag.remove("k"), None);
}

#[test]
fn test_len_is_empty_keys() {
    let bag = Bag::new();
    assert!(bag.is_empty());
    assert_eq!(bag.len(), 0);
    assert!(bag.keys().is_empty());

    bag.set("one", 1);
    bag.set("two", 2);

    assert!(!bag.is_empty());
    assert_eq!(bag.len(), 2);

    let mut keys = bag.keys();
    keys.sort();
    assert_eq!(keys, vec!["one".to_owned(), "two".to_owned()]);
}

#[test]
fn test_from_iterator() {
    let bag: Bag = vec![
        ("a".to_owned(), Value::from(1)),
        ("b".to_owned(), Value::from("two")),
    ]
    .into_iter()
    .collect();

    assert_eq!(bag.get_int("a"), Some(1));
    assert_eq!(bag.get_string("b").as_deref(), Some("two"));
}

#[test]
fn test_default_implementation() {
    let bag: Bag = Default::default();
    assert!(bag.is_empty());

    bag.set("test", 42);
    assert_eq!(bag.get_int("test"), Some(42));
}

#[test]
fn test_zero_values_are_still_present() {
    // "" / 0 / false are legitimate stored values; the presence flag must
    // not confuse them with absence.
    let bag = Bag::new();
    bag.set("empty", "");
    bag.set("zero", 0);
    bag.set("off", false);

    assert_eq!(bag.get_string("empty").as_deref(), Some(""));
    assert_eq!(bag.get_int("zero"), Some(0));
    assert_eq!(bag.get_bool("off"), Some(false));
}
