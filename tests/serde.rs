#![cfg(feature = "serde")]

use bucket_maps::{hash_function_2, ChainingMap, OpenAddressingMap};

#[test]
fn open_addressing_round_trip() {
    let mut map: OpenAddressingMap<u32> = OpenAddressingMap::new(11, hash_function_2);
    map.put("a", 1);
    map.put("b", 2);
    map.put("c", 3);
    map.remove("b");

    let json: String = serde_json::to_string(&map).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, serde_json::json!({ "a": 1, "c": 3 }));

    let back: OpenAddressingMap<u32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.size(), 2);
    assert_eq!(back.capacity(), 4);
    assert_eq!(back.get("a"), Some(&1));
    assert_eq!(back.get("c"), Some(&3));
    assert!(!back.contains_key("b"));
}

#[test]
fn chaining_from_json() {
    let map: ChainingMap<String> =
        serde_json::from_str(r#"{ "x": "one", "y": "two", "z": "three" }"#).unwrap();
    assert_eq!(map.size(), 3);
    assert_eq!(map.capacity(), 6);
    assert_eq!(map.get("y").map(String::as_str), Some("two"));
}

#[test]
fn empty_maps_deserialize_with_one_bucket() {
    let map: ChainingMap<u32> = serde_json::from_str("{}").unwrap();
    assert_eq!(map.capacity(), 1);
    assert!(map.is_empty());
}

#[test]
fn large_maps_deserialize() {
    let mut expected: std::collections::BTreeMap<String, usize> = Default::default();
    for i in 0..5000 {
        expected.insert(format!("key{}", i), i);
    }
    let json: String = serde_json::to_string(&expected).unwrap();

    let map: OpenAddressingMap<usize> = serde_json::from_str(&json).unwrap();
    assert_eq!(map.size(), 5000);
    assert!(map.capacity() >= 10000);
    for (key, value) in &expected {
        assert_eq!(map.get(key), Some(value));
    }
}
