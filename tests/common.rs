#![allow(dead_code)]

use bucket_maps::{hash_function_1, hash_function_2, ChainingMap, HashFunction, OpenAddressingMap};

const HASH_FUNCTIONS: [HashFunction; 2] = [hash_function_1, hash_function_2];

// Run the test on an open addressing map with each reference hash function.
pub fn with_open_addressing<V>(capacity: usize, mut test: impl FnMut(OpenAddressingMap<V>)) {
    for hash_function in HASH_FUNCTIONS {
        test(OpenAddressingMap::new(capacity, hash_function));
    }
}

// Run the test on a chaining map with each reference hash function.
pub fn with_chaining<V>(capacity: usize, mut test: impl FnMut(ChainingMap<V>)) {
    for hash_function in HASH_FUNCTIONS {
        test(ChainingMap::new(capacity, hash_function));
    }
}
