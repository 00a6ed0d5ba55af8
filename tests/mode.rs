use bucket_maps::find_mode;

use std::collections::HashSet;

#[test]
fn two_modes() {
    let (modes, frequency) = find_mode(&["apple", "apple", "grape", "melon", "melon", "peach"]);
    let modes: HashSet<String> = modes.into_iter().collect();
    let expected: HashSet<String> = ["apple", "melon"].iter().map(|s| s.to_string()).collect();
    assert_eq!(modes, expected);
    assert_eq!(frequency, 2);
}

#[test]
fn empty() {
    let (modes, frequency) = find_mode::<&str>(&[]);
    assert!(modes.is_empty());
    assert_eq!(frequency, 0);
}

#[test]
fn every_value_unique() {
    let (modes, frequency) = find_mode(&["one", "two", "three", "four", "five"]);
    assert_eq!(modes, vec!["one", "two", "three", "four", "five"]);
    assert_eq!(frequency, 1);
}

#[test]
fn single_mode() {
    let values: Vec<String> = ["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"]
        .iter()
        .chain(["4"].iter())
        .map(|s| s.to_string())
        .collect();
    let (modes, frequency) = find_mode(&values);
    assert_eq!(modes, vec!["4"]);
    assert_eq!(frequency, 4);
}

#[test]
fn three_way_tie() {
    let (modes, frequency) =
        find_mode(&["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"]);
    assert_eq!(modes, vec!["2", "4", "3"]);
    assert_eq!(frequency, 3);
}

#[test]
fn agrees_with_a_counting_model() {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let n: usize = rng.gen_range(0..300);
        let values: Vec<String> = (0..n)
            .map(|_| format!("v{}", rng.gen_range(0..25)))
            .collect();

        let mut counts: std::collections::HashMap<&str, usize> = Default::default();
        for value in &values {
            *counts.entry(value.as_str()).or_default() += 1;
        }
        let max: usize = counts.values().copied().max().unwrap_or(0);
        let expected: HashSet<String> = counts
            .iter()
            .filter(|(_, count)| **count == max)
            .map(|(value, _)| value.to_string())
            .collect();

        let (modes, frequency) = find_mode(&values);
        assert_eq!(frequency, max);
        assert_eq!(modes.len(), expected.len());
        assert_eq!(modes.into_iter().collect::<HashSet<_>>(), expected);
    }
}
