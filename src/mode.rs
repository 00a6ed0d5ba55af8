use crate::chaining::ChainingMap;
use crate::hash::hash_function_1;

/// Finds the most frequent values in `values` and the frequency they share.
///
/// Modes are returned in order of first occurrence. An empty input has no modes and a maximum
/// frequency of zero.
///
/// Runs in three linear passes over `values`, using a [`ChainingMap`] with `n / 3` buckets (at
/// least one) as the frequency table: count every value, find the highest count, then collect
/// each value with that count. A collected value is removed from the table so that its later
/// occurrences are not collected again.
pub fn find_mode<S: AsRef<str>>(values: &[S]) -> (Vec<String>, usize) {
    let capacity: usize = (values.len() / 3).max(ChainingMap::<usize>::MIN_CAPACITY);
    let mut frequencies: ChainingMap<usize> = ChainingMap::new(capacity, hash_function_1);

    for value in values {
        let key: &str = value.as_ref();
        let count: usize = frequencies.get(key).copied().unwrap_or(0);
        frequencies.put(key, count + 1);
    }

    let mut max_frequency: usize = 0;
    for value in values {
        if let Some(&count) = frequencies.get(value.as_ref()) {
            max_frequency = max_frequency.max(count);
        }
    }

    let mut modes: Vec<String> = Vec::new();
    for value in values {
        let key: &str = value.as_ref();
        if frequencies.get(key) == Some(&max_frequency) {
            modes.push(key.to_owned());
            frequencies.remove(key);
        }
    }

    (modes, max_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_are_reported_in_first_occurrence_order() {
        let (modes, frequency) = find_mode(&["melon", "apple", "apple", "melon", "peach"]);
        assert_eq!(modes, vec!["melon", "apple"]);
        assert_eq!(frequency, 2);
    }

    #[test]
    fn short_inputs_use_a_single_bucket() {
        let (modes, frequency) = find_mode(&["one"]);
        assert_eq!(modes, vec!["one"]);
        assert_eq!(frequency, 1);
    }
}
