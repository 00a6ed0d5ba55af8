/// A deterministic function mapping a string key to a non-negative integer. The tables reduce
/// the result modulo their capacity to find a key's home bucket.
pub type HashFunction = fn(&str) -> usize;

/// Sums the code points of every character in the key.
///
/// Anagrams collide, which makes this function handy for exercising collision handling.
pub fn hash_function_1(key: &str) -> usize {
    let mut hash: usize = 0;
    for c in key.chars() {
        hash = hash.wrapping_add(c as usize);
    }
    hash
}

/// Sums the code points of every character weighted by its one-based position in the key.
pub fn hash_function_2(key: &str) -> usize {
    let mut hash: usize = 0;
    for (i, c) in key.chars().enumerate() {
        hash = hash.wrapping_add((i + 1).wrapping_mul(c as usize));
    }
    hash
}

/// Returns true if `n` is prime.
pub(crate) fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut d: usize = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Returns the smallest prime greater than or equal to `n`.
pub(crate) fn next_prime(n: usize) -> usize {
    let mut candidate: usize = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}
