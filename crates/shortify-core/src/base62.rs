//! Base62 encoding of counter values.

/// Digits, then lowercase, then uppercase.
const ALPHABET: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const BASE: u64 = ALPHABET.len() as u64;

/// Encodes a non-negative integer as a base62 string.
///
/// The most significant digit comes first, and zero encodes as `"0"`.
///
/// # Examples
///
/// ```
/// use shortify_core::base62;
///
/// assert_eq!(base62::encode(0), "0");
/// assert_eq!(base62::encode(62), "10");
/// assert_eq!(base62::encode(1000), "g8");
/// ```
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // u64::MAX needs 11 base62 digits
    let mut digits = Vec::with_capacity(11);
    while value > 0 {
        digits.push(ALPHABET[(value % BASE) as usize]);
        value /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits() {
        assert_eq!(encode(0), "0");
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "A");
        assert_eq!(encode(61), "Z");
    }

    #[test]
    fn carries_into_next_digit() {
        assert_eq!(encode(62), "10");
        assert_eq!(encode(63), "11");
        assert_eq!(encode(62 * 62), "100");
    }

    #[test]
    fn known_values() {
        assert_eq!(encode(1000), "g8");
        assert_eq!(encode(3843), "ZZ");
    }

    #[test]
    fn max_value_is_alphanumeric() {
        let encoded = encode(u64::MAX);
        assert_eq!(encoded.len(), 11);
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn distinct_inputs_produce_distinct_outputs() {
        let encoded: std::collections::HashSet<_> = (0..10_000).map(encode).collect();
        assert_eq!(encoded.len(), 10_000);
    }
}
