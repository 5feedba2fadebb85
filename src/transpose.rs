use crate::alphabet::{symbol_index, TonalBase, ALPHABET, REST};
use crate::labels::LabelInterval;

/// Offset for a selector key. Unknown keys map to 0.
pub fn offset_for_base(key: &str) -> u8 {
    match TonalBase::from_key(key) {
        Some(base) => base.offset(),
        None => {
            log::debug!("Unknown base key {:?}, using offset 0", key);
            0
        }
    }
}

/// Rotate a swara `offset` steps through the 72-symbol alphabet.
///
/// `Rest` and anything outside the alphabet come back unchanged, so free-text
/// annotations survive transposition. Rotation wraps from the sixth octave
/// back to the first, and negative offsets rotate downwards.
///
/// # Example
/// ```
/// use swara::transpose_symbol;
///
/// assert_eq!(transpose_symbol("Sa1", 3), "Ga(1)1");
/// assert_eq!(transpose_symbol("Ni(2)6", 1), "Sa1");
/// assert_eq!(transpose_symbol("Rest", 5), "Rest");
/// assert_eq!(transpose_symbol("Pa", 3), "Pa");
/// ```
pub fn transpose_symbol(symbol: &str, offset: i32) -> &str {
    if symbol == REST {
        return symbol;
    }
    match symbol_index(symbol) {
        Some(index) => {
            let len = ALPHABET.len() as i64;
            let rotated = (index as i64 + offset as i64).rem_euclid(len);
            ALPHABET[rotated as usize]
        }
        None => symbol,
    }
}

/// Display text for every interval under the given base.
pub fn transpose_labels(intervals: &[LabelInterval], base: TonalBase) -> Vec<String> {
    let offset = base.offset() as i32;
    intervals
        .iter()
        .map(|interval| transpose_symbol(&interval.text, offset).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_offset_table() {
        assert_eq!(offset_for_base("Sa1"), 0);
        assert_eq!(offset_for_base("Ga1"), 3);
        assert_eq!(offset_for_base("Ga2"), 4);
        assert_eq!(offset_for_base("Pa"), 7);
        assert_eq!(offset_for_base("Ni2"), 11);
        assert_eq!(offset_for_base("unknown"), 0);
        assert_eq!(offset_for_base("Sa"), 0);
        assert_eq!(offset_for_base(""), 0);
    }

    #[test]
    fn test_transpose_is_bijection_for_every_offset() {
        for k in 0..72 {
            let outputs: HashSet<&str> = ALPHABET.into_iter().map(|s| transpose_symbol(s, k)).collect();
            assert_eq!(outputs.len(), 72, "offset {} is not a bijection", k);

            let inverse = (72 - k) % 72;
            for symbol in ALPHABET {
                assert_eq!(transpose_symbol(transpose_symbol(symbol, k), inverse), symbol);
            }
        }
    }

    #[test]
    fn test_offset_zero_is_identity() {
        for symbol in ALPHABET {
            assert_eq!(transpose_symbol(symbol, 0), symbol);
        }
        assert_eq!(transpose_symbol("Rest", 0), "Rest");
        assert_eq!(transpose_symbol("hello", 0), "hello");
    }

    #[test]
    fn test_wraparound_and_negative_offsets() {
        assert_eq!(transpose_symbol("Ni(2)6", 1), "Sa1");
        assert_eq!(transpose_symbol("Ni(1)6", 3), "Ri(1)1");
        assert_eq!(transpose_symbol("Sa1", -1), "Ni(2)6");
        assert_eq!(transpose_symbol("Pa2", 72), "Pa2");
    }

    #[test]
    fn test_octave_carry() {
        // Ni(2)1 + 1 moves into the next octave
        assert_eq!(transpose_symbol("Ni(2)1", 1), "Sa2");
        assert_eq!(transpose_symbol("Pa3", 7), "Ri(2)4");
    }

    #[test]
    fn test_transpose_labels_keeps_rest_and_unknowns() {
        let intervals = vec![
            LabelInterval::new(0.0, 1.0, "Sa1"),
            LabelInterval::new(1.0, 2.0, "Rest"),
            LabelInterval::new(2.0, 3.0, "tanpura"),
        ];
        assert_eq!(
            transpose_labels(&intervals, TonalBase::Ga1),
            vec!["Ga(1)1", "Rest", "tanpura"]
        );
    }
}
