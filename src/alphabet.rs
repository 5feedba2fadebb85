//! # Tonal Alphabet
//!
//! The fixed 72-symbol swara alphabet and the base selections a listener can
//! transpose to.
//!
//! ## Layout
//! ```text
//! index  0..11   Sa1 Ri(1)1 Ri(2)1 ... Ni(2)1
//! index 12..23   Sa2 Ri(1)2 ...
//! ...
//! index 60..71   Sa6 ... Ni(2)6
//! ```
//!
//! `Rest` is not part of the alphabet.

use serde::{Deserialize, Serialize};

/// The twelve swara names in ascending order.
pub const BASE_NAMES: [&str; 12] = [
    "Sa", "Ri(1)", "Ri(2)", "Ga(1)", "Ga(2)", "Ma(1)", "Ma(2)", "Pa", "Da(1)", "Da(2)", "Ni(1)",
    "Ni(2)",
];

pub const OCTAVES: usize = 6;

/// Label used for silence. Never transposed.
pub const REST: &str = "Rest";

/// Every swara in every octave, `<name><octave>` for octaves 1 through 6.
pub const ALPHABET: [&str; 72] = [
    "Sa1", "Ri(1)1", "Ri(2)1", "Ga(1)1", "Ga(2)1", "Ma(1)1", "Ma(2)1", "Pa1", "Da(1)1", "Da(2)1", "Ni(1)1", "Ni(2)1",
    "Sa2", "Ri(1)2", "Ri(2)2", "Ga(1)2", "Ga(2)2", "Ma(1)2", "Ma(2)2", "Pa2", "Da(1)2", "Da(2)2", "Ni(1)2", "Ni(2)2",
    "Sa3", "Ri(1)3", "Ri(2)3", "Ga(1)3", "Ga(2)3", "Ma(1)3", "Ma(2)3", "Pa3", "Da(1)3", "Da(2)3", "Ni(1)3", "Ni(2)3",
    "Sa4", "Ri(1)4", "Ri(2)4", "Ga(1)4", "Ga(2)4", "Ma(1)4", "Ma(2)4", "Pa4", "Da(1)4", "Da(2)4", "Ni(1)4", "Ni(2)4",
    "Sa5", "Ri(1)5", "Ri(2)5", "Ga(1)5", "Ga(2)5", "Ma(1)5", "Ma(2)5", "Pa5", "Da(1)5", "Da(2)5", "Ni(1)5", "Ni(2)5",
    "Sa6", "Ri(1)6", "Ri(2)6", "Ga(1)6", "Ga(2)6", "Ma(1)6", "Ma(2)6", "Pa6", "Da(1)6", "Da(2)6", "Ni(1)6", "Ni(2)6",
];

/// Position of `symbol` in [`ALPHABET`], if it is a swara.
pub fn symbol_index(symbol: &str) -> Option<usize> {
    ALPHABET.iter().position(|s| *s == symbol)
}

/// Base swara a transcript can be displayed relative to.
///
/// Each base shifts the displayed swaras up by a fixed number of steps.
///
/// # Example
/// ```
/// use swara::TonalBase;
///
/// assert_eq!(TonalBase::from_key("Ga2"), Some(TonalBase::Ga2));
/// assert_eq!(TonalBase::Ga2.offset(), 4);
/// assert_eq!(TonalBase::from_key("Sa"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TonalBase {
    #[default]
    Sa1,
    Ri1,
    Ri2,
    Ga1,
    Ga2,
    Ma1,
    Ma2,
    Pa,
    Da1,
    Da2,
    Ni1,
    Ni2,
}

impl TonalBase {
    pub const ALL: [TonalBase; 12] = [
        TonalBase::Sa1,
        TonalBase::Ri1,
        TonalBase::Ri2,
        TonalBase::Ga1,
        TonalBase::Ga2,
        TonalBase::Ma1,
        TonalBase::Ma2,
        TonalBase::Pa,
        TonalBase::Da1,
        TonalBase::Da2,
        TonalBase::Ni1,
        TonalBase::Ni2,
    ];

    /// Parse a selector key such as `"Ri2"`. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Sa1" => Some(TonalBase::Sa1),
            "Ri1" => Some(TonalBase::Ri1),
            "Ri2" => Some(TonalBase::Ri2),
            "Ga1" => Some(TonalBase::Ga1),
            "Ga2" => Some(TonalBase::Ga2),
            "Ma1" => Some(TonalBase::Ma1),
            "Ma2" => Some(TonalBase::Ma2),
            "Pa" => Some(TonalBase::Pa),
            "Da1" => Some(TonalBase::Da1),
            "Da2" => Some(TonalBase::Da2),
            "Ni1" => Some(TonalBase::Ni1),
            "Ni2" => Some(TonalBase::Ni2),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TonalBase::Sa1 => "Sa1",
            TonalBase::Ri1 => "Ri1",
            TonalBase::Ri2 => "Ri2",
            TonalBase::Ga1 => "Ga1",
            TonalBase::Ga2 => "Ga2",
            TonalBase::Ma1 => "Ma1",
            TonalBase::Ma2 => "Ma2",
            TonalBase::Pa => "Pa",
            TonalBase::Da1 => "Da1",
            TonalBase::Da2 => "Da2",
            TonalBase::Ni1 => "Ni1",
            TonalBase::Ni2 => "Ni2",
        }
    }

    /// Steps up the alphabet, 0 through 11.
    pub fn offset(self) -> u8 {
        self as u8
    }
}
