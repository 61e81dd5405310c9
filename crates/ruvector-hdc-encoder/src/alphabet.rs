//! Symbol table mapping characters to dense item-memory keys

use crate::error::{HdcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Injectable mapping from character to dense index `0..len`
///
/// The default table is the lowercase Latin alphabet, `'a'` -> 0 through
/// `'z'` -> 25.
///
/// # Example
///
/// ```rust
/// use ruvector_hdc_encoder::Alphabet;
///
/// let alphabet = Alphabet::new("acgt".chars()).unwrap();
/// assert_eq!(alphabet.index_of('g'), Some(2));
/// assert_eq!(alphabet.index_of('x'), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = HdcError;

    fn try_from(symbols: Vec<char>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::lowercase_latin()
    }
}

impl Alphabet {
    /// Builds a table from symbols in key order; duplicates are rejected
    pub fn new<I>(symbols: I) -> Result<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(HdcError::InvalidAlphabet("alphabet is empty".into()));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (key, &symbol) in symbols.iter().enumerate() {
            if index.insert(symbol, key).is_some() {
                return Err(HdcError::InvalidAlphabet(format!(
                    "duplicate symbol {:?}",
                    symbol
                )));
            }
        }
        Ok(Self { symbols, index })
    }

    /// `'a'..='z'` mapped to `0..26`
    pub fn lowercase_latin() -> Self {
        let symbols: Vec<char> = ('a'..='z').collect();
        let index = symbols.iter().enumerate().map(|(k, &c)| (c, k)).collect();
        Self { symbols, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Key of `symbol`, if it is part of the alphabet
    #[inline]
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Symbol stored at `key`
    #[inline]
    pub fn symbol(&self, key: usize) -> Option<char> {
        self.symbols.get(key).copied()
    }

    /// Maps every character of `text` to its key
    ///
    /// Fails on the first character outside the alphabet.
    pub fn keys(&self, text: &str) -> Result<Vec<usize>> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index_of(symbol)
                    .ok_or(HdcError::InvalidSymbol { symbol, position })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_latin() {
        let alphabet = Alphabet::default();

        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.index_of('a'), Some(0));
        assert_eq!(alphabet.index_of('z'), Some(25));
        assert_eq!(alphabet.index_of('A'), None);
        assert_eq!(alphabet.symbol(1), Some('b'));
        assert_eq!(alphabet.symbol(26), None);
    }

    #[test]
    fn test_custom_alphabet() {
        let alphabet = Alphabet::new(['x', 'y']).unwrap();
        assert_eq!(alphabet.keys("yxy").unwrap(), vec![1, 0, 1]);
    }

    #[test]
    fn test_keys_reports_position() {
        let alphabet = Alphabet::default();
        assert_eq!(
            alphabet.keys("ab-c"),
            Err(HdcError::InvalidSymbol {
                symbol: '-',
                position: 2
            })
        );
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        assert!(matches!(
            Alphabet::new("aba".chars()),
            Err(HdcError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::new(Vec::<char>::new()),
            Err(HdcError::InvalidAlphabet(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let alphabet = Alphabet::new("acgt".chars()).unwrap();
        let json = serde_json::to_string(&alphabet).unwrap();
        assert_eq!(json, r#"["a","c","g","t"]"#);

        let back: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alphabet);
        assert!(serde_json::from_str::<Alphabet>(r#"["a","a"]"#).is_err());
    }
}
