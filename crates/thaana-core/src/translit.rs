//! Greedy longest-match transliteration between Latin spelling and the legacy
//! encoding.
//!
//! The same matcher runs in both directions; only the table differs. At each
//! position the longest fragment (up to [`MAX_FRAGMENT_LEN`] bytes) present in
//! the table wins, so `chaa` is preferred over `c` + `h` + `aa`. Bytes with no
//! match are copied through unchanged. The lookup is context-free and the
//! results are approximate by nature.

use std::collections::HashMap;

use tracing::debug;

/// Longest fragment the matcher probes.
pub const MAX_FRAGMENT_LEN: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct TranslitTable {
    map: HashMap<Vec<u8>, Vec<u8>>,
}

impl TranslitTable {
    /// Build a table from ordered pairs. A repeated key keeps the value
    /// inserted last.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Vec<u8>>,
        V: Into<Vec<u8>>,
    {
        let map = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        TranslitTable { map }
    }

    /// Build the forward table and its flipped counterpart from the same
    /// ordered pairs.
    ///
    /// The forward table is not injective, so flipping keeps one key per
    /// value: whichever came last in `pairs`.
    pub fn with_inverse(pairs: &[(Vec<u8>, Vec<u8>)]) -> (Self, Self) {
        let forward = Self::from_pairs(pairs.iter().cloned());
        let inverse = Self::from_pairs(pairs.iter().map(|(k, v)| (v.clone(), k.clone())));
        (forward, inverse)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, fragment: &[u8]) -> Option<&[u8]> {
        self.map.get(fragment).map(Vec::as_slice)
    }

    /// Find the longest fragment starting at `input[pos..]` that the table
    /// knows, returning its length and replacement.
    fn longest_match(&self, input: &[u8], pos: usize) -> Option<(usize, &[u8])> {
        let longest = MAX_FRAGMENT_LEN.min(input.len() - pos);
        (1..=longest)
            .rev()
            .find_map(|len| self.get(&input[pos..pos + len]).map(|out| (len, out)))
    }

    /// Transliterate `input` with this table. Never fails; the cursor advances
    /// by at least one byte per step.
    pub fn transliterate(&self, input: &[u8]) -> Vec<u8> {
        let mut output = Vec::with_capacity(input.len() * 2);
        let mut pos = 0;
        let mut unmatched = 0usize;

        while pos < input.len() {
            match self.longest_match(input, pos) {
                Some((len, fragment)) => {
                    output.extend_from_slice(fragment);
                    pos += len;
                }
                None => {
                    output.push(input[pos]);
                    pos += 1;
                    unmatched += 1;
                }
            }
        }

        if unmatched > 0 {
            debug!(unmatched, "copied unmatched bytes verbatim");
        }
        output
    }
}
