//! Alphabet validation for user supplied DNA

use std::fmt;
use std::str::FromStr;

use bio_seq::prelude::{Dna, Seq};
use log::trace;

use crate::error::{Result, SequenceError};

/// A non-empty DNA sequence over `A`, `T`, `C`, `G`, normalized to uppercase.
///
/// Every analysis operation takes a `DnaSequence`, so input has to pass
/// [`DnaSequence::parse`] before any computation runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DnaSequence {
    bases: String,
}

impl DnaSequence {
    /// Case-fold and validate raw input.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(SequenceError::InvalidSequence);
        }

        let normalized = input.to_ascii_uppercase();
        if normalized.parse::<Seq<Dna>>().is_err() {
            trace!("Rejected sequence of length {}", input.len());
            return Err(SequenceError::InvalidSequence);
        }

        Ok(DnaSequence { bases: normalized })
    }

    pub fn as_str(&self) -> &str {
        &self.bases
    }

    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Never true for a parsed sequence.
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.bases.chars()
    }
}

impl FromStr for DnaSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self> {
        DnaSequence::parse(s)
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bases)
    }
}

/// True iff `input` is non-empty and every character, case-folded, is A/T/C/G.
pub fn is_valid_dna(input: &str) -> bool {
    DnaSequence::parse(input).is_ok()
}

/// Whether a single character is a DNA base, ignoring case.
pub fn is_dna_base(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'T' | 'C' | 'G')
}
