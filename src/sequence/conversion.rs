//! DNA to RNA conversion

use crate::sequence::validation::DnaSequence;

/// Convert a DNA base to its RNA counterpart. Only `T` changes.
pub fn dna_to_rna(base: char) -> char {
    match base {
        'T' => 'U',
        other => other,
    }
}

/// Transcribe a DNA sequence to RNA by replacing every `T` with `U`.
pub fn transcribe(dna: &DnaSequence) -> String {
    dna.chars()
        .map(dna_to_rna)
        .collect()
}
