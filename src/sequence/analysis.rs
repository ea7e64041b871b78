use crate::sequence::validation::DnaSequence;

/// Percentage of G and C bases in the sequence.
pub fn gc_content(dna: &DnaSequence) -> f64 {
    let gc_count = dna.chars()
        .filter(|&c| c == 'G' || c == 'C')
        .count();

    (gc_count as f64 / dna.len() as f64) * 100.0
}
