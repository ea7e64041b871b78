use log::debug;

use crate::markers::table::{MarkerRecord, MARKERS};
use crate::sequence::DnaSequence;

/// Find the first reference marker contained in `dna`.
pub fn detect_markers(dna: &DnaSequence) -> Option<&'static MarkerRecord> {
    detect_markers_in(&MARKERS, dna)
}

/// Scan `table` in order and return the first record whose marker occurs
/// as a contiguous substring of `dna`. Earlier entries win over longer ones.
pub fn detect_markers_in<'a>(table: &'a [MarkerRecord], dna: &DnaSequence) -> Option<&'a MarkerRecord> {
    let found = table.iter().find(|marker| dna.as_str().contains(marker.sequence));

    match found {
        Some(marker) => debug!("Marker hit: {} ({})", marker.gene_name, marker.mutation_code),
        None => debug!("No marker found in sequence of length {}", dna.len()),
    }

    found
}
