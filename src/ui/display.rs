//! Label text for the result panels

use crate::markers::MarkerRecord;

pub const GC_CONTENT_LABEL: &str = "GC Content: ";
pub const TRANSCRIPTION_LABEL: &str = "RNA Sequence: ";
pub const DISORDERS_LABEL: &str = "Genetic Disorders: ";
pub const NO_DISORDERS_LABEL: &str = "No known gene or mutations detected.";

/// GC content rounded to two decimals, e.g. `GC Content: 50.00%`.
pub fn format_gc_content_label(gc_content: f64) -> String {
    format!("{GC_CONTENT_LABEL}{gc_content:.2}%")
}

pub fn format_transcription_label(rna: &str) -> String {
    format!("{TRANSCRIPTION_LABEL}{rna}")
}

/// Gene, mutation and disorder on separate lines, or the no-hit notice.
pub fn format_disorders_label(marker: Option<&MarkerRecord>) -> String {
    match marker {
        Some(m) => format!(
            "Gene: {}\nMutation: {}\nAssociated disorder: {}.",
            m.gene_name, m.mutation_code, m.disorder_name
        ),
        None => NO_DISORDERS_LABEL.to_string(),
    }
}
