//! Gene sequence analyzer
//!
//! Validates short DNA sequences, computes GC content, transcribes DNA to
//! RNA and looks up known mutation markers. The analysis functions are pure;
//! [`App`] holds the state shown by the terminal front end.

pub mod app;
pub mod error;
pub mod logging;
pub mod markers;
pub mod sequence;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, Command};
pub use error::SequenceError;
pub use markers::{detect_markers, MarkerRecord, MARKERS};
pub use sequence::{gc_content, is_valid_dna, transcribe, DnaSequence};
