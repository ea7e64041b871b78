use log::{info, warn, debug, trace};

use crate::error::Result;
use crate::markers::detect_markers;
use crate::sequence::{gc_content, transcribe, DnaSequence};
use crate::ui::{
    format_disorders_label, format_gc_content_label, format_transcription_label,
    DISORDERS_LABEL, GC_CONTENT_LABEL, TRANSCRIPTION_LABEL,
};

/// User triggered actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    CalculateGcContent,
    TranscribeDnaToRna,
    DetectGeneticDisorders,
    Clear,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::CalculateGcContent,
        Command::TranscribeDnaToRna,
        Command::DetectGeneticDisorders,
        Command::Clear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::CalculateGcContent => "Calculate GC Content",
            Command::TranscribeDnaToRna => "Transcribe DNA to RNA",
            Command::DetectGeneticDisorders => "Detect Genetic Disorders",
            Command::Clear => "Clear",
        }
    }

    pub fn key_hint(&self) -> &'static str {
        match self {
            Command::CalculateGcContent => "F1",
            Command::TranscribeDnaToRna => "F2",
            Command::DetectGeneticDisorders => "F3",
            Command::Clear => "F4",
        }
    }
}

/// Everything the screen shows. Owned by the event loop.
pub struct App {
    pub input: String,
    pub gc_content_label: String,
    pub transcription_label: String,
    pub disorders_label: String,
    pub error: Option<String>,
    pub should_quit: bool,
    pub commands_run: usize,
}

impl App {
    pub fn new() -> App {
        debug!("Creating new App instance");
        App {
            input: String::new(),
            gc_content_label: GC_CONTENT_LABEL.to_string(),
            transcription_label: TRANSCRIPTION_LABEL.to_string(),
            disorders_label: DISORDERS_LABEL.to_string(),
            error: None,
            should_quit: false,
            commands_run: 0,
        }
    }

    pub fn run(&mut self, command: Command) {
        if self.error.is_some() {
            trace!("Ignoring {command:?} while an error is displayed");
            return;
        }

        info!("Running command: {}", command.label());
        self.commands_run += 1;
        match command {
            Command::CalculateGcContent => self.calculate_gc_content(),
            Command::TranscribeDnaToRna => self.transcribe_dna_to_rna(),
            Command::DetectGeneticDisorders => self.detect_genetic_disorders(),
            Command::Clear => self.reset(),
        }
    }

    pub fn calculate_gc_content(&mut self) {
        if let Some(dna) = self.validated_input() {
            let gc = gc_content(&dna);
            debug!("GC content {gc:.4}% over {} bases", dna.len());
            self.gc_content_label = format_gc_content_label(gc);
        }
    }

    pub fn transcribe_dna_to_rna(&mut self) {
        if let Some(dna) = self.validated_input() {
            let rna = transcribe(&dna);
            debug!("Transcribed {} bases", rna.len());
            self.transcription_label = format_transcription_label(&rna);
        }
    }

    pub fn detect_genetic_disorders(&mut self) {
        if let Some(dna) = self.validated_input() {
            self.disorders_label = format_disorders_label(detect_markers(&dna));
        }
    }

    /// Restore the input field and result labels to their initial state.
    pub fn reset(&mut self) {
        debug!("Clearing input and results");
        self.input.clear();
        self.gc_content_label = GC_CONTENT_LABEL.to_string();
        self.transcription_label = TRANSCRIPTION_LABEL.to_string();
        self.disorders_label = DISORDERS_LABEL.to_string();
        self.error = None;
    }

    pub fn parse_input(&self) -> Result<DnaSequence> {
        DnaSequence::parse(&self.input)
    }

    // Surfaces a validation failure as the modal error and yields nothing.
    fn validated_input(&mut self) -> Option<DnaSequence> {
        match self.parse_input() {
            Ok(dna) => Some(dna),
            Err(e) => {
                warn!("Rejected input of {} characters: {e}", self.input.chars().count());
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        if self.error.take().is_some() {
            trace!("Error dismissed");
        }
    }

    pub fn on_key(&mut self, c: char) {
        if self.error.is_some() {
            return;
        }
        trace!("Adding character '{c}' to input");
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        if self.error.is_some() {
            return;
        }
        trace!("Removing character from input");
        self.input.pop();
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(input: &str) -> App {
        let mut app = App::new();
        for c in input.chars() {
            app.on_key(c);
        }
        app
    }

    fn assert_initial_labels(app: &App) {
        assert_eq!(app.input, "");
        assert_eq!(app.gc_content_label, "GC Content: ");
        assert_eq!(app.transcription_label, "RNA Sequence: ");
        assert_eq!(app.disorders_label, "Genetic Disorders: ");
        assert!(app.error.is_none());
    }

    #[test]
    fn test_new_app_shows_initial_labels() {
        assert_initial_labels(&App::new());
    }

    #[test]
    fn test_gc_content_command() {
        let mut app = app_with("atcg");
        app.run(Command::CalculateGcContent);
        assert_eq!(app.gc_content_label, "GC Content: 50.00%");
        assert!(app.error.is_none());
    }

    #[test]
    fn test_transcribe_command() {
        let mut app = app_with("ATTCG");
        app.run(Command::TranscribeDnaToRna);
        assert_eq!(app.transcription_label, "RNA Sequence: AUUCG");
    }

    #[test]
    fn test_detect_command() {
        let mut app = app_with("AGGAGCTGAGCCGAGCCCGGAGGCAGGAGCAGAGC");
        app.run(Command::DetectGeneticDisorders);
        assert_eq!(
            app.disorders_label,
            "Gene: BRCA1\nMutation: 185delAG\nAssociated disorder: Breast cancer."
        );

        let mut app = app_with("AAAAAAAAAA");
        app.run(Command::DetectGeneticDisorders);
        assert_eq!(app.disorders_label, "No known gene or mutations detected.");
    }

    #[test]
    fn test_invalid_input_sets_error_and_keeps_results() {
        let mut app = app_with("GGCC");
        app.run(Command::CalculateGcContent);
        assert_eq!(app.gc_content_label, "GC Content: 100.00%");

        app.on_backspace();
        app.on_key('X');
        for command in [
            Command::CalculateGcContent,
            Command::TranscribeDnaToRna,
            Command::DetectGeneticDisorders,
        ] {
            app.dismiss_error();
            app.run(command);
            assert_eq!(
                app.error.as_deref(),
                Some("Invalid DNA sequence. Only 'A', 'T', 'C', 'G' are allowed.")
            );
        }
        assert_eq!(app.gc_content_label, "GC Content: 100.00%");
        assert_eq!(app.transcription_label, "RNA Sequence: ");
        assert_eq!(app.disorders_label, "Genetic Disorders: ");
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let mut app = App::new();
        app.run(Command::TranscribeDnaToRna);
        assert!(app.error.is_some());
        assert_eq!(app.transcription_label, "RNA Sequence: ");
    }

    #[test]
    fn test_error_blocks_editing_until_dismissed() {
        let mut app = app_with("AXG");
        app.run(Command::CalculateGcContent);
        assert!(app.error.is_some());

        app.on_key('A');
        app.on_backspace();
        app.run(Command::Clear);
        assert_eq!(app.input, "AXG");

        app.dismiss_error();
        assert!(app.error.is_none());
        app.on_backspace();
        app.on_backspace();
        app.run(Command::CalculateGcContent);
        assert_eq!(app.gc_content_label, "GC Content: 0.00%");
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut app = app_with("GATTACA");
        app.run(Command::CalculateGcContent);
        app.run(Command::TranscribeDnaToRna);
        app.run(Command::DetectGeneticDisorders);
        app.run(Command::Clear);
        assert_initial_labels(&app);
    }

    #[test]
    fn test_reset_dismisses_error() {
        let mut app = app_with("nope");
        app.run(Command::CalculateGcContent);
        app.reset();
        assert_initial_labels(&app);
    }

    #[test]
    fn test_command_labels() {
        let labels: Vec<&str> = Command::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            ["Calculate GC Content", "Transcribe DNA to RNA", "Detect Genetic Disorders", "Clear"]
        );
    }

    #[test]
    fn test_commands_run_skips_commands_blocked_by_error() {
        let mut app = app_with("GX");
        app.run(Command::CalculateGcContent);
        app.run(Command::TranscribeDnaToRna);
        assert_eq!(app.commands_run, 1);

        app.dismiss_error();
        app.run(Command::Clear);
        assert_eq!(app.commands_run, 2);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new();
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }
}
