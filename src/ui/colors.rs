//! Color definitions for nucleotides and UI elements

use ratatui::style::Color;

use crate::sequence::is_dna_base;

/// Get the display color for a character typed into the input field.
/// Anything outside the DNA alphabet is flagged red.
pub fn get_nucleotide_color(c: char) -> Color {
    if !is_dna_base(c) {
        return Color::Red;
    }

    match c.to_ascii_uppercase() {
        'A' => Color::Green,
        'T' => Color::Yellow,
        'C' => Color::Cyan,
        'G' => Color::Magenta,
        _ => Color::White,
    }
}

pub const INVALID_BACKGROUND: Color = Color::DarkGray;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nucleotide_colors() {
        assert_eq!(get_nucleotide_color('A'), Color::Green);
        assert_eq!(get_nucleotide_color('t'), Color::Yellow);
        assert_eq!(get_nucleotide_color('C'), Color::Cyan);
        assert_eq!(get_nucleotide_color('g'), Color::Magenta);
    }

    #[test]
    fn test_invalid_characters_are_red() {
        for c in ['X', 'U', ' ', '7'] {
            assert_eq!(get_nucleotide_color(c), Color::Red);
        }
    }
}
