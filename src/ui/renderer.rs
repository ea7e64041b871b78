use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::{
    app::{App, Command},
    ui::{get_nucleotide_color, INVALID_BACKGROUND},
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_title(f, chunks[0]);
    render_input(f, app, chunks[1]);
    render_commands(f, chunks[2]);
    render_result(f, &app.gc_content_label, chunks[3]);
    render_result(f, &app.transcription_label, chunks[4]);
    render_result(f, &app.disorders_label, chunks[5]);
    render_status_bar(f, app, chunks[6]);

    if let Some(error) = &app.error {
        render_error_popup(f, error);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled("Gene Sequence Analyzer", Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::with_capacity(app.input.len() + 1);
    for c in app.input.chars() {
        let color = get_nucleotide_color(c);
        let style = if color == Color::Red {
            Style::default().fg(color).bg(INVALID_BACKGROUND)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    spans.push(Span::styled("_", Style::default().fg(Color::DarkGray).add_modifier(Modifier::SLOW_BLINK)));

    let input_widget = Paragraph::new(Line::from(spans))
        .block(Block::default().title("Enter DNA Sequence").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(input_widget, area);
}

fn render_commands(f: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for command in Command::ALL {
        spans.push(Span::styled(format!("[{}] ", command.key_hint()), Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(command.label()));
        spans.push(Span::raw("   "));
    }

    let commands_widget = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(commands_widget, area);
}

fn render_result(f: &mut Frame, label: &str, area: Rect) {
    let result_widget = Paragraph::new(Text::from(label.to_string()))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(result_widget, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.error.is_some() {
        Span::styled("Enter/Esc: dismiss", Style::default().fg(Color::Red))
    } else {
        Span::styled(
            format!("{} characters   Esc: quit", app.input.chars().count()),
            Style::default().fg(Color::DarkGray),
        )
    };

    let status_widget = Paragraph::new(Line::from(vec![status]))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status_widget, area);
}

fn render_error_popup(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, f.area());
    let popup = Paragraph::new(vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Red))),
        Line::from(""),
        Line::from(Span::styled("Press Enter to continue", Style::default().fg(Color::DarkGray))),
    ])
    .block(Block::default().title("Input Error").borders(Borders::ALL))
    .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rect of `percent_x` width and `height` rows, centered in `area`.
pub fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_initial_labels() {
        let screen = draw(&App::new());
        assert!(screen.contains("Gene Sequence Analyzer"));
        assert!(screen.contains("GC Content:"));
        assert!(screen.contains("RNA Sequence:"));
        assert!(screen.contains("Genetic Disorders:"));
        assert!(screen.contains("Calculate GC Content"));
        assert!(!screen.contains("Input Error"));
    }

    #[test]
    fn test_renders_results() {
        let mut app = App::new();
        for c in "ATCG".chars() {
            app.on_key(c);
        }
        app.run(Command::CalculateGcContent);
        app.run(Command::TranscribeDnaToRna);
        let screen = draw(&app);
        assert!(screen.contains("GC Content: 50.00%"));
        assert!(screen.contains("RNA Sequence: AUCG"));
    }

    #[test]
    fn test_renders_error_popup() {
        let mut app = App::new();
        app.on_key('X');
        app.run(Command::CalculateGcContent);
        let screen = draw(&app);
        assert!(screen.contains("Input Error"));
    }

    #[test]
    fn test_centered_rect_is_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = centered_rect(60, 7, area);
        assert_eq!(popup.height, 7);
        assert_eq!(popup.width, 60);
        assert!(popup.x >= 19 && popup.x <= 21);
        assert!(popup.y >= 16 && popup.y <= 17);
    }
}
