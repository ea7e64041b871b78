use std::error::Error;
use std::io;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use geneseq::{App, Command, logging, ui::render_ui};

fn main() -> Result<(), Box<dyn Error>> {
    install_panic_hook();

    logging::set_log_level();
    if let Err(e) = logging::init_logging() {
        eprintln!("Logging disabled: {e}");
    }
    logging::log_system_info();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logging::log_critical_error(&e.to_string(), Some("event loop"));
    }
    logging::log_shutdown(app.commands_run);

    result
}

/// Leave raw mode and the alternate screen before human-panic prints its report.
fn install_panic_hook() {
    human_panic::setup_panic!();
    let report_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        report_panic(info);
    }));
}

// Called from the panic hook; errors are ignored.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key);
            }
        }
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.quit();
        return;
    }

    if app.error.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_error();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::F(1) => app.run(Command::CalculateGcContent),
        KeyCode::F(2) => app.run(Command::TranscribeDnaToRna),
        KeyCode::F(3) => app.run(Command::DetectGeneticDisorders),
        KeyCode::F(4) => app.run(Command::Clear),
        KeyCode::Backspace => app.on_backspace(),
        KeyCode::Char(c) if !c.is_control() && !has_command_modifier(key.modifiers) => app.on_key(c),
        _ => {}
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
