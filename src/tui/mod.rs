//! Interactive terminal shell.
//!
//! Runs when no input files are given on the command line. The shell owns a
//! [`FileList`](crate::list::FileList) that the user fills and arranges; a
//! join runs as a background task so the UI stays responsive, and its outcome
//! comes back as a dialog.

pub mod app;
pub mod dialog;
mod view;

pub use app::App;
pub use dialog::{DialogKind, InputState};

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use crate::error::Result;

/// Poll interval while a join runs, so the spinner animates.
const JOIN_TICK: Duration = Duration::from_millis(80);

/// Poll interval while idle.
const IDLE_TICK: Duration = Duration::from_millis(200);

/// Run the interactive shell until the user quits.
pub async fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore the terminal even when the loop errored.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app))?;

        let tick = if app.is_joining() { JOIN_TICK } else { IDLE_TICK };
        if event::poll(tick)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            if app.is_joining() {
                // A running join cannot be cancelled; swallow input.
            } else if app.is_dialog_open() {
                handle_dialog_key(app, key.code, key.modifiers);
            } else {
                handle_list_key(app, key.code, key.modifiers);
            }
        }

        app.poll_join().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Key handling for the file list.
fn handle_list_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char('K') => app.move_item(-1),
        KeyCode::Char('J') => app.move_item(1),
        KeyCode::Char(' ') => app.toggle_mark(),
        KeyCode::Char('a') => app.open_add_dialog(),
        KeyCode::Char('d') | KeyCode::Delete => app.remove_selected(),
        KeyCode::Char('c') => app.clear_all(),
        KeyCode::Enter => app.request_join(),
        _ => {}
    }
}

/// Key handling while a dialog is open.
fn handle_dialog_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Enter => app.submit_dialog(),
        KeyCode::Esc => app.cancel_dialog(),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => app.cancel_dialog(),
        _ => {
            if let Some(input) = app.dialog.as_mut().and_then(DialogKind::input_mut) {
                match code {
                    KeyCode::Char(c) => input.insert_char(c),
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Delete => input.delete(),
                    KeyCode::Left => input.left(),
                    KeyCode::Right => input.right(),
                    KeyCode::Home => input.home(),
                    KeyCode::End => input.end(),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys_drive_app_state() {
        let mut app = App::new();
        app.files.add_all(["a.pdf", "b.pdf", "c.pdf"]);

        handle_list_key(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.cursor, 1);

        handle_list_key(&mut app, KeyCode::Char('K'), KeyModifiers::SHIFT);
        let names: Vec<&str> = app.files.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b.pdf", "a.pdf", "c.pdf"]);
        assert_eq!(app.cursor, 0);

        handle_list_key(&mut app, KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(app.files.len(), 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        handle_list_key(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit());

        let mut app = App::new();
        handle_list_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn test_dialog_keys_edit_input() {
        let mut app = App::new();
        app.dialog = Some(DialogKind::SaveOutput(InputState::new("out")));

        handle_dialog_key(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        handle_dialog_key(&mut app, KeyCode::Backspace, KeyModifiers::NONE);

        let Some(DialogKind::SaveOutput(input)) = &app.dialog else {
            panic!("expected save prompt");
        };
        assert_eq!(input.value, "out");
    }

    #[test]
    fn test_escape_cancels_dialog() {
        let mut app = App::new();
        app.dialog = Some(DialogKind::AddFiles(InputState::new("")));

        handle_dialog_key(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.dialog.is_none());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_enter_dismisses_message_dialog() {
        let mut app = App::new();
        app.dialog = Some(DialogKind::Message {
            title: "No files".into(),
            message: "There are no files to join.".into(),
        });

        handle_dialog_key(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.dialog.is_none());
    }
}
