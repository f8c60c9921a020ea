//! Rendering for the interactive shell.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::dialog::{DialogKind, InputState};

/// Spinner frames shown while a join runs.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw the whole shell for one frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_file_list(frame, chunks[1], app);
    render_status(frame, chunks[2], app);
    render_key_hints(frame, chunks[3]);

    if app.is_joining() {
        render_joining(frame, app);
    } else if let Some(dialog) = &app.dialog {
        render_dialog(frame, dialog);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " PDF Joiner ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" files are joined top to bottom"),
    ]);
    frame.render_widget(Paragraph::new(title), area);
}

fn render_file_list(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .files
        .entries()
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let marker = if app.marked.contains(&index) { "* " } else { "  " };
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::raw(format!("{:>3}. ", index + 1)),
                Span::raw(entry.name.clone()),
                Span::styled(
                    format!("  ({})", entry.path.display()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Files "))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.files.is_empty() {
        state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let mut status = format!(" {} file(s)", app.files.len());
    if !app.marked.is_empty() {
        status.push_str(&format!(", {} marked", app.marked.len()));
    }
    if app.is_joining() {
        let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
        status.push_str(&format!("  {spinner} joining..."));
    }
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::Gray)),
        area,
    );
}

fn render_key_hints(frame: &mut Frame, area: Rect) {
    let hints =
        " a add | d remove | c clear | space mark | J/K move | enter join | q quit";
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_dialog(frame: &mut Frame, dialog: &DialogKind) {
    match dialog {
        DialogKind::AddFiles(input) => {
            render_input_dialog(frame, " Add files (path or glob) ", input);
        }
        DialogKind::SaveOutput(input) => {
            render_input_dialog(frame, " Save joined PDF as ", input);
        }
        DialogKind::Message { title, message } => {
            render_message_dialog(frame, title, message, Color::Cyan);
        }
        DialogKind::Error { title, message } => {
            render_message_dialog(frame, title, message, Color::Red);
        }
    }
}

fn render_input_dialog(frame: &mut Frame, title: &str, input: &InputState) {
    let area = centered_rect(70, 3, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(input.value.as_str())
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);

    // Place the terminal cursor inside the input box.
    let cursor_x = area.x + 1 + input.cursor.min(area.width.saturating_sub(2) as usize) as u16;
    frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_message_dialog(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = centered_rect(60, 6, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press enter to continue",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(format!(" {title} ")),
        );
    frame.render_widget(paragraph, area);
}

fn render_joining(frame: &mut Frame, app: &App) {
    let area = centered_rect(40, 3, frame.area());
    frame.render_widget(Clear, area);

    let spinner = SPINNER_FRAMES[app.spinner_frame % SPINNER_FRAMES.len()];
    let paragraph = Paragraph::new(format!(" {spinner} Joining documents..."))
        .block(Block::default().borders(Borders::ALL).title(" Please wait "));
    frame.render_widget(paragraph, area);
}

/// A rect of the given width percentage and fixed height, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
