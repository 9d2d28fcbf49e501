//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GRID_SIZE, ROWS, WORD_LEN};
use crate::output::formatters::score_label;
use crate::session::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(13),   // Main content
            Constraint::Length(3), // Feedback / input
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn style_for(style: MessageStyle) -> Style {
    match style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default().fg(Color::Green),
        MessageStyle::Warning => Style::default().fg(Color::Yellow),
        MessageStyle::Error => Style::default().fg(Color::Red),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let date = app.session.puzzle().map_or("", |p| p.id());
    let mode = match app.session.mode() {
        Mode::Standard => "Standard",
        Mode::Hard => "Hard",
    };
    let header = Paragraph::new(format!("PAR · {date} · {mode} mode"))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style of one grid cell
fn cell_style(
    app: &App,
    index: usize,
    selected: &[usize],
    valid_rows: Option<[bool; ROWS]>,
) -> Style {
    let pending = app
        .session
        .pending_exchange()
        .is_some_and(|p| p.a == index || p.b == index);

    let mut style = if pending {
        Style::default().fg(Color::Black).bg(Color::Magenta)
    } else if selected.contains(&index) {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else if app.is_locked(index) {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else if valid_rows.is_some_and(|rows| rows[index / WORD_LEN]) {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    if index == app.cursor {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    style
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Grid ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(letters) = app.session.letters() else {
        f.render_widget(Paragraph::new("Loading...").block(block), area);
        return;
    };

    let selected = app.session.selected();
    let valid_rows = app.session.rows_valid();
    let mut lines = vec![Line::from("")];
    for row in 0..ROWS {
        let mut spans = vec![Span::raw("  ")];
        for col in 0..WORD_LEN {
            let index = row * WORD_LEN + col;
            spans.push(Span::styled(
                format!(" {} ", char::from(letters[index])),
                cell_style(app, index, &selected, valid_rows),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Capture gauge
            Constraint::Min(4),    // Words
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_progress(f, app, chunks[0]);
    render_words(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let (title, done, total) = match app.session.mode() {
        Mode::Standard => {
            let captured = app
                .session
                .letter_usage()
                .map_or(0, |u| u.captured_counts.total());
            (" Letters Captured ", captured, GRID_SIZE)
        }
        Mode::Hard => {
            let rows = app
                .session
                .rows_valid()
                .map_or(0, |rows| rows.iter().filter(|&&ok| ok).count());
            (" Rows Solved ", rows, ROWS)
        }
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(done as f64 / total as f64)
        .label(format!(
            "{done}/{total} | {}",
            score_label(app.session.mode(), app.session.score())
        ));

    f.render_widget(gauge, area);
}

fn render_words(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .session
        .submissions()
        .iter()
        .enumerate()
        .map(|(i, submission)| {
            ListItem::new(format!("{}. {}", i + 1, submission.word))
                .style(Style::default().fg(Color::Green))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Words ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| ListItem::new(msg.text.clone()).style(style_for(msg.style)))
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, style) = match (&app.feedback, app.input_mode) {
        (Some(feedback), _) => (" Result ", feedback.text.clone(), style_for(feedback.style)),
        (None, InputMode::Celebration) => (
            " Solved! | 'h' switch mode, 'r' replay, 'q' quit ",
            String::new(),
            Style::default().fg(Color::Green),
        ),
        (None, InputMode::Playing) => (
            " Current Input ",
            app.session.current_input(),
            Style::default().fg(Color::Yellow),
        ),
    };

    let input = Paragraph::new(content)
        .style(style.add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.session.mode() {
        Mode::Standard => {
            "←↑↓→: Move | Space: Pick | Bksp: Undo pick | Esc: Clear | h: Hard | r: Reset | q: Quit"
        }
        Mode::Hard => {
            "←↑↓→: Move | Space: Pick two to swap | Esc: Cancel | h: Standard | r: Reset | q: Quit"
        }
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(help, area);
}
