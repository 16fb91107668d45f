//! TUI rendering with ratatui
//!
//! Layout for the anagram game.

use super::app::{App, InputMode, MessageStyle};
use crate::commands::session::Verdict;
use crate::output::formatters::format_tiles;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ANAGRAMS - Unscramble or call it impossible")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Puzzle
            Constraint::Percentage(55), // History
        ])
        .split(area);

    render_puzzle(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_puzzle(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(current) = app.session.current() {
        let tile_style = if app.input_mode == InputMode::Answering {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(format_tiles(&current.puzzle), tile_style)),
            Line::from(""),
            Line::from(format!("{} letters", current.puzzle.len())),
        ];

        if app.input_mode == InputMode::RoundOver {
            let note = if current.solvable {
                format!("from {}", current.word.text().to_uppercase())
            } else {
                format!("corrupted from {}", current.word.text().to_uppercase())
            };
            lines.push(Line::from(Span::styled(
                note,
                Style::default().fg(Color::Cyan),
            )));
        }
        lines
    } else {
        vec![Line::from("No puzzle yet")]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, entry)| {
            let (mark, color) = match entry.verdict {
                Verdict::Solved | Verdict::ClaimedCorrectly => ("✓", Color::Green),
                Verdict::ClaimedWrongly => ("✗", Color::Red),
                _ => ("·", Color::DarkGray),
            };
            let answer = if entry.solutions.is_empty() {
                "no solution".to_string()
            } else {
                entry.solutions.join("/")
            };
            let content = format!(
                "{}: {} {} → {}",
                app.history.len() - i,
                mark,
                entry.puzzle.to_uppercase(),
                answer
            );
            ListItem::new(content).style(Style::default().fg(color))
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Win rate gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let win_rate = stats.win_rate();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Win Rate ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(win_rate.round().clamp(0.0, 100.0) as u16)
        .label(format!(
            "{}/{} | streak {} (best {})",
            stats.wins, stats.rounds, stats.streak, stats.best_streak
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Answering => (
            " Your Answer | ENTER submit | TAB no solution | ESC give up ",
            app.input_buffer.to_uppercase(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " ENTER/n next puzzle | q quit ",
            String::new(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let difficulty = Paragraph::new(format!("Letters: {}", app.session.difficulty()))
        .alignment(Alignment::Center);
    f.render_widget(difficulty, chunks[0]);

    let chance = Paragraph::new(format!(
        "Impossible: {:.0}%",
        app.session.unsolvable_chance() * 100.0
    ))
    .alignment(Alignment::Center);
    f.render_widget(chance, chunks[1]);

    let words = Paragraph::new(format!(
        "Dictionary: {}",
        app.session.engine().words().len()
    ))
    .alignment(Alignment::Center);
    f.render_widget(words, chunks[2]);

    let help = Paragraph::new("↑/↓: Word length | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
