//! TUI application state and logic

use crate::commands::session::{GameSession, Verdict};
use crate::core::Word;
use crate::output::formatters::join_words;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::RngCore;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    rng: Box<dyn RngCore>,
    pub history: Vec<HistoryEntry>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Answering,
    RoundOver,
}

/// A finished round
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub puzzle: String,
    pub word: String,
    pub verdict: Verdict,
    pub solutions: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>, rng: Box<dyn RngCore>) -> Self {
        Self {
            session,
            rng,
            history: Vec::new(),
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Unscramble the letters into a word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Some puzzles have no solution - press TAB to call them out."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::RoundOver,
        }
    }

    /// Start the next round
    pub fn new_round(&mut self) {
        self.input_buffer.clear();
        match self.session.new_round(&mut self.rng) {
            Ok(result) => {
                let letters = result.puzzle.len();
                self.input_mode = InputMode::Answering;
                self.add_message(
                    &format!("New puzzle: {letters} letters"),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message(&format!("Cannot generate puzzle: {err}"), MessageStyle::Error);
            }
        }
    }

    pub fn submit_answer(&mut self) {
        let answer = self.input_buffer.clone();
        if answer.trim().is_empty() {
            self.add_message("Type a word first!", MessageStyle::Error);
            return;
        }
        let verdict = self.session.submit(&answer);
        self.apply(verdict);
    }

    pub fn claim_unsolvable(&mut self) {
        let verdict = self.session.claim_unsolvable();
        self.apply(verdict);
    }

    pub fn give_up(&mut self) {
        let verdict = self.session.give_up();
        self.apply(verdict);
    }

    /// Move to the next longer or shorter word length for the following rounds
    pub fn change_difficulty(&mut self, harder: bool) {
        let next = self.session.neighbour_difficulty(harder);
        match next.map(|difficulty| (difficulty, self.session.set_difficulty(difficulty))) {
            Some((difficulty, Ok(()))) => self.add_message(
                &format!("Next puzzle: {difficulty} letters"),
                MessageStyle::Info,
            ),
            _ => self.add_message(
                if harder {
                    "No longer words available"
                } else {
                    "No shorter words available"
                },
                MessageStyle::Error,
            ),
        }
    }

    fn apply(&mut self, verdict: Result<Verdict, crate::anagram::EngineError>) {
        let verdict = match verdict {
            Ok(verdict) => verdict,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let solutions = self.session.solutions();
        let word = self
            .session
            .current()
            .map(|current| current.word.text().to_uppercase())
            .unwrap_or_default();

        match verdict {
            Verdict::Solved => {
                self.add_message("✅ Correct!", MessageStyle::Success);
                if solutions.len() > 1 {
                    self.add_message(
                        &format!("All answers: {}", join_words(solutions)),
                        MessageStyle::Info,
                    );
                }
            }
            Verdict::NotAWord => {
                self.add_message("Not in the dictionary", MessageStyle::Error);
            }
            Verdict::WrongLetters => {
                self.add_message("That word doesn't use these letters", MessageStyle::Error);
            }
            Verdict::ClaimedCorrectly => self.add_message(
                &format!("✅ Right, no solution! (scrambled from {word})"),
                MessageStyle::Success,
            ),
            Verdict::ClaimedWrongly => self.add_message(
                &format!("❌ Solvable: {}", join_words(solutions)),
                MessageStyle::Error,
            ),
            Verdict::GaveUp => {
                let text = if solutions.is_empty() {
                    format!("No solution - it was a corrupted {word}")
                } else {
                    format!("Answers: {}", join_words(solutions))
                };
                self.add_message(&text, MessageStyle::Info);
            }
        }

        self.input_buffer.clear();
        if verdict.ends_round() {
            self.record_round(verdict, solutions);
            self.input_mode = InputMode::RoundOver;
            self.add_message("Press ENTER for the next puzzle", MessageStyle::Info);
        }
    }

    fn record_round(&mut self, verdict: Verdict, solutions: &[Word]) {
        if let Some(current) = self.session.current() {
            self.history.push(HistoryEntry {
                puzzle: current.puzzle.text(),
                word: current.word.text().to_string(),
                verdict,
                solutions: solutions.iter().map(|w| w.text().to_string()).collect(),
            });
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.new_round();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') | KeyCode::Enter => {
                        app.new_round();
                    }
                    KeyCode::Up => app.change_difficulty(true),
                    KeyCode::Down => app.change_difficulty(false),
                    _ => {}
                },
                InputMode::Answering => match key.code {
                    KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL) {
                            app.input_buffer.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => app.submit_answer(),
                    KeyCode::Tab => app.claim_unsolvable(),
                    KeyCode::Esc => app.give_up(),
                    KeyCode::Up => app.change_difficulty(true),
                    KeyCode::Down => app.change_difficulty(false),
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anagram::AnagramEngine;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_engine() -> AnagramEngine {
        AnagramEngine::new(["cat", "act", "tac", "dog", "frog", "golf"])
    }

    fn app(engine: &AnagramEngine, chance: f64) -> App<'_> {
        let session = GameSession::new(engine, 3, chance);
        App::new(session, Box::new(StdRng::seed_from_u64(21)))
    }

    #[test]
    fn new_round_opens_answering() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        assert_eq!(app.input_mode, InputMode::RoundOver);

        app.new_round();
        assert_eq!(app.input_mode, InputMode::Answering);
        assert!(app.session.current().is_some());
    }

    #[test]
    fn correct_answer_ends_round() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        app.new_round();

        app.input_buffer = app.session.current().unwrap().word.text().to_string();
        app.submit_answer();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].verdict, Verdict::Solved);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.stats().wins, 1);
    }

    #[test]
    fn wrong_answer_keeps_answering() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        app.new_round();

        app.input_buffer = "zzz".to_string();
        app.submit_answer();

        assert_eq!(app.input_mode, InputMode::Answering);
        assert!(app.history.is_empty());
        assert_eq!(app.session.stats().wrong_guesses, 1);
    }

    #[test]
    fn claiming_unsolvable_puzzle() {
        let engine = setup_engine();
        let mut app = app(&engine, 1.0);
        app.new_round();

        app.claim_unsolvable();
        assert_eq!(app.history[0].verdict, Verdict::ClaimedCorrectly);
        assert!(app.history[0].solutions.is_empty());
    }

    #[test]
    fn giving_up_records_solutions() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        app.new_round();

        app.give_up();
        assert_eq!(app.history[0].verdict, Verdict::GaveUp);
        assert!(!app.history[0].solutions.is_empty());
    }

    #[test]
    fn empty_submission_is_ignored() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        app.new_round();

        app.submit_answer();
        assert_eq!(app.input_mode, InputMode::Answering);
        assert_eq!(app.session.stats().wrong_guesses, 0);
    }

    #[test]
    fn difficulty_changes_between_rounds() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);

        app.change_difficulty(true);
        assert_eq!(app.session.difficulty(), 4);
        app.change_difficulty(true);
        assert_eq!(app.session.difficulty(), 4);

        app.new_round();
        assert_eq!(app.session.current().unwrap().puzzle.len(), 4);
    }

    #[test]
    fn messages_are_capped() {
        let engine = setup_engine();
        let mut app = app(&engine, 0.0);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
