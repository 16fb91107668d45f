//! Simple interactive CLI mode
//!
//! Text-based anagram game without TUI

use super::session::{GameSession, Verdict};
use crate::output::formatters::{format_tiles, join_words};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if the engine
/// cannot generate a puzzle at the chosen difficulty.
pub fn run_simple<R: Rng + ?Sized>(session: &mut GameSession, rng: &mut R) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Anagrams - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Unscramble the letters into a dictionary word.");
    println!(
        "About {:.0}% of puzzles have NO solution - spot them!\n",
        session.unsolvable_chance() * 100.0
    );
    println!("  - Type a word to answer");
    println!("  - Type '!' or 'none' if you think there is no solution");
    println!("  - Type '?' or 'skip' to give up and see the answer");
    println!("  - Type '+' / '-' to make words longer / shorter");
    println!("Commands: 'quit' to exit\n");

    loop {
        let puzzle = session.new_round(rng)?.puzzle.clone();
        let turn = session.stats().rounds + 1;

        println!("────────────────────────────────────────────────────────────");
        println!(
            "Puzzle {turn} ({} letters): {}",
            session.difficulty(),
            format_tiles(&puzzle).bright_yellow().bold()
        );
        println!("────────────────────────────────────────────────────────────");

        while !session.round_over() {
            let input = get_user_input("Answer")?.to_lowercase();

            let verdict = match input.as_str() {
                "quit" | "q" | "exit" => {
                    print_session_summary(session);
                    return Ok(());
                }
                "" => continue,
                "!" | "none" => session.claim_unsolvable()?,
                "?" | "skip" => session.give_up()?,
                "+" | "-" => {
                    change_difficulty(session, input == "+");
                    continue;
                }
                answer => session.submit(answer)?,
            };

            report_verdict(session, verdict);
        }
    }
}

fn change_difficulty(session: &mut GameSession, harder: bool) {
    match session.neighbour_difficulty(harder) {
        Some(difficulty) if session.set_difficulty(difficulty).is_ok() => {
            println!("✓ Next puzzle will have {difficulty} letters\n");
        }
        _ => println!("No {} words available\n", if harder { "longer" } else { "shorter" }),
    }
}

fn report_verdict(session: &GameSession, verdict: Verdict) {
    let solutions = session.solutions();
    let word = session
        .current()
        .map(|current| current.word.text().to_uppercase())
        .unwrap_or_default();

    match verdict {
        Verdict::Solved => {
            println!("{}", "✅ Correct!".green().bold());
            if solutions.len() > 1 {
                println!("   All answers: {}", join_words(solutions));
            }
        }
        Verdict::NotAWord => println!("❌ Not in the dictionary. Try again.\n"),
        Verdict::WrongLetters => println!("❌ That word doesn't use these letters. Try again.\n"),
        Verdict::ClaimedCorrectly => {
            println!("{}", "✅ Right - there is no solution!".green().bold());
            println!("   (it was scrambled from {word})");
        }
        Verdict::ClaimedWrongly => {
            println!("{}", "❌ There was a solution!".red().bold());
            println!("   Answers: {}", join_words(solutions));
        }
        Verdict::GaveUp => {
            if solutions.is_empty() {
                println!("🤷 No solution - it was a corrupted {word}");
            } else {
                println!("🤷 Answers: {}", join_words(solutions));
            }
        }
    }

    if verdict.ends_round() {
        let stats = session.stats();
        println!(
            "   Score: {}/{} | Streak: {} (best {})\n",
            stats.wins, stats.rounds, stats.streak, stats.best_streak
        );
    }
}

fn print_session_summary(session: &GameSession) {
    let stats = session.stats();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!(
        "  Rounds: {}  Won: {}  Win rate: {:.0}%  Best streak: {}",
        stats.rounds,
        stats.wins,
        stats.win_rate(),
        stats.best_streak
    );
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n👋 Thanks for playing!\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        // EOF behaves like quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
