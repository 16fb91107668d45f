//! Display functions for command results

use super::formatters::{create_progress_bar, format_tiles};
use crate::commands::{CheckResult, StatsResult};
use crate::core::{GenerationResult, Puzzle};
use colored::Colorize;

/// Print generated puzzles, optionally revealing their source words
pub fn print_generation_results(results: &[GenerationResult], reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    for (i, result) in results.iter().enumerate() {
        let marker = if result.solvable {
            "solvable".green()
        } else {
            "unsolvable".red()
        };

        print!(
            "{:>3}. {}  [{marker}]",
            i + 1,
            format_tiles(&result.puzzle).bright_yellow().bold()
        );

        if reveal {
            print!("  from {}", result.word.text().to_uppercase().bright_white());
            if !result.solvable {
                print!(" ({} attempts)", result.attempts);
            }
        }
        println!();
    }

    println!("{}", "─".repeat(60).cyan());
}

/// Print the result of checking an answer
pub fn print_check_result(result: &CheckResult) {
    let tick = |ok: bool| if ok { "✓".green() } else { "✗".red() };

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {}   Answer: {}",
        format_tiles(&Puzzle::new(&result.puzzle)).bright_yellow().bold(),
        result.answer.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("  {} In dictionary", tick(result.in_dictionary));
    println!("  {} Uses exactly the puzzle's letters", tick(result.letters_match));

    println!();
    if result.correct {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!("{}", "❌ Not a solution".red().bold());
    }

    if result.solutions.is_empty() {
        println!("   This puzzle has no solution.");
    } else {
        let answers: Vec<String> = result.solutions.iter().map(|s| s.to_uppercase()).collect();
        println!("   Accepted answers: {}", answers.join(", "));
    }
}

/// Print the result of a statistics run
pub fn print_stats_result(result: &StatsResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORRUPTION STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Puzzles attempted: {}", result.total);
    println!("   Unsolvable made:   {}", format!("{}", result.generated).green());
    println!("   Exhausted:         {}", format!("{}", result.exhausted).yellow());
    println!(
        "   Average attempts:  {}",
        format!("{:.2}", result.average_attempts).bright_yellow().bold()
    );
    println!("   Worst case:        {}", result.max_attempts);
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if !result.skipped.is_empty() {
        let skipped: Vec<String> = result.skipped.iter().map(ToString::to_string).collect();
        println!(
            "   {} {}",
            "No words of length:".yellow(),
            skipped.join(", ")
        );
    }

    println!("\n📏 {}", "By difficulty:".bright_cyan().bold());
    for stats in &result.per_difficulty {
        println!(
            "   {:>2} letters: {:>6} words | {:>5} ok {:>5} exhausted | avg {:.2} max {}",
            stats.difficulty,
            stats.dictionary_words,
            stats.generated,
            stats.exhausted,
            stats.average_attempts,
            stats.max_attempts
        );
    }

    if result.generated == 0 {
        return;
    }

    println!("\n📈 {}", "Attempts needed:".bright_cyan().bold());
    let mut buckets: Vec<(&usize, &usize)> = result.attempt_distribution.iter().collect();
    buckets.sort_unstable();
    for (attempts, &count) in buckets.into_iter().take(10) {
        let pct = count as f64 / result.generated as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Print the word list summary shown before a command runs
pub fn print_dictionary_summary(source: &str, words: usize, lengths: &[usize]) {
    let lengths: Vec<String> = lengths.iter().map(ToString::to_string).collect();
    println!(
        "{} {} words from {} (lengths: {})",
        "📚".bright_cyan(),
        words,
        source.bright_white(),
        lengths.join(", ")
    );
}
