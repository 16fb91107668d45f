//! Anagrams - CLI
//!
//! Anagram puzzle game and generator with TUI and CLI modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use anagram_engine::{
    anagram::{AnagramEngine, EngineConfig, config},
    commands::{
        GameSession, GenerateConfig, StatsConfig, check_answer, generate_puzzles, make_rng,
        run_simple, run_stats,
        session::{DEFAULT_DIFFICULTY, DEFAULT_UNSOLVABLE_CHANCE},
    },
    output::{
        print_check_result, print_dictionary_summary, print_generation_results,
        print_stats_result,
    },
    wordlists::{SYSTEM_DICTIONARY, WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "anagrams",
    about = "Anagram puzzles: unscramble the word, or spot the ones with no solution",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), 'system' (/usr/share/dict/words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Give up making a puzzle unsolvable after this many attempts
    #[arg(long, global = true, default_value_t = config::DEFAULT_MAX_CORRUPTION_ATTEMPTS)]
    max_attempts: usize,

    /// Replace one letter per this many letters when corrupting (at least one)
    #[arg(long, global = true, default_value_t = config::DEFAULT_REPLACEMENT_DIVISOR)]
    divisor: usize,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play {
        /// Word length
        #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
        difficulty: usize,

        /// Probability (0-1) that a puzzle has no solution
        #[arg(short = 'u', long, default_value_t = DEFAULT_UNSOLVABLE_CHANCE)]
        unsolvable_chance: f64,
    },

    /// Simple CLI game (no TUI)
    Simple {
        /// Word length
        #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
        difficulty: usize,

        /// Probability (0-1) that a puzzle has no solution
        #[arg(short = 'u', long, default_value_t = DEFAULT_UNSOLVABLE_CHANCE)]
        unsolvable_chance: f64,
    },

    /// Generate puzzles
    Generate {
        /// Word length
        #[arg(short, long, default_value_t = DEFAULT_DIFFICULTY)]
        difficulty: usize,

        /// Corrupt the puzzles so they have no solution
        #[arg(short, long)]
        unsolvable: bool,

        /// Number of puzzles
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Show the word each puzzle was made from
        #[arg(short, long)]
        reveal: bool,
    },

    /// Check an answer to a puzzle
    Check {
        /// The puzzle letters
        puzzle: String,

        /// The proposed answer
        answer: String,
    },

    /// Measure how hard it is to make unsolvable puzzles with this dictionary
    Stats {
        /// Puzzles per word length
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Word lengths to test (default: every length in the dictionary)
        #[arg(short, long)]
        difficulty: Vec<usize>,
    },
}

/// Load the word list selected by the -w flag
///
/// Returns (`source_label`, `words`)
fn load_words(wordlist: &str) -> Result<(String, Vec<String>)> {
    match wordlist {
        "embedded" => Ok((
            "embedded list".to_string(),
            WORDS.iter().map(ToString::to_string).collect(),
        )),
        "system" => {
            let words = load_from_file(SYSTEM_DICTIONARY)
                .with_context(|| format!("Failed to read {SYSTEM_DICTIONARY}"))?;
            Ok((SYSTEM_DICTIONARY.to_string(), words))
        }
        path => {
            let words =
                load_from_file(path).with_context(|| format!("Failed to read word list {path}"))?;
            Ok((path.to_string(), words))
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let (source, words) = load_words(&cli.wordlist)?;
    let config = EngineConfig::new()
        .with_max_corruption_attempts(cli.max_attempts)
        .with_replacement_divisor(cli.divisor);
    let engine = AnagramEngine::with_config(words, config);

    if engine.words().is_empty() {
        bail!("Word list '{source}' contains no usable words");
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: DEFAULT_DIFFICULTY,
        unsolvable_chance: DEFAULT_UNSOLVABLE_CHANCE,
    });

    match command {
        Commands::Play {
            difficulty,
            unsolvable_chance,
        } => run_play_command(&engine, difficulty, unsolvable_chance, cli.seed),
        Commands::Simple {
            difficulty,
            unsolvable_chance,
        } => {
            print_dictionary_summary(&source, engine.words().len(), &engine.lengths());
            run_simple_command(&engine, difficulty, unsolvable_chance, cli.seed)
        }
        Commands::Generate {
            difficulty,
            unsolvable,
            count,
            reveal,
        } => {
            let config = GenerateConfig {
                difficulty,
                unsolvable,
                count,
            };
            let results = generate_puzzles(&engine, &config, &mut make_rng(cli.seed))?;
            print_generation_results(&results, reveal);
            Ok(())
        }
        Commands::Check { puzzle, answer } => {
            let result = check_answer(&engine, &puzzle, &answer)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Stats { count, difficulty } => {
            print_dictionary_summary(&source, engine.words().len(), &engine.lengths());
            let mut config = StatsConfig::new(count);
            config.difficulties = difficulty;
            config.seed = cli.seed;
            let result = run_stats(&engine, &config);
            print_stats_result(&result);
            Ok(())
        }
    }
}

fn new_session(
    engine: &AnagramEngine,
    difficulty: usize,
    unsolvable_chance: f64,
) -> Result<GameSession<'_>> {
    let mut session = GameSession::new(engine, DEFAULT_DIFFICULTY, unsolvable_chance);
    session.set_difficulty(difficulty).with_context(|| {
        let lengths: Vec<String> = engine.lengths().iter().map(ToString::to_string).collect();
        format!("Available word lengths: {}", lengths.join(", "))
    })?;
    Ok(session)
}

fn run_simple_command(
    engine: &AnagramEngine,
    difficulty: usize,
    unsolvable_chance: f64,
    seed: Option<u64>,
) -> Result<()> {
    let mut session = new_session(engine, difficulty, unsolvable_chance)?;
    run_simple(&mut session, &mut make_rng(seed))
}

fn run_play_command(
    engine: &AnagramEngine,
    difficulty: usize,
    unsolvable_chance: f64,
    seed: Option<u64>,
) -> Result<()> {
    use anagram_engine::interactive::{App, run_tui};

    let session = new_session(engine, difficulty, unsolvable_chance)?;
    let app = App::new(session, make_rng(seed));
    run_tui(app)
}
