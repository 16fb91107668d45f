//! Anagram Engine
//!
//! Generates scrambled-word puzzles at a chosen word length, optionally corrupted
//! so that no dictionary word solves them, and verifies answers.
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_engine::anagram::AnagramEngine;
//!
//! let engine = AnagramEngine::new(["listen", "silent", "enlist", "frog"]);
//!
//! // A solvable puzzle and the word it came from
//! let result = engine.generate(6, false).unwrap();
//! assert!(engine.verify_puzzle(&result.puzzle, "silent").unwrap());
//!
//! // An unsolvable one: no dictionary word fits
//! let result = engine.generate(4, true).unwrap();
//! assert!(engine.solutions(&result.puzzle).is_empty());
//! ```

// Core domain types
pub mod core;

// Generation and verification
pub mod anagram;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
