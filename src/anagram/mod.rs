//! Anagram generation and verification
//!
//! `AnagramEngine` ties together three stateless parts: `WordSelector` picks a word,
//! `Scrambler` shuffles (and optionally corrupts) it, `Validator` checks answers.

pub mod config;
mod engine;
mod error;
mod scrambler;
mod selector;
mod validator;

pub use config::EngineConfig;
pub use engine::AnagramEngine;
pub use error::EngineError;
pub use scrambler::Scrambler;
pub use selector::WordSelector;
pub use validator::Validator;
