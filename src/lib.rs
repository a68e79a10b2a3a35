//! # abacus
//!
//! abacus is the core of a keypad calculator written in Rust.
//! It collects digit and operator key presses into an expression, evaluates
//! it with multiplication and division binding tighter than addition and
//! subtraction, and keeps the two display lines a renderer draws.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;
use tracing::debug;

use crate::{
    calculator::{keys::Key, screen::Screen, session::Calculator},
    error::ScriptError,
};

/// Runs the calculator: keys, expression evaluation and display state.
///
/// This module ties together the keystroke lexer, the calculator session,
/// the precedence-aware evaluator and the display.
///
/// # Responsibilities
/// - Exposes the session operations a keypad front end calls.
/// - Evaluates committed expressions.
/// - Tracks what each display line shows.
pub mod calculator;
/// Provides error types for evaluation and keystroke scripts.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Attaches the position of the failure for diagnostics.
pub mod error;
/// Defines the tokens an expression is built from.
///
/// This module declares the `Operator` and `Token` enums and the
/// `Expression` sequence, which keeps numbers and operators alternating.
pub mod expression;
/// Numeric parsing and formatting helpers.
///
/// # Responsibilities
/// - Converts the text being typed into a number at a single boundary.
/// - Renders numbers for the display.
pub mod util;

/// Lexes a keystroke script into keys.
///
/// Every key is lexed before any is returned, so a script with a typo fails
/// as a whole.
///
/// # Errors
/// Returns `ScriptError::UnknownKey` for text that names no key, with the
/// one-based column where it starts. An unknown bracketed name is reported
/// whole, up to its closing `]`.
///
/// # Examples
/// ```
/// use abacus::{calculator::keys::Key, lex_keys};
///
/// let keys = lex_keys("1 + [pos-neg]").unwrap();
/// assert_eq!(keys.len(), 3);
/// assert_eq!(keys[2], Key::Negate);
///
/// assert!(lex_keys("1 ^ 2").is_err());
/// assert_eq!(lex_keys("[sqrt] 4").unwrap_err().to_string(),
///            "Unknown key '[sqrt]' at column 1.");
/// ```
pub fn lex_keys(source: &str) -> Result<Vec<Key>, ScriptError> {
    let mut keys = Vec::new();
    let mut lexer = Key::lexer(source);

    while let Some(key) = lexer.next() {
        if let Ok(key) = key {
            keys.push(key);
        } else {
            let start = lexer.span().start;
            let column = source[..start].chars().count() + 1;
            let key = unknown_key_text(&source[start..]).unwrap_or_else(|| lexer.slice());
            return Err(ScriptError::UnknownKey { key: key.to_string(),
                                                 column });
        }
    }

    Ok(keys)
}

/// The text of a bracketed key name at the start of `rest`, brackets
/// included. Stops at whitespace so an unclosed `[` does not swallow the
/// following keys.
fn unknown_key_text(rest: &str) -> Option<&str> {
    if !rest.starts_with('[') {
        return None;
    }
    let end = rest.find(|c: char| c == ']' || c.is_whitespace())
                  .unwrap_or(rest.len());
    if rest[end..].starts_with(']') { Some(&rest[..=end]) } else { Some(&rest[..end]) }
}

/// Presses every key of a script on a fresh calculator and returns the
/// final display.
///
/// # Errors
/// Returns an error if the script contains an unknown key. A division by
/// zero is not an error here; it shows up on the display as `Error`.
///
/// # Examples
/// ```
/// use abacus::run_script;
///
/// let screen = run_script("2 + 3 * 4 =").unwrap();
/// assert_eq!(screen.result, "14");
///
/// let screen = run_script("5 / 0 [Enter]").unwrap();
/// assert_eq!(screen.result, "Error");
///
/// assert!(run_script("2 plus 2").is_err());
/// ```
pub fn run_script(source: &str) -> Result<Screen, ScriptError> {
    let keys = lex_keys(source)?;
    debug!(keys = keys.len(), "running keystroke script");

    let mut calculator = Calculator::new();
    for key in keys {
        calculator.press(key);
    }

    Ok(calculator.screen().clone())
}
