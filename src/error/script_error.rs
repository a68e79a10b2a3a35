use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reading a keystroke script.
pub enum ScriptError {
    /// Found text that does not name any key.
    #[error("Unknown key '{key}' at column {column}.")]
    UnknownKey {
        /// The unrecognized text.
        key:    String,
        /// One-based column of the text in the script.
        column: usize,
    },
}
