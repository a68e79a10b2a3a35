/// Evaluation errors.
///
/// Errors raised while reducing a token sequence to a number. Division by
/// zero is the only one the calculator session can produce; a malformed
/// sequence is only reachable through the public evaluator.
pub mod eval_error;
/// Keystroke script errors.
///
/// Errors raised while lexing a keystroke script before any key is pressed.
pub mod script_error;

pub use eval_error::EvalError;
pub use script_error::ScriptError;
