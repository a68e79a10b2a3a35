/// Numeric conversion helpers.
///
/// This module is the single boundary between the text typed on the keypad
/// and the `f64` values the evaluator works with. Parsing the staging string
/// and rendering results back to text both happen here, so every operation
/// agrees on what counts as a number and how a number is displayed.
pub mod num;
