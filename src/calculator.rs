/// The evaluator reduces a token sequence to a number.
///
/// Evaluation runs in two left-to-right passes: the first folds `*` and `/`,
/// the second folds `+` and `-`. There is no parenthesization.
///
/// # Responsibilities
/// - Checks that the tokens alternate number and operator.
/// - Applies operator precedence without building a tree.
/// - Reports division by zero instead of producing an infinity.
pub mod evaluator;
/// The keys module lexes keystroke scripts.
///
/// A keystroke script is a plain string of keyboard keys and bracketed
/// button names, such as `12+3[Enter]`. The lexer turns it into a stream of
/// [`keys::Key`] values that a [`session::Calculator`] can press.
pub mod keys;
/// The screen module holds the two display lines.
///
/// Operations either write a line explicitly or re-derive it from the
/// session state; the screen is the only output a renderer needs.
pub mod screen;
/// The session module owns the state of one interactive calculation.
///
/// # Responsibilities
/// - Builds the number being typed character by character.
/// - Commits numbers and operators into the expression.
/// - Runs single-operand transforms on the number being typed.
/// - Evaluates, resets and keeps the display up to date.
pub mod session;
