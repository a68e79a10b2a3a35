use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// A `/` whose right operand is exactly zero.
    #[error("Division by zero at token {position}.")]
    DivisionByZero {
        /// Index of the `/` token in the expression.
        position: usize,
    },
    /// The tokens do not alternate number, operator, number.
    #[error("Malformed expression at token {position}.")]
    MalformedExpression {
        /// Index of the first token that breaks the alternation.
        position: usize,
    },
}
