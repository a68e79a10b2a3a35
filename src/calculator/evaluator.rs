use tracing::debug;

use crate::{
    error::EvalError,
    expression::{Operator, Token},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces an alternating token sequence to a single number.
///
/// The sequence must have the shape `Number (Operator Number)*`. Evaluation
/// runs in two passes without parentheses:
/// 1. Left to right, every `*` and `/` is folded into the number before it,
///    leaving only `+` and `-`.
/// 2. The remaining sequence is folded left to right.
///
/// All arithmetic is `f64`. A `/` whose right operand is exactly zero stops
/// evaluation immediately.
///
/// # Errors
/// - `DivisionByZero` for a `/` with a zero right operand; `position` is the
///   index of the `/` token.
/// - `MalformedExpression` if the slice is empty or does not alternate;
///   `position` is the first offending index.
///
/// # Example
/// ```
/// use abacus::{
///     calculator::evaluator::evaluate,
///     error::EvalError,
///     expression::{Operator, Token},
/// };
///
/// let tokens = [Token::Number(2.0),
///               Token::Operator(Operator::Add),
///               Token::Number(3.0),
///               Token::Operator(Operator::Mul),
///               Token::Number(4.0)];
/// assert_eq!(evaluate(&tokens), Ok(14.0));
///
/// let tokens = [Token::Number(5.0), Token::Operator(Operator::Div), Token::Number(0.0)];
/// assert_eq!(evaluate(&tokens), Err(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn evaluate(tokens: &[Token]) -> EvalResult<f64> {
    check_shape(tokens)?;

    let reduced = reduce_products(tokens)?;
    let result = fold_sums(&reduced);

    debug!(tokens = tokens.len(), result, "evaluated expression");
    Ok(result)
}

/// Verifies the `Number (Operator Number)*` shape.
fn check_shape(tokens: &[Token]) -> EvalResult<()> {
    if tokens.is_empty() {
        return Err(EvalError::MalformedExpression { position: 0 });
    }

    for (position, token) in tokens.iter().enumerate() {
        let expects_number = position % 2 == 0;
        match (expects_number, token) {
            (true, Token::Number(_)) | (false, Token::Operator(_)) => {},
            _ => return Err(EvalError::MalformedExpression { position }),
        }
    }

    if tokens.len() % 2 == 0 {
        return Err(EvalError::MalformedExpression { position: tokens.len() - 1 });
    }
    Ok(())
}

/// First pass: folds `*` and `/` into the operand on their left.
///
/// The output keeps the alternating shape with only `+` and `-` left.
fn reduce_products(tokens: &[Token]) -> EvalResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        match tokens[i] {
            Token::Operator(op) if op.is_high_precedence() => {
                let left = pop_number(&mut output, i)?;
                let right = number_at(tokens, i + 1)?;

                let combined = match op {
                    Operator::Div => {
                        if right == 0.0 {
                            return Err(EvalError::DivisionByZero { position: i });
                        }
                        left / right
                    },
                    _ => left * right,
                };

                output.push(Token::Number(combined));
                i += 2;
            },
            token => {
                output.push(token);
                i += 1;
            },
        }
    }

    Ok(output)
}

/// Second pass: folds the remaining `+` and `-` left to right.
fn fold_sums(tokens: &[Token]) -> f64 {
    let mut accumulator = match tokens.first() {
        Some(Token::Number(n)) => *n,
        _ => return 0.0,
    };

    for pair in tokens[1..].chunks_exact(2) {
        if let [Token::Operator(op), Token::Number(value)] = pair {
            match op {
                Operator::Add => accumulator += value,
                Operator::Sub => accumulator -= value,
                Operator::Mul | Operator::Div => {},
            }
        }
    }

    accumulator
}

fn pop_number(output: &mut Vec<Token>, position: usize) -> EvalResult<f64> {
    match output.pop() {
        Some(Token::Number(n)) => Ok(n),
        _ => Err(EvalError::MalformedExpression { position }),
    }
}

fn number_at(tokens: &[Token], position: usize) -> EvalResult<f64> {
    match tokens.get(position) {
        Some(Token::Number(n)) => Ok(*n),
        _ => Err(EvalError::MalformedExpression { position }),
    }
}
