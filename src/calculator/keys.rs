use logos::Logos;

use crate::expression::Operator;

/// A key on the calculator, as written in a keystroke script.
///
/// Single characters stand for keyboard keys. Named keys and on-screen
/// buttons are written in brackets, e.g. `[Enter]` or `[pos-neg]`.
/// Whitespace between keys is ignored.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Key {
    /// A digit key, `0` through `9`.
    #[regex(r"[0-9]", |lex| lex.slice().chars().next())]
    Digit(char),
    /// One of `+`, `-`, `*`, `/`.
    #[regex(r"[-+*/]", |lex| Operator::from_symbol(lex.slice()))]
    Operator(Operator),
    /// `=`, `[Enter]` or `[equals]`.
    #[token("=")]
    #[token("[Enter]")]
    #[token("[equals]")]
    Equals,
    /// `.` or `[decimal]`.
    #[token(".")]
    #[token("[decimal]")]
    Decimal,
    /// `[Backspace]`
    #[token("[Backspace]")]
    #[token("[backspace]")]
    Backspace,
    /// `[Escape]`, `[clear]` or `[CE]`.
    #[token("[Escape]")]
    #[token("[clear]")]
    #[token("[CE]")]
    Clear,
    /// `[percentage]`
    #[token("[percentage]")]
    Percentage,
    /// `[fraction]`
    #[token("[fraction]")]
    Fraction,
    /// `[square]`, which takes the square root.
    #[token("[square]")]
    Square,
    /// `[exponent]`, which squares.
    #[token("[exponent]")]
    Exponent,
    /// `[pos-neg]`
    #[token("[pos-neg]")]
    Negate,
}
