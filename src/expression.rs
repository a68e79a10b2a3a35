use std::fmt;

/// An arithmetic operator that can appear between two numbers.
///
/// Multiplication and division bind tighter than addition and subtraction;
/// see [`Operator::is_high_precedence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Maps a keypad symbol to its operator.
    ///
    /// ## Example
    /// ```
    /// use abacus::expression::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Sub),
            "*" => Some(Self::Mul),
            "/" => Some(Self::Div),
            _ => None,
        }
    }

    /// The keypad symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns `true` for `*` and `/`, which are reduced in the first pass.
    #[must_use]
    pub const fn is_high_precedence(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single unit of an expression: a committed number or an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A committed numeric operand.
    Number(f64),
    /// An operator between two operands.
    Operator(Operator),
}

impl From<f64> for Token {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Token {
    fn from(value: Operator) -> Self {
        Self::Operator(value)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.write_str(&crate::util::num::format_number(*n)),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// The sequence of tokens entered so far in one calculation.
///
/// The sequence alternates number and operator and never starts with an
/// operator. Pushing an operator right after another operator replaces it,
/// so the last operator pressed wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    tokens: Vec<Token>,
}

impl Expression {
    /// Creates an empty expression.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a committed number.
    ///
    /// Returns `false` without touching the expression when it already ends
    /// with a number, since two numbers are never adjacent.
    ///
    /// ## Example
    /// ```
    /// use abacus::expression::{Expression, Token};
    ///
    /// let mut expr = Expression::new();
    /// assert!(expr.push_number(4.0));
    /// assert!(!expr.push_number(5.0));
    /// assert_eq!(expr.tokens(), &[Token::Number(4.0)]);
    /// ```
    pub fn push_number(&mut self, value: f64) -> bool {
        if let Some(Token::Number(_)) = self.tokens.last() {
            return false;
        }
        self.tokens.push(Token::Number(value));
        true
    }

    /// Appends an operator, or replaces the trailing operator.
    ///
    /// Returns `false` without touching the expression when it is empty.
    ///
    /// ## Example
    /// ```
    /// use abacus::expression::{Expression, Operator, Token};
    ///
    /// let mut expr = Expression::new();
    /// assert!(!expr.push_operator(Operator::Add));
    ///
    /// expr.push_number(2.0);
    /// expr.push_operator(Operator::Add);
    /// expr.push_operator(Operator::Mul);
    /// assert_eq!(expr.tokens(), &[Token::Number(2.0), Token::Operator(Operator::Mul)]);
    /// ```
    pub fn push_operator(&mut self, op: Operator) -> bool {
        match self.tokens.last_mut() {
            None => false,
            Some(Token::Operator(last)) => {
                *last = op;
                true
            },
            Some(Token::Number(_)) => {
                self.tokens.push(Token::Operator(op));
                true
            },
        }
    }

    /// Removes a dangling operator at the end, if any.
    pub fn trim_trailing_operator(&mut self) -> Option<Operator> {
        if let Some(Token::Operator(op)) = self.tokens.last().copied() {
            self.tokens.pop();
            return Some(op);
        }
        None
    }

    /// The tokens in entry order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

impl fmt::Display for Expression {
    /// Joins the tokens with single spaces, e.g. `2 + 3 *`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}
