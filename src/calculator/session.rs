use tracing::{debug, warn};

use crate::{
    calculator::{
        evaluator::{EvalResult, evaluate},
        keys::Key,
        screen::{ERROR, Screen},
    },
    expression::{Expression, Operator},
    util::num::{format_number, parse_input},
};

/// One interactive calculator session.
///
/// The session holds the number being typed, the expression committed so
/// far, the last operator pressed and the display. Every input operation
/// runs to completion and leaves the display up to date.
///
/// ## Usage
/// ```
/// use abacus::{calculator::session::Calculator, expression::Operator};
///
/// let mut calc = Calculator::new();
/// calc.handle_number('2');
/// calc.handle_operator(Operator::Add);
/// calc.handle_number('3');
/// calc.handle_operator(Operator::Mul);
/// calc.handle_number('4');
///
/// assert_eq!(calc.calculate(), Some(Ok(14.0)));
/// assert_eq!(calc.screen().result, "14");
/// assert_eq!(calc.current_input(), "14");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    current_input: String,
    expression:    Expression,
    last_operator: Option<Operator>,
    screen:        Screen,
}

impl Calculator {
    /// Creates a session with empty input and a blank display.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number currently being typed.
    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// The expression committed so far.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The last operator pressed, kept for display only.
    #[must_use]
    pub const fn last_operator(&self) -> Option<Operator> {
        self.last_operator
    }

    #[must_use]
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Dispatches a single key press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.handle_number(digit),
            Key::Operator(op) => self.handle_operator(op),
            Key::Equals => {
                self.calculate();
            },
            Key::Decimal => self.add_decimal(),
            Key::Backspace => self.backspace(),
            Key::Clear => self.clear_all(),
            Key::Percentage => self.percentage(),
            Key::Fraction => self.fraction(),
            Key::Square => self.square(),
            Key::Exponent => self.exponent(),
            Key::Negate => self.convert_to_negative(),
        }
    }

    /// Appends a character to the number being typed.
    ///
    /// No validation is done; repeated leading zeros are kept as typed.
    pub fn handle_number(&mut self, digit: char) {
        self.current_input.push(digit);
        self.screen.show_input(&self.current_input);
    }

    /// Appends a decimal point unless the input already has one.
    ///
    /// ## Example
    /// ```
    /// use abacus::calculator::session::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.add_decimal();
    /// assert_eq!(calc.current_input(), "0.");
    /// calc.handle_number('5');
    /// calc.add_decimal();
    /// assert_eq!(calc.current_input(), "0.5");
    /// ```
    pub fn add_decimal(&mut self) {
        if self.current_input.is_empty() {
            self.current_input.push_str("0.");
        } else if !self.current_input.contains('.') {
            self.current_input.push('.');
        }
        self.screen.show_input(&self.current_input);
    }

    /// Removes the last character of the number being typed.
    pub fn backspace(&mut self) {
        self.current_input.pop();
        self.screen.show_input(&self.current_input);
    }

    /// Commits the number being typed and appends an operator.
    ///
    /// An operator with nothing before it is ignored. Pressing a second
    /// operator replaces the first one.
    ///
    /// ## Example
    /// ```
    /// use abacus::{calculator::session::Calculator, expression::Operator};
    ///
    /// let mut calc = Calculator::new();
    /// calc.handle_operator(Operator::Mul);
    /// assert!(calc.expression().is_empty());
    ///
    /// calc.handle_number('8');
    /// calc.handle_operator(Operator::Add);
    /// calc.handle_operator(Operator::Mul);
    /// assert_eq!(calc.expression().to_string(), "8 *");
    /// assert_eq!(calc.screen().expression, "8 *");
    /// ```
    pub fn handle_operator(&mut self, op: Operator) {
        self.commit_input();

        if !self.expression.push_operator(op) {
            debug!(%op, "ignored leading operator");
            return;
        }

        self.last_operator = Some(op);
        self.screen.show(self.expression.to_string());
    }

    /// Evaluates the expression and starts a new calculation from the result.
    ///
    /// Returns `None` when there is nothing to evaluate. Otherwise the
    /// expression and last operator are cleared and the result becomes the
    /// number being typed, so it can be used as the first operand of the next
    /// calculation. A dangling operator at the end is dropped before
    /// evaluation.
    ///
    /// On division by zero both display lines show `Error` and the input is
    /// cleared; the session stays usable.
    pub fn calculate(&mut self) -> Option<EvalResult<f64>> {
        self.commit_input();
        if self.expression.is_empty() {
            return None;
        }

        if let Some(op) = self.expression.trim_trailing_operator() {
            debug!(%op, "dropped dangling operator");
        }

        let outcome = evaluate(self.expression.tokens());

        self.expression.clear();
        self.last_operator = None;

        match &outcome {
            Ok(value) => {
                self.current_input = format_number(*value);
                self.screen.show(self.current_input.clone());
                self.screen.show_result(self.current_input.clone());
            },
            Err(e) => {
                debug!(error = %e, "evaluation failed");
                self.current_input.clear();
                self.screen.show(ERROR);
                self.screen.show_result(ERROR);
            },
        }

        Some(outcome)
    }

    /// Resets the input, the expression, the last operator and the display.
    pub fn clear_all(&mut self) {
        self.current_input.clear();
        self.expression.clear();
        self.last_operator = None;
        self.screen.reset();
    }

    /// Divides the number being typed by 100.
    pub fn percentage(&mut self) {
        self.transform_input(|x| x / 100.0);
    }

    /// Replaces the number being typed by its reciprocal.
    pub fn fraction(&mut self) {
        self.transform_input(f64::recip);
    }

    /// Takes the square root of the number being typed.
    ///
    /// This operation belongs to the control labelled "square"; the control
    /// computes a root, not a square. See [`Calculator::exponent`] for
    /// squaring.
    pub fn square(&mut self) {
        self.transform_input(f64::sqrt);
    }

    /// Squares the number being typed.
    ///
    /// This operation belongs to the control labelled "exponent".
    pub fn exponent(&mut self) {
        self.transform_input(|x| x.powi(2));
    }

    /// Flips the sign of the number being typed.
    ///
    /// ## Example
    /// ```
    /// use abacus::calculator::session::Calculator;
    ///
    /// let mut calc = Calculator::new();
    /// calc.handle_number('4');
    /// calc.convert_to_negative();
    /// assert_eq!(calc.current_input(), "-4");
    /// calc.convert_to_negative();
    /// assert_eq!(calc.current_input(), "4");
    /// ```
    pub fn convert_to_negative(&mut self) {
        self.transform_input(|x| -x);
    }

    /// Applies a single-operand transform to the number being typed.
    ///
    /// Does nothing when there is no number to transform.
    fn transform_input(&mut self, f: impl FnOnce(f64) -> f64) {
        let Some(value) = self.parsed_input() else {
            return;
        };

        self.current_input = format_number(f(value));
        self.screen.show_input(&self.current_input);
    }

    /// Moves the number being typed into the expression.
    ///
    /// A partial entry such as `-` is dropped and the display falls back to
    /// the placeholder.
    fn commit_input(&mut self) {
        let Some(value) = self.parsed_input() else {
            if !self.current_input.is_empty() {
                self.current_input.clear();
                self.screen.show_input(&self.current_input);
            }
            return;
        };

        if self.expression.push_number(value) {
            debug!(value, "committed input");
        } else {
            warn!(value, "expression already ends with a number");
        }
        self.current_input.clear();
    }

    fn parsed_input(&self) -> Option<f64> {
        if self.current_input.is_empty() {
            return None;
        }

        let parsed = parse_input(&self.current_input);
        if parsed.is_none() {
            warn!(input = %self.current_input, "discarded input that is not a number");
        }
        parsed
    }
}
