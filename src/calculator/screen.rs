use std::fmt;

/// Placeholder shown on a line that has nothing to display.
pub const BLANK: &str = "0";
/// Text shown on both lines after a division by zero.
pub const ERROR: &str = "Error";

/// The two lines of the calculator display.
///
/// The upper line shows the expression being built or the number being
/// typed; the lower line shows the last result. A renderer only needs to
/// draw these two strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    /// The upper line: the number being typed or the expression so far.
    pub expression: String,
    /// The lower line: the last computed result.
    pub result:     String,
}

impl Default for Screen {
    fn default() -> Self {
        Self { expression: BLANK.to_string(),
               result:     BLANK.to_string(), }
    }
}

impl Screen {
    /// Sets the upper line to an explicit value.
    pub fn show(&mut self, value: impl Into<String>) {
        self.expression = value.into();
    }

    /// Re-derives the upper line from the number being typed.
    ///
    /// An empty input shows the blank placeholder.
    pub fn show_input(&mut self, current_input: &str) {
        if current_input.is_empty() {
            BLANK.clone_into(&mut self.expression);
        } else {
            current_input.clone_into(&mut self.expression);
        }
    }

    /// Sets the lower line.
    pub fn show_result(&mut self, value: impl Into<String>) {
        self.result = value.into();
    }

    /// Resets both lines to the blank placeholder.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.expression)?;
        write!(f, "{}", self.result)
    }
}
