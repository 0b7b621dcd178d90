use std::fmt::Display;

use cursor::Line;
use itertools::Itertools;

/// A single formatted diagnostic. `location` is empty for plain line errors
/// and ` at end` / ` at '<lexeme>'` for token-anchored ones, so the rendered
/// form is always `[line <n>] Error<location>: <message>`.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct LoxError {
    pub line: Line,
    pub location: String,
    pub message: String,
}

impl LoxError {
    pub fn new(line: Line, location: impl Into<String>, message: impl Display) -> Self {
        Self { line, location: location.into(), message: message.to_string() }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, derive_more::Deref, derive_more::DerefMut)]
pub struct LoxErrors(pub Vec<LoxError>);

impl From<LoxError> for LoxErrors {
    fn from(e: LoxError) -> Self {
        Self(vec![e])
    }
}

impl Display for LoxErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().map(|e| e.to_string()).join("\n"))
    }
}

/// Diagnostic sink for one run of the scan/parse pipeline. Threaded by value
/// through the pipeline instead of living in a global, so separate runs never
/// see each other's state.
#[derive(Debug, Default)]
pub struct ErrorReporter {
    errors: Vec<LoxError>,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, error: LoxError) {
        log::trace!("reported: {error}");
        self.errors.push(error);
    }

    /// Diagnostic with no token context, only a line.
    pub fn error(&mut self, line: Line, message: impl Display) {
        self.report(LoxError::new(line, "", message));
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> LoxErrors {
        LoxErrors(self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_without_location() {
        let error = LoxError::new(Line(3), "", "Unexpected character.");
        assert_eq!(error.to_string(), "[line 3] Error: Unexpected character.");
    }

    #[test]
    fn render_with_location() {
        let error = LoxError::new(Line(1), " at end", "Expect ')' after expression.");
        assert_eq!(error.to_string(), "[line 1] Error at end: Expect ')' after expression.");
    }

    #[test]
    fn errors_join_one_per_line() {
        let errors = LoxErrors(vec![
            LoxError::new(Line(1), "", "Unexpected character."),
            LoxError::new(Line(2), " at '+'", "Expect expression."),
        ]);
        assert_eq!(
            errors.to_string(),
            "[line 1] Error: Unexpected character.\n[line 2] Error at '+': Expect expression."
        );
    }

    #[test]
    fn reporter_is_scoped_to_one_run() {
        let mut reporter = ErrorReporter::new();
        assert!(!reporter.had_error());

        reporter.error(Line(1), "Unexpected character.");
        assert!(reporter.had_error());
        assert_eq!(reporter.into_errors().len(), 1);

        let reporter = ErrorReporter::new();
        assert!(!reporter.had_error());
    }
}
