use std::fmt::Display;

use crate::classify::ClassifyError;
use crate::eval::{EvalError, Evaluator, Halt};

pub mod classify;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod token;

#[derive(Debug, Clone, PartialEq)]
pub enum Error<'a> {
    Classify(Vec<ClassifyError<'a>>),
    Eval(EvalError<'a>),
}

impl<'a> From<Vec<ClassifyError<'a>>> for Error<'a> {
    fn from(value: Vec<ClassifyError<'a>>) -> Self {
        Self::Classify(value)
    }
}

impl<'a> From<EvalError<'a>> for Error<'a> {
    fn from(value: EvalError<'a>) -> Self {
        Self::Eval(value)
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classify(errors) => {
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{err}")?;
                }
                Ok(())
            }
            Self::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error<'_> {}

/// Best-effort value of an expression, and why it is only best-effort.
///
/// `value` is 0 when evaluation could not start and the running total when
/// it stopped part way.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<'a> {
    pub value: f64,
    pub error: Option<Error<'a>>,
}

impl<'a> Outcome<'a> {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<f64, Error<'a>> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

#[must_use]
pub fn evaluate_outcome(expr: &str) -> Outcome<'_> {
    let parsed = match parser::parse(expr) {
        Ok(parsed) => parsed,
        Err(errors) => {
            return Outcome {
                value: 0.0,
                error: Some(errors.into()),
            };
        }
    };

    match Evaluator::new(expr, parsed).run() {
        Ok(value) => Outcome { value, error: None },
        Err(Halt { error, partial }) => Outcome {
            value: partial,
            error: Some(error.into()),
        },
    }
}

pub fn try_evaluate(expr: &str) -> Result<f64, Error<'_>> {
    evaluate_outcome(expr).into_result()
}

/// Evaluates `expr`, logging any problem instead of failing.
///
/// Malformed input still yields a number: 0 if nothing could be evaluated,
/// otherwise the total up to the offending piece.
#[must_use]
pub fn evaluate(expr: &str) -> f64 {
    let outcome = evaluate_outcome(expr);
    match &outcome.error {
        Some(Error::Classify(errors)) => {
            for err in errors {
                log::warn!("{expr:?} at {}: {err}", err.span.lo());
            }
        }
        Some(Error::Eval(err)) => log::warn!("{expr:?} at {}: {err}", err.span.lo()),
        None => {}
    }
    outcome.value
}
