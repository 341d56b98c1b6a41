use std::error::Error;

use codespan_reporting::diagnostic::{Diagnostic, Label};
use tallyc::classify::ClassifyErrorKind;
use tallyc::eval::EvalErrorKind;
use tallyspan::Spand;

pub trait Report {
    fn diagnose(&self) -> Diagnostic<()>;
}

pub struct SimpleReport {
    message: String,
}

impl SimpleReport {
    #[must_use]
    pub const fn new(message: String) -> Self {
        Self { message }
    }
}

impl Report for SimpleReport {
    fn diagnose(&self) -> Diagnostic<()> {
        Diagnostic::error().with_message(&self.message)
    }
}

/// Extra hint attached below the source snippet.
pub trait Hint {
    fn hint(&self) -> Option<&'static str>;
}

impl Hint for ClassifyErrorKind<'_> {
    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NoDigits(_) => Some("a constant needs at least one digit"),
            Self::UnparsableConstant(_) => Some("a constant may contain at most one '.'"),
        }
    }
}

impl Hint for EvalErrorKind<'_> {
    fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EmptyExpression => Some("write an expression such as \"3 + 4\""),
            Self::LeadingOperator(_) => Some("an expression must start with a number"),
            Self::TrailingOperator(_) => Some("an operator needs a number after it"),
            Self::ExpectedOperator { .. } => Some("separate numbers with '+' or '-'"),
            Self::OperandNotData(_) => None,
            Self::UnresolvedVariable(_) => Some("variables cannot be assigned a value"),
        }
    }
}

impl<T: Error + Hint> Report for Spand<T> {
    fn diagnose(&self) -> Diagnostic<()> {
        let diagnostic = Diagnostic::error()
            .with_message(self.kind())
            .with_label(Label::primary((), self.span));
        match self.kind().hint() {
            Some(hint) => diagnostic.with_notes(vec![hint.to_string()]),
            None => diagnostic,
        }
    }
}
