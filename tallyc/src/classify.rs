use tallyspan::Spand;
use thiserror::Error;

use crate::token::{OperatorKind, Piece, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyErrorKind<'a> {
    #[error("constant '{0}' has no digits")]
    NoDigits(&'a str),
    #[error("constant '{0}' is not a valid number")]
    UnparsableConstant(&'a str),
}

pub type ClassifyError<'a> = Spand<ClassifyErrorKind<'a>>;
pub type ClassifyResult<'a, T> = Result<T, ClassifyErrorKind<'a>>;

/// Digits and dots only. A lone run of dots also matches; it is rejected
/// later when the constant is built.
#[must_use]
pub fn is_constant(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit() || c == '.')
}

#[must_use]
pub fn is_variable(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

fn constant(s: &str) -> ClassifyResult<'_, TokenKind<'_>> {
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return Err(ClassifyErrorKind::NoDigits(s));
    }
    s.parse()
        .map(TokenKind::Constant)
        .map_err(|_| ClassifyErrorKind::UnparsableConstant(s))
}

/// Classifies a single whitespace-free piece of an expression.
///
/// Data is tried before operators, constants before variables. Anything
/// matching none of the rules comes back as [`Piece::Unclassified`].
pub fn classify(raw: &str) -> ClassifyResult<'_, Piece<'_>> {
    let piece = if is_constant(raw) {
        Piece::Token(constant(raw)?)
    } else if is_variable(raw) {
        Piece::Token(TokenKind::Variable(raw))
    } else if let Some(op) = OperatorKind::from_symbol(raw) {
        Piece::Token(TokenKind::Operator(op))
    } else {
        Piece::Unclassified(raw)
    };

    log::trace!("classified {raw:?} as {piece:?}");
    Ok(piece)
}
