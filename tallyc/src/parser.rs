use std::fmt::Display;

use tallyspan::Spand;

use crate::classify::{ClassifyError, classify};
use crate::lexer::Lexer;
use crate::token::Piece;

/// Classified pieces of an expression, in evaluation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedExpression<'a> {
    pieces: Vec<Spand<Piece<'a>>>,
}

impl<'a> ParsedExpression<'a> {
    #[must_use]
    pub const fn new(pieces: Vec<Spand<Piece<'a>>>) -> Self {
        Self { pieces }
    }
}

impl<'a> IntoIterator for ParsedExpression<'a> {
    type Item = Spand<Piece<'a>>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.pieces.into_iter()
    }
}

impl Display for ParsedExpression<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{piece}")?;
        }
        write!(f, "]")
    }
}

/// Splits `expr` on whitespace and classifies every piece.
///
/// All classification errors are collected, not just the first.
pub fn parse(expr: &str) -> Result<ParsedExpression<'_>, Vec<ClassifyError<'_>>> {
    let mut pieces = Vec::new();
    let mut errors = Vec::new();

    for raw in Lexer::new(expr) {
        match classify(raw.kind) {
            Ok(piece) => pieces.push(Spand::new(piece, raw.span)),
            Err(err) => errors.push(ClassifyError::new(err, raw.span)),
        }
    }

    if errors.is_empty() {
        Ok(ParsedExpression::new(pieces))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod test {
    use tallyspan::Span;

    use super::*;
    use crate::classify::ClassifyErrorKind;
    use crate::token::{OperatorKind, TokenKind};

    #[test]
    fn keeps_order_and_unclassified_pieces() {
        let pieces: Vec<_> = parse("3 + x ? 4").unwrap().into_iter().collect();
        let kinds: Vec<_> = pieces.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [
                Piece::Token(TokenKind::Constant(3.0)),
                Piece::Token(TokenKind::Operator(OperatorKind::Plus)),
                Piece::Token(TokenKind::Variable("x")),
                Piece::Unclassified("?"),
                Piece::Token(TokenKind::Constant(4.0)),
            ]
        );
        assert_eq!(pieces[3].span, Span::new(6, 7));
    }

    #[test]
    fn empty_input() {
        let parsed = parse("   ").unwrap();
        assert_eq!(parsed, ParsedExpression::default());
        assert_eq!(parsed.to_string(), "[]");
    }

    #[test]
    fn collects_every_error() {
        let errors = parse(". + 1.2.3 - 4").unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ClassifyErrorKind::NoDigits("."));
        assert_eq!(errors[0].span, Span::new(0, 1));
        assert_eq!(errors[1].kind, ClassifyErrorKind::UnparsableConstant("1.2.3"));
        assert_eq!(errors[1].span, Span::new(4, 9));
    }

    #[test]
    fn display() {
        let parsed = parse("3 + 4.5 - x y!").unwrap();
        assert_eq!(parsed.to_string(), "[3, +, 4.5, -, x, y!]");
        assert_eq!(parsed.into_iter().count(), 6);
    }
}
