use tallyspan::{Span, Spand};
use thiserror::Error;

use crate::lexer::clamp_offset;
use crate::parser::ParsedExpression;
use crate::token::{OperatorKind, Piece, TokenKind};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind<'a> {
    #[error("empty expression")]
    EmptyExpression,
    #[error("first part of expression is not data: '{0}'")]
    LeadingOperator(&'a str),
    #[error("operator '{0}' at end of expression")]
    TrailingOperator(OperatorKind),
    #[error("expected operator at position {position}, found '{found}'")]
    ExpectedOperator { position: usize, found: &'a str },
    #[error("operand '{0}' is not data")]
    OperandNotData(&'a str),
    #[error("variable '{0}' has no value")]
    UnresolvedVariable(&'a str),
}

pub type EvalError<'a> = Spand<EvalErrorKind<'a>>;

/// Failure together with the value computed before it happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halt<'a> {
    pub error:   EvalError<'a>,
    pub partial: f64,
}

pub type EvalResult<'a> = Result<f64, Halt<'a>>;

/// Left-to-right reducer over a parsed expression.
pub struct Evaluator<'a> {
    source:  &'a str,
    pieces:  Vec<Spand<Piece<'a>>>,
    current: usize,
    acc:     f64,
}

impl<'a> Evaluator<'a> {
    /// `source` is the text `expr` was parsed from; errors quote it.
    #[must_use]
    pub fn new(source: &'a str, expr: ParsedExpression<'a>) -> Self {
        Self {
            source,
            pieces: expr.into_iter().collect(),
            current: 0,
            acc: 0.0,
        }
    }

    fn peek(&self) -> Option<Spand<Piece<'a>>> {
        self.pieces.get(self.current).copied()
    }

    fn next(&mut self) -> Option<Spand<Piece<'a>>> {
        let piece = self.peek()?;
        self.current += 1;
        Some(piece)
    }

    fn text(&self, span: Span) -> &'a str {
        span.slice(self.source).unwrap_or_default()
    }

    const fn halt(&self, kind: EvalErrorKind<'a>, span: Span) -> Halt<'a> {
        Halt {
            error:   EvalError::new(kind, span),
            partial: self.acc,
        }
    }

    fn operand(&self, piece: Spand<Piece<'a>>) -> Result<f64, Halt<'a>> {
        match piece.kind {
            Piece::Token(TokenKind::Constant(value)) => Ok(value),
            Piece::Token(TokenKind::Variable(name)) => {
                Err(self.halt(EvalErrorKind::UnresolvedVariable(name), piece.span))
            }
            Piece::Token(TokenKind::Operator(_)) | Piece::Unclassified(_) => Err(self.halt(
                EvalErrorKind::OperandNotData(self.text(piece.span)),
                piece.span,
            )),
        }
    }

    /// `piece` sits at 1-based `position` and must be an operator.
    fn operator(
        &self,
        piece: Spand<Piece<'a>>,
        position: usize,
    ) -> Result<OperatorKind, Halt<'a>> {
        piece
            .kind
            .token()
            .and_then(|kind| kind.as_operator())
            .ok_or_else(|| {
                self.halt(
                    EvalErrorKind::ExpectedOperator {
                        position,
                        found: self.text(piece.span),
                    },
                    piece.span,
                )
            })
    }

    /// Folds the whole expression into a single number.
    pub fn run(mut self) -> EvalResult<'a> {
        let Some(first) = self.next() else {
            let end = Span::empty(clamp_offset(self.source.len()));
            return Err(self.halt(EvalErrorKind::EmptyExpression, end));
        };
        if !first.kind.is_data() {
            return Err(self.halt(
                EvalErrorKind::LeadingOperator(self.text(first.span)),
                first.span,
            ));
        }
        self.acc = self.operand(first)?;
        log::debug!("start with {}", self.acc);

        while let Some(piece) = self.next() {
            let op = self.operator(piece, self.current)?;
            let Some(operand) = self.next() else {
                return Err(self.halt(EvalErrorKind::TrailingOperator(op), piece.span));
            };
            let value = self.operand(operand)?;
            let acc = op.operate(self.acc, value);
            log::debug!("{} {op} {value} = {acc}", self.acc);
            self.acc = acc;
        }

        Ok(self.acc)
    }
}
