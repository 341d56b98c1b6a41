use std::str::Chars;

use tallyspan::{Span, Spand};

/// Splits an expression into runs of non-whitespace text.
///
/// No further tokenizing happens here: `3+4` is a single piece.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Chars<'a>,

    /// start byte position of current piece
    byte_start: usize,

    /// byte position of cursor
    byte: usize,
}

pub type RawPiece<'a> = Spand<&'a str>;

/// Spans are `u32`; offsets past `u32::MAX` all land on the last one.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn clamp_offset(byte: usize) -> u32 {
    if byte > u32::MAX as usize {
        u32::MAX
    } else {
        byte as u32
    }
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.chars(),
            byte_start: 0,
            byte: 0,
        }
    }

    fn first(&self) -> Option<char> {
        self.chars.clone().next()
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().inspect(|c| self.byte += c.len_utf8())
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.first().is_some_and(&pred) {
            self.bump();
        }
    }

    const fn make_span(&self) -> Span {
        Span::new(clamp_offset(self.byte_start), clamp_offset(self.byte))
    }

    fn view(&self) -> &'a str {
        &self.input[self.byte_start..self.byte]
    }

    pub fn next_piece(&mut self) -> Option<RawPiece<'a>> {
        self.eat_while(char::is_whitespace);

        self.byte_start = self.byte;
        self.first()?;
        self.eat_while(|c| !c.is_whitespace());

        Some(RawPiece::new(self.view(), self.make_span()))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = RawPiece<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_piece()
    }
}
