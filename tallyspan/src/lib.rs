use std::error::Error;
use std::fmt::Display;
use std::ops::Range;

/// Half-open byte range into an expression string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    lo: u32,
    hi: u32,
}

impl Span {
    #[must_use]
    #[inline]
    pub const fn new(lo: u32, hi: u32) -> Self {
        if hi < lo {
            Self { lo: hi, hi: lo }
        } else {
            Self { lo, hi }
        }
    }

    /// Zero-width span sitting at `at`.
    #[must_use]
    #[inline]
    pub const fn empty(at: u32) -> Self {
        Self { lo: at, hi: at }
    }

    #[must_use]
    #[inline]
    pub const fn lo(self) -> u32 {
        self.lo
    }

    /// Text covered by this span, or `None` when it does not fall on char
    /// boundaries of `source`.
    #[must_use]
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(Range::<usize>::from(self))
    }
}

impl From<Span> for Range<usize> {
    fn from(value: Span) -> Self {
        value.lo as usize..value.hi as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spand<T> {
    pub kind: T,
    pub span: Span,
}

impl<T: Display> Display for Spand<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.kind(), f)
    }
}

impl<T: Error> Error for Spand<T> {}

impl<T> Spand<T> {
    #[inline]
    pub const fn new(kind: T, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub const fn kind(&self) -> &T {
        &self.kind
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalises_reversed_bounds() {
        let span = Span::new(7, 3);
        assert_eq!(span.lo(), 3);
        assert_eq!(Range::<usize>::from(span), 3..7);
    }

    #[test]
    fn empty_span() {
        let span = Span::empty(2);
        assert_eq!(span.lo(), 2);
        assert!(Range::<usize>::from(span).is_empty());
        assert_eq!(span.slice("1 +"), Some(""));
    }

    #[test]
    fn slice_source() {
        let source = "10 - x";
        assert_eq!(Span::new(0, 2).slice(source), Some("10"));
        assert_eq!(Span::new(5, 6).slice(source), Some("x"));
        assert_eq!(Span::new(5, 60).slice(source), None);
    }

    #[test]
    fn slice_off_char_boundary() {
        assert_eq!(Span::new(0, 1).slice("é"), None);
    }

    #[test]
    fn spanned_display() {
        let spand = Spand::new("x1", Span::new(4, 6));
        assert_eq!(spand.to_string(), "x1");
        assert_eq!(*spand.kind(), "x1");
    }
}
