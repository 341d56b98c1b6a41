use std::collections::HashMap;
use std::fmt::Display;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Plus,
    Minus,
}

/// Symbol table for every operator, filled on first use.
static OPERATORS: LazyLock<HashMap<&'static str, OperatorKind>> = LazyLock::new(|| {
    OperatorKind::ALL
        .iter()
        .map(|&op| (op.symbol(), op))
        .collect()
});

impl OperatorKind {
    pub const ALL: [Self; 2] = [Self::Plus, Self::Minus];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
        }
    }

    #[must_use]
    pub const fn operate(self, acc: f64, operand: f64) -> f64 {
        match self {
            Self::Plus => acc + operand,
            Self::Minus => acc - operand,
        }
    }

    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Self> {
        OPERATORS.get(s).copied()
    }
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    Constant(f64),
    Variable(&'a str),
    Operator(OperatorKind),
}

impl TokenKind<'_> {
    /// Constants and variables are data; operators are not.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    #[must_use]
    pub const fn as_operator(&self) -> Option<OperatorKind> {
        match self {
            Self::Operator(op) => Some(*op),
            _ => None,
        }
    }
}

impl Display for TokenKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{value}"),
            Self::Variable(name) => write!(f, "{name}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// One whitespace-delimited piece of an expression after classification.
///
/// Text that is neither data nor an operator is kept verbatim as
/// `Unclassified` so positions in the expression stay intact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Piece<'a> {
    Token(TokenKind<'a>),
    Unclassified(&'a str),
}

impl<'a> Piece<'a> {
    #[must_use]
    pub const fn token(&self) -> Option<TokenKind<'a>> {
        match self {
            Self::Token(kind) => Some(*kind),
            Self::Unclassified(_) => None,
        }
    }

    #[must_use]
    pub const fn is_data(&self) -> bool {
        match self {
            Self::Token(kind) => kind.is_data(),
            Self::Unclassified(_) => false,
        }
    }
}

impl Display for Piece<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Token(kind) => Display::fmt(kind, f),
            Self::Unclassified(raw) => write!(f, "{raw}"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn registry_covers_every_operator() {
        let mut seen = HashSet::new();
        for op in OperatorKind::ALL {
            assert!(!op.symbol().is_empty());
            assert!(seen.insert(op.symbol()), "duplicate symbol {op}");
            assert_eq!(OperatorKind::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(OPERATORS.len(), OperatorKind::ALL.len());
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(OperatorKind::from_symbol("*"), None);
        assert_eq!(OperatorKind::from_symbol("++"), None);
        assert_eq!(OperatorKind::from_symbol(""), None);
    }

    #[test]
    fn operate() {
        assert!((OperatorKind::Plus.operate(3.0, 4.0) - 7.0).abs() < f64::EPSILON);
        assert!((OperatorKind::Minus.operate(3.0, 4.0) + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn display() {
        assert_eq!(TokenKind::Constant(2.5).to_string(), "2.5");
        assert_eq!(TokenKind::Variable("x").to_string(), "x");
        assert_eq!(TokenKind::Operator(OperatorKind::Minus).to_string(), "-");
        assert_eq!(Piece::Unclassified("x1").to_string(), "x1");
    }

    #[test]
    fn data_tokens() {
        assert!(TokenKind::Constant(1.0).is_data());
        assert!(TokenKind::Variable("y").is_data());
        assert!(!TokenKind::Operator(OperatorKind::Plus).is_data());
        assert!(!Piece::Unclassified("?").is_data());
    }
}
