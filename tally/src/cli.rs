use clap::builder::styling::{AnsiColor, Effects, Style, Styles};

/// Left-to-right evaluator for whitespace separated `+`/`-` expressions.
#[derive(clap::Parser, Debug, Clone, Default)]
#[clap(styles = CARGO_STYLING, version)]
pub struct Cli {
    /// Expression to evaluate, e.g. "3 + 4 - 1"
    #[arg(allow_hyphen_values = true)]
    pub expression: Option<String>,

    /// Do not print diagnostics
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Evaluate every line read from stdin
    #[arg(long, default_value_t = false, conflicts_with = "expression")]
    pub stdin: bool,

    /// Print the classified pieces instead of evaluating
    #[arg(long, default_value_t = false)]
    pub parse: bool,

    /// Maximum amount of errors to report
    #[arg(long, value_name = "max-errors", default_value_t = 4)]
    pub max_errors: usize,
}

const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

/// Cargo's color style
/// [source](https://github.com/crate-ci/clap-cargo/blob/master/src/style.rs)
const CARGO_STYLING: Styles = Styles::styled()
    .header(HEADER)
    .usage(USAGE)
    .literal(LITERAL)
    .placeholder(PLACEHOLDER)
    .error(ERROR)
    .valid(VALID)
    .invalid(INVALID);

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[test]
    fn positional_expression() {
        let cli = Cli::try_parse_from(["tally", "3 + 4 - 1"]).unwrap();
        assert_eq!(cli.expression.as_deref(), Some("3 + 4 - 1"));
        assert!(!cli.quiet && !cli.stdin && !cli.parse);
        assert_eq!(cli.max_errors, 4);
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from(["tally", "-q", "--parse", "--max-errors", "1", "1 + x"])
            .unwrap();
        assert!(cli.quiet);
        assert!(cli.parse);
        assert_eq!(cli.max_errors, 1);
    }

    #[test]
    fn no_arguments_is_interactive() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert!(cli.expression.is_none());
        assert!(!cli.stdin);
    }

    #[test]
    fn stdin_excludes_expression() {
        assert!(Cli::try_parse_from(["tally", "--stdin", "1 + 1"]).is_err());
        assert!(Cli::try_parse_from(["tally", "--stdin"]).is_ok());
    }
}
