use std::fmt::Write;
use std::io::BufRead;
use std::process::ExitCode;

use codespan_reporting::diagnostic::Diagnostic;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tallyc::parser::parse;
use tallyc::{Error, evaluate_outcome};

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::{Report, SimpleReport};

enum Input {
    Expression(String),
    Stdin,
    Interactive,
}

pub struct Driver {
    input:      Input,
    max_errors: usize,
    quiet:      bool,
    parse_only: bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    #[must_use]
    fn from_config(cfg: Cli) -> Self {
        let input = match cfg.expression {
            Some(expr) => Input::Expression(expr),
            None if cfg.stdin => Input::Stdin,
            None => Input::Interactive,
        };
        Self {
            input,
            max_errors: cfg.max_errors,
            quiet: cfg.quiet,
            parse_only: cfg.parse,
        }
    }

    /// Exit code is failure if any expression could not be fully evaluated.
    pub fn run(&self) -> ExitCode {
        let ok = match &self.input {
            Input::Expression(expr) => Ok(self.process("<arg>", expr)),
            Input::Stdin => self.stdin(),
            Input::Interactive => self.repl(),
        };
        match ok {
            Ok(true) => ExitCode::SUCCESS,
            Ok(false) => ExitCode::FAILURE,
            Err(err) => {
                let file = SimpleFile::new("<stdin>", "");
                self.report("<stdin>", &[SimpleReport::new(err.to_string())], &file);
                ExitCode::FAILURE
            }
        }
    }

    fn report<E: Report>(&self, name: &str, errors: &[E], file: &SimpleFile<&str, &str>) {
        if self.quiet {
            return;
        }
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = term::Config::default();
        let mut displayed = 0;
        {
            let mut writer = writer.lock();
            for e in errors.iter().take(self.max_errors) {
                let report = e.diagnose();
                let _ = term::emit(&mut writer, &config, file, &report);
                displayed += 1;
            }
        }

        if errors.len() <= 1 {
            return;
        }

        let mut message = format!("could not evaluate {name}");
        let _ = message.write_fmt(format_args!(
            " due to {} previous errors ({} emitted)",
            errors.len(),
            displayed
        ));

        let error = Diagnostic::error().with_message(message);

        let _ = term::emit(&mut writer.lock(), &config, file, &error);
    }

    fn report_error(&self, name: &str, source: &str, error: &Error<'_>) {
        let file = SimpleFile::new(name, source);
        match error {
            Error::Classify(spands) => self.report(name, spands, &file),
            Error::Eval(err) => self.report(name, std::slice::from_ref(err), &file),
        }
    }

    /// Evaluates (or only classifies) one expression and prints the result.
    fn process(&self, name: &str, source: &str) -> bool {
        log::info!("evaluating {name}: {source:?}");

        if self.parse_only {
            return match parse(source) {
                Ok(parsed) => {
                    println!("{parsed}");
                    true
                }
                Err(errors) => {
                    self.report_error(name, source, &Error::Classify(errors));
                    false
                }
            };
        }

        let outcome = evaluate_outcome(source);
        if let Some(err) = &outcome.error {
            self.report_error(name, source, err);
        }
        println!("{}", outcome.value);
        outcome.is_ok()
    }

    fn stdin(&self) -> std::io::Result<bool> {
        let mut ok = true;
        for (n, line) in std::io::stdin().lock().lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let name = format!("<stdin>:{}", n + 1);
            ok &= self.process(&name, &line);
        }
        Ok(ok)
    }

    fn repl(&self) -> std::io::Result<bool> {
        let mut editor = Editor::default();
        let mut ok = true;
        loop {
            let signal = editor.read()?;
            let input = match signal {
                EditorRead::Read(input) => input,
                EditorRead::Break => break,
                EditorRead::Continue => continue,
            };

            let line_ok = self.process("<repl>", &input);
            editor.mark(line_ok);
            ok &= line_ok;
        }

        Ok(ok)
    }
}
