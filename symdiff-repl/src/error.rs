use ariadne::{Fmt, Source};
use std::ops::Range;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, EXPR};

/// The commands understood by the REPL, used in help messages.
pub const COMMANDS: &[&str] = &["let", "eval", "simplify", "steps", "derive", "exact"];

/// A line started with a word that is not a command.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `{}`", self.name),
    labels = ["this command"],
    help = format!(
        "the commands are: {}; a line starting with `{}` is shown as an expression",
        COMMANDS.join(", "),
        "(".fg(EXPR),
    ),
)]
pub struct UnknownCommand {
    /// The word that was used.
    pub name: String,
}

/// A command was missing one of its arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing {}", self.expected),
    labels = [format!("add the {} here", self.expected)],
)]
pub struct MissingArgument {
    /// A description of the missing argument.
    pub expected: &'static str,
}

/// A `let` command did not have the form `let <name> = <number>`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid variable binding",
    labels = ["this binding"],
    help = format!("bindings look like `{}`", "let x = 2.5".fg(EXPR)),
)]
pub struct InvalidBinding;

/// Moves the spans of an error produced from a slice of a line so that they point into the whole
/// line.
pub fn shift(mut err: Error, offset: usize) -> Error {
    for span in &mut err.spans {
        *span = span.start + offset..span.end + offset;
    }
    err
}

/// Creates an error pointing at the given region of the line.
pub fn at(span: Range<usize>, kind: impl symdiff_error::ErrorKind + 'static) -> Error {
    Error::new(vec![span], kind)
}

/// Report the error to stderr.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
pub fn report_to_stderr(err: &Error, input: &str) {
    let report = err.build_report("input");
    // nothing more can be done if stderr is closed
    let _ = report.eprint(("input", Source::from(input)));
}
