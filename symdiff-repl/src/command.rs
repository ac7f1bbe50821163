use crate::error::{at, shift, InvalidBinding, MissingArgument, UnknownCommand};
use symdiff_compute::Expr;
use symdiff_error::Error;
use symdiff_parser::{parser::Parser, tree::Tree};

/// A single line of input to the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `let <name> = <number>`: binds a variable in the session environment.
    Let { name: String, value: f64 },

    /// `eval <tree>`: evaluates the expression under the session environment.
    Eval(Expr),

    /// `simplify <tree>`: prints the simplified expression.
    Simplify(Expr),

    /// `steps <tree>`: prints the simplified expression and the rules that were applied.
    Steps(Expr),

    /// `derive <name> <tree>`: prints the derivative with respect to `name`.
    Derive { with: String, expr: Expr },

    /// `exact <tree>`: prints whether the expression is exact.
    Exact(Expr),

    /// `<tree>`: prints the expression in infix form.
    Show(Expr),
}

/// Returns the span of the next whitespace-separated word at or after `start`.
fn next_word(line: &str, start: usize) -> Option<std::ops::Range<usize>> {
    let rest = &line[start..];
    let begin = start + (rest.len() - rest.trim_start().len());
    let len = line[begin..]
        .find(char::is_whitespace)
        .unwrap_or(line.len() - begin);
    (len > 0).then_some(begin..begin + len)
}

/// Reads and builds the expression in `line[start..]`.
fn parse_expr(line: &str, start: usize) -> Result<Expr, Error> {
    if line[start..].trim().is_empty() {
        return Err(at(line.len()..line.len(), MissingArgument { expected: "expression" }));
    }

    let tree = Parser::new(&line[start..])
        .try_parse_full::<Tree>()
        .map_err(|err| shift(err, start))?;
    Expr::build(&tree).map_err(|err| shift(err, start))
}

/// Parses the `<name> = <number>` part of a `let` command.
fn parse_binding(line: &str, start: usize) -> Result<(String, f64), Error> {
    let binding = &line[start..];
    let span = start..line.len();
    let (name, value) = binding.split_once('=').ok_or_else(|| at(span.clone(), InvalidBinding))?;
    let (name, value) = (name.trim(), value.trim());

    let valid_name = name.starts_with(|c: char| c.is_alphabetic() || c == '_')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_');
    if !valid_name {
        return Err(at(span, InvalidBinding));
    }

    let value = value.parse::<f64>().map_err(|_| at(span, InvalidBinding))?;
    Ok((name.to_string(), value))
}

impl Command {
    /// Parses a line of input. Spans in the returned errors point into `line`.
    pub fn parse(line: &str) -> Result<Self, Error> {
        if line.trim_start().starts_with('(') {
            return Ok(Self::Show(parse_expr(line, 0)?));
        }

        let Some(word) = next_word(line, 0) else {
            return Err(at(0..0, MissingArgument { expected: "command" }));
        };
        let rest = word.end;

        Ok(match &line[word.clone()] {
            "let" => {
                let (name, value) = parse_binding(line, rest)?;
                Self::Let { name, value }
            },
            "eval" => Self::Eval(parse_expr(line, rest)?),
            "simplify" => Self::Simplify(parse_expr(line, rest)?),
            "steps" => Self::Steps(parse_expr(line, rest)?),
            "derive" => {
                let Some(with) = next_word(line, rest) else {
                    let end = line.len()..line.len();
                    return Err(at(end, MissingArgument { expected: "variable name" }));
                };
                Self::Derive {
                    with: line[with.clone()].to_string(),
                    expr: parse_expr(line, with.end)?,
                }
            },
            "exact" => Self::Exact(parse_expr(line, rest)?),
            name => return Err(at(word, UnknownCommand { name: name.to_string() })),
        })
    }
}
