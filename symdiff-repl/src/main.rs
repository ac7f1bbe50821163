mod command;
mod error;
mod session;

use anyhow::Context as _;
use clap::Parser;
use error::report_to_stderr;
use rustyline::{error::ReadlineError, DefaultEditor};
use session::Session;
use std::{fs, io::{self, IsTerminal, Read}, path::PathBuf};
use symdiff_compute::Env;
use tracing::Level;

/// Evaluate, simplify and differentiate symbolic expressions.
///
/// Each line of input is one command: `let <name> = <number>`, `eval <tree>`, `simplify <tree>`,
/// `steps <tree>`, `derive <name> <tree>`, `exact <tree>`, or a bare `<tree>` to print it. Trees
/// are written as tagged tuples, such as `(add, (number, 0), (variable, "x"))`.
#[derive(Parser, Debug)]
#[command(name = "symdiff", version)]
struct Cli {
    /// File of commands to run, one per line. Without it, commands are read from stdin, or from
    /// an interactive prompt if stdin is a terminal.
    file: Option<PathBuf>,

    /// Bind a variable before running any command, as `name=value`. May be repeated.
    #[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_var)]
    vars: Vec<(String, f64)>,

    /// Log simplification and differentiation to stderr.
    #[arg(long, short)]
    verbose: bool,
}

/// Parses a `name=value` binding given on the command line.
fn parse_var(arg: &str) -> Result<(String, f64), String> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `name=value`, found `{}`", arg))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for `{}`: {}", name.trim(), err))?;
    Ok((name.trim().to_string(), value))
}

/// Executes a line and prints the result or the error.
fn execute_line(session: &mut Session, line: &str) {
    match session.execute(line) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => (), // intentionally print nothing
        Err(err) => report_to_stderr(&err, line),
    }
}

/// Executes every non-blank line of the input. Lines starting with `#` are comments.
fn execute_all(session: &mut Session, input: &str) {
    input
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .for_each(|line| execute_line(session, line));
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let mut session = Session::new(cli.vars.into_iter().collect::<Env>());

    if let Some(path) = cli.file {
        // run source file
        let input = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        execute_all(&mut session, &input);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input).context("failed to read stdin")?;
        execute_all(&mut session, &input);
    } else {
        // run the repl / interactive mode
        let mut rl = DefaultEditor::new()?;

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            execute_line(session, &input);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn var_bindings() {
        assert_eq!(parse_var("x=2"), Ok(("x".to_string(), 2.0)));
        assert_eq!(parse_var(" y = -0.5 "), Ok(("y".to_string(), -0.5)));
        assert!(parse_var("x").is_err());
        assert!(parse_var("x=two").is_err());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let mut session = Session::default();
        execute_all(&mut session, "# bind x\n\nlet x = 4\n   \n");
        assert_eq!(
            session.execute("eval (variable, \"x\")").unwrap(),
            Some("4".to_string()),
        );
    }
}
