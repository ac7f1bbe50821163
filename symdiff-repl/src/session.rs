use crate::command::Command;
use symdiff_compute::{simplify_with_steps, Env, Eval};
use symdiff_error::Error;

/// The state kept between lines of input: the variables bound with `let`.
#[derive(Debug, Clone, Default)]
pub struct Session {
    env: Env,
}

impl Session {
    /// Creates a session whose environment starts with the given bindings.
    pub fn new(env: Env) -> Self {
        Self { env }
    }

    /// Executes one line of input, returning the text to print, if any.
    pub fn execute(&mut self, line: &str) -> Result<Option<String>, Error> {
        let command = Command::parse(line)?;
        tracing::debug!(?command, "parsed command");

        Ok(match command {
            Command::Let { name, value } => {
                self.env.add_var(&name, value);
                None
            },
            Command::Eval(expr) => Some(expr.eval(&self.env)?.to_string()),
            Command::Simplify(expr) => Some(expr.simplify().to_string()),
            Command::Steps(expr) => {
                let (simplified, steps) = simplify_with_steps(&expr);
                let mut out = simplified.to_string();
                for step in steps {
                    out.push_str(&format!("\n  {}", step));
                }
                Some(out)
            },
            Command::Derive { with, expr } => Some(expr.derive(&with).to_string()),
            Command::Exact(expr) => Some(expr.is_exact().to_string()),
            Command::Show(expr) => Some(expr.to_string()),
        })
    }
}
