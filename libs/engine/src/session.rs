//! Interactive session: one environment, one ledger

use crate::ast::AstNode;
use crate::environment::Environment;
use crate::error::Result;
use crate::evaluator::{Evaluator, Outcome};
use crate::ledger::Ledger;
use crate::parser::parse_line;

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Seed `pi`, `e` and `tau` into the global frame
    pub constants: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self { constants: true }
    }
}

pub struct Session {
    env: Environment,
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        Self::with_options(SessionOptions::default())
    }

    pub fn with_options(options: SessionOptions) -> Self {
        let env = if options.constants {
            Environment::with_constants()
        } else {
            Environment::new()
        };
        Self {
            env,
            ledger: Ledger::new(),
        }
    }

    /// Evaluate one parsed line and record it.
    ///
    /// Errors leave the ledger untouched. `Exit` is returned but not recorded.
    /// `Render` writes the document before the render line is recorded.
    pub fn execute(&mut self, node: &AstNode) -> Result<Outcome> {
        let snapshot = node.clone();
        let outcome = Evaluator::new(&mut self.env).evaluate(&snapshot)?;

        match &outcome {
            Outcome::Exit => return Ok(outcome),
            Outcome::Render(path) => {
                self.ledger.write_document(path)?;
                tracing::info!(
                    path = %path.display(),
                    lines = self.ledger.len(),
                    "rendered session"
                );
            }
            Outcome::Value(_) | Outcome::Nothing => {}
        }

        self.ledger.push(snapshot, outcome.clone());
        Ok(outcome)
    }

    /// Parse and execute one input line.
    pub fn run_line(&mut self, line: &str) -> Result<Outcome> {
        let node = parse_line(line)?;
        self.execute(&node)
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
