//! Ordered history of evaluated lines
//!
//! Each entry keeps its own copy of the parsed line, so rendering replays
//! exactly what was evaluated.

use crate::ast::AstNode;
use crate::error::Result;
use crate::evaluator::Outcome;
use crate::typeset::{Typeset, Typesetter};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub node: AstNode,
    pub result: Outcome,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: AstNode, result: Outcome) {
        self.entries.push(LedgerEntry { node, result });
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Typeset every entry into one `align` environment.
    ///
    /// Entries that typeset to nothing are skipped. An entry whose result is
    /// a quantity gets `&=&` and the value appended.
    pub fn render_document(&self) -> Result<String> {
        let mut typesetter = Typesetter::new();
        let mut document = String::from("\\begin{align}\n");

        for entry in &self.entries {
            let Typeset::Math(latex) = typesetter.typeset(&entry.node)? else {
                continue;
            };
            if latex.is_empty() {
                continue;
            }
            document.push_str(&latex);
            if let Some(quantity) = entry.result.quantity() {
                document.push_str(" &=& ");
                document.push_str(&quantity.to_latex_string());
            }
            document.push_str("\\\\\n");
        }

        document.push_str("\\end{align}");
        Ok(document)
    }

    pub fn write_document(&self, path: &Path) -> Result<()> {
        let document = self.render_document()?;
        fs::write(path, document)?;
        Ok(())
    }
}
