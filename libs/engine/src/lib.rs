//! dimcalc engine - parse, evaluate and typeset calculator lines
//!
//! ```text
//! Input line
//!      |
//!   Lexer -> Parser -> AST
//!      |
//!   Evaluator (Environment) -> Outcome
//!      |
//!   Ledger -> Typesetter -> LaTeX document
//! ```
//!
//! A [`Session`] ties the pieces together:
//!
//! ```
//! use dimcalc_engine::Session;
//!
//! let mut session = Session::new();
//! let outcome = session.run_line("1 N * 1 m").unwrap();
//! assert_eq!(outcome.quantity().unwrap().to_string(), "1.0 J");
//! ```

pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod ledger;
pub mod lexer;
pub mod parser;
pub mod session;
pub mod token;
pub mod typeset;
pub mod walker;

// Re-export main types
pub use ast::{AstNode, Command};
pub use environment::{Environment, FrameGuard};
pub use error::{Error, Result};
pub use evaluator::{Evaluator, Outcome};
pub use functions::{Function, NativeFunction, UserFunction};
pub use ledger::{Ledger, LedgerEntry};
pub use parser::{parse_line, Parser};
pub use session::{Session, SessionOptions};
pub use typeset::{Typeset, Typesetter};
pub use walker::NodeWalker;

pub use dimcalc_units::{Quantity, Unit};
