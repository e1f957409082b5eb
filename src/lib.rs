mod ast;
mod error;
mod evaluator;
mod lexer;
mod parser;
mod printer;
mod session;
mod store;
mod token;

pub use ast::{ASTNode, OPERATORS};
pub use error::{Error, EvalError, LexError, ParseError, RenderError};
pub use evaluator::evaluate;
pub use lexer::{Lexer, tokenize};
pub use parser::{MAX_DEPTH, Parser};
pub use printer::render;
pub use session::{Evaluation, Session};
pub use store::VariableStore;
pub use token::{Token, TokenKind};

/// Evaluates every line of `source` in a fresh session and returns the
/// resulting variables.
pub fn execute(source: &str) -> Result<VariableStore, Error> {
    let mut session = Session::new();
    session.eval_source(source)?;
    Ok(session.into_store())
}
