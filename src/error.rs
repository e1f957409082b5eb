use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum LexError {
    #[error("[line {line}, column {column}] Invalid character: {ch}")]
    #[diagnostic(code(infix_calc::lex))]
    InvalidCharacter { ch: char, line: usize, column: usize },
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ParseError {
    /// `text` is `END` when the input ran out early.
    #[error("[line {line}, column {column}] Unexpected token: {text}")]
    #[diagnostic(code(infix_calc::parse))]
    UnexpectedToken {
        text: String,
        line: usize,
        column: usize,
    },
    #[error("Empty input: expected an expression")]
    #[diagnostic(code(infix_calc::parse))]
    EmptyInput,
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum EvalError {
    #[error("Unknown identifier: {name}")]
    #[diagnostic(code(infix_calc::eval), help("assign a value to it before using it"))]
    UnknownIdentifier { name: String },
    #[error("Division by zero")]
    #[diagnostic(code(infix_calc::eval))]
    DivisionByZero,
    #[error("Invalid operator: {0:?}")]
    #[diagnostic(code(infix_calc::eval))]
    InvalidOperator(char),
}

#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum RenderError {
    #[error("Invalid node: binary operation with operator {op:?}")]
    #[diagnostic(code(infix_calc::render))]
    InvalidNode { op: char },
}

/// Any failure of a lex/parse/evaluate cycle.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    #[diagnostic(transparent)]
    Render(#[from] RenderError),
    #[error("line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Strips any `Line` wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Line { source, .. } => source.root(),
            other => other,
        }
    }
}
