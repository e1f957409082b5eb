use crate::error::Error;
use crate::lexer::tokenize;
use crate::parser::Parser;
use crate::printer::render;
use crate::store::VariableStore;

/// One evaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    /// The parsed tree in canonical form.
    pub canonical: String,
}

/// Runs lex/parse/evaluate cycles against a store that persists between them.
#[derive(Debug, Default)]
pub struct Session {
    store: VariableStore,
}

impl Session {
    pub fn new() -> Self {
        Session {
            store: VariableStore::new(),
        }
    }

    /// Evaluates one expression. Blank input yields `Ok(None)`.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Evaluation>, Error> {
        let tokens = tokenize(line)?;
        if tokens.is_empty() {
            return Ok(None);
        }

        let mut parser = Parser::new(tokens, &mut self.store);
        let tree = parser.parse()?;
        parser.expect_end()?;
        let canonical = render(&tree)?;
        let value = parser.evaluate(&tree)?;

        Ok(Some(Evaluation { value, canonical }))
    }

    /// Evaluates one expression per non-blank line, stopping at the first
    /// failure. Errors carry the 1-based line they came from.
    pub fn eval_source(&mut self, source: &str) -> Result<Vec<Evaluation>, Error> {
        let mut results = Vec::new();
        for (index, line) in source.lines().enumerate() {
            match self.eval_line(line) {
                Ok(Some(evaluation)) => results.push(evaluation),
                Ok(None) => {}
                Err(err) => {
                    return Err(Error::Line {
                        line: index + 1,
                        source: Box::new(err),
                    });
                }
            }
        }
        Ok(results)
    }

    pub fn store(&self) -> &VariableStore {
        &self.store
    }

    pub fn reset(&mut self) {
        self.store.clear();
    }

    pub fn into_store(self) -> VariableStore {
        self.store
    }
}
