use crate::ast::ASTNode;
use crate::error::{EvalError, ParseError};
use crate::evaluator;
use crate::store::VariableStore;
use crate::token::{Token, TokenKind};

/// Deepest tree `parse` builds. Parenthesis nesting, chained assignments and
/// operator chains all count; going past it is an `UnexpectedToken` error at
/// the token that would go deeper.
pub const MAX_DEPTH: usize = 256;

// A node and the height of its tree.
type Parsed = (ASTNode, usize);

/// Recursive-descent parser over a token sequence.
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := factor (('*' | '/') factor)*
/// factor     := primary
/// primary    := NUMBER | IDENTIFIER ['=' expression] | '(' expression ')'
/// ```
///
/// The cursor only moves forward. Once the real tokens are consumed every read
/// yields the `END` sentinel, positioned just after the last token.
pub struct Parser<'s> {
    tokens: Vec<Token>,
    index: usize,
    end: Token,
    depth: usize,
    store: &'s mut VariableStore,
}

impl<'s> Parser<'s> {
    pub fn new(tokens: Vec<Token>, store: &'s mut VariableStore) -> Self {
        let end = match tokens.last() {
            Some(last) => Token::end(last.line, last.column + last.text.chars().count()),
            None => Token::end(1, 1),
        };
        Parser {
            tokens,
            index: 0,
            end,
            depth: 0,
            store,
        }
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.index).unwrap_or(&self.end)
    }

    fn next_token(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    fn error_at(&self, index: usize) -> ParseError {
        let token = self.tokens.get(index).unwrap_or(&self.end);
        ParseError::UnexpectedToken {
            text: token.text.clone(),
            line: token.line,
            column: token.column,
        }
    }

    fn unexpected(&self) -> ParseError {
        self.error_at(self.index)
    }

    fn eat(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.index < self.tokens.len() && self.current_token().kind == kind {
            self.next_token();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Returns the operator character if the current token is one of `ops`.
    fn operator_in(&self, ops: &[&str]) -> Option<char> {
        let token = self.current_token();
        ops.iter()
            .find(|op| token.is_operator(op))
            .and_then(|op| op.chars().next())
    }

    /// Runs `inner` one nesting level down, failing at token `at` past `MAX_DEPTH`.
    fn nested(
        &mut self,
        at: usize,
        inner: impl FnOnce(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at(at));
        }
        self.depth += 1;
        let result = inner(&mut *self);
        self.depth -= 1;
        result
    }

    fn fold(&self, op: char, left: Parsed, right: Parsed, at: usize) -> Result<Parsed, ParseError> {
        let height = left.1.max(right.1) + 1;
        if height > MAX_DEPTH {
            return Err(self.error_at(at));
        }
        Ok((ASTNode::binary(op, left.0, right.0), height))
    }

    pub fn parse(&mut self) -> Result<ASTNode, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        self.expression().map(|(node, _)| node)
    }

    /// Fails on the first token `parse` left unconsumed.
    pub fn expect_end(&self) -> Result<(), ParseError> {
        if self.index < self.tokens.len() {
            Err(self.unexpected())
        } else {
            Ok(())
        }
    }

    /// Evaluates `node` against the store this parser is bound to.
    pub fn evaluate(&mut self, node: &ASTNode) -> Result<f64, EvalError> {
        evaluator::evaluate(node, self.store)
    }

    pub fn store(&self) -> &VariableStore {
        &*self.store
    }

    fn expression(&mut self) -> Result<Parsed, ParseError> {
        let mut node = self.term()?;

        while let Some(op) = self.operator_in(&["+", "-"]) {
            let at = self.index;
            self.next_token();
            let right = self.term()?;
            node = self.fold(op, node, right, at)?;
        }

        Ok(node)
    }

    fn term(&mut self) -> Result<Parsed, ParseError> {
        let mut node = self.factor()?;

        while let Some(op) = self.operator_in(&["*", "/"]) {
            let at = self.index;
            self.next_token();
            let right = self.factor()?;
            node = self.fold(op, node, right, at)?;
        }

        Ok(node)
    }

    fn factor(&mut self) -> Result<Parsed, ParseError> {
        self.primary()
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        if self.index >= self.tokens.len() {
            return Err(self.unexpected());
        }

        let at = self.index;
        let kind = self.current_token().kind;
        match kind {
            TokenKind::Number => {
                // Out-of-range literals become infinite, which has no lexeme.
                let value = self
                    .current_token()
                    .text
                    .parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| self.unexpected())?;
                self.next_token();
                Ok((ASTNode::Number(value), 1))
            }
            TokenKind::Identifier => {
                let name = self.current_token().text.clone();
                self.next_token();
                if self.index < self.tokens.len()
                    && self.current_token().kind == TokenKind::Assignment
                {
                    self.next_token();
                    let (expression, height) = self.nested(at, |parser| parser.expression())?;
                    if height >= MAX_DEPTH {
                        return Err(self.error_at(at));
                    }
                    Ok((ASTNode::assignment(name, expression), height + 1))
                } else {
                    Ok((ASTNode::Variable(name), 1))
                }
            }
            TokenKind::LeftParen => {
                self.next_token();
                let node = self.nested(at, |parser| parser.expression())?;
                self.eat(TokenKind::RightParen)?;
                Ok(node)
            }
            TokenKind::Operator | TokenKind::Assignment | TokenKind::RightParen => {
                Err(self.unexpected())
            }
        }
    }
}
