use crate::error::LexError;
use crate::token::{Token, TokenKind};

pub struct Lexer {
    text: Vec<char>,
    pos: usize,
    current_char: Option<char>,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();
        Lexer {
            text: chars,
            pos: 0,
            current_char,
            line: 1,
            column: 1,
        }
    }

    fn advance(&mut self) {
        if self.current_char == Some('\n') {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
        self.current_char = self.text.get(self.pos).copied();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    // Digits with at most one '.', so "1.5.2" lexes as "1.5" then ".2".
    fn number(&mut self) -> String {
        let mut result = String::new();
        let mut seen_dot = false;
        while let Some(ch) = self.current_char {
            if ch.is_ascii_digit() || (ch == '.' && !seen_dot) {
                seen_dot |= ch == '.';
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn id(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    pub fn get_next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let Some(ch) = self.current_char else {
            return Ok(None);
        };
        let (line, column) = (self.line, self.column);

        if ch.is_ascii_digit() || ch == '.' {
            let text = self.number();
            return Ok(Some(Token::new(TokenKind::Number, text, line, column)));
        }

        if ch.is_alphabetic() || ch == '_' {
            let text = self.id();
            return Ok(Some(Token::new(TokenKind::Identifier, text, line, column)));
        }

        let kind = match ch {
            '+' | '-' | '*' | '/' => TokenKind::Operator,
            '=' => TokenKind::Assignment,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            _ => return Err(LexError::InvalidCharacter { ch, line, column }),
        };

        self.advance();
        Ok(Some(Token::new(kind, ch.to_string(), line, column)))
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.get_next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Lexes a whole source string.
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text).tokenize()
}
