use cursor::Cursor;
use errors::ErrorReporter;

pub mod token;
pub use token::{Token, TokenData, TokenKind};
use token::TokenData::*;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ScanError {
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// Single-pass scanner over one source string. `start` marks the beginning
/// of the lexeme being scanned, `current` the next unconsumed char.
pub struct Scanner<'a> {
    start: Cursor<'a>,
    current: Cursor<'a>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        let cursor = Cursor::new(source);
        Self { start: cursor.clone(), current: cursor, tokens: Vec::new() }
    }

    /// Scans the whole source. Never fails: lexical errors go to the
    /// reporter, the offending input forms no token, and scanning resumes.
    /// The returned sequence always ends with `Eof`.
    pub fn scan_tokens(mut self, reporter: &mut ErrorReporter) -> Vec<Token<'a>> {
        loop {
            self.start = self.current.clone();
            let Some(c) = self.current.next() else { break };
            self.scan_token(c, reporter);
        }

        self.tokens.push(Token { data: Eof, lexeme: "", line: self.current.line() });
        self.tokens
    }

    fn scan_token(&mut self, c: char, reporter: &mut ErrorReporter) {
        match c {
            '(' => self.add_token(LeftParen),
            ')' => self.add_token(RightParen),
            ',' => self.add_token(Comma),
            '.' => self.add_token(Dot),
            '-' => self.add_token(Minus),
            '+' => self.add_token(Plus),
            ';' => self.add_token(Semicolon),
            '*' => self.add_token(Star),

            '!' => {
                if self.consume_if_matches('=') {
                    self.add_token(BangEqual)
                } else {
                    self.add_token(Bang)
                }
            }

            '=' => {
                if self.consume_if_matches('=') {
                    self.add_token(EqualEqual)
                } else {
                    self.add_token(Equal)
                }
            }

            '<' => {
                if self.consume_if_matches('=') {
                    self.add_token(LessEqual)
                } else {
                    self.add_token(Less)
                }
            }

            '>' => {
                if self.consume_if_matches('=') {
                    self.add_token(GreaterEqual)
                } else {
                    self.add_token(Greater)
                }
            }

            '/' => {
                if self.consume_if_matches('/') {
                    // Comment, runs up to (not including) the newline
                    while self.current.peek().is_some_and(|c| c != '\n') {
                        self.current.next();
                    }
                } else {
                    self.add_token(Slash)
                }
            }

            '"' => self.string(reporter),

            d if d.is_ascii_digit() => self.number(),

            a if a.is_ascii_alphabetic() || a == '_' => self.identifier(),

            // Newline counting is the cursor's job
            ' ' | '\r' | '\t' | '\n' => (),

            c => reporter.error(self.start.line(), ScanError::UnexpectedCharacter(c)),
        }
    }

    fn add_token(&mut self, data: TokenData<'a>) {
        self.tokens.push(Token {
            data,
            lexeme: self.start.slice_until(&self.current),
            line: self.start.line(),
        })
    }

    fn consume_if_matches(&mut self, expected: char) -> bool {
        match self.current.peek() {
            Some(c) if c == expected => {
                self.current.next();
                true
            }
            _ => false,
        }
    }

    fn string(&mut self, reporter: &mut ErrorReporter) {
        loop {
            match self.current.next() {
                Some('"') => {
                    // Strings may span newlines; the token stays on the line
                    // the opening quote was on.
                    let lexeme = self.start.slice_until(&self.current);
                    self.add_token(Str(&lexeme[1..lexeme.len() - 1]));
                    return;
                }
                Some(_) => (),
                None => {
                    reporter.error(self.start.line(), ScanError::UnterminatedString);
                    return;
                }
            }
        }
    }

    fn number(&mut self) {
        while self.current.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.current.next();
        }

        // A `.` only belongs to the number when another digit follows it
        if self.current.peek() == Some('.')
            && self.current.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            self.current.next();
            while self.current.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.current.next();
            }
        }

        let lexeme = self.start.slice_until(&self.current);
        let value = lexeme.parse().expect("digit runs always parse as f64");
        self.add_token(Number(value));
    }

    fn identifier(&mut self) {
        while self.current.peek().is_some_and(|c| c.is_ascii_alphanumeric() || c == '_') {
            self.current.next();
        }

        let data = match self.start.slice_until(&self.current) {
            "and" => And,
            "class" => Class,
            "else" => Else,
            "false" => False,
            "fun" => Fun,
            "for" => For,
            "if" => If,
            "nil" => Nil,
            "or" => Or,
            "print" => Print,
            "return" => Return,
            "super" => Super,
            "this" => This,
            "true" => True,
            "var" => Var,
            "while" => While,
            _ => Identifier,
        };
        self.add_token(data);
    }
}
