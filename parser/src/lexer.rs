//! FILENAME: parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, number parsing in all accepted forms (42, 3.14,
//! .5, 1e-3, 2j), and the multi-character operators ** and //.
//!
//! SUPPORTED OPERATORS:
//! - Single char: + - * / % ( )
//! - Multi char: ** //
//!
//! Identifiers and quoted strings are scanned as complete tokens even
//! though the parser always rejects them; scanning them whole lets the
//! rejection name the construct instead of reporting a stray character.

use crate::ast::Number;
use crate::token::Token;
use num_complex::Complex64;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        match self.input.next() {
            Some('+') => Token::Plus,
            Some('-') => Token::Minus,
            Some('%') => Token::Percent,
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,

            // Handle * and potentially **
            Some('*') => self.read_star_operator(),

            // Handle / and potentially //
            Some('/') => self.read_slash_operator(),

            // Handle quotes for string literals (rejected later, by name)
            Some(quote @ ('"' | '\'')) => self.read_string(quote),

            // Handle numbers (starts with digit or dot)
            Some(ch) if ch.is_ascii_digit() || ch == '.' => self.read_number(ch),

            // Handle identifiers (starts with letter or underscore)
            Some(ch) if is_letter(ch) => self.read_identifier(ch),

            // End of input
            None => Token::EOF,

            // Unknown character
            Some(ch) => Token::Illegal(ch),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Handles operators starting with '*': *, **
    fn read_star_operator(&mut self) -> Token {
        match self.input.peek() {
            Some('*') => {
                self.input.next();
                Token::DoubleAsterisk
            }
            _ => Token::Asterisk,
        }
    }

    /// Handles operators starting with '/': /, //
    fn read_slash_operator(&mut self) -> Token {
        match self.input.peek() {
            Some('/') => {
                self.input.next();
                Token::DoubleSlash
            }
            _ => Token::Slash,
        }
    }

    fn read_string(&mut self, quote: char) -> Token {
        let mut result = String::new();
        // Consume chars until the matching quote or EOF
        while let Some(&ch) = self.input.peek() {
            if ch == quote {
                self.input.next(); // Consume the closing quote
                return Token::String(result);
            }
            result.push(ch);
            self.input.next();
        }
        // If we hit EOF without a closing quote, return what we have;
        // the parser rejects string tokens either way.
        Token::String(result)
    }

    /// Reads a numeric literal: digits with an optional fraction, an
    /// optional exponent part, and an optional imaginary suffix j/J.
    fn read_number(&mut self, first_char: char) -> Token {
        let mut number_str = String::from(first_char);
        let mut has_dot = first_char == '.';

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.input.next();
            } else if ch == '.' && !has_dot {
                has_dot = true;
                number_str.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        // Optional exponent: e or E, optional sign, digits. The digits are
        // validated by the final parse, not here.
        let mut has_exponent = false;
        if let Some(&exp_char) = self.input.peek() {
            if exp_char == 'e' || exp_char == 'E' {
                has_exponent = true;
                number_str.push(exp_char);
                self.input.next();
                if let Some(&sign) = self.input.peek() {
                    if sign == '+' || sign == '-' {
                        number_str.push(sign);
                        self.input.next();
                    }
                }
                while let Some(&ch) = self.input.peek() {
                    if ch.is_ascii_digit() {
                        number_str.push(ch);
                        self.input.next();
                    } else {
                        break;
                    }
                }
            }
        }

        // Imaginary suffix: 2j, 3.5J, 2e3j
        if let Some(&('j' | 'J')) = self.input.peek() {
            self.input.next();
            return match number_str.parse::<f64>() {
                Ok(v) => Token::Number(Number::Complex(Complex64::new(0.0, v))),
                Err(_) => Token::Illegal(first_char),
            };
        }

        if !has_dot && !has_exponent {
            // Plain digits: an integer literal. Values beyond i64 fall back
            // to float, trading precision for not rejecting valid input.
            if let Ok(i) = number_str.parse::<i64>() {
                return Token::Number(Number::Int(i));
            }
        }

        if let Ok(n) = number_str.parse::<f64>() {
            Token::Number(Number::Float(n))
        } else {
            // Fallback if parsing fails (e.g. just "." or "1e")
            Token::Illegal(first_char)
        }
    }

    fn read_identifier(&mut self, first_char: char) -> Token {
        let mut ident = String::from(first_char);

        while let Some(&ch) = self.input.peek() {
            if is_letter(ch) || ch.is_ascii_digit() {
                ident.push(ch);
                self.input.next();
            } else {
                break;
            }
        }

        Token::Identifier(ident)
    }
}

/// Returns true if `ch` can start an identifier.
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}
