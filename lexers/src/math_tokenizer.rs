#![deny(warnings)]

use crate::scanner::Scanner;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add, Sub, Mul, Div, Rem, Pow,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Operator> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '%' => Some(Operator::Rem),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match *self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Rem => '%',
            Operator::Pow => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum MathToken {
    Number(String),
    Ident(String),
    Op(Operator),
    OParen, CParen, Comma,
}

impl fmt::Display for MathToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            MathToken::Number(ref n) => write!(f, "{}", n),
            MathToken::Ident(ref id) => write!(f, "{}", id),
            MathToken::Op(op) => write!(f, "{}", op),
            MathToken::OParen => write!(f, "("),
            MathToken::CParen => write!(f, ")"),
            MathToken::Comma => write!(f, ","),
        }
    }
}

#[derive(Error, Clone, PartialEq, Debug)]
pub enum LexError {
    #[error("unexpected character '{ch}' at column {col}")]
    UnexpectedChar { ch: char, col: usize },
    #[error("malformed number '{text}' at column {col}")]
    MalformedNumber { text: String, col: usize },
    #[error("expression is empty")]
    Empty,
}

pub struct MathTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    failed: bool,
}

impl<I: Iterator<Item=char>> MathTokenizer<I> {
    pub fn new(source: I) -> Self {
        MathTokenizer{src: Scanner::new(source), failed: false}
    }

    fn get_token(&mut self) -> Option<Result<MathToken, LexError>> {
        self.src.skip_whitespace();
        if let Some(op) = self.src.scan_math_op() {
            let token = match op {
                '(' => MathToken::OParen,
                ')' => MathToken::CParen,
                ',' => MathToken::Comma,
                _ => MathToken::Op(Operator::from_char(op)?),
            };
            Some(Ok(token))
        } else if let Some(id) = self.src.scan_identifier() {
            Some(Ok(MathToken::Ident(id)))
        } else {
            match self.src.scan_number() {
                Ok(Some(num)) => Some(Ok(MathToken::Number(num))),
                Err(e) => Some(Err(e)),
                Ok(None) => {
                    let ch = self.src.next()?;
                    Some(Err(LexError::UnexpectedChar { ch, col: self.src.column() }))
                }
            }
        }
    }
}

impl<I: Iterator<Item=char>> Iterator for MathTokenizer<I> {
    type Item = Result<MathToken, LexError>;
    fn next(&mut self) -> Option<Self::Item> {
        // nothing sensible follows a lexing error
        if self.failed {
            return None;
        }
        let token = self.get_token();
        self.failed = matches!(token, Some(Err(_)));
        token
    }
}

/// Split a whole line into lexemes, failing on the first bad one or if
/// there's nothing but whitespace.
pub fn tokenize(source: &str) -> Result<Vec<MathToken>, LexError> {
    let tokens = MathTokenizer::new(source.chars()).collect::<Result<Vec<_>, _>>()?;
    if tokens.is_empty() {
        return Err(LexError::Empty);
    }
    Ok(tokens)
}

///////////////////////////////////////////////////////////////////////////////
