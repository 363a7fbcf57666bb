use crate::builtin::Builtin;
use lexers::{MathToken, Operator};

/// How the converter treats a lexeme.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Class<'a> {
    Number(&'a str),
    Variable(&'a str),
    Builtin(Builtin),
    UserCall(&'a str),
    Operator(Operator),
    OParen,
    CParen,
    Comma,
}

// Built-in names always denote a call, even without parens ('sin 3').
// Any other identifier is a call only when an opening paren follows it,
// so a variable and a user function can share a name.
pub fn classify<'a>(token: &'a MathToken, next: Option<&MathToken>) -> Class<'a> {
    match *token {
        MathToken::Number(ref n) => Class::Number(n),
        MathToken::Ident(ref id) => match Builtin::from_name(id) {
            Some(b) => Class::Builtin(b),
            None if next == Some(&MathToken::OParen) => Class::UserCall(id),
            None => Class::Variable(id),
        },
        MathToken::Op(op) => Class::Operator(op),
        MathToken::OParen => Class::OParen,
        MathToken::CParen => Class::CParen,
        MathToken::Comma => Class::Comma,
    }
}

pub fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '.' || c.is_ascii_digit())
}

pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

pub fn is_reserved(name: &str) -> bool {
    Builtin::from_name(name).is_some()
}
