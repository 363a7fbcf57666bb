use crate::parser::ParseError;
use crate::rpneval::EvalErr;
use lexers::LexError;
use thiserror::Error;

/// Anything that can abort a command.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("syntax error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}
