extern crate lexers;

// verbose tracing, only with the 'debug' feature
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub use parser::{Callee, ParseError, RPNExpr, RPNToken, ShuntingParser};
pub use rpneval::EvalErr;
pub use context::{MathContext, UserFunction, MAX_CALL_DEPTH};
pub use command::Command;
pub use builtin::Builtin;
pub use error::Error;

pub mod parser;
#[cfg(test)]
mod parser_test;

mod builtin;
mod classify;
mod command;
mod context;
mod error;
mod rpnprint;
mod rpneval;
