use crate::parser::{precedence, Assoc, RPNExpr, RPNToken};
use std::fmt;

// deeper expressions are shown in postfix form
const MAX_NESTING: usize = 256;

// a printed subexpression and the precedence of its top operator
struct Infix {
    text: String,
    prec: (usize, Assoc),
    depth: usize,
}

fn paren_if(wrap: bool, text: String) -> String {
    if wrap { format!("({})", text) } else { text }
}

impl RPNExpr {
    // None when the sequence doesn't reduce to a single expression
    fn infix(&self) -> Option<String> {
        let mut stack: Vec<Infix> = Vec::new();
        for token in self.0.iter() {
            let n = match *token {
                RPNToken::Number(_) | RPNToken::Var(_) => 0,
                RPNToken::Call(_, arity) => arity,
                RPNToken::BinOp(_) => 2,
                RPNToken::Neg => 1,
            };
            let cut = stack.len().checked_sub(n)?;
            let args = stack.split_off(cut);
            let depth = 1 + args.iter().map(|a| a.depth).max().unwrap_or(0);
            if depth > MAX_NESTING {
                return None;
            }
            let (prec, assoc) = precedence(token);
            let mut args = args.into_iter();
            let text = match *token {
                RPNToken::Number(ref x) | RPNToken::Var(ref x) => x.to_string(),
                RPNToken::Neg => {
                    let arg = args.next()?;
                    format!("-{}", paren_if(prec > arg.prec.0, arg.text))
                }
                RPNToken::BinOp(op) => {
                    let (lhs, rhs) = (args.next()?, args.next()?);
                    let lh = paren_if(prec > lhs.prec.0 || (prec == lhs.prec.0 && assoc != Assoc::Left),
                                      lhs.text);
                    let rh = paren_if(prec > rhs.prec.0 || (prec == rhs.prec.0 && assoc != Assoc::Right),
                                      rhs.text);
                    format!("{} {} {}", lh, op, rh)
                }
                RPNToken::Call(ref callee, _) => {
                    let expr = args.map(|a| a.text).collect::<Vec<String>>().join(", ");
                    format!("{}({})", callee.name(), expr)
                }
            };
            stack.push(Infix { text, prec: (prec, assoc), depth });
        }
        if stack.len() != 1 {
            return None;
        }
        stack.pop().map(|i| i.text)
    }
}

impl fmt::Display for RPNToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RPNToken::Number(ref x) | RPNToken::Var(ref x) => write!(f, "{}", x),
            RPNToken::BinOp(op) => write!(f, "{}", op),
            RPNToken::Neg => write!(f, "neg"),
            RPNToken::Call(ref callee, arity) => write!(f, "{}/{}", callee.name(), arity),
        }
    }
}

/// Shows the expression in infix form with the minimum of parens, or
/// the raw postfix sequence when it isn't well formed.
impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.infix() {
            Some(text) => write!(f, "{}", text),
            None => {
                let raw = self.0.iter().map(|t| t.to_string()).collect::<Vec<_>>();
                write!(f, "[{}]", raw.join(" "))
            }
        }
    }
}
