use crate::classify::is_number;
use crate::context::MathContext;
use crate::parser::{Callee, RPNExpr, RPNToken};
use lexers::Operator;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum EvalErr {
    #[error("variable '{0}' is not set")]
    UnknownVar(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("'{name}' takes {expected} argument(s), got {found}")]
    ArityMismatch { name: String, expected: usize, found: usize },
    #[error("not enough operands")]
    MissingOperands,
    #[error("{0} values left on the stack, expected a single result")]
    TooManyOperands(usize),
    #[error("division by zero")]
    DivisionByZero,
    #[error("'{0}' is not a number")]
    BadNumber(String),
    #[error("more than {0} nested function calls")]
    RecursionLimitExceeded(usize),
}

// a shorthand for checking number of arguments before a call
macro_rules! nargs {
    ($name:expr, $expected:expr, $found:expr) => {
        if $expected != $found {
            return Err(EvalErr::ArityMismatch {
                name: $name.to_string(),
                expected: $expected,
                found: $found,
            });
        }
    };
}

// parameters bound for the function body being evaluated
type Scope<'a> = [(&'a str, f64)];

fn parse_number(text: &str) -> Result<f64, EvalErr> {
    if !is_number(text) {
        return Err(EvalErr::BadNumber(text.to_string()));
    }
    text.parse::<f64>().map_err(|_| EvalErr::BadNumber(text.to_string()))
}

impl MathContext {
    pub fn eval(&self, rpn: &RPNExpr) -> Result<f64, EvalErr> {
        self.eval_scoped(rpn, &[], 0)
    }

    fn lookup(&self, var: &str, scope: &Scope) -> Result<f64, EvalErr> {
        scope.iter()
            .find(|(name, _)| *name == var)
            .map(|&(_, val)| val)
            .or_else(|| self.getvar(var))
            .ok_or_else(|| EvalErr::UnknownVar(var.to_string()))
    }

    fn eval_scoped(&self, rpn: &RPNExpr, scope: &Scope, depth: usize) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in rpn.iter() {
            match *token {
                RPNToken::Number(ref num) => operands.push(parse_number(num)?),
                RPNToken::Var(ref var) => operands.push(self.lookup(var, scope)?),
                RPNToken::BinOp(op) => {
                    let r = operands.pop().ok_or(EvalErr::MissingOperands)?;
                    let l = operands.pop().ok_or(EvalErr::MissingOperands)?;
                    operands.push(Self::eval_op(op, l, r)?);
                }
                RPNToken::Neg => {
                    let o = operands.pop().ok_or(EvalErr::MissingOperands)?;
                    operands.push(-o);
                }
                RPNToken::Call(Callee::Builtin(b), argc) => {
                    nargs!(b.name(), b.arity(), argc);
                    let x = operands.pop().ok_or(EvalErr::MissingOperands)?;
                    operands.push(b.apply(x));
                }
                RPNToken::Call(Callee::User(ref fname), argc) => {
                    let func = self.function(fname)
                        .ok_or_else(|| EvalErr::UnknownFunction(fname.clone()))?;
                    nargs!(fname, func.params.len(), argc);
                    if argc > operands.len() {
                        return Err(EvalErr::MissingOperands);
                    }
                    if depth >= self.max_depth() {
                        return Err(EvalErr::RecursionLimitExceeded(self.max_depth()));
                    }
                    // split_off keeps the arguments in call order
                    let cut = operands.len() - argc;
                    let args = operands.split_off(cut);
                    debug!("call {}{:?} at depth {}", fname, args, depth + 1);
                    let bound = func.params.iter()
                        .map(String::as_str)
                        .zip(args)
                        .collect::<Vec<_>>();
                    operands.push(self.eval_scoped(&func.body, &bound, depth + 1)?);
                }
            }
        }
        match operands.len() {
            1 => operands.pop().ok_or(EvalErr::MissingOperands),
            0 => Err(EvalErr::MissingOperands),
            n => Err(EvalErr::TooManyOperands(n)),
        }
    }

    fn eval_op(op: Operator, l: f64, r: f64) -> Result<f64, EvalErr> {
        match op {
            Operator::Add => Ok(l + r),
            Operator::Sub => Ok(l - r),
            Operator::Mul => Ok(l * r),
            Operator::Div | Operator::Rem if r == 0.0 => Err(EvalErr::DivisionByZero),
            Operator::Div => Ok(l / r),
            // truncated remainder, takes the sign of the dividend
            Operator::Rem => Ok(l % r),
            Operator::Pow => Ok(l.powf(r)),
        }
    }
}
