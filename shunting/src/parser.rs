use crate::builtin::Builtin;
use crate::classify::{classify, Class};
use lexers::{tokenize, MathToken, Operator};
use std::ops::Deref;
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Debug)]
pub enum ParseError {
    #[error("missing opening paren")]
    MissingOParen,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("empty expression")]
    EmptyExpression,
    #[error("incorrect set instruction: {0}")]
    MalformedSet(String),
    #[error("incorrect def instruction: {0}")]
    MalformedDef(String),
    #[error("'{0}' is not a valid name")]
    InvalidName(String),
    #[error("'{0}' is a built-in function name")]
    ReservedName(String),
    #[error("parameter '{0}' appears more than once")]
    DuplicateParam(String),
    #[error("empty argument between parens")]
    EmptyArgument,
    #[error("'{0}' is missing an operand inside its parens")]
    MissingOperand(String),
}

#[derive(PartialEq, Debug)]
pub enum Assoc {
    Left,
    Right,
    None,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Callee {
    Builtin(Builtin),
    User(String),
}

impl Callee {
    pub fn name(&self) -> &str {
        match *self {
            Callee::Builtin(ref b) => b.name(),
            Callee::User(ref name) => name,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum RPNToken {
    Number(String),
    Var(String),
    BinOp(Operator),
    Neg,
    Call(Callee, usize), // arguments written at the call site
}

pub fn precedence(token: &RPNToken) -> (usize, Assoc) {
    // Unary minus binds tighter than '^' so -2^2 is (-2)^2, and '^' is
    // left associative like everything else: 2^3^2 is (2^3)^2
    match *token {
        RPNToken::BinOp(Operator::Add) | RPNToken::BinOp(Operator::Sub) => (1, Assoc::Left),
        RPNToken::BinOp(Operator::Mul)
        | RPNToken::BinOp(Operator::Div)
        | RPNToken::BinOp(Operator::Rem) => (2, Assoc::Left),
        RPNToken::BinOp(Operator::Pow) => (3, Assoc::Left),
        RPNToken::Neg => (4, Assoc::Right),
        RPNToken::Call(_, _) => (5, Assoc::Left),
        RPNToken::Number(_) | RPNToken::Var(_) => (99, Assoc::None),
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct RPNExpr(pub Vec<RPNToken>);

impl Deref for RPNExpr {
    type Target = [RPNToken];
    fn deref(&self) -> &[RPNToken] { &self.0 }
}

// operator stack entries
enum Pending {
    OParen,
    Neg,
    BinOp(Operator),
    Call(Callee),
}

impl Pending {
    // calls popped without their own parens take a single argument
    fn into_rpn(self) -> Option<RPNToken> {
        match self {
            Pending::OParen => None,
            Pending::Neg => Some(RPNToken::Neg),
            Pending::BinOp(op) => Some(RPNToken::BinOp(op)),
            Pending::Call(callee) => Some(RPNToken::Call(callee, 1)),
        }
    }
}

// Postfix being built. Tracks how many values it leaves on the evaluation
// stack so that nothing inside a paren group (or one of its comma separated
// slots) consumes values produced outside of it.
struct Output {
    rpn: Vec<RPNToken>,
    height: usize,
    // stack height where each open slot started
    floors: Vec<usize>,
}

impl Output {
    fn new() -> Self {
        Output { rpn: Vec::new(), height: 0, floors: Vec::new() }
    }

    fn emit(&mut self, token: RPNToken) -> Result<(), ParseError> {
        let takes = match token {
            RPNToken::Number(_) | RPNToken::Var(_) => 0,
            RPNToken::Neg => 1,
            RPNToken::BinOp(_) => 2,
            RPNToken::Call(_, argc) => argc,
        };
        // outside any parens the evaluator reports the underflow
        if let Some(&floor) = self.floors.last() {
            if self.height < floor + takes {
                return Err(ParseError::MissingOperand(token.to_string()));
            }
        }
        self.height = self.height.saturating_sub(takes) + 1;
        self.rpn.push(token);
        Ok(())
    }

    fn open(&mut self) {
        self.floors.push(self.height);
    }

    // close the current slot, it must have produced a value
    fn end_slot(&mut self) -> Result<(), ParseError> {
        match self.floors.pop() {
            Some(floor) if self.height <= floor => Err(ParseError::EmptyArgument),
            _ => Ok(()),
        }
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> Result<RPNExpr, crate::Error> {
        Ok(Self::parse(&tokenize(expr)?)?)
    }

    pub fn parse(tokens: &[MathToken]) -> Result<RPNExpr, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }
        let mut out = Output::new();
        let mut stack = Vec::new();
        // one counter per open paren, bumped by commas
        let mut arity = Vec::<usize>::new();
        // can a '-' here only be a negation?
        let mut may_unary = true;

        for (idx, token) in tokens.iter().enumerate() {
            let prev = idx.checked_sub(1).map(|i| &tokens[i]);
            match classify(token, tokens.get(idx + 1)) {
                Class::Number(num) => {
                    out.emit(RPNToken::Number(num.to_string()))?;
                    may_unary = false;
                }
                Class::Variable(var) => {
                    out.emit(RPNToken::Var(var.to_string()))?;
                    may_unary = false;
                }
                Class::Builtin(b) => {
                    stack.push(Pending::Call(Callee::Builtin(b)));
                    may_unary = true;
                }
                Class::UserCall(name) => {
                    stack.push(Pending::Call(Callee::User(name.to_string())));
                    may_unary = true;
                }
                Class::OParen => {
                    stack.push(Pending::OParen);
                    arity.push(1);
                    out.open();
                    may_unary = true;
                }
                Class::Comma => {
                    Self::pop_to_oparen(&mut stack, &mut out)?;
                    out.end_slot()?;
                    out.open();
                    if let Some(a) = arity.last_mut() {
                        *a += 1;
                    }
                    may_unary = true;
                }
                Class::CParen => {
                    Self::pop_to_oparen(&mut stack, &mut out)?;
                    stack.pop(); // peel matching OParen
                    let mut argc = arity.pop().unwrap_or(1);
                    if prev == Some(&MathToken::OParen) {
                        argc = 0; // f()
                        out.floors.pop();
                    } else {
                        out.end_slot()?;
                    }
                    // end of grouping: check if this is a function call
                    match stack.pop() {
                        Some(Pending::Call(callee)) => out.emit(RPNToken::Call(callee, argc))?,
                        Some(other) => stack.push(other),
                        None => (),
                    }
                    may_unary = false;
                }
                Class::Operator(Operator::Sub) if may_unary => {
                    // prefix operator: nothing on its left to reduce
                    stack.push(Pending::Neg);
                }
                Class::Operator(op) => {
                    let (prec_rhs, _) = precedence(&RPNToken::BinOp(op));
                    loop {
                        let pops = match stack.last() {
                            Some(Pending::Call(_)) => true,
                            Some(Pending::Neg) => precedence(&RPNToken::Neg).0 >= prec_rhs,
                            Some(Pending::BinOp(top)) => {
                                precedence(&RPNToken::BinOp(*top)).0 >= prec_rhs
                            }
                            Some(Pending::OParen) | None => false,
                        };
                        if !pops {
                            break;
                        }
                        if let Some(token) = stack.pop().and_then(Pending::into_rpn) {
                            out.emit(token)?;
                        }
                    }
                    stack.push(Pending::BinOp(op));
                    may_unary = true;
                }
            }
        }
        while let Some(top) = stack.pop() {
            match top.into_rpn() {
                Some(token) => out.emit(token)?,
                None => return Err(ParseError::MissingCParen),
            }
        }
        debug!("rpn: {:?}", out.rpn);
        Ok(RPNExpr(out.rpn))
    }

    // move everything above the innermost '(' to the output, the '(' stays
    fn pop_to_oparen(stack: &mut Vec<Pending>, out: &mut Output) -> Result<(), ParseError> {
        loop {
            match stack.pop() {
                None => return Err(ParseError::MissingOParen),
                Some(Pending::OParen) => {
                    stack.push(Pending::OParen);
                    return Ok(());
                }
                Some(other) => {
                    if let Some(token) = other.into_rpn() {
                        out.emit(token)?;
                    }
                }
            }
        }
    }
}
