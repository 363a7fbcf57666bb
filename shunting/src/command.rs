use crate::classify::is_reserved;
use crate::context::{check_name, MathContext, UserFunction};
use crate::parser::{ParseError, ShuntingParser};
use crate::Error;
use lexers::{tokenize, MathToken};

/// One line of input, split by its leading keyword.
#[derive(PartialEq, Debug)]
pub enum Command<'a> {
    // set <name> <expr>
    Set { name: &'a str, expr: &'a [MathToken] },
    // def <name>(<param>, ...) <expr>
    Def { name: &'a str, params: Vec<&'a str>, body: &'a [MathToken] },
    Expr(&'a [MathToken]),
}

fn malformed_set(why: &str) -> ParseError { ParseError::MalformedSet(why.to_string()) }
fn malformed_def(why: &str) -> ParseError { ParseError::MalformedDef(why.to_string()) }

impl<'a> Command<'a> {
    pub fn parse(tokens: &'a [MathToken]) -> Result<Command<'a>, ParseError> {
        match tokens.first() {
            Some(MathToken::Ident(kw)) if kw == "set" => Self::parse_set(&tokens[1..]),
            Some(MathToken::Ident(kw)) if kw == "def" => Self::parse_def(&tokens[1..]),
            _ => Ok(Command::Expr(tokens)),
        }
    }

    fn parse_set(rest: &'a [MathToken]) -> Result<Command<'a>, ParseError> {
        let name = match rest.first() {
            Some(MathToken::Ident(name)) => name.as_str(),
            Some(other) => return Err(ParseError::InvalidName(other.to_string())),
            None => return Err(malformed_set("expected a variable name")),
        };
        check_name(name)?;
        let expr = &rest[1..];
        if expr.is_empty() {
            return Err(malformed_set("missing value expression"));
        }
        Ok(Command::Set { name, expr })
    }

    fn parse_def(rest: &'a [MathToken]) -> Result<Command<'a>, ParseError> {
        let name = match rest.first() {
            Some(MathToken::Ident(name)) => name.as_str(),
            Some(other) => return Err(ParseError::InvalidName(other.to_string())),
            None => return Err(malformed_def("expected a function name")),
        };
        check_name(name)?;
        if rest.get(1) != Some(&MathToken::OParen) {
            return Err(malformed_def("expected '(' after the function name"));
        }
        if rest.get(2) == Some(&MathToken::CParen) {
            return Err(malformed_def("a function needs at least one parameter"));
        }
        let mut params = Vec::new();
        let mut idx = 2;
        loop {
            match rest.get(idx) {
                Some(MathToken::Ident(p)) if is_reserved(p) => {
                    return Err(ParseError::ReservedName(p.clone()))
                }
                Some(MathToken::Ident(p)) if params.contains(&p.as_str()) => {
                    return Err(ParseError::DuplicateParam(p.clone()))
                }
                Some(MathToken::Ident(p)) => params.push(p.as_str()),
                _ => return Err(malformed_def("expected a parameter name")),
            }
            idx += 1;
            match rest.get(idx) {
                Some(MathToken::Comma) => idx += 1,
                Some(MathToken::CParen) => break,
                _ => return Err(malformed_def("expected ',' or ')' in the parameter list")),
            }
        }
        let body = &rest[idx + 1..];
        if body.is_empty() {
            return Err(malformed_def("missing function body"));
        }
        Ok(Command::Def { name, params, body })
    }
}

impl MathContext {
    /// Run one line: `set` and `def` update the context and yield nothing,
    /// anything else is evaluated. Nothing changes when an error is returned.
    pub fn process_command(&mut self, line: &str) -> Result<Option<f64>, Error> {
        let tokens = tokenize(line)?;
        match Command::parse(&tokens)? {
            Command::Set { name, expr } => {
                let value = self.eval(&ShuntingParser::parse(expr)?)?;
                self.setvar(name, value)?;
                debug!("set {} = {}", name, value);
                Ok(None)
            }
            Command::Def { name, params, body } => {
                let body = ShuntingParser::parse(body)?;
                debug!("def {}({}) -> {:?}", name, params.join(", "), body);
                self.define(UserFunction {
                    name: name.to_string(),
                    params: params.into_iter().map(String::from).collect(),
                    body,
                });
                Ok(None)
            }
            Command::Expr(tokens) => {
                let rpn = ShuntingParser::parse(tokens)?;
                Ok(Some(self.eval(&rpn)?))
            }
        }
    }
}
