use crate::classify::{is_identifier, is_reserved};
use crate::parser::{ParseError, RPNExpr};

/// Default bound on nested user function calls.
pub const MAX_CALL_DEPTH: usize = 64;

#[derive(Clone, PartialEq, Debug)]
pub struct UserFunction {
    pub name: String,
    pub params: Vec<String>,
    pub body: RPNExpr,
}

/// Variables and user functions of a session, kept in the order they
/// were first defined.
#[derive(Clone, Debug)]
pub struct MathContext {
    vars: Vec<(String, f64)>,
    funcs: Vec<UserFunction>,
    max_depth: usize,
}

impl Default for MathContext {
    fn default() -> Self { Self::new() }
}

// Names that can be assigned or defined: identifiers that don't clash
// with a built-in. User functions and variables are not checked against
// each other.
pub(crate) fn check_name(name: &str) -> Result<(), ParseError> {
    if !is_identifier(name) {
        return Err(ParseError::InvalidName(name.to_string()));
    }
    if is_reserved(name) {
        return Err(ParseError::ReservedName(name.to_string()));
    }
    Ok(())
}

impl MathContext {
    pub fn new() -> MathContext {
        Self::with_max_depth(MAX_CALL_DEPTH)
    }

    pub fn with_max_depth(max_depth: usize) -> MathContext {
        MathContext{vars: Vec::new(), funcs: Vec::new(), max_depth}
    }

    pub fn max_depth(&self) -> usize { self.max_depth }

    pub fn setvar(&mut self, var: &str, val: f64) -> Result<(), ParseError> {
        check_name(var)?;
        match self.vars.iter_mut().find(|(name, _)| name == var) {
            Some(slot) => slot.1 = val,
            None => self.vars.push((var.to_string(), val)),
        }
        Ok(())
    }

    pub fn getvar(&self, var: &str) -> Option<f64> {
        self.vars.iter().find(|(name, _)| name == var).map(|&(_, val)| val)
    }

    pub fn is_user_function(&self, name: &str) -> bool {
        self.function(name).is_some()
    }

    pub fn function(&self, name: &str) -> Option<&UserFunction> {
        self.funcs.iter().find(|f| f.name == name)
    }

    // replaces any previous definition with the same name, keeping its slot
    pub(crate) fn define(&mut self, func: UserFunction) {
        match self.funcs.iter_mut().find(|f| f.name == func.name) {
            Some(slot) => *slot = func,
            None => self.funcs.push(func),
        }
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.vars.iter().map(|(name, val)| (name.as_str(), *val))
    }

    pub fn functions(&self) -> impl Iterator<Item = &UserFunction> {
        self.funcs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setvar_keeps_order() {
        let mut cx = MathContext::new();
        cx.setvar("b", 1.0).unwrap();
        cx.setvar("a", 2.0).unwrap();
        cx.setvar("b", 3.0).unwrap();
        let vars = cx.variables().collect::<Vec<_>>();
        assert_eq!(vars, vec![("b", 3.0), ("a", 2.0)]);
        assert_eq!(cx.getvar("a"), Some(2.0));
        assert_eq!(cx.getvar("c"), None);
    }

    #[test]
    fn setvar_rejects_bad_names() {
        let mut cx = MathContext::new();
        assert_eq!(cx.setvar("sqrt", 1.0), Err(ParseError::ReservedName(format!("sqrt"))));
        assert_eq!(cx.setvar("2x", 1.0), Err(ParseError::InvalidName(format!("2x"))));
        assert_eq!(cx.variables().count(), 0);
    }

    #[test]
    fn define_replaces_in_place() {
        let mut cx = MathContext::new();
        let f = |name: &str, params: &[&str]| UserFunction {
            name: name.to_string(),
            params: params.iter().map(|p| p.to_string()).collect(),
            body: RPNExpr(Vec::new()),
        };
        cx.define(f("f", &["x"]));
        cx.define(f("g", &["x"]));
        cx.define(f("f", &["x", "y"]));
        let names = cx.functions().map(|f| f.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["f", "g"]);
        assert_eq!(cx.function("f").unwrap().params.len(), 2);
        assert!(cx.is_user_function("g"));
        assert!(!cx.is_user_function("h"));
    }
}
