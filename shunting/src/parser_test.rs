use crate::builtin::Builtin;
use crate::parser::{Callee, ParseError, RPNToken, ShuntingParser};
use crate::Error;
use lexers::{LexError, Operator};

fn num(n: &str) -> RPNToken { RPNToken::Number(n.to_string()) }
fn var(v: &str) -> RPNToken { RPNToken::Var(v.to_string()) }
fn op(o: Operator) -> RPNToken { RPNToken::BinOp(o) }
fn user(f: &str, arity: usize) -> RPNToken { RPNToken::Call(Callee::User(f.to_string()), arity) }
fn builtin(b: Builtin) -> RPNToken { RPNToken::Call(Callee::Builtin(b), 1) }

#[test]
fn test_parse1() {
    let rpn = ShuntingParser::parse_str("3+4*2/-(1-5)^2^3").unwrap();
    let expect = [
        num("3"),
        num("4"),
        num("2"),
        op(Operator::Mul),
        num("1"),
        num("5"),
        op(Operator::Sub),
        RPNToken::Neg,
        num("2"),
        op(Operator::Pow),
        num("3"),
        op(Operator::Pow),
        op(Operator::Div),
        op(Operator::Add),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn test_parse2() {
    let rpn = ShuntingParser::parse_str("0.034 * sin(x)/(7 % -4) * max(2, x)").unwrap();
    let expect = [
        num("0.034"),
        var("x"),
        builtin(Builtin::Sin),
        op(Operator::Mul),
        num("7"),
        num("4"),
        RPNToken::Neg,
        op(Operator::Rem),
        op(Operator::Div),
        num("2"),
        var("x"),
        user("max", 2),
        op(Operator::Mul),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn test_parse3() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2))").unwrap();
    let expect = [
        num("1"),
        var("x"),
        num("2"),
        op(Operator::Pow),
        op(Operator::Sub),
        RPNToken::Neg,
        num("1"),
        var("x"),
        num("2"),
        op(Operator::Pow),
        op(Operator::Add),
        op(Operator::Div),
        builtin(Builtin::Sqrt),
    ];
    assert_eq!(&rpn[..], &expect[..]);
}

#[test]
fn unary_minus_positions() {
    // start, after '(', after an operator, after a comma
    let rpn = ShuntingParser::parse_str("-a*(-b)-f(-c,-d)").unwrap();
    let expect = [
        var("a"),
        RPNToken::Neg,
        var("b"),
        RPNToken::Neg,
        op(Operator::Mul),
        var("c"),
        RPNToken::Neg,
        var("d"),
        RPNToken::Neg,
        user("f", 2),
        op(Operator::Sub),
    ];
    assert_eq!(&rpn[..], &expect[..]);

    let rpn = ShuntingParser::parse_str("--3").unwrap();
    assert_eq!(&rpn[..], &[num("3"), RPNToken::Neg, RPNToken::Neg][..]);
}

#[test]
fn left_associative() {
    let rpn = ShuntingParser::parse_str("2^3^2").unwrap();
    assert_eq!(&rpn[..], &[num("2"), num("3"), op(Operator::Pow), num("2"), op(Operator::Pow)][..]);

    let rpn = ShuntingParser::parse_str("8-4-2").unwrap();
    assert_eq!(&rpn[..], &[num("8"), num("4"), op(Operator::Sub), num("2"), op(Operator::Sub)][..]);
}

#[test]
fn functions_without_parens() {
    let rpn = ShuntingParser::parse_str("sin x + 1").unwrap();
    assert_eq!(&rpn[..], &[var("x"), builtin(Builtin::Sin), num("1"), op(Operator::Add)][..]);

    // a user name without parens is just a variable
    let rpn = ShuntingParser::parse_str("f + 1").unwrap();
    assert_eq!(&rpn[..], &[var("f"), num("1"), op(Operator::Add)][..]);
}

#[test]
fn bad_parse() {
    let rpn = ShuntingParser::parse_str("sqrt(-(1-x^2) / (1 + x^2)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingCParen)));

    let rpn = ShuntingParser::parse_str("-(1-x^2) / (1 + x^2))");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOParen)));

    let rpn = ShuntingParser::parse_str("max 4, 6, 4)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOParen)));

    let rpn = ShuntingParser::parse_str("(2+3");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingCParen)));

    let rpn = ShuntingParser::parse_str("2+3)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOParen)));

    let rpn = ShuntingParser::parse_str("2 @ 3");
    assert_eq!(rpn, Err(Error::Lex(LexError::UnexpectedChar { ch: '@', col: 3 })));

    assert_eq!(ShuntingParser::parse(&[]), Err(ParseError::EmptyExpression));
}

#[test]
fn check_arity() {
    use std::collections::HashMap;
    let rpn = ShuntingParser::parse_str(
        "sin(1)+(max(2, g(3.5), gcd(24, 8))+sum(i,0,10)) + nop()").unwrap();
    let mut expect = HashMap::new();
    expect.insert("sin", 1);
    expect.insert("max", 3);
    expect.insert("g", 1);
    expect.insert("gcd", 2);
    expect.insert("sum", 3);
    expect.insert("nop", 0);

    let mut seen = 0;
    for token in rpn.iter() {
        if let RPNToken::Call(ref callee, arity) = *token {
            assert_eq!(expect[callee.name()], arity);
            seen += 1;
        }
    }
    assert_eq!(seen, expect.len());
}

#[test]
fn nested_parens_keep_their_own_count() {
    // the comma belongs to the inner group, not to f
    let rpn = ShuntingParser::parse_str("f((1, 2))").unwrap();
    assert_eq!(&rpn[..], &[num("1"), num("2"), user("f", 1)][..]);
}

#[test]
fn empty_arguments() {
    for expr in ["f(1,)", "f(,1)", "f(1,,2)", "3 f(1,)", "(3) f(1,)", "(1,)", "sin(,)"] {
        assert_eq!(ShuntingParser::parse_str(expr), Err(Error::Parse(ParseError::EmptyArgument)),
                   "{}", expr);
    }
    // an empty call is fine, the evaluator judges its arity
    let rpn = ShuntingParser::parse_str("f()").unwrap();
    assert_eq!(&rpn[..], &[user("f", 0)][..]);
}

#[test]
fn groups_dont_borrow_operands() {
    let rpn = ShuntingParser::parse_str("3 (1 +)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOperand(format!("+")))));

    let rpn = ShuntingParser::parse_str("2 f(1, -)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOperand(format!("neg")))));

    let rpn = ShuntingParser::parse_str("1 f(sin)");
    assert_eq!(rpn, Err(Error::Parse(ParseError::MissingOperand(format!("sin/1")))));

    // outside of parens the evaluator counts operands
    assert!(ShuntingParser::parse_str("2 +").is_ok());
    assert!(ShuntingParser::parse_str("()").is_ok());
}

#[test]
fn stray_comma() {
    assert_eq!(ShuntingParser::parse_str("1, 2"), Err(Error::Parse(ParseError::MissingOParen)));
}
