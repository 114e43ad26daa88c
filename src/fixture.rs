//! The reference table of comparison cases.
//!
//! Each [`Case`] pairs a one-line comparison script with what evaluating it must produce: either
//! a boolean result together with the kinds of both operands, or an error message with the line
//! and column it is reported at.
use thiserror::Error;

use crate::error::Error as EvalError;
use crate::interpreter::{Interpreter, Outcome};
use crate::ops::EqualityOp;
use crate::parser::parse;
use crate::value::Kind;

/// What a case expects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expect {
    Check {
        result: bool,
        type0: Kind,
        type1: Kind,
    },
    Error {
        message: String,
        line: usize,
        column: usize,
    },
}

impl std::fmt::Display for Expect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expect::Check {
                result,
                type0,
                type1,
            } => write!(f, "{result} ({type0}, {type1})"),
            Expect::Error {
                message,
                line,
                column,
            } => write!(f, "error \"{message}\" at {line}:{column}"),
        }
    }
}

impl From<Outcome> for Expect {
    fn from(o: Outcome) -> Self {
        Expect::Check {
            result: o.result,
            type0: o.type0,
            type1: o.type1,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: `{input}`: expected {expected}, got {actual}")]
pub struct Mismatch {
    pub name: String,
    pub input: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub input: String,
    pub expect: Expect,
}

impl Case {
    /// Run this case and compare the result with its expectation.
    pub fn verify(&self, interpreter: &mut Interpreter) -> Result<(), Mismatch> {
        let actual = match parse(&self.input).and_then(|p| interpreter.program(&p)) {
            Ok(outcomes) => match outcomes[..] {
                [outcome] => Expect::from(outcome),
                _ => return Err(self.mismatch(format!("{} comparisons", outcomes.len()))),
            },
            Err(e) => self.error(&e),
        };
        if actual == self.expect {
            Ok(())
        } else {
            Err(self.mismatch(actual.to_string()))
        }
    }

    fn error(&self, e: &EvalError) -> Expect {
        let (line, column) = e
            .src()
            .map(|src| {
                let loc = src.location(&self.input);
                (loc.line, loc.column)
            })
            .unwrap_or_default();
        Expect::Error {
            message: e.to_string(),
            line,
            column,
        }
    }

    fn mismatch(&self, actual: String) -> Mismatch {
        Mismatch {
            name: self.name.clone(),
            input: self.input.clone(),
            expected: self.expect.to_string(),
            actual,
        }
    }
}

/// One side of a comparison: a kind and, except for null, its literal.
type Side<'a> = (Kind, Option<&'a str>);

fn script(side: Side) -> String {
    match side {
        (kind, None) => kind.to_string(),
        (kind, Some(literal)) => format!("{kind} {literal}"),
    }
}

#[derive(Default)]
struct Table {
    cases: Vec<Case>,
}

impl Table {
    fn push(&mut self, op: EqualityOp, lhs: Side, rhs: Side, expect: impl FnOnce(&str) -> Expect) {
        let name = format!(
            "test{}_{}_{}_{}",
            self.cases.len() + 1,
            lhs.0,
            match op {
                EqualityOp::Equal => "equal_to",
                EqualityOp::NotEqual => "not_equal_to",
            },
            rhs.0
        );
        let input = format!("{} {op} {}", script(lhs), script(rhs));
        let expect = expect(&input);
        self.cases.push(Case { name, input, expect });
    }

    /// Both operators, with `==` giving `equal`.
    fn both_ops(&mut self, lhs: Side, rhs: Side, equal: bool) {
        for op in [EqualityOp::Equal, EqualityOp::NotEqual] {
            self.push(op, lhs, rhs, |_| Expect::Check {
                result: op.apply(equal),
                type0: lhs.0,
                type1: rhs.0,
            });
        }
    }

    /// Both operators and, unless the sides are identical, both operand orders.
    fn symmetric(&mut self, lhs: Side, rhs: Side, equal: bool) {
        self.both_ops(lhs, rhs, equal);
        if lhs != rhs {
            self.both_ops(rhs, lhs, equal);
        }
    }

    fn eq(&mut self, lhs: Side, rhs: Side) {
        self.symmetric(lhs, rhs, true);
    }

    fn nq(&mut self, lhs: Side, rhs: Side) {
        self.symmetric(lhs, rhs, false);
    }

    /// Both operators fail as incomparable, reported at the operator.
    fn er(&mut self, lhs: Side, rhs: Side) {
        for op in [EqualityOp::Equal, EqualityOp::NotEqual] {
            self.push(op, lhs, rhs, |input| Expect::Error {
                message: EvalError::Incomparable {
                    op,
                    lhs: lhs.0,
                    rhs: rhs.0,
                }
                .to_string(),
                line: 1,
                column: input.find(op.symbol()).map_or(0, |i| i + 1),
            });
        }
    }
}

/// The full table of equality cases across all pairs of kinds.
pub fn comparison_cases() -> Vec<Case> {
    use Kind::*;
    let null = (Null, None);
    let boolean = |v| (Boolean, Some(v));
    let integer = |v| (Integer, Some(v));
    let real = |v| (Real, Some(v));
    let string = |v| (String, Some(v));
    let array = |v| (Array, Some(v));

    let mut t = Table::default();

    t.eq(null, null);
    t.nq(null, boolean("false"));
    t.nq(null, boolean("true"));
    t.nq(null, integer("-1"));
    t.nq(null, integer("0"));
    t.nq(null, integer("1"));
    t.nq(null, real("-1.0"));
    t.nq(null, real("0.0"));
    t.nq(null, real("1.0"));
    t.nq(null, string("false"));
    t.nq(null, string("true"));
    t.nq(null, string("null"));
    t.nq(null, array("i"));

    t.eq(boolean("false"), boolean("False"));
    t.eq(boolean("true"), boolean("True"));
    t.eq(boolean("false"), boolean("no"));
    t.eq(boolean("true"), boolean("yes"));
    t.eq(boolean("false"), boolean("0"));
    t.eq(boolean("true"), boolean("1"));
    t.nq(boolean("false"), boolean("True"));
    t.nq(boolean("true"), boolean("False"));
    t.nq(boolean("false"), boolean("yes"));
    t.nq(boolean("true"), boolean("no"));
    t.nq(boolean("false"), boolean("1"));
    t.nq(boolean("true"), boolean("0"));
    t.eq(boolean("false"), integer("0"));
    t.nq(boolean("true"), integer("0"));
    t.nq(boolean("false"), integer("1"));
    t.eq(boolean("true"), integer("1"));
    t.nq(boolean("false"), integer("-1"));
    t.eq(boolean("true"), integer("-1"));
    t.eq(boolean("false"), real("0"));
    t.nq(boolean("true"), real("0"));
    t.nq(boolean("false"), real("1"));
    t.eq(boolean("true"), real("1"));
    t.nq(boolean("false"), real("-1"));
    t.eq(boolean("true"), real("-1"));
    t.eq(boolean("false"), string("false"));
    t.eq(boolean("true"), string("true"));
    t.eq(boolean("true"), array("i"));
    t.nq(boolean("false"), array("j"));

    t.eq(integer("0"), integer("0"));
    t.nq(integer("0"), integer("1"));
    t.nq(integer("-1"), integer("1"));
    t.nq(integer("-1"), integer("0"));
    t.nq(integer("0"), real("0.1"));
    t.eq(integer("0"), real("0.0"));
    t.eq(integer("1"), real("1.0"));
    t.eq(integer("-1"), real("-1.0"));
    t.nq(integer("-1"), real("-0.9"));
    t.eq(integer("0"), string("0"));
    t.eq(integer("10"), string("10"));
    t.eq(integer("-10"), string("-10"));
    t.nq(integer("0"), string("1"));
    t.nq(integer("10"), string("101"));
    t.nq(integer("-10"), string("-101"));
    t.er(integer("0"), array("i"));

    t.eq(real("0"), real("0"));
    t.nq(real("0"), real("1"));
    t.eq(real("0.0"), real("0.0"));
    t.nq(real("0.0"), real("0.1"));
    t.nq(real("-3.14e5"), real("-31400"));
    t.nq(real("0"), string("1"));
    t.nq(real("1"), string("0"));
    // A real never equals a string, even one holding its own text.
    t.nq(real("0.0"), string("0.0"));
    t.nq(real("1.234"), string("1.234"));
    t.nq(real("0.1"), string("0.0"));
    t.er(real("0"), array("i"));

    t.er(array("i"), array("j"));

    t.cases
}
