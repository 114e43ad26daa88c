//! Equality across value kinds.
//!
//! Comparing two values is done in two steps. [`resolve`] looks only at the kinds of the two
//! operands and picks the [`Rule`] that applies to them, or reports that the kinds cannot be
//! compared at all. A [`Comparator`] then applies that rule to the operands themselves.
//!
//! Rules are stated for one canonical operand order (`BooleanInteger` expects the boolean
//! first); [`resolve`] records when the operands must be swapped to match it, so every rule gives
//! the same answer for both operand orders.
//!
//! Some coercions are deliberately lopsided: an integer equals a string holding its decimal text,
//! but a real never equals any string, and a boolean only equals the exact strings `"true"` and
//! `"false"` even though `yes` and `1` are accepted as boolean literals.
use crate::config::{ArrayTruthiness, Config};
use crate::error::{Error, Result};
use crate::ops::EqualityOp;
use crate::value::{Array, Kind, Value};

/// A rule for comparing two values, named for the kinds it expects, in order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Two nulls are always equal.
    NullNull,
    /// Null never equals a value of another kind.
    NullOther,
    Boolean,
    /// The integer is converted to a boolean, with zero being false.
    BooleanInteger,
    /// The real is converted to a boolean, with zero being false.
    BooleanReal,
    /// Only the strings `true` and `false` equal a boolean.
    BooleanString,
    /// The array is converted to a boolean according to [`ArrayTruthiness`].
    BooleanArray,
    Integer,
    /// The integer is compared numerically with the real.
    IntegerReal,
    /// The string must be the integer's canonical decimal text.
    IntegerString,
    /// Exact IEEE equality.
    Real,
    /// Reals never equal strings.
    RealString,
    String,
}

/// The outcome of resolving a pair of kinds to a rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub rule: Rule,
    /// The operands are in the opposite order to the one `rule` expects.
    pub swapped: bool,
}

/// Find the rule for comparing a value of kind `lhs` with one of kind `rhs`.
///
/// Returns `None` if the kinds are incomparable. Every pair of kinds is listed explicitly, so a
/// new kind cannot be added without deciding how it compares with each existing one.
pub fn resolve(lhs: Kind, rhs: Kind) -> Option<Resolution> {
    use Kind::*;
    let (rule, swapped) = match (lhs, rhs) {
        (Null, Null) => (Rule::NullNull, false),
        (Null, Boolean | Integer | Real | String | Array) => (Rule::NullOther, false),
        (Boolean | Integer | Real | String | Array, Null) => (Rule::NullOther, true),

        (Boolean, Boolean) => (Rule::Boolean, false),
        (Boolean, Integer) => (Rule::BooleanInteger, false),
        (Integer, Boolean) => (Rule::BooleanInteger, true),
        (Boolean, Real) => (Rule::BooleanReal, false),
        (Real, Boolean) => (Rule::BooleanReal, true),
        (Boolean, String) => (Rule::BooleanString, false),
        (String, Boolean) => (Rule::BooleanString, true),
        (Boolean, Array) => (Rule::BooleanArray, false),
        (Array, Boolean) => (Rule::BooleanArray, true),

        (Integer, Integer) => (Rule::Integer, false),
        (Integer, Real) => (Rule::IntegerReal, false),
        (Real, Integer) => (Rule::IntegerReal, true),
        (Integer, String) => (Rule::IntegerString, false),
        (String, Integer) => (Rule::IntegerString, true),

        (Real, Real) => (Rule::Real, false),
        (Real, String) => (Rule::RealString, false),
        (String, Real) => (Rule::RealString, true),

        (String, String) => (Rule::String, false),

        // Arrays only compare with nulls and booleans; two arrays are incomparable even when
        // they share storage.
        (Integer | Real | String | Array, Array) | (Array, Integer | Real | String) => {
            return None
        }
    };
    Some(Resolution { rule, swapped })
}

/// Build the error for comparing kinds `lhs` and `rhs` with `op`, when [`resolve`] found no rule.
pub fn report_incomparable(op: EqualityOp, lhs: Kind, rhs: Kind) -> Error {
    Error::Incomparable { op, lhs, rhs }
}

/// Evaluates equality operators between values.
///
/// A comparator holds no state beyond its [`Config`], never modifies its operands and never
/// reads the elements of an array, so it may be shared freely between threads.
#[derive(Copy, Clone, Debug, Default)]
pub struct Comparator {
    config: Config,
}

impl Comparator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Evaluate `lhs == rhs`.
    pub fn equals(&self, lhs: &Value, rhs: &Value) -> Result<bool> {
        self.evaluate(EqualityOp::Equal, lhs, rhs)
    }

    /// Evaluate `lhs != rhs`.
    pub fn not_equals(&self, lhs: &Value, rhs: &Value) -> Result<bool> {
        self.evaluate(EqualityOp::NotEqual, lhs, rhs)
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// For comparable kinds, `!=` is always the negation of `==`. For incomparable kinds both
    /// operators fail with [`Error::Incomparable`].
    pub fn evaluate(&self, op: EqualityOp, lhs: &Value, rhs: &Value) -> Result<bool> {
        let Some(Resolution { rule, swapped }) = resolve(lhs.kind(), rhs.kind()) else {
            return Err(report_incomparable(op, lhs.kind(), rhs.kind()));
        };
        let (a, b) = if swapped { (rhs, lhs) } else { (lhs, rhs) };
        Ok(op.apply(self.apply(rule, a, b)))
    }

    /// Apply `rule` to operands already in the order it expects.
    fn apply(&self, rule: Rule, a: &Value, b: &Value) -> bool {
        match (rule, a, b) {
            (Rule::NullNull, Value::Null, Value::Null) => true,
            (Rule::NullOther, Value::Null, _) => false,
            (Rule::Boolean, Value::Boolean(x), Value::Boolean(y)) => x == y,
            (Rule::BooleanInteger, Value::Boolean(x), Value::Integer(i)) => *x == (*i != 0),
            (Rule::BooleanReal, Value::Boolean(x), Value::Real(r)) => *x == (*r != 0.0),
            (Rule::BooleanString, Value::Boolean(x), Value::String(s)) => {
                s == if *x { "true" } else { "false" }
            }
            (Rule::BooleanArray, Value::Boolean(x), Value::Array(arr)) => {
                *x == self.array_is_truthy(arr)
            }
            (Rule::Integer, Value::Integer(i), Value::Integer(j)) => i == j,
            (Rule::IntegerReal, Value::Integer(i), Value::Real(r)) => integer_equals_real(*i, *r),
            (Rule::IntegerString, Value::Integer(i), Value::String(s)) => *s == i.to_string(),
            (Rule::Real, Value::Real(x), Value::Real(y)) => x == y,
            (Rule::RealString, Value::Real(_), Value::String(_)) => false,
            (Rule::String, Value::String(x), Value::String(y)) => x == y,
            _ => unreachable!("{rule:?} resolved for {} and {}", a.kind(), b.kind()),
        }
    }

    fn array_is_truthy(&self, arr: &Array) -> bool {
        match self.config.array_truthiness {
            ArrayTruthiness::Always => true,
            ArrayTruthiness::NonEmpty => !arr.is_empty(),
        }
    }
}

/// Exact comparison; `i as f64` alone rounds integers beyond 2^53.
fn integer_equals_real(i: i64, r: f64) -> bool {
    r == i as f64 && r as i128 == i as i128
}

/// Evaluate `lhs == rhs` with the default configuration.
pub fn evaluate_equals(lhs: &Value, rhs: &Value) -> Result<bool> {
    Comparator::default().equals(lhs, rhs)
}

/// Evaluate `lhs != rhs` with the default configuration.
pub fn evaluate_not_equals(lhs: &Value, rhs: &Value) -> Result<bool> {
    Comparator::default().not_equals(lhs, rhs)
}

/// Evaluate `lhs <op> rhs` with the default configuration.
pub fn evaluate(op: EqualityOp, lhs: &Value, rhs: &Value) -> Result<bool> {
    Comparator::default().evaluate(op, lhs, rhs)
}
