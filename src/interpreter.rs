use std::collections::HashMap;

use crate::ast::{Comparison, Node, Operand, Program};
use crate::compare::Comparator;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::value::{Array, Kind, Value};

/// The result of evaluating one comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub result: bool,
    pub type0: Kind,
    pub type1: Kind,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.result, self.type0, self.type1)
    }
}

/// Evaluates comparison scripts.
///
/// Arrays are referred to by name. Each name denotes one empty array for the lifetime of the
/// interpreter, so `array i` always refers to the same storage; `array []` is a fresh array each
/// time it is evaluated.
pub struct Interpreter {
    comparator: Comparator,
    arrays: HashMap<String, Array>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Self {
            comparator: Comparator::new(config),
            arrays: HashMap::new(),
        }
    }

    /// Build the value an operand denotes. Errors carry the operand's source.
    pub fn operand(&mut self, operand: &Node<Operand>) -> Result<Value> {
        let Operand { kind, literal } = &operand.inner;
        let text = literal.as_deref().unwrap_or_default();
        let value = match kind {
            Kind::Null => Ok(Value::Null),
            Kind::Boolean => Value::boolean_literal(text),
            Kind::Integer => Value::integer_literal(text),
            Kind::Real => Value::real_literal(text),
            Kind::String => Ok(Value::String(text.to_string())),
            Kind::Array => self.array(text),
        };
        value.map_err(|e| e.at(operand.src))
    }

    fn array(&mut self, name: &str) -> Result<Value> {
        if name == "[]" {
            return Ok(Value::Array(Array::new()));
        }
        if !name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
            return Err(Error::InvalidLiteral {
                kind: Kind::Array,
                text: name.to_string(),
            });
        }
        Ok(Value::Array(
            self.arrays.entry(name.to_string()).or_default().clone(),
        ))
    }

    /// Evaluate a single comparison. Incomparable operands are reported at the operator.
    pub fn comparison(&mut self, comparison: &Node<Comparison>) -> Result<Outcome> {
        let Comparison { op, lhs, rhs } = &comparison.inner;
        let lhs = self.operand(lhs)?;
        let rhs = self.operand(rhs)?;
        let result = self
            .comparator
            .evaluate(op.inner, &lhs, &rhs)
            .map_err(|e| e.at(op.src))?;
        Ok(Outcome {
            result,
            type0: lhs.kind(),
            type1: rhs.kind(),
        })
    }

    /// Evaluate every comparison in the program, stopping at the first error.
    pub fn program(&mut self, program: &Program) -> Result<Vec<Outcome>> {
        program
            .comparisons
            .iter()
            .map(|c| self.comparison(c))
            .collect()
    }
}
