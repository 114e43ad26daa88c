use std::sync::{Arc, PoisonError, RwLock};

use crate::error::{Error, Result};

/// The kind of a [`Value`]; the tag of its variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Real,
    String,
    Array,
}

impl Kind {
    pub const ALL: [Kind; 6] = [
        Kind::Null,
        Kind::Boolean,
        Kind::Integer,
        Kind::Real,
        Kind::String,
        Kind::Array,
    ];

    /// The lower-case name of this kind, as it appears in scripts.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Real => "real",
            Kind::String => "string",
            Kind::Array => "array",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Kind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Kind::ALL.into_iter().find(|k| k.name() == s).ok_or(())
    }
}

/// A shared, mutable, ordered sequence of values.
///
/// Cloning an `Array` clones the reference, not the elements.
#[derive(Clone, Debug, Default)]
pub struct Array(Arc<RwLock<Vec<Value>>>);

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn push(&self, value: Value) {
        self.0
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
    }

    /// True if both arrays refer to the same storage.
    pub fn ptr_eq(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(Arc::new(RwLock::new(values)))
    }
}

/// A runtime value.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Real(f64),
    String(String),
    Array(Array),
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Real(_) => Kind::Real,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
        }
    }

    /// Build a boolean from one of its literal spellings.
    pub fn boolean_literal(spelling: &str) -> Result<Value> {
        normalize_boolean(spelling).map(Value::Boolean)
    }

    /// Build an integer from its decimal literal.
    pub fn integer_literal(text: &str) -> Result<Value> {
        text.parse().map(Value::Integer).map_err(|_| Error::InvalidLiteral {
            kind: Kind::Integer,
            text: text.to_string(),
        })
    }

    /// Build a real from its literal, e.g. `-1`, `0.5` or `-3.14e5`.
    pub fn real_literal(text: &str) -> Result<Value> {
        // `f64::from_str` also accepts `inf` and `NaN`, which are not real literals.
        let numeric = text
            .trim_start_matches(['-', '+'])
            .starts_with(|c: char| c.is_ascii_digit() || c == '.');
        match text.parse() {
            Ok(r) if numeric => Ok(Value::Real(r)),
            _ => Err(Error::InvalidLiteral {
                kind: Kind::Real,
                text: text.to_string(),
            }),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(r: f64) -> Self {
        Value::Real(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

/// Map a boolean literal spelling to its canonical value.
///
/// Spellings are case-sensitive: `True` is accepted, `TRUE` is not.
pub fn normalize_boolean(spelling: &str) -> Result<bool> {
    match spelling {
        "true" | "True" | "yes" | "1" => Ok(true),
        "false" | "False" | "no" | "0" => Ok(false),
        _ => Err(Error::InvalidLiteral {
            kind: Kind::Boolean,
            text: spelling.to_string(),
        }),
    }
}
