//! Equality and inequality between values of different kinds.
//!
//! The core is [`compare`], which decides for any two [`Value`]s whether they are equal, not
//! equal, or incomparable. Around it sit a small comparison script language ([`parser`],
//! [`interpreter`]) and the reference table of cases the engine must satisfy ([`fixture`]).

pub mod ast;
pub mod compare;
pub mod config;
pub mod error;
pub mod fixture;
pub mod interpreter;
pub mod ops;
pub mod parser;
pub mod run;
pub mod scanner;
pub mod src;
pub mod token;
pub mod value;

pub use compare::{evaluate, evaluate_equals, evaluate_not_equals, report_incomparable, Comparator};
pub use config::{ArrayTruthiness, Config};
pub use error::{Error, Result};
pub use ops::EqualityOp;
pub use value::{normalize_boolean, Array, Kind, Value};
