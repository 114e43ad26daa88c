//! AST representation of a parsed comparison script.
mod node;

pub use node::Node;

use crate::ops::EqualityOp;
use crate::src::Src;
use crate::value::Kind;

/// An operand: a kind name, followed by a literal for every kind but `null`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    pub kind: Kind,
    /// Literal text; for quoted strings, without the `"` characters.
    pub literal: Option<String>,
}

impl Operand {
    pub fn new(src: Src, kind: Kind, literal: Option<&str>) -> Node<Operand> {
        Node::new(
            src,
            Operand {
                kind,
                literal: literal.map(str::to_string),
            },
        )
    }
}

/// A single comparison, `lhs <op> rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    pub op: Node<EqualityOp>,
    pub lhs: Node<Operand>,
    pub rhs: Node<Operand>,
}

impl Comparison {
    pub fn new(op: Node<EqualityOp>, lhs: Node<Operand>, rhs: Node<Operand>) -> Node<Comparison> {
        Node::new(lhs.src + rhs.src, Comparison { op, lhs, rhs })
    }
}

/// A script: comparisons separated by newlines or semicolons.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub comparisons: Vec<Node<Comparison>>,
}
