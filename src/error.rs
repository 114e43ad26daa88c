use crate::ops::EqualityOp;
use crate::src::Src;
use crate::value::Kind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// No comparison rule exists for this pair of operand kinds.
    #[error("operator '{op}': incomparable operands")]
    Incomparable { op: EqualityOp, lhs: Kind, rhs: Kind },
    #[error("invalid {kind} literal `{text}`")]
    InvalidLiteral { kind: Kind, text: String },
    #[error("Syntax error: {0} at {1:?}")]
    SyntaxError(String, Src),
    /// An error raised while evaluating the program text at `src`.
    #[error("{error}")]
    Located { error: Box<Error>, src: Src },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn syntax<T>(message: impl Into<String>, src: Src) -> Result<T> {
        Err(Error::SyntaxError(message.into(), src))
    }

    /// Attach a source span to this error. Errors that already carry one are left alone.
    pub fn at(self, src: Src) -> Error {
        match self {
            Error::SyntaxError(..) | Error::Located { .. } => self,
            _ => Error::Located {
                error: Box::new(self),
                src,
            },
        }
    }

    /// The source span of this error, if it has one.
    pub fn src(&self) -> Option<Src> {
        match self {
            Error::SyntaxError(_, src) | Error::Located { src, .. } => Some(*src),
            _ => None,
        }
    }

    /// The underlying error, without any location.
    pub fn root(&self) -> &Error {
        match self {
            Error::Located { error, .. } => error.root(),
            _ => self,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn incomparable_message() {
        let e = Error::Incomparable {
            op: EqualityOp::NotEqual,
            lhs: Kind::Array,
            rhs: Kind::Array,
        };
        assert_eq!(e.to_string(), "operator '!=': incomparable operands");
    }

    #[test]
    fn located_keeps_message() {
        let e = Error::Incomparable {
            op: EqualityOp::Equal,
            lhs: Kind::Integer,
            rhs: Kind::Array,
        };
        let located = e.clone().at(Src::new(10, 2));
        assert_eq!(located.to_string(), e.to_string());
        assert_eq!(located.src(), Some(Src::new(10, 2)));
        assert_eq!(located.root(), &e);
    }

    #[test]
    fn at_does_not_relocate() {
        let e = Error::SyntaxError("oops".into(), Src::new(1, 1));
        assert_eq!(e.clone().at(Src::new(5, 5)), e);
        let located = Error::InvalidLiteral {
            kind: Kind::Integer,
            text: "x".into(),
        }
        .at(Src::new(0, 1));
        assert_eq!(located.clone().at(Src::new(3, 3)), located);
    }
}
