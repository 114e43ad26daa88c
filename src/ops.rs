use crate::token::TokenType;

/// An equality operator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EqualityOp {
    Equal,
    NotEqual,
}

impl EqualityOp {
    pub fn symbol(self) -> &'static str {
        match self {
            EqualityOp::Equal => "==",
            EqualityOp::NotEqual => "!=",
        }
    }

    /// Apply this operator to the outcome of an equality test.
    pub fn apply(self, equal: bool) -> bool {
        match self {
            EqualityOp::Equal => equal,
            EqualityOp::NotEqual => !equal,
        }
    }
}

impl std::fmt::Display for EqualityOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl TryFrom<TokenType> for EqualityOp {
    type Error = ();
    fn try_from(ty: TokenType) -> Result<Self, Self::Error> {
        Ok(match ty {
            TokenType::EqualEqual => EqualityOp::Equal,
            TokenType::BangEqual => EqualityOp::NotEqual,
            _ => return Err(()),
        })
    }
}
