use crate::src::Src;
use thiserror::Error;

#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScannerError {
    #[error("Unterminated string")]
    UnterminatedString,
}

/// The type of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenType {
    /// A bare word: a kind name, or an unquoted literal such as `-3.14e5` or `yes`.
    Word,
    /// A double-quoted string, quotes included.
    String,
    EqualEqual,
    BangEqual,
    Semicolon,
    Newline,

    /// A special variant that indicates an error occurred while scanning.
    Error(ScannerError),
}

/// A token in the input stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Type of the token
    pub ty: TokenType,
    /// Source for this token, from the input program.
    pub src: Src,
}

impl Token {
    /// Fetch the source string for this token, given the program.
    pub fn src_str<'p>(&self, program: &'p str) -> &'p str {
        self.src.str_in(program)
    }

    /// Convert an Error variant into a [`crate::error::Error`]. Any other variant will panic.
    pub fn to_error(&self) -> crate::error::Error {
        let TokenType::Error(e) = self.ty else {
            panic!("Not an Error variant");
        };
        crate::error::Error::SyntaxError(e.to_string(), self.src)
    }
}

pub type Tokens = Vec<Token>;
