use crate::ast::{Comparison, Node, Operand, Program};
use crate::error::{Error, Result};
use crate::ops::EqualityOp;
use crate::scanner::scan;
use crate::src::Src;
use crate::token::{Token, TokenType};
use crate::value::Kind;

struct Parser<'p> {
    program: &'p str,
    tokens: &'p [Token],
}

impl<'p> Parser<'p> {
    // Each parsing function returns (remainder, value) where `remainder` is the index of the
    // first token not consumed.

    fn is_separator(&self, t: usize) -> bool {
        matches!(
            self.tokens.get(t),
            Some(Token {
                ty: TokenType::Newline | TokenType::Semicolon,
                ..
            })
        )
    }

    /// Parse a sequence of comparisons. Empty statements are allowed.
    fn parse_program(&self, mut t: usize) -> Result<(usize, Program)> {
        let mut comparisons = Vec::new();
        loop {
            while self.is_separator(t) {
                t += 1;
            }
            if t >= self.tokens.len() {
                return Ok((t, Program { comparisons }));
            }
            let comparison;
            (t, comparison) = self.parse_comparison(t)?;
            comparisons.push(comparison);
            if let Some(tok) = self.tokens.get(t) {
                if !self.is_separator(t) {
                    return self.unexpected(tok, "end of comparison");
                }
            }
        }
    }

    fn parse_comparison(&self, t: usize) -> Result<(usize, Node<Comparison>)> {
        let (t, lhs) = self.parse_operand(t)?;
        let Some(tok) = self.tokens.get(t) else {
            return self.eof("`==` or `!=`");
        };
        let Ok(op) = EqualityOp::try_from(tok.ty) else {
            return self.unexpected(tok, "`==` or `!=`");
        };
        let (t, rhs) = self.parse_operand(t + 1)?;
        Ok((t, Comparison::new(Node::new(tok.src, op), lhs, rhs)))
    }

    /// Parse a kind name and, unless the kind is `null`, the literal following it.
    fn parse_operand(&self, t: usize) -> Result<(usize, Node<Operand>)> {
        fn strip_quotes(quoted: &str) -> &str {
            &quoted[1..quoted.len() - 1]
        }
        let Some(tok) = self.tokens.get(t) else {
            return self.eof("kind");
        };
        if tok.ty != TokenType::Word {
            return self.unexpected(tok, "kind");
        }
        let name = tok.src_str(self.program);
        let Ok(kind) = name.parse::<Kind>() else {
            return Error::syntax(format!("Unknown kind `{name}`"), tok.src);
        };
        if kind == Kind::Null {
            return Ok((t + 1, Operand::new(tok.src, kind, None)));
        }
        let expected = format!("{kind} literal");
        let Some(lit) = self.tokens.get(t + 1) else {
            return self.eof(&expected);
        };
        let literal = match lit.ty {
            TokenType::Word => lit.src_str(self.program),
            TokenType::String => strip_quotes(lit.src_str(self.program)),
            _ => return self.unexpected(lit, &expected),
        };
        Ok((t + 2, Operand::new(tok.src + lit.src, kind, Some(literal))))
    }

    fn unexpected<T>(&self, tok: &Token, expected: &str) -> Result<T> {
        if let TokenType::Error(_) = tok.ty {
            return Err(tok.to_error());
        }
        Error::syntax(format!("Expected {expected}, got {:?}", tok.ty), tok.src)
    }

    fn eof<T>(&self, expected: &str) -> Result<T> {
        Error::syntax(
            format!("Expected {expected}, got EOF"),
            Src::new(self.program.len(), 0),
        )
    }
}

/// Parse a comparison script.
pub fn parse(program: &str) -> Result<Program> {
    let tokens = scan(program);
    let (_, parsed) = Parser {
        program,
        tokens: &tokens[..],
    }
    .parse_program(0)?;
    Ok(parsed)
}
