use crate::src::Src;
use crate::token::{ScannerError, Token, TokenType, Tokens};

/// True if the character `c` at byte offset `i` begins an `==` or `!=` operator.
fn is_operator_start(program: &str, i: usize, c: char) -> bool {
    (c == '=' || c == '!') && program[i + 1..].starts_with('=')
}

/// True if the character `c` at byte offset `i` cannot be part of a word.
fn ends_word(program: &str, i: usize, c: char) -> bool {
    c.is_whitespace() || c == ';' || c == '"' || is_operator_start(program, i, c)
}

/// Scan the given input into a sequence of tokens.
///
/// Scanning never fails outright: malformed input produces a token of type
/// [`TokenType::Error`], which the parser reports.
pub fn scan(program: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut chars = program.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        let ty = match c {
            '\n' => TokenType::Newline,
            c if c.is_whitespace() => continue,
            ';' => TokenType::Semicolon,
            '=' | '!' if is_operator_start(program, start, c) => {
                chars.next();
                if c == '=' {
                    TokenType::EqualEqual
                } else {
                    TokenType::BangEqual
                }
            }
            '"' => {
                // Strings do not span lines.
                let mut ty = TokenType::Error(ScannerError::UnterminatedString);
                while let Some((_, c)) = chars.next_if(|(_, c)| *c != '\n') {
                    if c == '"' {
                        ty = TokenType::String;
                        break;
                    }
                }
                ty
            }
            _ => {
                while chars
                    .next_if(|(i, c)| !ends_word(program, *i, *c))
                    .is_some()
                {}
                TokenType::Word
            }
        };
        let end = chars.peek().map(|(i, _)| *i).unwrap_or(program.len());
        tokens.push(Token {
            ty,
            src: Src::new(start, end - start),
        });
    }
    tokens
}

#[cfg(test)]
mod test {
    use super::*;
    use TokenType::*;

    fn to_strings<'p>(program: &'p str) -> Vec<(TokenType, &'p str)> {
        scan(program)
            .into_iter()
            .map(|t| (t.ty, t.src_str(program)))
            .collect()
    }

    #[test]
    fn comparison() {
        assert_eq!(
            to_strings("integer -10 == string -10"),
            vec![
                (Word, "integer"),
                (Word, "-10"),
                (EqualEqual, "=="),
                (Word, "string"),
                (Word, "-10"),
            ]
        );
    }

    #[test]
    fn operators_and_whitespace() {
        let exp = vec![(Word, "null"), (BangEqual, "!="), (Word, "null")];
        assert_eq!(to_strings("null != null"), exp);
        assert_eq!(to_strings("null!=null"), exp);
        assert_eq!(to_strings("  null\t!=  null  "), exp);
    }

    #[test]
    fn lone_equals_is_part_of_word() {
        assert_eq!(
            to_strings("a=b = !"),
            vec![(Word, "a=b"), (Word, "="), (Word, "!")]
        );
    }

    #[test]
    fn multi_equal() {
        assert_eq!(
            to_strings("==="),
            vec![(EqualEqual, "=="), (Word, "=")]
        );
        assert_eq!(
            to_strings("!==="),
            vec![(BangEqual, "!="), (EqualEqual, "==")]
        );
    }

    #[test]
    fn statement_separators() {
        assert_eq!(
            to_strings("null;\nnull\r\n"),
            vec![
                (Word, "null"),
                (Semicolon, ";"),
                (Newline, "\n"),
                (Word, "null"),
                (Newline, "\n"),
            ]
        );
    }

    #[test]
    fn strings() {
        assert_eq!(
            to_strings(r#"string "a b==c" == string"x""#),
            vec![
                (Word, "string"),
                (String, r#""a b==c""#),
                (EqualEqual, "=="),
                (Word, "string"),
                (String, r#""x""#),
            ]
        );
    }

    #[test]
    fn unterminated_string() {
        assert_eq!(
            to_strings("string \"abc\nnull"),
            vec![
                (Word, "string"),
                (Error(ScannerError::UnterminatedString), "\"abc"),
                (Newline, "\n"),
                (Word, "null"),
            ]
        );
    }

    #[test]
    fn wide_characters() {
        assert_eq!(
            to_strings("string 世界==string 世界"),
            vec![
                (Word, "string"),
                (Word, "世界"),
                (EqualEqual, "=="),
                (Word, "string"),
                (Word, "世界"),
            ]
        );
    }
}
