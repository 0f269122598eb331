use logos::Logos;

/// Represents a character class in an expression.
///
/// Digit runs are emitted as a single token; every `.` and every operator is
/// a token of its own, so `1..5` yields two consecutive [`Token::Dot`]s.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// One or more ASCII digits.
    #[regex(r"[0-9]+")]
    Digits,
    /// `.`
    #[token(".")]
    Dot,
    /// One of `+`, `-`, `*` or `/`.
    #[regex(r"[+*/-]", operator_symbol)]
    Operator(char),
    /// Whitespace, ignored wherever it appears.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

/// Extracts the operator symbol from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The single operator character.
/// - `None`: If the slice is empty.
fn operator_symbol(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Result<Token, ()>> {
        Token::lexer(source).collect()
    }

    #[test]
    fn classifies_digits_dots_and_operators() {
        assert_eq!(tokens("12.5*3"),
                   vec![Ok(Token::Digits),
                        Ok(Token::Dot),
                        Ok(Token::Digits),
                        Ok(Token::Operator('*')),
                        Ok(Token::Digits)]);
    }

    #[test]
    fn skips_whitespace_everywhere() {
        assert_eq!(tokens(" 1 \t+\n2 "),
                   vec![Ok(Token::Digits), Ok(Token::Operator('+')), Ok(Token::Digits)]);
    }

    #[test]
    fn adjacent_dots_are_separate_tokens() {
        assert_eq!(tokens("1..5"),
                   vec![Ok(Token::Digits), Ok(Token::Dot), Ok(Token::Dot), Ok(Token::Digits)]);
    }

    #[test]
    fn unknown_character_is_an_error_with_its_span() {
        let mut lexer = Token::lexer("2+x");
        assert_eq!(lexer.next(), Some(Ok(Token::Digits)));
        assert_eq!(lexer.next(), Some(Ok(Token::Operator('+'))));
        assert_eq!(lexer.next(), Some(Err(())));
        assert_eq!(lexer.span(), 2..3);
    }
}
