use log::{debug, trace};
use logos::Logos;

use crate::{
    ast::TokenStream,
    error::{ParseError, parse_error::ParseResult},
    interpreter::lexer::Token,
};

/// Validates an expression and splits it into operands and operators.
///
/// The scan runs once, left to right, over the character classes produced by
/// the [`Token`] lexer. The only mutable state is the text of the operand
/// currently being accumulated; which error is returned depends on which
/// class transition is illegal at which position. Whitespace is ignored
/// everywhere, including between the digits of one operand.
///
/// The first and last significant characters are checked before the scan, so
/// `"2+3x"` fails with [`ParseError::EndsWithOperator`] rather than
/// [`ParseError::InvalidCharacter`].
///
/// # Errors
/// Returns the first [`ParseError`] encountered. `"1.2.3"` is only rejected
/// when its text is converted, as [`ParseError::MalformedNumber`]; an operand
/// beyond the range of `f64` fails with [`ParseError::OutOfRange`].
///
/// # Example
/// ```
/// use calculable::{error::ParseError, interpreter::parser::parse_expression};
///
/// let stream = parse_expression("2 + 3.5 * 4").unwrap();
/// assert_eq!(stream.operands, vec![2.0, 3.5, 4.0]);
/// assert_eq!(stream.operators, vec!['+', '*']);
///
/// assert_eq!(parse_expression("+2+3"), Err(ParseError::StartsWithOperator));
/// ```
pub fn parse_expression(input: &str) -> ParseResult<TokenStream> {
    check_bounds(input)?;

    let mut stream = TokenStream::default();
    let mut buffer = String::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(Token::Digits) => buffer.push_str(lexer.slice()),
            Ok(Token::Dot) => {
                if buffer.ends_with('.') {
                    return Err(ParseError::DoubleDot { position });
                }
                buffer.push('.');
            },
            Ok(Token::Operator(symbol)) => {
                if buffer.is_empty() || buffer == "." {
                    return Err(ParseError::ConsecutiveOperators { position });
                }
                stream.operands.push(parse_operand(&buffer)?);
                stream.operators.push(symbol);
                buffer.clear();
            },
            Ok(Token::Ignored) => {},
            Err(()) => {
                let character = input[position..].chars().next().unwrap_or_default();
                return Err(ParseError::InvalidCharacter { character, position });
            },
        }
        trace!("token {token:?} at {position}, operand buffer {buffer:?}");
    }

    stream.operands.push(parse_operand(&buffer)?);

    debug!("parsed {input:?} into {} operands and {} operators",
           stream.operands.len(),
           stream.operators.len());
    Ok(stream)
}

/// Checks that the first and last significant characters are digits.
fn check_bounds(input: &str) -> ParseResult<()> {
    let trimmed = input.trim();
    let (Some(first), Some(last)) = (trimmed.chars().next(), trimmed.chars().next_back()) else {
        return Err(ParseError::EmptyExpression);
    };

    if !first.is_ascii_digit() {
        return Err(ParseError::StartsWithOperator);
    }
    if !last.is_ascii_digit() {
        return Err(ParseError::EndsWithOperator);
    }
    Ok(())
}

/// Converts accumulated operand text into a number.
///
/// Text that only parses to an infinity overflows `f64` and is rejected.
fn parse_operand(text: &str) -> ParseResult<f64> {
    let value: f64 =
        text.parse().map_err(|source| ParseError::MalformedNumber { text: text.to_string(),
                                                                     source })?;
    if value.is_infinite() {
        return Err(ParseError::OutOfRange { text: text.to_string() });
    }
    Ok(value)
}
