use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists. It repeatedly calls
/// `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {tok:?}"),
                                              line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes any run of line-break tokens.
///
/// Blank lines may appear anywhere between statements; callers use this to
/// move the stream to the next meaningful token.
///
/// # Parameters
/// - `tokens`: Token iterator, possibly positioned at a line break.
pub(in crate::interpreter::parser) fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    while let Some((Token::NewLine, _)) = tokens.peek() {
        tokens.next();
    }
}

/// Checks that a statement is properly terminated.
///
/// A statement ends at a line break, the end of input, or the token closing
/// the enclosing construct (`]` or `end`). The terminating token is not
/// consumed. Anything else means two statements share a line.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just past a statement.
///
/// # Errors
/// Returns a `ParseError` if another token follows on the same line.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None | Some((Token::NewLine | Token::RBracket | Token::End, _)) => Ok(()),
        Some((tok, line)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected a new line, found {tok:?}"),
                                              line:  *line, })
        },
    }
}
