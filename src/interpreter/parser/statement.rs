use std::iter::Peekable;

use crate::{
    ast::{Comparor, Condition, IfStatement, ProcedureDef, RepeatStatement, Statement, Variable},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            expression::parse_expression,
            utils::{expect_statement_end, parse_identifier, skip_newlines},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a conditional statement (`if`).
/// - a bounded loop (`repeat`).
/// - an expression used as a statement.
///
/// The leading token decides which construct is parsed; anything that does
/// not start a keyword statement is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::If, _)) => parse_if(tokens),
        Some((Token::Repeat, _)) => parse_repeat(tokens),
        _ => Ok(Statement::Expression(parse_expression(tokens)?)),
    }
}

/// Parses a procedure definition.
///
/// A definition has the form:
///
/// ```text
///     to <name> :<param> :<param> ...
///         <statements>
///     end
/// ```
///
/// Each parameter is introduced by a colon. The header ends at the line
/// break; the body runs from the next line until the matching `end` keyword,
/// with statements separated by line breaks.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `to` keyword.
///
/// # Returns
/// The parsed [`ProcedureDef`] node.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the procedure name or a parameter name is missing,
/// - a statement follows the parameter list on the same line,
/// - a body statement fails to parse,
/// - the input ends before the `end` keyword.
pub fn parse_procedure_define<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<ProcedureDef>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;

    let mut params = Vec::new();
    while let Some((Token::Colon, _)) = tokens.peek() {
        tokens.next();
        params.push(Variable { name: parse_identifier(tokens)?, });
    }
    expect_statement_end(tokens)?;

    let body = parse_body(tokens, &Token::End, ParseError::UnexpectedEndOfInput { line })?;

    Ok(ProcedureDef { name, params, body })
}

/// Parses an `if` statement.
///
/// Syntax:
/// ```text
///     if <expression> <comparor> <expression> [
///         <statements>
///     ]
/// ```
/// The opening bracket must follow the condition on the same line. The
/// language has no else branch.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `if` keyword.
///
/// # Returns
/// A [`Statement::If`] node holding the condition and its body.
///
/// # Errors
/// - `ExpectedComparor` if no comparison operator separates the operands.
/// - Propagates any errors from operand or body parsing.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let left = parse_expression(tokens)?;
    let comparor = parse_comparor(tokens)?;
    let right = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::If(IfStatement { condition: Condition { comparor, left, right },
                                   body }))
}

/// Parses a `repeat` statement.
///
/// Syntax:
/// ```text
///     repeat <expression> [
///         <statements>
///     ]
/// ```
/// The expression gives the iteration count; the opening bracket must follow
/// it on the same line.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `repeat` keyword.
///
/// # Returns
/// A [`Statement::Repeat`] node holding the count and the body.
fn parse_repeat<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    tokens.next();

    let count = parse_expression(tokens)?;
    let body = parse_block(tokens)?;

    Ok(Statement::Repeat(RepeatStatement { count, body }))
}

/// Parses a bracketed statement block.
///
/// Expected form: `[ statements ]`
///
/// The function consumes the opening bracket and then reads statements until
/// the matching `]`. A missing closing bracket yields
/// `ParseError::ExpectedClosingBracket`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`.
///
/// # Returns
/// The statements of the block, in source order.
fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.next() {
        Some((Token::LBracket, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '[', found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };

    parse_body(tokens, &Token::RBracket, ParseError::ExpectedClosingBracket { line })
}

/// Parses statements until a closing token.
///
/// Shared by bracketed blocks and procedure bodies; the two differ only in
/// their closing token and in the error raised when the input runs out
/// first. The closing token is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first body statement.
/// - `closing`: The token that terminates the body (`]` or `end`).
/// - `eof_error`: Error returned when input ends before `closing`.
///
/// # Returns
/// The statements of the body, in source order.
fn parse_body<'a, I>(tokens: &mut Peekable<I>,
                     closing: &Token,
                     eof_error: ParseError)
                     -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut body = Vec::new();
    loop {
        skip_newlines(tokens);
        match tokens.peek() {
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some(_) => {
                body.push(parse_statement(tokens)?);
                expect_statement_end(tokens)?;
            },
            None => return Err(eof_error),
        }
    }
    Ok(body)
}

/// Parses the comparison operator of a condition.
///
/// Accepted operators: `=`, `!=`, `<`, `>`, `<=`, `>=`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator.
///
/// # Returns
/// The parsed [`Comparor`].
///
/// # Errors
/// Returns `ExpectedComparor` for any other token.
fn parse_comparor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Comparor>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Equals, _)) => Ok(Comparor::Eq),
        Some((Token::BangEqual, _)) => Ok(Comparor::Neq),
        Some((Token::Less, _)) => Ok(Comparor::Lt),
        Some((Token::Greater, _)) => Ok(Comparor::Gt),
        Some((Token::LessEqual, _)) => Ok(Comparor::Lte),
        Some((Token::GreaterEqual, _)) => Ok(Comparor::Gte),
        Some((tok, line)) => {
            Err(ParseError::ExpectedComparor { token: format!("{tok:?}"),
                                               line:  *line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}
