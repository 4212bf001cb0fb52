use std::iter::Peekable;

use crate::{
    ast::{GlobalStatement, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            statement::{parse_procedure_define, parse_statement},
            utils::{expect_statement_end, skip_newlines},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// This is the entry point for parsing.
/// Top-level constructs are read until the token stream is exhausted; each
/// must be followed by a line break, the end of input, or the end of the
/// enclosing construct.
///
/// Grammar: `program := (global_statement NEWLINE)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed [`Program`] tree.
///
/// # Errors
/// Propagates any error from statement parsing, and rejects input where two
/// statements share a line.
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Program>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_newlines(tokens);
        if tokens.peek().is_none() {
            break;
        }

        statements.push(parse_global_statement(tokens)?);
        expect_statement_end(tokens)?;
    }

    Ok(Program { statements })
}

/// Parses a single top-level construct.
///
/// A `to` keyword starts a procedure definition; anything else is parsed as
/// an ordinary statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a construct.
///
/// # Returns
/// The parsed [`GlobalStatement`] node.
fn parse_global_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<GlobalStatement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::To, _)) => Ok(GlobalStatement::Procedure(parse_procedure_define(tokens)?)),
        _ => Ok(GlobalStatement::Statement(parse_statement(tokens)?)),
    }
}
