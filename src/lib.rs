//! # tortuga
//!
//! tortuga is the front end of an interpreter for a small LOGO-like
//! scripting language. It parses scripts made of procedures, loops,
//! conditionals, and arithmetic into a syntax tree, evaluates constant
//! expressions, and renders trees as structural dumps or Graphviz graphs.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use logos::Logos;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{LexerExtras, Token},
        parser::{core::parse_program, expression},
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the node types that represent the syntactic
/// structure of a script as a tree: the program root, procedure
/// definitions, statements, conditions, and expressions. The tree is built
/// by the parser and traversed by the evaluator, the printer, and the graph
/// serializer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Validates built-in call arity while call nodes are constructed.
/// - Enables exhaustive, compiler-checked handling of every node kind.
pub mod ast;
/// Provides unified error types for parsing.
///
/// This module defines all errors that can be raised while lexing or
/// parsing code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arity).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the processing of source code.
///
/// This module ties together lexing, parsing, evaluation, and the two tree
/// renderers. It exposes the building blocks behind the crate-level parse
/// functions.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and
///   renderers.
/// - Provides the traversals that consume a finished tree.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses a script into a program tree.
///
/// The source is tokenized and parsed in full; on success the returned tree
/// is owned by the caller and never mutated afterwards, so it can be handed
/// to any of the traversals, in any order, any number of times.
///
/// # Parameters
/// - `source`: The script text.
///
/// # Returns
/// The parsed [`Program`], or the first error encountered.
///
/// # Examples
/// ```
/// use tortuga::parse;
///
/// let program = parse("repeat 4 [\n  forward(10)\n  right(90)\n]").unwrap();
/// assert_eq!(program.statements.len(), 1);
///
/// // Built-in procedures have a fixed argument count.
/// assert!(parse("print(1, 2)").is_err());
/// ```
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter).map_err(|error| with_last_line(error, &tokens))
}

/// Parses a single expression.
///
/// The whole input must form one expression; leftover tokens are an error.
/// Leading and trailing blank lines are ignored.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The parsed [`Expr`], or the first error encountered.
///
/// # Examples
/// ```
/// use tortuga::{interpreter::evaluator::eval, parse_expression};
///
/// let expr = parse_expression("2 + 3 * 4").unwrap();
/// assert_eq!(eval(&expr), 14.0);
///
/// assert!(parse_expression("2 +").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }

    let expr = match expression::parse_expression(&mut iter) {
        Ok(expr) => expr,
        Err(error) => return Err(with_last_line(error, &tokens)),
    };

    while let Some((Token::NewLine, _)) = iter.peek() {
        iter.next();
    }

    if let Some((tok, line)) = iter.peek() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                          line:  *line, });
    }

    Ok(expr)
}

/// Stamps the final token's line onto end-of-input errors.
///
/// The parsing routines discover end of input only once the token stream is
/// exhausted, so they cannot name a line themselves. The entry points own the
/// token buffer and fill in the line of the last token seen, or line 1 for
/// empty input. Errors that already carry a line pass through untouched.
fn with_last_line(error: ParseError, tokens: &[(Token, usize)]) -> ParseError {
    match error {
        ParseError::UnexpectedEndOfInput { line: 0 } => {
            ParseError::UnexpectedEndOfInput { line: tokens.last().map_or(1, |(_, line)| *line), }
        },
        other => other,
    }
}

/// Tokenizes source text into `(Token, line)` pairs.
fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(ParseError::UnexpectedToken { token: slice.to_string(),
                                                     line:  lexer.extras.line, });
        }
    }

    Ok(tokens)
}
