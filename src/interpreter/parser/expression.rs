use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, MathFunction, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, utils::parse_comma_separated},
    },
};

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_term(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_term(tokens)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/`, and `%`.
///
/// The rule is: `term := unary (("*" | "/" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a unary expression.
///
/// Supports the prefix operators `+` (identity) and `-` (negation).
///
/// Unary operators are right-associative, so an input like `--x` is parsed
/// as `-(-x)`. The operand of a unary operator is a full power expression,
/// so `-2^2` parses as `-(2^2)`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power expression.
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Plus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:      UnaryOperator::Pos,
                           operand: Box::new(operand), })
    } else if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op:      UnaryOperator::Neg,
                           operand: Box::new(operand), })
    } else {
        parse_power(tokens)
    }
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// The exponent re-enters at the unary level, so `2 ^ -1` is valid.
///
/// The rule is: `power := primary ("^" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_primary(tokens)?;
    if let Some((Token::Caret, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { op:    BinaryOperator::Exp,
                                   left:  Box::new(base),
                                   right: Box::new(exponent), });
    }
    Ok(base)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric and string literals
/// - parenthesized expressions
/// - function and procedure calls
/// - bare names, parsed as calls without arguments
///
/// This function does not handle unary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | "(" expression ")"
///              | call
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(n), _) => {
            tokens.next();
            Ok(Expr::Number(*n))
        },
        (Token::Str(s), _) => {
            tokens.next();
            Ok(Expr::Str(s.clone()))
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::Identifier(_), _) => parse_call(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `ParseError::ExpectedClosingParen`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}

/// Parses a function or procedure call.
///
/// Supported forms:
///
/// - `name(arg1, arg2, ...)`
/// - `name`, a call without an argument list
///
/// The function first consumes the name token.
/// If the next token is `(`, an argument list is parsed up to the matching
/// `)`; otherwise the call has no arguments. Names of built-in math
/// functions become [`Expr::Function`] nodes, everything else becomes an
/// [`Expr::ProcedureCall`]. Bare names cover parameter references inside
/// procedure bodies, which are resolved positionally in a later phase.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
///
/// # Returns
/// - [`Expr::Function`] for built-in math function names,
/// - [`Expr::ProcedureCall`] otherwise.
///
/// # Errors
/// Returns a `ParseError` if:
/// - call arguments fail to parse,
/// - the closing `)` is missing,
/// - the argument count does not match a built-in's arity.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    let args = if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();
        parse_comma_separated(tokens, parse_expression, &Token::RParen)?
    } else {
        Vec::new()
    };

    let call = match MathFunction::from_name(&name) {
        Some(function) => Expr::function(function, args),
        None => Expr::call(name, args),
    };

    call.map_err(|error| ParseError::BadArity { error, line })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `^`, `%`).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use tortuga::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::expression::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Caret => Some(BinaryOperator::Exp),
        Token::Percent => Some(BinaryOperator::Mod),
        _ => None,
    }
}
