/// Core parsing entry points.
///
/// Contains the parse result alias and the top-level routine that turns a
/// token stream into a program tree.
pub mod core;

/// Expression parsing.
///
/// Implements the precedence rules for arithmetic, unary operators,
/// exponentiation, grouping, and calls.
pub mod expression;

/// Statement parsing.
///
/// Implements parsing for procedure definitions, conditionals, loops, and
/// expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides helpers, common checks, and reusable logic shared by the parsing
/// routines.
pub mod utils;
