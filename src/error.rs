/// Arity errors.
///
/// Defines the error type raised when a call supplies the wrong number of
/// arguments to a built-in function or procedure. Arity is checked while
/// call nodes are constructed, so an ill-formed call never enters a tree.
pub mod arity_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include syntax mistakes, unexpected tokens, unclosed
/// groups and blocks, and any other issues detected while the tree is built.
pub mod parse_error;

pub use arity_error::{ArityError, CallableKind};
pub use parse_error::ParseError;
