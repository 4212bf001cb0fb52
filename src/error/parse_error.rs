use crate::error::ArityError;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A comparison operator was expected but not found.
    ExpectedComparor {
        /// The token encountered instead.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A call supplied the wrong number of arguments to a built-in.
    BadArity {
        /// The underlying arity error.
        error: ArityError,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => write!(f,
                                                          "Error on line {line}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedClosingBracket { line } => write!(f,
                                                            "Error on line {line}: Expected closing bracket ']' but none found."),

            Self::ExpectedComparor { token, line } => write!(f,
                                                             "Error on line {line}: Expected a comparison operator, found {token}."),

            Self::BadArity { error, line } => write!(f, "Error on line {line}: {error}"),

            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
