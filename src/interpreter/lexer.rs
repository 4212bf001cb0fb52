use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `90`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// String literal tokens, such as `"hello"`. The quotes are stripped.
    #[regex(r#""[^"\n\r]*""#, parse_string)]
    Str(String),
    /// `to`
    #[token("to")]
    To,
    /// `end`
    #[token("end")]
    End,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `if`
    #[token("if")]
    If,
    /// Identifier tokens; procedure or parameter names such as `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `=`
    #[token("=")]
    Equals,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// Line breaks; statements end at them.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically resets or increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed numeric value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Strips the quotes from a string literal token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// The contents of the literal, without the surrounding quotes.
fn parse_string(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
