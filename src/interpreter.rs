/// The evaluator module computes numeric values for expression trees.
///
/// The evaluator recursively reduces an expression subtree to a single
/// floating-point value, applying arithmetic operators and built-in math
/// functions with IEEE 754 double semantics. It is shared by the structural
/// printer and the graph serializer, which annotate constant subtrees with
/// their value.
///
/// # Responsibilities
/// - Evaluates expression nodes, performing all supported operations.
/// - Decides whether a subtree is constant and therefore evaluable.
/// - Treats non-numeric nodes reached during evaluation as fatal
///   programming errors.
pub mod evaluator;
/// The graphviz module serializes trees into graph descriptions.
///
/// The serializer walks a tree in pre-order, assigning every vertex a unique
/// id and emitting one declaration per vertex and one edge per parent-child
/// pair in Graphviz `dot` syntax. Synthetic grouping vertices represent
/// parameter, statement, and argument lists.
///
/// # Responsibilities
/// - Assigns stable pre-order ids, threading the counter through the walk.
/// - Emits node declarations with labels and shapes, and all edges.
/// - Escapes string payloads so the emitted format stays well-formed.
pub mod graphviz;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of programs, statements,
/// and expressions. This enables later phases to analyze and render user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (programs, statements,
///   expressions).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Checks built-in call arity while call nodes are constructed.
pub mod parser;
/// The printer module renders trees as indented structural dumps.
///
/// The printer walks a tree depth-first and emits one line per node,
/// indented two spaces per level, annotating operator and function nodes
/// with their evaluated value when the subtree is constant.
///
/// # Responsibilities
/// - Renders every node on its own line, children in source order.
/// - Evaluates constant operator and function subtrees for annotation.
/// - Escapes string payloads embedded in the dump.
pub mod printer;
