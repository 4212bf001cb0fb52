use crate::error::{ArityError, CallableKind};

/// Represents a unary operator.
///
/// Unary operators keep or flip the sign of their operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (`+x`), the identity.
    Pos,
    /// Arithmetic negation (`-x`).
    Neg,
}

/// Represents a binary operator.
///
/// Binary operators cover the arithmetic forms of the expression grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Exp,
    /// Modulo (`%`)
    Mod,
}

/// Represents a comparison operator between two expressions.
///
/// Comparors appear only inside the condition of an `if` statement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Comparor {
    /// Equal (`=`)
    Eq,
    /// Not equal (`!=`)
    Neq,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Less than or equal (`<=`)
    Lte,
    /// Greater than or equal (`>=`)
    Gte,
}

/// Represents a built-in math function.
///
/// Every function has a fixed arity: `Log` takes two arguments, `(base,
/// value)`, all others take one. Arity is enforced when the call node is
/// built, see [`Expr::function`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MathFunction {
    /// Square root.
    Sqrt,
    /// Logarithm to an arbitrary base; arguments are `(base, value)`.
    Log,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Lg,
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Cotangent, computed as `1 / tan(x)`.
    Cot,
}

impl MathFunction {
    /// Looks up a built-in math function by its source-level name.
    ///
    /// # Parameters
    /// - `name`: The callee name as written in source code.
    ///
    /// # Returns
    /// `Some(MathFunction)` if the name is a built-in math function,
    /// otherwise `None`.
    ///
    /// # Example
    /// ```
    /// use tortuga::ast::MathFunction;
    ///
    /// assert_eq!(MathFunction::from_name("sqrt"), Some(MathFunction::Sqrt));
    /// assert_eq!(MathFunction::from_name("triangle"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "lg" => Some(Self::Lg),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "cot" => Some(Self::Cot),
            _ => None,
        }
    }

    /// Gets the source-level name of the function.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Lg => "lg",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Cot => "cot",
        }
    }

    /// Gets the number of arguments the function requires.
    ///
    /// # Example
    /// ```
    /// use tortuga::ast::MathFunction;
    ///
    /// assert_eq!(MathFunction::Log.arity(), 2);
    /// assert_eq!(MathFunction::Cos.arity(), 1);
    /// ```
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Log => 2,
            _ => 1,
        }
    }
}

/// A built-in procedure and the argument count it requires.
struct BuiltinProcedure {
    name: &'static str,
    args: usize,
}

/// Procedures the language knows without a user definition.
static BUILTIN_PROCEDURES: &[BuiltinProcedure] = &[
    BuiltinProcedure { name: "print",    args: 1, },
    BuiltinProcedure { name: "forward",  args: 1, },
    BuiltinProcedure { name: "backward", args: 1, },
    BuiltinProcedure { name: "left",     args: 1, },
    BuiltinProcedure { name: "right",    args: 1, },
];

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers all value-producing constructs: literals, unary and binary
/// arithmetic, built-in math function calls, and procedure calls. Each
/// variant models a distinct syntactic construct; composite variants own
/// their children exclusively, so every tree is finite and acyclic by
/// construction. Nodes are never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// A string literal, used as a payload for built-ins such as `print`.
    Str(String),
    /// A unary operation (e.g. negation).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A call to a built-in math function (e.g. `sqrt(2)`).
    Function {
        /// The function being called.
        function: MathFunction,
        /// Arguments to the function, in source order.
        args:     Vec<Self>,
    },
    /// A call to a built-in or user-defined procedure (e.g. `forward(10)`).
    ProcedureCall {
        /// Name of the procedure being called.
        name: String,
        /// Arguments to the procedure, in source order.
        args: Vec<Self>,
    },
}

impl Expr {
    /// Builds a built-in math function call, validating its argument count.
    ///
    /// The arity of every math function is fixed (see
    /// [`MathFunction::arity`]); a call node is only produced when the
    /// supplied argument list matches it, so later traversals can index the
    /// arguments without checking.
    ///
    /// # Parameters
    /// - `function`: The built-in function to call.
    /// - `args`: The argument expressions, in source order.
    ///
    /// # Returns
    /// The finished [`Expr::Function`] node.
    ///
    /// # Errors
    /// Returns an [`ArityError`] when the argument count does not match the
    /// function's arity; no node is produced.
    ///
    /// # Example
    /// ```
    /// use tortuga::ast::{Expr, MathFunction};
    ///
    /// let err = Expr::function(MathFunction::Log, vec![Expr::Number(8.0)]).unwrap_err();
    ///
    /// assert_eq!(err.to_string(),
    ///            "function 'log' needs 2 argument(s), 1 provided.");
    /// ```
    pub fn function(function: MathFunction, args: Vec<Self>) -> Result<Self, ArityError> {
        if args.len() != function.arity() {
            return Err(ArityError { kind:     CallableKind::Function,
                                    name:     function.name().to_string(),
                                    needs:    function.arity(),
                                    provided: args.len(), });
        }

        Ok(Self::Function { function, args })
    }

    /// Builds a procedure call, validating built-in argument counts.
    ///
    /// Names matching a built-in procedure (`print`, `forward`, `backward`,
    /// `left`, `right`) must supply exactly the argument count the built-in
    /// requires. Any other name passes through unchecked: whether it matches
    /// a user-defined procedure, and whether the argument count fits that
    /// definition, is resolved positionally in a later phase.
    ///
    /// # Parameters
    /// - `name`: The callee name.
    /// - `args`: The argument expressions, in source order.
    ///
    /// # Returns
    /// The finished [`Expr::ProcedureCall`] node.
    ///
    /// # Errors
    /// Returns an [`ArityError`] when a built-in procedure receives the
    /// wrong number of arguments; no node is produced.
    ///
    /// # Example
    /// ```
    /// use tortuga::ast::Expr;
    ///
    /// // Unknown names are resolved later and accept any argument count.
    /// assert!(Expr::call("triangle".to_string(), Vec::new()).is_ok());
    ///
    /// // Built-ins are checked while the node is built.
    /// assert!(Expr::call("print".to_string(), Vec::new()).is_err());
    /// ```
    pub fn call(name: String, args: Vec<Self>) -> Result<Self, ArityError> {
        if let Some(builtin) = BUILTIN_PROCEDURES.iter().find(|b| b.name == name)
           && builtin.args != args.len()
        {
            return Err(ArityError { kind:     CallableKind::Procedure,
                                    name,
                                    needs:    builtin.args,
                                    provided: args.len(), });
        }

        Ok(Self::ProcedureCall { name, args })
    }
}

/// A comparison between two expressions.
///
/// Conditions guard `if` statements; they are not expressions themselves
/// and never produce a numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// The comparison operator.
    pub comparor: Comparor,
    /// Left operand.
    pub left:     Expr,
    /// Right operand.
    pub right:    Expr,
}

/// A named binding site for a procedure parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The parameter name.
    pub name: String,
}

/// Represents a single statement.
///
/// Statements are the units a body is made of; every expression can be
/// used as a statement for its effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// An expression used as a statement (e.g. a procedure call).
    Expression(Expr),
    /// A conditional statement. The language has no else branch.
    If(IfStatement),
    /// A bounded loop.
    Repeat(RepeatStatement),
}

/// An `if` statement: a condition guarding a statement body.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The guarding condition.
    pub condition: Condition,
    /// Statements run when the condition holds, in source order.
    pub body:      Vec<Statement>,
}

/// A `repeat` statement: a body run a bounded number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeatStatement {
    /// How many times the body runs.
    pub count: Expr,
    /// The repeated statements, in source order.
    pub body:  Vec<Statement>,
}

/// Represents a user-defined procedure definition.
///
/// A procedure binds an ordered parameter list to a statement body.
/// Parameters are matched to call arguments positionally; that matching
/// happens in a later phase, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDef {
    /// The name of the procedure.
    pub name:   String,
    /// The formal parameters, in declaration order.
    pub params: Vec<Variable>,
    /// The statements run when the procedure is called.
    pub body:   Vec<Statement>,
}

/// Represents a top-level construct.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalStatement {
    /// A procedure definition introduced with `to`.
    Procedure(ProcedureDef),
    /// Any plain statement used at the top level.
    Statement(Statement),
}

/// The root of a parsed script: an ordered sequence of global statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<GlobalStatement>,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Pos => "POS",
            Self::Neg => "NEG",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Exp => "EXP",
            Self::Mod => "MOD",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Comparor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let comparor = match self {
            Self::Eq => "=",
            Self::Neq => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Gte => ">=",
        };
        write!(f, "{comparor}")
    }
}

impl std::fmt::Display for MathFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let function = match self {
            Self::Sqrt => "SQRT",
            Self::Log => "LOG",
            Self::Ln => "LN",
            Self::Lg => "LG",
            Self::Sin => "SIN",
            Self::Cos => "COS",
            Self::Tan => "TAN",
            Self::Cot => "COT",
        };
        write!(f, "{function}")
    }
}
