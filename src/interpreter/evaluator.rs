use crate::ast::{BinaryOperator, Expr, MathFunction, UnaryOperator};

/// Computes the numeric value of an expression.
///
/// Evaluation is recursive and follows IEEE 754 double semantics throughout:
/// division by zero yields an infinity or NaN rather than an error, `%` is
/// the floating-point remainder whose sign follows the dividend, and `^` is
/// the standard power function. Re-evaluating the same tree always yields a
/// bit-identical result.
///
/// # Parameters
/// - `expr`: The expression to evaluate.
///
/// # Returns
/// The value of the expression as `f64`.
///
/// # Panics
/// Panics when the expression contains a node that has no numeric value: a
/// string literal or a procedure call. Use [`is_constant`] to check first.
/// Also panics on a function node whose argument count disagrees with its
/// arity; [`Expr::function`] never builds such a node.
///
/// # Example
/// ```
/// use tortuga::{interpreter::evaluator::eval, parse_expression};
///
/// let expr = parse_expression("2 + 3 * 4").unwrap();
///
/// assert_eq!(eval(&expr), 14.0);
/// ```
#[must_use]
pub fn eval(expr: &Expr) -> f64 {
    match expr {
        Expr::Number(n) => *n,
        Expr::Str(_) => panic!("cannot evaluate a string literal to a number"),
        Expr::UnaryOp { op, operand } => eval_unary(*op, operand),
        Expr::BinaryOp { op, left, right } => eval_binary(*op, left, right),
        Expr::Function { function, args } => eval_function(*function, args),
        Expr::ProcedureCall { name, .. } => {
            panic!("cannot evaluate the procedure call '{name}' to a number")
        },
    }
}

/// Reports whether an expression reduces to a number.
///
/// An expression is constant when every leaf under it is a numeric literal.
/// String literals and procedure calls (including bare parameter
/// references) are not constant.
///
/// # Parameters
/// - `expr`: The expression to inspect.
///
/// # Returns
/// `true` if [`eval`] can be called on the expression without panicking.
///
/// # Example
/// ```
/// use tortuga::{interpreter::evaluator::is_constant, parse_expression};
///
/// assert!(is_constant(&parse_expression("sqrt(2) + 1").unwrap()));
/// assert!(!is_constant(&parse_expression("forward(10)").unwrap()));
/// ```
#[must_use]
pub fn is_constant(expr: &Expr) -> bool {
    match expr {
        Expr::Number(_) => true,
        Expr::Str(_) | Expr::ProcedureCall { .. } => false,
        Expr::UnaryOp { operand, .. } => is_constant(operand),
        Expr::BinaryOp { left, right, .. } => is_constant(left) && is_constant(right),
        Expr::Function { args, .. } => args.iter().all(is_constant),
    }
}

/// Applies a unary operator to its evaluated operand.
fn eval_unary(op: UnaryOperator, operand: &Expr) -> f64 {
    match op {
        UnaryOperator::Pos => eval(operand),
        UnaryOperator::Neg => -eval(operand),
    }
}

/// Applies a binary operator to its evaluated operands.
fn eval_binary(op: BinaryOperator, left: &Expr, right: &Expr) -> f64 {
    let (left, right) = (eval(left), eval(right));
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Exp => left.powf(right),
        BinaryOperator::Mod => left % right,
    }
}

/// Applies a built-in math function to its evaluated arguments.
///
/// `log` takes its arguments as `(base, value)` and is computed as
/// `ln(value) / ln(base)`. The cotangent is computed as `1 / tan(x)`, so it
/// yields an infinity where `tan(x)` is zero. The arity is asserted again
/// here: a mismatch means the node was built without [`Expr::function`].
fn eval_function(function: MathFunction, args: &[Expr]) -> f64 {
    assert_eq!(args.len(),
               function.arity(),
               "function '{}' reached evaluation with {} argument(s), needs {}",
               function.name(),
               args.len(),
               function.arity());

    match function {
        MathFunction::Sqrt => eval(&args[0]).sqrt(),
        MathFunction::Log => eval(&args[1]).ln() / eval(&args[0]).ln(),
        MathFunction::Ln => eval(&args[0]).ln(),
        MathFunction::Lg => eval(&args[0]).log10(),
        MathFunction::Sin => eval(&args[0]).sin(),
        MathFunction::Cos => eval(&args[0]).cos(),
        MathFunction::Tan => eval(&args[0]).tan(),
        MathFunction::Cot => 1.0 / eval(&args[0]).tan(),
    }
}
