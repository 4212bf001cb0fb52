use crate::{
    ast::{Condition, Expr, GlobalStatement, Program, Statement},
    interpreter::evaluator::{eval, is_constant},
};

/// Renders a program as an indented structural dump.
///
/// Every node contributes exactly one line; children are indented two
/// spaces deeper than their parent and appear in source order. Operator and
/// function lines carry the evaluated value of their subtree when it is
/// constant. Rendering the same tree twice yields byte-identical output.
///
/// # Parameters
/// - `program`: The program tree to render.
///
/// # Returns
/// The dump as a single string, one `\n`-terminated line per node.
///
/// # Example
/// ```
/// use tortuga::{interpreter::printer::dump, parse};
///
/// let program = parse("print(\"hi\")").unwrap();
///
/// assert_eq!(dump(&program), "CODE\n  CALL print\n    STRING \"hi\"\n");
/// ```
#[must_use]
pub fn dump(program: &Program) -> String {
    let mut out = String::new();
    write_line(&mut out, 0, "CODE");
    for statement in &program.statements {
        write_global_statement(&mut out, statement, 1);
    }
    out
}

/// Renders a single expression as an indented structural dump.
///
/// Works like [`dump`] but roots the output at the expression itself, at
/// depth zero.
///
/// # Parameters
/// - `expr`: The expression tree to render.
///
/// # Returns
/// The dump as a single string, one `\n`-terminated line per node.
///
/// # Example
/// ```
/// use tortuga::{interpreter::printer::dump_expr, parse_expression};
///
/// let expr = parse_expression("2 + 3 * 4").unwrap();
///
/// assert_eq!(dump_expr(&expr),
///            "ADD (=14)\n  NUMBER 2\n  MUL (=12)\n    NUMBER 3\n    NUMBER 4\n");
/// ```
#[must_use]
pub fn dump_expr(expr: &Expr) -> String {
    let mut out = String::new();
    write_expr(&mut out, expr, 0);
    out
}

/// Writes one top-level construct.
fn write_global_statement(out: &mut String, statement: &GlobalStatement, depth: usize) {
    match statement {
        GlobalStatement::Procedure(def) => {
            write_line(out, depth, &format!("DEF {}", def.name));
            for param in &def.params {
                write_line(out, depth + 1, &format!("VAR {}", param.name));
            }
            for statement in &def.body {
                write_statement(out, statement, depth + 1);
            }
        },
        GlobalStatement::Statement(statement) => write_statement(out, statement, depth),
    }
}

/// Writes one statement and its children.
fn write_statement(out: &mut String, statement: &Statement, depth: usize) {
    match statement {
        Statement::Expression(expr) => write_expr(out, expr, depth),
        Statement::If(if_statement) => {
            write_line(out, depth, "IF");
            write_condition(out, &if_statement.condition, depth + 1);
            for statement in &if_statement.body {
                write_statement(out, statement, depth + 1);
            }
        },
        Statement::Repeat(repeat) => {
            write_line(out, depth, "LOOP");
            write_expr(out, &repeat.count, depth + 1);
            for statement in &repeat.body {
                write_statement(out, statement, depth + 1);
            }
        },
    }
}

/// Writes a condition and its operands.
fn write_condition(out: &mut String, condition: &Condition, depth: usize) {
    write_line(out, depth, &format!("COND {}", condition.comparor));
    write_expr(out, &condition.left, depth + 1);
    write_expr(out, &condition.right, depth + 1);
}

/// Writes one expression node and its children.
fn write_expr(out: &mut String, expr: &Expr, depth: usize) {
    match expr {
        Expr::Number(n) => write_line(out, depth, &format!("NUMBER {n}")),
        Expr::Str(s) => {
            write_line(out, depth, &format!("STRING \"{}\"", s.replace('"', "\\\"")));
        },
        Expr::UnaryOp { op, operand } => {
            write_line(out, depth, &format!("{op}{}", annotation(expr)));
            write_expr(out, operand, depth + 1);
        },
        Expr::BinaryOp { op, left, right } => {
            write_line(out, depth, &format!("{op}{}", annotation(expr)));
            write_expr(out, left, depth + 1);
            write_expr(out, right, depth + 1);
        },
        Expr::Function { function, args } => {
            write_line(out, depth, &format!("{function}{}", annotation(expr)));
            for arg in args {
                write_expr(out, arg, depth + 1);
            }
        },
        Expr::ProcedureCall { name, args } => {
            write_line(out, depth, &format!("CALL {name}"));
            for arg in args {
                write_expr(out, arg, depth + 1);
            }
        },
    }
}

/// Appends one indented line.
fn write_line(out: &mut String, depth: usize, label: &str) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(label);
    out.push('\n');
}

/// The ` (=value)` suffix for operator and function lines.
///
/// Empty when the subtree does not reduce to a number; evaluating it would
/// panic.
fn annotation(expr: &Expr) -> String {
    if is_constant(expr) {
        format!(" (={})", eval(expr))
    } else {
        String::new()
    }
}
