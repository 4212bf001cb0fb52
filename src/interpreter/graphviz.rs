use crate::{
    ast::{Condition, Expr, GlobalStatement, Program, Statement},
    interpreter::evaluator::{eval, is_constant},
};

/// Node shapes used in the emitted graph.
///
/// Leaves and control constructs are circles, operator nodes are double
/// circles, and synthetic grouping nodes are rectangles.
#[derive(Clone, Copy)]
enum Shape {
    Circle,
    DoubleCircle,
    Rect,
}

/// Renders a program as a Graphviz `digraph` description.
///
/// Every node is assigned a unique id in pre-order: a parent is declared
/// before its children, children in source order. Each parent→child
/// relationship is emitted as one edge, written before the child subtree is
/// walked. List-valued children are grouped under synthetic `PARAMS: n`,
/// `STMTS: n`, and `ARGS: n` nodes so they hang off a single vertex.
/// Rendering the same tree twice yields byte-identical output.
///
/// # Parameters
/// - `program`: The program tree to render.
///
/// # Returns
/// The graph description, ready to be fed to `dot`.
///
/// # Example
/// ```
/// use tortuga::{interpreter::graphviz::render, parse};
///
/// let graph = render(&parse("1 + 2").unwrap());
///
/// assert!(graph.starts_with("digraph {\n  rankdir=TD;\n"));
/// assert!(graph.contains("n1 [ label=\"ADD\" shape=doublecircle ];"));
/// assert!(graph.ends_with("}\n"));
/// ```
#[must_use]
pub fn render(program: &Program) -> String {
    let mut out = String::from("digraph {\n  rankdir=TD;\n");
    write_program(&mut out, program, 0);
    out.push_str("}\n");
    out
}

/// Renders a single expression as a Graphviz `digraph` description.
///
/// Works like [`render`] but roots the graph at the expression itself,
/// which receives id 0.
///
/// # Parameters
/// - `expr`: The expression tree to render.
///
/// # Returns
/// The graph description, ready to be fed to `dot`.
#[must_use]
pub fn render_expr(expr: &Expr) -> String {
    let mut out = String::from("digraph {\n  rankdir=TD;\n");
    write_expr(&mut out, expr, 0);
    out.push_str("}\n");
    out
}

/// Writes the root node and all top-level constructs.
fn write_program(out: &mut String, program: &Program, id: usize) -> usize {
    write_node(out, id, "ROOT", Shape::Circle);
    let mut next = id + 1;
    for statement in &program.statements {
        write_edge(out, id, next);
        next = write_global_statement(out, statement, next);
    }
    next
}

/// Writes one top-level construct.
///
/// A procedure definition declares itself, then a `PARAMS: n` grouping node
/// holding the parameters, then a `STMTS: n` grouping node holding the
/// body.
fn write_global_statement(out: &mut String, statement: &GlobalStatement, id: usize) -> usize {
    match statement {
        GlobalStatement::Procedure(def) => {
            write_node(out, id, &format!("DEF: {}", def.name), Shape::Circle);
            let mut next = id + 1;

            write_edge(out, id, next);
            let params = next;
            write_node(out, params, &format!("PARAMS: {}", def.params.len()), Shape::Rect);
            next += 1;
            for param in &def.params {
                write_edge(out, params, next);
                write_node(out, next, &format!("VAR: {}", param.name), Shape::Circle);
                next += 1;
            }

            write_edge(out, id, next);
            write_body(out, &def.body, next)
        },
        GlobalStatement::Statement(statement) => write_statement(out, statement, id),
    }
}

/// Writes one statement.
///
/// Conditionals and loops each insert a wrapper vertex (`COND`, `COUNT`)
/// between themselves and their header child, followed by a `STMTS: n`
/// grouping node for the body.
fn write_statement(out: &mut String, statement: &Statement, id: usize) -> usize {
    match statement {
        Statement::Expression(expr) => write_expr(out, expr, id),
        Statement::If(if_statement) => {
            write_node(out, id, "IF", Shape::Circle);
            let mut next = id + 1;

            write_edge(out, id, next);
            let cond = next;
            write_node(out, cond, "COND", Shape::Circle);
            next += 1;
            write_edge(out, cond, next);
            next = write_condition(out, &if_statement.condition, next);

            write_edge(out, id, next);
            write_body(out, &if_statement.body, next)
        },
        Statement::Repeat(repeat) => {
            write_node(out, id, "LOOP", Shape::Circle);
            let mut next = id + 1;

            write_edge(out, id, next);
            let count = next;
            write_node(out, count, "COUNT", Shape::Circle);
            next += 1;
            write_edge(out, count, next);
            next = write_expr(out, &repeat.count, next);

            write_edge(out, id, next);
            write_body(out, &repeat.body, next)
        },
    }
}

/// Writes a `STMTS: n` grouping node and the statements under it.
fn write_body(out: &mut String, body: &[Statement], id: usize) -> usize {
    write_node(out, id, &format!("STMTS: {}", body.len()), Shape::Rect);
    let mut next = id + 1;
    for statement in body {
        write_edge(out, id, next);
        next = write_statement(out, statement, next);
    }
    next
}

/// Writes a condition as an `OP:` vertex with its two operands.
fn write_condition(out: &mut String, condition: &Condition, id: usize) -> usize {
    write_node(out, id, &format!("OP: {}", condition.comparor), Shape::DoubleCircle);
    let mut next = id + 1;
    write_edge(out, id, next);
    next = write_expr(out, &condition.left, next);
    write_edge(out, id, next);
    write_expr(out, &condition.right, next)
}

/// Writes one expression node and its children.
///
/// Numeric leaves are labelled with their bare value. Function nodes whose
/// subtree is constant carry the evaluated value on a second label line.
/// Procedure call arguments are grouped under an `ARGS: n` node; function
/// arguments hang directly off the function vertex.
fn write_expr(out: &mut String, expr: &Expr, id: usize) -> usize {
    match expr {
        Expr::Number(n) => {
            write_node(out, id, &n.to_string(), Shape::Circle);
            id + 1
        },
        Expr::Str(s) => {
            write_node(out, id, &format!("STR: {}", s.replace('"', "\\\"")), Shape::Circle);
            id + 1
        },
        Expr::UnaryOp { op, operand } => {
            write_node(out, id, &op.to_string(), Shape::DoubleCircle);
            let next = id + 1;
            write_edge(out, id, next);
            write_expr(out, operand, next)
        },
        Expr::BinaryOp { op, left, right } => {
            write_node(out, id, &op.to_string(), Shape::DoubleCircle);
            let mut next = id + 1;
            write_edge(out, id, next);
            next = write_expr(out, left, next);
            write_edge(out, id, next);
            write_expr(out, right, next)
        },
        Expr::Function { function, args } => {
            let label = if is_constant(expr) {
                format!("{function}\\n(={})", eval(expr))
            } else {
                function.to_string()
            };
            write_node(out, id, &label, Shape::DoubleCircle);
            let mut next = id + 1;
            for arg in args {
                write_edge(out, id, next);
                next = write_expr(out, arg, next);
            }
            next
        },
        Expr::ProcedureCall { name, args } => {
            write_node(out, id, &format!("CALL: {name}"), Shape::Circle);
            let mut next = id + 1;

            write_edge(out, id, next);
            let arguments = next;
            write_node(out, arguments, &format!("ARGS: {}", args.len()), Shape::Rect);
            next += 1;
            for arg in args {
                write_edge(out, arguments, next);
                next = write_expr(out, arg, next);
            }
            next
        },
    }
}

/// Appends one node declaration.
fn write_node(out: &mut String, id: usize, label: &str, shape: Shape) {
    let shape = match shape {
        Shape::Circle => "circle",
        Shape::DoubleCircle => "doublecircle",
        Shape::Rect => "rect",
    };
    out.push_str(&format!("  n{id} [ label=\"{label}\" shape={shape} ];\n"));
}

/// Appends one parent→child edge.
fn write_edge(out: &mut String, parent: usize, child: usize) {
    out.push_str(&format!("  n{parent}->n{child};\n"));
}
