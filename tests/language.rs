use std::fs::{self};

use tortuga::{
    ast::{Expr, GlobalStatement, MathFunction, Statement},
    interpreter::{
        evaluator::eval,
        graphviz::{render, render_expr},
        printer::{dump, dump_expr},
    },
    parse, parse_expression,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_parse() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "tg"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = parse(&content) {
            panic!("Demo script {path:?} failed to parse: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

fn assert_parses(src: &str) {
    if let Err(e) = parse(src) {
        panic!("Script failed to parse: {e}");
    }
}

fn assert_parse_fails(src: &str) {
    if parse(src).is_ok() {
        panic!("Script parsed but was expected to fail")
    }
}

fn eval_src(src: &str) -> f64 {
    match parse_expression(src) {
        Ok(expr) => eval(&expr),
        Err(e) => panic!("Expression failed to parse: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_eq!(eval_src("1 + 2"), 3.0);
    assert_eq!(eval_src("7 * 9"), 63.0);
    assert_eq!(eval_src("8 - 5"), 3.0);
    assert_eq!(eval_src("10 / 2"), 5.0);
    assert_eq!(eval_src("2 + 3 * 4"), 14.0);
    assert_eq!(eval_src("(2 + 3) * 4"), 20.0);
}

#[test]
fn exponentiation_and_unary() {
    assert_eq!(eval_src("2 ^ 10"), 1024.0);
    assert_eq!(eval_src("2 ^ 3 ^ 2"), 512.0);
    assert_eq!(eval_src("-2 ^ 2"), -4.0);
    assert_eq!(eval_src("2 ^ -1"), 0.5);
    assert_eq!(eval_src("+5"), 5.0);
    assert_eq!(eval_src("--5"), 5.0);
}

#[test]
fn division_follows_ieee_semantics() {
    assert_eq!(eval_src("1 / 0"), f64::INFINITY);
    assert_eq!(eval_src("-1 / 0"), f64::NEG_INFINITY);
    assert!(eval_src("0 / 0").is_nan());
}

#[test]
fn modulo_takes_the_sign_of_the_dividend() {
    assert_eq!(eval_src("7 % 3"), 1.0);
    assert_eq!(eval_src("-7 % 3"), -1.0);
    assert_eq!(eval_src("7 % -3"), 1.0);
}

#[test]
fn math_functions() {
    assert_eq!(eval_src("sqrt(9)"), 3.0);
    assert_eq!(eval_src("log(2, 8)"), 3.0);
    assert_eq!(eval_src("log(10, 100)"), 2.0);
    assert_eq!(eval_src("ln(1)"), 0.0);
    assert_eq!(eval_src("lg(1000)"), 3.0);
    assert_eq!(eval_src("sin(0)"), 0.0);
    assert_eq!(eval_src("cos(0)"), 1.0);
    assert_eq!(eval_src("tan(0)"), 0.0);
}

#[test]
fn cot_matches_reciprocal_tan() {
    assert_eq!(eval_src("cot(1)").to_bits(), (1.0 / 1f64.tan()).to_bits());
    assert_eq!(eval_src("cot(0)"), f64::INFINITY);
}

#[test]
fn repeated_runs_are_deterministic() {
    let expr = parse_expression("sqrt(2) + sin(3) * ln(4)").unwrap();
    assert_eq!(eval(&expr).to_bits(), eval(&expr).to_bits());

    let program = parse("repeat 2 [\n  forward(sqrt(2))\n]").unwrap();
    assert_eq!(render(&program), render(&program));
    assert_eq!(dump(&program), dump(&program));
}

#[test]
fn log_needs_two_arguments() {
    let error = Expr::function(MathFunction::Log, vec![Expr::Number(2.0)]).unwrap_err();
    assert_eq!(error.to_string(), "function 'log' needs 2 argument(s), 1 provided.");

    assert!(Expr::function(MathFunction::Log, vec![Expr::Number(2.0), Expr::Number(8.0)]).is_ok());
    assert!(Expr::function(MathFunction::Sqrt, vec![Expr::Number(2.0), Expr::Number(8.0)]).is_err());
}

#[test]
fn builtin_procedure_arity_is_checked() {
    let error = Expr::call("print".to_string(), Vec::new()).unwrap_err();
    assert_eq!(error.to_string(), "procedure 'print' needs 1 argument(s), 0 provided.");

    // Unknown names are user procedures and accept any argument count.
    assert!(Expr::call("wiggle".to_string(), Vec::new()).is_ok());
}

#[test]
fn arity_errors_surface_as_parse_errors() {
    assert_parse_fails("print(1, 2)");
    assert_parse_fails("sqrt()");
    assert_parse_fails("log(2)");
    assert_parses("triangle(1, 2, 3)");

    let error = parse("forward()").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1: procedure 'forward' needs 1 argument(s), 0 provided.");
}

#[test]
fn errors_carry_line_numbers() {
    let error = parse("forward(10)\nprint(1, 2)").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 2: procedure 'print' needs 1 argument(s), 2 provided.");

    let error = parse("forward(10)\nright(90) left(90)").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 2: Unexpected token: Expected a new line, found Identifier(\"left\").");
}

#[test]
fn end_of_input_errors_name_the_last_line() {
    let error = parse("to square :size\n  forward(10) +").unwrap_err();
    assert_eq!(error.to_string(), "Error on line 2: Unexpected end of input.");

    let error = parse_expression("").unwrap_err();
    assert_eq!(error.to_string(), "Error on line 1: Unexpected end of input.");
}

#[test]
fn trailing_tokens_after_expression_are_rejected() {
    assert!(parse_expression("1 + 2\nforward(10)").is_err());

    let error = parse_expression("1 + 2 3").unwrap_err();
    assert_eq!(error.to_string(),
               "Error on line 1: Extra tokens after expression. Check your input: Number(3.0)");
}

#[test]
fn dump_annotates_constant_subtrees() {
    let expr = parse_expression("1 + 2 * 3").unwrap();
    assert_eq!(dump_expr(&expr),
               "ADD (=7)\n  NUMBER 1\n  MUL (=6)\n    NUMBER 2\n    NUMBER 3\n");

    let expr = parse_expression("-3").unwrap();
    assert_eq!(dump_expr(&expr), "NEG (=-3)\n  NUMBER 3\n");

    let expr = parse_expression("+5").unwrap();
    assert_eq!(dump_expr(&expr), "POS (=5)\n  NUMBER 5\n");

    // A parameter reference is not constant, so no value is attached.
    let expr = parse_expression("sqrt(len)").unwrap();
    assert_eq!(dump_expr(&expr), "SQRT\n  CALL len\n");
}

#[test]
fn dump_covers_statements() {
    let program =
        parse("to square :size\n  repeat 4 [\n    forward(size)\n    right(90)\n  ]\nend\nsquare(10)").unwrap();
    assert_eq!(dump(&program),
               "CODE\n  DEF square\n    VAR size\n    LOOP\n      NUMBER 4\n      CALL forward\n        CALL size\n      CALL right\n        NUMBER 90\n  CALL square\n    NUMBER 10\n");

    let program = parse("if 1 < 2 [\n  print(\"yes\")\n]").unwrap();
    assert_eq!(dump(&program),
               "CODE\n  IF\n    COND <\n      NUMBER 1\n      NUMBER 2\n    CALL print\n      STRING \"yes\"\n");
}

#[test]
fn graph_gives_wrappers_their_own_ids() {
    let program = parse("if 1 < 2 [\n  print(\"yes\")\n]").unwrap();
    let expected = r#"digraph {
  rankdir=TD;
  n0 [ label="ROOT" shape=circle ];
  n0->n1;
  n1 [ label="IF" shape=circle ];
  n1->n2;
  n2 [ label="COND" shape=circle ];
  n2->n3;
  n3 [ label="OP: <" shape=doublecircle ];
  n3->n4;
  n4 [ label="1" shape=circle ];
  n3->n5;
  n5 [ label="2" shape=circle ];
  n1->n6;
  n6 [ label="STMTS: 1" shape=rect ];
  n6->n7;
  n7 [ label="CALL: print" shape=circle ];
  n7->n8;
  n8 [ label="ARGS: 1" shape=rect ];
  n8->n9;
  n9 [ label="STR: yes" shape=circle ];
}
"#;

    assert_eq!(render(&program), expected);
}

#[test]
fn graph_ids_are_unique_and_contiguous() {
    let program = parse("to spin :n\n  repeat n [\n    right(360 / n)\n  ]\nend\nspin(6)").unwrap();
    let graph = render(&program);

    let mut ids = Vec::new();
    for line in graph.lines().filter(|l| l.contains("label=")) {
        let rest = line.trim_start().strip_prefix('n').unwrap();
        let (id, _) = rest.split_once(' ').unwrap();
        ids.push(id.parse::<usize>().unwrap());
    }

    for (expected, id) in ids.iter().enumerate() {
        assert_eq!(*id, expected, "Node ids must be declared in order with no gaps");
    }

    // Every edge must point at declared nodes.
    for line in graph.lines().filter(|l| l.contains("->")) {
        let line = line.trim_start().strip_suffix(';').unwrap();
        let (parent, child) = line.split_once("->").unwrap();
        let parent = parent.strip_prefix('n').unwrap().parse::<usize>().unwrap();
        let child = child.strip_prefix('n').unwrap().parse::<usize>().unwrap();
        assert!(parent < ids.len(), "Edge references undeclared parent n{parent}");
        assert!(child < ids.len(), "Edge references undeclared child n{child}");
    }
}

#[test]
fn function_nodes_carry_their_value_in_the_graph() {
    let graph = render_expr(&parse_expression("sqrt(9)").unwrap());
    assert!(graph.contains("n0 [ label=\"SQRT\\n(=3)\" shape=doublecircle ];"));

    // A non-constant argument leaves the label bare.
    let graph = render_expr(&parse_expression("sqrt(len)").unwrap());
    assert!(graph.contains("n0 [ label=\"SQRT\" shape=doublecircle ];"));
}

#[test]
fn graph_groups_empty_parameter_lists() {
    let program = parse("to reset\n  forward(0)\nend").unwrap();
    let expected = r#"digraph {
  rankdir=TD;
  n0 [ label="ROOT" shape=circle ];
  n0->n1;
  n1 [ label="DEF: reset" shape=circle ];
  n1->n2;
  n2 [ label="PARAMS: 0" shape=rect ];
  n1->n3;
  n3 [ label="STMTS: 1" shape=rect ];
  n3->n4;
  n4 [ label="CALL: forward" shape=circle ];
  n4->n5;
  n5 [ label="ARGS: 1" shape=rect ];
  n5->n6;
  n6 [ label="0" shape=circle ];
}
"#;

    assert_eq!(render(&program), expected);
}

#[test]
fn traversals_share_one_tree_across_threads() {
    let program = parse("to square :size\n  repeat 4 [\n    forward(size)\n    right(90)\n  ]\nend\nsquare(10)").unwrap();
    let (graph, tree) = (render(&program), dump(&program));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(render(&program), graph);
                assert_eq!(dump(&program), tree);
            });
        }
    });
}

#[test]
fn procedures_parse() {
    let program = parse("to greet :who\n  print(who)\nend\ngreet(\"sun\")").unwrap();
    assert_eq!(program.statements.len(), 2);

    match &program.statements[0] {
        GlobalStatement::Procedure(def) => {
            assert_eq!(def.name, "greet");
            assert_eq!(def.params.len(), 1);
            assert_eq!(def.params[0].name, "who");
            assert_eq!(def.body.len(), 1);
        },
        GlobalStatement::Statement(_) => panic!("Expected a procedure definition"),
    }

    assert!(matches!(&program.statements[1],
                     GlobalStatement::Statement(Statement::Expression(Expr::ProcedureCall { .. }))));
}

#[test]
fn nested_blocks_parse() {
    assert_parses("repeat 3 [\n  repeat 2 [\n    forward(5)\n  ]\n  left(120)\n]");
    assert_parses("if 1 <= 2 [\n  if 2 != 3 [\n    print(\"ok\")\n  ]\n]");
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    let program = parse("// spin in place\n\nrepeat 4 [\n  // quarter turn\n  right(90)\n]\n").unwrap();
    assert_eq!(program.statements.len(), 1);

    assert_eq!(eval_src("// negated\n-+-5"), 5.0);

    // A comment may run to the end of the input without a final line break.
    let program = parse("right(90)\n// done").unwrap();
    assert_eq!(program.statements.len(), 1);
}

#[test]
fn malformed_scripts_are_rejected() {
    assert_parse_fails("repeat 4 [\n  forward(10)\n");
    assert_parse_fails("to square :size\n  forward(10)\n");
    assert_parse_fails("to square :size forward(10)\nend");
    assert_parse_fails("(1 + 2");
    assert_parse_fails("forward(10) right(90)");
    assert_parse_fails("1 + $");
    assert_parse_fails("if 1 + 2 [\n  forward(10)\n]");
}

#[test]
fn string_quotes_are_escaped_in_output() {
    let expr = Expr::Str("say \"hi\"".to_string());
    assert_eq!(dump_expr(&expr), "STRING \"say \\\"hi\\\"\"\n");
    assert_eq!(render_expr(&expr),
               "digraph {\n  rankdir=TD;\n  n0 [ label=\"STR: say \\\"hi\\\"\" shape=circle ];\n}\n");
}

#[test]
#[should_panic(expected = "cannot evaluate")]
fn evaluating_a_string_panics() {
    let _ = eval(&Expr::Str("hi".to_string()));
}

#[test]
#[should_panic(expected = "function 'log'")]
fn evaluating_a_malformed_function_panics() {
    // Bypasses the checked constructor, so evaluation must refuse the node.
    let _ = eval(&Expr::Function { function: MathFunction::Log,
                                   args:     vec![Expr::Number(8.0)], });
}
