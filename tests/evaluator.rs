use letlang::{
    ast::{Ast, ExprKind},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Evaluator, evaluate},
            environment::{Binding, Environment},
        },
        lexer::scan,
        parser::core::parse,
        value::core::Value,
    },
};

fn tree(source: &str) -> Ast {
    parse(&scan(source)).unwrap_or_else(|e| panic!("{source:?} should parse: {e}"))
}

fn bindings_of(environment: &Environment) -> Vec<(String, Value)> {
    environment.bindings()
               .iter()
               .map(|Binding { name, value }| (name.clone(), *value))
               .collect()
}

#[test]
fn evaluation_is_deterministic() {
    let mut tree = tree("let x = 3 in if iszero(minus(x, 3)) then minus(x, 10) else x");

    let first = Evaluator::new(&mut tree).evaluate();
    let snapshot = tree.clone();
    let second = Evaluator::new(&mut tree).evaluate();

    assert_eq!(first, Ok(Value::from(-7)));
    assert_eq!(first, second);
    assert_eq!(snapshot, tree);
}

#[test]
fn evaluates_under_a_supplied_environment() {
    let mut tree = tree("minus(x, y)");
    let root = tree.root();
    let environment = Environment::new().extend("x", Value::Integer(10))
                                        .extend("y", Value::Integer(4))
                                        .extend("x", Value::Integer(20));

    assert_eq!(evaluate(&mut tree, root, &environment), Ok(Value::Integer(16)));
}

#[test]
fn records_the_environment_of_each_visited_node() {
    let mut tree = tree("let x = 1 in let y = 2 in minus(x, y)");
    Evaluator::new(&mut tree).evaluate().unwrap();

    let recorded: Vec<(ExprKind, Option<Vec<(String, Value)>>)> =
        tree.iter()
            .map(|(_, node)| (node.kind().clone(), node.environment().map(bindings_of)))
            .collect();

    let x = ("x".to_string(), Value::Integer(1));
    let y = ("y".to_string(), Value::Integer(2));
    assert_eq!(recorded,
               vec![(ExprKind::Let, Some(vec![])),
                    (ExprKind::Identifier("x".to_string()), None),
                    (ExprKind::Integer(1), Some(vec![])),
                    (ExprKind::Let, Some(vec![x.clone()])),
                    (ExprKind::Identifier("y".to_string()), None),
                    (ExprKind::Integer(2), Some(vec![x.clone()])),
                    (ExprKind::Minus, Some(vec![x.clone(), y.clone()])),
                    (ExprKind::Identifier("x".to_string()), Some(vec![x.clone(), y.clone()])),
                    (ExprKind::Identifier("y".to_string()), Some(vec![x, y])),]);
}

#[test]
fn untaken_branch_is_never_visited() {
    let mut tree = tree("if iszero(0) then 1 else minus(1, 1)");
    let value = Evaluator::new(&mut tree).evaluate();

    assert_eq!(value, Ok(Value::Integer(1)));

    let root = tree.node(tree.root());
    let alternative = tree.node(root.children()[2]);
    assert_eq!(alternative.kind(), &ExprKind::Minus);
    assert!(alternative.environment().is_none());
}

#[test]
fn bound_expression_sees_the_outer_environment() {
    let mut tree = tree("let x = 10 in let x = minus(x, 1) in x");

    assert_eq!(Evaluator::new(&mut tree).evaluate(), Ok(Value::Integer(9)));
}

#[test]
fn extension_leaves_the_outer_environment_untouched() {
    let outer = Environment::new().extend("a", Value::Integer(1));
    let inner = outer.extend("b", Value::Boolean(true));

    assert_eq!(outer.len(), 1);
    assert_eq!(outer.lookup("b"), None);
    assert_eq!(inner.lookup("b"), Some(&Value::Boolean(true)));
    assert_eq!(inner.to_string(), "[(a, 1), (b, true)]");
}

#[test]
fn booleans_are_rejected_by_arithmetic() {
    let mut tree = tree("let b = iszero(0) in minus(b, 1)");

    assert_eq!(Evaluator::new(&mut tree).evaluate(),
               Err(RuntimeError::TypeMismatch { expected: "integer",
                                                found:    Value::Boolean(true),
                                                line:     1, }));
}

#[test]
fn iszero_reads_bound_integers() {
    let mut zero = tree("let n = minus(5, 5) in iszero(n)");
    let mut five = tree("let n = 5 in iszero(n)");

    assert_eq!(Evaluator::new(&mut zero).evaluate(), Ok(Value::from(true)));
    assert_eq!(Evaluator::new(&mut five).evaluate(), Ok(Value::from(false)));
}

#[test]
fn clear_environments_resets_snapshots() {
    let mut tree = tree("minus(3, 2)");
    Evaluator::new(&mut tree).evaluate().unwrap();
    assert!(tree.iter().all(|(_, node)| node.environment().is_some()));

    tree.clear_environments();
    assert!(tree.iter().all(|(_, node)| node.environment().is_none()));
}
