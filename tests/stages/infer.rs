//! Input-space inference from function source.

use replicant::infer::{infer_input_space, ConditionExtractor, CmpOp, Constraint};
use replicant::{Bound, CategoricalBound, InferenceError, Value};

#[test]
fn numeric_bounds_are_padded() {
    let space = infer_input_space(
        r#"
        fn numeric(a: i64, b: i64) -> i64 {
            if a > 5 && b <= 10 {
                1
            } else {
                0
            }
        }
        "#,
    )
    .unwrap();

    let a = space.get("a").and_then(Bound::as_numeric).unwrap();
    let b = space.get("b").and_then(Bound::as_numeric).unwrap();
    assert_eq!(a.lower(), 4.0);
    assert_eq!(b.upper(), 11.0);
}

#[test]
fn boolean_and_string_equality() {
    let space = infer_input_space(
        r#"
        fn mood_check(flag: bool, mood: &str) -> i64 {
            if flag && mood == "sad" {
                1
            } else {
                0
            }
        }
        "#,
    )
    .unwrap();

    assert_eq!(
        space.get("flag"),
        Some(&Bound::Categorical(CategoricalBound::boolean()))
    );
    assert_eq!(space.get("mood"), Some(&Bound::categorical(["sad"]).unwrap()));
}

#[test]
fn else_if_chain_collects_both_literals() {
    let space = infer_input_space(
        r#"
        fn status(status: &str) -> i64 {
            if status == "on" {
                1
            } else if status != "off" {
                2
            } else {
                0
            }
        }
        "#,
    )
    .unwrap();

    let values = space
        .get("status")
        .and_then(Bound::as_categorical)
        .unwrap()
        .values()
        .to_vec();
    assert_eq!(values, vec![Value::from("on"), Value::from("off")]);
}

#[test]
fn nested_conditions_are_visited() {
    let item: syn::ItemFn = syn::parse_str(
        r#"
        fn nested(x: f64, y: f64) -> f64 {
            let z = x * 2.0;
            if x >= 1.0 {
                if y < 3.0 {
                    return z;
                }
            }
            0.0
        }
        "#,
    )
    .unwrap();

    let constraints = ConditionExtractor::for_function(&item).extract_function(&item);
    assert_eq!(constraints.names().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(constraints.get("x").unwrap(), &[Constraint::new(CmpOp::Gte, 1.0)]);
    assert_eq!(constraints.get("y").unwrap(), &[Constraint::new(CmpOp::Lt, 3.0)]);
}

#[test]
fn negated_else_of_disjunction() {
    let space = infer_input_space(
        r#"
        fn band(t: f64) -> bool {
            if t < 0.0 || t > 100.0 { false } else { true }
        }
        "#,
    )
    .unwrap();
    // Each side shares one accumulator across operators, so this band folds reversed.
    let t = space.get("t").and_then(Bound::as_numeric).unwrap();
    assert_eq!((t.lower(), t.upper()), (99.0, 1.0));
}

#[test]
fn mixed_equality_and_relational_is_reported() {
    let err = infer_input_space(
        "fn f(x: i64) -> i64 { if x == 3 { 1 } else if x > 10 { 2 } else { 0 } }",
    )
    .unwrap_err();
    assert!(matches!(err, InferenceError::UnexpectedOperator { .. }));
}
