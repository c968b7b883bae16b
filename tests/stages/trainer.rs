//! Label generation, task resolution and model construction.

use std::sync::atomic::Ordering;

use replicant::config::Task;
use replicant::{
    fit_function, ConfigError, Error, ModelError, ModelOptions, TaskKind, Target, Value,
};

use crate::common::{int_rows, names, MockFactory};

#[test]
fn explicit_classifier() {
    let target = Target::new(|args| Ok(Value::from(if args.f64("x")? > 5.0 { "yes" } else { "no" })));
    let fitted = fit_function(
        &target,
        &int_rows(&[3, 7, 4, 8]),
        &names(&["x"]),
        Task::Classifier,
        None,
        &ModelOptions::new(),
    )
    .unwrap();

    assert_eq!(fitted.task, TaskKind::Classification);
    assert_eq!(fitted.feature_names, names(&["x"]));
    assert_eq!(fitted.model.name(), "DecisionTreeClassifier");
    assert_eq!(
        fitted.model.predict(&int_rows(&[2, 10])).unwrap(),
        vec![Value::from("no"), Value::from("yes")]
    );
}

#[test]
fn explicit_regressor_on_integer_labels() {
    let target = Target::new(|args| {
        let x = args.int("x")?;
        Ok(Value::Int(x * x))
    });
    let fitted = fit_function(
        &target,
        &int_rows(&[1, 2, 3]),
        &names(&["x"]),
        Task::Regressor,
        None,
        &ModelOptions::new(),
    )
    .unwrap();

    assert_eq!(fitted.model.name(), "DecisionTreeRegressor");
    let prediction = fitted.model.predict(&int_rows(&[4])).unwrap();
    assert!(matches!(prediction[0], Value::Float(_)));
}

#[test]
fn auto_detects_classification_from_bool_labels() {
    let target = Target::new(|args| Ok(Value::Bool(args.int("x")? > 5)));
    let fitted = fit_function(
        &target,
        &int_rows(&[2, 6, 3, 10]),
        &names(&["x"]),
        Task::Auto,
        None,
        &ModelOptions::new(),
    )
    .unwrap();

    assert_eq!(fitted.task, TaskKind::Classification);
    assert_eq!(
        fitted.model.predict(&int_rows(&[1, 7])).unwrap(),
        vec![Value::Bool(false), Value::Bool(true)]
    );
}

#[test]
fn auto_detects_regression_from_float_labels() {
    let target = Target::new(|args| Ok(Value::Float(args.int("x")? as f64 / 2.0)));
    let fitted = fit_function(
        &target,
        &int_rows(&[1, 2, 3, 4]),
        &names(&["x"]),
        Task::Auto,
        None,
        &ModelOptions::new(),
    )
    .unwrap();
    assert_eq!(fitted.task, TaskKind::Regression);
}

#[test]
fn custom_factory_receives_task_and_options() {
    let factory = MockFactory::default();
    let options = ModelOptions::new().with("alpha", 0.5);
    let target = Target::new(|_| Ok(Value::from("data")));

    let fitted = fit_function(
        &target,
        &int_rows(&[1, 2]),
        &names(&["x"]),
        Task::Auto,
        Some(&factory),
        &options,
    )
    .unwrap();

    let record = &factory.record;
    assert_eq!(record.fit_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*record.task.lock().unwrap(), Some(TaskKind::Classification));
    assert_eq!(record.options.lock().unwrap().as_ref(), Some(&options));
    assert_eq!(*record.labels.lock().unwrap(), vec![Value::from("data"); 2]);
    assert_eq!(
        fitted.model.predict(&int_rows(&[1, 2])).unwrap(),
        vec![Value::from("mock"); 2]
    );
}

#[test]
fn function_failure_reports_row() {
    let target = Target::new(|args| {
        let x = args.int("x")?;
        if x == 3 {
            return Err("three is not allowed".into());
        }
        Ok(Value::Int(x))
    });
    let err = fit_function(
        &target,
        &int_rows(&[1, 2, 3, 4]),
        &names(&["x"]),
        Task::Auto,
        None,
        &ModelOptions::new(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Function { row: 2, .. }));
    assert!(err.to_string().contains("three is not allowed"));
}

#[test]
fn unknown_tree_option_is_a_config_error() {
    let target = Target::new(|_| Ok(Value::Int(1)));
    let err = fit_function(
        &target,
        &int_rows(&[1]),
        &names(&["x"]),
        Task::Auto,
        None,
        &ModelOptions::new().with("n_estimators", 100),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::Model(ModelError::Config(ConfigError::UnknownModelOption(_)))
    ));
}
