//! Argument assembly of learned functions.

use replicant::model::ModelError;
use replicant::{CallArgs, Error, InvocationError, LearnedFunction, Model, Row, TaskKind, Value};

/// Predicts the sum of each row.
struct SumModel;

impl Model for SumModel {
    fn fit(&mut self, _rows: &[Row], _labels: &[Value]) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, rows: &[Row]) -> Result<Vec<Value>, ModelError> {
        Ok(rows
            .iter()
            .map(|row| Value::Float(row.iter().filter_map(Value::as_f64).sum()))
            .collect())
    }
}

/// Returns no predictions at all.
struct SilentModel;

impl Model for SilentModel {
    fn fit(&mut self, _rows: &[Row], _labels: &[Value]) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict(&self, _rows: &[Row]) -> Result<Vec<Value>, ModelError> {
        Ok(Vec::new())
    }
}

fn xyz(model: impl Model + 'static) -> LearnedFunction {
    let names = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    LearnedFunction::new(Box::new(model), names, TaskKind::Regression)
}

#[test]
fn positional_arguments() {
    let f = xyz(SumModel);
    assert_eq!(f.call(&CallArgs::positional([1, 2, 3])).unwrap(), Value::Float(6.0));
}

#[test]
fn mixed_arguments_assemble_in_feature_order() {
    let f = xyz(SumModel);
    let args = CallArgs::new().arg(1).kwarg("z", 3).kwarg("y", 2);
    assert_eq!(
        f.assemble_row(&args).unwrap(),
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );
    assert_eq!(f.call(&args).unwrap(), Value::Float(6.0));
}

#[test]
fn missing_argument_is_named() {
    let f = xyz(SumModel);
    let err = f.call(&CallArgs::new().arg(1).kwarg("y", 2)).unwrap_err();
    assert!(matches!(
        err,
        Error::Invocation(InvocationError::MissingArgument(ref name)) if name == "z"
    ));
    assert_eq!(err.to_string(), "missing argument 'z'");
}

#[test]
fn empty_batch_is_a_model_error() {
    let f = xyz(SilentModel);
    let err = f.call(&CallArgs::positional([1, 2, 3])).unwrap_err();
    assert!(matches!(err, Error::Model(ModelError::EmptyPrediction)));
}

#[test]
fn introspection() {
    let f = xyz(SumModel);
    assert_eq!(f.feature_names(), &["x", "y", "z"]);
    assert_eq!(f.task(), TaskKind::Regression);
    assert!(f.model().name().ends_with("SumModel"));
}
