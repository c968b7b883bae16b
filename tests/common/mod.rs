//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use replicant::{Model, ModelError, ModelFactory, ModelOptions, Row, TaskKind, Target, Value};

// =============================================================================
// Targets
// =============================================================================

pub const THRESHOLD_SOURCE: &str = r#"
    fn threshold(x: f64) -> &'static str {
        if x > 5.0 {
            "high"
        } else {
            "low"
        }
    }
"#;

/// `"high"` above 5, `"low"` otherwise, with source.
pub fn threshold_target() -> Target {
    Target::with_source(THRESHOLD_SOURCE, |args| {
        Ok(Value::from(if args.f64("x")? > 5.0 { "high" } else { "low" }))
    })
}

/// `x * x`, without source.
pub fn square_target() -> Target {
    Target::new(|args| {
        let x = args.f64("x")?;
        Ok(Value::Float(x * x))
    })
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

pub fn int_rows(values: &[i64]) -> Vec<Row> {
    values.iter().map(|&v| vec![Value::Int(v)]).collect()
}

// =============================================================================
// Mock model backend
// =============================================================================

/// What a [`MockModel`] saw.
#[derive(Debug, Default)]
pub struct MockRecord {
    pub fit_calls: AtomicUsize,
    pub rows: Mutex<Vec<Row>>,
    pub labels: Mutex<Vec<Value>>,
    pub task: Mutex<Option<TaskKind>>,
    pub options: Mutex<Option<ModelOptions>>,
}

/// Records its training data and always predicts `"mock"`.
pub struct MockModel {
    record: Arc<MockRecord>,
}

impl Model for MockModel {
    fn fit(&mut self, rows: &[Row], labels: &[Value]) -> Result<(), ModelError> {
        self.record.fit_calls.fetch_add(1, Ordering::SeqCst);
        *self.record.rows.lock().unwrap() = rows.to_vec();
        *self.record.labels.lock().unwrap() = labels.to_vec();
        Ok(())
    }

    fn predict(&self, rows: &[Row]) -> Result<Vec<Value>, ModelError> {
        Ok(vec![Value::from("mock"); rows.len()])
    }

    fn name(&self) -> &str {
        "MockModel"
    }
}

/// Factory handing out [`MockModel`]s that share one record.
#[derive(Clone, Default)]
pub struct MockFactory {
    pub record: Arc<MockRecord>,
}

impl ModelFactory for MockFactory {
    fn create(&self, task: TaskKind, options: &ModelOptions) -> Result<Box<dyn Model>, ModelError> {
        *self.record.task.lock().unwrap() = Some(task);
        *self.record.options.lock().unwrap() = Some(options.clone());
        Ok(Box::new(MockModel {
            record: Arc::clone(&self.record),
        }))
    }
}
