//! Replicate a branching function from its source.
//!
//! The input space is inferred from the `if` conditions, so only the source
//! and the callable are needed.
//!
//! Run with:
//! ```bash
//! cargo run --example threshold_classifier
//! ```

use replicant::{CallArgs, Replicator, ReplicatorConfig, Target, Task, Value};

const SOURCE: &str = r#"
    fn shipping(weight: f64, express: bool, zone: &str) -> &'static str {
        if express && weight <= 2.0 {
            "courier"
        } else if zone == "remote" || weight > 20.0 {
            "freight"
        } else {
            "post"
        }
    }
"#;

fn main() {
    let target = Target::with_source(SOURCE, |args| {
        let weight = args.f64("weight")?;
        let express = args.bool("express")?;
        let zone = args.str("zone")?;
        let method = if express && weight <= 2.0 {
            "courier"
        } else if zone == "remote" || weight > 20.0 {
            "freight"
        } else {
            "post"
        };
        Ok(Value::from(method))
    });

    let config = ReplicatorConfig::builder()
        .task(Task::Classifier)
        .n_samples(5_000)
        .build()
        .unwrap();
    let replicator = Replicator::new(config);

    let space = replicator.input_space(&target).unwrap();
    println!("=== Inferred input space ===\n");
    for (name, bound) in space.iter() {
        println!("  {:<8} {:?}", name, bound);
    }

    let learned = replicator.replicate(&target).unwrap();
    println!("\nFeatures: {:?}", learned.feature_names());
    println!("Model:    {}", learned.model().summary().unwrap_or_default());

    println!("\n=== Predictions ===\n");
    let cases = [
        (1.5, true, "remote"),
        (1.5, false, "remote"),
        (10.0, false, "city"),
        (21.5, true, "city"),
    ];
    for (weight, express, zone) in cases {
        let args = CallArgs::new()
            .kwarg("weight", weight)
            .kwarg("express", express)
            .kwarg("zone", zone);
        let predicted = learned.call(&args).unwrap();
        println!("  weight={:<5} express={:<5} zone={:<7} -> {}", weight, express, zone, predicted);
    }
}
