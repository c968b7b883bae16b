//! Replicate an opaque numeric function over an explicit range.
//!
//! Black-box mode never looks at source; the input space must be given.
//!
//! Run with:
//! ```bash
//! cargo run --example square_regressor
//! ```

use replicant::{CallArgs, Mode, ReplicatorConfig, Replicator, SpaceValue, Target, Task, Value};

fn main() {
    let target = Target::new(|args| {
        let x = args.f64("x")?;
        Ok(Value::Float(x * x))
    });

    for n_samples in [100, 1_000, 100_000] {
        let config = ReplicatorConfig::builder()
            .mode(Mode::Blackbox)
            .task(Task::Regressor)
            .input_space(vec![("x".to_string(), SpaceValue::from((-5, 5)))])
            .n_samples(n_samples)
            .build()
            .unwrap();
        let learned = Replicator::new(config).replicate(&target).unwrap();

        let mut max_error = 0.0f64;
        for i in 0..=100 {
            let x = -5.0 + i as f64 * 0.1;
            let predicted = learned.call(&CallArgs::positional([x])).unwrap();
            let error = (predicted.as_f64().unwrap_or(f64::NAN) - x * x).abs();
            max_error = max_error.max(error);
        }

        let at_four = learned.call(&CallArgs::positional([4.0])).unwrap();
        println!(
            "n_samples={:<7} f(4)={:<10} max |error| on grid={:.4}",
            n_samples,
            at_four,
            max_error
        );
    }
}
