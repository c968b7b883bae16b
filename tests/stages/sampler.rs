//! Dataset sampling over explicit input spaces.

use replicant::{Bound, DataSampler, InputSpace, Value};

fn mixed_space() -> InputSpace {
    InputSpace::new()
        .with("a", Bound::numeric(1.0, 3.0))
        .with("flag", Bound::categorical([true, false]).unwrap())
        .with("mood", Bound::categorical(["grumpy", "happy"]).unwrap())
}

#[test]
fn sampled_values_stay_in_bounds() {
    let space = mixed_space();
    let mut sampler = DataSampler::with_seed(space.clone(), 7);
    for row in sampler.sample(200).unwrap() {
        for ((_, bound), value) in space.iter().zip(&row) {
            match bound {
                Bound::Numeric(b) => assert!(b.contains(value.as_f64().unwrap())),
                Bound::Categorical(b) => assert!(b.contains(value)),
            }
        }
    }
}

#[test]
fn boundary_rows_close_the_dataset() {
    let mut sampler = DataSampler::new(mixed_space());
    let rows = sampler.sample(4).unwrap();
    let tail = &rows[4..];
    assert_eq!(tail.len(), 8);
    assert_eq!(
        tail[0],
        vec![Value::Float(1.0), Value::Bool(true), Value::from("grumpy")]
    );
    assert_eq!(
        tail[7],
        vec![Value::Float(3.0), Value::Bool(false), Value::from("happy")]
    );
}

#[test]
fn dict_rows_follow_feature_order() {
    let mut sampler = DataSampler::new(InputSpace::new().with("x", Bound::numeric(0.0, 5.0)));
    let rows = sampler.sample_dicts(2).unwrap();
    assert_eq!(rows.len(), 2 + 2);
    assert!(rows.iter().all(|r| r.len() == 1 && r[0].0 == "x"));
}

#[test]
fn empty_space_yields_one_empty_boundary_row() {
    let mut sampler = DataSampler::new(InputSpace::new());
    let rows = sampler.sample(3).unwrap();
    assert_eq!(rows.len(), 3 + 1);
    assert!(rows.iter().all(Vec::is_empty));
}
