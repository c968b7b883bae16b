//! Synthesis of one [`Bound`] per parameter from its constraints.

use crate::bounds::{Bound, CategoricalBound, NumericBound, DEFAULT_LOWER, DEFAULT_SPAN};
use crate::space::InputSpace;
use crate::value::Value;

use super::constraint::{CmpOp, Constraint, ParamConstraints};
use super::InferenceError;

/// Outward padding applied to both ends of an inferred numeric interval.
pub const EPSILON: f64 = 1.0;

/// Turns accumulated constraints into an [`InputSpace`].
///
/// Per parameter, the first matching rule wins:
///
/// 1. every literal is a boolean: `{true, false}`
/// 2. every operator is `==` or `!=`: the distinct literals, first-seen order
/// 3. otherwise: the relational constraints folded into an interval, padded
///    by [`EPSILON`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundInferer;

impl BoundInferer {
    pub fn new() -> Self {
        Self
    }

    /// Infer bounds for every parameter, keeping parameter order.
    pub fn infer(&self, constraints: &ParamConstraints) -> Result<InputSpace, InferenceError> {
        let mut space = InputSpace::new();
        for (name, list) in constraints.iter() {
            space.insert(name, self.infer_one(name, list)?);
        }
        Ok(space)
    }

    /// Infer the bound of a single parameter.
    pub fn infer_one(&self, name: &str, constraints: &[Constraint]) -> Result<Bound, InferenceError> {
        if constraints.iter().all(|c| matches!(c.value, Value::Bool(_))) {
            return Ok(Bound::Categorical(CategoricalBound::boolean()));
        }

        if constraints.iter().all(|c| c.op.is_equality()) {
            let mut values: Vec<Value> = Vec::new();
            for c in constraints {
                if !values.contains(&c.value) {
                    values.push(c.value.clone());
                }
            }
            return Ok(Bound::Categorical(CategoricalBound::new(values)?));
        }

        let (lower, upper) = fold_interval(name, constraints)?;
        let (lower, upper) = match (lower, upper) {
            (Some(lo), Some(hi)) => (lo, hi),
            (Some(lo), None) => (lo, lo + DEFAULT_SPAN),
            (None, Some(hi)) => (hi - DEFAULT_SPAN, hi),
            (None, None) => (DEFAULT_LOWER, DEFAULT_LOWER + DEFAULT_SPAN),
        };
        Ok(Bound::Numeric(NumericBound::new(lower - EPSILON, upper + EPSILON)))
    }
}

/// Fold relational constraints with one accumulator per side.
///
/// `>` folds the lower end by minimum and `>=` by maximum; `<` folds the upper
/// end by maximum and `<=` by minimum.
fn fold_interval(
    name: &str,
    constraints: &[Constraint],
) -> Result<(Option<f64>, Option<f64>), InferenceError> {
    let mut lower: Option<f64> = None;
    let mut upper: Option<f64> = None;

    for c in constraints {
        let numeric = || {
            c.value.as_f64().ok_or_else(|| InferenceError::NonNumericLiteral {
                param: name.to_string(),
                value: c.value.clone(),
            })
        };
        match c.op {
            CmpOp::Gt => {
                let v = numeric()?;
                lower = Some(lower.map_or(v, |lo| lo.min(v)));
            }
            CmpOp::Gte => {
                let v = numeric()?;
                lower = Some(lower.map_or(v, |lo| lo.max(v)));
            }
            CmpOp::Lt => {
                let v = numeric()?;
                upper = Some(upper.map_or(v, |hi| hi.max(v)));
            }
            CmpOp::Lte => {
                let v = numeric()?;
                upper = Some(upper.map_or(v, |hi| hi.min(v)));
            }
            CmpOp::Eq | CmpOp::NotEq => {
                return Err(InferenceError::UnexpectedOperator {
                    param: name.to_string(),
                    op: c.op,
                })
            }
        }
    }

    Ok((lower, upper))
}
