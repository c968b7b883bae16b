//! Input-space inference from a function's branch conditions.
//!
//! The pipeline has two stages:
//!
//! 1. [`ConditionExtractor`] walks the `syn` tree and records, per parameter,
//!    every `(operator, literal)` [`Constraint`] found in `if` tests (negated
//!    for `else` branches).
//! 2. [`BoundInferer`] turns each parameter's constraints into a single
//!    [`Bound`](crate::Bound).
//!
//! Only comparisons of a bare parameter name against a literal, boolean
//! combinators, negation and bare boolean names are understood. Loops, calls
//! and non-literal comparators are ignored.
//!
//! # Example
//!
//! ```
//! use replicant::infer::infer_input_space;
//!
//! let space = infer_input_space(r#"
//!     fn f(a: f64, b: f64) -> i32 {
//!         if a > 5.0 && b <= 10.0 { 1 } else { 0 }
//!     }
//! "#).unwrap();
//!
//! assert_eq!(space.get("a").unwrap().as_numeric().unwrap().lower(), 4.0);
//! assert_eq!(space.get("b").unwrap().as_numeric().unwrap().upper(), 11.0);
//! ```

mod bounds;
mod condition;
mod constraint;
mod extractor;

pub use bounds::{BoundInferer, EPSILON};
pub use condition::Condition;
pub use constraint::{CmpOp, Constraint, ParamConstraints};
pub use extractor::{param_names, ConditionExtractor};

use syn::ItemFn;

use crate::bounds::BoundError;
use crate::space::InputSpace;
use crate::value::Value;

/// Errors raised while inferring an input space.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("failed to parse function source: {0}")]
    Parse(#[from] syn::Error),
    /// An equality operator reached interval folding. Indicates a parameter
    /// mixing `==`/`!=` with relational comparisons.
    #[error("internal error: unexpected operator {op} while folding bounds of '{param}'")]
    UnexpectedOperator { param: String, op: CmpOp },
    #[error("relational constraint on '{param}' compares against non-numeric literal {value}")]
    NonNumericLiteral { param: String, value: Value },
    #[error(transparent)]
    Bound(#[from] BoundError),
}

/// Parse a function's Rust source and infer its input space.
///
/// # Errors
///
/// [`InferenceError::Parse`] if `source` is not a single function item, or any
/// error from [`BoundInferer::infer`].
pub fn infer_input_space(source: &str) -> Result<InputSpace, InferenceError> {
    let item: ItemFn = syn::parse_str(source)?;
    infer_input_space_from_item(&item)
}

/// Infer the input space of an already parsed function.
///
/// Only the function's declared parameters are recorded.
pub fn infer_input_space_from_item(item: &ItemFn) -> Result<InputSpace, InferenceError> {
    let constraints = ConditionExtractor::for_function(item).extract_function(item);
    BoundInferer::new().infer(&constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bound;

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(
            infer_input_space("fn broken( {"),
            Err(InferenceError::Parse(_))
        ));
    }

    #[test]
    fn parameters_without_conditions_have_no_bound() {
        let space = infer_input_space("fn f(x: f64, y: f64) -> f64 { if x > 1.0 { y } else { 0.0 } }")
            .unwrap();
        assert_eq!(space.names(), vec!["x"]);
        assert_eq!(space.get("x"), Some(&Bound::numeric(0.0, 2.0)));
    }
}
