//! Syntax-tree walk collecting constraints from `if` conditions.

use syn::visit::{self, Visit};
use syn::{ExprIf, FnArg, ItemFn, Pat};

use super::condition::Condition;
use super::constraint::ParamConstraints;

/// Collects per-parameter constraints from every conditional of a function.
///
/// For each `if`, the test contributes its constraints; when an `else` branch
/// exists, the negated test contributes as well. `else if` chains are nested
/// conditionals and are visited like any other.
///
/// # Example
///
/// ```
/// use replicant::infer::ConditionExtractor;
///
/// let item: syn::ItemFn = syn::parse_str(
///     "fn f(a: f64) -> i32 { if a > 5.0 { 1 } else { 0 } }",
/// ).unwrap();
/// let constraints = ConditionExtractor::for_function(&item).extract_function(&item);
/// assert_eq!(constraints.get("a").map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Default)]
pub struct ConditionExtractor {
    /// When set, names outside this list are not recorded.
    params: Option<Vec<String>>,
    constraints: ParamConstraints,
}

impl ConditionExtractor {
    /// An extractor recording every bare name it sees.
    pub fn new() -> Self {
        Self::default()
    }

    /// An extractor restricted to the parameters declared by `item`.
    pub fn for_function(item: &ItemFn) -> Self {
        Self {
            params: Some(param_names(item)),
            constraints: ParamConstraints::new(),
        }
    }

    /// Walk the function body and return the collected constraints.
    pub fn extract_function(mut self, item: &ItemFn) -> ParamConstraints {
        self.visit_block(&item.block);
        self.constraints
    }

    /// Record the constraints implied by `condition`.
    pub fn extract(&mut self, condition: &Condition) {
        let params = self.params.as_deref();
        let constraints = &mut self.constraints;
        condition.collect(&mut |name, constraint| {
            if params.map_or(true, |p| p.iter().any(|n| n == name)) {
                constraints.push(name, constraint);
            }
        });
    }

    /// Constraints recorded so far, in first-seen parameter order.
    pub fn into_constraints(self) -> ParamConstraints {
        self.constraints
    }
}

impl<'ast> Visit<'ast> for ConditionExtractor {
    fn visit_expr_if(&mut self, node: &'ast ExprIf) {
        let test = Condition::lower(&node.cond);
        self.extract(&test);
        if node.else_branch.is_some() {
            self.extract(&test.negated());
        }
        visit::visit_expr_if(self, node);
    }
}

/// Names of the plain identifier parameters of a function, in declaration order.
///
/// Receivers and destructuring patterns are skipped.
pub fn param_names(item: &ItemFn) -> Vec<String> {
    item.sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(typed) => match typed.pat.as_ref() {
                Pat::Ident(ident) => Some(syn::ext::IdentExt::unraw(&ident.ident).to_string()),
                _ => None,
            },
            FnArg::Receiver(_) => None,
        })
        .collect()
}
