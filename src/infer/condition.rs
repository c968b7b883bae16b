//! Branch conditions as a closed tagged union.
//!
//! A `syn` expression used as an `if` test is lowered into a [`Condition`],
//! keeping only the shapes the analysis understands. Everything else becomes
//! [`Condition::Opaque`] and contributes nothing.
//!
//! Extraction walks the lowered tree and reports one [`Constraint`] per
//! comparison against a literal. Negation is pushed inward rather than applied
//! to the extracted constraints afterwards:
//!
//! ```text
//! !(a > 5)          => a <= 5
//! !(a > 5 && b)     => !(a > 5) || !b   => a <= 5
//! !!(a == "x")      => a == "x"
//! ```

use syn::ext::IdentExt;
use syn::{BinOp, Expr, Lit, UnOp};

use super::constraint::{CmpOp, Constraint};
use crate::value::Value;

/// A lowered branch condition.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `name <op> literal`.
    Compare {
        name: String,
        op: CmpOp,
        literal: Value,
    },
    /// `!cond`.
    Not(Box<Condition>),
    /// `a && b && ...`.
    And(Vec<Condition>),
    /// `a || b || ...`.
    Or(Vec<Condition>),
    /// A bare name used as the test.
    Truthy(String),
    /// Anything the analysis does not understand.
    Opaque,
}

impl Condition {
    /// Lower a `syn` expression.
    pub fn lower(expr: &Expr) -> Self {
        match strip_parens(expr) {
            Expr::Binary(bin) => match &bin.op {
                BinOp::And(_) => {
                    let mut parts = Vec::new();
                    Self::lower(&bin.left).flatten_into(&mut parts, true);
                    Self::lower(&bin.right).flatten_into(&mut parts, true);
                    Self::And(parts)
                }
                BinOp::Or(_) => {
                    let mut parts = Vec::new();
                    Self::lower(&bin.left).flatten_into(&mut parts, false);
                    Self::lower(&bin.right).flatten_into(&mut parts, false);
                    Self::Or(parts)
                }
                op => match (cmp_op(op), bare_name(&bin.left), literal(&bin.right)) {
                    (Some(op), Some(name), Some(literal)) => Self::Compare { name, op, literal },
                    _ => Self::Opaque,
                },
            },
            Expr::Unary(unary) if matches!(unary.op, UnOp::Not(_)) => {
                Self::Not(Box::new(Self::lower(&unary.expr)))
            }
            other => match bare_name(other) {
                Some(name) => Self::Truthy(name),
                None => Self::Opaque,
            },
        }
    }

    fn flatten_into(self, parts: &mut Vec<Condition>, conjunction: bool) {
        match self {
            Self::And(inner) if conjunction => parts.extend(inner),
            Self::Or(inner) if !conjunction => parts.extend(inner),
            other => parts.push(other),
        }
    }

    /// Logical negation, as a new node.
    pub fn negated(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Report every constraint implied by this condition holding.
    ///
    /// Both sides of `&&` and `||` are visited; for range estimation the
    /// disjunction is over-approximated as if both sides held.
    pub fn collect(&self, sink: &mut dyn FnMut(&str, Constraint)) {
        match self {
            Self::Compare { name, op, literal } => {
                sink(name, Constraint::new(*op, literal.clone()));
            }
            Self::Not(inner) => inner.collect_negated(sink),
            Self::And(parts) | Self::Or(parts) => {
                for part in parts {
                    part.collect(sink);
                }
            }
            Self::Truthy(name) => sink(name, Constraint::new(CmpOp::Eq, true)),
            Self::Opaque => {}
        }
    }

    /// Report every constraint implied by this condition *not* holding.
    fn collect_negated(&self, sink: &mut dyn FnMut(&str, Constraint)) {
        match self {
            Self::Compare { name, op, literal } => {
                sink(name, Constraint::new(op.negate(), literal.clone()));
            }
            // De Morgan, then extract the synthetic node like any other.
            Self::And(parts) => {
                Self::Or(parts.iter().cloned().map(Self::negated).collect()).collect(sink)
            }
            Self::Or(parts) => {
                Self::And(parts.iter().cloned().map(Self::negated).collect()).collect(sink)
            }
            Self::Not(inner) => inner.collect(sink),
            // A falsy bare name says nothing about its range.
            Self::Truthy(_) | Self::Opaque => {}
        }
    }
}

fn strip_parens(mut expr: &Expr) -> &Expr {
    loop {
        match expr {
            Expr::Paren(p) => expr = &p.expr,
            Expr::Group(g) => expr = &g.expr,
            _ => return expr,
        }
    }
}

fn cmp_op(op: &BinOp) -> Option<CmpOp> {
    match op {
        BinOp::Gt(_) => Some(CmpOp::Gt),
        BinOp::Ge(_) => Some(CmpOp::Gte),
        BinOp::Lt(_) => Some(CmpOp::Lt),
        BinOp::Le(_) => Some(CmpOp::Lte),
        BinOp::Eq(_) => Some(CmpOp::Eq),
        BinOp::Ne(_) => Some(CmpOp::NotEq),
        _ => None,
    }
}

/// The identifier of a single-segment path expression.
fn bare_name(expr: &Expr) -> Option<String> {
    match strip_parens(expr) {
        Expr::Path(path) if path.qself.is_none() => {
            path.path.get_ident().map(|ident| ident.unraw().to_string())
        }
        _ => None,
    }
}

/// The value of a literal expression, including negated numeric literals.
fn literal(expr: &Expr) -> Option<Value> {
    match strip_parens(expr) {
        Expr::Lit(lit) => lit_value(&lit.lit),
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            match literal(&unary.expr)? {
                Value::Int(v) => v.checked_neg().map(Value::Int),
                Value::Float(v) => Some(Value::Float(-v)),
                Value::Bool(_) | Value::Str(_) => None,
            }
        }
        _ => None,
    }
}

fn lit_value(lit: &Lit) -> Option<Value> {
    match lit {
        Lit::Int(v) => v.base10_parse::<i64>().ok().map(Value::Int),
        Lit::Float(v) => v.base10_parse::<f64>().ok().map(Value::Float),
        Lit::Str(v) => Some(Value::Str(v.value())),
        Lit::Char(v) => Some(Value::Str(v.value().to_string())),
        Lit::Bool(v) => Some(Value::Bool(v.value)),
        _ => None,
    }
}
