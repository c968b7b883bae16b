//! Constraints extracted from conditions.

use std::fmt;

use crate::value::Value;

/// Comparison operator of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CmpOp {
    Gt,
    Gte,
    Lt,
    Lte,
    Eq,
    NotEq,
}

impl CmpOp {
    /// The operator that holds exactly when `self` does not.
    ///
    /// `Gt↔Lte`, `Gte↔Lt`, `Eq↔NotEq`.
    pub fn negate(self) -> Self {
        match self {
            Self::Gt => Self::Lte,
            Self::Gte => Self::Lt,
            Self::Lt => Self::Gte,
            Self::Lte => Self::Gt,
            Self::Eq => Self::NotEq,
            Self::NotEq => Self::Eq,
        }
    }

    pub fn is_equality(self) -> bool {
        matches!(self, Self::Eq | Self::NotEq)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One `(operator, literal)` fact about a parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub op: CmpOp,
    pub value: Value,
}

impl Constraint {
    pub fn new(op: CmpOp, value: impl Into<Value>) -> Self {
        Self {
            op,
            value: value.into(),
        }
    }
}

/// Constraints per parameter, parameters in first-seen order and constraints
/// in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamConstraints {
    params: Vec<(String, Vec<Constraint>)>,
}

impl ParamConstraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, constraint: Constraint) {
        match self.params.iter_mut().find(|(n, _)| n == name) {
            Some((_, list)) => list.push(constraint),
            None => self.params.push((name.to_string(), vec![constraint])),
        }
    }

    pub fn get(&self, name: &str) -> Option<&[Constraint]> {
        self.params
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, list)| list.as_slice())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Constraint])> {
        self.params.iter().map(|(n, list)| (n.as_str(), list.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_an_involution() {
        for op in [CmpOp::Gt, CmpOp::Gte, CmpOp::Lt, CmpOp::Lte, CmpOp::Eq, CmpOp::NotEq] {
            assert_eq!(op.negate().negate(), op);
        }
        assert_eq!(CmpOp::Gt.negate(), CmpOp::Lte);
        assert_eq!(CmpOp::Gte.negate(), CmpOp::Lt);
        assert_eq!(CmpOp::Eq.negate(), CmpOp::NotEq);
    }

    #[test]
    fn keeps_first_seen_order() {
        let mut constraints = ParamConstraints::new();
        constraints.push("b", Constraint::new(CmpOp::Gt, 1));
        constraints.push("a", Constraint::new(CmpOp::Eq, "x"));
        constraints.push("b", Constraint::new(CmpOp::Lt, 9));
        assert_eq!(constraints.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(constraints.get("b").map(<[_]>::len), Some(2));
    }
}
