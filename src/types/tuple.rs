use std::ops::Deref;

use super::value::Value;

/// A row flowing between plan nodes, not yet attached to any table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tuple(pub Vec<Value>);

impl Tuple {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn value_at(&self, idx: usize) -> Option<&Value> {
        self.0.get(idx)
    }

    /// left columns first, then right columns
    pub fn merge(left: &Tuple, right: &Tuple) -> Tuple {
        Tuple(left.iter().cloned().chain(right.iter().cloned()).collect())
    }
}

impl Deref for Tuple {
    type Target = Vec<Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}
