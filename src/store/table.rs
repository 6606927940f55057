use std::sync::{PoisonError, RwLock};

use log::trace;

use crate::types::tuple::Tuple;

/// Append-only in-memory row storage backing one table.
#[derive(Debug, Default)]
pub struct TableHeap {
    tuples: RwLock<Vec<Tuple>>,
}

impl TableHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_tuple(&self, tuple: Tuple) {
        trace!("insert tuple {tuple:?}");
        // a poisoned lock only means a writer panicked mid-push; the vec is
        // still consistent
        self.tuples
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tuple);
    }

    /// snapshot of every stored tuple, in insertion order
    pub fn scan(&self) -> Vec<Tuple> {
        self.tuples
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.tuples.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
