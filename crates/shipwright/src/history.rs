//! Bounded undo/redo history.
//!
//! [`HistoryStack`] keeps two stacks of snapshots: `past` (oldest first) and
//! `future` (next redo first). The live value is owned by the caller and
//! passed in on [`undo`](HistoryStack::undo) and [`redo`](HistoryStack::redo),
//! which swap it with the appropriate snapshot.
//!
//! ```rust
//! use shipwright::HistoryStack;
//!
//! let mut history = HistoryStack::new();
//! let mut text = String::from("a");
//!
//! history.record(text.clone());
//! text.push('b');
//!
//! assert!(history.undo(&mut text));
//! assert_eq!(text, "a");
//! assert!(history.redo(&mut text));
//! assert_eq!(text, "ab");
//! ```

use std::collections::VecDeque;

/// Default number of undo steps kept.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryStack<T> {
    past: VecDeque<T>,
    future: VecDeque<T>,
    limit: usize,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }
}

impl<T> HistoryStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history that keeps at most `limit` undo steps. A limit of zero is
    /// treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Records `snapshot` as the state before a new edit.
    ///
    /// Evicts the oldest entry once the limit is exceeded and discards every
    /// pending redo.
    pub fn record(&mut self, snapshot: T) {
        self.past.push_back(snapshot);
        while self.past.len() > self.limit {
            self.past.pop_front();
            tracing::debug!(limit = self.limit, "history full, dropped oldest entry");
        }
        self.future.clear();
    }

    /// Restores the most recent snapshot into `current`.
    ///
    /// The replaced value becomes the next redo. Returns `false`, leaving
    /// everything untouched, when there is nothing to undo.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let replaced = std::mem::replace(current, previous);
        self.future.push_front(replaced);
        tracing::debug!(past = self.past.len(), future = self.future.len(), "undo");
        true
    }

    /// Re-applies the next undone snapshot into `current`.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.past.push_back(replaced);
        tracing::debug!(past = self.past.len(), future = self.future.len(), "redo");
        true
    }

    /// Forgets all history.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.past.len()
    }

    pub fn redo_len(&self) -> usize {
        self.future.len()
    }

    /// Undo snapshots, oldest first.
    pub fn past(&self) -> impl Iterator<Item = &T> {
        self.past.iter()
    }

    /// Redo snapshots, next redo first.
    pub fn future(&self) -> impl Iterator<Item = &T> {
        self.future.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Edit(u32),
        Undo,
        Redo,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u32>().prop_map(Op::Edit),
            Just(Op::Undo),
            Just(Op::Redo),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn past_never_exceeds_limit(ops in prop::collection::vec(op(), 0..200), limit in 1usize..20) {
            let mut history = HistoryStack::with_limit(limit);
            let mut current = 0u32;
            for op in ops {
                match op {
                    Op::Edit(next) => {
                        history.record(current);
                        current = next;
                    }
                    Op::Undo => { history.undo(&mut current); }
                    Op::Redo => { history.redo(&mut current); }
                }
                prop_assert!(history.undo_len() <= limit);
            }
        }

        #[test]
        fn undo_then_redo_is_identity(values in prop::collection::vec(any::<u32>(), 1..30)) {
            let mut history = HistoryStack::new();
            let mut current = 0u32;
            for next in &values {
                history.record(current);
                current = *next;
            }
            let before = current;
            let steps = values.len();
            for _ in 0..steps {
                prop_assert!(history.undo(&mut current));
            }
            prop_assert_eq!(current, 0);
            for _ in 0..steps {
                prop_assert!(history.redo(&mut current));
            }
            prop_assert_eq!(current, before);
        }
    }
}
