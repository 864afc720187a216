//! Bounded gesture history
//!
//! - Oldest label first
//! - `none` is never stored
//! - Trimmed from the front past capacity (default 15)

use std::collections::VecDeque;
use serde::Serialize;

use crate::types::Gesture;
use crate::{HISTORY_CAPACITY, STALE_HISTORY_LEN};

/// Recent per-frame labels for one tracking session.
///
/// Serialize-only: contents are only built through `push`.
#[derive(Debug, Clone, Serialize)]
pub struct GestureHistory {
    labels: VecDeque<Gesture>,
    capacity: usize,
}

impl Default for GestureHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureHistory {
    /// Create history with default capacity (15)
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }

    /// Create history with a custom capacity (at least 1)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            labels: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a label. Returns false (and changes nothing) for `none`.
    pub fn push(&mut self, gesture: Gesture) -> bool {
        if !gesture.is_move() {
            return false;
        }
        self.labels.push_back(gesture);
        while self.labels.len() > self.capacity {
            self.labels.pop_front();
        }
        true
    }

    pub fn clear(&mut self) {
        self.labels.clear();
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Longer than the default staleness limit (8)?
    pub fn is_stale(&self) -> bool {
        self.exceeds(STALE_HISTORY_LEN)
    }

    pub fn exceeds(&self, limit: usize) -> bool {
        self.labels.len() > limit
    }

    /// Contiguous oldest-first view, suitable for the validator
    pub fn as_slice(&mut self) -> &[Gesture] {
        self.labels.make_contiguous()
    }

    pub fn to_vec(&self) -> Vec<Gesture> {
        self.labels.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_never_stored() {
        let mut history = GestureHistory::new();
        assert!(!history.push(Gesture::None));
        assert!(history.is_empty());

        history.push(Gesture::Rock);
        assert!(!history.push(Gesture::None));
        assert_eq!(history.to_vec(), vec![Gesture::Rock]);
    }

    #[test]
    fn test_trims_oldest_past_capacity() {
        let mut history = GestureHistory::new();
        history.push(Gesture::Paper);
        for _ in 0..HISTORY_CAPACITY {
            history.push(Gesture::Rock);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(history.to_vec().iter().all(|g| *g == Gesture::Rock));
    }

    #[test]
    fn test_staleness_threshold() {
        let mut history = GestureHistory::new();
        for _ in 0..STALE_HISTORY_LEN {
            history.push(Gesture::Scissors);
        }
        assert!(!history.is_stale());
        history.push(Gesture::Scissors);
        assert!(history.is_stale());
    }

    #[test]
    fn test_oldest_first() {
        let mut history = GestureHistory::new();
        history.push(Gesture::Rock);
        history.push(Gesture::Paper);
        history.push(Gesture::Scissors);
        assert_eq!(history.to_vec(), vec![Gesture::Rock, Gesture::Paper, Gesture::Scissors]);
    }

    #[test]
    fn test_zero_capacity_becomes_one() {
        let mut history = GestureHistory::with_capacity(0);
        history.push(Gesture::Rock);
        history.push(Gesture::Paper);
        assert_eq!(history.to_vec(), vec![Gesture::Paper]);
    }

    #[test]
    fn test_serializes_labels() {
        let mut history = GestureHistory::new();
        history.push(Gesture::Rock);
        let json = serde_json::to_string(&history).unwrap();
        assert!(json.contains("\"labels\":[\"rock\"]"), "{}", json);
    }

    #[test]
    fn test_as_slice_after_wraparound() {
        let mut history = GestureHistory::with_capacity(3);
        for g in [Gesture::Rock, Gesture::Paper, Gesture::Scissors, Gesture::Rock] {
            history.push(g);
        }
        assert_eq!(history.as_slice(), &[Gesture::Paper, Gesture::Scissors, Gesture::Rock]);
    }
}
