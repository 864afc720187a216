//! Stability validator: recent labels → one confirmed gesture, or nothing yet
//!
//! Checks, first success wins:
//! 1. Strict window: last `required` labels identical and not none
//! 2. Pairwise: last two labels of the recent window (≤ 3) identical
//! 3. Majority: one label holds ≥ ceil(60% of the recent window)

use crate::{MAJORITY_FRACTION, RECENT_WINDOW};
use crate::types::{Gesture, StabilityRule};

/// Stable gesture in `history`, if any
pub fn validate_stable_gesture(history: &[Gesture], required: usize) -> Option<Gesture> {
    validate_with_rule(history, required).map(|(gesture, _)| gesture)
}

/// Stable gesture in `history` together with the rule that confirmed it.
///
/// `required` of 0 behaves like 1.
pub fn validate_with_rule(
    history: &[Gesture],
    required: usize,
) -> Option<(Gesture, StabilityRule)> {
    let required = required.max(1);
    if history.len() < required {
        return None;
    }

    if let Some(gesture) = strict_window(history, required) {
        return Some((gesture, StabilityRule::StrictWindow));
    }

    let recent = &history[history.len() - RECENT_WINDOW.min(history.len())..];

    if let Some(gesture) = pairwise(recent) {
        return Some((gesture, StabilityRule::Pairwise));
    }

    if let Some(gesture) = majority(recent) {
        return Some((gesture, StabilityRule::Majority));
    }

    tracing::trace!(?recent, "no stable gesture");
    None
}

fn strict_window(history: &[Gesture], required: usize) -> Option<Gesture> {
    let window = &history[history.len() - required..];
    let first = *window.first()?;
    (first.is_move() && window.iter().all(|g| *g == first)).then_some(first)
}

fn pairwise(recent: &[Gesture]) -> Option<Gesture> {
    match recent {
        [.., a, b] if a == b && a.is_move() => Some(*a),
        _ => None,
    }
}

fn majority(recent: &[Gesture]) -> Option<Gesture> {
    // Counts in first-seen order; ties keep the earliest label.
    let mut counts: Vec<(Gesture, usize)> = Vec::with_capacity(Gesture::MOVES.len());
    for g in recent.iter().filter(|g| g.is_move()) {
        match counts.iter_mut().find(|(label, _)| label == g) {
            Some((_, n)) => *n += 1,
            None => counts.push((*g, 1)),
        }
    }

    let (best, best_count) = counts
        .into_iter()
        .reduce(|a, b| if b.1 > a.1 { b } else { a })?;

    let needed = (recent.len() as f64 * MAJORITY_FRACTION).ceil() as usize;
    (best_count >= needed).then_some(best)
}
