//! Subtask scoring.

/// All-or-nothing subtask score: `score_max` only if every case passed.
///
/// A subtask with no cases scores nothing.
pub fn min_data(score_max: u32, passed: impl IntoIterator<Item = bool>) -> u32 {
    let mut any = false;
    for ok in passed {
        if !ok {
            return 0;
        }
        any = true;
    }
    if any { score_max } else { 0 }
}
