//! Round-robin pairing generation for tournament matches

/// Total number of matches for a full round-robin: `C(n, 2)`
pub fn calculate_match_count(participant_count: usize) -> usize {
    if participant_count < 2 {
        return 0;
    }
    participant_count * (participant_count - 1) / 2
}

/// Every unordered pair `(i, j)` with `i < j`, in row-major order
///
/// `(0, 1), (0, 2), ..., (0, n-1), (1, 2), ...` so the first participant of
/// the play order plays all of its matches first.
pub fn round_robin_pairs(participant_count: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(calculate_match_count(participant_count));
    for i in 0..participant_count {
        for j in (i + 1)..participant_count {
            pairs.push((i, j));
        }
    }
    pairs
}
