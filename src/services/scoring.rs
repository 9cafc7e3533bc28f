/// Standard competition ranking ("1224") of `scores`, highest first.
///
/// The returned ranks line up with the input positions. Tied scores share
/// the position at which their tie group started, and the position counter
/// keeps advancing through the group, so `[10, 10, 7]` ranks as `[1, 1, 3]`.
pub fn competition_ranks(scores: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&left, &right| scores[right].total_cmp(&scores[left]));

    let mut ranks = vec![0; scores.len()];
    let mut group_start = 1;
    let mut previous: Option<f64> = None;

    for (position, &index) in (1u32..).zip(order.iter()) {
        let score = scores[index];
        if previous != Some(score) {
            group_start = position;
        }
        ranks[index] = group_start;
        previous = Some(score);
    }

    ranks
}

/// The per-turn comparison points shown for every team: every 50 turns
/// strictly below `turns`, then `turns` itself. Without any valid run
/// (`turns` is `None`) there is nothing to compare and the schedule is empty.
pub fn screenshot_timepoints(turns: Option<usize>) -> Vec<usize> {
    let Some(turns) = turns else {
        return Vec::new();
    };

    (50..turns)
        .step_by(50)
        .chain(std::iter::once(turns))
        .collect()
}
