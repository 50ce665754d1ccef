//! Point scoring: placement points plus one point per kill.

/// Placement points for a finishing position. Total over all integers: anything
/// outside 1..=10 (unrecorded, negative, or beyond the points table) scores 0.
pub fn placement_points(placement: i64) -> u32 {
    match placement {
        1 => 10,
        2 => 7,
        3 => 6,
        4 => 4,
        5 => 3,
        6 | 7 => 2,
        8..=10 => 1,
        _ => 0,
    }
}

/// One point per elimination, uncapped.
pub fn kill_points(kills: u32) -> u32 {
    kills
}

/// Saturates at `u32::MAX` instead of overflowing on absurd kill counts.
pub fn total_points(placement_points: u32, kill_points: u32) -> u32 {
    placement_points.saturating_add(kill_points)
}
