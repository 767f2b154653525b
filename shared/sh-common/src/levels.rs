//! Level & Points Domain
//!
//! Points accumulate from completed tasks and habits; levels are brackets
//! over the running total defined by [`LEVEL_THRESHOLDS`].

use serde::{Deserialize, Serialize};

/// Default points for a newly created task.
pub const POINTS_PER_TASK: u32 = 10;

/// Default points for a newly created habit.
pub const POINTS_PER_HABIT: u32 = 5;

/// Ascending point totals marking the start of each level.
pub const LEVEL_THRESHOLDS: [u32; 6] = [0, 100, 250, 500, 1000, 2000];

/// Where a point total sits within the level brackets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelDetails {
    /// 1-based level number.
    pub level: u32,
    /// Percentage through the current bracket, in `[0, 100]`.
    pub progress: f64,
    /// Points remaining until the next level. `0` at the top level.
    pub points_to_next_level: u32,
}

/// Resolve a point total to its level, bracket progress and distance to the
/// next level. The top bracket has no upper bound; totals at or past the
/// last threshold report full progress and zero points remaining.
#[must_use]
pub fn level_details(points: u32) -> LevelDetails {
    let tier = LEVEL_THRESHOLDS
        .iter()
        .rposition(|&threshold| points >= threshold)
        .unwrap_or(0);
    let lower = LEVEL_THRESHOLDS[tier];
    let level = tier as u32 + 1;

    match LEVEL_THRESHOLDS.get(tier + 1) {
        Some(&next) => LevelDetails {
            level,
            progress: f64::from(points - lower) / f64::from(next - lower) * 100.0,
            points_to_next_level: next - points,
        },
        None => LevelDetails {
            level,
            progress: 100.0,
            points_to_next_level: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_points_is_level_one() {
        let details = level_details(0);
        assert_eq!(details.level, 1);
        assert!((details.progress - 0.0).abs() < f64::EPSILON);
        assert_eq!(details.points_to_next_level, 100);
    }

    #[test]
    fn midway_through_first_bracket() {
        let details = level_details(50);
        assert_eq!(details.level, 1);
        assert!((details.progress - 50.0).abs() < f64::EPSILON);
        assert_eq!(details.points_to_next_level, 50);
    }

    #[test]
    fn exact_threshold_advances_level() {
        let details = level_details(100);
        assert_eq!(details.level, 2);
        assert!((details.progress - 0.0).abs() < f64::EPSILON);
        assert_eq!(details.points_to_next_level, 150);
    }

    #[test]
    fn top_bracket_is_clamped() {
        for points in [2000, 2001, 9999, u32::MAX] {
            let details = level_details(points);
            assert_eq!(details.level, 6, "points={points}");
            assert!((details.progress - 100.0).abs() < f64::EPSILON);
            assert_eq!(details.points_to_next_level, 0);
        }
    }

    #[test]
    fn brackets_hold_for_all_totals() {
        for points in [0, 1, 42, 99, 100, 101, 249, 250, 499, 500, 999, 1000, 1999, 2000, 5000] {
            let details = level_details(points);
            let tier = details.level as usize - 1;

            assert!(LEVEL_THRESHOLDS[tier] <= points, "points={points}");
            if let Some(&upper) = LEVEL_THRESHOLDS.get(tier + 1) {
                assert!(upper > points, "points={points}");
            }
            assert!(
                (0.0..=100.0).contains(&details.progress),
                "points={points} progress={}",
                details.progress
            );
        }
    }
}
