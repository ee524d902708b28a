//! City prosperity track.
//!
//! The track runs from 1 to 65. Each entry of [`LEVEL_THRESHOLDS`] is the
//! track position where the next level starts, so position 5 reaches level 2
//! and position 65 reaches the top level 9.

/// Lowest track position.
pub const MIN_PROSPERITY: u32 = 1;

/// Highest track position.
pub const MAX_PROSPERITY: u32 = 65;

/// Track positions at which levels 2 through 9 begin.
pub const LEVEL_THRESHOLDS: [u32; 8] = [5, 10, 16, 23, 31, 40, 51, 65];

/// Highest prosperity level.
pub const MAX_LEVEL: u32 = LEVEL_THRESHOLDS.len() as u32 + 1;

/// Prosperity level for a track position.
#[must_use]
pub fn level(prosperity: u32) -> u32 {
    let prosperity = prosperity.max(MIN_PROSPERITY);
    1 + LEVEL_THRESHOLDS.iter().filter(|&&t| t <= prosperity).count() as u32
}

/// Track position where a level begins.
#[must_use]
pub fn level_start(level: u32) -> u32 {
    match level {
        0 | 1 => MIN_PROSPERITY,
        l => LEVEL_THRESHOLDS[(l.min(MAX_LEVEL) - 2) as usize],
    }
}

/// Fraction of the way from `level`'s start to the next level, in `0.0..=1.0`.
///
/// The top level is always complete.
#[must_use]
pub fn progress(prosperity: u32, level: u32) -> f64 {
    if level >= MAX_LEVEL {
        return 1.0;
    }
    let level = level.max(1);
    let start = level_start(level);
    let next = level_start(level + 1);
    let steps = prosperity.saturating_sub(start) as f64 / (next - start) as f64;
    steps.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels() {
        assert_eq!(level(0), 1);
        assert_eq!(level(1), 1);
        assert_eq!(level(4), 1);
        assert_eq!(level(5), 2);
        assert_eq!(level(9), 2);
        assert_eq!(level(10), 3);
        assert_eq!(level(50), 7);
        assert_eq!(level(51), 8);
        assert_eq!(level(64), 8);
        assert_eq!(level(65), 9);
    }

    #[test]
    fn test_level_start() {
        assert_eq!(level_start(1), 1);
        assert_eq!(level_start(2), 5);
        assert_eq!(level_start(9), 65);
    }

    #[test]
    fn test_progress() {
        assert_eq!(progress(1, 1), 0.0);
        assert_eq!(progress(3, 1), 0.5);
        assert_eq!(progress(5, 2), 0.0);
        assert!((progress(7, 2) - 0.4).abs() < 1e-9);
        assert!((progress(64, 8) - 13.0 / 14.0).abs() < 1e-9);
        assert_eq!(progress(65, 9), 1.0);
    }

    #[test]
    fn test_progress_clamps_mismatched_level() {
        assert_eq!(progress(2, 3), 0.0);
        assert_eq!(progress(30, 2), 1.0);
    }

    #[test]
    fn test_progress_level_zero_reads_as_first_level() {
        assert_eq!(progress(1, 0), 0.0);
        assert_eq!(progress(3, 0), progress(3, 1));
        assert!(!progress(65, 0).is_nan());
    }
}
