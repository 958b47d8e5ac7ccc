//! Scoring module - fixed reward table and level-indexed gravity
//!
//! Rewards depend only on how many rows a single lock clears. Level selects the
//! gravity interval and nothing else; there is no level progression.

use crate::types::{GRAVITY_FRAMES, LINE_REWARDS, MAX_LEVEL};

/// Points for clearing `rows` rows with one lock.
///
/// Returns 0 for zero rows or for counts beyond the table.
pub fn line_clear_reward(rows: usize) -> u32 {
    LINE_REWARDS.get(rows).copied().unwrap_or(0)
}

/// A gravity level, always within the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Level(u8);

impl Level {
    /// Clamp `raw` to the highest level with a gravity entry.
    pub fn new(raw: u8) -> Self {
        Self(raw.min(MAX_LEVEL))
    }

    /// Like [`Level::new`], but reports whether clamping happened.
    pub fn clamped(raw: u8) -> (Self, bool) {
        (Self::new(raw), raw > MAX_LEVEL)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Frames between forced downward moves at this level.
    pub fn gravity_frames(&self) -> u32 {
        GRAVITY_FRAMES[self.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_reward_table() {
        assert_eq!(line_clear_reward(0), 0);
        assert_eq!(line_clear_reward(1), 40);
        assert_eq!(line_clear_reward(2), 100);
        assert_eq!(line_clear_reward(3), 300);
        assert_eq!(line_clear_reward(4), 1200);
        assert_eq!(line_clear_reward(5), 0);
    }

    #[test]
    fn test_level_gravity_endpoints() {
        assert_eq!(Level::new(0).gravity_frames(), 48);
        assert_eq!(Level::new(9).gravity_frames(), 6);
        assert_eq!(Level::new(19).gravity_frames(), 2);
    }

    #[test]
    fn test_level_clamps_above_table() {
        assert_eq!(Level::new(20), Level::new(19));
        assert_eq!(Level::new(u8::MAX).gravity_frames(), 2);
        assert_eq!(Level::clamped(25), (Level::new(19), true));
        assert_eq!(Level::clamped(18), (Level::new(18), false));
    }
}
