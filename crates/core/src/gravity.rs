//! Gravity clock - level-paced forced drops, counted in frames.

use crate::scoring::Level;

#[derive(Debug, Clone)]
pub struct GravityClock {
    frame_count: u32,
    level: Level,
}

impl GravityClock {
    pub fn new(level: Level) -> Self {
        Self {
            frame_count: 0,
            level,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Frames counted since the last forced drop.
    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn reset(&mut self) {
        self.frame_count = 0;
    }

    /// Advance one running frame. Returns true when a forced drop is due.
    pub fn tick(&mut self) -> bool {
        self.frame_count += 1;
        if self.frame_count >= self.level.gravity_frames() {
            self.frame_count = 0;
            return true;
        }
        false
    }
}
