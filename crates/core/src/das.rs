//! DAS (Delayed Auto Shift) engine
//!
//! Converts "key held" state into repeated move commands at a frame-exact
//! cadence. A single counter is shared by all directions:
//!
//! - Left/right: the counter climbs from 0 to the trigger (16 frames), fires,
//!   drops back to the charged value (10), so later repeats come every 6 frames.
//! - Down: a fresh hold preloads the counter to 14, so soft drop fires after 2
//!   frames and every 2 frames after that.
//!
//! Holding zero or several directions at once cancels charging. Releasing a
//! direction or locking a piece resets the counter, forcing a full recharge.

use serde::Deserialize;

use crate::types::{Direction, DAS_CHARGED, DAS_DOWN_CHARGED, DAS_TRIGGER};

/// Physical hold state of the three auto-repeating directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Down => self.down,
        }
    }

    pub fn set(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Down => self.down = held,
        }
    }

    /// Number of directions held right now.
    pub fn count(&self) -> u32 {
        self.left as u32 + self.right as u32 + self.down as u32
    }

    /// The held direction when exactly one is held.
    ///
    /// Down wins over left, and left over right; with the single-direction
    /// rule only one can be set when this returns `Some`.
    pub fn sole(&self) -> Option<Direction> {
        if self.count() != 1 {
            return None;
        }
        if self.down {
            Some(Direction::Down)
        } else if self.left {
            Some(Direction::Left)
        } else {
            Some(Direction::Right)
        }
    }
}

/// Counter thresholds for the DAS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DasConfig {
    /// Counter value at which a move fires.
    pub trigger: u32,
    /// Counter value after a left/right move fires.
    pub charged: u32,
    /// Counter value on a fresh soft-drop hold and after each soft-drop move.
    pub down_charged: u32,
}

impl Default for DasConfig {
    fn default() -> Self {
        Self {
            trigger: DAS_TRIGGER,
            charged: DAS_CHARGED,
            down_charged: DAS_DOWN_CHARGED,
        }
    }
}

impl DasConfig {
    /// Frames from a fresh left/right hold to its first repeat.
    pub fn initial_delay(&self) -> u32 {
        self.trigger
    }

    /// Frames between left/right repeats once charged.
    pub fn repeat_interval(&self) -> u32 {
        self.trigger - self.charged
    }

    /// Frames between soft-drop repeats.
    pub fn down_repeat_interval(&self) -> u32 {
        self.trigger - self.down_charged
    }
}

/// Per-frame auto-repeat timer.
#[derive(Debug, Clone)]
pub struct DasEngine {
    count: u32,
    config: DasConfig,
}

impl DasEngine {
    pub fn new() -> Self {
        Self::with_config(DasConfig::default())
    }

    pub fn with_config(config: DasConfig) -> Self {
        Self { count: 0, config }
    }

    pub fn config(&self) -> &DasConfig {
        &self.config
    }

    /// Current counter value.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Drop all charge; the next hold starts from scratch.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Advance one frame. Returns the direction to move, if a repeat fires.
    pub fn tick(&mut self, held: HeldKeys) -> Option<Direction> {
        let Some(direction) = held.sole() else {
            self.count = 0;
            return None;
        };

        let recharge = match direction {
            Direction::Down => {
                if self.count == 0 {
                    self.count = self.config.down_charged;
                }
                self.config.down_charged
            }
            Direction::Left | Direction::Right => self.config.charged,
        };

        self.count += 1;
        if self.count >= self.config.trigger {
            self.count = recharge;
            return Some(direction);
        }
        None
    }
}

impl Default for DasEngine {
    fn default() -> Self {
        Self::new()
    }
}
