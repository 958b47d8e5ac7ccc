//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the simulation core, the terminal front end, and tests.
//!
//! # Board Dimensions
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//!
//! # Frame Timing
//!
//! The simulation is frame-counted, not millisecond-based. One frame is one
//! call of the game loop at the display refresh rate (~60 Hz).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DAS_TRIGGER` | 16 | Counter value at which a held key repeats |
//! | `DAS_CHARGED` | 10 | Counter value after a left/right repeat (6 frame cadence) |
//! | `DAS_DOWN_CHARGED` | 14 | Counter value after a soft-drop repeat (2 frame cadence) |
//! | `FRAME_MICROS` | 16667 | Wall-clock length of one frame |
//!
//! # Gravity by Level
//!
//! | Level | Frames per row |
//! |-------|----------------|
//! | 0 | 48 |
//! | 1-7 | 43 down to 13, step 5 |
//! | 8 | 8 |
//! | 9 | 6 |
//! | 10-12 | 5 |
//! | 13-15 | 4 |
//! | 16-18 | 3 |
//! | 19 | 2 |
//!
//! # Examples
//!
//! ```
//! use tetris_trainer_types::{GameStatus, Key, InputEvent, COLUMNS, ROWS};
//!
//! assert_eq!(ROWS, 20);
//! assert_eq!(COLUMNS, 10);
//!
//! let event = InputEvent::KeyDown(Key::Left);
//! assert_eq!(event.key(), Key::Left);
//!
//! assert_eq!(GameStatus::Paused.header_text(0), "Paused");
//! ```

/// Board height in cells (20 rows)
pub const ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const COLUMNS: usize = 10;

/// Wall-clock duration of one simulation frame (~60 FPS)
pub const FRAME_MICROS: u64 = 16_667;

/// DAS counter value at which a held direction fires a move
pub const DAS_TRIGGER: u32 = 16;

/// DAS counter value after a left/right repeat fires
pub const DAS_CHARGED: u32 = 10;

/// DAS counter value for soft drop: preloaded on a fresh hold and after each repeat
pub const DAS_DOWN_CHARGED: u32 = 14;

/// Highest level with its own gravity entry. Higher levels are clamped to it.
pub const MAX_LEVEL: u8 = 19;

/// Frames per forced downward move, indexed by level.
pub const GRAVITY_FRAMES: [u32; MAX_LEVEL as usize + 1] = [
    48, 43, 38, 33, 28, 23, 18, 13, 8, 6, 5, 5, 5, 4, 4, 4, 3, 3, 3, 2,
];

/// Points for clearing N rows at once, indexed by N.
///
/// No level multiplier is applied.
pub const LINE_REWARDS: [u32; 5] = [0, 40, 100, 300, 1200];

/// Text shown in the header while on the start screen
pub const START_SCREEN_TEXT: &str = "Welcome to Tetris Trainer!";

/// Text shown in the header while paused
pub const PAUSED_TEXT: &str = "Paused";

/// Text shown in the header once the game has ended
pub const GAME_OVER_TEXT: &str = "Game over!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_constants() {
        assert_eq!(DAS_TRIGGER, 16);
        assert_eq!(DAS_CHARGED, 10);
        assert_eq!(DAS_DOWN_CHARGED, 14);
        assert_eq!(GRAVITY_FRAMES[0], 48);
        assert_eq!(GRAVITY_FRAMES[MAX_LEVEL as usize], 2);
        assert_eq!(LINE_REWARDS, [0, 40, 100, 300, 1200]);
    }

    #[test]
    fn gravity_table_never_speeds_down() {
        for pair in GRAVITY_FRAMES.windows(2) {
            assert!(pair[0] >= pair[1], "gravity must not slow with level");
        }
    }
}

/// The seven tetromino piece kinds
///
/// Each kind maps to one color in the front end:
/// - **I**: Cyan
/// - **O**: Yellow
/// - **T**: Purple
/// - **S**: Green
/// - **Z**: Red
/// - **J**: Blue
/// - **L**: Orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in catalogue order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states of a piece
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Next rotation state (90° clockwise)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_trainer_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.next(), Rotation::East);
    /// assert_eq!(Rotation::West.next(), Rotation::North);
    /// ```
    pub fn next(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }
}

/// A cell on the game board
///
/// - `None`: vacant
/// - `Some(PieceKind)`: locked material of the given piece kind
pub type Cell = Option<PieceKind>;

/// Process-wide game state, driven only by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    StartScreen,
    Running,
    Paused,
    GameOver,
}

impl GameStatus {
    /// Header text for this status.
    ///
    /// While running the header shows the live gravity frame counter.
    pub fn header_text(&self, frame_count: u32) -> String {
        match self {
            GameStatus::StartScreen => START_SCREEN_TEXT.to_string(),
            GameStatus::Running => frame_count.to_string(),
            GameStatus::Paused => PAUSED_TEXT.to_string(),
            GameStatus::GameOver => GAME_OVER_TEXT.to_string(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, GameStatus::Running)
    }
}

/// Logical keys the core understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Rotate,
    Pause,
    Start,
}

impl Key {
    /// The auto-repeating direction this key drives, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Down => Some(Direction::Down),
            Key::Rotate | Key::Pause | Key::Start => None,
        }
    }
}

/// Discrete edge signal from the input plumbing.
///
/// Host key-repeat never reaches the core; only the first down edge is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    pub fn key(&self) -> Key {
        match self {
            InputEvent::KeyDown(key) | InputEvent::KeyUp(key) => *key,
        }
    }
}

/// Directions tracked by the DAS engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}
