//! Synthetic key releases for terminals that never report them.
//!
//! Without keyboard enhancement a terminal only sends presses, and a held key
//! shows up as a stream of presses from the host's own auto-repeat. The
//! watchdog remembers when each direction was last seen and, once it has been
//! quiet for the timeout, reports it released. As soon as the terminal sends a
//! real release event the watchdog switches itself off.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::map_key;
use crate::types::{Direction, InputEvent, Key};

// A tap must never outlive this window and turn into DAS repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

const DIRECTIONS: [(Direction, Key); 3] = [
    (Direction::Left, Key::Left),
    (Direction::Right, Key::Right),
    (Direction::Down, Key::Down),
];

#[derive(Debug, Clone)]
pub struct ReleaseWatchdog {
    timeout: Duration,
    last_seen: [Option<Instant>; 3],
    releases_reported: bool,
}

impl ReleaseWatchdog {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            last_seen: [None; 3],
            releases_reported: false,
        }
    }

    /// A watchdog that never fires.
    pub fn disabled() -> Self {
        Self {
            releases_reported: true,
            ..Self::new()
        }
    }

    /// Armed only when the terminal did not agree to report key releases.
    pub fn for_terminal(reports_key_releases: bool) -> Self {
        if reports_key_releases {
            Self::disabled()
        } else {
            Self::new()
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether the terminal has proven it reports releases itself.
    pub fn releases_reported(&self) -> bool {
        self.releases_reported
    }

    fn slot(direction: Direction) -> usize {
        match direction {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Down => 2,
        }
    }

    /// Record a raw terminal event.
    pub fn observe(&mut self, event: &KeyEvent, now: Instant) {
        let Some(direction) = map_key(event.code).and_then(|key| key.direction()) else {
            return;
        };
        let slot = Self::slot(direction);
        match event.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.last_seen[slot] = Some(now),
            KeyEventKind::Release => {
                self.releases_reported = true;
                self.last_seen = [None; 3];
            }
        }
    }

    /// Releases for every direction quiet for longer than the timeout.
    pub fn expired(&mut self, now: Instant) -> ArrayVec<InputEvent, 3> {
        let mut released = ArrayVec::new();
        if self.releases_reported {
            return released;
        }
        for (direction, key) in DIRECTIONS {
            let slot = Self::slot(direction);
            if let Some(seen) = self.last_seen[slot] {
                if now.saturating_duration_since(seen) > self.timeout {
                    self.last_seen[slot] = None;
                    released.push(InputEvent::KeyUp(key));
                }
            }
        }
        released
    }
}

impl Default for ReleaseWatchdog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_quiet_key_is_released_after_timeout() {
        let mut wd = ReleaseWatchdog::with_timeout(Duration::from_millis(50));
        let t0 = Instant::now();
        wd.observe(&event(KeyCode::Left, KeyEventKind::Press), t0);

        assert!(wd.expired(t0 + Duration::from_millis(50)).is_empty());
        let released = wd.expired(t0 + Duration::from_millis(51));
        assert_eq!(released.as_slice(), &[InputEvent::KeyUp(Key::Left)]);

        // Reported once only.
        assert!(wd.expired(t0 + Duration::from_millis(200)).is_empty());
    }

    #[test]
    fn test_repeats_keep_key_alive() {
        let mut wd = ReleaseWatchdog::with_timeout(Duration::from_millis(50));
        let t0 = Instant::now();
        wd.observe(&event(KeyCode::Down, KeyEventKind::Press), t0);
        wd.observe(
            &event(KeyCode::Down, KeyEventKind::Press),
            t0 + Duration::from_millis(40),
        );
        assert!(wd.expired(t0 + Duration::from_millis(80)).is_empty());
    }

    #[test]
    fn test_non_movement_key_does_not_extend_timeout() {
        let mut wd = ReleaseWatchdog::with_timeout(Duration::from_millis(50));
        let t0 = Instant::now();
        wd.observe(&event(KeyCode::Right, KeyEventKind::Press), t0);
        wd.observe(
            &event(KeyCode::Up, KeyEventKind::Press),
            t0 + Duration::from_millis(40),
        );
        let released = wd.expired(t0 + Duration::from_millis(60));
        assert_eq!(released.as_slice(), &[InputEvent::KeyUp(Key::Right)]);
    }

    #[test]
    fn test_real_release_disables_watchdog() {
        let mut wd = ReleaseWatchdog::with_timeout(Duration::from_millis(50));
        let t0 = Instant::now();
        wd.observe(&event(KeyCode::Left, KeyEventKind::Release), t0);
        assert!(wd.releases_reported());
        wd.observe(&event(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(wd.expired(t0 + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_enhanced_terminal_never_synthesizes_releases() {
        let mut wd = ReleaseWatchdog::for_terminal(true);
        let t0 = Instant::now();
        wd.observe(&event(KeyCode::Left, KeyEventKind::Press), t0);
        assert!(wd.expired(t0 + Duration::from_secs(5)).is_empty());

        let mut armed = ReleaseWatchdog::for_terminal(false);
        armed.observe(&event(KeyCode::Left, KeyEventKind::Press), t0);
        assert_eq!(armed.expired(t0 + Duration::from_secs(5)).len(), 1);
    }

    #[test]
    fn test_default_timeout_is_non_zero() {
        assert!(ReleaseWatchdog::new().timeout() > Duration::ZERO);
    }
}
