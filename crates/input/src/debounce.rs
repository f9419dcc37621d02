//! Held-key debouncing for terminal environments.
//!
//! A physical key press fires once. Further presses of the same key are
//! swallowed until the key is released, a different key is pressed, or the
//! key goes quiet. Terminals that never report key releases stream repeated
//! presses while a key is held: one press, a pause of the OS repeat delay,
//! then presses at the repeat rate. "Quiet" therefore has two windows: a
//! long one before the first repeat and a short one between repeats.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

// Longer than common OS initial repeat delays (250 to 660 ms).
const DEFAULT_REPEAT_DELAY_MS: u64 = 700;

// Longer than common repeat intervals (about 30 to 100 ms).
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

/// Tracks the currently held key.
#[derive(Debug, Clone)]
pub struct KeyDebouncer {
    held: Option<KeyCode>,
    repeating: bool,
    last_key_time: Instant,
    repeat_delay: Duration,
    key_release_timeout: Duration,
}

impl KeyDebouncer {
    pub fn new() -> Self {
        Self::with_timeouts_ms(DEFAULT_REPEAT_DELAY_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    /// Custom gap between repeats; the first-repeat window is at least as long.
    pub fn with_key_release_timeout_ms(timeout_ms: u64) -> Self {
        Self::with_timeouts_ms(DEFAULT_REPEAT_DELAY_MS.max(timeout_ms), timeout_ms)
    }

    /// `repeat_delay_ms`: silence after the first press that still counts as
    /// held. `key_release_timeout_ms`: silence between repeats that still
    /// counts as held.
    pub fn with_timeouts_ms(repeat_delay_ms: u64, key_release_timeout_ms: u64) -> Self {
        Self {
            held: None,
            repeating: false,
            last_key_time: Instant::now(),
            repeat_delay: Duration::from_millis(repeat_delay_ms),
            key_release_timeout: Duration::from_millis(key_release_timeout_ms),
        }
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    pub fn repeat_delay(&self) -> Duration {
        self.repeat_delay
    }

    pub fn held(&self) -> Option<KeyCode> {
        self.held
    }

    /// Register a press. Returns true if it should produce a command.
    pub fn press(&mut self, code: KeyCode) -> bool {
        self.press_at(code, Instant::now())
    }

    /// [`KeyDebouncer::press`] with an explicit clock reading.
    pub fn press_at(&mut self, code: KeyCode, now: Instant) -> bool {
        self.expire_at(now);
        let fire = self.held != Some(code);
        self.repeating = !fire;
        self.held = Some(code);
        self.last_key_time = now;
        fire
    }

    pub fn release(&mut self, code: KeyCode) {
        if self.held == Some(code) {
            self.held = None;
            self.repeating = false;
        }
    }

    /// Auto-release a key that has been silent past its current window.
    pub fn expire_at(&mut self, now: Instant) {
        let window = if self.repeating {
            self.key_release_timeout
        } else {
            self.repeat_delay
        };
        if self.held.is_some() && now.saturating_duration_since(self.last_key_time) > window {
            self.held = None;
            self.repeating = false;
        }
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.repeating = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for KeyDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_press_fires() {
        let mut db = KeyDebouncer::new();
        assert!(db.press(KeyCode::Left));
        assert_eq!(db.held(), Some(KeyCode::Left));
    }

    #[test]
    fn test_held_key_fires_once() {
        let mut db = KeyDebouncer::with_key_release_timeout_ms(100);
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Left, t0));
        // Auto-repeat stream while held.
        for i in 1..20 {
            assert!(!db.press_at(KeyCode::Left, t0 + Duration::from_millis(30 * i)));
        }
    }

    #[test]
    fn test_release_rearms_key() {
        let mut db = KeyDebouncer::new();
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Up, t0));
        db.release(KeyCode::Up);
        assert_eq!(db.held(), None);
        assert!(db.press_at(KeyCode::Up, t0 + Duration::from_millis(5)));
    }

    #[test]
    fn test_different_key_fires_immediately() {
        let mut db = KeyDebouncer::new();
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Up, t0));
        assert!(db.press_at(KeyCode::Left, t0 + Duration::from_millis(1)));
        assert!(db.press_at(KeyCode::Up, t0 + Duration::from_millis(2)));
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut db = KeyDebouncer::with_key_release_timeout_ms(50);
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Right, t0));
        assert!(!db.press_at(KeyCode::Right, t0 + Duration::from_millis(40)));
        // Silent for longer than the timeout: treated as released.
        assert!(db.press_at(KeyCode::Right, t0 + Duration::from_millis(100)));
    }

    #[test]
    fn test_held_key_with_os_repeat_delay_fires_once() {
        let mut db = KeyDebouncer::new();
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Left, t0));
        let first_repeat = t0 + Duration::from_millis(500);
        let mut fired = 0;
        for i in 0..20 {
            if db.press_at(KeyCode::Left, first_repeat + Duration::from_millis(33 * i)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);
        assert_eq!(db.held(), Some(KeyCode::Left));
    }

    #[test]
    fn test_key_rearms_after_repeats_stop() {
        let mut db = KeyDebouncer::new();
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Up, t0));
        let last_repeat = t0 + Duration::from_millis(600);
        assert!(!db.press_at(KeyCode::Up, last_repeat));
        // Quiet for longer than the repeat gap: this is a new press.
        assert!(db.press_at(KeyCode::Up, last_repeat + Duration::from_millis(300)));
    }

    #[test]
    fn test_tap_after_repeat_delay_fires() {
        let mut db = KeyDebouncer::with_timeouts_ms(400, 100);
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Down, t0));
        assert!(db.press_at(KeyCode::Down, t0 + Duration::from_millis(450)));
        assert_eq!(db.repeat_delay(), Duration::from_millis(400));
    }

    #[test]
    fn test_release_of_other_key_keeps_hold() {
        let mut db = KeyDebouncer::new();
        let t0 = Instant::now();
        assert!(db.press_at(KeyCode::Down, t0));
        db.release(KeyCode::Up);
        assert_eq!(db.held(), Some(KeyCode::Down));
    }

    #[test]
    fn test_reset_clears_hold() {
        let mut db = KeyDebouncer::new();
        db.press(KeyCode::Left);
        db.reset();
        assert_eq!(db.held(), None);
        assert!(db.press(KeyCode::Left));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(KeyDebouncer::new().key_release_timeout() > Duration::ZERO);
    }
}
