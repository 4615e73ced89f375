/// Held-key tracking.
///
/// Records the frame number of the last press/repeat event for every key.
/// A key counts as held while that event is fresh, which covers terminals
/// that never report key releases: OS key-repeat keeps refreshing it.
/// Terminals that do report releases drop the key immediately.

use std::collections::HashMap;

use crossterm::event::KeyCode;

/// A key is "held" if its last press/repeat arrived within this many frames.
/// The OS repeat rate is at least 15 Hz, so 4 frames at 30 FPS (≈133 ms) is
/// refreshed before it expires.
pub const HOLD_WINDOW: u64 = 4;

#[derive(Debug, Default)]
pub struct KeyTracker {
    key_frame: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn press(&mut self, code: KeyCode, frame: u64) {
        self.key_frame.insert(code, frame);
    }

    pub fn release(&mut self, code: &KeyCode) {
        self.key_frame.remove(code);
    }

    pub fn is_held(&self, code: &KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(code)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn left_held(&self, frame: u64) -> bool {
        [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')]
            .iter()
            .any(|k| self.is_held(k, frame))
    }

    pub fn right_held(&self, frame: u64) -> bool {
        [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')]
            .iter()
            .any(|k| self.is_held(k, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_held_within_window() {
        let mut keys = KeyTracker::default();
        keys.press(KeyCode::Left, 10);
        assert!(keys.left_held(10));
        assert!(keys.left_held(10 + HOLD_WINDOW));
        assert!(!keys.left_held(11 + HOLD_WINDOW));
    }

    #[test]
    fn release_drops_key_immediately() {
        let mut keys = KeyTracker::default();
        keys.press(KeyCode::Char('d'), 3);
        assert!(keys.right_held(3));
        keys.release(&KeyCode::Char('d'));
        assert!(!keys.right_held(3));
    }

    #[test]
    fn unknown_key_is_not_held() {
        let keys = KeyTracker::default();
        assert!(!keys.is_held(&KeyCode::Up, 0));
    }
}
