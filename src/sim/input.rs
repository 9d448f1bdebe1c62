use bitflags::bitflags;
use minifb::Key;

bitflags! {
    /// Held/released state of the five logical keys.
    ///
    /// Only the *current* state is kept: a press and release that both land
    /// between two ticks leave the flag cleared, and that tick never sees it.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct InputState: u8 {
        const FORWARD  = 0b0000_0001;
        const BACKWARD = 0b0000_0010;
        const LEFT     = 0b0000_0100;
        const RIGHT    = 0b0000_1000;
        const BOOST    = 0b0001_0000;
    }
}

impl InputState {
    /// Edge: key went down.
    #[inline]
    pub fn key_down(&mut self, key: InputState) {
        self.insert(key);
    }

    /// Edge: key went up.
    #[inline]
    pub fn key_up(&mut self, key: InputState) {
        self.remove(key);
    }

    #[inline]
    pub fn held(self, key: InputState) -> bool {
        self.contains(key)
    }
}

/// Physical key → logical key. Arrows and Shift are the primary bindings,
/// WASD mirrors the arrows.
pub fn key_binding(key: Key) -> Option<InputState> {
    match key {
        Key::Up | Key::W => Some(InputState::FORWARD),
        Key::Down | Key::S => Some(InputState::BACKWARD),
        Key::Left | Key::A => Some(InputState::LEFT),
        Key::Right | Key::D => Some(InputState::RIGHT),
        Key::LeftShift | Key::RightShift => Some(InputState::BOOST),
        _ => None,
    }
}
