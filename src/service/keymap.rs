use crate::types::InputState;

/// Logical keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Paint,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.code`. Arrows and WASD steer, space paints.
    pub fn from_code(code: &str) -> Option<Key> {
        match code {
            "ArrowUp" | "KeyW" => Some(Key::Up),
            "ArrowDown" | "KeyS" => Some(Key::Down),
            "ArrowLeft" | "KeyA" => Some(Key::Left),
            "ArrowRight" | "KeyD" => Some(Key::Right),
            "Space" => Some(Key::Paint),
            _ => None,
        }
    }

    pub fn apply(self, input: &mut InputState, pressed: bool) {
        let flag = match self {
            Key::Up => &mut input.up,
            Key::Down => &mut input.down,
            Key::Left => &mut input.left,
            Key::Right => &mut input.right,
            Key::Paint => &mut input.paint,
        };
        *flag = pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_share_directions() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("KeyA"), Some(Key::Left));
        assert_eq!(Key::from_code("KeyW"), Some(Key::Up));
        assert_eq!(Key::from_code("Space"), Some(Key::Paint));
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(Key::from_code("KeyQ"), None);
        assert_eq!(Key::from_code("arrowup"), None);
        assert_eq!(Key::from_code(""), None);
    }

    #[test]
    fn press_and_release_toggle_one_flag() {
        let mut input = InputState::default();
        Key::Right.apply(&mut input, true);
        Key::Paint.apply(&mut input, true);
        assert!(input.right && input.paint);
        assert!(!input.left && !input.up && !input.down);

        Key::Right.apply(&mut input, false);
        assert!(!input.right);
        assert!(input.paint);
    }
}
