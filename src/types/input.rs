/// Player intent flags. The host toggles these on key events between ticks;
/// the simulation reads whatever is set at the start of the next tick.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub paint: bool,
}

impl InputState {
    pub fn any_direction(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
