mod game_handler;
mod keymap;

pub use game_handler::{canvas_context, GameHandler};
pub use keymap::Key;
