mod canvas;
pub mod sprite;

pub use canvas::{context_for, draw_frame};
pub use sprite::{score_texts, timer_text};
