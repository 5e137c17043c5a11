//! Input events for masked fields.

pub mod input;

pub use input::{InputEvent, Key, KeyEvent, Modifiers};
