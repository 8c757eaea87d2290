//! Keyboard input types, decoupled from crossterm.

pub mod input;

pub use input::{Key, KeyEvent, Modifiers};
