//! Interactive terminal menus and paced text presentation for a console
//! narrative game.
//!
//! The crate reads raw keystrokes one at a time, decodes both escape-coded
//! and scan-coded arrow keys, and draws full-screen option frames with a
//! typewriter reveal for story text. Everything testable runs over trait
//! seams, so the whole presentation can be driven by scripted keys in
//! tests.

pub mod error;
pub mod input;
pub mod logging;
pub mod menu;
pub mod render;
pub mod session;
pub mod story;

pub use error::UiError;
pub use session::{Console, TtyConsole};
