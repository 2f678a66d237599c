//! Terminal input capture: raw-mode scoping and byte-level key decoding.

pub mod guard;
pub mod keys;
pub mod reader;

pub use guard::with_raw_mode;
pub use keys::KeyAction;
pub use reader::{KeyReader, KeystrokeSource, ScriptedKeystrokes, TtyKeystrokes};
