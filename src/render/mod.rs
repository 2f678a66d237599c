//! Terminal output: styling, frame drawing, and paced text reveal.

pub mod screen;
pub mod style;
pub mod typewriter;

pub use screen::{clear, draw_menu};
pub use style::TextStyle;
pub use typewriter::{reveal, Clock, Passage, SystemClock, LEAD_IN, REVEAL_TOTAL};
