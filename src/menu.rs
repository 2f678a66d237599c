//! The selection state machine.
//!
//! All menu correctness reduces to [`step`]: a pure function from one
//! decoded key and the current position to the next position. The navigation
//! loop in [`crate::session`] is a thin stateful wrapper around it, which
//! keeps the decision logic testable without any terminal I/O.

use crate::input::KeyAction;

/// Result of applying one key to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// The highlighted index after the key, always in `[0, count - 1]`.
    pub index: usize,
    /// True exactly when the key was Confirm; the index is final.
    pub done: bool,
}

/// Apply one key to a selection over `count` options.
///
/// Moves saturate at the boundaries instead of wrapping: up from the first
/// option and down from the last are no-ops, and a one-entry menu ignores
/// moves entirely. Confirm never changes the index.
///
/// `index` must already be valid for `count`; the navigation loop maintains
/// that invariant from its initial index 0.
pub fn step(action: KeyAction, count: usize, index: usize) -> Step {
    debug_assert!(count > 0, "menus are validated non-empty before stepping");
    debug_assert!(index < count, "selection index out of range");

    match action {
        KeyAction::MoveUp => Step {
            index: index.saturating_sub(1),
            done: false,
        },
        KeyAction::MoveDown => Step {
            index: (index + 1).min(count - 1),
            done: false,
        },
        KeyAction::Confirm => Step { index, done: true },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_up_at_first_option_stays_put() {
        for count in 1..=5 {
            assert_eq!(
                step(KeyAction::MoveUp, count, 0),
                Step {
                    index: 0,
                    done: false
                }
            );
        }
    }

    #[test]
    fn move_down_at_last_option_stays_put() {
        for count in 1..=5 {
            assert_eq!(
                step(KeyAction::MoveDown, count, count - 1),
                Step {
                    index: count - 1,
                    done: false
                }
            );
        }
    }

    #[test]
    fn move_down_advances_inside_the_range() {
        for index in 0..4 {
            assert_eq!(
                step(KeyAction::MoveDown, 5, index),
                Step {
                    index: index + 1,
                    done: false
                }
            );
        }
    }

    #[test]
    fn move_up_retreats_inside_the_range() {
        for index in 1..5 {
            assert_eq!(
                step(KeyAction::MoveUp, 5, index),
                Step {
                    index: index - 1,
                    done: false
                }
            );
        }
    }

    #[test]
    fn confirm_finishes_without_moving() {
        for index in 0..5 {
            assert_eq!(
                step(KeyAction::Confirm, 5, index),
                Step { index, done: true }
            );
        }
    }

    #[test]
    fn single_entry_menu_ignores_both_moves() {
        assert_eq!(
            step(KeyAction::MoveUp, 1, 0),
            Step {
                index: 0,
                done: false
            }
        );
        assert_eq!(
            step(KeyAction::MoveDown, 1, 0),
            Step {
                index: 0,
                done: false
            }
        );
    }
}
