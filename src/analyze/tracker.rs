//! Cursor replay over a page's command stream.

use crate::model::Command;
use serde::{Deserialize, Serialize};

/// A drawing position in DVI units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub x: i32,
    pub y: i32,
}

impl Cursor {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What a single command did to the tracked position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A character was drawn at `at` (the position before any advance)
    Char { code: u32, at: Cursor },
    /// The cursor moved and is now at the given position
    Moved(Cursor),
    /// The command did not draw or move (push and pop included)
    Other,
}

/// Replays movement, push and pop for one page.
///
/// The cursor starts at the origin. `set_char` advances `x` by one unit since
/// glyph widths are not known; `put_char` and rules do not move. The `w0`,
/// `x0`, `y0` and `z0` forms move by nothing because spacing registers are not
/// modelled.
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    cursor: Cursor,
    stack: Vec<Cursor>,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of saved positions.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Apply one command.
    pub fn apply(&mut self, command: &Command) -> Step {
        match command {
            Command::SetChar { code } => {
                let at = self.cursor;
                self.cursor.x = self.cursor.x.wrapping_add(1);
                Step::Char { code: *code, at }
            }
            Command::PutChar { code } => Step::Char {
                code: *code,
                at: self.cursor,
            },
            Command::Right { distance }
            | Command::W { distance }
            | Command::X { distance } => {
                self.cursor.x = self.cursor.x.wrapping_add(*distance);
                Step::Moved(self.cursor)
            }
            Command::Down { distance }
            | Command::Y { distance }
            | Command::Z { distance } => {
                self.cursor.y = self.cursor.y.wrapping_add(*distance);
                Step::Moved(self.cursor)
            }
            Command::Push => {
                self.stack.push(self.cursor);
                Step::Other
            }
            Command::Pop => {
                // An unbalanced pop falls back to the origin.
                self.cursor = self.stack.pop().unwrap_or_default();
                Step::Other
            }
            _ => Step::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_char_advances_put_char_does_not() {
        let mut tracker = PositionTracker::new();
        let step = tracker.apply(&Command::SetChar { code: 72 });
        assert_eq!(
            step,
            Step::Char {
                code: 72,
                at: Cursor::new(0, 0)
            }
        );
        assert_eq!(tracker.cursor(), Cursor::new(1, 0));

        let step = tracker.apply(&Command::PutChar { code: 73 });
        assert_eq!(
            step,
            Step::Char {
                code: 73,
                at: Cursor::new(1, 0)
            }
        );
        assert_eq!(tracker.cursor(), Cursor::new(1, 0));
    }

    #[test]
    fn test_movement_families() {
        let mut tracker = PositionTracker::new();
        tracker.apply(&Command::Right { distance: 10 });
        tracker.apply(&Command::W { distance: 2 });
        tracker.apply(&Command::X { distance: -3 });
        tracker.apply(&Command::Down { distance: 5 });
        tracker.apply(&Command::Y { distance: 1 });
        let step = tracker.apply(&Command::Z { distance: 1 });
        assert_eq!(step, Step::Moved(Cursor::new(9, 7)));

        assert_eq!(tracker.apply(&Command::W0), Step::Other);
        assert_eq!(tracker.apply(&Command::Z0), Step::Other);
        assert_eq!(tracker.cursor(), Cursor::new(9, 7));
    }

    #[test]
    fn test_pop_restores_pushed_cursor() {
        let mut tracker = PositionTracker::new();
        tracker.apply(&Command::Right { distance: 40 });
        tracker.apply(&Command::Push);
        assert_eq!(tracker.depth(), 1);
        tracker.apply(&Command::Down { distance: 12 });
        tracker.apply(&Command::SetChar { code: 65 });
        tracker.apply(&Command::Pop);
        assert_eq!(tracker.cursor(), Cursor::new(40, 0));
        assert_eq!(tracker.depth(), 0);
    }

    #[test]
    fn test_pop_on_empty_stack_resets_to_origin() {
        let mut tracker = PositionTracker::new();
        tracker.apply(&Command::Right { distance: 7 });
        tracker.apply(&Command::Pop);
        assert_eq!(tracker.cursor(), Cursor::default());
    }

    #[test]
    fn test_rules_do_not_move() {
        let mut tracker = PositionTracker::new();
        let step = tracker.apply(&Command::SetRule {
            height: 5,
            width: 100,
        });
        assert_eq!(step, Step::Other);
        assert_eq!(tracker.cursor(), Cursor::default());
    }
}
