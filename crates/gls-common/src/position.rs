//! Position and range types for LSP.
//!
//! Both the indexer and the editor speak in 0-indexed line/column pairs, so
//! unlike a compiler front end there is no byte-offset layer here.

use std::cmp::Ordering;

/// A position in a source file (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// 0-indexed line number
    pub line: u32,
    /// 0-indexed column (UTF-16 code units for LSP compatibility)
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Position { line, character }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then(self.character.cmp(&other.character))
    }
}

/// A range in a source file. `end` is exclusive for text but inclusive for
/// cursor hits: a cursor parked right after the last character is still
/// "in" the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Range { start, end }
    }

    /// Shorthand for a range on a single line.
    pub fn on_line(line: u32, start_character: u32, end_character: u32) -> Self {
        Range {
            start: Position::new(line, start_character),
            end: Position::new(line, end_character),
        }
    }

    /// Whether a cursor at `position` falls inside this range.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether `other` lies entirely within this range.
    pub fn encloses(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Start after end. Indexers occasionally emit these for synthetic nodes.
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(0, 10) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert_eq!(
            Position::new(5, 5).cmp(&Position::new(5, 5)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_range_contains_is_end_inclusive() {
        let range = Range::on_line(3, 4, 8);
        assert!(range.contains(Position::new(3, 4)));
        assert!(range.contains(Position::new(3, 8)));
        assert!(!range.contains(Position::new(3, 9)));
        assert!(!range.contains(Position::new(2, 6)));
    }

    #[test]
    fn test_multiline_range_contains() {
        let range = Range::new(Position::new(1, 10), Position::new(4, 1));
        assert!(range.contains(Position::new(2, 0)));
        assert!(range.contains(Position::new(1, 10)));
        assert!(!range.contains(Position::new(1, 9)));
        assert!(!range.contains(Position::new(4, 2)));
    }

    #[test]
    fn test_encloses() {
        let outer = Range::new(Position::new(0, 0), Position::new(10, 0));
        let inner = Range::on_line(3, 2, 9);
        assert!(outer.encloses(&inner));
        assert!(!inner.encloses(&outer));
        assert!(inner.encloses(&inner));
    }

    #[test]
    fn test_inverted_range() {
        assert!(Range::new(Position::new(2, 0), Position::new(1, 0)).is_inverted());
        assert!(!Range::on_line(1, 0, 0).is_inverted());
    }

    #[test]
    fn test_position_serde_shape() {
        let json = serde_json::to_string(&Position::new(3, 7)).unwrap();
        assert_eq!(json, r#"{"line":3,"character":7}"#);
    }
}
