//! Typed-prefix extraction.

use super::*;

/// The part of `full_text` already typed when the cursor is at `cursor`.
///
/// `range` is where `full_text` starts in the document. The prefix is only
/// non-empty when the cursor sits on the same line, strictly right of the
/// start; it is cut after `cursor - start` UTF-16 units and never extends
/// past the whole text. Any other cursor yields `""`, which matches everything.
pub fn extract_prefix(full_text: &str, range: &Range, cursor: Position) -> String {
    if cursor.line != range.start.line || cursor.character <= range.start.character {
        return String::new();
    }
    let wanted = cursor.character - range.start.character;

    let mut units = 0u32;
    let mut end = 0usize;
    for (i, ch) in full_text.char_indices() {
        let width = ch.len_utf16() as u32;
        if units + width > wanted {
            break;
        }
        units += width;
        end = i + ch.len_utf8();
    }
    full_text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_at(line: u32, character: u32, len: u32) -> Range {
        Range::on_line(line, character, character + len)
    }

    #[test]
    fn test_cursor_mid_identifier() {
        let range = range_at(4, 10, 7);
        assert_eq!(extract_prefix("getName", &range, Position::new(4, 12)), "ge");
    }

    #[test]
    fn test_cursor_at_start_is_empty() {
        let range = range_at(4, 10, 7);
        assert_eq!(extract_prefix("getName", &range, Position::new(4, 10)), "");
    }

    #[test]
    fn test_cursor_left_of_start_is_empty() {
        let range = range_at(4, 10, 7);
        assert_eq!(extract_prefix("getName", &range, Position::new(4, 3)), "");
    }

    #[test]
    fn test_cursor_at_end_is_full_name() {
        let range = range_at(0, 0, 7);
        assert_eq!(extract_prefix("getName", &range, Position::new(0, 7)), "getName");
    }

    #[test]
    fn test_cursor_past_end_clamps() {
        let range = range_at(2, 4, 3);
        assert_eq!(extract_prefix("foo", &range, Position::new(2, 40)), "foo");
    }

    #[test]
    fn test_other_line_is_empty() {
        let range = range_at(2, 4, 3);
        assert_eq!(extract_prefix("foo", &range, Position::new(3, 6)), "");
        assert_eq!(extract_prefix("foo", &range, Position::new(1, 6)), "");
    }

    #[test]
    fn test_empty_text() {
        let range = range_at(0, 0, 0);
        assert_eq!(extract_prefix("", &range, Position::new(0, 3)), "");
    }

    #[test]
    fn test_counts_utf16_units() {
        // `𝒳` is two UTF-16 units; a cursor in its middle must not split it.
        let range = range_at(0, 0, 4);
        assert_eq!(extract_prefix("𝒳ab", &range, Position::new(0, 1)), "");
        assert_eq!(extract_prefix("𝒳ab", &range, Position::new(0, 2)), "𝒳");
        assert_eq!(extract_prefix("𝒳ab", &range, Position::new(0, 3)), "𝒳a");
    }
}
