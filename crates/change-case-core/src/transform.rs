//! Line-local application of a transformation to extracted text.

use crate::line_ending::LineEnding;
use crate::selection::Range;

/// Result of transforming the text of one range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    /// Replacement text.
    pub replacement: String,
    /// Change in length (characters) of the range's last line.
    pub length_delta: isize,
}

fn char_len(text: &str) -> isize {
    text.chars().count() as isize
}

/// Apply `transform` to `text`, the content of `range`.
///
/// A single-line range is transformed as a whole. A multi-line range is split on its line
/// terminators, each line is transformed independently and the lines are joined again with the
/// terminators they had; the reported delta only covers the last line, since only the last line
/// moves the range's end.
pub fn apply_transformation<F>(text: &str, range: Range, transform: &F) -> Transformed
where
    F: Fn(&str) -> String + ?Sized,
{
    if range.is_single_line() {
        let replacement = transform(text);
        let length_delta = char_len(&replacement) - char_len(text);
        return Transformed {
            replacement,
            length_delta,
        };
    }

    let lines = LineEnding::split_lines(text);
    let mut replacement = String::with_capacity(text.len());
    let mut length_delta = 0;
    for &(line, ending) in &lines {
        let converted = transform(line);
        replacement.push_str(&converted);
        match ending {
            Some(ending) => replacement.push_str(ending.as_str()),
            None => length_delta = char_len(&converted) - char_len(line),
        }
    }

    Transformed {
        replacement,
        length_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Position;
    use pretty_assertions::assert_eq;

    fn shout(text: &str) -> String {
        format!("{}!", text.to_uppercase())
    }

    #[test]
    fn test_single_line_delta_is_full_length_change() {
        let t = apply_transformation("abc", Range::on_line(0, 0, 3), &shout);
        assert_eq!(t.replacement, "ABC!");
        assert_eq!(t.length_delta, 1);
    }

    #[test]
    fn test_multi_line_transforms_each_line_and_reports_last_line_delta() {
        let range = Range::new(Position::new(0, 0), Position::new(2, 2));
        let t = apply_transformation("first\nsecond\nxy", range, &|s: &str| s.repeat(2));
        assert_eq!(t.replacement, "firstfirst\nsecondsecond\nxyxy");
        assert_eq!(t.length_delta, 2);
    }

    #[test]
    fn test_multi_line_keeps_each_terminator() {
        let range = Range::new(Position::new(0, 0), Position::new(3, 1));
        let t = apply_transformation("ab\r\nc\nd\re", range, &shout);
        assert_eq!(t.replacement, "AB!\r\nC!\nD!\rE!");
        assert_eq!(t.length_delta, 1);
    }

    #[test]
    fn test_transform_never_sees_a_terminator() {
        let range = Range::new(Position::new(0, 0), Position::new(1, 13));
        let t = apply_transformation("Hello World\rGoodbye World", range, &|s: &str| {
            assert!(!s.contains(['\r', '\n']));
            s.replace(' ', "_")
        });
        assert_eq!(t.replacement, "Hello_World\rGoodbye_World");
        assert_eq!(t.length_delta, 0);
    }

    #[test]
    fn test_shrinking_transform_has_negative_delta() {
        let t = apply_transformation("a-b-c", Range::on_line(3, 0, 5), &|s: &str| {
            s.replace('-', "")
        });
        assert_eq!(t.replacement, "abc");
        assert_eq!(t.length_delta, -2);
    }

    #[test]
    fn test_delta_counts_chars_not_bytes() {
        let t = apply_transformation("é", Range::on_line(0, 0, 1), &|_: &str| "e".to_string());
        assert_eq!(t.length_delta, 0);
    }
}
