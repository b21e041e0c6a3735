//! Input adapter: parses a text grid into clue values.
//!
//! The file format is 9 data lines of 9 whitespace-separated tokens. Digit
//! tokens are clues; any other token (`_`, `.`, `0`, ...) marks an empty
//! cell. Lines shorter than 9 characters are treated as separators (blank
//! lines, box rules) and skipped.

use derive_more::{Display, Error};

/// Errors produced while parsing a puzzle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// A data line did not contain exactly 9 tokens.
    #[display("line {line}: expected 9 values, found {found}")]
    BadRowLength {
        /// 1-based line number in the file.
        line: usize,
        /// Number of tokens found.
        found: usize,
    },
    /// The file did not contain exactly 9 data lines.
    #[display("expected 9 rows, found {found}")]
    BadRowCount {
        /// Number of data lines found.
        found: usize,
    },
}

/// Parses the text of a puzzle file into a 9×9 array of clue values.
///
/// # Errors
///
/// Returns [`ParseError`] if a data line does not hold exactly 9 tokens or
/// the file does not hold exactly 9 data lines.
pub fn parse_grid(text: &str) -> Result<[[u8; 9]; 9], ParseError> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.len() < 9 {
            continue;
        }
        let mut row = [0_u8; 9];
        let mut found = 0;
        for token in line.split_whitespace() {
            if found < 9 {
                row[found] = parse_token(token);
            }
            found += 1;
        }
        if found != 9 {
            return Err(ParseError::BadRowLength {
                line: line_no + 1,
                found,
            });
        }
        rows.push(row);
    }

    let found = rows.len();
    rows.try_into()
        .map_err(|_| ParseError::BadRowCount { found })
}

/// Maps a token to a clue value; anything that is not a number means empty.
fn parse_token(token: &str) -> u8 {
    token.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_underscore_format() {
        let text = "\
5 3 _ _ 7 _ _ _ _
6 _ _ 1 9 5 _ _ _
_ 9 8 _ _ _ _ 6 _
8 _ _ _ 6 _ _ _ 3
4 _ _ 8 _ 3 _ _ 1
7 _ _ _ 2 _ _ _ 6
_ 6 _ _ _ _ 2 8 _
_ _ _ 4 1 9 _ _ 5
_ _ _ _ 8 _ _ 7 9
";
        let values = parse_grid(text).unwrap();
        assert_eq!(values[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(values[8], [0, 0, 0, 0, 8, 0, 0, 7, 9]);
    }

    #[test]
    fn test_short_lines_are_skipped() {
        let text = "\
1 2 3 4 5 6 7 8 9

_ _ _ _ _ _ _ _ _
---
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
_ _ _ _ _ _ _ _ _
";
        let values = parse_grid(text).unwrap();
        assert_eq!(values[0], [1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(values[1], [0; 9]);
    }

    #[test]
    fn test_non_digit_tokens_mean_empty() {
        let line = "1 . x _ 5 ? * - 9\n";
        let text = line.repeat(9);
        let values = parse_grid(&text).unwrap();
        assert_eq!(values[0], [1, 0, 0, 0, 5, 0, 0, 0, 9]);
    }

    #[test]
    fn test_bad_row_length() {
        let mut text = "1 2 3 4 5 6 7 8 9\n".repeat(8);
        text.push_str("1 2 3 4 5 6 7 8\n");
        assert_eq!(
            parse_grid(&text),
            Err(ParseError::BadRowLength { line: 9, found: 8 })
        );
    }

    #[test]
    fn test_bad_row_count() {
        let text = "1 2 3 4 5 6 7 8 9\n".repeat(7);
        assert_eq!(parse_grid(&text), Err(ParseError::BadRowCount { found: 7 }));
    }
}
