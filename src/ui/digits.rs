//! Large ASCII digit rendering for the countdown number.
//!
//! Terminal stand-in for the original's oversized display font: each digit
//! is a 5-row block-character glyph.

/// Number of rows in every glyph.
pub const GLYPH_ROWS: usize = 5;

/// Glyphs for digits 0-9, each exactly 5 rows of 5 columns.
const GLYPHS: [[&str; GLYPH_ROWS]; 10] = [
    ["█████", "█   █", "█   █", "█   █", "█████"],
    ["   █ ", "  ██ ", "   █ ", "   █ ", "  ███"],
    ["█████", "    █", "█████", "█    ", "█████"],
    ["█████", "    █", " ████", "    █", "█████"],
    ["█   █", "█   █", "█████", "    █", "    █"],
    ["█████", "█    ", "█████", "    █", "█████"],
    ["█████", "█    ", "█████", "█   █", "█████"],
    ["█████", "    █", "   █ ", "  █  ", "  █  "],
    ["█████", "█   █", "█████", "█   █", "█████"],
    ["█████", "█   █", "█████", "    █", "█████"],
];

/// Renders a string of digits as big glyph rows.
///
/// Non-digit characters are skipped; the caller only ever passes the
/// numeric days-remaining value.
pub fn rows(value: &str) -> [String; GLYPH_ROWS] {
    let mut rows: [String; GLYPH_ROWS] = Default::default();
    for c in value.chars() {
        let Some(digit) = c.to_digit(10) else {
            continue;
        };
        let glyph = &GLYPHS[digit as usize];
        for (row, line) in rows.iter_mut().zip(glyph.iter()) {
            if !row.is_empty() {
                row.push_str("  ");
            }
            row.push_str(line);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit_has_five_rows() {
        let rows = rows("7");
        assert_eq!(rows.len(), GLYPH_ROWS);
        for row in &rows {
            assert!(!row.is_empty());
        }
    }

    #[test]
    fn test_all_rows_share_width_for_multi_digit() {
        let rows = rows("120");
        let width = rows[0].chars().count();
        for row in &rows {
            assert_eq!(row.chars().count(), width);
        }
    }

    #[test]
    fn test_all_digits_have_uniform_glyphs() {
        for glyph in &GLYPHS {
            for line in glyph {
                assert_eq!(line.chars().count(), 5);
            }
        }
    }

    #[test]
    fn test_non_digits_are_skipped() {
        assert_eq!(rows("1"), rows("x1y"));
    }

    #[test]
    fn test_empty_value_renders_empty_rows() {
        for row in rows("") {
            assert!(row.is_empty());
        }
    }
}
