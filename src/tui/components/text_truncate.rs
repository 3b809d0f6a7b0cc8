//! Text fitting helpers for table cells and viewport rows.
//!
//! Widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Longest prefix of `text` that fits in `max_width` columns, together with
/// its width.
fn clip(text: &str, max_width: usize) -> (&str, usize) {
    let mut used = 0_usize;
    for (offset, ch) in text.char_indices() {
        let next = used.saturating_add(ch.width().unwrap_or(0));
        if next > max_width {
            return (text.get(..offset).unwrap_or_default(), used);
        }
        used = next;
    }
    (text, used)
}

fn padded(prefix: &str, used: usize, width: usize) -> String {
    let mut line = String::with_capacity(prefix.len().saturating_add(width));
    line.push_str(prefix);
    line.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    line
}

/// Cuts `text` at `width` columns and pads the remainder with spaces.
pub(crate) fn clip_to_width(text: &str, width: usize) -> String {
    let (prefix, used) = clip(text, width);
    padded(prefix, used, width)
}

/// Fits text into exactly `width` columns: cut with a trailing `…` when too
/// wide, padded with spaces otherwise.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width || width == 0 {
        return clip_to_width(text, width);
    }
    let (prefix, used) = clip(text, width.saturating_sub(1));
    let mut cell = prefix.to_owned();
    cell.push(ELLIPSIS);
    padded(&cell, used.saturating_add(1), width)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::fits("8.5", 6, "8.5   ")]
    #[case::exact("Accept", 6, "Accept")]
    #[case::too_long("a.very.long@example.edu", 10, "a.very.lo…")]
    #[case::single_column("abc", 1, "…")]
    #[case::zero_width("abc", 0, "")]
    fn fit_to_width_cases(#[case] text: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(fit_to_width(text, width), expected);
    }

    #[test]
    fn wide_characters_never_overflow_the_cell() {
        let cell = fit_to_width("你好世界", 5);
        assert_eq!(cell, "你好…");
        assert_eq!(cell.width(), 5);
    }

    #[test]
    fn clip_pads_short_rows_and_cuts_long_ones() {
        assert_eq!(clip_to_width("Page 1/3", 10), "Page 1/3  ");
        assert_eq!(clip_to_width("Job Applications", 3), "Job");
    }

    #[test]
    fn clip_does_not_split_a_wide_character() {
        assert_eq!(clip_to_width("你好", 3), "你 ");
    }
}
