//! Line wrapping and truncation against font metrics
//!
//! The lines returned by [`measure_lines`] are used twice: to size a block and
//! then to draw it, so a box is always exactly as tall as its content.

use super::text_metrics::{FontStyle, TextMeasure};

pub const ELLIPSIS: &str = "…";

/// Greedy word wrap of `text` into lines no wider than `max_width` mm.
///
/// Explicit newlines start a new line; a word wider than the column is broken
/// between characters. Blank text yields no lines.
pub fn measure_lines<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f32,
    font_size: f32,
    style: FontStyle,
    measurer: &M,
) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let fits = |s: &str| measurer.measure_text(s, font_size, style) <= max_width;
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                if fits(word) {
                    current.push_str(word);
                } else {
                    current = break_word(word, &fits, &mut lines);
                }
                continue;
            }

            let candidate = format!("{} {}", current, word);
            if fits(&candidate) {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                if fits(word) {
                    current.push_str(word);
                } else {
                    current = break_word(word, &fits, &mut lines);
                }
            }
        }

        lines.push(current);
    }

    // Trailing blank paragraphs add nothing to draw
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines
}

/// Split an overlong word across lines; returns the unfinished tail.
///
/// A glyph wider than the column on its own ends the word with `…`, or with
/// nothing when the ellipsis does not fit either.
fn break_word<F: Fn(&str) -> bool>(word: &str, fits: &F, lines: &mut Vec<String>) -> String {
    let mut current = String::new();
    for c in word.chars() {
        current.push(c);
        if fits(&current) {
            continue;
        }
        if current.chars().count() > 1 {
            current.pop();
            lines.push(std::mem::take(&mut current));
            current.push(c);
        }
        if !fits(&current) {
            current.clear();
            if fits(ELLIPSIS) {
                lines.push(ELLIPSIS.to_string());
            }
            break;
        }
    }
    current
}

/// Shorten `text` to fit `max_width` mm, marking the cut with an ellipsis.
///
/// Returns the text unchanged when it fits. Otherwise trailing characters are
/// removed one at a time until the remainder plus `…` fits; when not even the
/// ellipsis fits the result is empty.
pub fn truncate_to_width<M: TextMeasure + ?Sized>(
    text: &str,
    max_width: f32,
    font_size: f32,
    style: FontStyle,
    measurer: &M,
) -> String {
    if measurer.measure_text(text, font_size, style) <= max_width {
        return text.to_string();
    }

    let mut kept: Vec<char> = text.chars().collect();
    while !kept.is_empty() {
        kept.pop();
        let candidate = format!("{}{}", kept.iter().collect::<String>().trim_end(), ELLIPSIS);
        if measurer.measure_text(&candidate, font_size, style) <= max_width {
            return candidate;
        }
    }

    if measurer.measure_text(ELLIPSIS, font_size, style) <= max_width {
        ELLIPSIS.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::text_metrics::HelveticaMetrics;

    fn width(s: &str) -> f32 {
        HelveticaMetrics.measure_text(s, 10.0, FontStyle::REGULAR)
    }

    #[test]
    fn test_short_text_is_one_line() {
        let lines = measure_lines("Dell Latitude", 100.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics);
        assert_eq!(lines, vec!["Dell Latitude"]);
    }

    #[test]
    fn test_wraps_on_words_within_width() {
        let text = "Remplacement du disque dur et réinstallation complète du poste utilisateur";
        let lines = measure_lines(text, 40.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(width(line) <= 40.0, "{:?} too wide", line);
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_explicit_newlines_are_kept() {
        let lines = measure_lines("RAM: 16 Go\nCPU: i7", 100.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics);
        assert_eq!(lines, vec!["RAM: 16 Go", "CPU: i7"]);
    }

    #[test]
    fn test_overlong_word_is_broken() {
        let serial = "SN-0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let lines = measure_lines(serial, 20.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics);
        assert!(lines.len() > 1);
        assert_eq!(lines.concat(), serial);
        for line in &lines {
            assert!(width(line) <= 20.0);
        }
    }

    /// One millimetre per character, except a very wide `X`
    struct WideX;

    impl TextMeasure for WideX {
        fn measure_text(&self, text: &str, _font_size: f32, _style: FontStyle) -> f32 {
            text.chars().map(|c| if c == 'X' { 5.0 } else { 1.0 }).sum()
        }
    }

    #[test]
    fn test_glyph_wider_than_column_is_cut() {
        let lines = measure_lines("abXcd", 3.0, 10.0, FontStyle::REGULAR, &WideX);
        assert_eq!(lines, vec!["ab".to_string(), ELLIPSIS.to_string()]);

        // "i" fits in 1.5 mm at 10 pt, "W" and the ellipsis do not
        let lines = measure_lines("iW", 1.5, 10.0, FontStyle::REGULAR, &HelveticaMetrics);
        assert_eq!(lines, vec!["i"]);
    }

    #[test]
    fn test_blank_text_has_no_lines() {
        assert!(measure_lines("   ", 50.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics).is_empty());
    }

    #[test]
    fn test_truncate_keeps_fitting_text() {
        assert_eq!(
            truncate_to_width("Portable", 50.0, 10.0, FontStyle::REGULAR, &HelveticaMetrics),
            "Portable"
        );
    }

    #[test]
    fn test_truncate_fits_and_ends_with_ellipsis() {
        let text = "Station de travail graphique";
        for max in [5.0_f32, 10.0, 15.0, 22.0, 30.0] {
            let s = truncate_to_width(text, max, 10.0, FontStyle::BOLD, &HelveticaMetrics);
            assert!(HelveticaMetrics.measure_text(&s, 10.0, FontStyle::BOLD) <= max);
            assert!(s == text || s.ends_with(ELLIPSIS) || s.is_empty(), "{:?}", s);
        }
    }

    #[test]
    fn test_truncate_too_narrow_for_ellipsis() {
        assert_eq!(
            truncate_to_width("Serveur", 0.5, 10.0, FontStyle::REGULAR, &HelveticaMetrics),
            ""
        );
    }
}
