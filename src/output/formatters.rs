//! Formatting utilities for terminal output

use crate::core::letter_count;

/// Circled-number badge for a word's length
///
/// Lengths 1-20 map to ① … ⑳; anything else is written in parentheses.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = letter_count(word);
    match u32::try_from(len) {
        Ok(n @ 1..=20) => {
            char::from_u32(0x2460 + n - 1).map_or_else(|| format!("({len})"), String::from)
        }
        _ => format!("({len})"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the best possible score has been reached
#[must_use]
pub fn score_bar(score: u32, max_score: u32, width: usize) -> String {
    create_progress_bar(f64::from(score), f64::from(max_score), width)
}

/// Spread a word's letters out for display: `STONE` -> `S T O N E`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_badge_circled() {
        assert_eq!(length_badge("a"), "①");
        assert_eq!(length_badge("stone"), "⑤");
        assert_eq!(length_badge("silkworm"), "⑧");
    }

    #[test]
    fn length_badge_out_of_range() {
        assert_eq!(length_badge(""), "(0)");
        assert_eq!(length_badge(&"a".repeat(21)), "(21)");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn score_bar_clamps() {
        assert_eq!(score_bar(30, 20, 4), "████");
    }

    #[test]
    fn spaced_letters_uppercases() {
        assert_eq!(spaced_letters("stone"), "S T O N E");
        assert_eq!(spaced_letters(""), "");
    }
}
