use std::ops::RangeInclusive;
use unicode_segmentation::UnicodeSegmentation;

const EMOJI_RANGES: [RangeInclusive<u32>; 2] = [0x1D000..=0x1F77F, 0x2100..=0x26FF];
const COMBINING_KEYCAP: char = '\u{20E3}';

/// Keeps only ASCII digits. Emoji scalars are removed on their own, so a
/// digit carrying a modifier survives, but a keycap cluster such as `1️⃣`
/// is dropped whole and adds nothing.
pub fn sanitize(text: &str) -> String {
    text.graphemes(true)
        .filter(|grapheme| !grapheme.contains(COMBINING_KEYCAP))
        .flat_map(str::chars)
        .filter(|ch| !is_emoji(*ch))
        .filter(char::is_ascii_digit)
        .collect()
}

pub fn is_emoji(ch: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|range| range.contains(&u32::from(ch)))
}

#[cfg(test)]
mod tests {
    use super::{is_emoji, sanitize};

    #[test]
    fn strips_letters_and_emoji() {
        assert_eq!(sanitize("0a1😀2"), "012");
    }

    #[test]
    fn strips_separators_from_rendered_text() {
        assert_eq!(sanitize("01 / 01 / 2020"), "01012020");
    }

    #[test]
    fn keycap_digits_contribute_nothing() {
        assert_eq!(sanitize("1\u{FE0F}\u{20E3}9"), "9");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(sanitize("٣1"), "1");
    }

    #[test]
    fn modifiers_do_not_take_their_digit_along() {
        assert_eq!(sanitize("1\u{1F3FB}2"), "12");
        assert_eq!(sanitize("3\u{1D165}4"), "34");
        assert_eq!(sanitize("01🏻012020"), "01012020");
    }

    #[test]
    fn emoji_ranges() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('\u{1D000}'));
        assert!(is_emoji('\u{1F77F}'));
        assert!(is_emoji('\u{2100}'));
        assert!(is_emoji('\u{26FF}'));
        assert!(!is_emoji('\u{20FF}'));
        assert!(!is_emoji('\u{2700}'));
        assert!(!is_emoji('\u{1CFFF}'));
        assert!(!is_emoji('\u{1F780}'));
        assert!(!is_emoji('7'));
        assert!(!is_emoji('/'));
    }
}
