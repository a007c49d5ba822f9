use std::ops::RangeInclusive;

/// Combining marks for Hebrew vocalization (niqqud) and cantillation.
const VOCALIZATION_MARKS: RangeInclusive<char> = '\u{0591}'..='\u{05C7}';

/// Removes every vocalization mark from the text, leaving all other
/// characters in place.
pub(crate) fn strip_niqqud(text: &str) -> String {
    text.chars()
        .filter(|c| !VOCALIZATION_MARKS.contains(c))
        .collect()
}
