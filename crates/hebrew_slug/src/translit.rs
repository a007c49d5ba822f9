/// Returns the Latin approximation for a Hebrew letter, or `None` for any
/// other character. Final (sofit) forms map to the same string as their
/// regular counterparts.
fn latin_equivalent(c: char) -> Option<&'static str> {
    match c {
        'א' => Some("a"),
        'ב' => Some("b"),
        'ג' => Some("g"),
        'ד' => Some("d"),
        'ה' => Some("h"),
        'ו' => Some("v"),
        'ז' => Some("z"),
        'ח' => Some("ch"),
        'ט' => Some("t"),
        'י' => Some("y"),
        'כ' | 'ך' => Some("k"),
        'ל' => Some("l"),
        'מ' | 'ם' => Some("m"),
        'נ' | 'ן' => Some("n"),
        'ס' => Some("s"),
        'ע' => Some("a"),
        'פ' | 'ף' => Some("p"),
        'צ' | 'ץ' => Some("ts"),
        'ק' => Some("k"),
        'ר' => Some("r"),
        'ש' => Some("sh"),
        'ת' => Some("t"),
        _ => None,
    }
}

/// Replaces every Hebrew letter with its Latin approximation; all other
/// characters pass through unchanged.
pub(crate) fn transliterate(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match latin_equivalent(c) {
            Some(latin) => result.push_str(latin),
            None => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::{latin_equivalent, transliterate};

    #[test]
    fn test_maps_the_full_alphabet() {
        assert_eq!(transliterate("אבגדהוזחטיכלמנסעפצקרשת"), "abgdhvzchtyklmnsaptskrsht");
    }

    #[test]
    fn test_sofit_forms_match_their_regular_counterparts() {
        for (sofit, regular) in [('ך', 'כ'), ('ם', 'מ'), ('ן', 'נ'), ('ף', 'פ'), ('ץ', 'צ')] {
            assert_eq!(latin_equivalent(sofit), latin_equivalent(regular));
        }
    }

    #[test]
    fn test_mapped_values_are_short_lowercase_ascii() {
        for c in '\u{05D0}'..='\u{05EA}' {
            if let Some(latin) = latin_equivalent(c) {
                assert!(!latin.is_empty() && latin.len() <= 2);
                assert!(latin.chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn test_passes_other_scripts_through() {
        assert_eq!(transliterate("abc 123 !?"), "abc 123 !?");
        assert_eq!(transliterate("שלום Hello"), "shlvm Hello");
    }
}
