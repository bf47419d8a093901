//! Locale-aware string ordering for display names.
//!
//! Plain `str::cmp` sorts by code point, which puts every uppercase letter
//! before every lowercase one and pushes accented letters past `z`. Display
//! names are ordered the way a reader expects instead: letters compare
//! without regard to accents or case first, then unaccented before accented,
//! then lowercase before uppercase.

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compares two strings the way an alphabetical listing orders them.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use cbb_insight::data_fetcher::names::locale_cmp;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("Énergie", "Zeta"), Ordering::Less);
/// assert_eq!(locale_cmp("duke", "Duke"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// Base letters only, case-folded
fn primary_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case-folded with accents kept in decomposed form
fn accent_key(s: &str) -> String {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// Lowercase sorts before uppercase at the first case difference
fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.nfd().zip(b.nfd()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(locale_cmp("alabama", "Baylor"), Ordering::Less);
        assert_eq!(locale_cmp("Zags", "arizona"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        let mut names = vec!["Zeta", "Éclair", "Eagle", "Ezra"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Eagle", "Éclair", "Ezra", "Zeta"]);
    }

    #[test]
    fn test_unaccented_before_accented() {
        assert_eq!(locale_cmp("resume", "résumé"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("iowa", "Iowa"), Ordering::Less);
        assert_eq!(locale_cmp("Iowa", "iowa"), Ordering::Greater);
    }

    #[test]
    fn test_equal_strings() {
        assert_eq!(locale_cmp("Duke", "Duke"), Ordering::Equal);
        assert_eq!(locale_cmp("", ""), Ordering::Equal);
        assert_eq!(locale_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn test_composed_and_decomposed_forms_agree_on_primary() {
        let composed = "Jos\u{e9}";
        let decomposed = "Jose\u{301}";
        assert_eq!(primary_key(composed), primary_key(decomposed));
    }
}
