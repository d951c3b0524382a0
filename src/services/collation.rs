//! Locale-aware name comparison
//!
//! A three-level comparison in the style of the Unicode collation
//! algorithm: letters first (ignoring accents and case), then accents,
//! then case with lowercase ordered before uppercase. Strings equal at all
//! three levels compare `Equal`, so a stable sort keeps their source order.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two display names for sorting
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| secondary_key(a).cmp(&secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(&tertiary_key(b)))
}

/// Base letters only, case folded
fn primary_key(s: &str) -> Vec<char> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Case folded with accents kept; unaccented letters sort first
fn secondary_key(s: &str) -> Vec<char> {
    s.nfd().flat_map(char::to_lowercase).collect()
}

/// One flag per base letter, `false` (lowercase) before `true` (uppercase)
fn tertiary_key(s: &str) -> Vec<bool> {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn test_case_does_not_dominate() {
        assert_eq!(
            sorted(&["banana", "Apple", "cherry"]),
            vec!["Apple", "banana", "cherry"]
        );
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_compare("Apple", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_accents_sort_near_base_letter() {
        assert_eq!(
            sorted(&["eclair", "zebra", "éclair", "ecru"]),
            vec!["eclair", "éclair", "ecru", "zebra"]
        );
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(
            sorted(&["Seagate Exos", "10Gtek HBA", "Corsair RM750x"]),
            vec!["10Gtek HBA", "Corsair RM750x", "Seagate Exos"]
        );
    }

    #[test]
    fn test_identical_names_are_equal() {
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }

    #[test]
    fn test_composed_and_decomposed_forms_are_equal() {
        assert_eq!(locale_compare("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }
}
