use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

// Root locale, tertiary strength, punctuation non-ignorable: the same
// defaults `String.prototype.localeCompare` gets from ICU.
thread_local! {
    static ROOT: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Locale-aware string comparison in the manner of `String.prototype.localeCompare`
/// under the root locale. Canonically equivalent strings compare Equal.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT.with(|collator| match collator {
        Some(c) => c.compare(a, b),
        None => {
            log::warn!("root collator unavailable; comparing by code point");
            a.cmp(b)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<&str>) -> Vec<&str> {
        items.sort_by(|a, b| locale_compare(a, b));
        items
    }

    #[test]
    fn letters_ignore_case_at_primary_level() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("Zebra", "apple"), Ordering::Greater);
    }

    #[test]
    fn lowercase_sorts_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("ab", "Ab"), Ordering::Less);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("éclair", "ezra"), Ordering::Less);
        assert_eq!(locale_compare("eclair", "éclair"), Ordering::Less);
    }

    #[test]
    fn canonically_equivalent_strings_are_equal() {
        assert_eq!(locale_compare("caf\u{e9}", "cafe\u{301}"), Ordering::Equal);
    }

    #[test]
    fn digits_sort_before_letters_and_prefix_sorts_first() {
        assert_eq!(locale_compare("9", "a"), Ordering::Less);
        assert_eq!(locale_compare("Bob", "Bobby"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
    }

    // Expected order captured from node: `xs.sort((a, b) => a.localeCompare(b))`.
    #[test]
    fn punctuation_follows_root_order() {
        assert_eq!(
            sorted(vec!["a@b", "a.b", "a_b", "a-b"]),
            vec!["a_b", "a-b", "a.b", "a@b"]
        );
        assert_eq!(
            sorted(vec!["Oa", "O'Brien", "O-Brien"]),
            vec!["O-Brien", "O'Brien", "Oa"]
        );
    }

    #[test]
    fn non_decomposing_letters_sort_with_their_base() {
        assert_eq!(
            sorted(vec!["Straße", "Strat", "Strasse"]),
            vec!["Strasse", "Straße", "Strat"]
        );
        assert_eq!(sorted(vec!["Af", "Æsir", "Ad"]), vec!["Ad", "Æsir", "Af"]);
        assert_eq!(sorted(vec!["Oz", "Øyvind", "Oa"]), vec!["Oa", "Øyvind", "Oz"]);
        assert_eq!(sorted(vec!["Łukasz", "Lukasz"]), vec!["Lukasz", "Łukasz"]);
        assert_eq!(locale_compare("Łukasz", "Mara"), Ordering::Less);
    }
}
