/*
 * Orthographic normalization of Persian words. Persian text found in the wild mixes Arabic code
 * points with their Persian counterparts (Arabic kaf and yeh are the usual suspects) and uses the
 * zero-width non-joiner between the parts of compound words. Every lookup in this crate happens on
 * the normalized form.
*/
use std::borrow::Cow;

/// Zero-width non-joiner, replaced by an ordinary space.
pub const ZWNJ: char = '\u{200C}';

/// Fixed substitution table, applied character by character. No target character is also a
/// source character, which makes `normalize` idempotent.
const SUBSTITUTIONS: [(char, char); 7] = [
    ('\u{0626}', '\u{06CC}'), // yeh with hamza above -> Persian yeh
    ('\u{0643}', '\u{06A9}'), // Arabic kaf -> keheh
    ('\u{064A}', '\u{06CC}'), // Arabic yeh -> Persian yeh
    ('\u{0649}', '\u{06CC}'), // alef maksura -> Persian yeh
    ('\u{0624}', '\u{0648}'), // waw with hamza above -> waw
    ('\u{0625}', '\u{0627}'), // alef with hamza below -> alef
    (ZWNJ, ' '),
];

#[inline]
fn substitute(ch: char) -> Option<char> {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

/// Folds the orthographic variants of a word into their canonical Persian form. The function is
/// pure and does not allocate when the word is already normalized.
///
/// ```rust
/// use lemmafa::normalize;
///
/// assert_eq!(normalize("كتاب"), "کتاب");
/// assert_eq!(normalize("کتاب\u{200C}ها"), "کتاب ها");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(word: &str) -> Cow<'_, str> {
    let first = match word.char_indices().find(|(_, c)| substitute(*c).is_some()) {
        Some((i, _)) => i,
        None => return Cow::Borrowed(word),
    };
    let mut normalized = String::with_capacity(word.len());
    normalized.push_str(&word[..first]);
    for ch in word[first..].chars() {
        normalized.push(substitute(ch).unwrap_or(ch));
    }
    Cow::Owned(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{self, TestResult};
    use quickcheck_macros::quickcheck as quickcheck_test;
    use rstest::rstest;

    #[rstest]
    #[case("مسئله", "مسیله")]
    #[case("كتاب", "کتاب")]
    #[case("علي", "علی")]
    #[case("موسى", "موسی")]
    #[case("مؤمن", "مومن")]
    #[case("إسلام", "اسلام")]
    #[case("می\u{200C}روم", "می روم")]
    fn test_normalize_variants(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_borrows_when_unchanged() {
        let actual = normalize("کتاب");
        assert!(matches!(actual, Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_keeps_unrelated_characters() {
        assert_eq!(normalize("abc ۱۲۳ گل"), "abc ۱۲۳ گل");
    }

    /// Characters drawn from the substitution table and a few Persian letters, so that random
    /// words actually exercise the substitutions.
    #[derive(Debug, Clone)]
    struct PersianishWord(String);

    impl quickcheck::Arbitrary for PersianishWord {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let alphabet: Vec<char> = SUBSTITUTIONS
                .iter()
                .flat_map(|(from, to)| [*from, *to])
                .chain(['ک', 'گ', 'ا', 'ب', 'ه', 'a'])
                .collect();
            let len = <usize as quickcheck::Arbitrary>::arbitrary(g) % 12;
            let word = (0..len)
                .map(|_| *g.choose(alphabet.as_ref()).unwrap())
                .collect();
            PersianishWord(word)
        }
    }

    #[test]
    fn test_propertie_normalize_is_idempotent() {
        fn propertie_idempotent(word: PersianishWord) -> TestResult {
            let once = normalize(&word.0).into_owned();
            let twice = normalize(&once).into_owned();
            TestResult::from_bool(once == twice)
        }
        fn propertie_idempotent_any_string(word: String) -> TestResult {
            let once = normalize(&word).into_owned();
            TestResult::from_bool(normalize(&once) == once)
        }
        let mut qc = quickcheck::QuickCheck::new().tests(2000);
        qc.quickcheck(propertie_idempotent as fn(PersianishWord) -> TestResult);
        qc.quickcheck(propertie_idempotent_any_string as fn(String) -> TestResult);
    }

    #[quickcheck_test]
    fn normalize_never_changes_char_count(word: String) -> bool {
        normalize(&word).chars().count() == word.chars().count()
    }
}
