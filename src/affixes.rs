/*
 * Affix tables and the two affix stripping strategies of the lemmatizer. A table is an ordered
 * sequence: the first affix that yields a dictionary hit wins, so the order (duplicates included)
 * is part of the behaviour and must not be sorted or deduplicated.
*/
use crate::dictionary::{lookup, LemmaDictionary};
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::slice::Iter;

/// Persian derivational and inflectional suffixes, in the order they are tried.
pub const PERSIAN_SUFFIXES: &[&str] = &[
    "ها", "ی", "تر", "ترین", "انه", "یی", "آسا", "آگین", "او", "اومند", "اور", "ا",
    "گین", "اده", "ار", "اک", "ال", "اله", "ُم", "ان", "انه", "یک", "ین", "ینه", "انی",
    "بان", "بد", "تر", "ترین", "چه", "دان", "دیس", "زار", "سار", "سان", "ِستان", "وش",
    "سیر", "ِش", "فام", "َک", "وند", "کده", "گار", "گاه", "گاه", "گر", "گری", "گون",
    "لاخ", "مان", "مند", "نا", "ناک", "ند", "نده", "وار", "وار", "واره", "واری", "ور",
    "ه", "ی", "گرا", "شده", "گوش", "مندی", "گر", "گین", "ری", "ور", "یده", "کار", "یابی",
    "یافته", "ده", "ش", "ساز", "نامه", "شده", "خوار", "بند", "ساز", "ساز", "جوی", "شناس",
    "خوار", "شناس", "ند", "آور", "طلب", "آورده", "آوری", "جویی", "گر", "ناکی", "گونه",
    "گون", "ای", "یی", "شان", "یگر", "یانه", "ه\u{200C}ای", "تار", "گره", "لگن", "گان",
    "پذیر", "کن", "پوی", "زن", "گون", "نی", "گانه", "شناس", "پذیر", "پرداز", "حس",
    "هایت", "هایم", "هایش", "م", "ن", "ی",
];

/// Persian prefixes, in the order they are tried.
pub const PERSIAN_PREFIXES: &[&str] = &[
    "با", "بی", "نا", "دی", "به", "اندر", "ب", "باز", "بر", "بس", "بیش", "پاد", "پت",
    "پرا", "پس", "پسا", "پی", "پیرا", "پیش", "ترا", "تک", "در", "دژ", "دش", "می", "سر",
    "فر", "فرا", "فرو", "نا", "ن", "وا", "ور", "هم", "هو", "ی", "آ", "پیش", "پرا", "ده",
    "تا", "همه", "نیز", "نا", "ره", "به", "دگر", "در", "زیر",
];

/// Which end of the word an affix table is matched against.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Sequence, Serialize, Deserialize)]
pub enum AffixKind {
    Suffix,
    Prefix,
}

impl Display for AffixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Suffix => write!(f, "suffix"),
            Self::Prefix => write!(f, "prefix"),
        }
    }
}

impl AffixKind {
    /// Removes `affix` from the matching end of `word`, if `word` carries it.
    #[inline]
    fn remove<'a>(&self, word: &'a str, affix: &str) -> Option<&'a str> {
        match self {
            Self::Suffix => word.strip_suffix(affix),
            Self::Prefix => word.strip_prefix(affix),
        }
    }
}

/// Ordered sequence of affixes. Duplicates are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffixTable {
    affixes: Vec<String>,
}

impl AffixTable {
    pub fn new<S: Into<String>>(affixes: impl IntoIterator<Item = S>) -> Self {
        Self {
            affixes: affixes.into_iter().map(Into::into).collect(),
        }
    }

    /// The default Persian suffix table.
    pub fn persian_suffixes() -> Self {
        Self::from(PERSIAN_SUFFIXES)
    }

    /// The default Persian prefix table.
    pub fn persian_prefixes() -> Self {
        Self::from(PERSIAN_PREFIXES)
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.affixes.iter()
    }

    pub fn len(&self) -> usize {
        self.affixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.affixes.is_empty()
    }

    /// Tries every affix in table order and returns the first lemma found, along with the affix
    /// that produced it.
    pub fn find<'a, 'd>(
        &'a self,
        word: &str,
        dictionary: &'d LemmaDictionary,
        kind: AffixKind,
    ) -> Option<(&'a str, &'d str)> {
        self.affixes.iter().find_map(|affix| {
            let candidate = kind.remove(word, affix)?.trim();
            lookup(candidate, dictionary).map(|lemma| (affix.as_str(), lemma))
        })
    }
}

impl From<&[&str]> for AffixTable {
    fn from(value: &[&str]) -> Self {
        Self::new(value.iter().copied())
    }
}

impl From<Vec<String>> for AffixTable {
    fn from(value: Vec<String>) -> Self {
        Self { affixes: value }
    }
}

impl<'a> IntoIterator for &'a AffixTable {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Strips the first suffix of `affixes` whose removal leaves a dictionary word and returns the
/// lemma of that word. When nothing matches, `word` itself is returned.
pub fn strip_suffix<'a>(
    word: &'a str,
    dictionary: &'a LemmaDictionary,
    affixes: &AffixTable,
) -> &'a str {
    affixes
        .find(word, dictionary, AffixKind::Suffix)
        .map_or(word, |(_, lemma)| lemma)
}

/// Same as `strip_suffix`, but the affixes are matched against the start of the word.
pub fn strip_prefix<'a>(
    word: &'a str,
    dictionary: &'a LemmaDictionary,
    affixes: &AffixTable,
) -> &'a str {
    affixes
        .find(word, dictionary, AffixKind::Prefix)
        .map_or(word, |(_, lemma)| lemma)
}
