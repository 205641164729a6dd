/*!
This library is a rule based lemmatizer for Persian. It maps a word to its dictionary headword
(its lemma) with a lemma dictionary and two ordered tables of affixes. It is meant to be called
once per token by a tokenization pipeline.

# ALGORITHM
For a given word, the following steps are tried in order. The first one that succeeds gives the
lemma:
1. The word is normalized and looked up in the dictionary.
2. Every suffix of the suffix table is tried, in table order. When the word ends with the suffix,
   the suffix is removed, the remaining base is trimmed and looked up in the dictionary.
3. Every prefix of the prefix table is tried the same way, from the start of the word.

If none of these steps succeed, the original word (before normalization) is returned.

The affix tables are ordered sequences and may contain duplicates. The first affix that gives a
dictionary hit wins, even if a longer affix would also match.

# DICTIONARY
The dictionary is a UTF-8 text file with one record per line. A record is made of three fields
separated by a tab: `word<TAB>lemma<TAB>part-of-speech`. Records with a different number of fields
are skipped. The part of speech is not used.

# Terminology
* A lemma is the canonical dictionary form of a word.
* An affix is a substring attached to the start (prefix) or to the end (suffix) of a word.
* A surface form is the word exactly as it appears in the text.
* Normalization folds the visually equivalent variants of a character into a single one, such as
  the Arabic and Persian kaf.
*/

mod affixes;
mod config;
mod dictionary;
mod lemmatizer;
mod normalizer;
mod reporter;

use std::sync::LazyLock;

// The public api starts here
pub use affixes::{
    strip_prefix, strip_suffix, AffixKind, AffixTable, PERSIAN_PREFIXES, PERSIAN_SUFFIXES,
};

pub use config::{LemmatizerConfig, LemmatizerConfigBuilder};

pub use dictionary::{load_dictionary, lookup, LemmaDictionary, LoadError};

pub use lemmatizer::{Lemmatizer, Strategy};

pub use normalizer::{normalize, ZWNJ};

pub use reporter::Reporter;

/// Persian affix tables shared by every call to `lemmatize`.
static PERSIAN_TABLES: LazyLock<(AffixTable, AffixTable)> =
    LazyLock::new(|| (AffixTable::persian_suffixes(), AffixTable::persian_prefixes()));

/// Main entrypoint of the library. Lemmatizes a single word with the Persian affix tables.
///
/// * `word`: Surface form of the word
/// * `dictionary`: Lemma dictionary, keyed by normalized surface forms
///
/// # Example
/// ```rust
/// use lemmafa::{lemmatize, LemmaDictionary};
///
/// let dictionary: LemmaDictionary = vec![("کتاب", "کتاب"), ("رفت", "رفت#رو")]
///     .into_iter()
///     .collect();
///
/// assert_eq!(lemmatize("کتاب\u{200C}ها", &dictionary), "کتاب");
/// assert_eq!(lemmatize("رفت", &dictionary), "رفت#رو");
/// assert_eq!(lemmatize("نامه", &dictionary), "نامه");
/// ```
pub fn lemmatize(word: &str, dictionary: &LemmaDictionary) -> String {
    let (suffixes, prefixes) = &*PERSIAN_TABLES;
    lemmatizer::resolve(word, dictionary, suffixes, prefixes).0
}
