use crate::affixes::{strip_prefix, strip_suffix, AffixTable};
use crate::config::LemmatizerConfig;
use crate::dictionary::{lookup, LemmaDictionary};
use crate::normalizer::normalize;
use crate::reporter::Reporter;
use enum_iterator::Sequence;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The step of the lemmatizer that produced the returned lemma.
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Sequence, Serialize, Deserialize,
)]
pub enum Strategy {
    /// The normalized word is a key of the dictionary.
    Exact,
    /// Stripping a suffix left a dictionary word.
    Suffix,
    /// Stripping a prefix left a dictionary word.
    Prefix,
    /// Nothing matched and the original word was returned.
    Unchanged,
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Rule based lemmatizer. It owns a read-only dictionary and the affix tables and can be shared
/// between threads (e.g. behind an `Arc`) without any locking.
///
/// For every word, the following steps are tried in order and the first success is returned:
/// 1. Exact lookup of the normalized word.
/// 2. Suffix stripping of the normalized word.
/// 3. Prefix stripping of the normalized word.
///
/// When every step fails, the *original* word is returned, not its normalized form.
///
/// # Example
///
/// ```rust
/// use lemmafa::{LemmaDictionary, Lemmatizer};
///
/// let dictionary: LemmaDictionary = vec![("کتاب", "کتاب")].into_iter().collect();
/// let lemmatizer = Lemmatizer::new(dictionary);
///
/// assert_eq!(lemmatizer.lemmatize("کتاب\u{200C}ها"), "کتاب");
/// assert_eq!(lemmatizer.lemmatize("نامه"), "نامه");
/// ```
#[derive(Debug, Clone)]
pub struct Lemmatizer {
    dictionary: LemmaDictionary,
    config: LemmatizerConfig,
}

impl Lemmatizer {
    /// Builds a lemmatizer using the Persian affix tables.
    pub fn new(dictionary: LemmaDictionary) -> Self {
        Self::with_config(dictionary, LemmatizerConfig::default())
    }

    pub fn with_config(dictionary: LemmaDictionary, config: LemmatizerConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn dictionary(&self) -> &LemmaDictionary {
        &self.dictionary
    }

    pub fn config(&self) -> &LemmatizerConfig {
        &self.config
    }

    fn suffixes(&self) -> &AffixTable {
        &self.config.suffixes
    }

    fn prefixes(&self) -> &AffixTable {
        &self.config.prefixes
    }

    /// Returns the lemma of `word`, or `word` itself when no lemma could be found.
    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatize_with_strategy(word).0
    }

    /// Returns the lemma of `word` and the strategy that found it.
    pub fn lemmatize_with_strategy(&self, word: &str) -> (String, Strategy) {
        resolve(word, &self.dictionary, self.suffixes(), self.prefixes())
    }

    /// Lemmatizes every token, keeping their order. The tokens are processed on the rayon thread
    /// pool when the config enables parallelism.
    pub fn lemmatize_tokens<S>(&self, tokens: &[S]) -> Vec<String>
    where
        S: AsRef<str> + Sync,
    {
        if self.config.parallel {
            tokens
                .par_iter()
                .map(|t| self.lemmatize(t.as_ref()))
                .collect()
        } else {
            tokens.iter().map(|t| self.lemmatize(t.as_ref())).collect()
        }
    }

    /// Counts how many tokens were resolved by each strategy.
    pub fn report<S>(&self, tokens: &[S]) -> Reporter
    where
        S: AsRef<str> + Sync,
    {
        let strategies: Vec<Strategy> = if self.config.parallel {
            tokens
                .par_iter()
                .map(|t| self.lemmatize_with_strategy(t.as_ref()).1)
                .collect()
        } else {
            tokens
                .iter()
                .map(|t| self.lemmatize_with_strategy(t.as_ref()).1)
                .collect()
        };
        Reporter::from_strategies(strategies)
    }
}

/// Runs the three strategies on `word`, in order, and stops at the first success.
pub(crate) fn resolve(
    word: &str,
    dictionary: &LemmaDictionary,
    suffixes: &AffixTable,
    prefixes: &AffixTable,
) -> (String, Strategy) {
    let normalized = normalize(word);
    if let Some(lemma) = lookup(&normalized, dictionary) {
        return (String::from(lemma), Strategy::Exact);
    }
    let lemma = strip_suffix(&normalized, dictionary, suffixes);
    if lemma != normalized {
        return (String::from(lemma), Strategy::Suffix);
    }
    let lemma = strip_prefix(&normalized, dictionary, prefixes);
    if lemma != normalized {
        return (String::from(lemma), Strategy::Prefix);
    }
    // The original surface form, not the normalized one.
    (String::from(word), Strategy::Unchanged)
}
