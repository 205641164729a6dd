/**
This modules gives a few tools to prettyprint how a batch of tokens was lemmatized, i.e. how many
tokens each strategy resolved.
*/
use crate::lemmatizer::Strategy;
use enum_iterator::all;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// The reporter holds the number of tokens resolved by every `Strategy`. It can be displayed as
/// if it was collected into a dataframe. It is built with `Lemmatizer::report`.
///
/// # Example
///
/// ```rust
/// use lemmafa::{LemmaDictionary, Lemmatizer, Strategy};
///
/// let dictionary: LemmaDictionary = vec![("کتاب", "کتاب")].into_iter().collect();
/// let lemmatizer = Lemmatizer::new(dictionary);
/// let reporter = lemmatizer.report(&["کتاب", "کتابها", "نامه", "کتاب"]);
///
/// let expected_report = "Strategy, Count, Share
/// Exact, 2, 0.5
/// Suffix, 1, 0.25
/// Prefix, 0, 0
/// Unchanged, 1, 0.25\n";
///
/// assert_eq!(reporter.count(Strategy::Exact), 2);
/// assert_eq!(expected_report, reporter.to_string());
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Reporter {
    pub(crate) counts: BTreeMap<Strategy, usize>,
}

impl Reporter {
    pub(crate) fn from_strategies<I: IntoIterator<Item = Strategy>>(strategies: I) -> Self {
        let mut counts: BTreeMap<Strategy, usize> = all::<Strategy>().map(|s| (s, 0)).collect();
        for (strategy, count) in strategies.into_iter().counts() {
            counts.insert(strategy, count);
        }
        Self { counts }
    }

    /// Number of tokens resolved by `strategy`.
    pub fn count(&self, strategy: Strategy) -> usize {
        self.counts.get(&strategy).copied().unwrap_or(0)
    }

    /// Total number of tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Share of the tokens resolved by `strategy`. An empty report has a share of 0 everywhere.
    pub fn share(&self, strategy: Strategy) -> f32 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(strategy) as f32 / total as f32
    }

    /// Share of the tokens for which a lemma was found.
    pub fn coverage(&self) -> f32 {
        1.0 - self.share(Strategy::Unchanged)
    }
}

impl From<Reporter> for BTreeMap<Strategy, usize> {
    fn from(value: Reporter) -> Self {
        value.counts
    }
}

/// The Reporter struct acts as a dataframe when displayed.
impl Display for Reporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strategy, Count, Share")?;
        for (strategy, count) in self.counts.iter() {
            writeln!(f, "{}, {}, {}", strategy, count, self.share(*strategy))?
        }
        Ok(())
    }
}
