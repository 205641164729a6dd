/*
 * This modules contains the `LemmatizerConfig` struct, which implements the default trait, and
 * its builder. The config holds the affix tables tried by the lemmatizer and the options used when
 * lemmatizing a batch of tokens.
*/
use crate::affixes::AffixTable;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
/// Config struct used to simplify the construction of a `Lemmatizer`. It implements the default
/// trait, which uses the Persian affix tables.
pub struct LemmatizerConfig {
    /// Suffixes tried, in order, after the exact lookup failed.
    pub(crate) suffixes: AffixTable,
    /// Prefixes tried, in order, after every suffix failed.
    pub(crate) prefixes: AffixTable,
    /// Can we use multiple cores to lemmatize a batch of tokens? Small batches are faster on a
    /// single thread.
    pub(crate) parallel: bool,
}

impl Default for LemmatizerConfig {
    fn default() -> Self {
        Self {
            suffixes: AffixTable::persian_suffixes(),
            prefixes: AffixTable::persian_prefixes(),
            parallel: false,
        }
    }
}

impl LemmatizerConfig {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn suffixes(&self) -> &AffixTable {
        &self.suffixes
    }
    pub fn prefixes(&self) -> &AffixTable {
        &self.prefixes
    }
    pub fn parallel(&self) -> bool {
        self.parallel
    }
}

impl Display for LemmatizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Number of suffixes: {}\n Number of prefixes: {}\n Using parallel computations: {}",
            self.suffixes.len(),
            self.prefixes.len(),
            self.parallel
        )
    }
}

impl From<LemmatizerConfigBuilder> for LemmatizerConfig {
    fn from(value: LemmatizerConfigBuilder) -> Self {
        value.build()
    }
}

/// This builder can be used to build and customize a `LemmatizerConfig` stucture. Tables that are
/// not set fall back to the Persian ones.
#[derive(Clone, Debug, Default)]
pub struct LemmatizerConfigBuilder {
    suffixes: Option<AffixTable>,
    prefixes: Option<AffixTable>,
    parallel: bool,
}

impl LemmatizerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn suffixes<T: Into<AffixTable>>(mut self, suffixes: T) -> Self {
        self.suffixes = Some(suffixes.into());
        self
    }
    pub fn prefixes<T: Into<AffixTable>>(mut self, prefixes: T) -> Self {
        self.prefixes = Some(prefixes.into());
        self
    }
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
    pub fn build(self) -> LemmatizerConfig {
        LemmatizerConfig {
            suffixes: self.suffixes.unwrap_or_else(AffixTable::persian_suffixes),
            prefixes: self.prefixes.unwrap_or_else(AffixTable::persian_prefixes),
            parallel: self.parallel,
        }
    }
}
