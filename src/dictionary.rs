/*
 * This module contains the `LemmaDictionary`, a mapping from normalized surface forms to their
 * lemma. The dictionary is loaded once from a tab separated resource where every record reads
 * `word<TAB>lemma<TAB>part-of-speech`. Only `word -> lemma` is retained.
*/
use ahash::AHashMap;
use std::error::Error;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Number of tab separated fields of a well formed record.
const FIELDS_PER_RECORD: usize = 3;

/// Error returned when the dictionary resource can't be read. A dictionary is never built from a
/// partially read resource.
#[derive(Debug)]
pub enum LoadError {
    /// The resource at `path` could not be opened.
    Io { path: PathBuf, source: io::Error },
    /// The resource could be opened but reading it failed midway, or it is not valid UTF-8.
    Read(io::Error),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(
                f,
                "Could not open the lemma dictionary located at {}: {}",
                path.display(),
                source
            ),
            Self::Read(source) => write!(f, "Could not read the lemma dictionary: {}", source),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Read(source) => Some(source),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(value: io::Error) -> Self {
        Self::Read(value)
    }
}

impl LoadError {
    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
            Self::Read(source) => source.kind(),
        }
    }
}

/// Read-only mapping from a surface form to its lemma. Keys are expected to be normalized. Once
/// built, the dictionary is never mutated by the lemmatizer and can be shared between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LemmaDictionary {
    lemmas: AHashMap<String, String>,
}

impl LemmaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the dictionary located at `path`. The whole file is read into memory.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            entries = dictionary.len(),
            "loaded lemma dictionary"
        );
        Ok(dictionary)
    }

    /// Builds the dictionary from any buffered reader. Records that do not have exactly three
    /// fields are skipped. When a word appears more than once, the last record wins.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        let mut lemmas = AHashMap::default();
        let mut skipped = 0usize;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            match parse_record(&line) {
                Some((word, lemma)) => {
                    lemmas.insert(String::from(word), String::from(lemma));
                }
                None => {
                    skipped += 1;
                    debug!(
                        line = index + 1,
                        fields = line.trim().split('\t').count(),
                        "skipping malformed dictionary record"
                    );
                }
            }
        }
        debug!(entries = lemmas.len(), skipped, "parsed lemma dictionary");
        Ok(Self { lemmas })
    }

    /// Exact lookup of `word`. No normalization is performed here.
    #[inline]
    pub fn get(&self, word: &str) -> Option<&str> {
        self.lemmas.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lemmas.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lemmas.iter().map(|(w, l)| (w.as_str(), l.as_str()))
    }
}

/// Splits a line into `(word, lemma)`. The part of speech is discarded.
fn parse_record(line: &str) -> Option<(&str, &str)> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != FIELDS_PER_RECORD {
        return None;
    }
    Some((fields[0], fields[1]))
}

impl<K, V> FromIterator<(K, V)> for LemmaDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut dictionary = Self::default();
        dictionary.extend(iter);
        dictionary
    }
}

impl<K, V> Extend<(K, V)> for LemmaDictionary
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.lemmas
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}

/// Returns the lemma of `word` if it is a key of the dictionary. An empty lemma is treated as a
/// miss, so that every strategy of the lemmatizer moves on to the next one.
#[inline]
pub fn lookup<'d>(word: &str, dictionary: &'d LemmaDictionary) -> Option<&'d str> {
    dictionary.get(word).filter(|lemma| !lemma.is_empty())
}

/// Loads the dictionary resource located at `path`.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<LemmaDictionary, LoadError> {
    LemmaDictionary::from_path(path)
}
