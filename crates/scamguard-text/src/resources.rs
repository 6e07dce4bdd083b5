//! Linguistic resources with built-in fallbacks
//!
//! Stopword sets and the lemmatizer are resolved ONCE, at construction, into
//! an explicit variant. The normalizer then branches on the variant instead of
//! recovering from missing resources at call time, so every call path is total.

use scamguard_core::Result;
use std::collections::HashSet;
use std::path::Path;

/// Full curated English stopword set
const CURATED_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Minimal built-in fallback set, used when the curated set is unavailable
const MINIMAL_STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "to", "of", "for", "in", "on", "at", "by",
    "with", "about", "as", "is", "am", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "do", "does", "did", "will", "would", "shall", "should", "can", "could", "may", "might",
    "must", "this", "that", "these", "those",
];

/// Where a stopword set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopwordSource {
    /// Full curated English set
    Curated,
    /// Small built-in fallback set
    Minimal,
    /// Loaded from a caller-supplied file
    File,
}

/// A resolved stopword set
#[derive(Debug, Clone)]
pub struct Stopwords {
    words: HashSet<String>,
    source: StopwordSource,
}

impl Stopwords {
    /// The full curated English set
    pub fn curated() -> Self {
        Self {
            words: CURATED_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            source: StopwordSource::Curated,
        }
    }

    /// The minimal fallback set
    pub fn minimal() -> Self {
        Self {
            words: MINIMAL_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            source: StopwordSource::Minimal,
        }
    }

    /// Load a stopword set from a file, one word per line.
    ///
    /// Callers that want degradation rather than failure should fall back to
    /// [`Stopwords::minimal`] on error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let words: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        Ok(Self {
            words,
            source: StopwordSource::File,
        })
    }

    /// Whether the token is a stopword
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Which set this is
    pub fn source(&self) -> StopwordSource {
        self.source
    }

    /// Number of words in the set
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Irregular noun forms the suffix rules cannot reach
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("wives", "wife"),
    ("lives", "life"),
];

/// Ordered noun suffix rules, first match wins
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ies", "y"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zes", "z"),
    ("ses", "s"),
    ("men", "man"),
];

/// A resolved lemmatizer
#[derive(Debug, Clone)]
pub enum Lemmatizer {
    /// Irregular-form dictionary plus ordered noun suffix rules
    Dictionary,
    /// Trivial heuristic: drop one trailing `s`
    SuffixOnly,
}

impl Lemmatizer {
    /// The dictionary-backed lemmatizer
    pub fn dictionary() -> Self {
        Self::Dictionary
    }

    /// The trivial fallback heuristic
    pub fn suffix_only() -> Self {
        Self::SuffixOnly
    }

    /// Reduce a token to its base form
    pub fn lemmatize(&self, token: &str) -> String {
        match self {
            Self::Dictionary => Self::lemmatize_dictionary(token),
            Self::SuffixOnly => Self::lemmatize_suffix(token),
        }
    }

    fn lemmatize_dictionary(token: &str) -> String {
        if let Some((_, base)) = IRREGULAR_NOUNS.iter().find(|(form, _)| *form == token) {
            return (*base).to_string();
        }

        for (suffix, replacement) in SUFFIX_RULES {
            if let Some(stem) = token.strip_suffix(suffix) {
                return format!("{stem}{replacement}");
            }
        }

        // Bare plural `s`, guarded so `boss`, `bonus` and short tokens survive
        if token.len() > 3 && token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us")
        {
            return token[..token.len() - 1].to_string();
        }

        token.to_string()
    }

    fn lemmatize_suffix(token: &str) -> String {
        match token.strip_suffix('s') {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => token.to_string(),
        }
    }
}
