//! Text-to-token normalization pipeline
//!
//! Turns a raw message into the lowercase, stripped, tokenized form the
//! feature vectorizer was trained on. The pipeline is deterministic and total:
//! any string in, a (possibly empty) normalized string out, never an error.

use crate::resources::{Lemmatizer, Stopwords};
use regex::Regex;
use scamguard_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Options controlling the optional tail of the pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NormalizeOptions {
    /// Drop stopword tokens
    #[serde(default = "default_true")]
    pub remove_stopwords: bool,

    /// Reduce tokens to their dictionary base form
    #[serde(default = "default_true")]
    pub lemmatize: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            lemmatize: true,
        }
    }
}

/// Ordered contraction table. More specific patterns come first: `n't` is a
/// substring of `won't`/`can't`, so those must be expanded before the generic
/// suffix rules run.
const CONTRACTIONS: &[(&str, &str)] = &[
    (r"won't", "will not"),
    (r"can't", "cannot"),
    (r"n't", " not"),
    (r"'re", " are"),
    (r"'s", " is"),
    (r"'d", " would"),
    (r"'ll", " will"),
    (r"'t", " not"),
    (r"'ve", " have"),
    (r"'m", " am"),
];

/// Deterministic text normalizer
pub struct Normalizer {
    stopwords: Stopwords,
    lemmatizer: Lemmatizer,
    url_re: Regex,
    email_re: Regex,
    phone_re: Regex,
    currency_re: Regex,
    nonword_re: Regex,
    punct_re: Regex,
    whitespace_re: Regex,
    contractions: Vec<(Regex, &'static str)>,
}

impl Normalizer {
    /// Create a normalizer with the full curated resources
    pub fn new() -> Result<Self> {
        Self::with_resources(Stopwords::curated(), Lemmatizer::dictionary())
    }

    /// Create a normalizer with explicitly resolved resources
    pub fn with_resources(stopwords: Stopwords, lemmatizer: Lemmatizer) -> Result<Self> {
        let contractions = CONTRACTIONS
            .iter()
            .map(|(pattern, replacement)| {
                Regex::new(pattern)
                    .map(|re| (re, *replacement))
                    .map_err(|e| Error::config(format!("failed to compile contraction pattern: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            stopwords,
            lemmatizer,
            url_re: Self::compile(r"https?://\S+|www\.\S+")?,
            email_re: Self::compile(r"\S+@\S+")?,
            phone_re: Self::compile(
                r"\b(?:\+\d{1,3}[- ]?)?\d{10}\b|\b\d{3}[-.\s]??\d{3}[-.\s]??\d{4}\b",
            )?,
            currency_re: Self::compile(r"[$₹€£¥](\d+([,.]\d+)?)|(\d+([,.]\d+)?)[$₹€£¥]")?,
            nonword_re: Self::compile(r"[^\w\s]")?,
            punct_re: Self::compile(r"([.,!?;:])")?,
            whitespace_re: Self::compile(r"\s+")?,
            contractions,
        })
    }

    fn compile(pattern: &str) -> Result<Regex> {
        Regex::new(pattern).map_err(|e| Error::config(format!("failed to compile pattern: {e}")))
    }

    /// Normalize with default options
    pub fn normalize_default(&self, raw: &str) -> String {
        self.normalize(raw, &NormalizeOptions::default())
    }

    /// Run the full pipeline.
    ///
    /// Steps, in order: lowercase; strip URLs, email addresses and
    /// phone-shaped digit runs; expand contractions; strip currency amounts;
    /// strip remaining punctuation and emoji; collapse whitespace; tokenize;
    /// optional stopword filter; optional lemmatization; rejoin with single
    /// spaces.
    pub fn normalize(&self, raw: &str, options: &NormalizeOptions) -> String {
        let mut text = raw.to_lowercase();

        text = self.url_re.replace_all(&text, "").into_owned();
        text = self.email_re.replace_all(&text, "").into_owned();
        text = self.phone_re.replace_all(&text, "").into_owned();

        for (re, replacement) in &self.contractions {
            text = re.replace_all(&text, *replacement).into_owned();
        }

        text = self.currency_re.replace_all(&text, "").into_owned();
        // Non-word characters cover both punctuation and emoji
        text = self.nonword_re.replace_all(&text, "").into_owned();
        let text = self
            .whitespace_re
            .replace_all(&text, " ")
            .trim()
            .to_string();

        let mut tokens = self.tokenize(&text);

        if options.remove_stopwords {
            tokens.retain(|token| !self.stopwords.contains(token));
        }

        if options.lemmatize {
            tokens = tokens
                .into_iter()
                .map(|token| self.lemmatizer.lemmatize(&token))
                .collect();
        }

        tokens.join(" ")
    }

    /// Split into tokens. Spaces are forced around sentence punctuation first
    /// so stray marks never glue two tokens together.
    fn tokenize(&self, text: &str) -> Vec<String> {
        let spaced = self.punct_re.replace_all(text, " $1 ");
        spaced
            .split_whitespace()
            .map(|token| token.to_string())
            .collect()
    }
}
