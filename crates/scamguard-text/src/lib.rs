//! ScamGuard Text
//!
//! Deterministic text normalization for the ScamGuard decision engine.
//!
//! The normalizer turns an arbitrary UTF-8 message into the lowercase,
//! stripped, stopword-filtered, lemmatized token string the feature
//! vectorizer was trained on. Linguistic resources (stopword set,
//! lemmatizer) are resolved once at construction into explicit variants with
//! built-in fallbacks, so `normalize` is total for every input.

pub mod normalize;
pub mod resources;

pub use normalize::{NormalizeOptions, Normalizer};
pub use resources::{Lemmatizer, StopwordSource, Stopwords};
