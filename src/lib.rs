//! This crate scores how similar source code documents are, using TF-IDF
//! vectors and cosine similarity.

pub mod config;
pub mod error;
pub mod source;
pub mod tokenizer;
pub mod utils;
pub mod vectorizer;

/// Tokenizer
/// Turns raw text into terms: the injected `Annotator` produces lemmas, each
/// lemma is split at identifier boundaries (`camelCase` -> `camel`, `Case`),
/// and parts that could not be an identifier are dropped.
pub use tokenizer::Tokenizer;

/// Annotator trait and the default regex-based `WordAnnotator`
/// Any lemmatizer fits behind `Annotator`; build it once and inject it.
pub use tokenizer::annotator::{Annotator, WordAnnotator};

/// Document
/// One source file: id, terms in order, and the term counts.
/// `Document::build_all` builds a whole `DocumentSource` in parallel.
pub use vectorizer::document::Document;

/// Term Frequency structure
/// Counts of each term within one document.
pub use vectorizer::token::TermFrequency;

/// Corpus Index
/// Inverted index (term -> document ids) and IDF table over a fixed,
/// non-empty collection of documents, plus the term order every TF-IDF
/// vector is aligned to. Immutable and shareable across threads.
pub use vectorizer::corpus::CorpusIndex;

/// TF IDF Calculation Engine Trait
/// Pluggable TF and IDF weighting. `DefaultTFIDFEngine` is raw count times
/// `ln(N / df)`.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Projection of a document into an index's TF-IDF space
pub use vectorizer::{project, TFIDFVector};

/// Similarity scoring
/// - `cosine_similarity` / `cosine_similarity_with`: two aligned vectors
/// - `score_against_corpus`: one query against every corpus document
/// - `pairwise_similarities`: every pair within a corpus
pub use vectorizer::evaluate::scoring::{
    cosine_similarity, cosine_similarity_with, pairwise_similarities, score_against_corpus,
    HitEntry, Hits, PairScore,
};

/// Document source trait
pub use source::DocumentSource;

/// Scoring settings, including what a zero-norm vector scores
pub use config::{ScoringConfig, ZeroNormPolicy};

pub use error::{Error, Result};
