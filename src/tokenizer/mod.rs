pub mod annotator;
pub mod split;

use crate::tokenizer::{
    annotator::{Annotator, WordAnnotator},
    split::{is_identifier, split_identifier},
};

/// Tokenizer
/// Turns raw document text into terms:
/// 1. the annotator produces lemmas in document order
/// 2. each lemma is split at identifier boundaries (`camelCase` -> `camel`, `Case`)
/// 3. parts that are not identifier-shaped (punctuation, bare numbers) are dropped
///
/// Case is kept and duplicates stay, so the output can be counted directly.
#[derive(Debug, Clone)]
pub struct Tokenizer<A = WordAnnotator>
where
    A: Annotator,
{
    annotator: A,
}

impl<A> Tokenizer<A>
where
    A: Annotator,
{
    pub fn new(annotator: A) -> Self {
        Self { annotator }
    }

    pub fn annotator(&self) -> &A {
        &self.annotator
    }

    /// Tokenize text into terms
    ///
    /// # Arguments
    /// * `text` - raw document text
    ///
    /// # Returns
    /// * `Vec<String>` - terms in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for lemma in self.annotator.annotate(text) {
            terms.extend(
                split_identifier(&lemma)
                    .into_iter()
                    .filter(|part| is_identifier(part))
                    .map(str::to_owned),
            );
        }
        terms
    }
}
