use rayon::prelude::*;
use serde::Serialize;

use crate::{
    source::DocumentSource,
    tokenizer::{annotator::Annotator, Tokenizer},
    vectorizer::token::TermFrequency,
};

/// One source file: its id, its terms in order, and their counts.
/// Immutable once built. TF-IDF vectors are not stored here; they depend on
/// the corpus index a document is projected through.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Document {
    id: String,
    terms: Vec<String>,
    term_frequency: TermFrequency,
}

impl Document {
    /// Tokenize `text` and count its terms
    ///
    /// # Arguments
    /// * `id` - unique id within the corpus, usually the file name
    /// * `text` - raw file content
    /// * `tokenizer` - shared tokenizer
    pub fn build<A>(id: impl Into<String>, text: &str, tokenizer: &Tokenizer<A>) -> Self
    where
        A: Annotator,
    {
        let id = id.into();
        let terms = tokenizer.tokenize(text);
        tracing::trace!(id = %id, term_sum = terms.len(), "tokenized document");
        Self::from_terms(id, terms)
    }

    /// Build from terms that were already produced
    pub fn from_terms<T>(id: impl Into<String>, terms: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        let term_frequency = terms.iter().collect();
        Self {
            id: id.into(),
            terms,
            term_frequency,
        }
    }

    /// Build every document a source lists
    /// Tokenizing runs in parallel, one task per document. Output keeps the
    /// source's order.
    pub fn build_all<S, A>(source: &S, tokenizer: &Tokenizer<A>) -> Vec<Document>
    where
        S: DocumentSource + ?Sized,
        A: Annotator,
    {
        let documents: Vec<Document> = source
            .list_documents()
            .into_par_iter()
            .map(|(id, text)| Document::build(id, &text, tokenizer))
            .collect();
        tracing::debug!(doc_num = documents.len(), "built documents");
        documents
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Terms in document order, duplicates included
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term_frequency(&self) -> &TermFrequency {
        &self.term_frequency
    }

    /// A document without terms is valid; it projects to an all-zero vector
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::annotator::WordAnnotator;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(WordAnnotator::new().unwrap())
    }

    #[test]
    fn build_tokenizes_and_counts() {
        let doc = Document::build("Hello.java", "for (i) { i; hello(); }", &tokenizer());
        assert_eq!(doc.id(), "Hello.java");
        assert_eq!(doc.terms(), &["for", "i", "i", "hello"]);
        let freq = doc.term_frequency();
        assert_eq!(freq.term_count("for"), 1);
        assert_eq!(freq.term_count("i"), 2);
        assert_eq!(freq.term_count("hello"), 1);
        assert_eq!(freq.term_sum(), 4);
    }

    #[test]
    fn zero_term_document_is_valid() {
        let doc = Document::build("empty.java", "{ } ;", &tokenizer());
        assert!(doc.is_empty());
        assert!(doc.term_frequency().is_empty());
    }

    #[test]
    fn from_terms_matches_counts() {
        let doc = Document::from_terms("A", ["for", "i", "i", "hello"]);
        assert_eq!(doc.term_frequency().term_count("i"), 2);
        assert_eq!(doc.terms().len(), 4);
    }

    #[test]
    fn build_all_keeps_source_order() {
        let source = vec![
            ("a.java", "alphaBeta"),
            ("b.java", "gamma"),
            ("c.java", ""),
            ("d.java", "deltaDelta"),
        ];
        let documents = Document::build_all(&source, &tokenizer());
        let ids: Vec<&str> = documents.iter().map(Document::id).collect();
        assert_eq!(ids, vec!["a.java", "b.java", "c.java", "d.java"]);
        assert_eq!(documents[0].terms(), &["alpha", "Beta"]);
        assert!(documents[2].is_empty());
        assert_eq!(documents[3].term_frequency().term_count("Delta"), 1);
    }
}
