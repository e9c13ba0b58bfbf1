use std::collections::{BTreeMap, HashSet};
use std::marker::PhantomData;

use indexmap::{IndexMap, IndexSet};

use crate::{
    error::{Error, Result},
    vectorizer::{
        document::Document,
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    },
};

/// Corpus index
/// Inverted index and IDF table over a fixed, non-empty document collection.
///
/// Built once and never mutated; to add or remove documents, build a new one.
/// The term order (ascending by term) is fixed at build time and every vector
/// projected through this index uses it, so position `k` always names the same
/// term. Always take the order from the index in hand.
///
/// `E` chooses the TF/IDF weighting (see `TFIDFEngine`).
#[derive(Debug, Clone)]
pub struct CorpusIndex<E = DefaultTFIDFEngine>
where
    E: TFIDFEngine,
{
    /// number of indexed documents (N)
    doc_num: u64,
    /// term -> ids of the documents containing it
    postings: IndexMap<String, IndexSet<String>>,
    /// term -> idf, in term order
    idf: IndexMap<String, f64>,
    _marker: PhantomData<E>,
}

impl<E> CorpusIndex<E>
where
    E: TFIDFEngine,
{
    /// Build the index
    ///
    /// # Arguments
    /// * `documents` - the whole corpus; ids must be unique
    ///
    /// # Errors
    /// * `Error::EmptyCorpus` - `documents` is empty
    /// * `Error::DuplicateDocumentId` - two documents share an id
    pub fn build(documents: &[Document]) -> Result<Self> {
        if documents.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        let mut seen_ids = HashSet::with_capacity(documents.len());
        for doc in documents {
            if !seen_ids.insert(doc.id()) {
                return Err(Error::DuplicateDocumentId(doc.id().to_string()));
            }
        }

        // each document's distinct terms are its local set; merge them one by one
        let mut merged: BTreeMap<&str, IndexSet<String>> = BTreeMap::new();
        for doc in documents {
            for (term, _) in doc.term_frequency().iter() {
                merged
                    .entry(term)
                    .or_default()
                    .insert(doc.id().to_string());
            }
        }

        let doc_num = documents.len() as u64;
        let mut postings = IndexMap::with_capacity(merged.len());
        let mut idf = IndexMap::with_capacity(merged.len());
        for (term, doc_ids) in merged {
            idf.insert(term.to_string(), E::idf(doc_num, doc_ids.len() as u64));
            postings.insert(term.to_string(), doc_ids);
        }

        tracing::debug!(doc_num, vocab_size = idf.len(), "built corpus index");
        Ok(Self {
            doc_num,
            postings,
            idf,
            _marker: PhantomData,
        })
    }

    /// Number of indexed documents (N)
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of distinct terms; also the length of every projected vector
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.idf.contains_key(term)
    }

    /// IDF of `term`, `None` outside the vocabulary
    #[inline]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.idf.get(term).copied()
    }

    /// Number of documents containing `term` (0 outside the vocabulary)
    #[inline]
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, IndexSet::len)
    }

    /// Ids of the documents containing `term`
    #[inline]
    pub fn postings(&self, term: &str) -> Option<&IndexSet<String>> {
        self.postings.get(term)
    }

    /// Vocabulary in vector order
    pub fn term_order(&self) -> impl Iterator<Item = &str> {
        self.idf.keys().map(String::as_str)
    }

    /// `(term, idf)` in vector order
    pub fn idf_iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.idf.iter().map(|(term, &idf)| (term.as_str(), idf))
    }
}
