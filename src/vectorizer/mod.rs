pub mod corpus;
pub mod document;
pub mod evaluate;
pub mod tfidf;
pub mod token;

use indexmap::IndexMap;
use rayon::prelude::*;

use crate::vectorizer::{corpus::CorpusIndex, document::Document, tfidf::TFIDFEngine};

/// Dense TF-IDF vector, one slot per vocabulary term in the index's term order
pub type TFIDFVector = Vec<f64>;

/// Project a document into the index's TF-IDF space
/// Same as `index.project(document)`.
pub fn project<E>(document: &Document, index: &CorpusIndex<E>) -> TFIDFVector
where
    E: TFIDFEngine,
{
    index.project(document)
}

impl<E> CorpusIndex<E>
where
    E: TFIDFEngine,
{
    /// TF-IDF vector of a document
    /// Slot `k` holds `tf(term_k) * idf(term_k)` for the k-th term of
    /// `term_order()`. The document does not have to be part of the indexed
    /// corpus; its terms outside the vocabulary have no slot and are dropped.
    ///
    /// # Returns
    /// * `TFIDFVector` - length `vocab_size()`
    pub fn project(&self, document: &Document) -> TFIDFVector {
        let freq = document.term_frequency();
        self.idf_iter()
            .map(|(term, idf)| E::tf(freq.term_count(term)) * idf)
            .collect()
    }

    /// Vectors for a whole collection, keyed by document id
    /// Projection runs in parallel; the map keeps the input order.
    pub fn project_all(&self, documents: &[Document]) -> IndexMap<String, TFIDFVector>
    where
        E: Send + Sync,
    {
        let vectors: Vec<(String, TFIDFVector)> = documents
            .par_iter()
            .map(|doc| (doc.id().to_string(), self.project(doc)))
            .collect();
        vectors.into_iter().collect()
    }
}
