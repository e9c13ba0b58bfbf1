use std::{collections::HashMap, fmt};

use num::Num;
use rayon::prelude::*;
use serde::Serialize;

use crate::{
    config::{ScoringConfig, ZeroNormPolicy},
    error::{Error, Result},
    utils::math::{dot, norm},
    vectorizer::{corpus::CorpusIndex, document::Document, tfidf::TFIDFEngine},
};

/// Cosine similarity with the default zero-norm policy (`ZeroNormPolicy::Zero`)
///
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// # Errors
/// * `Error::DimensionMismatch` - the vectors differ in length
pub fn cosine_similarity<N>(vec: &[N], other: &[N]) -> Result<f64>
where
    N: Num + Copy + Into<f64>,
{
    cosine_similarity_with(vec, other, ZeroNormPolicy::default())
}

/// Cosine similarity with an explicit zero-norm policy
///
/// The result is not clamped. With non-negative inputs (always the case for
/// TF-IDF vectors) it lies in [0, 1].
///
/// # Errors
/// * `Error::DimensionMismatch` - the vectors differ in length
/// * `Error::DegenerateVector` - a norm is zero under `ZeroNormPolicy::Error`
pub fn cosine_similarity_with<N>(vec: &[N], other: &[N], policy: ZeroNormPolicy) -> Result<f64>
where
    N: Num + Copy + Into<f64>,
{
    if vec.len() != other.len() {
        return Err(Error::DimensionMismatch {
            left: vec.len(),
            right: other.len(),
        });
    }
    let product = dot(vec, other);
    let norm_a = norm(vec);
    let norm_b = norm(other);
    if norm_a == 0.0 || norm_b == 0.0 {
        tracing::debug!(?policy, norm_a, norm_b, "zero-norm vector in cosine similarity");
        match policy {
            ZeroNormPolicy::Zero => return Ok(0.0),
            ZeroNormPolicy::Error => return Err(Error::DegenerateVector),
            ZeroNormPolicy::NaN => {}
        }
    }
    Ok(product / (norm_a * norm_b))
}

/// One scored document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitEntry {
    pub key: String,
    pub score: f64,
}

/// Scores of corpus documents against one query, in corpus order until sorted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Score of the document with id `key`
    pub fn get(&self, key: &str) -> Option<f64> {
        self.list.iter().find(|hit| hit.key == key).map(|hit| hit.score)
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> {
        self.list.iter()
    }

    /// Sort by descending score
    /// NaN scores are removed first; equal scores keep their order.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|hit| !hit.score.is_nan());
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Keep the first `n` entries
    pub fn truncate(&mut self, n: usize) -> &mut Self {
        self.list.truncate(n);
        self
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.list.into_iter().map(|hit| (hit.key, hit.score)).collect()
    }
}

impl fmt::Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hit in &self.list {
            writeln!(f, "{}: {:.6}", hit.key, hit.score)?;
        }
        Ok(())
    }
}

/// Similarity of one pair of corpus documents
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairScore {
    pub left: String,
    pub right: String,
    pub score: f64,
}

/// Score a query document against every corpus document
///
/// All vectors come from `index`, so they are aligned. The query need not be
/// part of the indexed corpus; its out-of-vocabulary terms do not count.
///
/// # Arguments
/// * `query` - document to compare
/// * `index` - index built over the corpus
/// * `corpus` - documents to score, usually those `index` was built from
/// * `config` - scoring settings
///
/// # Returns
/// * `Hits` - one entry per corpus document, in corpus order
pub fn score_against_corpus<E>(
    query: &Document,
    index: &CorpusIndex<E>,
    corpus: &[Document],
    config: &ScoringConfig,
) -> Result<Hits>
where
    E: TFIDFEngine + Send + Sync,
{
    let query_vec = index.project(query);
    let list = corpus
        .par_iter()
        .map(|doc| {
            let doc_vec = index.project(doc);
            cosine_similarity_with(&query_vec, &doc_vec, config.zero_norm).map(|score| HitEntry {
                key: doc.id().to_string(),
                score,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Hits::new(list))
}

/// Score every unordered pair of documents
/// Each document is projected once; pairs are scored in parallel and returned
/// in `(i, j)` order with `i < j`.
pub fn pairwise_similarities<E>(
    documents: &[Document],
    index: &CorpusIndex<E>,
    config: &ScoringConfig,
) -> Result<Vec<PairScore>>
where
    E: TFIDFEngine + Send + Sync,
{
    let vectors: Vec<Vec<f64>> = documents.par_iter().map(|doc| index.project(doc)).collect();
    let doc_num = documents.len();
    (0..doc_num)
        .into_par_iter()
        .flat_map_iter(|i| ((i + 1)..doc_num).map(move |j| (i, j)))
        .map(|(i, j)| {
            cosine_similarity_with(&vectors[i], &vectors[j], config.zero_norm).map(|score| PairScore {
                left: documents[i].id().to_string(),
                right: documents[j].id().to_string(),
                score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn self_similarity_is_one() {
        for v in [vec![1.0f64, 2.0, 3.0], vec![0.0, 0.5, 0.0], vec![1e-3, 7.0, 42.0]] {
            let score = cosine_similarity(&v, &v).unwrap();
            assert!((score - 1.0).abs() < EPS, "{score}");
        }
    }

    #[test]
    fn symmetric() {
        let a = [0.3f64, 0.0, 1.2, 4.0];
        let b = [1.0f64, 2.0, 0.0, 0.5];
        assert_eq!(
            cosine_similarity(&a, &b).unwrap(),
            cosine_similarity(&b, &a).unwrap()
        );
    }

    #[test]
    fn orthogonal_and_parallel() {
        assert_eq!(cosine_similarity(&[1.0f64, 0.0], &[0.0f64, 1.0]).unwrap(), 0.0);
        let score = cosine_similarity(&[1.0f64, 2.0], &[2.0f64, 4.0]).unwrap();
        assert!((score - 1.0).abs() < EPS);
    }

    #[test]
    fn generic_over_numeric_types() {
        let score = cosine_similarity(&[1u32, 1], &[1u32, 0]).unwrap();
        assert!((score - std::f64::consts::FRAC_1_SQRT_2).abs() < EPS);
    }

    #[test]
    fn dimension_mismatch_is_an_error() {
        let result = cosine_similarity(&[1.0f64, 2.0], &[1.0f64]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn zero_norm_policies() {
        let zero = [0.0f64, 0.0, 0.0];
        let v = [1.0f64, 0.0, 2.0];

        assert_eq!(cosine_similarity(&zero, &v).unwrap(), 0.0);
        assert_eq!(cosine_similarity_with(&v, &zero, ZeroNormPolicy::Zero).unwrap(), 0.0);
        assert!(cosine_similarity_with(&zero, &v, ZeroNormPolicy::NaN).unwrap().is_nan());
        assert!(cosine_similarity_with(&zero, &zero, ZeroNormPolicy::NaN).unwrap().is_nan());
        assert!(matches!(
            cosine_similarity_with(&zero, &v, ZeroNormPolicy::Error),
            Err(Error::DegenerateVector)
        ));
    }

    #[test]
    fn empty_vectors_are_zero_norm() {
        let empty: [f64; 0] = [];
        assert_eq!(cosine_similarity(&empty, &empty).unwrap(), 0.0);
    }

    #[test]
    fn hits_sort_drop_nan_and_truncate() {
        let mut hits = Hits::new(vec![
            HitEntry { key: "a".into(), score: 0.2 },
            HitEntry { key: "b".into(), score: f64::NAN },
            HitEntry { key: "c".into(), score: 0.9 },
            HitEntry { key: "d".into(), score: 0.5 },
        ]);
        assert_eq!(hits.get("c"), Some(0.9));
        assert!(hits.get("b").unwrap().is_nan());
        assert_eq!(hits.get("z"), None);

        hits.sort_by_score_desc();
        let keys: Vec<&str> = hits.iter().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["c", "d", "a"]);

        hits.truncate(2);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.to_string(), "c: 0.900000\nd: 0.500000\n");

        let map = hits.into_map();
        assert_eq!(map.get("d"), Some(&0.5));
        assert!(!map.contains_key("a"));
    }

    #[test]
    fn pairwise_covers_each_pair_once() {
        let documents = vec![
            Document::from_terms("A", ["for", "i", "i", "hello"]),
            Document::from_terms("B", ["for", "hello"]),
            Document::from_terms("C", ["i"]),
        ];
        let index: CorpusIndex = CorpusIndex::build(&documents).unwrap();
        let pairs = pairwise_similarities(&documents, &index, &ScoringConfig::default()).unwrap();
        let names: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.left.as_str(), p.right.as_str()))
            .collect();
        assert_eq!(names, vec![("A", "B"), ("A", "C"), ("B", "C")]);
        // B and C share nothing
        assert_eq!(pairs[2].score, 0.0);
    }
}
