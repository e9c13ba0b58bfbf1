/// TF-IDF weighting strategy
/// `CorpusIndex` uses `idf` once per vocabulary term at build time and
/// `tf` for every projected term count.
pub trait TFIDFEngine {
    /// IDF of a term found in `doc_freq` of `doc_num` documents.
    /// Called only with `1 <= doc_freq <= doc_num`.
    fn idf(doc_num: u64, doc_freq: u64) -> f64;
    /// TF weight of a raw occurrence count
    fn tf(count: u32) -> f64;
}

/// Textbook TF-IDF
/// tf = raw count
/// idf = ln(N / df)
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl TFIDFEngine for DefaultTFIDFEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        (doc_num as f64 / doc_freq as f64).ln()
    }

    #[inline]
    fn tf(count: u32) -> f64 {
        count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_idf_is_natural_log_ratio() {
        assert!((DefaultTFIDFEngine::idf(3, 2) - (1.5f64).ln()).abs() < 1e-12);
        assert_eq!(DefaultTFIDFEngine::idf(5, 5), 0.0);
    }

    #[test]
    fn default_idf_decreases_with_doc_freq() {
        let idfs: Vec<f64> = (1..=10).map(|df| DefaultTFIDFEngine::idf(10, df)).collect();
        assert!(idfs.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn default_tf_is_raw_count() {
        assert_eq!(DefaultTFIDFEngine::tf(0), 0.0);
        assert_eq!(DefaultTFIDFEngine::tf(3), 3.0);
    }
}
