#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A corpus index needs at least one document to define IDF
    #[error("cannot build a corpus index from zero documents")]
    EmptyCorpus,

    #[error("vector dimensions differ: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    /// Raised only under `ZeroNormPolicy::Error`
    #[error("cosine similarity is undefined for a zero-norm vector")]
    DegenerateVector,

    #[error("document id `{0}` appears more than once in the corpus")]
    DuplicateDocumentId(String),

    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
