use regex::Regex;

use crate::error::Result;

/// Linguistic annotator
/// Turns raw text into its lemmas (base forms), one per linguistic unit,
/// in document order.
///
/// Anything that can produce that sequence plugs in here: an NLP pipeline,
/// a stemmer, or a fixed list in tests. Closures of shape
/// `Fn(&str) -> Vec<String>` implement it directly.
///
/// The annotator is usually expensive to build, so build it once and hand it
/// to a `Tokenizer`.
pub trait Annotator: Send + Sync {
    fn annotate<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn annotate<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(self(text).into_iter())
    }
}

/// Words and punctuation marks, one unit each
const DEFAULT_PATTERN: &str = r"\w+|[^\w\s]";

/// Regex-based annotator
/// Segments text into word and punctuation units and uses each surface form
/// as its own lemma. No linguistic model is involved.
#[derive(Debug, Clone)]
pub struct WordAnnotator {
    pattern: Regex,
}

impl WordAnnotator {
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Each regex match becomes one lemma
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Annotator for WordAnnotator {
    fn annotate<'a>(&'a self, text: &'a str) -> Box<dyn Iterator<Item = String> + 'a> {
        Box::new(self.pattern.find_iter(text).map(|m| m.as_str().to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_annotator_emits_words_and_punctuation_in_order() {
        let annotator = WordAnnotator::new().unwrap();
        let lemmas: Vec<String> = annotator.annotate("int maxValue = 10;").collect();
        assert_eq!(lemmas, vec!["int", "maxValue", "=", "10", ";"]);
    }

    #[test]
    fn custom_pattern() {
        let annotator = WordAnnotator::with_pattern(r"[a-z]+").unwrap();
        let lemmas: Vec<String> = annotator.annotate("abc DEF ghi").collect();
        assert_eq!(lemmas, vec!["abc", "ghi"]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(WordAnnotator::with_pattern("(").is_err());
    }

    #[test]
    fn closures_are_annotators() {
        let upper = |text: &str| text.split(' ').map(str::to_uppercase).collect::<Vec<_>>();
        let lemmas: Vec<String> = upper.annotate("a b").collect();
        assert_eq!(lemmas, vec!["A", "B"]);
    }
}
