use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///  TermFrequency
/// Counts how often each term occurs in one document.
/// Terms keep first-seen order.
///
/// # Examples
/// ```
/// use source_similarity::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["for", "i", "i", "hello"]);
///
/// assert_eq!(freq.term_count("i"), 2);
/// assert_eq!(freq.term_sum(), 4);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u32>,
    total_term_count: u64,
}

/// Adding terms
impl TermFrequency {
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Reading counts
impl TermFrequency {
    /// Occurrences of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of term occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// `(term, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Distinct terms in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    #[inline]
    pub fn term_hashset_ref_str(&self) -> HashSet<&str> {
        self.term_count.keys().map(|s| s.as_str()).collect()
    }

    /// The most frequent terms
    /// Ties are all returned, in first-seen order.
    ///
    /// # Returns
    /// * `Vec<(String, u32)>` - terms and their count
    pub fn most_frequent_terms(&self) -> Vec<(String, u32)> {
        match self.term_count.values().max() {
            Some(&max_count) => self
                .term_count
                .iter()
                .filter(|&(_, &count)| count == max_count)
                .map(|(term, &count)| (term.clone(), count))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Terms sorted by descending count
    /// Equal counts keep first-seen order.
    pub fn sorted_frequency_vector(&self) -> Vec<(String, u32)> {
        let mut term_list: Vec<(String, u32)> = self
            .term_count
            .iter()
            .map(|(term, &count)| (term.clone(), count))
            .collect();
        term_list.sort_by(|a, b| b.1.cmp(&a.1));
        term_list
    }
}

impl<T> FromIterator<T> for TermFrequency
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut freq = TermFrequency::new();
        for term in iter {
            freq.add_term(term.as_ref());
        }
        freq
    }
}
