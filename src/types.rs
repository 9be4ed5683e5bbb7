//! Core data types for word counting and top-K selection.

use serde::{Deserialize, Serialize};
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

/// A single word paired with the number of times it occurred.
///
/// This is both the unit produced by counting and the element type of a
/// [`TopKResult`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordCount {
  /// The word exactly as the tokenizer produced it.
  pub word: String,
  /// How many times the word occurred in the text.
  pub count: usize,
}

impl WordCount {
  /// Creates a new `WordCount`.
  pub fn new(word: impl Into<String>, count: usize) -> Self {
    Self {
      word: word.into(),
      count,
    }
  }
}

impl fmt::Display for WordCount {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.word, self.count)
  }
}

/// A mapping from word to occurrence count for one document.
///
/// Keys are unique and iteration order is unspecified. A `FrequencyMap` is
/// built once by a counter and is read-only afterwards; selectors only ever
/// borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
  counts: HashMap<String, usize>,
}

impl FrequencyMap {
  /// Creates an empty map.
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns the count for `word`, if it occurred at all.
  pub fn get(&self, word: &str) -> Option<usize> {
    self.counts.get(word).copied()
  }

  /// Number of distinct words.
  pub fn len(&self) -> usize {
    self.counts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.counts.is_empty()
  }

  /// Sum of all counts, i.e. the number of tokens that were counted.
  pub fn total(&self) -> usize {
    self.counts.values().sum()
  }

  /// Iterates over `(word, count)` pairs in the map's natural order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
    self.counts.iter().map(|(word, count)| (word.as_str(), *count))
  }

  /// Records one more occurrence of `word`.
  pub(crate) fn increment(&mut self, word: &str) {
    match self.counts.get_mut(word) {
      Some(count) => *count += 1,
      None => {
        self.counts.insert(word.to_string(), 1);
      }
    }
  }
}

impl From<HashMap<String, usize>> for FrequencyMap {
  fn from(counts: HashMap<String, usize>) -> Self {
    Self { counts }
  }
}

impl<W: Into<String>> FromIterator<(W, usize)> for FrequencyMap {
  fn from_iter<I: IntoIterator<Item = (W, usize)>>(iter: I) -> Self {
    Self {
      counts: iter.into_iter().map(|(w, c)| (w.into(), c)).collect(),
    }
  }
}

impl IntoIterator for FrequencyMap {
  type Item = (String, usize);
  type IntoIter = hash_map::IntoIter<String, usize>;

  fn into_iter(self) -> Self::IntoIter {
    self.counts.into_iter()
  }
}

/// The K highest-count entries of a [`FrequencyMap`], sorted for presentation.
///
/// Entries are ordered by descending count; equal counts are ordered by
/// ascending word so output is reproducible. Which words make it in when
/// several share the boundary count depends on the map's iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopKResult {
  entries: Vec<WordCount>,
}

impl TopKResult {
  /// Creates an empty result.
  pub fn empty() -> Self {
    Self::default()
  }

  /// Sorts an unordered working set into a presentable result.
  pub fn from_unsorted(mut entries: Vec<WordCount>) -> Self {
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    Self { entries }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// The sorted entries.
  pub fn entries(&self) -> &[WordCount] {
    &self.entries
  }

  pub fn iter(&self) -> std::slice::Iter<'_, WordCount> {
    self.entries.iter()
  }

  /// The smallest count in the result, if any.
  pub fn min_count(&self) -> Option<usize> {
    self.entries.last().map(|e| e.count)
  }

  /// Looks up the count of `word` within the result.
  pub fn get(&self, word: &str) -> Option<usize> {
    self.entries.iter().find(|e| e.word == word).map(|e| e.count)
  }

  pub fn into_vec(self) -> Vec<WordCount> {
    self.entries
  }
}

impl IntoIterator for TopKResult {
  type Item = WordCount;
  type IntoIter = std::vec::IntoIter<WordCount>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.into_iter()
  }
}

impl<'a> IntoIterator for &'a TopKResult {
  type Item = &'a WordCount;
  type IntoIter = std::slice::Iter<'a, WordCount>;

  fn into_iter(self) -> Self::IntoIter {
    self.entries.iter()
  }
}

/// An enumeration of the available top-K selection strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMethod {
  /// Bounded working set with an O(K) rescan for the minimum after each
  /// eviction. Best for the small K this crate is usually asked for.
  #[default]
  Linear,
  /// Min-heap of size K, O(log K) per eviction.
  Heap,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_frequency_map_totals() {
    let map: FrequencyMap = vec![("cat", 3), ("dog", 2)].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.total(), 5);
    assert_eq!(map.get("cat"), Some(3));
    assert_eq!(map.get("bird"), None);
  }

  #[test]
  fn test_increment_starts_at_one() {
    let mut map = FrequencyMap::new();
    map.increment("a");
    map.increment("a");
    map.increment("b");
    assert_eq!(map.get("a"), Some(2));
    assert_eq!(map.get("b"), Some(1));
  }

  #[test]
  fn test_result_sorted_by_count_then_word() {
    let result = TopKResult::from_unsorted(vec![
      WordCount::new("b", 1),
      WordCount::new("c", 5),
      WordCount::new("a", 1),
    ]);
    let words: Vec<&str> = result.iter().map(|e| e.word.as_str()).collect();
    assert_eq!(words, vec!["c", "a", "b"]);
    assert_eq!(result.min_count(), Some(1));
  }

  #[test]
  fn test_word_count_display() {
    assert_eq!(WordCount::new("war", 7).to_string(), "war -> 7");
  }
}
