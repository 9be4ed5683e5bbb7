//! Bounded selection with a tracked minimum.

use crate::selectors::Selector;
use crate::types::{FrequencyMap, SelectionMethod, WordCount};

/// Keeps a working set of at most K entries and the position of its
/// smallest count.
///
/// Once the set is full, an entry is only admitted if its count is strictly
/// greater than the tracked minimum; it replaces the minimum and the set is
/// rescanned for the new one. The rescan is O(K), which is cheap for the
/// small K this is meant for.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSelector;

impl Selector for LinearSelector {
  fn kind(&self) -> SelectionMethod {
    SelectionMethod::Linear
  }

  fn collect(&self, freqs: &FrequencyMap, k: usize) -> Vec<WordCount> {
    let mut maxes: Vec<WordCount> = Vec::with_capacity(k.min(freqs.len()));
    // Index into `maxes` of the smallest count; `None` until the first insert.
    let mut min: Option<usize> = None;

    for (word, count) in freqs.iter() {
      if maxes.len() < k {
        maxes.push(WordCount::new(word, count));
        if min.map_or(true, |m| count < maxes[m].count) {
          min = Some(maxes.len() - 1);
        }
      } else if let Some(m) = min {
        if count > maxes[m].count {
          maxes[m] = WordCount::new(word, count);
          min = min_index(&maxes);
        }
      }
    }

    maxes
  }
}

/// Position of the smallest count in `entries`.
fn min_index(entries: &[WordCount]) -> Option<usize> {
  entries
    .iter()
    .enumerate()
    .min_by_key(|(_, entry)| entry.count)
    .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_evicts_smallest() {
    let freqs: FrequencyMap = vec![("a", 1), ("b", 5), ("c", 3), ("d", 4), ("e", 2)]
      .into_iter()
      .collect();
    let result = LinearSelector.select(&freqs, 3);
    assert_eq!(
      result.entries(),
      &[WordCount::new("b", 5), WordCount::new("d", 4), WordCount::new("c", 3)]
    );
  }

  #[test]
  fn test_fewer_words_than_k() {
    let freqs: FrequencyMap = vec![("one", 1), ("two", 1), ("three", 1)].into_iter().collect();
    let result = LinearSelector.select(&freqs, 10);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|e| e.count == 1));
  }

  #[test]
  fn test_boundary_ties_keep_size() {
    let freqs: FrequencyMap = vec![("x", 9), ("p", 2), ("q", 2), ("r", 2)].into_iter().collect();
    let result = LinearSelector.select(&freqs, 2);
    assert_eq!(result.len(), 2);
    assert_eq!(result.entries()[0], WordCount::new("x", 9));
    assert_eq!(result.entries()[1].count, 2);
  }

  #[test]
  fn test_min_index() {
    let entries = vec![WordCount::new("a", 4), WordCount::new("b", 1), WordCount::new("c", 3)];
    assert_eq!(min_index(&entries), Some(1));
    assert_eq!(min_index(&[]), None);
  }
}
