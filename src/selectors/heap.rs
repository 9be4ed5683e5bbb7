//! Min-heap selection.

use crate::selectors::Selector;
use crate::types::{FrequencyMap, SelectionMethod, WordCount};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Keeps the K best entries in a min-heap keyed by count.
///
/// Admission follows the same rule as [`LinearSelector`](super::LinearSelector):
/// a full heap only takes an entry whose count is strictly greater than its
/// smallest one. Each eviction costs O(log K).
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSelector;

impl Selector for HeapSelector {
  fn kind(&self) -> SelectionMethod {
    SelectionMethod::Heap
  }

  fn collect(&self, freqs: &FrequencyMap, k: usize) -> Vec<WordCount> {
    let mut heap: BinaryHeap<Reverse<(usize, &str)>> =
      BinaryHeap::with_capacity(k.min(freqs.len()));

    for (word, count) in freqs.iter() {
      if heap.len() < k {
        heap.push(Reverse((count, word)));
        continue;
      }

      let min = heap.peek().map(|Reverse((c, _))| *c);
      if min.is_some_and(|min| count > min) {
        heap.pop();
        heap.push(Reverse((count, word)));
      }
    }

    heap
      .into_iter()
      .map(|Reverse((count, word))| WordCount::new(word, count))
      .collect()
  }
}
