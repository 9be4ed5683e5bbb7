//! Top-K selection over a [`FrequencyMap`].
//!
//! Two interchangeable [`Selector`] implementations are provided:
//!
//! - [`LinearSelector`]: a bounded working set with an O(K) rescan for the
//!   minimum after every eviction. O(N·K), and the fastest choice for small K.
//! - [`HeapSelector`]: a size-K min-heap. O(N·log K), for large K.
//!
//! Both share the same contract. A K of zero is an invalid argument: the
//! fallible [`Selector::try_select`] reports it, while [`Selector::select`]
//! logs it and returns an empty result. Entries whose count only equals the
//! current minimum never displace an entry already selected.
//!
//! # Example
//!
//! ```rust
//! use topwords::prelude::*;
//!
//! let freqs = count_words("cat dog cat bird cat dog");
//! let top = select_top_k(&freqs, 2);
//!
//! assert_eq!(top.entries(), &[WordCount::new("cat", 3), WordCount::new("dog", 2)]);
//! ```

/// Implements the bounded linear-scan selector.
pub mod linear;
/// Implements the min-heap selector.
pub mod heap;

pub use heap::HeapSelector;
pub use linear::LinearSelector;

use crate::error::{Error, Result};
use crate::types::{FrequencyMap, SelectionMethod, TopKResult, WordCount};

/// A strategy for picking the K highest-count entries of a map.
///
/// The `Send` and `Sync` bounds allow a selector to be shared between
/// threads; implementations keep no state between calls.
pub trait Selector: Send + Sync {
  /// Returns the `SelectionMethod` this selector implements.
  fn kind(&self) -> SelectionMethod;

  /// Collects at most `k` entries with the highest counts, in no
  /// particular order.
  ///
  /// Callers guarantee `k >= 1`.
  fn collect(&self, freqs: &FrequencyMap, k: usize) -> Vec<WordCount>;

  /// Selects the top `k` entries, sorted by descending count.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidArgument`] when `k` is zero.
  fn try_select(&self, freqs: &FrequencyMap, k: usize) -> Result<TopKResult> {
    if k < 1 {
      return Err(Error::InvalidArgument { k });
    }
    Ok(TopKResult::from_unsorted(self.collect(freqs, k)))
  }

  /// Selects the top `k` entries, sorted by descending count.
  ///
  /// An invalid `k` is logged and yields an empty result.
  fn select(&self, freqs: &FrequencyMap, k: usize) -> TopKResult {
    match self.try_select(freqs, k) {
      Ok(result) => result,
      Err(err) => {
        log::error!("{}", err);
        TopKResult::empty()
      }
    }
  }
}

/// Returns the selector implementing `method`.
pub fn selector_for(method: SelectionMethod) -> Box<dyn Selector> {
  match method {
    SelectionMethod::Linear => Box::new(LinearSelector),
    SelectionMethod::Heap => Box::new(HeapSelector),
  }
}

/// Selects the top `k` words with the [`LinearSelector`].
///
/// A `k` of zero is logged and gives an empty result.
pub fn select_top_k(freqs: &FrequencyMap, k: usize) -> TopKResult {
  LinearSelector.select(freqs, k)
}

/// Like [`select_top_k`], but reports a zero `k` as an error.
pub fn try_select_top_k(freqs: &FrequencyMap, k: usize) -> Result<TopKResult> {
  LinearSelector.try_select(freqs, k)
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Small deterministic generator so the property checks are reproducible.
  fn sample_map(seed: u64, words: usize) -> FrequencyMap {
    let mut state = seed;
    (0..words)
      .map(|i| {
        state = state
          .wrapping_mul(6364136223846793005)
          .wrapping_add(1442695040888963407);
        (format!("w{}", i), ((state >> 33) % 7) as usize)
      })
      .collect()
  }

  fn assert_valid_top_k(freqs: &FrequencyMap, k: usize, result: &TopKResult) {
    assert_eq!(result.len(), k.min(freqs.len()));

    for pair in result.entries().windows(2) {
      assert!(pair[0].count >= pair[1].count, "result not sorted");
    }

    if let Some(min) = result.min_count() {
      for (word, count) in freqs.iter() {
        if result.get(word).is_none() {
          assert!(count <= min, "{} ({}) beats minimum {}", word, count, min);
        }
      }
    }

    for entry in result.iter() {
      assert_eq!(freqs.get(&entry.word), Some(entry.count));
    }
  }

  #[test]
  fn test_zero_k_is_empty() {
    let freqs = sample_map(1, 20);
    for method in [SelectionMethod::Linear, SelectionMethod::Heap] {
      let selector = selector_for(method);
      assert!(selector.select(&freqs, 0).is_empty());
      assert!(matches!(
        selector.try_select(&freqs, 0),
        Err(Error::InvalidArgument { k: 0 })
      ));
    }
  }

  #[test]
  fn test_top_k_invariant_holds() {
    for seed in 0..25 {
      for words in [0, 1, 3, 10, 40] {
        let freqs = sample_map(seed, words);
        for k in [1, 2, 5, 10, 50] {
          for method in [SelectionMethod::Linear, SelectionMethod::Heap] {
            let result = selector_for(method).select(&freqs, k);
            assert_valid_top_k(&freqs, k, &result);
          }
        }
      }
    }
  }

  #[test]
  fn test_selectors_agree_on_counts() {
    for seed in 0..25 {
      let freqs = sample_map(seed, 30);
      let linear: Vec<usize> = LinearSelector.select(&freqs, 7).iter().map(|e| e.count).collect();
      let heap: Vec<usize> = HeapSelector.select(&freqs, 7).iter().map(|e| e.count).collect();
      assert_eq!(linear, heap);
    }
  }

  #[test]
  fn test_selector_kind() {
    assert_eq!(selector_for(SelectionMethod::Heap).kind(), SelectionMethod::Heap);
    assert_eq!(selector_for(SelectionMethod::Linear).kind(), SelectionMethod::Linear);
  }
}
