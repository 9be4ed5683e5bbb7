//! Word occurrence counting.

use crate::tokenizer::{DelimiterTokenizer, Tokenizer};
use crate::types::FrequencyMap;

#[cfg(feature = "parallel")]
use dashmap::DashMap;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Counts word occurrences using the default [`DelimiterTokenizer`].
///
/// Empty tokens are not counted, so an empty or all-punctuation text gives
/// an empty map.
pub fn count_words(text: &str) -> FrequencyMap {
  let mut freqs = FrequencyMap::new();
  for token in DelimiterTokenizer::new().split(text) {
    freqs.increment(token);
  }
  freqs
}

/// Counts word occurrences using any [`Tokenizer`].
pub fn count_with(tokenizer: &dyn Tokenizer, text: &str) -> FrequencyMap {
  let mut freqs = FrequencyMap::new();
  for token in tokenizer.tokenize(text) {
    freqs.increment(&token);
  }
  freqs
}

/// Counts word occurrences line by line on the rayon thread pool.
///
/// Newlines are delimiters, so splitting on them never cuts a word in two.
/// The result equals [`count_words`] on the same text.
#[cfg(feature = "parallel")]
pub fn count_words_parallel(text: &str) -> FrequencyMap {
  let counts: DashMap<String, usize> = DashMap::new();
  let tokenizer = DelimiterTokenizer::new();

  text.par_lines().for_each(|line| {
    for token in tokenizer.split(line) {
      match counts.get_mut(token) {
        Some(mut count) => *count += 1,
        None => *counts.entry(token.to_string()).or_insert(0) += 1,
      }
    }
  });

  counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_term_frequencies() {
    let text = "the quick brown fox jumps over the lazy dog";
    let freqs = count_words(text);
    assert_eq!(freqs.get("the"), Some(2));
    assert_eq!(freqs.get("quick"), Some(1));
    assert_eq!(freqs.get("brown"), Some(1));
    assert_eq!(freqs.total(), 9);
  }

  #[test]
  fn test_punctuation_run_collapses() {
    let freqs = count_words("a, a! a? a.");
    assert_eq!(freqs.len(), 1);
    assert_eq!(freqs.get("a"), Some(4));
  }

  #[test]
  fn test_empty_text_filtered() {
    assert!(count_words("").is_empty());
    assert!(count_words("?!").is_empty());
  }

  #[test]
  fn test_empty_text_kept() {
    let tokenizer = DelimiterTokenizer::new().keep_empty(true);
    let freqs = count_with(&tokenizer, "");
    assert_eq!(freqs.get(""), Some(1));

    let freqs = count_with(&tokenizer, "- one, two -");
    assert_eq!(freqs.get(""), Some(2));
    assert_eq!(freqs.get("one"), Some(1));
  }

  #[test]
  fn test_single_word() {
    let freqs = count_words("tolstoy");
    assert_eq!(freqs.len(), 1);
    assert_eq!(freqs.get("tolstoy"), Some(1));
  }

  #[test]
  fn test_counting_is_idempotent() {
    let text = "Well, Prince, so Genoa and Lucca are now just family estates.";
    assert_eq!(count_words(text), count_words(text));
  }

  #[cfg(feature = "parallel")]
  #[test]
  fn test_parallel_matches_sequential() {
    let text = "one two\nthree, two\n\n- one one -\nfour";
    assert_eq!(count_words_parallel(text), count_words(text));
  }
}
