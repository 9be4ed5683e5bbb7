use topwords::prelude::*;

fn ranked(text: &str, k: usize) -> Vec<(String, usize)> {
  select_top_k(&count_words(text), k)
    .into_iter()
    .map(|e| (e.word, e.count))
    .collect()
}

#[test]
fn test_most_frequent_two() {
  assert_eq!(
    ranked("cat dog cat bird cat dog", 2),
    vec![("cat".to_string(), 3), ("dog".to_string(), 2)]
  );
}

#[test]
fn test_punctuation_collapses() {
  assert_eq!(ranked("a, a! a? a.", 1), vec![("a".to_string(), 4)]);
}

#[test]
fn test_fewer_words_than_k() {
  let result = ranked("one two three", 10);
  assert_eq!(
    result,
    vec![
      ("one".to_string(), 1),
      ("three".to_string(), 1),
      ("two".to_string(), 1),
    ]
  );
}

#[test]
fn test_empty_map() {
  let freqs = FrequencyMap::new();
  assert!(select_top_k(&freqs, 5).is_empty());
  assert!(try_select_top_k(&freqs, 5).unwrap().is_empty());
}

#[test]
fn test_zero_k() {
  let freqs = count_words("cat dog cat bird cat dog");
  assert!(select_top_k(&freqs, 0).is_empty());
  assert!(matches!(
    try_select_top_k(&freqs, 0),
    Err(Error::InvalidArgument { k: 0 })
  ));
}

#[test]
fn test_empty_text() {
  assert!(count_words("").is_empty());
  assert!(ranked("", 10).is_empty());

  let keep = DelimiterTokenizer::new().keep_empty(true);
  let freqs = count_with(&keep, "");
  assert_eq!(freqs.len(), 1);
  assert_eq!(freqs.get(""), Some(1));
}

#[test]
fn test_heap_and_linear_agree() {
  let text = "It was the best of times, it was the worst of times, it was the age of \
              wisdom, it was the age of foolishness, it was the epoch of belief";
  let freqs = count_words(text);

  let linear = LinearSelector.select(&freqs, 3);
  let heap = HeapSelector.select(&freqs, 3);

  assert_eq!(linear, heap);
  assert_eq!(linear.entries()[0], WordCount::new("of", 5));
  assert_eq!(linear.entries()[1], WordCount::new("the", 5));
  assert_eq!(linear.entries()[2], WordCount::new("was", 5));
  assert_eq!(freqs.get("it"), Some(4));
}

#[test]
fn test_report_lines() {
  let ranker = WordRanker::builder().limit(2).build();
  let report = ranker.report("cat dog cat bird cat dog");
  assert_eq!(report.to_string(), "cat -> 3\ndog -> 2\n");
  assert_eq!(report.distinct, 3);
}
