//! The pipeline that turns text into its most frequent words.

use crate::config::Config;
use crate::counter::count_with;
use crate::document::{clean_markup, extract_body, Replacement};
use crate::error::Result;
use crate::report::Report;
use crate::selectors::{selector_for, Selector};
use crate::tokenizer::{DelimiterTokenizer, Tokenizer};
use crate::types::{FrequencyMap, SelectionMethod, TopKResult};

/// Number of words reported when no limit is configured.
pub const DEFAULT_LIMIT: usize = 10;

/// Composes a [`Tokenizer`] and a [`Selector`] into a single ranking step.
///
/// A `WordRanker` holds no per-document state, so one instance can rank any
/// number of documents, from any number of threads.
///
/// Create a `WordRanker` using the [`WordRankerBuilder`].
///
/// # Examples
///
/// ```rust
/// use topwords::prelude::*;
///
/// let ranker = WordRanker::builder()
///     .selection(SelectionMethod::Heap)
///     .limit(2)
///     .build();
///
/// let top = ranker.rank("cat dog cat bird cat dog");
/// assert_eq!(top.get("cat"), Some(3));
/// assert_eq!(top.get("dog"), Some(2));
/// assert_eq!(top.get("bird"), None);
/// ```
pub struct WordRanker {
  tokenizer: Box<dyn Tokenizer>,
  selector: Box<dyn Selector>,
  limit: usize,
  /// Cleanup applied by [`WordRanker::rank_page`] before counting.
  replacements: Vec<Replacement>,
}

impl WordRanker {
  /// Creates a new `WordRankerBuilder` to construct a ranker.
  pub fn builder() -> WordRankerBuilder {
    WordRankerBuilder::new()
  }

  /// Builds a ranker from loaded configuration.
  pub fn from_config(config: &Config) -> Self {
    Self::builder()
      .tokenizer(Box::new(DelimiterTokenizer::new().keep_empty(config.keep_empty)))
      .selection(config.method)
      .limit(config.top)
      .replacements(config.replacements.clone())
      .build()
  }

  /// The number of words this ranker reports.
  pub fn limit(&self) -> usize {
    self.limit
  }

  /// Counts word occurrences in `text`.
  pub fn count(&self, text: &str) -> FrequencyMap {
    let freqs = count_with(self.tokenizer.as_ref(), text);
    log::debug!(
      "counted {} words, {} distinct",
      freqs.total(),
      freqs.len()
    );
    freqs
  }

  /// Returns the most frequent words in `text`, by descending count.
  ///
  /// A limit of zero is logged and yields an empty result.
  pub fn rank(&self, text: &str) -> TopKResult {
    self.selector.select(&self.count(text), self.limit)
  }

  /// Like [`WordRanker::rank`], but reports a zero limit as an error.
  pub fn try_rank(&self, text: &str) -> Result<TopKResult> {
    self.selector.try_select(&self.count(text), self.limit)
  }

  /// Counts and ranks `text`, keeping the document totals.
  pub fn report(&self, text: &str) -> Report {
    let freqs = self.count(text);
    let top = self.selector.select(&freqs, self.limit);
    log::debug!("selected {} of {} words", top.len(), freqs.len());
    Report::new(&freqs, top)
  }

  /// Ranks a fetched page: finds the body after `marker` (when given),
  /// applies the configured cleanup, then counts and ranks it.
  ///
  /// # Errors
  ///
  /// Returns [`Error::BoundaryNotFound`](crate::error::Error::BoundaryNotFound)
  /// if `marker` does not occur in `page`.
  pub fn rank_page(&self, page: &str, marker: Option<&str>) -> Result<Report> {
    let body = match marker {
      Some(marker) => extract_body(page, marker).map_err(|err| {
        log::error!("{}", err);
        err
      })?,
      None => page,
    };
    let text = clean_markup(body, &self.replacements);
    Ok(self.report(&text))
  }
}

impl Default for WordRanker {
  fn default() -> Self {
    Self::builder().build()
  }
}

/// A builder for creating `WordRanker` instances.
///
/// Unset parts default to a [`DelimiterTokenizer`] that drops empty tokens,
/// the [`SelectionMethod::Linear`] selector, a limit of [`DEFAULT_LIMIT`] and
/// no cleanup replacements.
#[derive(Default)]
pub struct WordRankerBuilder {
  tokenizer: Option<Box<dyn Tokenizer>>,
  selector: Option<Box<dyn Selector>>,
  limit: Option<usize>,
  replacements: Vec<Replacement>,
}

impl WordRankerBuilder {
  /// Creates a new, empty `WordRankerBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the tokenizer used to split text into words.
  pub fn tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
    self.tokenizer = Some(tokenizer);
    self
  }

  /// Uses the built-in selector for `method`.
  pub fn selection(mut self, method: SelectionMethod) -> Self {
    self.selector = Some(selector_for(method));
    self
  }

  /// Uses a custom selector.
  pub fn selector(mut self, selector: Box<dyn Selector>) -> Self {
    self.selector = Some(selector);
    self
  }

  /// Sets how many words to report.
  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }

  /// Sets the cleanup replacements used by [`WordRanker::rank_page`].
  pub fn replacements(mut self, replacements: Vec<Replacement>) -> Self {
    self.replacements = replacements;
    self
  }

  /// Builds the `WordRanker` with the configured components.
  pub fn build(self) -> WordRanker {
    WordRanker {
      tokenizer: self
        .tokenizer
        .unwrap_or_else(|| Box::new(DelimiterTokenizer::new())),
      selector: self
        .selector
        .unwrap_or_else(|| selector_for(SelectionMethod::default())),
      limit: self.limit.unwrap_or(DEFAULT_LIMIT),
      replacements: self.replacements,
    }
  }
}
