//! Text tokenization.
//!
//! The [`Tokenizer`] trait is the seam between raw text and counting. The
//! default [`DelimiterTokenizer`] splits on runs of punctuation and
//! whitespace; with the `unicode` feature, [`UnicodeWordTokenizer`] splits on
//! Unicode word boundaries instead.

use std::borrow::Cow;

#[cfg(feature = "unicode")]
use unicode_segmentation::UnicodeSegmentation;

/// Punctuation that separates words, in addition to whitespace.
pub const DELIMITERS: [char; 9] = ['.', ',', '!', '?', ':', ';', '\'', '"', '-'];

/// Returns true if `c` separates words.
pub fn is_delimiter(c: char) -> bool {
  c.is_whitespace() || DELIMITERS.contains(&c)
}

/// A strategy for turning text into a sequence of word tokens.
///
/// Implementations must be pure: the same text always yields the same
/// tokens. The `Send` and `Sync` bounds let one tokenizer be shared by
/// callers on different threads.
pub trait Tokenizer: Send + Sync {
  /// Splits `text` into tokens, in order of appearance.
  fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>>;
}

/// Splits text on runs of [`DELIMITERS`] and whitespace.
///
/// A run of consecutive delimiters is a single split point, so adjacent
/// punctuation never produces empty tokens in the middle of the text. Tokens
/// keep their original case.
///
/// Empty tokens can still appear at the edges: a leading or trailing
/// delimiter run splits off an empty token at that end, and an empty text is
/// a single empty token. They are dropped unless `keep_empty` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterTokenizer {
  /// Keep the empty tokens produced at the edges of the text.
  pub keep_empty: bool,
}

impl DelimiterTokenizer {
  /// Creates a tokenizer that drops empty tokens.
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets whether empty edge tokens are kept.
  pub fn keep_empty(mut self, keep_empty: bool) -> Self {
    self.keep_empty = keep_empty;
    self
  }

  /// Splits `text` into borrowed slices without allocating per token.
  pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_run = false;

    for (i, c) in text.char_indices() {
      if is_delimiter(c) {
        if !in_run {
          tokens.push(&text[start..i]);
          in_run = true;
        }
      } else if in_run {
        start = i;
        in_run = false;
      }
    }

    if in_run {
      tokens.push("");
    } else {
      tokens.push(&text[start..]);
    }

    if !self.keep_empty {
      tokens.retain(|t| !t.is_empty());
    }
    tokens
  }
}

impl Tokenizer for DelimiterTokenizer {
  fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
    self.split(text).into_iter().map(Cow::Borrowed).collect()
  }
}

/// Splits text on Unicode word boundaries (UAX #29).
///
/// Punctuation and whitespace are never tokens. With `lowercase` set,
/// "The" and "the" count as the same word.
#[cfg(feature = "unicode")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnicodeWordTokenizer {
  pub lowercase: bool,
}

#[cfg(feature = "unicode")]
impl UnicodeWordTokenizer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn lowercase(mut self, lowercase: bool) -> Self {
    self.lowercase = lowercase;
    self
  }
}

#[cfg(feature = "unicode")]
impl Tokenizer for UnicodeWordTokenizer {
  fn tokenize<'a>(&self, text: &'a str) -> Vec<Cow<'a, str>> {
    text
      .unicode_words()
      .map(|word| {
        if self.lowercase {
          Cow::Owned(word.to_lowercase())
        } else {
          Cow::Borrowed(word)
        }
      })
      .collect()
  }
}

/// Tokenize text with the default [`DelimiterTokenizer`].
pub fn tokenize(text: &str) -> Vec<&str> {
  DelimiterTokenizer::new().split(text)
}
