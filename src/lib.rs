//! Topwords - word frequency counting with bounded top-K selection.
//!
//! Topwords splits a text into words, counts how often each occurs and picks
//! the K most frequent without sorting the whole vocabulary. The fetch,
//! body extraction and cleanup steps used by the `topwords` binary live
//! beside the core and can be used on their own.

pub mod types;
pub mod error;
pub mod tokenizer;
pub mod counter;
pub mod selectors;
pub mod report;
pub mod ranker;
pub mod document;
pub mod config;
#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod cli;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::error::Error;
    pub use crate::tokenizer::*;
    pub use crate::counter::*;
    pub use crate::selectors::*;
    pub use crate::report::*;
    pub use crate::ranker::*;
}
