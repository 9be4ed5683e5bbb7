//! Downloading the source document.
//!
//! [`spawn_fetch`] runs the request on a worker thread and hands back a
//! single `Result` over a channel, so the caller has one place to handle
//! both success and failure.

use crate::error::{Error, Result};
use std::sync::mpsc::{self, Receiver};
use std::thread;

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Error::Fetch(Box::new(err))
  }
}

/// Fetches `url` and returns the response body as text.
///
/// # Errors
///
/// Returns [`Error::Fetch`] if the request fails or the server answers with
/// an error status.
pub fn fetch_document(url: &str) -> Result<String> {
  log::info!("fetching {}", url);
  let response = reqwest::blocking::get(url)?.error_for_status()?;
  let body = response.text()?;
  log::debug!("fetched {} bytes from {}", body.len(), url);
  Ok(body)
}

/// Starts fetching `url` on a background thread.
///
/// The returned receiver yields exactly one value: the document text or the
/// error that prevented fetching it.
pub fn spawn_fetch(url: impl Into<String>) -> Receiver<Result<String>> {
  let url = url.into();
  let (tx, rx) = mpsc::channel();
  thread::spawn(move || {
    let outcome = fetch_document(&url);
    if let Err(err) = &outcome {
      log::error!("failed to fetch {}: {}", url, err);
    }
    // The receiver may already be gone; nothing left to report to.
    let _ = tx.send(outcome);
  });
  rx
}

/// Blocks until the worker behind `rx` reports its outcome.
pub fn wait_for(rx: Receiver<Result<String>>) -> Result<String> {
  rx.recv().map_err(|_| Error::FetchDisconnected)?
}
