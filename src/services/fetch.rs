//! Background feed fetch service
//!
//! Handles retrieving and parsing the feed on a background thread so the
//! UI stays responsive while a request is in flight. The result comes back
//! over an mpsc channel drained from the Tick handler.

use crate::model::GalleryEntry;
use crate::services::feed;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Terminal outcome of one fetch request.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Feed retrieved and parsed. The list may be empty.
    Entries(Vec<GalleryEntry>),
    /// Transport failure, non-success status, or malformed body.
    Failed(String),
}

/// Fetch runner service for retrieving the feed.
///
/// Spawning a new fetch replaces the pending channel, so when requests
/// overlap the newest one's outcome is the one applied.
pub struct FetchRunner {
    /// Receiver for the pending request (if any)
    pending: Option<Receiver<FetchOutcome>>,
}

impl Default for FetchRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchRunner {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Whether a request is still in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Spawn a background fetch for the given URL, replacing any pending
    /// request.
    pub fn spawn(&mut self, url: String) {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let _ = tx.send(request(&url));
        });

        self.pending = Some(rx);
    }

    /// Poll for a completed fetch without blocking.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let receiver = self.pending.as_ref()?;

        match receiver.try_recv() {
            Ok(outcome) => {
                self.pending = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Some(FetchOutcome::Failed(
                    "fetch thread terminated without a result".to_string(),
                ))
            }
        }
    }
}

/// Perform one blocking GET against the feed URL and classify the result.
fn request(url: &str) -> FetchOutcome {
    let response = match reqwest::blocking::get(url) {
        Ok(response) => response,
        Err(e) => return FetchOutcome::Failed(format!("request failed: {}", e)),
    };

    let status = response.status();
    if !status.is_success() {
        return FetchOutcome::Failed(format!("feed returned HTTP {}", status));
    }

    let body = match response.text() {
        Ok(body) => body,
        Err(e) => return FetchOutcome::Failed(format!("failed to read response body: {}", e)),
    };

    match feed::parse_feed(&body) {
        Ok(entries) => FetchOutcome::Entries(entries),
        Err(e) => FetchOutcome::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_without_a_pending_request_returns_none() {
        let mut runner = FetchRunner::new();
        assert!(!runner.is_pending());
        assert!(runner.poll().is_none());
    }

    #[test]
    fn poll_delivers_a_sent_outcome_and_clears_the_request() {
        let (tx, rx) = mpsc::channel();
        let mut runner = FetchRunner { pending: Some(rx) };

        tx.send(FetchOutcome::Entries(vec![GalleryEntry::default()]))
            .expect("send should succeed");

        match runner.poll() {
            Some(FetchOutcome::Entries(entries)) => assert_eq!(entries.len(), 1),
            other => panic!("expected entries, got {:?}", other),
        }
        assert!(!runner.is_pending());
    }

    #[test]
    fn poll_leaves_the_request_pending_while_the_channel_is_empty() {
        let (_tx, rx) = mpsc::channel::<FetchOutcome>();
        let mut runner = FetchRunner { pending: Some(rx) };

        assert!(runner.poll().is_none());
        assert!(runner.is_pending());
    }

    #[test]
    fn poll_reports_a_dropped_sender_as_failure() {
        let (tx, rx) = mpsc::channel::<FetchOutcome>();
        let mut runner = FetchRunner { pending: Some(rx) };
        drop(tx);

        match runner.poll() {
            Some(FetchOutcome::Failed(_)) => {}
            other => panic!("expected a failure, got {:?}", other),
        }
        assert!(!runner.is_pending());
    }
}
