// src/core/net.rs
//! Blocking HTTP and the politeness layer on top of it.
//!
//! Every outbound request goes through [`Fetch`]. [`HttpClient`] is the real network;
//! [`PoliteFetcher`] wraps any `Fetch` and enforces the source's pacing contract:
//! a minimum spacing between consecutive requests, and a settle wait after each page
//! so dynamically rendered content is complete before records are read.

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::header;

use crate::config::consts::USER_AGENT;
use crate::config::options::Politeness;
use crate::error::{Result, ScrapeError};

pub trait Fetch {
    /// Fetch a page as text. Non-success status and empty bodies are errors.
    fn get_text(&self, url: &str) -> Result<String>;

    /// Fetch raw bytes (images).
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get_text(&self, url: &str) -> Result<String> { (**self).get_text(url) }
    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> { (**self).get_bytes(url) }
}

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScrapeError::Fetch { url: s!("<client>"), reason: e.to_string() })?;
        Ok(Self { client })
    }

    fn send(&self, url: &str) -> Result<reqwest::blocking::Response> {
        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "text/html,image/*;q=0.9,*/*;q=0.8")
            .send()
            .map_err(|e| {
                let reason = if e.is_timeout() { s!("timed out") } else { e.to_string() };
                ScrapeError::Fetch { url: s!(url), reason }
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status { url: s!(url), status: status.as_u16() });
        }
        Ok(resp)
    }
}

impl Fetch for HttpClient {
    fn get_text(&self, url: &str) -> Result<String> {
        let body = self
            .send(url)?
            .text()
            .map_err(|e| ScrapeError::Fetch { url: s!(url), reason: e.to_string() })?;
        if body.trim().is_empty() {
            return Err(ScrapeError::EmptyRender { url: s!(url) });
        }
        Ok(body)
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .send(url)?
            .bytes()
            .map_err(|e| ScrapeError::Fetch { url: s!(url), reason: e.to_string() })?;
        Ok(bytes.to_vec())
    }
}

/// Minimum spacing between consecutive calls to [`Throttle::wait`], counted from the
/// later of the previous `wait` and the previous [`Throttle::done`]. The first call never sleeps.
pub struct Throttle {
    spacing: Duration,
    last: Cell<Option<Instant>>,
}

impl Throttle {
    pub fn new(spacing: Duration) -> Self {
        Self { spacing, last: Cell::new(None) }
    }

    pub fn wait(&self) {
        if let Some(last) = self.last.get() {
            let since = last.elapsed();
            if since < self.spacing {
                thread::sleep(self.spacing - since);
            }
        }
        self.last.set(Some(Instant::now()));
    }

    /// The request started by the last `wait` has finished.
    pub fn done(&self) {
        self.last.set(Some(Instant::now()));
    }
}

/// Politeness decorator. Single-threaded on purpose: the pacing state is a `Cell`.
pub struct PoliteFetcher<F> {
    inner: F,
    throttle: Throttle,
    settle: Duration,
}

impl<F: Fetch> PoliteFetcher<F> {
    pub fn new(inner: F, politeness: Politeness) -> Self {
        Self {
            inner,
            throttle: Throttle::new(politeness.spacing),
            settle: politeness.settle,
        }
    }
}

impl<F: Fetch> Fetch for PoliteFetcher<F> {
    fn get_text(&self, url: &str) -> Result<String> {
        self.throttle.wait();
        logd!("GET {url}");
        let page = self.inner.get_text(url);
        self.throttle.done();
        if !self.settle.is_zero() {
            thread::sleep(self.settle);
        }
        page
    }

    fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        self.throttle.wait();
        logd!("GET (bytes) {url}");
        let bytes = self.inner.get_bytes(url);
        self.throttle.done();
        bytes
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Remembers when each request started and finished.
    #[derive(Default)]
    struct Clock {
        spans: RefCell<Vec<(Instant, Instant)>>,
    }

    impl Fetch for Clock {
        fn get_text(&self, _url: &str) -> Result<String> {
            let start = Instant::now();
            thread::sleep(Duration::from_millis(2));
            self.spans.borrow_mut().push((start, Instant::now()));
            Ok(s!("<html></html>"))
        }

        fn get_bytes(&self, _url: &str) -> Result<Vec<u8>> {
            let start = Instant::now();
            self.spans.borrow_mut().push((start, Instant::now()));
            Ok(vec![0])
        }
    }

    fn politeness(settle_ms: u64, spacing_ms: u64) -> Politeness {
        Politeness {
            settle: Duration::from_millis(settle_ms),
            spacing: Duration::from_millis(spacing_ms),
            timeout: Duration::from_secs(1),
        }
    }

    #[test]
    fn polite_fetcher_spaces_requests() {
        let clock = Clock::default();
        let polite = PoliteFetcher::new(&clock, politeness(0, 25));
        polite.get_text("a").unwrap();
        polite.get_bytes("b").unwrap();
        polite.get_text("c").unwrap();

        let spans = clock.spans.borrow();
        assert_eq!(spans.len(), 3);
        for pair in spans.windows(2) {
            // next request starts at least `spacing` after the previous one ended
            assert!(pair[1].0 - pair[0].1 >= Duration::from_millis(25));
        }
    }

    #[test]
    fn pages_settle_but_bytes_do_not() {
        let clock = Clock::default();
        let polite = PoliteFetcher::new(&clock, politeness(60, 0));

        let start = Instant::now();
        polite.get_text("page").unwrap();
        assert!(start.elapsed() >= Duration::from_millis(60));

        let start = Instant::now();
        polite.get_bytes("logo").unwrap();
        assert!(start.elapsed() < Duration::from_millis(60));
    }

    #[test]
    fn throttle_spaces_consecutive_calls() {
        let t = Throttle::new(Duration::from_millis(30));
        let start = Instant::now();
        t.wait();
        t.wait();
        t.wait();
        assert!(start.elapsed() >= Duration::from_millis(60));
    }

    #[test]
    fn first_wait_is_free() {
        let t = Throttle::new(Duration::from_secs(5));
        let start = Instant::now();
        t.wait();
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
