use std::sync::Arc;

use tracing::debug;
use url::Url;
use webfinger_jrd::Jrd;

use crate::config::ClientConfig;
use crate::diagnostics::{DiagnosticSink, DiscoveryEvent, TracingSink};
use crate::error::{CandidateError, Result, WebFingerError};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::resource::Resource;

/// WebFinger client.
///
/// Holds no state between lookups: every call runs the full discovery
/// chain again, so concurrent lookups on a shared client are independent.
pub struct Client<F = HttpFetcher> {
    fetcher: F,
    config: ClientConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl Client<HttpFetcher> {
    /// Client over HTTP with the given configuration.
    ///
    /// # Errors
    /// Returns `WebFingerError::HttpClient` if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(fetcher, config))
    }
}

impl<F: Fetcher> Client<F> {
    pub fn with_fetcher(fetcher: F, config: ClientConfig) -> Self {
        Self {
            fetcher,
            config,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the default `tracing` sink.
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parse `identifier` (`acct:user@host` or `user@host`) and look it up
    /// as [`Client::get_jrd`] does, passing `rels` to the WebFinger query.
    ///
    /// The relation filter only applies to RFC 7033 lookup; a JRD found
    /// through legacy discovery is returned whole.
    ///
    /// # Errors
    /// `InvalidResource` for a malformed identifier, otherwise as
    /// [`Client::get_jrd`].
    pub async fn lookup(&self, identifier: &str, rels: &[&str]) -> Result<Jrd> {
        let resource = Resource::parse(identifier)?;
        self.discover(&resource, rels).await
    }

    /// Look up a resource, trying RFC 7033 WebFinger first and legacy
    /// host-meta discovery second.
    ///
    /// # Errors
    /// When both fail, returns the legacy discovery error.
    pub async fn get_jrd(&self, resource: &Resource) -> Result<Jrd> {
        self.discover(resource, &[]).await
    }

    async fn discover(&self, resource: &Resource, rels: &[&str]) -> Result<Jrd> {
        match self.modern_get_jrd(resource, rels).await {
            Ok(jrd) => Ok(jrd),
            Err(err) => {
                self.sink.record(&DiscoveryEvent::FallingBackToLegacy {
                    reason: err.to_string(),
                });
                self.legacy_get_jrd(resource).await
            }
        }
    }

    /// Try each candidate in order and return the first JRD that fetches
    /// and parses. Failures are reported to the sink and skipped.
    pub(crate) async fn find_jrd(&self, candidates: &[String]) -> Result<Jrd> {
        for candidate in candidates {
            match self.fetch_jrd(candidate).await {
                Ok(jrd) => {
                    debug!(url = %candidate, "found JRD");
                    return Ok(jrd);
                }
                Err(err) => self.skip(candidate, &err),
            }
        }
        Err(WebFingerError::NotFound {
            tried: candidates.len(),
        })
    }

    /// Fetch and parse a single candidate.
    pub(crate) async fn fetch_jrd(&self, candidate: &str) -> std::result::Result<Jrd, CandidateError> {
        let url = Url::parse(candidate)?;
        let body = self.fetcher.fetch(&url).await?;
        Ok(Jrd::parse(&body)?)
    }

    pub(crate) fn skip(&self, candidate: &str, err: &CandidateError) {
        self.sink.record(&DiscoveryEvent::CandidateSkipped {
            url: candidate.to_string(),
            reason: err.to_string(),
        });
    }

    pub(crate) fn record(&self, event: DiscoveryEvent) {
        self.sink.record(&event);
    }
}
