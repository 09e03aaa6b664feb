//! WebFinger client.
//!
//! Resolves identifiers such as `acct:alice@example.com` to a JSON Resource
//! Descriptor, using either an RFC 7033 `/.well-known/webfinger` query or the
//! legacy host-meta discovery chain:
//!
//! 1. fetch the host JRD from the first working `/.well-known/host-meta(.json)`
//!    candidate (`https://` before `http://`, JSON before XRD-era paths),
//! 2. read the `lrdd` link's `{uri}` template,
//! 3. fetch the resource JRD from the expanded template.
//!
//! The transport is a [`Fetcher`]; [`HttpFetcher`] is the reqwest
//! implementation. Skipped candidates are reported through a
//! [`DiagnosticSink`].

mod client;
mod config;
mod diagnostics;
mod error;
mod fetch;
mod legacy;
mod modern;
mod resource;
mod template;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use diagnostics::{DiagnosticSink, DiscoveryEvent, TracingSink};
pub use error::{CandidateError, Result, WebFingerError};
pub use fetch::{FetchError, Fetcher, HttpFetcher, JRD_ACCEPT};
pub use legacy::legacy_host_meta_urls;
pub use modern::modern_webfinger_urls;
pub use resource::Resource;
pub use template::expand_template;
pub use webfinger_jrd::{Jrd, JrdError, Link, Properties, LRDD_REL};
