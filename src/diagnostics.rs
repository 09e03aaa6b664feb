//! Discovery events and the sink they are reported to.
//!
//! Skipped candidates never change control flow; they are reported here so
//! callers (and tests) can see why a lookup took the path it did.

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryEvent {
    /// A candidate URL was malformed, unreachable, or returned an
    /// unparseable document.
    CandidateSkipped { url: String, reason: String },
    /// LRDD template found in the host JRD.
    TemplateFound { template: String },
    /// Resource JRD URL built from the template.
    ResourceUrl { url: String },
    /// Modern lookup failed; trying legacy discovery.
    FallingBackToLegacy { reason: String },
}

pub trait DiagnosticSink: Send + Sync {
    fn record(&self, event: &DiscoveryEvent);
}

/// Default sink: forwards events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, event: &DiscoveryEvent) {
        match event {
            DiscoveryEvent::CandidateSkipped { url, reason } => {
                warn!(%url, %reason, "skipping JRD candidate");
            }
            DiscoveryEvent::TemplateFound { template } => {
                debug!(%template, "found LRDD template");
            }
            DiscoveryEvent::ResourceUrl { url } => {
                debug!(%url, "resource JRD URL");
            }
            DiscoveryEvent::FallingBackToLegacy { reason } => {
                warn!(%reason, "WebFinger lookup failed, falling back to host-meta discovery");
            }
        }
    }
}
