//! JSON Resource Descriptor (JRD) model for WebFinger discovery.
//!
//! A JRD describes a resource through its subject, aliases, properties and
//! links. Both RFC 7033 WebFinger responses and legacy `host-meta.json`
//! documents use this shape.
//!
//! HTTP fetching is handled by the caller. This crate only parses documents
//! and reads values out of them.

mod error;
mod parse;
mod types;

pub use error::JrdError;
pub use types::{Jrd, Link, Properties};

/// Link relation pointing at the per-resource descriptor template.
pub const LRDD_REL: &str = "lrdd";

/// Placeholder replaced with the resource URI in an LRDD template.
pub const URI_TEMPLATE_TOKEN: &str = "{uri}";
