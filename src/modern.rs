//! RFC 7033 WebFinger lookup.

use webfinger_jrd::Jrd;

use crate::client::Client;
use crate::error::Result;
use crate::fetch::Fetcher;
use crate::resource::Resource;
use crate::template::query_escape;

/// `/.well-known/webfinger` URLs for `resource`, `https://` first.
///
/// Each entry of `rels` becomes a `rel=` query parameter, in order.
pub fn modern_webfinger_urls(
    resource: &Resource,
    rels: &[&str],
    allow_insecure: bool,
) -> Vec<String> {
    let host = resource.webfinger_host();
    let mut query = format!("resource={}", query_escape(&resource.as_uri_string()));
    for rel in rels {
        query.push_str("&rel=");
        query.push_str(&query_escape(rel));
    }

    let mut urls = vec![format!("https://{host}/.well-known/webfinger?{query}")];
    if allow_insecure {
        urls.push(format!("http://{host}/.well-known/webfinger?{query}"));
    }
    urls
}

impl<F: Fetcher> Client<F> {
    /// Resolve a resource with a direct WebFinger query.
    ///
    /// `rels` asks the server to return only those link relations; servers
    /// are free to ignore it.
    ///
    /// # Errors
    /// `NotFound` when no WebFinger endpoint returns a JRD.
    pub async fn modern_get_jrd(&self, resource: &Resource, rels: &[&str]) -> Result<Jrd> {
        let urls = modern_webfinger_urls(resource, rels, self.config().allow_insecure);
        self.find_jrd(&urls).await
    }
}
