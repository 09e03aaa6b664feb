//! Legacy WebFinger discovery: host-meta → LRDD template → resource JRD.

use webfinger_jrd::{Jrd, LRDD_REL};

use crate::client::Client;
use crate::diagnostics::DiscoveryEvent;
use crate::error::{Result, WebFingerError};
use crate::fetch::Fetcher;
use crate::resource::Resource;
use crate::template::expand_template;

/// Well-known host metadata URLs for `domain`, most preferred first.
///
/// JSON host-meta comes before the XRD-era path, and every
/// `https://` URL comes before any `http://` one.
pub fn legacy_host_meta_urls(domain: &str, allow_insecure: bool) -> Vec<String> {
    let mut urls = vec![
        format!("https://{domain}/.well-known/host-meta.json"),
        format!("https://{domain}/.well-known/host-meta"),
    ];
    if allow_insecure {
        urls.push(format!("http://{domain}/.well-known/host-meta.json"));
        urls.push(format!("http://{domain}/.well-known/host-meta"));
    }
    urls
}

impl<F: Fetcher> Client<F> {
    /// Fetch the host JRD for `domain` and return its LRDD template.
    ///
    /// # Errors
    /// `NotFound` when no host-meta candidate yields a JRD, `MissingLink`
    /// when it has no `lrdd` link, `MissingTemplate` when that link has no
    /// usable template. An `href`-only `lrdd` link is not followed.
    pub async fn legacy_resource_template(&self, domain: &str) -> Result<String> {
        let urls = legacy_host_meta_urls(domain, self.config().allow_insecure);
        let host_jrd = self.find_jrd(&urls).await?;
        lrdd_template(&host_jrd).map(str::to_string)
    }

    /// Resolve a resource through legacy host-meta discovery.
    ///
    /// # Errors
    /// Any error from [`Client::legacy_resource_template`], or `FinalFetch`
    /// when the resource JRD itself cannot be fetched or parsed.
    pub async fn legacy_get_jrd(&self, resource: &Resource) -> Result<Jrd> {
        let template = self
            .legacy_resource_template(resource.webfinger_host())
            .await?;
        self.record(DiscoveryEvent::TemplateFound {
            template: template.clone(),
        });

        let url = expand_template(&template, resource);
        self.record(DiscoveryEvent::ResourceUrl { url: url.clone() });

        match self.fetch_jrd(&url).await {
            Ok(jrd) => Ok(jrd),
            Err(source) => {
                self.skip(&url, &source);
                Err(WebFingerError::FinalFetch { url, source })
            }
        }
    }
}

fn lrdd_template(host_jrd: &Jrd) -> Result<&str> {
    let link = host_jrd
        .link_by_rel(LRDD_REL)
        .ok_or(WebFingerError::MissingLink { rel: LRDD_REL })?;
    link.usable_template().ok_or(WebFingerError::MissingTemplate)
}
