use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};

/// Property map keyed by URI. `None` is an explicit JSON `null`.
pub type Properties = BTreeMap<String, Option<String>>;

/// JSON Resource Descriptor.
///
/// Every member is optional; `{}` is a valid (empty) descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Jrd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aliases: Vec<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: Properties,
    /// Order is significant: lookups return the first matching relation.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

/// A link to a related resource.
///
/// A link normally carries either `href` or `template`, but nothing here
/// enforces that; callers check for the one they need.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Link {
    #[serde(default, deserialize_with = "null_as_default")]
    pub rel: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Language tag → title.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub titles: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: Properties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl Jrd {
    /// First link whose `rel` equals `rel` exactly.
    pub fn link_by_rel(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|link| link.rel == rel)
    }

    /// All links with the given relation, in document order.
    pub fn links_by_rel<'a>(&'a self, rel: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.rel == rel)
    }

    /// Property value as a string. Missing keys and `null` values both
    /// read as `""`.
    pub fn property(&self, uri: &str) -> &str {
        property_str(&self.properties, uri)
    }

    /// The `expires` member parsed as an RFC 3339 timestamp.
    ///
    /// Returns `None` when absent or not parseable. Expiry is informational
    /// and is not enforced anywhere in discovery.
    pub fn expires_at(&self) -> Option<DateTime<FixedOffset>> {
        self.expires
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
    }
}

impl Link {
    /// Property value as a string, with the same null handling as
    /// [`Jrd::property`].
    pub fn property(&self, uri: &str) -> &str {
        property_str(&self.properties, uri)
    }

    /// Title for a language tag (e.g. `"en-us"` or `"und"`).
    pub fn title(&self, lang: &str) -> Option<&str> {
        self.titles.get(lang).map(String::as_str)
    }

    /// The template, if present and non-empty.
    pub fn usable_template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }
}

fn property_str<'a>(properties: &'a Properties, uri: &str) -> &'a str {
    properties
        .get(uri)
        .and_then(|v| v.as_deref())
        .unwrap_or("")
}

// JRD producers in the wild send `null` for empty arrays and objects.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(rel: &str, href: &str) -> Link {
        Link {
            rel: rel.to_string(),
            href: Some(href.to_string()),
            ..Default::default()
        }
    }

    fn props(entries: &[(&str, Option<&str>)]) -> Properties {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn link_by_rel_returns_first_match() {
        let jrd = Jrd {
            links: vec![
                link("self", "https://example.com/first"),
                link("lrdd", "https://example.com/lrdd"),
                link("self", "https://example.com/second"),
            ],
            ..Default::default()
        };
        let found = jrd.link_by_rel("self").unwrap();
        assert_eq!(found.href.as_deref(), Some("https://example.com/first"));
    }

    #[test]
    fn link_by_rel_is_case_sensitive() {
        let jrd = Jrd {
            links: vec![link("LRDD", "https://example.com/")],
            ..Default::default()
        };
        assert!(jrd.link_by_rel("lrdd").is_none());
    }

    #[test]
    fn link_by_rel_on_empty_links() {
        assert!(Jrd::default().link_by_rel("lrdd").is_none());
    }

    #[test]
    fn link_by_rel_no_match() {
        let jrd = Jrd {
            links: vec![link("self", "https://example.com/")],
            ..Default::default()
        };
        assert!(jrd.link_by_rel("http://webfinger.net/rel/avatar").is_none());
    }

    #[test]
    fn links_by_rel_keeps_document_order() {
        let jrd = Jrd {
            links: vec![
                link("alternate", "https://a.example/"),
                link("self", "https://s.example/"),
                link("alternate", "https://b.example/"),
            ],
            ..Default::default()
        };
        let hrefs: Vec<_> = jrd
            .links_by_rel("alternate")
            .filter_map(|l| l.href.as_deref())
            .collect();
        assert_eq!(hrefs, vec!["https://a.example/", "https://b.example/"]);
    }

    #[test]
    fn property_missing_and_null_read_as_empty() {
        let jrd = Jrd {
            properties: props(&[
                ("http://example.com/ns/null", None),
                ("http://example.com/ns/role", Some("admin")),
            ]),
            ..Default::default()
        };
        assert_eq!(jrd.property("http://example.com/ns/missing"), "");
        assert_eq!(jrd.property("http://example.com/ns/null"), "");
        assert_eq!(jrd.property("http://example.com/ns/role"), "admin");
    }

    #[test]
    fn link_property_is_independent_of_document_properties() {
        let jrd = Jrd {
            properties: props(&[("http://example.com/ns/p", Some("doc"))]),
            links: vec![Link {
                rel: "self".to_string(),
                properties: props(&[("http://example.com/ns/p", Some("link"))]),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(jrd.property("http://example.com/ns/p"), "doc");
        assert_eq!(jrd.links[0].property("http://example.com/ns/p"), "link");
        assert_eq!(jrd.links[0].property("http://example.com/ns/other"), "");
    }

    #[test]
    fn usable_template_rejects_empty() {
        let mut l = link("lrdd", "https://example.com/");
        assert_eq!(l.usable_template(), None);
        l.template = Some(String::new());
        assert_eq!(l.usable_template(), None);
        l.template = Some("https://example.com/?q={uri}".to_string());
        assert_eq!(l.usable_template(), Some("https://example.com/?q={uri}"));
    }

    #[test]
    fn title_by_language() {
        let mut l = link("http://webfinger.net/rel/profile-page", "https://example.com/");
        l.titles.insert("en-us".to_string(), "Profile".to_string());
        assert_eq!(l.title("en-us"), Some("Profile"));
        assert_eq!(l.title("de"), None);
    }

    #[test]
    fn expires_at_parses_rfc3339() {
        let jrd = Jrd {
            expires: Some("2026-01-30T09:30:00Z".to_string()),
            ..Default::default()
        };
        let at = jrd.expires_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2026-01-30T09:30:00+00:00");
    }

    #[test]
    fn expires_at_ignores_garbage() {
        let jrd = Jrd {
            expires: Some("next tuesday".to_string()),
            ..Default::default()
        };
        assert!(jrd.expires_at().is_none());
        assert!(Jrd::default().expires_at().is_none());
    }
}
