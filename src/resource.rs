use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::WebFingerError;

const ACCT_SCHEME: &str = "acct:";

/// The entity being looked up: a user at a host.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Resource {
    user: String,
    host: String,
}

impl Resource {
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            host: host.into(),
        }
    }

    /// Parse `acct:user@host` or `user@host`.
    ///
    /// The split happens at the last `@`, so the local part may itself
    /// contain `@` (`acct:alice@old.example@new.example`).
    ///
    /// # Errors
    /// Returns `WebFingerError::InvalidResource` when there is no `@`,
    /// either side is empty, or the host is not a bare `host[:port]`.
    pub fn parse(input: &str) -> Result<Self, WebFingerError> {
        let trimmed = input.trim();
        let identifier = trimmed.strip_prefix(ACCT_SCHEME).unwrap_or(trimmed);

        let (user, host) = identifier
            .rsplit_once('@')
            .ok_or_else(|| WebFingerError::InvalidResource(format!("missing '@' in {input:?}")))?;

        if user.is_empty() {
            return Err(WebFingerError::InvalidResource(format!(
                "empty user in {input:?}"
            )));
        }
        if host.is_empty() {
            return Err(WebFingerError::InvalidResource(format!(
                "empty host in {input:?}"
            )));
        }
        if !is_bare_authority(host) {
            return Err(WebFingerError::InvalidResource(format!(
                "invalid host {host:?} in {input:?}"
            )));
        }

        Ok(Self::new(user, host))
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Host queried for discovery documents.
    pub fn webfinger_host(&self) -> &str {
        &self.host
    }

    /// Canonical URI form, e.g. `acct:alice@example.com`.
    pub fn as_uri_string(&self) -> String {
        self.to_string()
    }
}

// The host is pasted into `https://{host}/.well-known/...`, so it must not
// carry a path, query, fragment or userinfo of its own.
fn is_bare_authority(host: &str) -> bool {
    let forbidden = |c: char| {
        c.is_whitespace() || c.is_control() || matches!(c, '/' | '\\' | '?' | '#' | '@')
    };
    if host.chars().any(forbidden) {
        return false;
    }
    match Url::parse(&format!("https://{host}/")) {
        Ok(url) => {
            url.host_str().is_some()
                && url.username().is_empty()
                && url.password().is_none()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none()
        }
        Err(_) => false,
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{ACCT_SCHEME}{}@{}", self.user, self.host)
    }
}

impl FromStr for Resource {
    type Err = WebFingerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_acct_uri() {
        let r = Resource::parse("acct:alice@example.com").unwrap();
        assert_eq!(r.user(), "alice");
        assert_eq!(r.webfinger_host(), "example.com");
    }

    #[test]
    fn bare_and_acct_forms_are_equal() {
        assert_eq!(
            Resource::parse("acct:alice@example.com").unwrap(),
            Resource::parse("alice@example.com").unwrap()
        );
    }

    #[test]
    fn trims_whitespace() {
        let r = Resource::parse("  bob@example.org\n").unwrap();
        assert_eq!(r.as_uri_string(), "acct:bob@example.org");
    }

    #[test]
    fn splits_at_last_at_sign() {
        let r: Resource = "acct:alice@old.example@new.example".parse().unwrap();
        assert_eq!(r.user(), "alice@old.example");
        assert_eq!(r.webfinger_host(), "new.example");
    }

    #[test]
    fn keeps_port_in_host() {
        let r = Resource::parse("carol@localhost:8080").unwrap();
        assert_eq!(r.webfinger_host(), "localhost:8080");
    }

    #[test]
    fn rejects_missing_at() {
        let err = Resource::parse("nobody").unwrap_err();
        assert!(err.to_string().contains("missing '@'"));
    }

    #[test]
    fn rejects_empty_parts() {
        let err = Resource::parse("@example.com").unwrap_err();
        assert!(err.to_string().contains("empty user"));
        let err = Resource::parse("acct:alice@").unwrap_err();
        assert!(err.to_string().contains("empty host"));
    }

    #[test]
    fn rejects_hosts_with_url_delimiters() {
        for input in [
            "alice@example.com/evil#",
            "alice@example.com/.well-known/x",
            "alice@example.com?q=1",
            "alice@example.com#frag",
            "alice@exa mple.com",
            "alice@exa\tmple.com",
            "alice@example.com\\evil",
            "alice@example.com:notaport",
        ] {
            let err = Resource::parse(input).unwrap_err();
            assert!(
                err.to_string().contains("invalid host"),
                "{input:?} gave {err}"
            );
        }
    }

    #[test]
    fn accepts_ip_and_ipv6_hosts() {
        assert_eq!(
            Resource::parse("alice@127.0.0.1:8080").unwrap().webfinger_host(),
            "127.0.0.1:8080"
        );
        assert_eq!(
            Resource::parse("alice@[::1]:8080").unwrap().webfinger_host(),
            "[::1]:8080"
        );
    }

    #[test]
    fn uri_string_is_stable() {
        let r = Resource::new("alice", "example.com");
        assert_eq!(r.as_uri_string(), "acct:alice@example.com");
        assert_eq!(r.as_uri_string(), r.as_uri_string());
        assert_eq!(r.to_string(), r.as_uri_string());
    }
}
