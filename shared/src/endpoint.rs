//! Backend endpoint resolution.
//!
//! The client talks to one of a small set of backend base URLs depending on
//! the host it was served from. Hosts on the office network (`10.10.*`) and
//! `localhost` reach the backend directly on its LAN address; everything else
//! goes through the public address.
//!
//! Resolution is an ordered list of [`EndpointRule`]s evaluated first match
//! wins, with a fallback URL when nothing matches. The host is always passed
//! in by the caller, so the resolver never touches browser globals.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, SharedError};

/// Backend address reachable from inside the local network.
pub const LOCAL_BASE_URL: &str = "http://10.10.0.100:8887";

/// Backend address reachable from the public internet.
pub const PUBLIC_BASE_URL: &str = "http://46.55.199.146:8887";

/// Host prefix identifying the local network segment.
pub const LOCAL_NETWORK_PREFIX: &str = "10.10.";

pub const LOCALHOST: &str = "localhost";

static STANDARD_RESOLVER: Lazy<EndpointResolver> = Lazy::new(EndpointResolver::standard);

/// How a rule recognises a host identifier.
///
/// Both variants compare raw strings, case-sensitively. `Prefix("10.10.")`
/// matches `10.10.999.1` even though that is not a valid address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostMatcher {
    /// Host starts with the given string.
    Prefix(String),
    /// Host is exactly the given string.
    Exact(String),
}

impl HostMatcher {
    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostMatcher::Prefix(prefix) => host.starts_with(prefix.as_str()),
            HostMatcher::Exact(expected) => host == expected,
        }
    }

    fn pattern(&self) -> &str {
        match self {
            HostMatcher::Prefix(p) | HostMatcher::Exact(p) => p.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRule {
    pub matcher: HostMatcher,
    pub base_url: String,
}

impl EndpointRule {
    pub fn prefix(prefix: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            matcher: HostMatcher::Prefix(prefix.into()),
            base_url: base_url.into(),
        }
    }

    pub fn exact(host: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            matcher: HostMatcher::Exact(host.into()),
            base_url: base_url.into(),
        }
    }
}

/// Ordered rule table mapping host identifiers to backend base URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointResolver {
    rules: Vec<EndpointRule>,
    fallback: String,
}

#[derive(Deserialize)]
struct RawResolver {
    #[serde(default)]
    rules: Vec<EndpointRule>,
    fallback: String,
}

impl EndpointResolver {
    /// Builds a resolver, validating every URL and matcher.
    pub fn new(rules: Vec<EndpointRule>, fallback: impl Into<String>) -> Result<Self> {
        let fallback = fallback.into();
        validate_base_url(&fallback)?;
        for rule in &rules {
            validate_rule(rule)?;
        }
        Ok(Self { rules, fallback })
    }

    /// The production table: LAN hosts and `localhost` go to the local
    /// backend, everything else to the public one.
    pub fn standard() -> Self {
        Self {
            rules: vec![
                EndpointRule::prefix(LOCAL_NETWORK_PREFIX, LOCAL_BASE_URL),
                EndpointRule::exact(LOCALHOST, LOCAL_BASE_URL),
            ],
            fallback: PUBLIC_BASE_URL.to_string(),
        }
    }

    /// Loads a rule table from JSON, e.g.
    /// `{"rules":[{"matcher":{"prefix":"10.10."},"base_url":"http://10.10.0.100:8887"}],"fallback":"http://46.55.199.146:8887"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawResolver = serde_json::from_str(json)?;
        Self::new(raw.rules, raw.fallback)
    }

    /// Appends a rule. It is consulted after every existing rule.
    pub fn with_rule(mut self, rule: EndpointRule) -> Result<Self> {
        validate_rule(&rule)?;
        self.rules.push(rule);
        Ok(self)
    }

    pub fn rules(&self) -> &[EndpointRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Picks the base URL for `host`. Total over all inputs: unmatched hosts
    /// get the fallback.
    pub fn resolve(&self, host: &str) -> &str {
        match self.rules.iter().find(|rule| rule.matcher.matches(host)) {
            Some(rule) => {
                debug!("Host '{}' matched {:?} -> {}", host, rule.matcher, rule.base_url);
                rule.base_url.as_str()
            }
            None => {
                debug!("Host '{}' matched no rule -> {}", host, self.fallback);
                self.fallback.as_str()
            }
        }
    }
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::standard()
    }
}

/// Resolves `host` against the standard rule table.
pub fn resolve_base_url(host: &str) -> &'static str {
    STANDARD_RESOLVER.resolve(host)
}

/// Prefixes a relative API path with `base`. An empty base leaves the path
/// relative.
pub fn join_url(base: &str, path: &str) -> String {
    if base.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return base.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn validate_rule(rule: &EndpointRule) -> Result<()> {
    if rule.matcher.pattern().is_empty() {
        return Err(SharedError::InvalidRule(format!(
            "empty host pattern in {:?}",
            rule.matcher
        )));
    }
    validate_base_url(&rule.base_url)
}

fn validate_base_url(base_url: &str) -> Result<()> {
    let parsed = Url::parse(base_url).map_err(|e| SharedError::invalid_url(base_url, e))?;
    if parsed.cannot_be_a_base() || parsed.host_str().is_none() {
        return Err(SharedError::invalid_url(base_url, "missing host"));
    }
    Ok(())
}
