use log::{info, warn};
use shared::EndpointResolver;

/// Optional JSON rule table baked in at build time, replacing the standard
/// LAN/public switch. See `EndpointResolver::from_json` for the format.
const ENDPOINTS_OVERRIDE: Option<&str> = option_env!("HOMEBOARD_ENDPOINTS");

/// Runtime configuration resolved once when the app starts and handed to
/// components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub api_base_url: String,
}

impl AppConfig {
    /// Resolves the backend for the page's current hostname.
    pub fn detect() -> Self {
        let host = web_sys::window()
            .and_then(|window| window.location().hostname().ok())
            .unwrap_or_default();
        Self::for_host(&host)
    }

    pub fn for_host(host: &str) -> Self {
        Self::with_resolver(&Self::resolver(), host)
    }

    pub fn with_resolver(resolver: &EndpointResolver, host: &str) -> Self {
        let api_base_url = resolver.resolve(host).to_string();
        info!("Host '{}' uses backend {}", host, api_base_url);
        Self {
            host: host.to_string(),
            api_base_url,
        }
    }

    pub fn resolver() -> EndpointResolver {
        resolver_from(ENDPOINTS_OVERRIDE)
    }
}

/// Builds the resolver from an optional JSON override, keeping the standard
/// table when the override is absent or invalid.
pub fn resolver_from(override_json: Option<&str>) -> EndpointResolver {
    match override_json.map(str::trim).filter(|json| !json.is_empty()) {
        Some(json) => EndpointResolver::from_json(json).unwrap_or_else(|e| {
            warn!("Ignoring invalid HOMEBOARD_ENDPOINTS: {}", e);
            EndpointResolver::standard()
        }),
        None => EndpointResolver::standard(),
    }
}
