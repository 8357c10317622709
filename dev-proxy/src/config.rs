use std::env;
use std::path::PathBuf;

use log::{info, warn};
use url::Url;

use crate::error::{ProxyError, Result};

pub const TARGET_VAR: &str = "DEV_PROXY_TARGET";
pub const PREFIX_VAR: &str = "DEV_PROXY_PREFIX";
pub const HOST_VAR: &str = "DEV_PROXY_HOST";
pub const PORT_VAR: &str = "DEV_PROXY_PORT";
pub const CHANGE_ORIGIN_VAR: &str = "DEV_PROXY_CHANGE_ORIGIN";
pub const STATIC_DIR_VAR: &str = "DEV_PROXY_STATIC_DIR";

pub const DEFAULT_PREFIX: &str = "/api";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5173;

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    pub listen_host: String,
    pub listen_port: u16,
    /// Requests under this path are forwarded. Always starts with `/` and has
    /// no trailing slash.
    pub path_prefix: String,
    pub target: Url,
    /// Rewrite `Host` to the target's authority.
    pub change_origin: bool,
    pub static_dir: Option<PathBuf>,
}

impl ProxyConfig {
    /// Loads `.env` files, then reads the configuration from the process
    /// environment.
    pub fn load() -> Result<Self> {
        match env::var("ENV_FILE_PATH") {
            Ok(path) if !path.is_empty() => {
                info!("Loading environment from ENV_FILE_PATH: {}", path);
                dotenv::from_filename(&path).ok();
            }
            _ => {
                dotenv::dotenv().ok();
            }
        }
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let target = get(TARGET_VAR).ok_or_else(|| ProxyError::MissingVar(TARGET_VAR.to_string()))?;
        let target = parse_target(&target)?;

        let path_prefix = parse_prefix(&get(PREFIX_VAR).unwrap_or_else(|| DEFAULT_PREFIX.to_string()))?;

        let listen_port = match get(PORT_VAR) {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ProxyError::invalid_var(PORT_VAR, e))?,
            None => DEFAULT_PORT,
        };

        let change_origin = match get(CHANGE_ORIGIN_VAR) {
            Some(value) => parse_bool(CHANGE_ORIGIN_VAR, &value)?,
            None => true,
        };

        let static_dir = get(STATIC_DIR_VAR).map(PathBuf::from);
        if let Some(dir) = &static_dir {
            if !dir.is_dir() {
                warn!("{} does not exist yet: {}", STATIC_DIR_VAR, dir.display());
            }
        }

        Ok(Self {
            listen_host: get(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            listen_port,
            path_prefix,
            target,
            change_origin,
            static_dir,
        })
    }

    /// Whether `path` falls under the proxied prefix. Matches whole path
    /// segments only, so `/api` covers `/api/items` but not `/apiary`.
    pub fn matches(&self, path: &str) -> bool {
        match path.strip_prefix(self.path_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Upstream URL for a request. The original path, prefix included, is
    /// appended to the target's own path.
    pub fn upstream_url(&self, path: &str, query: &str) -> Url {
        let mut url = self.target.clone();
        let base = self.target.path().trim_end_matches('/');
        url.set_path(&format!("{}{}", base, path));
        url.set_query(if query.is_empty() { None } else { Some(query) });
        url
    }

    /// `host[:port]` of the target, as sent in a rewritten `Host` header.
    pub fn target_authority(&self) -> String {
        let host = self.target.host_str().unwrap_or_default();
        match self.target.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        }
    }

    pub fn listen_addr(&self) -> (String, u16) {
        (self.listen_host.clone(), self.listen_port)
    }

    pub fn log_configuration(&self) {
        info!("Dev proxy listening on {}:{}", self.listen_host, self.listen_port);
        info!("Forwarding {} -> {}", self.path_prefix, self.target);
        info!("Change origin: {}", self.change_origin);
        match &self.static_dir {
            Some(dir) => info!("Serving static files from {}", dir.display()),
            None => info!("No static directory configured"),
        }
    }
}

fn parse_target(value: &str) -> Result<Url> {
    let url = Url::parse(value).map_err(|e| ProxyError::invalid_var(TARGET_VAR, e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ProxyError::invalid_var(
            TARGET_VAR,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if url.host_str().is_none() {
        return Err(ProxyError::invalid_var(TARGET_VAR, "missing host"));
    }
    Ok(url)
}

fn parse_prefix(value: &str) -> Result<String> {
    if !value.starts_with('/') {
        return Err(ProxyError::invalid_var(PREFIX_VAR, "must start with '/'"));
    }
    let trimmed = value.trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ProxyError::invalid_var(PREFIX_VAR, "must not be the root path"));
    }
    Ok(trimmed.to_string())
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ProxyError::invalid_var(name, format!("expected a boolean, got '{}'", value))),
    }
}
