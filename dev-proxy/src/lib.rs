//! Development server for the homeboard client.
//!
//! Serves the built client and forwards everything under a path prefix
//! (`/api` by default) to a backend chosen per developer through
//! `DEV_PROXY_TARGET`.

pub mod config;
pub mod error;
pub mod proxy;

pub use config::ProxyConfig;
pub use error::{ProxyError, Result};
pub use proxy::{routes, ProxyState};
