pub mod endpoint;
pub mod error;
pub mod i18n;

// Re-export commonly used items
pub use error::{SharedError, Result};
pub use endpoint::{
    EndpointResolver, EndpointRule, HostMatcher,
    resolve_base_url, join_url,
    LOCAL_BASE_URL, PUBLIC_BASE_URL,
};
pub use i18n::{LocaleCatalog, I18nOptions, interpolate};
