//! Service address resolution.

use crate::config::{API_BASE_OVERRIDE, DEPLOYED_API_BASE, LOCAL_API_BASE, LOCAL_HOSTS};

/// Resolves the steganography service's base address from the page host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceLocator {
    local_base: String,
    deployed_base: String,
}

impl ServiceLocator {
    pub fn new(local_base: impl Into<String>, deployed_base: impl Into<String>) -> Self {
        Self {
            local_base: local_base.into(),
            deployed_base: deployed_base.into(),
        }
    }

    /// Locator built from `config`, honouring `STEGWEB_API_BASE` if it was
    /// set at build time.
    pub fn from_build_env() -> Self {
        Self::new(
            LOCAL_API_BASE,
            API_BASE_OVERRIDE.unwrap_or(DEPLOYED_API_BASE),
        )
    }

    /// Base address for requests made from a page served by `hostname`.
    ///
    /// Pure: the same hostname always resolves to the same address. An empty
    /// result means "same origin as the page".
    pub fn resolve(&self, hostname: &str) -> String {
        if is_local_host(hostname) {
            self.local_base.clone()
        } else {
            self.deployed_base.trim_end_matches('/').to_string()
        }
    }
}

impl Default for ServiceLocator {
    fn default() -> Self {
        Self::new(LOCAL_API_BASE, DEPLOYED_API_BASE)
    }
}

/// Whether the page is being served by a local development host.
pub fn is_local_host(hostname: &str) -> bool {
    LOCAL_HOSTS.contains(&hostname)
}
