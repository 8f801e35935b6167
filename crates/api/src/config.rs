//! Server configuration loaded from environment variables.

use carledger_core::operations::AuthzPolicy;

/// Server configuration.
///
/// All fields have defaults suitable for local development. In production,
/// override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Organization label permitted to invoke dealer-role operations.
    pub dealer_org: String,
    /// Organization label permitted to invoke police-role operations.
    pub police_org: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `DEALER_ORG`           | `aMSP`    |
    /// | `POLICE_ORG`           | `bMSP`    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let dealer_org = std::env::var("DEALER_ORG").unwrap_or_else(|_| "aMSP".into());
        let police_org = std::env::var("POLICE_ORG").unwrap_or_else(|_| "bMSP".into());

        Self {
            host,
            port,
            request_timeout_secs,
            dealer_org,
            police_org,
        }
    }

    /// Build the authorization policy from the configured organization
    /// labels.
    pub fn authz_policy(&self) -> AuthzPolicy {
        AuthzPolicy::new(&self.dealer_org, &self.police_org)
    }
}
