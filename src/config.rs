use std::{env, time::Duration};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub auth_grpc_server: String,
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; empty allows none.
    pub cors_hosts: Vec<String>,
    pub rpc_timeout: Duration,
    pub request_timeout: Duration,
    pub shutdown_grace: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` uses the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|s| !s.is_empty())
                .ok_or_else(|| anyhow::anyhow!("Missing required env var: {}", key))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());
        let seconds = |key: &str, default: &str| -> anyhow::Result<Duration> {
            let raw = or_default(key, default);
            let secs = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid {key} value {raw:?}: {e}"))?;
            Ok(Duration::from_secs(secs))
        };

        Ok(Self {
            database_url: required("DB_URL")?,
            auth_grpc_server: required("AUTH_GRPC_SERVER")?,
            host: or_default("HOST", "0.0.0.0"),
            port: or_default("PORT", "8080").parse()?,
            cors_hosts: lookup("CORS_HOST_LIST")
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
            rpc_timeout: seconds("RPC_TIMEOUT_SECS", "10")?,
            request_timeout: seconds("REQUEST_TIMEOUT_SECS", "30")?,
            shutdown_grace: seconds("SHUTDOWN_GRACE_SECS", "5")?,
        })
    }
}
