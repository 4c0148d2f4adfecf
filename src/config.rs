//! Service configuration loaded from the environment

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::Error;

/// Runtime configuration for the listings API
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the platform's Supabase project
    pub supabase_url: String,

    /// Service-role API key used for server-side table reads
    pub supabase_service_key: String,

    /// Shared secret the platform signs access tokens with
    pub supabase_jwt_secret: String,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Timeout for outbound Supabase requests; `None` disables it
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Create a configuration with explicit Supabase credentials and defaults
    /// for everything else
    pub fn new(supabase_url: &str, supabase_service_key: &str, supabase_jwt_secret: &str) -> Self {
        Self {
            supabase_url: supabase_url.to_string(),
            supabase_service_key: supabase_service_key.to_string(),
            supabase_jwt_secret: supabase_jwt_secret.to_string(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            request_timeout: Some(Duration::from_secs(30)),
        }
    }

    /// Load configuration from the environment
    ///
    /// `SUPABASE_URL`, `SUPABASE_SERVICE_KEY`, and `SUPABASE_JWT_SECRET` are
    /// required. `BIND_ADDR` defaults to `0.0.0.0:8000`;
    /// `REQUEST_TIMEOUT_SECS` defaults to 30, with `0` disabling the timeout.
    pub fn from_env() -> Result<Self, Error> {
        let supabase_url = require_var("SUPABASE_URL")?;
        let supabase_service_key = require_var("SUPABASE_SERVICE_KEY")?;
        let supabase_jwt_secret = require_var("SUPABASE_JWT_SECRET")?;

        let mut config = Config::new(&supabase_url, &supabase_service_key, &supabase_jwt_secret);

        if let Ok(value) = env::var("BIND_ADDR") {
            let addr = value
                .parse()
                .map_err(|_| Error::config(format!("invalid BIND_ADDR: {}", value)))?;
            config = config.with_bind_addr(addr);
        }

        if let Ok(value) = env::var("REQUEST_TIMEOUT_SECS") {
            let secs: u64 = value
                .parse()
                .map_err(|_| Error::config(format!("invalid REQUEST_TIMEOUT_SECS: {}", value)))?;
            let timeout = if secs == 0 {
                None
            } else {
                Some(Duration::from_secs(secs))
            };
            config = config.with_request_timeout(timeout);
        }

        Ok(config)
    }

    /// Set the address the HTTP server binds to
    pub fn with_bind_addr(mut self, value: SocketAddr) -> Self {
        self.bind_addr = value;
        self
    }

    /// Set the outbound request timeout
    pub fn with_request_timeout(mut self, value: Option<Duration>) -> Self {
        self.request_timeout = value;
        self
    }
}

fn require_var(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::config(format!("{} must be set", name)))
}
