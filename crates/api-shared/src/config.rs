//! API runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the servers. Request
//! handlers never read process-wide environment variables.
//!
//! # Environment Variables
//! - `TMR_ADDR`: gRPC server address (default: "0.0.0.0:50051")
//! - `TMR_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
//! - `API_KEY`: API key required by the gRPC server (optional; must not be blank when set)
//! - `TMR_ENABLE_REFLECTION`: "true" enables gRPC server reflection

use std::net::{AddrParseError, SocketAddr};

pub const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address ({value:?}): {source}")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("API_KEY is set but blank")]
    BlankApiKey,
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// API configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    grpc_addr: SocketAddr,
    rest_addr: SocketAddr,
    api_key: Option<String>,
    enable_reflection: bool,
}

impl ApiConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_env_values(
            std::env::var("TMR_ADDR").ok(),
            std::env::var("TMR_REST_ADDR").ok(),
            std::env::var("API_KEY").ok(),
            std::env::var("TMR_ENABLE_REFLECTION").ok(),
        )
    }

    /// Resolve configuration from optional raw values without touching the environment.
    pub fn from_env_values(
        grpc_addr: Option<String>,
        rest_addr: Option<String>,
        api_key: Option<String>,
        enable_reflection: Option<String>,
    ) -> ConfigResult<Self> {
        let grpc_addr = parse_addr("TMR_ADDR", grpc_addr, DEFAULT_GRPC_ADDR)?;
        let rest_addr = parse_addr("TMR_REST_ADDR", rest_addr, DEFAULT_REST_ADDR)?;

        let api_key = match api_key {
            Some(key) if key.trim().is_empty() => return Err(ConfigError::BlankApiKey),
            other => other,
        };

        let enable_reflection = enable_reflection.as_deref().map(str::trim) == Some("true");

        Ok(Self {
            grpc_addr,
            rest_addr,
            api_key,
            enable_reflection,
        })
    }

    /// Resolve only the REST address from the process environment.
    ///
    /// The REST surface is unauthenticated, so a REST-only server ignores `API_KEY` and the gRPC
    /// settings entirely.
    pub fn rest_addr_from_env() -> ConfigResult<SocketAddr> {
        Self::rest_addr_from_env_value(std::env::var("TMR_REST_ADDR").ok())
    }

    pub fn rest_addr_from_env_value(rest_addr: Option<String>) -> ConfigResult<SocketAddr> {
        parse_addr("TMR_REST_ADDR", rest_addr, DEFAULT_REST_ADDR)
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        self.grpc_addr
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn enable_reflection(&self) -> bool {
        self.enable_reflection
    }
}

fn parse_addr(var: &'static str, value: Option<String>, default: &str) -> ConfigResult<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string());

    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddress { var, value, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = ApiConfig::from_env_values(None, None, None, None).expect("defaults");
        assert_eq!(cfg.grpc_addr().to_string(), DEFAULT_GRPC_ADDR);
        assert_eq!(cfg.rest_addr().to_string(), DEFAULT_REST_ADDR);
        assert_eq!(cfg.api_key(), None);
        assert!(!cfg.enable_reflection());
    }

    #[test]
    fn blank_address_falls_back_to_default() {
        let cfg = ApiConfig::from_env_values(Some("  ".into()), None, None, None).expect("cfg");
        assert_eq!(cfg.grpc_addr().to_string(), DEFAULT_GRPC_ADDR);
    }

    #[test]
    fn explicit_values_are_used() {
        let cfg = ApiConfig::from_env_values(
            Some("127.0.0.1:6000".into()),
            Some("127.0.0.1:8080".into()),
            Some("secret".into()),
            Some("true".into()),
        )
        .expect("cfg");
        assert_eq!(cfg.grpc_addr().port(), 6000);
        assert_eq!(cfg.rest_addr().port(), 8080);
        assert_eq!(cfg.api_key(), Some("secret"));
        assert!(cfg.enable_reflection());
    }

    #[test]
    fn invalid_address_is_rejected() {
        let err = ApiConfig::from_env_values(None, Some("localhost".into()), None, None)
            .expect_err("should reject");
        match err {
            ConfigError::InvalidAddress { var, value, .. } => {
                assert_eq!(var, "TMR_REST_ADDR");
                assert_eq!(value, "localhost");
            }
            other => panic!("expected InvalidAddress, got {other:?}"),
        }
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let err = ApiConfig::from_env_values(None, None, Some("   ".into()), None)
            .expect_err("should reject");
        assert!(matches!(err, ConfigError::BlankApiKey));
    }

    #[test]
    fn rest_address_resolves_without_api_key() {
        let addr = ApiConfig::rest_addr_from_env_value(Some("127.0.0.1:8080".into()))
            .expect("rest address");
        assert_eq!(addr.port(), 8080);

        let addr = ApiConfig::rest_addr_from_env_value(None).expect("default");
        assert_eq!(addr.to_string(), DEFAULT_REST_ADDR);

        let err = ApiConfig::rest_addr_from_env_value(Some("localhost".into()))
            .expect_err("should reject");
        assert!(matches!(err, ConfigError::InvalidAddress { var: "TMR_REST_ADDR", .. }));
    }

    #[test]
    fn reflection_requires_literal_true() {
        let cfg = ApiConfig::from_env_values(None, None, None, Some("yes".into())).expect("cfg");
        assert!(!cfg.enable_reflection());
    }
}
