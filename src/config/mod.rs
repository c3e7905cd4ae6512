//! Configuration for the staffgrid services
//!
//! Every knob is supplied through the environment; each binary loads only its
//! own section.

use anyhow::{Context, Result};
use std::env;

/// JWT trust-source configuration shared by the gateway (verification) and the
/// test/dev token mint.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub access_token_ttl_secs: i64,
    pub private_key_pem: Option<String>,
    pub public_key_pem: Option<String>,
}

impl JwtConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            secret: env::var("JWT_SECRET").context("JWT_SECRET is required")?,
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "https://staffgrid.local".to_string()),
            access_token_ttl_secs: env::var("JWT_ACCESS_TOKEN_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            private_key_pem: env::var("JWT_PRIVATE_KEY")
                .ok()
                .map(|value| value.replace("\\n", "\n")),
            public_key_pem: env::var("JWT_PUBLIC_KEY")
                .ok()
                .map(|value| value.replace("\\n", "\n")),
        })
    }
}

/// One named downstream dependency: base address, per-call timeout, bulkhead
/// capacity.
#[derive(Debug, Clone)]
pub struct DownstreamConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub max_concurrent_calls: usize,
}

/// Edge gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub jwt: JwtConfig,
    /// Path prefixes reachable without a credential (health endpoints only)
    pub public_paths: Vec<String>,
    pub user_service_url: String,
    pub department_service_url: String,
    /// Empty means any origin (the permissive default for gateway testing)
    pub cors_allowed_origins: Vec<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid GATEWAY_PORT")?,
            jwt: JwtConfig::from_env()?,
            public_paths: parse_list(
                &env::var("GATEWAY_PUBLIC_PATHS").unwrap_or_else(|_| "/health".to_string()),
            ),
            user_service_url: env::var("USER_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8081".to_string()),
            department_service_url: env::var("DEPARTMENT_SERVICE_URL")
                .unwrap_or_else(|_| "http://localhost:8082".to_string()),
            cors_allowed_origins: env::var("GATEWAY_CORS_ALLOWED_ORIGINS")
                .map(|s| parse_list(&s))
                .unwrap_or_default(),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// User service configuration
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    pub host: String,
    pub port: u16,
    pub department: DownstreamConfig,
    pub seed_data: bool,
}

impl UserServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("USER_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("USER_SERVICE_PORT")
                .unwrap_or_else(|_| "8081".to_string())
                .parse()
                .context("Invalid USER_SERVICE_PORT")?,
            department: DownstreamConfig {
                base_url: env::var("DEPARTMENT_SERVICE_URL")
                    .unwrap_or_else(|_| "http://localhost:8082".to_string()),
                timeout_ms: env::var("DEPARTMENT_CALL_TIMEOUT_MS")
                    .unwrap_or_else(|_| "2000".to_string())
                    .parse()
                    .unwrap_or(2000),
                max_concurrent_calls: env::var("DEPARTMENT_MAX_CONCURRENT_CALLS")
                    .unwrap_or_else(|_| "8".to_string())
                    .parse()
                    .unwrap_or(8),
            },
            seed_data: env::var("USER_SEED_DATA")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Department service configuration
#[derive(Debug, Clone)]
pub struct DepartmentServiceConfig {
    pub host: String,
    pub port: u16,
    pub seed_data: bool,
}

impl DepartmentServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("DEPARTMENT_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DEPARTMENT_SERVICE_PORT")
                .unwrap_or_else(|_| "8082".to_string())
                .parse()
                .context("Invalid DEPARTMENT_SERVICE_PORT")?,
            seed_data: env::var("DEPARTMENT_SEED_DATA")
                .map(|s| s.to_lowercase() == "true")
                .unwrap_or(false),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            issuer: "https://staffgrid.test".to_string(),
            access_token_ttl_secs: 3600,
            private_key_pem: None,
            public_key_pem: None,
        }
    }

    #[test]
    fn test_gateway_addr() {
        let config = GatewayConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt: test_jwt_config(),
            public_paths: vec!["/health".to_string()],
            user_service_url: "http://localhost:8081".to_string(),
            department_service_url: "http://localhost:8082".to_string(),
            cors_allowed_origins: vec![],
        };

        assert_eq!(config.addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_service_addrs() {
        let user = UserServiceConfig {
            host: "0.0.0.0".to_string(),
            port: 8081,
            department: DownstreamConfig {
                base_url: "http://localhost:8082".to_string(),
                timeout_ms: 2000,
                max_concurrent_calls: 8,
            },
            seed_data: false,
        };
        let department = DepartmentServiceConfig {
            host: "0.0.0.0".to_string(),
            port: 8082,
            seed_data: true,
        };

        assert_eq!(user.addr(), "0.0.0.0:8081");
        assert_eq!(department.addr(), "0.0.0.0:8082");
    }

    #[test]
    fn test_parse_list_trims_and_drops_empties() {
        assert_eq!(
            parse_list("/health, /status ,"),
            vec!["/health".to_string(), "/status".to_string()]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_downstream_config_clone() {
        let downstream = DownstreamConfig {
            base_url: "http://departments:8082".to_string(),
            timeout_ms: 500,
            max_concurrent_calls: 1,
        };
        let cloned = downstream.clone();

        assert_eq!(downstream.base_url, cloned.base_url);
        assert_eq!(downstream.timeout_ms, cloned.timeout_ms);
        assert_eq!(downstream.max_concurrent_calls, cloned.max_concurrent_calls);
    }
}
