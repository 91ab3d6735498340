//! Runtime configuration, read from the environment once at start-up and
//! passed explicitly to the components that need it.

use anyhow::{bail, Context, Result};

use crate::util::env;

pub const DEFAULT_API_VERSION: &str = "2024-01";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

const REQUIRED_KEYS: &[&str] = &["SHOPIFY_STORE_DOMAIN", "SHOPIFY_ACCESS_TOKEN"];
const LOGGED_KEYS: &[&str] = &[
    "SHOPIFY_STORE_DOMAIN",
    "SHOPIFY_ACCESS_TOKEN",
    "SHOPIFY_API_VERSION",
    "SHOPIFY_TIMEOUT_SECS",
    "HOST",
    "PORT",
];

/// Connection details for the Shopify Admin GraphQL API.
#[derive(Clone)]
pub struct ShopifyConfig {
    pub store_domain: String,
    pub access_token: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ShopifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopifyConfig")
            .field("store_domain", &self.store_domain)
            .field("access_token", &"***")
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ShopifyConfig {
    pub fn new(store_domain: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            store_domain: store_domain.into(),
            access_token: access_token.into(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_domain: env::env_req("SHOPIFY_STORE_DOMAIN")?,
            access_token: env::env_req("SHOPIFY_ACCESS_TOKEN")?,
            api_version: env::env_opt("SHOPIFY_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            timeout_secs: parse_timeout_secs(env::env_opt("SHOPIFY_TIMEOUT_SECS").as_deref())?,
        })
    }

    /// `https://<store-domain>/admin/api/<version>/graphql.json`
    pub fn graphql_endpoint(&self) -> String {
        let domain = self
            .store_domain
            .trim()
            .trim_start_matches("https://")
            .trim_end_matches('/');
        format!("https://{}/admin/api/{}/graphql.json", domain, self.api_version)
    }
}

/// Unset means the default; zero or garbage is a start-up error.
fn parse_timeout_secs(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TIMEOUT_SECS);
    };
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid SHOPIFY_TIMEOUT_SECS {raw:?}"))?;
    if secs == 0 {
        bail!("SHOPIFY_TIMEOUT_SECS must be at least 1");
    }
    Ok(secs)
}

/// Listener settings for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::env_opt("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match env::env_opt("PORT") {
            Some(raw) => raw.trim().parse().context("Invalid PORT")?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Full process configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub shopify: ShopifyConfig,
}

impl AppConfig {
    /// Validates required keys (reporting every missing one at once) and logs
    /// a redacted snapshot before building the typed config.
    pub fn from_env() -> Result<Self> {
        env::preflight_check("metafield-relay", REQUIRED_KEYS, LOGGED_KEYS)?;
        Ok(Self {
            server: ServerConfig::from_env()?,
            shopify: ShopifyConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_domain_and_version() {
        let cfg = ShopifyConfig::new("demo-shop.myshopify.com", "shpat_x");
        assert_eq!(
            cfg.graphql_endpoint(),
            "https://demo-shop.myshopify.com/admin/api/2024-01/graphql.json"
        );
    }

    #[test]
    fn endpoint_tolerates_scheme_and_trailing_slash() {
        let mut cfg = ShopifyConfig::new(" https://demo-shop.myshopify.com/ ", "t");
        cfg.api_version = "2024-04".to_string();
        assert_eq!(
            cfg.graphql_endpoint(),
            "https://demo-shop.myshopify.com/admin/api/2024-04/graphql.json"
        );
    }

    #[test]
    fn debug_output_hides_token() {
        let cfg = ShopifyConfig::new("demo-shop.myshopify.com", "shpat_secret");
        let rendered = format!("{:?}", cfg);
        assert!(!rendered.contains("shpat_secret"));
    }

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(parse_timeout_secs(None).unwrap(), DEFAULT_TIMEOUT_SECS);
        assert_eq!(parse_timeout_secs(Some(" 45 ")).unwrap(), 45);
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(parse_timeout_secs(Some("0")).is_err());
        let err = parse_timeout_secs(Some("30s")).unwrap_err();
        assert!(err.to_string().contains("SHOPIFY_TIMEOUT_SECS"));
        assert!(parse_timeout_secs(Some("-5")).is_err());
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let cfg = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
        };
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
    }
}
