pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::settings::{
    DEFAULT_API_VERSION, DEFAULT_BIND_ADDRESS, DEFAULT_DATASET, DEFAULT_SITE_NAME,
};
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::{error::Result, validation};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "storefront")]
#[command(about = "Server-rendered artisan jewellery storefront")]
pub struct CliConfig {
    #[arg(long, help = "Address to listen on (default 127.0.0.1:3000)")]
    pub bind: Option<String>,

    #[arg(short, long, help = "Path to a TOML site configuration file")]
    pub config: Option<String>,

    #[arg(long, env = "STOREFRONT_PROJECT_ID")]
    pub project_id: Option<String>,

    #[arg(long, env = "STOREFRONT_DATASET")]
    pub dataset: Option<String>,

    #[arg(long)]
    pub api_version: Option<String>,

    #[arg(long, help = "Read through the content CDN")]
    pub use_cdn: bool,

    #[arg(long, help = "Override the content API host")]
    pub api_host: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, env = "STOREFRONT_CART_API_KEY")]
    pub cart_api_key: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    fn dataset(&self) -> &str {
        self.dataset.as_deref().unwrap_or(DEFAULT_DATASET)
    }

    fn api_version(&self) -> &str {
        self.api_version.as_deref().unwrap_or(DEFAULT_API_VERSION)
    }

    fn use_cdn(&self) -> bool {
        self.use_cdn
    }

    fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }

    fn bind_address(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    fn site_name(&self) -> &str {
        DEFAULT_SITE_NAME
    }

    fn cart_api_key(&self) -> Option<&str> {
        self.cart_api_key.as_deref()
    }
}

#[cfg(feature = "cli")]
impl validation::Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_address("bind", self.bind_address())?;
        validation::validate_non_empty_string("dataset", self.dataset())?;
        if let Some(host) = &self.api_host {
            validation::validate_url("api_host", host)?;
        }
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_positive_number("timeout_seconds", timeout, 1)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_defaults_when_flags_are_absent() {
        let config = CliConfig::parse_from(["storefront"]);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.dataset(), "production");
        assert_eq!(config.api_version(), "2024-03-01");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_flags_fail_validation() {
        let config = CliConfig::parse_from(["storefront", "--bind", "nowhere"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["storefront", "--timeout-seconds", "0"]);
        assert!(config.validate().is_err());
    }
}
