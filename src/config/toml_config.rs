use crate::config::settings::{
    DEFAULT_API_VERSION, DEFAULT_BIND_ADDRESS, DEFAULT_DATASET, DEFAULT_SITE_NAME,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, StorefrontError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub content_source: ContentSourceSection,
    #[serde(default)]
    pub cart: Option<CartSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSourceSection {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: Option<String>,
    pub use_cdn: Option<bool>,
    pub api_host: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSection {
    pub public_api_key: Option<String>,
}

impl SiteConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${STOREFRONT_PROJECT_ID})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StorefrontError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    /// Command line flags win over the file.
    pub fn apply_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(bind) = &cli.bind {
            self.server.bind = Some(bind.clone());
        }
        if let Some(project_id) = &cli.project_id {
            self.content_source.project_id = Some(project_id.clone());
        }
        if let Some(dataset) = &cli.dataset {
            self.content_source.dataset = Some(dataset.clone());
        }
        if let Some(api_version) = &cli.api_version {
            self.content_source.api_version = Some(api_version.clone());
        }
        if cli.use_cdn {
            self.content_source.use_cdn = Some(true);
        }
        if let Some(api_host) = &cli.api_host {
            self.content_source.api_host = Some(api_host.clone());
        }
        if let Some(timeout) = cli.timeout_seconds {
            self.content_source.timeout_seconds = Some(timeout);
        }
        if let Some(key) = &cli.cart_api_key {
            self.cart = Some(CartSection {
                public_api_key: Some(key.clone()),
            });
        }
    }
}

impl ConfigProvider for SiteConfig {
    fn project_id(&self) -> Option<&str> {
        self.content_source.project_id.as_deref()
    }

    fn dataset(&self) -> &str {
        self.content_source
            .dataset
            .as_deref()
            .unwrap_or(DEFAULT_DATASET)
    }

    fn api_version(&self) -> &str {
        self.content_source
            .api_version
            .as_deref()
            .unwrap_or(DEFAULT_API_VERSION)
    }

    fn use_cdn(&self) -> bool {
        self.content_source.use_cdn.unwrap_or(false)
    }

    fn api_host(&self) -> Option<&str> {
        self.content_source.api_host.as_deref()
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.content_source.timeout_seconds
    }

    fn bind_address(&self) -> &str {
        self.server.bind.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    fn site_name(&self) -> &str {
        self.site.name.as_deref().unwrap_or(DEFAULT_SITE_NAME)
    }

    fn cart_api_key(&self) -> Option<&str> {
        self.cart
            .as_ref()
            .and_then(|cart| cart.public_api_key.as_deref())
            .filter(|key| !key.contains("${"))
    }
}

impl Validate for SiteConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_bind_address("server.bind", self.bind_address())?;
        validation::validate_non_empty_string("content_source.dataset", self.dataset())?;
        validation::validate_non_empty_string("content_source.api_version", self.api_version())?;

        if let Some(host) = &self.content_source.api_host {
            validation::validate_url("content_source.api_host", host)?;
        }

        if let Some(timeout) = self.content_source.timeout_seconds {
            validation::validate_positive_number("content_source.timeout_seconds", timeout, 1)?;
        }

        Ok(())
    }
}
