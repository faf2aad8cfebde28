use crate::core::ConfigProvider;

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-03-01";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_SITE_NAME: &str = "Darichah";

/// Project id shipped in the sample environment file; never a real project.
const DEMO_PROJECT_ID: &str = "demo-project";

/// Connection settings for a configured content project.
///
/// Built once at startup. `None` from [`ContentSourceSettings::from_provider`]
/// means live reads are disabled and every listing falls back to demo content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentSourceSettings {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub use_cdn: bool,
    pub api_host: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl ContentSourceSettings {
    pub fn is_usable_project_id(project_id: &str) -> bool {
        project_id != DEMO_PROJECT_ID && project_id.len() > 5 && !project_id.contains("${")
    }

    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Option<Self> {
        let project_id = config
            .project_id()
            .map(str::trim)
            .filter(|id| Self::is_usable_project_id(id))?;

        Some(Self {
            project_id: project_id.to_string(),
            dataset: config.dataset().to_string(),
            api_version: config.api_version().to_string(),
            use_cdn: config.use_cdn(),
            api_host: config.api_host().map(str::to_string),
            timeout_seconds: config.timeout_seconds(),
        })
    }

    pub fn host(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.host(),
            self.api_version.trim_start_matches('v'),
            self.dataset
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticConfig {
        project_id: Option<&'static str>,
        use_cdn: bool,
    }

    impl ConfigProvider for StaticConfig {
        fn project_id(&self) -> Option<&str> {
            self.project_id
        }
        fn dataset(&self) -> &str {
            DEFAULT_DATASET
        }
        fn api_version(&self) -> &str {
            DEFAULT_API_VERSION
        }
        fn use_cdn(&self) -> bool {
            self.use_cdn
        }
        fn api_host(&self) -> Option<&str> {
            None
        }
        fn timeout_seconds(&self) -> Option<u64> {
            None
        }
        fn bind_address(&self) -> &str {
            DEFAULT_BIND_ADDRESS
        }
        fn site_name(&self) -> &str {
            DEFAULT_SITE_NAME
        }
        fn cart_api_key(&self) -> Option<&str> {
            None
        }
    }

    #[test]
    fn test_missing_or_demo_project_disables_live_reads() {
        for project_id in [None, Some("demo-project"), Some("abc"), Some("${PROJECT}")] {
            let config = StaticConfig {
                project_id,
                use_cdn: false,
            };
            assert!(ContentSourceSettings::from_provider(&config).is_none());
        }
    }

    #[test]
    fn test_query_url_for_api_and_cdn_hosts() {
        let mut config = StaticConfig {
            project_id: Some("x7k2p9qa"),
            use_cdn: false,
        };
        let settings = ContentSourceSettings::from_provider(&config).unwrap();
        assert_eq!(
            settings.query_url(),
            "https://x7k2p9qa.api.sanity.io/v2024-03-01/data/query/production"
        );

        config.use_cdn = true;
        let settings = ContentSourceSettings::from_provider(&config).unwrap();
        assert_eq!(settings.host(), "https://x7k2p9qa.apicdn.sanity.io");
    }

    #[test]
    fn test_api_host_override() {
        let settings = ContentSourceSettings {
            project_id: "x7k2p9qa".to_string(),
            dataset: "staging".to_string(),
            api_version: "v2024-03-01".to_string(),
            use_cdn: true,
            api_host: Some("http://127.0.0.1:9999/".to_string()),
            timeout_seconds: Some(5),
        };
        assert_eq!(
            settings.query_url(),
            "http://127.0.0.1:9999/v2024-03-01/data/query/staging"
        );
    }
}
