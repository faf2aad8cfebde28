pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpContentSource;
pub use app::render::Site;
pub use app::server::{build_router, AppState};
pub use config::settings::ContentSourceSettings;
pub use config::toml_config::SiteConfig;
pub use core::content::ContentClient;
pub use core::media::ImageUrlBuilder;
pub use utils::error::{Result, StorefrontError};
