use clap::Parser;
use std::sync::Arc;
use storefront::core::ConfigProvider;
use storefront::utils::error::ErrorSeverity;
use storefront::utils::{logger, validation, validation::Validate};
use storefront::{
    build_router, AppState, CliConfig, ContentClient, ContentSourceSettings, HttpContentSource,
    ImageUrlBuilder, Site, SiteConfig,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting storefront");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = serve(cli).await {
        tracing::error!(
            "❌ Storefront stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn serve(cli: CliConfig) -> storefront::Result<()> {
    // 有設定檔時以檔案為主，命令列參數覆蓋
    let config: Box<dyn ConfigProvider> = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut site_config = SiteConfig::from_file(&path)?;
            site_config.apply_overrides(&cli);
            site_config.validate()?;
            Box::new(site_config)
        }
        None => {
            cli.validate()?;
            Box::new(cli)
        }
    };

    let settings = ContentSourceSettings::from_provider(config.as_ref());
    let content = match &settings {
        Some(settings) => {
            let source = HttpContentSource::new(settings)?;
            tracing::info!("🔗 Content source: {}", source.endpoint());
            ContentClient::new(Some(Arc::new(source)))
        }
        None => {
            tracing::warn!("Content source not configured - using placeholder data");
            ContentClient::unconfigured()
        }
    };

    if config.cart_api_key().is_none() {
        tracing::warn!("No cart API key configured; the cart widget will not load");
    }

    let site = Site::new(
        config.site_name(),
        ImageUrlBuilder::new(settings.as_ref()),
        config.cart_api_key().map(str::to_string),
    );
    let router = build_router(AppState::new(content, site));

    let addr = validation::validate_bind_address("bind", config.bind_address())?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("✅ Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Storefront shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
