use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use storefront::config::toml_config::SiteConfig;
use storefront::core::catalog::{self, CatalogQuery};
use storefront::core::{ContentQuery, ContentSource};
use storefront::domain::model::Product;
use storefront::domain::queries;
use storefront::utils::{logger, validation::Validate};
use storefront::{ContentSourceSettings, HttpContentSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum QueryName {
    AllProducts,
    FeaturedProducts,
    NewArrivals,
    ProductBySlug,
    ProductsByCategory,
    ProductsByCollection,
    AllCategories,
    TopLevelCategories,
    CategoryBySlug,
    AllCollections,
    FeaturedCollections,
    CollectionBySlug,
    AllArtisans,
    ArtisanBySlug,
    AllBlogPosts,
    BlogPostBySlug,
    PressItems,
    ImpactMetrics,
    HomePage,
    PageBySlug,
}

#[derive(Parser)]
#[command(name = "catalog-query")]
#[command(about = "Run a storefront content query and print the result as JSON")]
struct Args {
    #[arg(value_enum)]
    query: QueryName,

    /// Slug for the *-by-slug and *-by-category/collection queries
    #[arg(long)]
    slug: Option<String>,

    /// Path to a TOML site configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[arg(long, env = "STOREFRONT_PROJECT_ID")]
    project_id: Option<String>,

    #[arg(long, env = "STOREFRONT_DATASET")]
    dataset: Option<String>,

    #[arg(long)]
    api_host: Option<String>,

    /// Product lists only: title search
    #[arg(long)]
    search: Option<String>,

    /// Product lists only: "<min>-<max>"
    #[arg(long)]
    price: Option<String>,

    /// Product lists only: material substring
    #[arg(long)]
    material: Option<String>,

    /// Product lists only: newest, price-asc, price-desc or best-sellers
    #[arg(long)]
    sort: Option<String>,

    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn slug(&self) -> anyhow::Result<&str> {
        match self.slug.as_deref() {
            Some(slug) if !slug.is_empty() => Ok(slug),
            _ => bail!("--slug is required for {:?}", self.query),
        }
    }

    fn content_query(&self) -> anyhow::Result<ContentQuery> {
        let query = match self.query {
            QueryName::AllProducts => queries::all_products(),
            QueryName::FeaturedProducts => queries::featured_products(),
            QueryName::NewArrivals => queries::new_arrivals(),
            QueryName::ProductBySlug => queries::product_by_slug(self.slug()?),
            QueryName::ProductsByCategory => queries::products_by_category(self.slug()?),
            QueryName::ProductsByCollection => queries::products_by_collection(self.slug()?),
            QueryName::AllCategories => queries::all_categories(),
            QueryName::TopLevelCategories => queries::top_level_categories(),
            QueryName::CategoryBySlug => queries::category_by_slug(self.slug()?),
            QueryName::AllCollections => queries::all_collections(),
            QueryName::FeaturedCollections => queries::featured_collections(),
            QueryName::CollectionBySlug => queries::collection_by_slug(self.slug()?),
            QueryName::AllArtisans => queries::all_artisans(),
            QueryName::ArtisanBySlug => queries::artisan_by_slug(self.slug()?),
            QueryName::AllBlogPosts => queries::all_blog_posts(),
            QueryName::BlogPostBySlug => queries::blog_post_by_slug(self.slug()?),
            QueryName::PressItems => queries::press_items(),
            QueryName::ImpactMetrics => queries::impact_metrics(),
            QueryName::HomePage => queries::home_page(),
            QueryName::PageBySlug => queries::page_by_slug(self.slug()?),
        };
        Ok(query)
    }

    fn is_product_list(&self) -> bool {
        matches!(
            self.query,
            QueryName::AllProducts
                | QueryName::FeaturedProducts
                | QueryName::NewArrivals
                | QueryName::ProductsByCategory
                | QueryName::ProductsByCollection
        )
    }

    fn catalog_query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            price: self.price.clone(),
            material: self.material.clone(),
            sort: self.sort.clone(),
        }
    }

    fn site_config(&self) -> anyhow::Result<SiteConfig> {
        let mut config = match &self.config {
            Some(path) => SiteConfig::from_file(path)
                .with_context(|| format!("Failed to load config file '{}'", path))?,
            None => SiteConfig::default(),
        };
        if let Some(project_id) = &self.project_id {
            config.content_source.project_id = Some(project_id.clone());
        }
        if let Some(dataset) = &self.dataset {
            config.content_source.dataset = Some(dataset.clone());
        }
        if let Some(api_host) = &self.api_host {
            config.content_source.api_host = Some(api_host.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let config = args.site_config()?;
    let Some(settings) = ContentSourceSettings::from_provider(&config) else {
        bail!("Content source not configured: set --project-id or [content_source].project_id");
    };

    let source = HttpContentSource::new(&settings)?;
    let query = args.content_query()?;
    tracing::info!("🔗 Querying {} (tags: {:?})", source.endpoint(), query.tags());

    let result = source.fetch(&query).await?;

    let output = if args.is_product_list() {
        let products: Vec<Product> =
            serde_json::from_value(result).context("Response is not a product list")?;
        let total = products.len();
        let filtered = catalog::apply(products, &args.catalog_query());
        tracing::info!("📦 {} of {} products match", filtered.len(), total);
        serde_json::to_value(filtered)?
    } else {
        result
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
