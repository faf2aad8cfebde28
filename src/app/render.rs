//! Server-side HTML for every storefront page.

use crate::core::cart::{self, CartButton};
use crate::core::catalog::{CatalogFilter, SortOrder};
use crate::core::fallback::Listing;
use crate::core::media::ImageUrlBuilder;
use crate::core::pages::{CategoryPage, HomePage, ProductPage, ShopPage};
use crate::domain::model::{
    Artisan, BlogPost, Category, Collection, ImpactMetric, PressItem, Product,
};
use crate::domain::placeholders;
use crate::utils::format::{
    artisan_url, blog_post_url, calculate_discount, category_url, collection_url, escape_html,
    format_price, product_url, truncate_text,
};
use serde_json::Value;

const CARD_IMAGE_SIZE: u32 = 600;
const DETAIL_IMAGE_SIZE: u32 = 1200;
const EXCERPT_LENGTH: usize = 160;

const SORT_OPTIONS: [(SortOrder, &str); 4] = [
    (SortOrder::Newest, "Newest"),
    (SortOrder::PriceAsc, "Price: Low to High"),
    (SortOrder::PriceDesc, "Price: High to Low"),
    (SortOrder::BestSellers, "Best Sellers"),
];

const PRICE_OPTIONS: [(&str, &str); 4] = [
    ("0-100", "Under $100"),
    ("100-200", "$100 - $200"),
    ("200-500", "$200 - $500"),
    ("500-100000", "$500+"),
];

/// Everything a renderer needs besides the page data itself.
#[derive(Debug, Clone)]
pub struct Site {
    pub name: String,
    pub images: ImageUrlBuilder,
    pub cart_api_key: Option<String>,
}

impl Site {
    pub fn new(name: impl Into<String>, images: ImageUrlBuilder, cart_api_key: Option<String>) -> Self {
        Self {
            name: name.into(),
            images,
            cart_api_key,
        }
    }

    fn layout(&self, title: &str, body: &str) -> String {
        let page_title = if title.is_empty() {
            escape_html(&self.name)
        } else {
            format!("{} | {}", escape_html(title), escape_html(&self.name))
        };

        let cart_assets = match cart::widget_container(self.cart_api_key.as_deref()) {
            Some(container) => format!(
                "<link rel=\"stylesheet\" href=\"{}\">\n{}\n<script async src=\"{}\"></script>",
                cart::WIDGET_STYLESHEET,
                container,
                cart::WIDGET_SCRIPT
            ),
            None => String::new(),
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{page_title}</title>
</head>
<body>
<header>
<a class="logo" href="/">{site}</a>
<nav>
<a href="/shop">Shop</a>
<a href="/collections">Collections</a>
<a href="/artisans">Artisans</a>
<a href="/impact">Impact</a>
<a href="/journal">Journal</a>
</nav>
</header>
<main>
{body}
</main>
<footer><p>&copy; {site}</p></footer>
{cart_assets}
</body>
</html>"#,
            site = escape_html(&self.name),
        )
    }

    fn product_image_url(&self, product: &Product, index: usize, size: u32) -> String {
        let url = self
            .images
            .image(product.primary_image())
            .width(size)
            .height(size)
            .url();
        if url.is_empty() {
            let category = product.category.as_ref().map(|c| c.title.as_str());
            placeholders::product_image(category, index).to_string()
        } else {
            url
        }
    }

    fn product_card(&self, product: &Product, index: usize) -> String {
        let image = self.product_image_url(product, index, CARD_IMAGE_SIZE);

        let mut badges = String::new();
        let discount = calculate_discount(product.price, product.compare_at_price);
        if discount > 0 {
            badges.push_str(&format!("<span class=\"badge sale\">-{}%</span>", discount));
        }
        if product.is_new_arrival {
            badges.push_str("<span class=\"badge\">New</span>");
        }
        if product.is_pre_order {
            badges.push_str("<span class=\"badge\">Pre-Order</span>");
        }

        let compare_at = match product.compare_at_price {
            Some(compare) if discount > 0 => format!(" <s>{}</s>", format_price(compare)),
            _ => String::new(),
        };
        let artisan = product
            .artisan
            .as_ref()
            .map(|a| format!("<p class=\"artisan\">By {}</p>", escape_html(&a.name)))
            .unwrap_or_default();

        format!(
            "<article class=\"product-card\">{badges}<a href=\"{url}\"><img src=\"{img}\" alt=\"{alt}\"><h3>{title}</h3></a>{artisan}<p class=\"price\">{price}{compare_at}</p>{button}</article>",
            url = escape_html(&product_url(&product.slug.current)),
            img = escape_html(&image),
            alt = escape_html(&product.title),
            title = escape_html(&product.title),
            price = format_price(product.price),
            button = CartButton::quick_add(product, &image).to_html(),
        )
    }

    /// Result count plus cards, or the empty state.
    pub fn product_grid(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return "<div class=\"empty\"><p>No products found</p><a href=\"/shop\">Clear filters</a></div>"
                .to_string();
        }

        let cards: String = products
            .iter()
            .enumerate()
            .map(|(i, p)| self.product_card(p, i))
            .collect();
        format!(
            "<p class=\"result-count\">{}</p><div class=\"product-grid\">{}</div>",
            product_count_label(products.len()),
            cards
        )
    }

    fn category_nav(&self, categories: &Listing<Category>, active: &str) -> String {
        let links: String = categories
            .items()
            .iter()
            .map(|c| {
                let class = if c.slug.current == active { " class=\"active\"" } else { "" };
                format!(
                    "<a href=\"{}\"{}>{}</a>",
                    escape_html(&category_url(&c.slug.current)),
                    class,
                    escape_html(&c.title)
                )
            })
            .collect();
        format!("<nav class=\"categories\">{}</nav>", links)
    }

    fn filter_form(&self, action: &str, filter: &CatalogFilter, raw_price: Option<&str>) -> String {
        let sort_options: String = SORT_OPTIONS
            .iter()
            .map(|(order, label)| {
                let selected = if *order == filter.sort() { " selected" } else { "" };
                format!("<option value=\"{}\"{}>{}</option>", order.as_str(), selected, label)
            })
            .collect();
        let price_options: String = PRICE_OPTIONS
            .iter()
            .map(|(value, label)| {
                let selected = if raw_price == Some(*value) { " selected" } else { "" };
                format!("<option value=\"{}\"{}>{}</option>", value, selected, escape_html(label))
            })
            .collect();

        format!(
            r#"<form class="filters" method="get" action="{action}">
<input type="search" name="search" placeholder="Search" value="{search}">
<select name="price"><option value="">Any price</option>{price_options}</select>
<input type="text" name="material" placeholder="Material" value="{material}">
<select name="sort">{sort_options}</select>
<button type="submit">Apply</button>
</form>"#,
            action = escape_html(action),
            search = escape_html(filter.search().unwrap_or_default()),
            material = escape_html(filter.material().unwrap_or_default()),
        )
    }

    pub fn home(&self, page: &HomePage) -> String {
        let hero = page.hero.as_ref();
        let heading = hero
            .and_then(|h| h.hero_heading.as_deref())
            .unwrap_or("Handcrafted Afghan Jewelry");
        let subheading = hero
            .and_then(|h| h.hero_subheading.as_deref())
            .unwrap_or("Each piece tells a story of heritage, empowerment and timeless beauty.");
        let cta_text = hero.and_then(|h| h.hero_cta_text.as_deref()).unwrap_or("Shop Now");
        let cta_link = hero.and_then(|h| h.hero_cta_link.as_deref()).unwrap_or("/shop");
        let hero_image = hero
            .map(|h| self.images.image(h.hero_image.as_ref()).width(1920).url())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| placeholders::hero_image().to_string());

        let collections: String = page
            .collections
            .items()
            .iter()
            .enumerate()
            .map(|(i, c)| self.collection_card(c, i))
            .collect();
        let metrics: String = page.impact_metrics.items().iter().map(metric_block).collect();
        let press: String = page
            .press_items
            .items()
            .iter()
            .map(|p| format!("<span class=\"publication\">{}</span>", escape_html(&p.publication)))
            .collect();
        let instagram: String = (0..6)
            .map(|i| format!("<img src=\"{}\" alt=\"\">", placeholders::instagram_image(i)))
            .collect();

        let body = format!(
            r#"<section class="hero" style="background-image:url('{hero_image}')">
<h1>{heading}</h1>
<p>{subheading}</p>
<a class="button" href="{cta_link}">{cta_text}</a>
</section>
<section class="collections"><h2>Featured Collections</h2>{collections}</section>
<section class="new-arrivals"><h2>New Arrivals</h2>{arrivals}</section>
<section class="impact"><h2>Our Impact</h2>{metrics}</section>
<section class="press"><h2>As Featured In</h2>{press}</section>
<section class="instagram">{instagram}</section>"#,
            hero_image = escape_html(&hero_image),
            heading = escape_html(heading),
            subheading = escape_html(subheading),
            cta_link = escape_html(cta_link),
            cta_text = escape_html(cta_text),
            arrivals = self.product_grid(page.new_arrivals.items()),
        );
        self.layout("", &body)
    }

    pub fn shop(&self, page: &ShopPage, raw_price: Option<&str>) -> String {
        let body = format!(
            "<h1>Shop All</h1>{}{}{}",
            self.category_nav(&page.categories, ""),
            self.filter_form("/shop", &page.filter, raw_price),
            self.product_grid(&page.products)
        );
        self.layout("Shop", &body)
    }

    pub fn category(&self, page: &CategoryPage, raw_price: Option<&str>) -> String {
        let slug = &page.category.slug.current;
        let description = page
            .category
            .description
            .as_deref()
            .map(|d| format!("<p>{}</p>", escape_html(d)))
            .unwrap_or_default();
        let body = format!(
            "<h1>{}</h1>{}{}{}{}",
            escape_html(&page.category.title),
            description,
            self.category_nav(&page.categories, slug),
            self.filter_form(&category_url(slug), &page.filter, raw_price),
            self.product_grid(&page.products)
        );
        self.layout(&page.category.title, &body)
    }

    pub fn product(&self, page: &ProductPage) -> String {
        let product = &page.product;
        let image = self.product_image_url(product, 0, DETAIL_IMAGE_SIZE);
        let gallery: String = product
            .images
            .iter()
            .skip(1)
            .map(|img| self.images.image(Some(img)).width(300).height(300).url())
            .filter(|url| !url.is_empty())
            .map(|url| format!("<img src=\"{}\" alt=\"\">", escape_html(&url)))
            .collect();

        let discount = calculate_discount(product.price, product.compare_at_price);
        let compare_at = match product.compare_at_price {
            Some(compare) if discount > 0 => format!(
                " <s>{}</s> <span class=\"badge sale\">Save {}%</span>",
                format_price(compare),
                discount
            ),
            _ => String::new(),
        };

        let mut details = String::new();
        if let Some(artisan) = &product.artisan {
            let name = escape_html(&artisan.name);
            let link = match &artisan.slug {
                Some(slug) => format!("<a href=\"{}\">{}</a>", escape_html(&artisan_url(&slug.current)), name),
                None => name,
            };
            details.push_str(&format!("<p class=\"artisan\">Handcrafted by {}</p>", link));
        }
        if let Some(materials) = product.materials.as_deref().filter(|m| !m.is_empty()) {
            details.push_str(&format!(
                "<p class=\"materials\">Materials: {}</p>",
                escape_html(&materials.join(", "))
            ));
        }
        if let Some(sku) = &product.sku {
            details.push_str(&format!("<p class=\"sku\">SKU: {}</p>", escape_html(sku)));
        }
        if product.is_pre_order {
            let message = product
                .pre_order_message
                .as_deref()
                .unwrap_or("This item is available for pre-order.");
            details.push_str(&format!("<p class=\"pre-order\">{}</p>", escape_html(message)));
        }
        if let Some(statement) = &product.impact_statement {
            details.push_str(&format!(
                "<blockquote class=\"impact\">{}</blockquote>",
                escape_html(statement)
            ));
        }

        let care = product
            .care_instructions
            .as_ref()
            .map(|c| format!("<section class=\"care\"><h2>Care</h2>{}</section>", portable_text(Some(c))))
            .unwrap_or_default();
        let related = if page.related.is_empty() {
            String::new()
        } else {
            format!(
                "<section class=\"related\"><h2>You May Also Like</h2>{}</section>",
                self.product_grid(&page.related)
            )
        };

        let body = format!(
            r#"<article class="product-detail">
<div class="gallery"><img src="{image}" alt="{alt}">{gallery}</div>
<div class="info">
<h1>{title}</h1>
<p class="price">{price}{compare_at}</p>
{details}
<div class="description">{description}</div>
{button}
</div>
</article>
{care}
{related}"#,
            image = escape_html(&image),
            alt = escape_html(&product.title),
            title = escape_html(&product.title),
            price = format_price(product.price),
            description = portable_text(product.description.as_ref()),
            button = CartButton::for_product(product, 1, None, &image).to_html(),
        );
        self.layout(&product.title, &body)
    }

    fn collection_card(&self, collection: &Collection, index: usize) -> String {
        let image = self
            .images
            .image(collection.image.as_ref())
            .width(CARD_IMAGE_SIZE)
            .url();
        let image = if image.is_empty() {
            placeholders::collection_image(index).to_string()
        } else {
            image
        };
        let count = collection
            .product_count
            .map(|n| format!("<p class=\"count\">{}</p>", product_count_label(n as usize)))
            .unwrap_or_default();

        format!(
            "<article class=\"collection-card\"><a href=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3></a>{}</article>",
            escape_html(&collection_url(&collection.slug.current)),
            escape_html(&image),
            escape_html(&collection.title),
            escape_html(&collection.title),
            count
        )
    }

    pub fn collections(&self, collections: &[Collection]) -> String {
        let content = if collections.is_empty() {
            "<p class=\"empty\">No collections found</p>".to_string()
        } else {
            collections
                .iter()
                .enumerate()
                .map(|(i, c)| self.collection_card(c, i))
                .collect()
        };
        self.layout(
            "Collections",
            &format!("<h1>Collections</h1><div class=\"collection-grid\">{}</div>", content),
        )
    }

    pub fn collection(&self, collection: &Collection) -> String {
        let description = collection
            .description
            .as_deref()
            .map(|d| format!("<p>{}</p>", escape_html(d)))
            .unwrap_or_default();
        let body = format!(
            "<h1>{}</h1>{}{}",
            escape_html(&collection.title),
            description,
            self.product_grid(&collection.products)
        );
        self.layout(&collection.title, &body)
    }

    fn artisan_photo(&self, artisan: &Artisan, index: usize, size: u32) -> String {
        let url = self
            .images
            .image(artisan.photo.as_ref())
            .width(size)
            .height(size)
            .url();
        if url.is_empty() {
            placeholders::artisan_image(index).to_string()
        } else {
            url
        }
    }

    pub fn artisans(&self, artisans: &Listing<Artisan>) -> String {
        let cards: String = artisans
            .items()
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let region = a
                    .region
                    .as_deref()
                    .map(|r| format!("<p class=\"region\">{}</p>", escape_html(r)))
                    .unwrap_or_default();
                let craft = a
                    .craft
                    .as_deref()
                    .map(|c| format!("<p class=\"craft\">{}</p>", escape_html(c)))
                    .unwrap_or_default();
                format!(
                    "<article class=\"artisan-card\"><a href=\"{}\"><img src=\"{}\" alt=\"{}\"><h3>{}</h3></a>{}{}</article>",
                    escape_html(&artisan_url(&a.slug.current)),
                    escape_html(&self.artisan_photo(a, i, 400)),
                    escape_html(&a.name),
                    escape_html(&a.name),
                    region,
                    craft
                )
            })
            .collect();
        self.layout(
            "Meet the Artisans",
            &format!("<h1>Meet the Artisans</h1><div class=\"artisan-grid\">{}</div>", cards),
        )
    }

    pub fn artisan(&self, artisan: &Artisan) -> String {
        let quote = artisan
            .quote
            .as_deref()
            .map(|q| format!("<blockquote>{}</blockquote>", escape_html(q)))
            .unwrap_or_default();
        let gallery: String = artisan
            .gallery
            .iter()
            .map(|img| self.images.image(Some(img)).width(400).height(400).url())
            .filter(|url| !url.is_empty())
            .map(|url| format!("<img src=\"{}\" alt=\"\">", escape_html(&url)))
            .collect();
        let products = if artisan.products.is_empty() {
            String::new()
        } else {
            format!(
                "<section><h2>Pieces by {}</h2>{}</section>",
                escape_html(&artisan.name),
                self.product_grid(&artisan.products)
            )
        };

        let body = format!(
            "<article class=\"artisan\"><img src=\"{}\" alt=\"{}\"><h1>{}</h1><p class=\"region\">{}</p>{}<div class=\"bio\">{}</div><div class=\"gallery\">{}</div></article>{}",
            escape_html(&self.artisan_photo(artisan, 0, 800)),
            escape_html(&artisan.name),
            escape_html(&artisan.name),
            escape_html(artisan.region.as_deref().unwrap_or_default()),
            quote,
            portable_text(artisan.bio.as_ref()),
            gallery,
            products
        );
        self.layout(&artisan.name, &body)
    }

    fn blog_image_url(&self, post: &BlogPost, index: usize, width: u32) -> String {
        let url = self.images.image(post.main_image.as_ref()).width(width).url();
        if url.is_empty() {
            placeholders::blog_image(index).to_string()
        } else {
            url
        }
    }

    pub fn journal(&self, posts: &Listing<BlogPost>) -> String {
        let cards: String = posts
            .items()
            .iter()
            .enumerate()
            .map(|(i, post)| {
                let excerpt = post
                    .excerpt
                    .as_deref()
                    .map(|e| format!("<p>{}</p>", escape_html(&truncate_text(e, EXCERPT_LENGTH))))
                    .unwrap_or_default();
                format!(
                    "<article class=\"post-card\"><a href=\"{}\"><img src=\"{}\" alt=\"\"><h3>{}</h3></a><time>{}</time>{}</article>",
                    escape_html(&blog_post_url(&post.slug.current)),
                    escape_html(&self.blog_image_url(post, i, 800)),
                    escape_html(&post.title),
                    escape_html(post.published_at.as_deref().unwrap_or_default()),
                    excerpt
                )
            })
            .collect();
        self.layout(
            "Journal",
            &format!("<h1>Journal</h1><div class=\"post-grid\">{}</div>", cards),
        )
    }

    pub fn blog_post(&self, post: &BlogPost) -> String {
        let author = post
            .author
            .as_deref()
            .map(|a| format!("<p class=\"author\">By {}</p>", escape_html(a)))
            .unwrap_or_default();
        let body = format!(
            "<article class=\"post\"><img src=\"{}\" alt=\"\"><h1>{}</h1><time>{}</time>{}<div class=\"body\">{}</div></article>",
            escape_html(&self.blog_image_url(post, 0, 1600)),
            escape_html(&post.title),
            escape_html(post.published_at.as_deref().unwrap_or_default()),
            author,
            portable_text(post.body.as_ref())
        );
        self.layout(&post.title, &body)
    }

    pub fn impact(&self, metrics: &Listing<ImpactMetric>) -> String {
        let blocks: String = metrics.items().iter().map(metric_block).collect();
        self.layout(
            "Our Impact",
            &format!("<h1>Our Impact</h1><div class=\"metrics\">{}</div>", blocks),
        )
    }

    pub fn press(&self, items: &Listing<PressItem>) -> String {
        let entries: String = items
            .items()
            .iter()
            .map(|item| {
                let title = escape_html(item.title.as_deref().unwrap_or(&item.publication));
                let title = match &item.link {
                    Some(link) => format!("<a href=\"{}\">{}</a>", escape_html(link), title),
                    None => title,
                };
                let quote = item
                    .quote
                    .as_deref()
                    .map(|q| format!("<blockquote>{}</blockquote>", escape_html(q)))
                    .unwrap_or_default();
                format!(
                    "<article class=\"press-item\"><p class=\"publication\">{}</p><h3>{}</h3><time>{}</time>{}</article>",
                    escape_html(&item.publication),
                    title,
                    escape_html(item.date.as_deref().unwrap_or_default()),
                    quote
                )
            })
            .collect();
        self.layout("Press", &format!("<h1>Press</h1>{}", entries))
    }

    pub fn not_found(&self) -> String {
        self.layout(
            "Page Not Found",
            "<section class=\"not-found\"><h1>404</h1><p>Page not found</p><p>The page you are looking for does not exist or has been moved.</p><a class=\"button\" href=\"/\">Return Home</a></section>",
        )
    }
}

fn metric_block(metric: &ImpactMetric) -> String {
    let description = metric
        .description
        .as_deref()
        .map(|d| format!("<p>{}</p>", escape_html(d)))
        .unwrap_or_default();
    format!(
        "<div class=\"metric\"><strong>{}</strong><h3>{}</h3>{}</div>",
        escape_html(&metric.value),
        escape_html(&metric.title),
        description
    )
}

pub fn product_count_label(count: usize) -> String {
    format!("{} product{}", count, if count == 1 { "" } else { "s" })
}

/// Rich text blocks to paragraphs. Plain strings become a single paragraph;
/// anything else renders nothing.
pub fn portable_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => format!("<p>{}</p>", escape_html(text)),
        Some(Value::Array(blocks)) => blocks
            .iter()
            .filter(|block| block.get("_type").and_then(Value::as_str) == Some("block"))
            .map(|block| {
                let text: String = block
                    .get("children")
                    .and_then(Value::as_array)
                    .map(|spans| {
                        spans
                            .iter()
                            .filter_map(|span| span.get("text").and_then(Value::as_str))
                            .collect()
                    })
                    .unwrap_or_default();
                format!("<p>{}</p>", escape_html(&text))
            })
            .collect(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CatalogQuery;
    use serde_json::json;

    fn site() -> Site {
        Site::new("Darichah", ImageUrlBuilder::default(), None)
    }

    #[test]
    fn test_grid_shows_count_and_empty_state() {
        let site = site();
        assert!(site.product_grid(&[]).contains("No products found"));

        let one = [Product::new("p1", "Ring", "ring", 10.0)];
        assert!(site.product_grid(&one).contains("1 product<"));
        assert_eq!(product_count_label(3), "3 products");
    }

    #[test]
    fn test_card_falls_back_to_placeholder_image() {
        let html = site().product_grid(&placeholders::products());
        assert!(html.contains("images.unsplash.com"));
        assert!(html.contains("snipcart-add-item"));
        assert!(html.contains("-16%"));
    }

    #[test]
    fn test_layout_only_loads_widget_with_key() {
        let without = site().not_found();
        assert!(!without.contains("snipcart.js"));

        let with_key = Site::new("Darichah", ImageUrlBuilder::default(), Some("pk".to_string()));
        assert!(with_key.not_found().contains("snipcart.js"));
        assert!(with_key.not_found().contains("<title>Page Not Found | Darichah</title>"));
    }

    #[test]
    fn test_filter_form_keeps_current_values() {
        let filter = CatalogFilter::from_query(&CatalogQuery {
            search: Some("Lapis".to_string()),
            sort: Some("price-desc".to_string()),
            ..CatalogQuery::default()
        });
        let html = site().filter_form("/shop", &filter, Some("100-200"));
        assert!(html.contains("value=\"lapis\""));
        assert!(html.contains("<option value=\"price-desc\" selected>"));
        assert!(html.contains("<option value=\"100-200\" selected>"));
    }

    #[test]
    fn test_cms_slugs_are_escaped_in_links() {
        let slug = "x\"><script>alert(1)</script>";
        let site = site();

        let grid = site.product_grid(&[Product::new("p1", "Ring", slug, 10.0)]);
        assert!(!grid.contains("<script>"));
        assert!(grid.contains("href=\"/product/x&quot;&gt;&lt;script&gt;"));

        let mut category = placeholders::categories().remove(1);
        category.slug.current = slug.to_string();
        let nav = site.category_nav(&Listing::Live(vec![category]), "");
        assert!(!nav.contains("<script>"));

        let filter = CatalogFilter::from_query(&CatalogQuery::default());
        let form = site.filter_form(&category_url(slug), &filter, None);
        assert!(!form.contains("<script>"));

        let mut artisan = placeholders::artisans().remove(0);
        artisan.slug.current = slug.to_string();
        assert!(!site.artisans(&Listing::Live(vec![artisan])).contains("<script>"));

        let mut post = placeholders::blog_posts().remove(0);
        post.slug.current = slug.to_string();
        assert!(!site.journal(&Listing::Live(vec![post])).contains("<script>"));

        let mut collection = placeholders::collections().remove(0);
        collection.slug.current = slug.to_string();
        assert!(!site.collections(&[collection]).contains("<script>"));
    }

    #[test]
    fn test_portable_text_paragraphs() {
        let blocks = json!([
            {"_type": "block", "children": [{"text": "Hand "}, {"text": "made"}]},
            {"_type": "image"},
            {"_type": "block", "children": [{"text": "<b>"}]}
        ]);
        assert_eq!(portable_text(Some(&blocks)), "<p>Hand made</p><p>&lt;b&gt;</p>");
        assert_eq!(portable_text(Some(&json!("plain"))), "<p>plain</p>");
        assert_eq!(portable_text(None), "");
    }
}
