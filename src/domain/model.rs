//! Read-only content records as the content API returns them.
//!
//! Projections return `null` for fields an editor left empty, so list and flag
//! fields decode `null` as their default.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRef {
    #[serde(rename = "_ref")]
    pub reference: String,
}

/// A media reference; the asset id encodes dimensions and format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<AssetRef>,
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageRef {
    pub fn asset_ref(&self) -> Option<&str> {
        self.asset.as_ref().map(|a| a.reference.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub title: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRef {
    pub title: String,
    pub slug: Slug,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanRef {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub photo: Option<ImageRef>,
    #[serde(default)]
    pub craft: Option<String>,
    #[serde(default)]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    pub price: f64,
    #[serde(default)]
    pub compare_at_price: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub description: Option<serde_json::Value>,
    #[serde(default)]
    pub materials: Option<Vec<String>>,
    #[serde(default)]
    pub sizes: Option<Vec<String>>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub collection: Option<CollectionRef>,
    #[serde(default)]
    pub artisan: Option<ArtisanRef>,
    #[serde(default)]
    pub impact_statement: Option<String>,
    #[serde(default)]
    pub care_instructions: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_new_arrival: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_best_seller: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pre_order: bool,
    #[serde(default)]
    pub pre_order_message: Option<String>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub stock: Option<i64>,
}

impl Product {
    /// Minimal record; everything optional is left empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: Slug::new(slug),
            price,
            compare_at_price: None,
            images: Vec::new(),
            main_image: None,
            description: None,
            materials: None,
            sizes: None,
            category: None,
            collection: None,
            artisan: None,
            impact_statement: None,
            care_instructions: None,
            is_featured: false,
            is_new_arrival: false,
            is_best_seller: false,
            is_pre_order: false,
            pre_order_message: None,
            sku: None,
            stock: None,
        }
    }

    pub fn is_out_of_stock(&self) -> bool {
        matches!(self.stock, Some(stock) if stock <= 0)
    }

    /// Listing projections carry `mainImage`; detail projections carry `images`.
    pub fn primary_image(&self) -> Option<&ImageRef> {
        self.main_image.as_ref().or_else(|| self.images.first())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub parent_category: Option<CategoryRef>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategories: Vec<Category>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    #[serde(default)]
    pub product_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artisan {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub photo: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<serde_json::Value>,
    #[serde(default)]
    pub quote: Option<String>,
    #[serde(default)]
    pub craft: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactMetric {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub publication: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub quote: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: Slug,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub main_image: Option<ImageRef>,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub hero_heading: Option<String>,
    #[serde(default)]
    pub hero_subheading: Option<String>,
    #[serde(default)]
    pub hero_image: Option<ImageRef>,
    #[serde(default)]
    pub hero_cta_text: Option<String>,
    #[serde(default)]
    pub hero_cta_link: Option<String>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_listing_projection_with_nulls() {
        let json = serde_json::json!({
            "_id": "p1",
            "title": "Lapis Ring",
            "slug": {"current": "lapis-ring", "_type": "slug"},
            "price": 245,
            "compareAtPrice": null,
            "mainImage": null,
            "category": {"title": "Rings", "slug": {"current": "rings"}},
            "collection": null,
            "artisan": {"name": "Fatima"},
            "isFeatured": null,
            "isNewArrival": true,
            "isBestSeller": null,
            "isPreOrder": false,
            "sku": null,
            "stock": null
        });

        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.price, 245.0);
        assert!(product.is_new_arrival);
        assert!(!product.is_best_seller);
        assert!(product.materials.is_none());
        assert!(product.images.is_empty());
        assert_eq!(product.category.unwrap().slug.current, "rings");
        assert_eq!(product.artisan.unwrap().name, "Fatima");
    }

    #[test]
    fn test_out_of_stock_requires_known_stock() {
        let mut product = Product::new("p1", "Ring", "ring", 10.0);
        assert!(!product.is_out_of_stock());
        product.stock = Some(0);
        assert!(product.is_out_of_stock());
        product.stock = Some(3);
        assert!(!product.is_out_of_stock());
    }

    #[test]
    fn test_category_with_null_subcategories() {
        let json = serde_json::json!({
            "_id": "c1",
            "title": "Rings",
            "slug": {"current": "rings"},
            "subcategories": null
        });
        let category: Category = serde_json::from_value(json).unwrap();
        assert!(category.subcategories.is_empty());
    }
}
