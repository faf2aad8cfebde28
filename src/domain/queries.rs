//! The read expressions the storefront issues against the content API.
//!
//! Each builder returns a [`ContentQuery`] carrying its expression, the
//! parameters it binds and the tags used for cache invalidation.

use serde::Serialize;
use std::collections::BTreeMap;

/// Scalar bound to a `$name` placeholder in a query expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    String(String),
    Number(f64),
    Bool(bool),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentQuery {
    expression: String,
    params: BTreeMap<String, ParamValue>,
    tags: Vec<String>,
}

impl ContentQuery {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            params: BTreeMap::new(),
            tags: Vec::new(),
        }
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

const PRODUCT_CARD_FIELDS: &str = r#"
    _id,
    title,
    slug,
    price,
    compareAtPrice,
    "mainImage": images[0],
    category->{title, slug},
    artisan->{name},
    isPreOrder
"#;

pub fn all_products() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "product"] | order(_createdAt desc) {
    _id,
    title,
    slug,
    price,
    compareAtPrice,
    "mainImage": images[0],
    materials,
    category->{title, slug},
    collection->{title, slug},
    artisan->{name, slug},
    isFeatured,
    isNewArrival,
    isBestSeller,
    isPreOrder,
    sku,
    stock
}"#,
    )
    .tag("product")
}

pub fn featured_products() -> ContentQuery {
    ContentQuery::new(format!(
        r#"*[_type == "product" && isFeatured == true] | order(_createdAt desc)[0...8] {{{}}}"#,
        PRODUCT_CARD_FIELDS
    ))
    .tag("product")
}

pub fn new_arrivals() -> ContentQuery {
    ContentQuery::new(format!(
        r#"*[_type == "product" && isNewArrival == true] | order(_createdAt desc)[0...8] {{{}}}"#,
        PRODUCT_CARD_FIELDS
    ))
    .tag("product")
}

pub fn product_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "product" && slug.current == $slug][0] {
    _id,
    title,
    slug,
    price,
    compareAtPrice,
    images,
    description,
    materials,
    sizes,
    category->{title, slug},
    collection->{title, slug},
    artisan->{_id, name, slug, region, photo, craft, quote},
    impactStatement,
    careInstructions,
    isPreOrder,
    preOrderMessage,
    sku,
    stock
}"#,
    )
    .param("slug", slug)
    .tag("product")
}

pub fn products_by_category(category: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "product" && category->slug.current == $category] | order(_createdAt desc) {
    _id,
    title,
    slug,
    price,
    compareAtPrice,
    "mainImage": images[0],
    materials,
    category->{title, slug},
    artisan->{name},
    isPreOrder,
    isBestSeller,
    stock
}"#,
    )
    .param("category", category)
    .tag("product")
}

pub fn products_by_collection(collection: &str) -> ContentQuery {
    ContentQuery::new(format!(
        r#"*[_type == "product" && collection->slug.current == $collection] | order(_createdAt desc) {{{}}}"#,
        PRODUCT_CARD_FIELDS
    ))
    .param("collection", collection)
    .tag("product")
}

pub fn all_categories() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "category"] | order(order asc) {
    _id, title, slug, description, image, parentCategory->{title, slug}, order
}"#,
    )
    .tag("category")
}

pub fn top_level_categories() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "category" && !defined(parentCategory)] | order(order asc) {
    _id,
    title,
    slug,
    description,
    image,
    "subcategories": *[_type == "category" && parentCategory._ref == ^._id] | order(order asc) {_id, title, slug}
}"#,
    )
    .tag("category")
}

pub fn category_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "category" && slug.current == $slug][0] {
    _id,
    title,
    slug,
    description,
    image,
    parentCategory->{title, slug},
    "subcategories": *[_type == "category" && parentCategory._ref == ^._id] | order(order asc) {_id, title, slug}
}"#,
    )
    .param("slug", slug)
    .tag("category")
}

pub fn all_collections() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "collection"] | order(_createdAt desc) {
    _id,
    title,
    slug,
    description,
    image,
    "productCount": count(*[_type == "product" && references(^._id)])
}"#,
    )
    .tag("collection")
}

pub fn featured_collections() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "collection" && isFeatured == true] | order(_createdAt desc)[0...4] {
    _id, title, slug, description, image
}"#,
    )
    .tag("collection")
}

pub fn collection_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(format!(
        r#"*[_type == "collection" && slug.current == $slug][0] {{
    _id,
    title,
    slug,
    description,
    image,
    "products": *[_type == "product" && references(^._id)] | order(_createdAt desc) {{{}}}
}}"#,
        PRODUCT_CARD_FIELDS
    ))
    .param("slug", slug)
    .tag("collection")
}

pub fn all_artisans() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "artisan"] | order(name asc) {
    _id, name, slug, region, photo, craft, quote
}"#,
    )
    .tag("artisan")
}

pub fn artisan_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "artisan" && slug.current == $slug][0] {
    _id,
    name,
    slug,
    region,
    photo,
    bio,
    quote,
    craft,
    gallery,
    "products": *[_type == "product" && references(^._id)] | order(_createdAt desc) {
        _id, title, slug, price, "mainImage": images[0]
    }
}"#,
    )
    .param("slug", slug)
    .tag("artisan")
}

pub fn all_blog_posts() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "blogPost"] | order(publishedAt desc) {
    _id, title, slug, excerpt, mainImage, publishedAt, author, categories
}"#,
    )
    .tag("blogPost")
}

pub fn blog_post_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "blogPost" && slug.current == $slug][0] {
    _id, title, slug, excerpt, mainImage, body, publishedAt, author, categories
}"#,
    )
    .param("slug", slug)
    .tag("blogPost")
}

pub fn press_items() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "pressItem"] | order(date desc) {
    _id, publication, title, date, link, logo, quote
}"#,
    )
    .tag("pressItem")
}

pub fn impact_metrics() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "impactMetric"] | order(order asc) {
    _id, title, value, description, icon
}"#,
    )
    .tag("impactMetric")
}

pub fn home_page() -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "page" && slug.current == "home"][0] {
    _id, title, heroHeading, heroSubheading, heroImage, heroCtaText, heroCtaLink, sections
}"#,
    )
    .tag("page")
}

pub fn page_by_slug(slug: &str) -> ContentQuery {
    ContentQuery::new(
        r#"*[_type == "page" && slug.current == $slug][0] {
    _id, title, slug, content
}"#,
    )
    .param("slug", slug)
    .tag("page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lookup_binds_parameter_and_tag() {
        let query = product_by_slug("lapis-ring");
        assert!(query.expression().contains("slug.current == $slug"));
        assert_eq!(
            query.params().get("slug"),
            Some(&ParamValue::String("lapis-ring".to_string()))
        );
        assert_eq!(query.tags(), ["product".to_string()]);
    }

    #[test]
    fn test_shared_card_fields_are_inlined() {
        let query = new_arrivals();
        assert!(query.expression().contains("isNewArrival == true"));
        assert!(query.expression().contains("\"mainImage\": images[0]"));
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_param_values_serialize_as_bare_scalars() {
        assert_eq!(serde_json::to_string(&ParamValue::from("rings")).unwrap(), "\"rings\"");
        assert_eq!(serde_json::to_string(&ParamValue::from(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&ParamValue::from(2.5)).unwrap(), "2.5");
    }
}
