//! Add-to-cart controls for the embeddable cart widget.
//!
//! The widget script reads `data-item-*` attributes off elements carrying the
//! `snipcart-add-item` class; cart, order and payment state stay inside the widget.

use crate::domain::model::Product;
use crate::utils::format::{escape_html, product_url};

pub const ADD_ITEM_CLASS: &str = "snipcart-add-item";
pub const WIDGET_SCRIPT: &str = "https://cdn.snipcart.com/themes/v3.2.0/default/snipcart.js";
pub const WIDGET_STYLESHEET: &str = "https://cdn.snipcart.com/themes/v3.2.0/default/snipcart.css";

#[derive(Debug, Clone, PartialEq)]
pub struct CartButton {
    pub attributes: Vec<(&'static str, String)>,
    pub label: &'static str,
    pub disabled: bool,
}

impl CartButton {
    /// Full control for the product detail page.
    pub fn for_product(
        product: &Product,
        quantity: u32,
        selected_size: Option<&str>,
        image_url: &str,
    ) -> Self {
        let mut attributes = Self::base_attributes(product, image_url);
        attributes.push(("data-item-quantity", quantity.max(1).to_string()));

        if let Some(sizes) = product.sizes.as_deref().filter(|s| !s.is_empty()) {
            attributes.push(("data-item-custom1-name", "Size".to_string()));
            attributes.push(("data-item-custom1-options", sizes.join("|")));
            if let Some(size) = selected_size {
                attributes.push(("data-item-custom1-value", size.to_string()));
            }
        }

        let disabled = product.is_out_of_stock();
        let label = if disabled {
            "Out of Stock"
        } else if product.is_pre_order {
            "Pre-Order Now"
        } else {
            "Add to Cart"
        };

        Self {
            attributes,
            label,
            disabled,
        }
    }

    /// Quick-add control shown on product cards.
    pub fn quick_add(product: &Product, image_url: &str) -> Self {
        Self {
            attributes: Self::base_attributes(product, image_url),
            label: if product.is_pre_order {
                "Pre-Order"
            } else {
                "Add to Cart"
            },
            disabled: false,
        }
    }

    fn base_attributes(product: &Product, image_url: &str) -> Vec<(&'static str, String)> {
        vec![
            ("data-item-id", product.id.clone()),
            ("data-item-name", product.title.clone()),
            ("data-item-price", format_widget_price(product.price)),
            ("data-item-url", product_url(&product.slug.current)),
            ("data-item-image", image_url.to_string()),
        ]
    }

    pub fn to_html(&self) -> String {
        let attrs: String = self
            .attributes
            .iter()
            .map(|(name, value)| format!(" {}=\"{}\"", name, escape_html(value)))
            .collect();
        format!(
            "<button class=\"{}\"{}{}>{}</button>",
            ADD_ITEM_CLASS,
            attrs,
            if self.disabled { " disabled" } else { "" },
            self.label
        )
    }
}

/// Whole prices print without decimals, matching what the product record holds.
fn format_widget_price(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{}", price as i64)
    } else {
        format!("{}", price)
    }
}

/// Container element the widget mounts into; `None` when no key is configured.
pub fn widget_container(api_key: Option<&str>) -> Option<String> {
    api_key.map(|key| {
        format!(
            "<div hidden id=\"snipcart\" data-api-key=\"{}\"></div>",
            escape_html(key)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized_product() -> Product {
        let mut product = Product::new("p1", "Lapis Ring", "lapis-ring", 245.0);
        product.sizes = Some(vec!["6".to_string(), "7".to_string()]);
        product
    }

    fn attr<'a>(button: &'a CartButton, name: &str) -> Option<&'a str> {
        button
            .attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_detail_button_exposes_size_option() {
        let button = CartButton::for_product(&sized_product(), 2, Some("7"), "https://img/x.jpg");
        assert_eq!(attr(&button, "data-item-id"), Some("p1"));
        assert_eq!(attr(&button, "data-item-price"), Some("245"));
        assert_eq!(attr(&button, "data-item-url"), Some("/product/lapis-ring"));
        assert_eq!(attr(&button, "data-item-quantity"), Some("2"));
        assert_eq!(attr(&button, "data-item-custom1-name"), Some("Size"));
        assert_eq!(attr(&button, "data-item-custom1-options"), Some("6|7"));
        assert_eq!(attr(&button, "data-item-custom1-value"), Some("7"));
        assert_eq!(button.label, "Add to Cart");
        assert!(!button.disabled);
    }

    #[test]
    fn test_no_size_option_without_sizes() {
        let product = Product::new("p2", "Cuff", "cuff", 99.5);
        let button = CartButton::for_product(&product, 0, None, "");
        assert_eq!(attr(&button, "data-item-custom1-name"), None);
        assert_eq!(attr(&button, "data-item-price"), Some("99.5"));
        assert_eq!(attr(&button, "data-item-quantity"), Some("1"));
    }

    #[test]
    fn test_stock_and_pre_order_labels() {
        let mut product = sized_product();
        product.is_pre_order = true;
        assert_eq!(CartButton::for_product(&product, 1, None, "").label, "Pre-Order Now");
        assert_eq!(CartButton::quick_add(&product, "").label, "Pre-Order");

        product.stock = Some(0);
        let button = CartButton::for_product(&product, 1, None, "");
        assert_eq!(button.label, "Out of Stock");
        assert!(button.disabled);
        assert!(button.to_html().contains(" disabled>"));
    }

    #[test]
    fn test_html_escapes_attribute_values() {
        let product = Product::new("p3", "Ring \"Royal\"", "royal", 10.0);
        let html = CartButton::quick_add(&product, "").to_html();
        assert!(html.starts_with("<button class=\"snipcart-add-item\""));
        assert!(html.contains("data-item-name=\"Ring &quot;Royal&quot;\""));
    }

    #[test]
    fn test_widget_container_requires_key() {
        assert!(widget_container(None).is_none());
        assert!(widget_container(Some("pk_1")).unwrap().contains("data-api-key=\"pk_1\""));
    }
}
