//! Text helpers shared by the page renderers.

use regex::Regex;

/// Formats an amount as US dollars, e.g. `1234.5` -> `$1,234.50`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

/// Whole-percent discount of `price` against `compare_at_price`; zero unless the
/// compare-at price is strictly higher.
pub fn calculate_discount(price: f64, compare_at_price: Option<f64>) -> u32 {
    match compare_at_price {
        Some(compare) if compare > price && compare > 0.0 => {
            (((compare - price) / compare) * 100.0).round() as u32
        }
        _ => 0,
    }
}

pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = Regex::new(r"[^A-Za-z0-9_ ]+")
        .map(|re| re.replace_all(&lowered, "").into_owned())
        .unwrap_or(lowered);
    stripped
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let head: String = text.chars().take(max_length).collect();
    format!("{}...", head.trim())
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn product_url(slug: &str) -> String {
    format!("/product/{}", slug)
}

pub fn category_url(slug: &str) -> String {
    if slug.is_empty() {
        "/shop".to_string()
    } else {
        format!("/shop/{}", slug)
    }
}

pub fn collection_url(slug: &str) -> String {
    format!("/collections/{}", slug)
}

pub fn artisan_url(slug: &str) -> String {
    format!("/artisans/{}", slug)
}

pub fn blog_post_url(slug: &str) -> String {
    format!("/journal/{}", slug)
}
