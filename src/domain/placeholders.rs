//! Built-in demo content shown while the content project has no records.

use crate::domain::model::{
    Artisan, ArtisanRef, BlogPost, Category, CategoryRef, Collection, ImpactMetric, PressItem,
    Product, Slug,
};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=1920&q=80";

const ARTISAN_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1594744803329-e58b31de8bf5?w=600&q=80",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600&q=80",
    "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=600&q=80",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=600&q=80",
];

const COLLECTION_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=600&q=80",
    "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=600&q=80",
    "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=600&q=80",
    "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=600&q=80",
];

const RING_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=500&q=80",
    "https://images.unsplash.com/photo-1603561591411-07134e71a2a9?w=500&q=80",
    "https://images.unsplash.com/photo-1602751584552-8ba5b4e5c4c4?w=500&q=80",
];

const NECKLACE_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=500&q=80",
    "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=500&q=80",
    "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=500&q=80",
];

const EARRING_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=500&q=80",
    "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=500&q=80",
    "https://images.unsplash.com/photo-1630019852942-f89202989a59?w=500&q=80",
];

const BRACELET_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=500&q=80",
    "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=500&q=80",
    "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=500&q=80",
];

const BLOG_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1599643477877-530eb83abc8e?w=800&q=80",
    "https://images.unsplash.com/photo-1459411552884-841db9b3cc2a?w=800&q=80",
    "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=800&q=80",
    "https://images.unsplash.com/photo-1617038260897-41a1f14a8ca0?w=800&q=80",
];

const INSTAGRAM_IMAGES: [&str; 6] = [
    "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=400&q=80",
    "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=400&q=80",
    "https://images.unsplash.com/photo-1535632066927-ab7c9ab60908?w=400&q=80",
    "https://images.unsplash.com/photo-1602173574767-37ac01994b2a?w=400&q=80",
    "https://images.unsplash.com/photo-1611652022419-a9419f74343d?w=400&q=80",
    "https://images.unsplash.com/photo-1573408301185-9146fe634ad0?w=400&q=80",
];

pub fn hero_image() -> &'static str {
    HERO_IMAGE
}

fn pick(pool: &[&'static str], index: usize) -> &'static str {
    pool[index % pool.len()]
}

/// Stock photo for a product card without media, chosen by category title.
pub fn product_image(category: Option<&str>, index: usize) -> &'static str {
    if let Some(category) = category {
        let cat = category.to_lowercase();
        if cat.contains("ring") && !cat.contains("earring") {
            return pick(&RING_IMAGES, index);
        }
        if cat.contains("necklace") || cat.contains("pendant") {
            return pick(&NECKLACE_IMAGES, index);
        }
        if cat.contains("earring") {
            return pick(&EARRING_IMAGES, index);
        }
        if cat.contains("bracelet") || cat.contains("cuff") {
            return pick(&BRACELET_IMAGES, index);
        }
    }

    let all: Vec<&'static str> = RING_IMAGES
        .iter()
        .chain(NECKLACE_IMAGES.iter())
        .chain(EARRING_IMAGES.iter())
        .chain(BRACELET_IMAGES.iter())
        .copied()
        .collect();
    pick(&all, index)
}

pub fn artisan_image(index: usize) -> &'static str {
    pick(&ARTISAN_IMAGES, index)
}

pub fn collection_image(index: usize) -> &'static str {
    pick(&COLLECTION_IMAGES, index)
}

pub fn blog_image(index: usize) -> &'static str {
    pick(&BLOG_IMAGES, index)
}

pub fn instagram_image(index: usize) -> &'static str {
    pick(&INSTAGRAM_IMAGES, index)
}

fn placeholder_product(
    id: &str,
    title: &str,
    slug: &str,
    price: f64,
    compare_at_price: Option<f64>,
    category: (&str, &str),
    artisan: &str,
) -> Product {
    let mut product = Product::new(id, title, slug, price);
    product.compare_at_price = compare_at_price;
    product.category = Some(CategoryRef {
        title: category.0.to_string(),
        slug: Slug::new(category.1),
    });
    product.artisan = Some(ArtisanRef {
        name: artisan.to_string(),
        ..ArtisanRef::default()
    });
    product
}

pub fn products() -> Vec<Product> {
    vec![
        placeholder_product(
            "1",
            "Lapis Lazuli Statement Ring",
            "lapis-lazuli-statement-ring",
            245.0,
            None,
            ("Rings", "rings"),
            "Fatima",
        ),
        placeholder_product(
            "2",
            "Silver Filigree Pendant",
            "silver-filigree-pendant",
            185.0,
            Some(220.0),
            ("Necklaces", "necklaces"),
            "Ahmad",
        ),
        placeholder_product(
            "3",
            "Turquoise Drop Earrings",
            "turquoise-drop-earrings",
            165.0,
            None,
            ("Earrings", "earrings"),
            "Maryam",
        ),
        placeholder_product(
            "4",
            "Hammered Gold Cuff",
            "hammered-gold-cuff",
            295.0,
            None,
            ("Bracelets", "bracelets"),
            "Karim",
        ),
    ]
}

fn placeholder_collection(id: &str, title: &str, slug: &str, description: &str) -> Collection {
    Collection {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug::new(slug),
        description: Some(description.to_string()),
        image: None,
        is_featured: true,
        products: Vec::new(),
        product_count: None,
    }
}

pub fn collections() -> Vec<Collection> {
    vec![
        placeholder_collection(
            "1",
            "Lapis Lazuli",
            "lapis-lazuli",
            "Deep blue stones from the mountains of Badakhshan",
        ),
        placeholder_collection(
            "2",
            "Silver Filigree",
            "silver-filigree",
            "Intricate metalwork passed down through generations",
        ),
        placeholder_collection(
            "3",
            "Turquoise Dreams",
            "turquoise",
            "Vibrant stones with ancient significance",
        ),
        placeholder_collection(
            "4",
            "Bridal Collection",
            "bridal",
            "Elegant pieces for your special day",
        ),
    ]
}

fn metric(id: &str, title: &str, value: &str, description: &str, icon: Option<&str>) -> ImpactMetric {
    ImpactMetric {
        id: id.to_string(),
        title: title.to_string(),
        value: value.to_string(),
        description: Some(description.to_string()),
        icon: icon.map(str::to_string),
        order: None,
    }
}

/// The four headline metrics shown on the home page.
pub fn home_impact_metrics() -> Vec<ImpactMetric> {
    vec![
        metric("1", "Artisans Supported", "50+", "Skilled craftspeople employed", Some("artisans")),
        metric("2", "Families Impacted", "200+", "Lives changed through fair wages", Some("families")),
        metric("3", "Fair Wage Premium", "40%", "Above local market rates", Some("wages")),
        metric("4", "Women Artisans", "60%", "Female empowerment focus", Some("women")),
    ]
}

/// The full set shown on the impact page.
pub fn impact_metrics() -> Vec<ImpactMetric> {
    vec![
        metric("1", "Artisans Supported", "50+", "Skilled craftspeople employed", None),
        metric("2", "Families Impacted", "200+", "Lives changed through fair wages", None),
        metric("3", "Fair Wage Premium", "40%", "Above local market rates", None),
        metric("4", "Women Artisans", "60%", "Female empowerment focus", None),
        metric("5", "Children in School", "75", "Through our education program", None),
        metric("6", "Regions Reached", "5", "Across Afghanistan", None),
    ]
}

fn press(id: &str, publication: &str, title: &str, date: &str, quote: &str) -> PressItem {
    PressItem {
        id: id.to_string(),
        publication: publication.to_string(),
        title: Some(title.to_string()),
        date: Some(date.to_string()),
        link: None,
        logo: None,
        quote: Some(quote.to_string()),
    }
}

pub fn press_items() -> Vec<PressItem> {
    vec![
        press(
            "1",
            "Vogue",
            "Stunning Craftsmanship with a Purpose",
            "2023-11-15",
            "Darichah brings exquisite Afghan artistry to the modern world while empowering the communities behind each piece.",
        ),
        press(
            "2",
            "Elle",
            "Where Heritage Meets Modern Elegance",
            "2023-09-20",
            "These pieces tell stories that span generations, each one a window into Afghanistan's rich artistic heritage.",
        ),
        press(
            "3",
            "Forbes",
            "Redefining Ethical Luxury",
            "2023-08-10",
            "A business model that proves profitability and social impact can go hand in hand.",
        ),
        press(
            "4",
            "Harper's Bazaar",
            "Jewellery That Tells a Story",
            "2023-07-05",
            "Every piece from Darichah is more than an accessory, it's a connection to ancient traditions and modern hope.",
        ),
    ]
}

fn artisan(id: &str, name: &str, slug: &str, region: &str, craft: &str, quote: &str) -> Artisan {
    Artisan {
        id: id.to_string(),
        name: name.to_string(),
        slug: Slug::new(slug),
        region: Some(region.to_string()),
        photo: None,
        bio: None,
        quote: Some(quote.to_string()),
        craft: Some(craft.to_string()),
        gallery: Vec::new(),
        products: Vec::new(),
    }
}

pub fn artisans() -> Vec<Artisan> {
    vec![
        artisan(
            "1",
            "Fatima Ahmadi",
            "fatima-ahmadi",
            "Kabul",
            "Silver Filigree",
            "Every piece I create carries a piece of my heart.",
        ),
        artisan(
            "2",
            "Ahmad Khan",
            "ahmad-khan",
            "Herat",
            "Lapis Lazuli Setting",
            "These stones have been in our mountains for millennia.",
        ),
        artisan(
            "3",
            "Maryam Rahimi",
            "maryam-rahimi",
            "Mazar-i-Sharif",
            "Turquoise Jewellery",
            "I learned this craft from my grandmother.",
        ),
        artisan(
            "4",
            "Karim Nazari",
            "karim-nazari",
            "Badakhshan",
            "Traditional Metalwork",
            "Our craft tells the story of our people.",
        ),
    ]
}

fn post(id: &str, title: &str, slug: &str, excerpt: &str, published_at: &str, categories: &[&str]) -> BlogPost {
    BlogPost {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug::new(slug),
        excerpt: Some(excerpt.to_string()),
        main_image: None,
        body: None,
        published_at: Some(published_at.to_string()),
        author: Some("Darichah Team".to_string()),
        categories: categories.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        post(
            "1",
            "The Art of Lapis Lazuli: From Mountain to Masterpiece",
            "art-of-lapis-lazuli",
            "Discover the journey of Afghanistan's legendary blue stone, from the mines of Badakhshan to the hands of skilled artisans.",
            "2024-01-15",
            &["Craftsmanship", "Materials"],
        ),
        post(
            "2",
            "Meet Fatima: A Master Silversmith",
            "meet-fatima-silversmith",
            "Learn about Fatima's journey from learning her grandmother's craft to becoming one of our most celebrated artisans.",
            "2024-01-08",
            &["Artisan Stories"],
        ),
        post(
            "3",
            "The History of Afghan Jewellery Making",
            "history-afghan-jewellery",
            "Explore thousands of years of jewellery making tradition in Afghanistan, from ancient civilizations to modern artisans.",
            "2024-01-02",
            &["History", "Culture"],
        ),
        post(
            "4",
            "Caring for Your Handcrafted Pieces",
            "caring-handcrafted-pieces",
            "Tips and techniques to keep your Darichah jewellery looking beautiful for generations.",
            "2023-12-20",
            &["Care Guide"],
        ),
    ]
}

/// Category navigation used when the project defines no categories. The
/// empty slug links to the unfiltered shop.
pub fn categories() -> Vec<Category> {
    [
        ("1", "All", ""),
        ("2", "Rings", "rings"),
        ("3", "Necklaces", "necklaces"),
        ("4", "Earrings", "earrings"),
        ("5", "Bracelets", "bracelets"),
    ]
    .into_iter()
    .map(|(id, title, slug)| Category {
        id: id.to_string(),
        title: title.to_string(),
        slug: Slug::new(slug),
        description: None,
        image: None,
        parent_category: None,
        order: None,
        subcategories: Vec::new(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_image_by_category() {
        assert_eq!(product_image(Some("Rings"), 0), RING_IMAGES[0]);
        assert_eq!(product_image(Some("Drop Earrings"), 1), EARRING_IMAGES[1]);
        assert_eq!(product_image(Some("Pendants"), 4), NECKLACE_IMAGES[1]);
        assert_eq!(product_image(Some("Cuffs"), 2), BRACELET_IMAGES[2]);
    }

    #[test]
    fn test_product_image_rotates_through_pool_without_category() {
        assert_eq!(product_image(None, 0), RING_IMAGES[0]);
        assert_eq!(product_image(None, 3), NECKLACE_IMAGES[0]);
        assert_eq!(product_image(None, 12), RING_IMAGES[0]);
    }

    #[test]
    fn test_placeholder_sets_are_populated() {
        assert_eq!(products().len(), 4);
        assert_eq!(collections().len(), 4);
        assert_eq!(home_impact_metrics().len(), 4);
        assert_eq!(impact_metrics().len(), 6);
        assert_eq!(press_items().len(), 4);
        assert_eq!(artisans().len(), 4);
        assert_eq!(blog_posts().len(), 4);
        assert_eq!(categories()[0].slug.current, "");
    }
}
