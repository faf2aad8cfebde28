use crate::config::settings::ContentSourceSettings;
use crate::domain::model::ImageRef;
use url::Url;

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Builds transformed-image URLs for media references.
///
/// Unconfigured builders, missing sources and unparsable references all
/// produce an empty URL; callers pick a placeholder image instead.
#[derive(Debug, Clone, Default)]
pub struct ImageUrlBuilder {
    project: Option<(String, String)>,
}

impl ImageUrlBuilder {
    pub fn new(settings: Option<&ContentSourceSettings>) -> Self {
        Self {
            project: settings.map(|s| (s.project_id.clone(), s.dataset.clone())),
        }
    }

    pub fn image<'a>(&'a self, source: Option<&'a ImageRef>) -> ImageUrl<'a> {
        ImageUrl {
            builder: self,
            source,
            width: None,
            height: None,
        }
    }
}

pub struct ImageUrl<'a> {
    builder: &'a ImageUrlBuilder,
    source: Option<&'a ImageRef>,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrl<'_> {
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn url(&self) -> String {
        self.try_url().unwrap_or_default()
    }

    fn try_url(&self) -> Option<String> {
        let (project_id, dataset) = self.builder.project.as_ref()?;
        let asset = parse_asset_ref(self.source?.asset_ref()?)?;

        let mut url = Url::parse(&format!(
            "{}/{}/{}/{}-{}.{}",
            IMAGE_CDN, project_id, dataset, asset.id, asset.dimensions, asset.format
        ))
        .ok()?;

        if self.width.is_some() || self.height.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(w) = self.width {
                pairs.append_pair("w", &w.to_string());
            }
            if let Some(h) = self.height {
                pairs.append_pair("h", &h.to_string());
            }
        }

        Some(url.to_string())
    }
}

struct AssetId<'a> {
    id: &'a str,
    dimensions: &'a str,
    format: &'a str,
}

/// `image-<id>-<W>x<H>-<format>`
fn parse_asset_ref(reference: &str) -> Option<AssetId<'_>> {
    let rest = reference.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    let (w, h) = dimensions.split_once('x')?;
    if id.is_empty() || format.is_empty() || w.parse::<u32>().is_err() || h.parse::<u32>().is_err() {
        return None;
    }

    Some(AssetId {
        id,
        dimensions,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AssetRef;

    fn settings() -> ContentSourceSettings {
        ContentSourceSettings {
            project_id: "x7k2p9qa".to_string(),
            dataset: "production".to_string(),
            api_version: "2024-03-01".to_string(),
            use_cdn: false,
            api_host: None,
            timeout_seconds: None,
        }
    }

    fn image(reference: &str) -> ImageRef {
        ImageRef {
            asset: Some(AssetRef {
                reference: reference.to_string(),
            }),
            alt: None,
        }
    }

    #[test]
    fn test_builds_cdn_url_with_dimensions() {
        let builder = ImageUrlBuilder::new(Some(&settings()));
        let source = image("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");
        let url = builder.image(Some(&source)).width(500).height(500).url();
        assert_eq!(
            url,
            "https://cdn.sanity.io/images/x7k2p9qa/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg?w=500&h=500"
        );
    }

    #[test]
    fn test_without_dimensions_has_no_query() {
        let builder = ImageUrlBuilder::new(Some(&settings()));
        let source = image("image-abc123-800x600-png");
        assert_eq!(
            builder.image(Some(&source)).url(),
            "https://cdn.sanity.io/images/x7k2p9qa/production/abc123-800x600.png"
        );
    }

    #[test]
    fn test_unconfigured_or_missing_source_is_empty() {
        let source = image("image-abc123-800x600-png");
        assert_eq!(ImageUrlBuilder::default().image(Some(&source)).width(10).url(), "");

        let builder = ImageUrlBuilder::new(Some(&settings()));
        assert_eq!(builder.image(None).width(10).url(), "");
        assert_eq!(builder.image(Some(&image("file-abc-pdf"))).url(), "");
        assert_eq!(builder.image(Some(&image("image-abc-big-png"))).url(), "");
    }
}
