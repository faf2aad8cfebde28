/// A listing after fallback resolution: either what the content source
/// returned, or the built-in demo set. Never a mix of the two.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<T> {
    Live(Vec<T>),
    Placeholder(Vec<T>),
}

impl<T> Listing<T> {
    pub fn items(&self) -> &[T] {
        match self {
            Self::Live(items) | Self::Placeholder(items) => items,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Live(items) | Self::Placeholder(items) => items,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

pub fn resolve<T>(live: Vec<T>, placeholders: Vec<T>) -> Listing<T> {
    resolve_with(live, || placeholders)
}

/// Like [`resolve`], building the placeholder set only when it is needed.
pub fn resolve_with<T, F>(live: Vec<T>, placeholders: F) -> Listing<T>
where
    F: FnOnce() -> Vec<T>,
{
    if live.is_empty() {
        Listing::Placeholder(placeholders())
    } else {
        Listing::Live(live)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_live_list_uses_placeholders() {
        let listing = resolve(Vec::<u32>::new(), vec![1, 2, 3]);
        assert!(listing.is_placeholder());
        assert_eq!(listing.into_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_live_data_is_never_mixed_with_placeholders() {
        let listing = resolve(vec![9], vec![1, 2, 3]);
        assert_eq!(listing, Listing::Live(vec![9]));
        assert_eq!(listing.len(), 1);
    }

    #[test]
    fn test_placeholders_built_lazily() {
        let listing = resolve_with(vec!["live"], || panic!("placeholders must not be built"));
        assert_eq!(listing.items(), ["live"]);
    }

    #[test]
    fn test_empty_placeholder_set_is_still_a_placeholder() {
        let listing: Listing<u8> = resolve(Vec::new(), Vec::new());
        assert!(listing.is_placeholder());
        assert!(listing.is_empty());
    }
}
