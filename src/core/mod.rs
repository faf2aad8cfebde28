pub mod cart;
pub mod catalog;
pub mod contact;
pub mod content;
pub mod fallback;
pub mod media;
pub mod pages;

pub use crate::domain::ports::{ConfigProvider, ContentSource};
pub use crate::domain::queries::ContentQuery;
pub use crate::utils::error::Result;
