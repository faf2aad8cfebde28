// Presentation layer: HTML rendering and the HTTP router.

pub mod render;
pub mod server;
