// Domain layer: content records, query catalog, demo content and ports.

pub mod model;
pub mod placeholders;
pub mod ports;
pub mod queries;
