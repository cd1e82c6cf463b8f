pub mod api;
pub mod config;
pub mod extractor;
pub mod observability;
pub mod resolver;
pub mod transport;
