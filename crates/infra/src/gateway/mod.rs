//! Device backend gateway adapters

mod http;

pub use http::HttpConfigGateway;
