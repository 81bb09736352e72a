pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod routes;
pub mod url_helpers;
pub mod utils;

pub use config::UrlConfig;
pub use context::RequestContext;
pub use error::UrlError;
pub use routes::RouteRegistry;
pub use url_helpers::{get_url_host, get_url_path, headless_url, is_safe_url, modify_url_query, QueryValue};
