//! URL helpers used while serving a request
//!
//! Every helper is a plain function of its arguments: the configured base URLs
//! come in through [`UrlConfig`](crate::config::UrlConfig), the current request
//! through [`RequestContext`](crate::context::RequestContext) and named views
//! through [`RouteRegistry`](crate::routes::RouteRegistry).

pub mod url_host;
pub mod url_query;
pub mod url_safety;
pub mod url_split;


pub use url_host::{get_url_host, get_url_path, headless_url};
pub use url_query::{modify_url_query, QueryValue};
pub use url_safety::is_safe_url;
pub use url_split::SplitUrl;
