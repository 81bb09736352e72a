use thiserror::Error;

/// Errors raised by the URL helpers and the route registry
#[derive(Debug, Error)]
pub enum UrlError {
    /// A base URL setting was requested but is not configured
    #[error("missing configuration key: {0}")]
    MissingConfig(&'static str),

    /// No route is registered under this endpoint name
    #[error("could not build url for endpoint '{0}'")]
    UnknownView(String),

    /// The route rule needs a value that was not supplied
    #[error("could not build url for endpoint '{endpoint}': missing value for '{param}'")]
    MissingRouteParam { endpoint: String, param: String },

    /// A value does not satisfy the converter of its rule variable
    #[error("invalid value '{value}' for route parameter '{param}'")]
    InvalidRouteParam { param: String, value: String },

    #[error("invalid route rule '{rule}': {reason}")]
    InvalidRule { rule: String, reason: String },

    /// A list-valued query parameter had no elements to serialize
    #[error("query parameter '{0}' has no values")]
    EmptyQueryValue(String),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: &'static str },
}

pub type Result<T> = std::result::Result<T, UrlError>;
