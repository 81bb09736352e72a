use tracing::debug;

use super::url_split::SplitUrl;
use crate::config::UrlConfig;
use crate::error::{Result, UrlError};
use crate::routes::RouteRegistry;

/// Returns the configured base URL, the user-facing one when `user_friendly` is set
pub fn get_url_host(config: &UrlConfig, user_friendly: bool) -> Result<&str> {
    let (value, key) = if user_friendly {
        (
            config.webdriver_baseurl_user_friendly.as_deref(),
            "WEBDRIVER_BASEURL_USER_FRIENDLY",
        )
    } else {
        (config.webdriver_baseurl.as_deref(), "WEBDRIVER_BASEURL")
    };

    value.ok_or(UrlError::MissingConfig(key))
}

/// Makes `path` absolute against the configured base URL
///
/// The user-friendly base is concatenated as-is so a path prefix on it
/// (e.g. behind a reverse proxy) is kept; the caller must avoid doubled slashes.
/// The webdriver base is joined with standard reference resolution, so an
/// absolute `path` replaces whatever path the base carries. The base keeps
/// its host and port exactly as configured.
pub fn headless_url(config: &UrlConfig, path: &str, user_friendly: bool) -> Result<String> {
    let host = get_url_host(config, user_friendly)?;

    if user_friendly {
        return Ok(format!("{}{}", host, path));
    }
    if path.is_empty() {
        return Ok(host.to_string());
    }

    let joined = SplitUrl::parse(host)?.join(path)?;
    debug!("Joined {} onto {}: {}", path, host, joined);
    Ok(joined)
}

/// Resolves a named view to an absolute URL
///
/// # Arguments
/// * `view` - Endpoint name registered in `routes`
/// * `params` - Rule variables; anything else becomes the query string
pub fn get_url_path(
    config: &UrlConfig,
    routes: &RouteRegistry,
    view: &str,
    user_friendly: bool,
    params: &[(&str, &str)],
) -> Result<String> {
    let path = routes.url_for(view, params)?;
    headless_url(config, &path, user_friendly)
}
