use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::{debug, info};

/// Default base URL used when nothing else is configured
pub const DEFAULT_BASEURL: &str = "http://0.0.0.0:8080/";

/// Prefix for environment overrides, e.g. `URLS_WEBDRIVER_BASEURL`
pub const ENV_PREFIX: &str = "URLS";

/// Base URLs and named routes used to build absolute links
#[derive(Debug, Clone, Deserialize)]
pub struct UrlConfig {
    /// Base URL for links consumed by the headless browser
    #[serde(default)]
    pub webdriver_baseurl: Option<String>,

    /// Base URL for links shown to users; may carry a path prefix
    #[serde(default)]
    pub webdriver_baseurl_user_friendly: Option<String>,

    /// Endpoint name -> route rule; names are matched lower-case when read from a file
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            webdriver_baseurl: Some(DEFAULT_BASEURL.to_string()),
            webdriver_baseurl_user_friendly: Some(DEFAULT_BASEURL.to_string()),
            routes: BTreeMap::new(),
        }
    }
}

impl UrlConfig {
    /// Builds a config with the two base URLs and no routes
    pub fn new(baseurl: impl Into<String>, user_friendly: impl Into<String>) -> Self {
        Self {
            webdriver_baseurl: Some(baseurl.into()),
            webdriver_baseurl_user_friendly: Some(user_friendly.into()),
            routes: BTreeMap::new(),
        }
    }

    /// Loads settings from an optional TOML file, then `URLS_*` environment variables
    ///
    /// Both base URLs fall back to [`DEFAULT_BASEURL`] when no source sets them.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("webdriver_baseurl", DEFAULT_BASEURL)
            .context("Failed to set default base URL")?
            .set_default("webdriver_baseurl_user_friendly", DEFAULT_BASEURL)
            .context("Failed to set default user-friendly base URL")?;

        if let Some(path) = path {
            info!("Loading URL configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read URL configuration")?;

        let config: UrlConfig = settings
            .try_deserialize()
            .context("Failed to deserialize URL configuration")?;

        debug!(
            "URL configuration: baseurl={:?}, user_friendly={:?}, routes={}",
            config.webdriver_baseurl,
            config.webdriver_baseurl_user_friendly,
            config.routes.len()
        );

        Ok(config)
    }
}
