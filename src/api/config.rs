use anyhow::{Context, Result};
use tracing::debug;

use crate::config::UrlConfig;
use crate::routes::RouteRegistry;

/// Shared state handed to every request handler
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL settings
    pub urls: UrlConfig,

    /// Named views resolvable through `/urls/view`
    pub routes: RouteRegistry,
}

impl ApiConfig {
    /// Builds the handler state, compiling the configured route table
    pub fn new(urls: UrlConfig) -> Result<Self> {
        let routes = RouteRegistry::from_table(&urls.routes).context("Invalid route table")?;
        debug!("Compiled {} routes", routes.len());
        Ok(Self { urls, routes })
    }
}
