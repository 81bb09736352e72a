pub mod rule;

use std::collections::{BTreeMap, HashMap};

use tracing::debug;
use url::form_urlencoded;

use crate::error::{Result, UrlError};
pub use rule::{Converter, Rule, Segment};

/// Endpoint name -> route rule, used to turn view names back into paths
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: HashMap<String, Rule>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a configured endpoint table
    pub fn from_table(table: &BTreeMap<String, String>) -> Result<Self> {
        let mut registry = Self::new();
        for (endpoint, rule) in table {
            registry.register(endpoint, rule)?;
        }
        Ok(registry)
    }

    /// Registers `rule` under `endpoint`, replacing any earlier rule
    pub fn register(&mut self, endpoint: &str, rule: &str) -> Result<()> {
        let parsed = Rule::parse(rule)?;
        debug!("Registered route {} -> {}", endpoint, rule);
        self.routes.insert(endpoint.to_string(), parsed);
        Ok(())
    }

    pub fn contains(&self, endpoint: &str) -> bool {
        self.routes.contains_key(endpoint)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Builds the path for `endpoint`
    ///
    /// Params matching rule variables fill the path; the rest are appended as a
    /// urlencoded query string in the order given.
    pub fn url_for(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String> {
        let rule = self
            .routes
            .get(endpoint)
            .ok_or_else(|| UrlError::UnknownView(endpoint.to_string()))?;

        let mut path = String::new();
        for segment in &rule.segments {
            match segment {
                Segment::Static(text) => path.push_str(text),
                Segment::Variable { name, converter } => {
                    let value = params
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| UrlError::MissingRouteParam {
                            endpoint: endpoint.to_string(),
                            param: name.clone(),
                        })?;
                    path.push_str(&converter.to_path(name, value)?);
                }
            }
        }

        let variables: Vec<&str> = rule.variables().collect();
        let mut extra = form_urlencoded::Serializer::new(String::new());
        let mut has_extra = false;
        for (key, value) in params.iter().filter(|(key, _)| !variables.contains(key)) {
            extra.append_pair(key, value);
            has_extra = true;
        }
        if has_extra {
            path.push('?');
            path.push_str(&extra.finish());
        }

        Ok(path)
    }
}
