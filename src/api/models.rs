use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::url_helpers::QueryValue;

/// Query string of `GET /redirect`
#[derive(Debug, Deserialize)]
pub struct RedirectQuery {
    /// Where to send the user once the target is checked
    pub next: String,
}

/// Request to resolve a named view to an absolute URL
#[derive(Debug, Deserialize)]
pub struct ViewUrlRequest {
    pub view: String,

    #[serde(default)]
    pub user_friendly: bool,

    /// Rule variables and extra query parameters, in request order
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl ViewUrlRequest {
    /// Params as strings, keeping the order they were sent in
    pub fn route_params(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(key, value)| (key.clone(), json_scalar(value)))
            .collect()
    }
}

/// Request to replace or add query parameters on a URL
#[derive(Debug, Deserialize)]
pub struct QueryUrlRequest {
    pub url: String,

    /// Strings, numbers or arrays, in request order; only the first array element is kept
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl QueryUrlRequest {
    /// Converts the JSON params into values accepted by `modify_url_query`
    pub fn query_values(&self) -> Vec<(String, QueryValue)> {
        self.params
            .iter()
            .map(|(key, value)| (key.clone(), json_to_query_value(value)))
            .collect()
    }
}

fn json_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_to_query_value(value: &Value) -> QueryValue {
    match value {
        Value::Array(items) => QueryValue::Many(items.iter().map(json_scalar).collect()),
        other => QueryValue::One(json_scalar(other)),
    }
}

/// A built URL
#[derive(Debug, Serialize, Deserialize)]
pub struct UrlResponse {
    pub url: String,
}

/// Standard error response format for the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,

    /// Detailed error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Response for health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub routes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_values_from_json() {
        let request: QueryUrlRequest = serde_json::from_value(json!({
            "url": "/r/",
            "params": {"z": "x", "b": 3, "c": ["1", 2]}
        }))
        .unwrap();

        let values = request.query_values();
        assert_eq!(
            values,
            vec![
                ("z".to_string(), QueryValue::One("x".into())),
                ("b".to_string(), QueryValue::One("3".into())),
                ("c".to_string(), QueryValue::Many(vec!["1".into(), "2".into()])),
            ]
        );
    }

    #[test]
    fn test_view_request_defaults() {
        let request: ViewUrlRequest = serde_json::from_value(json!({"view": "welcome"})).unwrap();
        assert!(!request.user_friendly);
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_route_params_keep_request_order() {
        let request: ViewUrlRequest = serde_json::from_str(
            r#"{"view": "dashboard", "params": {"dashboard_id": 5, "zoom": "1", "all": "y"}}"#,
        )
        .unwrap();

        assert_eq!(
            request.route_params(),
            vec![
                ("dashboard_id".to_string(), "5".to_string()),
                ("zoom".to_string(), "1".to_string()),
                ("all".to_string(), "y".to_string()),
            ]
        );
    }
}
