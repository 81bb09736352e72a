use tracing::debug;
use url::form_urlencoded;

use super::url_split::SplitUrl;
use crate::error::{Result, UrlError};

/// A value for [`modify_url_query`]; only the first element of a list is serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    One(String),
    Many(Vec<String>),
}

impl QueryValue {
    fn into_values(self) -> Vec<String> {
        match self {
            QueryValue::One(value) => vec![value],
            QueryValue::Many(values) => values,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::One(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::One(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Many(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Many(values.into_iter().map(str::to_string).collect())
    }
}

macro_rules! query_value_from_int {
    ($($ty:ty),*) => {
        $(impl From<$ty> for QueryValue {
            fn from(value: $ty) -> Self {
                QueryValue::One(value.to_string())
            }
        })*
    };
}

query_value_from_int!(i32, i64, u32, u64, usize);

/// Parses a query string into keys with all their values, in first-seen order
///
/// Pairs with an empty value (including bare keys) are dropped.
fn parse_query(query: &str) -> Vec<(String, Vec<String>)> {
    let mut params: Vec<(String, Vec<String>)> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value.into_owned()),
            None => params.push((key.into_owned(), vec![value.into_owned()])),
        }
    }

    params
}

/// Percent-encodes everything except unreserved characters and `/`
fn quote(value: &str) -> String {
    value
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Replaces or adds query parameters on `url`
///
/// Existing keys keep their position and take the new value; new keys are
/// appended in the order given. Each key is written with its first value only.
pub fn modify_url_query<K, V>(url: &str, params: impl IntoIterator<Item = (K, V)>) -> Result<String>
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    let mut parts = SplitUrl::parse(url)?;
    let mut merged = parse_query(&parts.query);

    for (key, value) in params {
        let key = key.into();
        let values = value.into().into_values();
        match merged.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => merged.push((key, values)),
        }
    }

    let mut pairs = Vec::with_capacity(merged.len());
    for (key, values) in &merged {
        let first = values
            .first()
            .ok_or_else(|| UrlError::EmptyQueryValue(key.clone()))?;
        pairs.push(format!("{}={}", key, quote(first)));
    }
    parts.query = pairs.join("&");

    let modified = parts.unsplit();
    debug!("Modified query of {}: {}", url, modified);
    Ok(modified)
}
