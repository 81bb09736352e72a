use crate::error::{Result, UrlError};

/// How a rule variable accepts and encodes its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    String,
    Int,
    Path,
}

impl Converter {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" | "default" => Some(Converter::String),
            "int" => Some(Converter::Int),
            "path" => Some(Converter::Path),
            _ => None,
        }
    }

    /// Validates and percent-encodes a value for use in the path
    pub fn to_path(self, param: &str, value: &str) -> Result<String> {
        let invalid = || UrlError::InvalidRouteParam {
            param: param.to_string(),
            value: value.to_string(),
        };

        match self {
            Converter::Int => {
                if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                Ok(value.to_string())
            }
            Converter::String => {
                if value.is_empty() || value.contains('/') {
                    return Err(invalid());
                }
                Ok(urlencoding::encode(value).into_owned())
            }
            Converter::Path => {
                if value.is_empty() {
                    return Err(invalid());
                }
                Ok(value
                    .split('/')
                    .map(|part| urlencoding::encode(part).into_owned())
                    .collect::<Vec<_>>()
                    .join("/"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Variable { name: String, converter: Converter },
}

/// A parsed rule such as `/superset/dashboard/<int:dashboard_id>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub rule: String,
    pub segments: Vec<Segment>,
}

impl Rule {
    pub fn parse(rule: &str) -> Result<Self> {
        let invalid = |reason: &str| UrlError::InvalidRule {
            rule: rule.to_string(),
            reason: reason.to_string(),
        };

        if !rule.starts_with('/') {
            return Err(invalid("rule must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut rest = rule;

        while let Some(open) = rest.find('<') {
            if open > 0 {
                segments.push(Segment::Static(rest[..open].to_string()));
            }
            let close = rest[open..]
                .find('>')
                .map(|i| open + i)
                .ok_or_else(|| invalid("unterminated variable"))?;
            let placeholder = &rest[open + 1..close];

            let (converter, name) = match placeholder.split_once(':') {
                Some((converter, name)) => (
                    Converter::from_name(converter)
                        .ok_or_else(|| invalid(&format!("unknown converter '{}'", converter)))?,
                    name,
                ),
                None => (Converter::String, placeholder),
            };

            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(invalid(&format!("invalid variable name '{}'", name)));
            }
            let duplicate = segments
                .iter()
                .any(|s| matches!(s, Segment::Variable { name: n, .. } if n == name));
            if duplicate {
                return Err(invalid(&format!("variable '{}' used twice", name)));
            }

            segments.push(Segment::Variable {
                name: name.to_string(),
                converter,
            });
            rest = &rest[close + 1..];
        }

        if rest.contains('>') {
            return Err(invalid("unmatched '>'"));
        }
        if !rest.is_empty() {
            segments.push(Segment::Static(rest.to_string()));
        }

        Ok(Rule {
            rule: rule.to_string(),
            segments,
        })
    }

    /// Names of the variables in the rule, in order
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable { name, .. } => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_rule() {
        let rule = Rule::parse("/superset/welcome/").unwrap();
        assert_eq!(rule.segments, vec![Segment::Static("/superset/welcome/".into())]);
    }

    #[test]
    fn test_parse_variables() {
        let rule = Rule::parse("/api/v1/<int:pk>/files/<path:name>").unwrap();
        assert_eq!(rule.variables().collect::<Vec<_>>(), vec!["pk", "name"]);
        assert_eq!(
            rule.segments[1],
            Segment::Variable { name: "pk".into(), converter: Converter::Int }
        );
    }

    #[test]
    fn test_parse_rejects_bad_rules() {
        for bad in ["no/slash", "/a/<id", "/a/<uuid:id>", "/a/<id>/<id>", "/a/<>", "/a>b"] {
            assert!(
                matches!(Rule::parse(bad), Err(UrlError::InvalidRule { .. })),
                "expected {} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_converters() {
        assert_eq!(Converter::Int.to_path("pk", "42").unwrap(), "42");
        assert!(Converter::Int.to_path("pk", "4a").is_err());
        assert_eq!(Converter::String.to_path("slug", "my board").unwrap(), "my%20board");
        assert!(Converter::String.to_path("slug", "a/b").is_err());
        assert_eq!(Converter::Path.to_path("p", "a b/c").unwrap(), "a%20b/c");
    }
}
