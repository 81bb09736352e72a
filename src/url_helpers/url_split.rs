use crate::error::{Result, UrlError};

/// A URL broken into its five generic components without normalization
///
/// Unlike `url::Url`, nothing is resolved, lower-cased (other than the scheme)
/// or defaulted, so relative references and raw netlocs survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitUrl {
    pub scheme: String,
    pub netloc: String,
    /// Whether `//` introduced an authority, even an empty one as in `file:///tmp`
    pub has_netloc: bool,
    pub path: String,
    pub query: String,
    pub fragment: String,
}

/// Characters allowed after the first letter of a scheme
fn is_scheme_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')
}

impl SplitUrl {
    /// Splits `scheme://netloc/path?query#fragment`
    ///
    /// Leading C0 controls and spaces are stripped and tab/CR/LF removed first.
    /// Fails only when the netloc has unbalanced IPv6 brackets.
    pub fn parse(input: &str) -> Result<Self> {
        let cleaned: String = input
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        let mut rest = cleaned.as_str();

        let mut scheme = String::new();
        if let Some(colon) = rest.find(':') {
            let candidate = &rest[..colon];
            let mut chars = candidate.chars();
            if chars.next().is_some_and(|c| c.is_ascii_alphabetic()) && chars.all(is_scheme_char) {
                scheme = candidate.to_ascii_lowercase();
                rest = &rest[colon + 1..];
            }
        }

        let mut netloc = String::new();
        let has_netloc = rest.starts_with("//");
        if let Some(after) = rest.strip_prefix("//") {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            netloc = after[..end].to_string();
            rest = &after[end..];

            if netloc.contains('[') != netloc.contains(']') {
                return Err(UrlError::InvalidUrl {
                    url: input.to_string(),
                    reason: "invalid IPv6 netloc",
                });
            }
        }

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, fragment.to_string()),
            None => (rest, String::new()),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path.to_string(), query.to_string()),
            None => (rest.to_string(), String::new()),
        };

        Ok(SplitUrl {
            scheme,
            netloc,
            has_netloc,
            path,
            query,
            fragment,
        })
    }

    /// Reassembles the components; empty query and fragment are omitted
    pub fn unsplit(&self) -> String {
        let mut url = String::new();

        if !self.scheme.is_empty() {
            url.push_str(&self.scheme);
            url.push(':');
        }
        if self.has_netloc || !self.netloc.is_empty() || self.path.starts_with("//") {
            url.push_str("//");
            url.push_str(&self.netloc);
            if !self.path.is_empty() && !self.path.starts_with('/') {
                url.push('/');
            }
        }
        url.push_str(&self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.fragment.is_empty() {
            url.push('#');
            url.push_str(&self.fragment);
        }

        url
    }

    /// Resolves `reference` against this URL as a base
    ///
    /// Components are combined as written: the host keeps its case and port
    /// and nothing is percent-encoded. A reference with a different scheme is
    /// returned unchanged.
    pub fn join(&self, reference: &str) -> Result<String> {
        let target = SplitUrl::parse(reference)?;

        if !target.scheme.is_empty() && target.scheme != self.scheme {
            return Ok(reference.to_string());
        }

        if target.has_netloc || !target.netloc.is_empty() {
            return Ok(SplitUrl {
                scheme: self.scheme.clone(),
                path: remove_dot_segments(&target.path),
                ..target
            }
            .unsplit());
        }

        let (path, query) = if target.path.is_empty() {
            let query = if target.query.is_empty() {
                self.query.clone()
            } else {
                target.query
            };
            (self.path.clone(), query)
        } else if target.path.starts_with('/') {
            (remove_dot_segments(&target.path), target.query)
        } else {
            (remove_dot_segments(&self.merge_path(&target.path)), target.query)
        };

        Ok(SplitUrl {
            scheme: self.scheme.clone(),
            netloc: self.netloc.clone(),
            has_netloc: self.has_netloc,
            path,
            query,
            fragment: target.fragment,
        }
        .unsplit())
    }

    /// Appends a relative path to everything up to the base's last `/`
    fn merge_path(&self, relative: &str) -> String {
        if (self.has_netloc || !self.netloc.is_empty()) && self.path.is_empty() {
            return format!("/{}", relative);
        }
        match self.path.rfind('/') {
            Some(slash) => format!("{}{}", &self.path[..=slash], relative),
            None => relative.to_string(),
        }
    }
}

/// Collapses `.` and `..` segments; `..` never climbs above the root
fn remove_dot_segments(path: &str) -> String {
    let absolute = path.starts_with('/');
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len() - 1;
    let mut output: Vec<&str> = Vec::with_capacity(segments.len());

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." => {
                if i == last {
                    output.push("");
                }
            }
            ".." => {
                if output.len() > usize::from(absolute) {
                    output.pop();
                }
                if i == last {
                    output.push("");
                }
            }
            other => output.push(other),
        }
    }

    output.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_absolute_url() {
        let split = SplitUrl::parse("HTTPS://bi.example.com:8443/a/b?x=1&y=2#top").unwrap();
        assert_eq!(split.scheme, "https");
        assert_eq!(split.netloc, "bi.example.com:8443");
        assert_eq!(split.path, "/a/b");
        assert_eq!(split.query, "x=1&y=2");
        assert_eq!(split.fragment, "top");
    }

    #[test]
    fn test_split_relative_reference() {
        let split = SplitUrl::parse("/superset/dashboard/1/?standalone=1").unwrap();
        assert!(split.scheme.is_empty());
        assert!(split.netloc.is_empty());
        assert_eq!(split.path, "/superset/dashboard/1/");
        assert_eq!(split.query, "standalone=1");
    }

    #[test]
    fn test_split_protocol_relative() {
        let split = SplitUrl::parse("//evil.com/login").unwrap();
        assert!(split.scheme.is_empty());
        assert_eq!(split.netloc, "evil.com");
        assert_eq!(split.path, "/login");
    }

    #[test]
    fn test_split_strips_leading_space_and_newlines() {
        let split = SplitUrl::parse("  http://exa\nmple.com/").unwrap();
        assert_eq!(split.scheme, "http");
        assert_eq!(split.netloc, "example.com");
    }

    #[test]
    fn test_split_rejects_unbalanced_ipv6() {
        assert!(matches!(
            SplitUrl::parse("http://[::1/path"),
            Err(UrlError::InvalidUrl { .. })
        ));
        assert!(SplitUrl::parse("http://[::1]:8080/path").is_ok());
    }

    #[test]
    fn test_non_scheme_prefix_stays_in_path() {
        let split = SplitUrl::parse("1abc:def").unwrap();
        assert!(split.scheme.is_empty());
        assert_eq!(split.path, "1abc:def");
    }

    #[test]
    fn test_unsplit_keeps_empty_authority() {
        let split = SplitUrl::parse("file:///tmp/a").unwrap();
        assert!(split.has_netloc);
        assert!(split.netloc.is_empty());
        assert_eq!(split.unsplit(), "file:///tmp/a");
    }

    #[test]
    fn test_join_keeps_host_as_written() {
        let base = SplitUrl::parse("http://Superset:80/app/").unwrap();
        assert_eq!(base.join("/x").unwrap(), "http://Superset:80/x");
        assert_eq!(base.join("/a b").unwrap(), "http://Superset:80/a b");
        assert_eq!(base.join("chart/list/").unwrap(), "http://Superset:80/app/chart/list/");
    }

    #[test]
    fn test_join_reference_forms() {
        let base = SplitUrl::parse("http://a/b/c/d;p?q").unwrap();
        assert_eq!(base.join("g").unwrap(), "http://a/b/c/g");
        assert_eq!(base.join("./g/").unwrap(), "http://a/b/c/g/");
        assert_eq!(base.join("../g").unwrap(), "http://a/b/g");
        assert_eq!(base.join("../../../g").unwrap(), "http://a/g");
        assert_eq!(base.join("..").unwrap(), "http://a/b/");
        assert_eq!(base.join("?y").unwrap(), "http://a/b/c/d;p?y");
        assert_eq!(base.join("#s").unwrap(), "http://a/b/c/d;p?q#s");
        assert_eq!(base.join("//g/x").unwrap(), "http://g/x");
        assert_eq!(base.join("https://other/x").unwrap(), "https://other/x");
    }

    #[test]
    fn test_join_onto_bare_host() {
        let base = SplitUrl::parse("http://superset:8088").unwrap();
        assert_eq!(base.join("x").unwrap(), "http://superset:8088/x");
    }

    #[test]
    fn test_unsplit_keeps_original_shape() {
        for url in [
            "https://bi.example.com/a?x=1#frag",
            "/relative/path?q=2",
            "mailto:someone@example.com",
            "http://example.com",
            "///evil.com",
        ] {
            assert_eq!(SplitUrl::parse(url).unwrap().unsplit(), url);
        }
    }
}
