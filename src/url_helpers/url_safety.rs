use tracing::{debug, warn};
use unicode_general_category::{get_general_category, GeneralCategory};

use super::url_split::SplitUrl;
use crate::context::RequestContext;

/// True for the "Other" categories: control, format, surrogate, private use, unassigned
fn is_other_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
    )
}

/// Checks that a redirect target stays on the host serving the current request
///
/// Only absolute URLs whose scheme and netloc equal those of the request's
/// host URL pass. Anything that fails to split is treated as unsafe.
pub fn is_safe_url(ctx: &RequestContext, url: &str) -> bool {
    if url.starts_with("///") {
        warn!("Rejected triple-slash redirect target: {}", url);
        return false;
    }

    let (ref_url, test_url) = match (SplitUrl::parse(ctx.host_url()), SplitUrl::parse(url)) {
        (Ok(ref_url), Ok(test_url)) => (ref_url, test_url),
        _ => {
            warn!("Rejected unparseable redirect target: {}", url);
            return false;
        }
    };

    match url.chars().next() {
        None => return false,
        Some(first) if is_other_category(first) => {
            warn!("Rejected redirect target starting with control character: {:?}", url);
            return false;
        }
        Some(_) => {}
    }

    if test_url.scheme != ref_url.scheme || test_url.netloc != ref_url.netloc {
        debug!(
            "Redirect target {} does not match host {}",
            url,
            ctx.host_url()
        );
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RequestContext {
        RequestContext::new("https://bi.example.com/")
    }

    #[test]
    fn test_same_host_is_safe() {
        assert!(is_safe_url(&ctx(), "https://bi.example.com/superset/welcome/"));
        assert!(is_safe_url(&ctx(), "https://bi.example.com"));
        assert!(is_safe_url(&ctx(), "HTTPS://bi.example.com/?next=x"));
    }

    #[test]
    fn test_other_host_or_scheme_is_unsafe() {
        assert!(!is_safe_url(&ctx(), "https://evil.com/"));
        assert!(!is_safe_url(&ctx(), "http://bi.example.com/"));
        assert!(!is_safe_url(&ctx(), "https://bi.example.com:444/"));
        assert!(!is_safe_url(&ctx(), "https://bi.example.com.evil.com/"));
    }

    #[test]
    fn test_triple_slash_is_unsafe() {
        assert!(!is_safe_url(&ctx(), "///evil.com"));
    }

    #[test]
    fn test_relative_and_protocol_relative_are_unsafe() {
        assert!(!is_safe_url(&ctx(), "/superset/welcome/"));
        assert!(!is_safe_url(&ctx(), "//bi.example.com/"));
    }

    #[test]
    fn test_leading_control_or_format_character_is_unsafe() {
        assert!(!is_safe_url(&ctx(), "\x01https://bi.example.com/"));
        assert!(!is_safe_url(&ctx(), "\u{200b}https://bi.example.com/"));
        assert!(!is_safe_url(&ctx(), "\u{202e}https://bi.example.com/"));
    }

    #[test]
    fn test_unbalanced_ipv6_is_unsafe() {
        assert!(!is_safe_url(&ctx(), "https://[::1/"));
    }

    #[test]
    fn test_empty_is_unsafe() {
        assert!(!is_safe_url(&ctx(), ""));
    }
}
