//! REST resource path construction.

/// Join the present, non-empty path segments with `/`, preserving order.
///
/// Absent (`None`) and empty segments are skipped so callers can pass
/// optional path components without special-casing:
///
/// ```
/// use confluence_client::restful_uri;
///
/// assert_eq!(
///     restful_uri(&[Some("content"), Some("42"), Some("child"), None]),
///     "content/42/child"
/// );
/// ```
pub fn restful_uri(segments: &[Option<&str>]) -> String {
    segments
        .iter()
        .filter_map(|s| s.filter(|s| !s.is_empty()))
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_all_present_segments() {
        assert_eq!(
            restful_uri(&[Some("contentbody"), Some("convert"), Some("view")]),
            "contentbody/convert/view"
        );
    }

    #[test]
    fn test_skips_absent_segments() {
        assert_eq!(
            restful_uri(&[Some("content"), Some("42"), Some("child"), None]),
            "content/42/child"
        );
        assert_eq!(
            restful_uri(&[Some("content"), None, Some("child")]),
            "content/child"
        );
    }

    #[test]
    fn test_skips_empty_segments() {
        assert_eq!(restful_uri(&[Some("content"), Some(""), Some("7")]), "content/7");
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(restful_uri(&[Some("content")]), "content");
    }

    #[test]
    fn test_all_absent() {
        assert_eq!(restful_uri(&[None, None]), "");
        assert_eq!(restful_uri(&[]), "");
    }
}
