//! URI splitting and assembly
//!
//! Splits `scheme://authority/path[?query][#fragment]` into borrowed
//! components without normalizing anything, so that [`assemble`] is an
//! exact inverse of [`split`].

use crate::error::{Error, Result};

/// Borrowed components of a URI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UriParts<'a> {
    pub scheme: &'a str,
    pub authority: &'a str,
    /// Empty or starting with `/`
    pub path: &'a str,
    /// Text after `?`, `None` when there is no `?`
    pub query: Option<&'a str>,
    /// Text after `#`, `None` when there is no `#`
    pub fragment: Option<&'a str>,
}

/// Split a URI into its components
pub(crate) fn split(uri: &str) -> Result<UriParts<'_>> {
    if uri.is_empty() {
        return Err(Error::MalformedUri("URI cannot be empty".into()));
    }

    let (rest, fragment) = match uri.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (uri, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((rest, query)) => (rest, Some(query)),
        None => (rest, None),
    };

    let (scheme, hier) = rest
        .split_once(':')
        .ok_or_else(|| Error::MalformedUri(format!("'{uri}' has no scheme")))?;
    validate_scheme(scheme).map_err(|reason| Error::MalformedUri(format!("'{uri}': {reason}")))?;

    let hier = hier
        .strip_prefix("//")
        .ok_or_else(|| Error::MalformedUri(format!("'{uri}' has no authority")))?;

    let (authority, path) = match hier.find('/') {
        Some(pos) => hier.split_at(pos),
        None => (hier, ""),
    };
    if authority.is_empty() {
        return Err(Error::MalformedUri(format!("'{uri}' has an empty bucket")));
    }

    Ok(UriParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Check a scheme against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn validate_scheme(scheme: &str) -> std::result::Result<(), &'static str> {
    let mut chars = scheme.chars();
    match chars.next() {
        None => Err("scheme cannot be empty"),
        Some(c) if !c.is_ascii_alphabetic() => Err("scheme must start with a letter"),
        Some(_) => {
            if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
                Ok(())
            } else {
                Err("scheme contains an invalid character")
            }
        }
    }
}

/// Write the components back out in URI order
pub(crate) fn assemble(
    f: &mut impl std::fmt::Write,
    scheme: &str,
    authority: &str,
    segments: &[String],
    query: Option<&str>,
    fragment: Option<&str>,
) -> std::fmt::Result {
    write!(f, "{scheme}://{authority}")?;
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            f.write_char('/')?;
        }
        f.write_str(segment)?;
    }
    if let Some(query) = query {
        write!(f, "?{query}")?;
    }
    if let Some(fragment) = fragment {
        write!(f, "#{fragment}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_full() {
        let parts = split("s3://test/a/b.txt?x=1#f").unwrap();
        assert_eq!(parts.scheme, "s3");
        assert_eq!(parts.authority, "test");
        assert_eq!(parts.path, "/a/b.txt");
        assert_eq!(parts.query, Some("x=1"));
        assert_eq!(parts.fragment, Some("f"));
    }

    #[test]
    fn test_split_bucket_only() {
        let parts = split("s3://bucket").unwrap();
        assert_eq!(parts.authority, "bucket");
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, None);
    }

    #[test]
    fn test_split_empty_query_kept() {
        let parts = split("s3://bucket/k?#").unwrap();
        assert_eq!(parts.path, "/k");
        assert_eq!(parts.query, Some(""));
        assert_eq!(parts.fragment, Some(""));
    }

    #[test]
    fn test_split_question_mark_in_fragment() {
        let parts = split("s3://bucket/k#a?b").unwrap();
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("a?b"));
    }

    #[test]
    fn test_split_rejects_malformed() {
        assert!(split("").is_err());
        assert!(split("bucket/key").is_err());
        assert!(split("s3:bucket/key").is_err());
        assert!(split("s3:///key").is_err());
        assert!(split("3s://bucket/key").is_err());
        assert!(split("s_3://bucket/key").is_err());
    }

    #[test]
    fn test_validate_scheme() {
        assert!(validate_scheme("s3").is_ok());
        assert!(validate_scheme("s3a").is_ok());
        assert!(validate_scheme("git+ssh").is_ok());
        assert!(validate_scheme("").is_err());
        assert!(validate_scheme("1s").is_err());
    }

    #[test]
    fn test_assemble() {
        let mut out = String::new();
        let segments = vec![String::new(), "a".to_string(), "b".to_string()];
        assemble(&mut out, "s3", "test", &segments, Some("x=1"), None).unwrap();
        assert_eq!(out, "s3://test/a/b?x=1");
    }
}
