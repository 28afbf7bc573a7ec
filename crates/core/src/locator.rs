//! Object storage locators
//!
//! A [`Locator`] is an immutable, path-like view of a URI of the form
//! `scheme://bucket/key[?query][#fragment]`. The key is split on `/` into
//! segments, keeping empty pieces, so `/a/b` becomes `["", "a", "b"]`.
//! The leading empty segment stands for the root of the bucket.
//!
//! Every transformation returns a new locator whose serialized form equals
//! the original except for the edited segments.

use std::fmt;
use std::ops::Div;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::segment::{self, DELIMITER, PATH_TERMINATORS};
use crate::uri;

/// A parsed object storage URI with path-like operations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    scheme: String,
    authority: String,
    /// Never empty; `[""]` is the bucket root
    segments: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Locator {
    /// Parse a URI into a locator
    ///
    /// Fails with [`Error::MalformedUri`] when the input has no scheme,
    /// no `//` authority marker or an empty bucket.
    pub fn parse(uri: &str) -> Result<Self> {
        let parts = uri::split(uri)?;
        let locator = Self {
            scheme: parts.scheme.to_string(),
            authority: parts.authority.to_string(),
            segments: parts.path.split(DELIMITER).map(str::to_string).collect(),
            query: parts.query.map(str::to_string),
            fragment: parts.fragment.map(str::to_string),
        };
        tracing::trace!(uri, segments = locator.segments.len(), "parsed locator");
        Ok(locator)
    }

    /// Create a locator from a scheme, bucket and object key
    ///
    /// An empty key gives the bucket root. The key is split on `/`; a key
    /// containing `?` or `#` is [`Error::InvalidName`] since it would not
    /// survive serialization.
    pub fn new(
        scheme: impl Into<String>,
        bucket: impl Into<String>,
        key: impl AsRef<str>,
    ) -> Result<Self> {
        let scheme = scheme.into();
        let bucket = bucket.into();
        uri::validate_scheme(&scheme)
            .map_err(|reason| Error::MalformedUri(format!("'{scheme}': {reason}")))?;
        if bucket.is_empty()
            || bucket.contains(DELIMITER)
            || bucket.contains(PATH_TERMINATORS)
        {
            return Err(Error::MalformedUri(format!("Invalid bucket '{bucket}'")));
        }

        let key = key.as_ref();
        if key.contains(PATH_TERMINATORS) {
            return Err(Error::InvalidName(key.to_string()));
        }
        let mut segments = vec![String::new()];
        if !key.is_empty() {
            segments.extend(key.split(DELIMITER).map(str::to_string));
        }

        Ok(Self {
            scheme,
            authority: bucket,
            segments,
            query: None,
            fragment: None,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The authority component, verbatim
    pub fn authority(&self) -> &str {
        &self.authority
    }

    /// The bucket this locator points into (same as [`Locator::authority`])
    pub fn bucket(&self) -> &str {
        &self.authority
    }

    /// Object key: the path without its root placeholder
    pub fn key(&self) -> String {
        self.segments[1..].join("/")
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Ordered view of all path segments, including the root placeholder
    pub fn parts(&self) -> &[String] {
        &self.segments
    }

    /// True when only the root placeholder is left
    pub fn is_root(&self) -> bool {
        self.segments.len() == 1
    }

    /// The final path segment, or `""` at the root
    pub fn name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// The final segment's last suffix, if any
    pub fn suffix(&self) -> &str {
        segment::suffix(self.name())
    }

    /// All suffixes of the final segment
    pub fn suffixes(&self) -> Vec<&str> {
        segment::suffixes(self.name())
    }

    /// The final segment without its last suffix
    pub fn stem(&self) -> &str {
        segment::stem(self.name())
    }

    /// Return a new locator with the final segment replaced by `name`
    pub fn with_name(&self, name: &str) -> Result<Self> {
        if self.name().is_empty() {
            return Err(Error::EmptyName(self.to_string()));
        }
        segment::validate_name(name)?;
        Ok(self.replace_name(name.to_string()))
    }

    /// Return a new locator with the final segment's suffix changed
    ///
    /// Adds `suffix` when there is none; an empty `suffix` removes it.
    pub fn with_suffix(&self, suffix: &str) -> Result<Self> {
        segment::validate_suffix(suffix)?;
        let name = self.name();
        if name.is_empty() {
            return Err(Error::EmptyName(self.to_string()));
        }
        Ok(self.replace_name(segment::replace_suffix(name, suffix)))
    }

    /// Append `key` as a single new trailing segment
    pub fn child(&self, key: impl AsRef<str>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.as_ref().to_string());
        self.with_segments(segments)
    }

    /// Append each key, split on `/` with empty pieces skipped
    pub fn joinpath<I, S>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = self.segments.clone();
        for key in keys {
            segments.extend(
                key.as_ref()
                    .split(DELIMITER)
                    .filter(|piece| !piece.is_empty())
                    .map(str::to_string),
            );
        }
        self.with_segments(segments)
    }

    /// The logical parent; the root is its own parent
    pub fn parent(&self) -> Self {
        if self.is_root() {
            return self.clone();
        }
        let segments = self.segments[..self.segments.len() - 1].to_vec();
        self.with_segments(segments)
    }

    /// Every ancestor, nearest first, ending at the root
    pub fn parents(&self) -> Vec<Self> {
        (1..self.segments.len())
            .rev()
            .map(|len| self.with_segments(self.segments[..len].to_vec()))
            .collect()
    }

    /// The key of this locator relative to `base`
    ///
    /// A trailing empty segment on `base` is treated as a directory marker,
    /// so `s3://b/dir/` and `s3://b/dir` are equivalent bases.
    pub fn relative_to(&self, base: &Locator) -> Result<String> {
        let not_relative = || Error::NotRelative(format!("'{self}' is not under '{base}'"));

        if self.scheme != base.scheme || self.authority != base.authority {
            return Err(not_relative());
        }

        let mut prefix = base.segments.as_slice();
        if prefix.len() > 1 && prefix.last().is_some_and(String::is_empty) {
            prefix = &prefix[..prefix.len() - 1];
        }

        match self.segments.strip_prefix(prefix) {
            Some(rest) => Ok(rest.join("/")),
            None => Err(not_relative()),
        }
    }

    /// Scheme and bucket, plus the root `/` when the path has one
    pub fn anchor(&self) -> String {
        if self.is_root() {
            format!("{}://{}", self.scheme, self.authority)
        } else {
            format!("{}://{}/", self.scheme, self.authority)
        }
    }

    /// Convert into a [`url::Url`]
    pub fn to_url(&self) -> Result<url::Url> {
        Ok(url::Url::parse(&self.to_string())?)
    }

    fn replace_name(&self, name: String) -> Self {
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            *last = name;
        }
        self.with_segments(segments)
    }

    /// Every transformation ends here: only the segments change
    fn with_segments(&self, segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            scheme: self.scheme.clone(),
            authority: self.authority.clone(),
            segments,
            query: self.query.clone(),
            fragment: self.fragment.clone(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        uri::assemble(
            f,
            &self.scheme,
            &self.authority,
            &self.segments,
            self.query.as_deref(),
            self.fragment.as_deref(),
        )
    }
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&url::Url> for Locator {
    type Error = Error;

    fn try_from(url: &url::Url) -> Result<Self> {
        Self::parse(url.as_str())
    }
}

impl<S: AsRef<str>> Div<S> for &Locator {
    type Output = Locator;

    fn div(self, key: S) -> Locator {
        self.child(key)
    }
}

impl<S: AsRef<str>> Div<S> for Locator {
    type Output = Locator;

    fn div(self, key: S) -> Locator {
        self.child(key)
    }
}

impl Serialize for Locator {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
