//! s3path-core: path-like locators for object storage URIs
//!
//! This crate provides:
//! - [`Locator`], an immutable value parsed from `scheme://bucket/key` URIs
//! - Segment algebra: name, stem, suffix and suffixes of a key segment
//! - Path-style transformations that keep scheme, bucket, query and fragment intact
//! - Configuration management for the s3path CLI
//!
//! Nothing here talks to an object store; keys only look hierarchical
//! because of the `/` delimiter.

pub mod config;
pub mod error;
pub mod locator;
pub mod segment;
mod uri;

pub use config::{Config, ConfigManager};
pub use error::{Error, Result};
pub use locator::Locator;
