//! Contentful Content Delivery API client.
//!
//! Provides a sync HTTP client for the read-only Content Delivery API,
//! token-authenticated, plus the wire types for entries responses. Only
//! what the news pipeline needs is modeled; unknown fields are ignored
//! and sparse entries deserialize to defaults.

mod client;
mod error;
mod types;

pub use client::ContentfulClient;
pub use error::ContentfulError;
pub use types::{
    AssetFields, AssetFile, AssetLink, AssetResource, EntriesResponse, Entry, EntryFields,
    Includes, Sys,
};
