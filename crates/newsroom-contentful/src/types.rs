//! Contentful Content Delivery API wire types.
//!
//! Every editorial field is optional with a default: entries are authored
//! by hand and frequently sparse, and one half-filled entry must not fail
//! deserialization of the whole feed.

use newsroom_richtext::{Asset, AssetIndex, Node};
use serde::Deserialize;

/// Response to an entries query.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntriesResponse {
    /// Matching entries, in the requested order.
    pub items: Vec<Entry>,
    /// Linked resources shipped alongside the entries.
    pub includes: Includes,
}

impl EntriesResponse {
    /// Build the asset lookup table for rendering this response.
    #[must_use]
    pub fn asset_index(&self) -> AssetIndex {
        self.includes
            .assets
            .iter()
            .map(|asset| (asset.sys.id.clone(), asset.resolve()))
            .collect()
    }
}

/// Resources resolved by the `include` query parameter.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Includes {
    #[serde(rename = "Asset")]
    pub assets: Vec<AssetResource>,
}

/// A news entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Entry {
    /// System metadata.
    pub sys: Sys,
    /// Editorial fields.
    pub fields: EntryFields,
}

/// System metadata of an entry or asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sys {
    /// Resource identifier, unique within the space.
    pub id: String,
}

/// Editorial fields of a news entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryFields {
    /// Headline.
    pub title: Option<String>,
    /// Editor-chosen URL slug.
    pub slug: Option<String>,
    /// Publication date, ISO 8601.
    pub date: Option<String>,
    /// External source URL.
    pub link: Option<String>,
    /// Link to the lead image asset.
    pub image: Option<AssetLink>,
    /// Rich text body.
    pub body: Option<Node>,
}

/// Link to an asset, resolved through `includes.Asset`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetLink {
    pub sys: Sys,
}

/// An asset as shipped in `includes.Asset`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetResource {
    pub sys: Sys,
    pub fields: AssetFields,
}

impl AssetResource {
    /// Resolve into the render-ready asset form.
    fn resolve(&self) -> Asset {
        Asset {
            url: self
                .fields
                .file
                .as_ref()
                .and_then(|file| file.url.as_deref())
                .map(scheme_prefixed)
                .unwrap_or_default(),
            title: self.fields.title.clone().unwrap_or_default(),
            description: self.fields.description.clone().unwrap_or_default(),
        }
    }
}

/// Editorial fields of an asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file: Option<AssetFile>,
}

/// The binary behind an asset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetFile {
    /// CDN URL, usually protocol-relative.
    pub url: Option<String>,
}

/// The CDN serves protocol-relative URLs (`//images...`). Prefix the
/// scheme so generated pages work from `file://` and plain-HTTP contexts.
fn scheme_prefixed(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_owned()
    }
}
