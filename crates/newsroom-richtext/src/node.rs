//! Document tree model for CMS rich text.
//!
//! Mirrors the wire shape of a Contentful rich text field. Every field is
//! optional on the wire, so everything defaults to empty: a sparse or
//! malformed node deserializes instead of failing the whole entry.

use std::collections::HashMap;

use serde::Deserialize;

/// A single node in a rich text document tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Node {
    /// Type tag as sent by the CMS (e.g. `paragraph`, `heading-2`).
    #[serde(rename = "nodeType")]
    pub node_type: String,
    /// Text payload. Only meaningful on `text` nodes.
    pub value: String,
    /// Inline formatting marks. Only meaningful on `text` nodes.
    pub marks: Vec<Mark>,
    /// Child nodes, in document order.
    pub content: Vec<Node>,
    /// Per-type extra data (hyperlink URI, asset link).
    pub data: NodeData,
}

impl Node {
    /// Resolved node type for rendering dispatch.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.node_type.as_str() {
            "text" => NodeKind::Text,
            "paragraph" => NodeKind::Paragraph,
            "heading-1" => NodeKind::Heading(1),
            "heading-2" => NodeKind::Heading(2),
            "heading-3" => NodeKind::Heading(3),
            "heading-4" => NodeKind::Heading(4),
            "heading-5" => NodeKind::Heading(5),
            "heading-6" => NodeKind::Heading(6),
            "unordered-list" => NodeKind::UnorderedList,
            "ordered-list" => NodeKind::OrderedList,
            "list-item" => NodeKind::ListItem,
            "blockquote" => NodeKind::Blockquote,
            "hr" => NodeKind::Rule,
            "hyperlink" => NodeKind::Hyperlink,
            "embedded-asset-block" | "embedded-asset-inline" => NodeKind::EmbeddedAsset,
            _ => NodeKind::Unknown,
        }
    }

    /// Identifier of the linked asset, for embedded asset nodes.
    #[must_use]
    pub fn asset_id(&self) -> Option<&str> {
        self.data.target.as_ref().map(|target| target.sys.id.as_str())
    }
}

/// Resolved node type.
///
/// Heading variants carry their level. Anything outside the supported set
/// is `Unknown` and renders as its children, so new CMS node types degrade
/// to their text content instead of disappearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Text,
    Paragraph,
    Heading(u8),
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    Rule,
    Hyperlink,
    EmbeddedAsset,
    Unknown,
}

/// Inline formatting mark attached to a text node.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Mark {
    /// Mark type tag (`bold`, `italic`, `underline`, `code`).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Mark {
    #[must_use]
    pub fn new(kind: &str) -> Self {
        Self { kind: kind.to_owned() }
    }
}

/// Per-type node data.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeData {
    /// Hyperlink destination.
    pub uri: Option<String>,
    /// Link to another CMS resource, resolved through [`AssetIndex`].
    pub target: Option<ResourceLink>,
}

/// Link object pointing at another resource by identifier.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResourceLink {
    pub sys: LinkSys,
}

/// System metadata of a resource link.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LinkSys {
    pub id: String,
}

/// A referenced media object, resolved by identifier during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Asset {
    /// Absolute, scheme-prefixed URL. Empty when the asset carries no file.
    pub url: String,
    pub title: String,
    pub description: String,
}

impl Asset {
    /// Alt text for image tags: the title, falling back to the description.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        if self.title.is_empty() { &self.description } else { &self.title }
    }
}

/// Read-only asset lookup shared across a render pass.
#[derive(Debug, Clone, Default)]
pub struct AssetIndex {
    assets: HashMap<String, Asset>,
}

impl AssetIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: String, asset: Asset) {
        self.assets.insert(id, asset);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.assets.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl FromIterator<(String, Asset)> for AssetIndex {
    fn from_iter<I: IntoIterator<Item = (String, Asset)>>(iter: I) -> Self {
        Self { assets: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Node {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn deserializes_text_node() {
        let node = parse(r#"{"nodeType": "text", "value": "Hello", "marks": [{"type": "bold"}]}"#);
        assert_eq!(node.kind(), NodeKind::Text);
        assert_eq!(node.value, "Hello");
        assert_eq!(node.marks.len(), 1);
        assert_eq!(node.marks[0].kind, "bold");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let node = parse("{}");
        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.value, "");
        assert!(node.marks.is_empty());
        assert!(node.content.is_empty());
        assert!(node.data.uri.is_none());
        assert!(node.data.target.is_none());
    }

    #[test]
    fn unknown_node_type_keeps_children() {
        let node = parse(
            r#"{"nodeType": "table-cell", "content": [{"nodeType": "text", "value": "x"}]}"#,
        );
        assert_eq!(node.kind(), NodeKind::Unknown);
        assert_eq!(node.content.len(), 1);
    }

    #[test]
    fn heading_levels_map_to_kind() {
        for level in 1..=6u8 {
            let node = parse(&format!(r#"{{"nodeType": "heading-{level}"}}"#));
            assert_eq!(node.kind(), NodeKind::Heading(level));
        }
    }

    #[test]
    fn embedded_asset_exposes_target_id() {
        let node = parse(
            r#"{"nodeType": "embedded-asset-block", "data": {"target": {"sys": {"id": "img1"}}}}"#,
        );
        assert_eq!(node.kind(), NodeKind::EmbeddedAsset);
        assert_eq!(node.asset_id(), Some("img1"));
    }

    #[test]
    fn inline_asset_is_same_kind_as_block() {
        let node = parse(r#"{"nodeType": "embedded-asset-inline"}"#);
        assert_eq!(node.kind(), NodeKind::EmbeddedAsset);
        assert_eq!(node.asset_id(), None);
    }

    #[test]
    fn ignores_unknown_wire_fields() {
        let node = parse(r#"{"nodeType": "paragraph", "data": {"extra": 1}, "unknown": true}"#);
        assert_eq!(node.kind(), NodeKind::Paragraph);
    }

    #[test]
    fn alt_text_prefers_title() {
        let asset = Asset {
            url: "https://example.com/a.png".to_owned(),
            title: "Title".to_owned(),
            description: "Description".to_owned(),
        };
        assert_eq!(asset.alt_text(), "Title");

        let untitled = Asset { title: String::new(), ..asset };
        assert_eq!(untitled.alt_text(), "Description");
    }

    #[test]
    fn asset_index_lookup() {
        let mut index = AssetIndex::new();
        assert!(index.is_empty());
        index.insert("a".to_owned(), Asset::default());
        assert_eq!(index.len(), 1);
        assert!(index.get("a").is_some());
        assert!(index.get("b").is_none());
    }
}
