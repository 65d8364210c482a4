//! HTML rendering for rich text document trees.

use std::fmt::Write;

use crate::escape::escape_html;
use crate::node::{AssetIndex, Node, NodeKind};

/// Render a rich text document to a sanitized HTML fragment.
///
/// Pure function of the tree and the asset table: no I/O, no shared state,
/// and it never fails. An absent root renders as the empty string and
/// malformed nodes degrade to empty output, so one bad entry can never
/// abort a batch build.
///
/// All text content and attribute values pass through [`escape_html`];
/// the output is safe to inline into a page without further treatment.
#[must_use]
pub fn render_html(root: Option<&Node>, assets: &AssetIndex) -> String {
    let Some(root) = root else {
        return String::new();
    };
    let mut out = String::new();
    render_node(root, assets, &mut out);
    out
}

fn render_node(node: &Node, assets: &AssetIndex, out: &mut String) {
    match node.kind() {
        NodeKind::Text => render_text(node, out),
        NodeKind::Paragraph => wrap("p", node, assets, out),
        NodeKind::Heading(level) => wrap(heading_tag(level), node, assets, out),
        NodeKind::UnorderedList => wrap("ul", node, assets, out),
        NodeKind::OrderedList => wrap("ol", node, assets, out),
        NodeKind::ListItem => wrap("li", node, assets, out),
        NodeKind::Blockquote => wrap("blockquote", node, assets, out),
        NodeKind::Rule => out.push_str("<hr/>"),
        NodeKind::Hyperlink => render_hyperlink(node, assets, out),
        NodeKind::EmbeddedAsset => render_asset(node, assets, out),
        // Unrecognized containers render as their children so their text
        // survives even when the wrapper markup is unknown to us.
        NodeKind::Unknown => render_children(node, assets, out),
    }
}

fn render_children(node: &Node, assets: &AssetIndex, out: &mut String) {
    for child in &node.content {
        render_node(child, assets, out);
    }
}

fn wrap(tag: &str, node: &Node, assets: &AssetIndex, out: &mut String) {
    let _ = write!(out, "<{tag}>");
    render_children(node, assets, out);
    let _ = write!(out, "</{tag}>");
}

fn heading_tag(level: u8) -> &'static str {
    match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    }
}

fn render_text(node: &Node, out: &mut String) {
    let mut rendered = escape_html(&node.value);
    // Marks wrap in wire order, each around the result so far, so the
    // first mark lands innermost. Order and duplicates are preserved.
    for mark in &node.marks {
        rendered = match mark.kind.as_str() {
            "bold" => format!("<strong>{rendered}</strong>"),
            "italic" => format!("<em>{rendered}</em>"),
            "underline" => format!("<u>{rendered}</u>"),
            "code" => format!("<code>{rendered}</code>"),
            _ => rendered,
        };
    }
    out.push_str(&rendered);
}

fn render_hyperlink(node: &Node, assets: &AssetIndex, out: &mut String) {
    let href = match node.data.uri.as_deref() {
        Some(uri) if !uri.is_empty() => uri,
        _ => "#",
    };
    let _ = write!(
        out,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener\">",
        escape_html(href)
    );
    render_children(node, assets, out);
    out.push_str("</a>");
}

fn render_asset(node: &Node, assets: &AssetIndex, out: &mut String) {
    // Unresolvable or file-less assets render as nothing rather than as a
    // broken image tag.
    let Some(asset) = node.asset_id().and_then(|id| assets.get(id)) else {
        return;
    };
    if asset.url.is_empty() {
        return;
    }
    let _ = write!(
        out,
        "<figure><img src=\"{}\" alt=\"{}\" class=\"news-image\"/></figure>",
        asset.url,
        escape_html(asset.alt_text())
    );
}
