//! Plain-text excerpts for metadata contexts.

use crate::escape::escape_html;
use crate::node::{Node, NodeKind};

/// Derive a length-bounded plain-text excerpt from a rich text document.
///
/// Walks the tree depth-first, concatenating raw text values in document
/// order (marks and structure are ignored) and stopping the descent once
/// `max_chars` characters have accumulated. The result is trimmed,
/// truncated to at most `max_chars` characters and escaped for use in an
/// HTML attribute.
///
/// Truncation counts characters, never bytes, so multi-byte text is always
/// cut on a character boundary. Escaping runs after truncation; entity
/// expansion may push the final string past `max_chars`.
#[must_use]
pub fn plain_text_excerpt(root: Option<&Node>, max_chars: usize) -> String {
    let mut buf = String::new();
    if let Some(root) = root {
        let mut seen = 0;
        collect_text(root, max_chars, &mut buf, &mut seen);
    }
    let trimmed = buf.trim();
    let cut = match trimmed.char_indices().nth(max_chars) {
        Some((boundary, _)) => &trimmed[..boundary],
        None => trimmed,
    };
    escape_html(cut)
}

fn collect_text(node: &Node, max_chars: usize, buf: &mut String, seen: &mut usize) {
    if *seen >= max_chars {
        return;
    }
    if node.kind() == NodeKind::Text {
        *seen += node.value.chars().count();
        buf.push_str(&node.value);
    }
    for child in &node.content {
        collect_text(child, max_chars, buf, seen);
    }
}
