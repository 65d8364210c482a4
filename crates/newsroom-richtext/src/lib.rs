//! Contentful rich text rendering.
//!
//! This crate turns the rich text document trees served by the Contentful
//! Content Delivery API into sanitized HTML fragments and plain-text
//! excerpts.
//!
//! # Architecture
//!
//! [`render_html`] and [`plain_text_excerpt`] are pure functions over a
//! [`Node`] tree plus an [`AssetIndex`] resolving embedded asset links.
//! Neither performs I/O and neither can fail: absent or malformed input
//! degrades to empty output, so a single broken entry never takes down a
//! whole site build.
//!
//! # Example
//!
//! ```
//! use newsroom_richtext::{AssetIndex, Node, render_html};
//!
//! let doc: Node = serde_json::from_str(
//!     r#"{"nodeType": "document", "content": [
//!         {"nodeType": "paragraph", "content": [
//!             {"nodeType": "text", "value": "Hello"}
//!         ]}
//!     ]}"#,
//! )?;
//! let html = render_html(Some(&doc), &AssetIndex::new());
//! assert_eq!(html, "<p>Hello</p>");
//! # Ok::<(), serde_json::Error>(())
//! ```

mod escape;
mod html;
mod node;
mod text;

pub use escape::escape_html;
pub use html::render_html;
pub use node::{Asset, AssetIndex, LinkSys, Mark, Node, NodeData, NodeKind, ResourceLink};
pub use text::plain_text_excerpt;
