//! Rendering module for turning rich-text content into output formats.

mod content;
pub mod element;
mod json;
mod markdown;
mod options;
mod result;
mod text;
pub mod visitor;

pub use content::{
    render_content, to_html, to_html_with_stats, ContentRenderer, CONTAINER_TAG, PARAGRAPH_TAG,
    TEXT_RUN_TAG,
};
pub use element::{escape_html, Element, Node};
pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use text::to_text;
pub use visitor::{CompositeVisitor, ContentVisitor, DefaultVisitor, VisitorAction};
