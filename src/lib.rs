//! # folio
//!
//! Rich-text content rendering and static site generation for a personal
//! portfolio.
//!
//! Content is authored as sequences of typed nodes (`{"type": "paragraph",
//! "content": [{"type": "text", "value": "..."}]}`). The renderer maps each
//! node to one output slot: paragraphs become blocks of text runs, node types
//! without a renderer are skipped silently.
//!
//! ## Quick Start
//!
//! ```
//! use folio::{render_content, ContentNode};
//!
//! let nodes = vec![ContentNode::paragraph("Hola")];
//! let html = render_content(&nodes, "prose").to_html();
//! assert_eq!(html, r#"<div class="prose"><p><span>Hola</span></p></div>"#);
//! ```
//!
//! ## Features
//!
//! - **Rich-text renderer**: HTML element tree, plain text, Markdown, JSON
//! - **Visitors**: skip or replace nodes while rendering
//! - **Site generator**: home, about, portfolio and contact pages
//! - **Contact form**: validation and submit-status handling behind a relay trait
//! - **Theme**: light/dark resolution with stored preference

pub mod contact;
pub mod data;
pub mod error;
pub mod model;
pub mod render;
pub mod site;
pub mod theme;

// Re-export commonly used types
pub use contact::{ContactForm, ContactRelay, ContactSession, SubmitOutcome, SubmitStatus};
pub use error::{Error, Result};
pub use model::{ContentNode, Paragraph, RichText, SiteData, TextNode, UnsupportedNode};
pub use render::{render_content, Element, JsonFormat, Node, RenderOptions, RenderStats};
pub use site::{build_site, write_site, BuildOptions, SitePage, WriteSummary};
pub use theme::{Theme, ThemeState};

use std::path::Path;

/// Parse a JSON array of content nodes.
///
/// # Example
///
/// ```
/// let nodes = folio::parse_nodes(r#"[{"type":"image"}]"#).unwrap();
/// assert_eq!(nodes.len(), 1);
/// assert!(!nodes[0].is_paragraph());
/// ```
pub fn parse_nodes(json: &str) -> Result<Vec<ContentNode>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of content nodes from a file.
///
/// A file holding a rich-text object (`{"nodes": [...]}`) is accepted too.
pub fn read_nodes<P: AsRef<Path>>(path: P) -> Result<Vec<ContentNode>> {
    let json = std::fs::read_to_string(path)?;
    let trimmed = json.trim_start();
    if trimmed.starts_with('{') {
        let rich: RichText = serde_json::from_str(trimmed)?;
        Ok(rich.nodes)
    } else {
        parse_nodes(trimmed)
    }
}

/// Render content nodes to HTML.
///
/// # Example
///
/// ```
/// use folio::{to_html, ContentNode, RenderOptions};
///
/// let nodes = vec![ContentNode::paragraph_runs(["A", "B"])];
/// let html = to_html(&nodes, &RenderOptions::default());
/// assert_eq!(html, "<div><p><span>A</span><span>B</span></p></div>");
/// ```
pub fn to_html(nodes: &[ContentNode], options: &RenderOptions) -> String {
    render::to_html(nodes, options)
}

/// Render content nodes to plain text.
pub fn to_text(nodes: &[ContentNode], options: &RenderOptions) -> String {
    render::to_text(nodes, options)
}

/// Render content nodes to Markdown.
pub fn to_markdown(nodes: &[ContentNode], options: &RenderOptions) -> String {
    render::to_markdown(nodes, options)
}

/// Build the site from a content file (or the bundled content) and write it.
///
/// # Example
///
/// ```no_run
/// use folio::{generate_site, BuildOptions};
///
/// let options = BuildOptions::new().with_output_dir("public");
/// let summary = generate_site(None::<&str>, &options).unwrap();
/// println!("{} files", summary.files_written);
/// ```
pub fn generate_site<P: AsRef<Path>>(
    content: Option<P>,
    options: &BuildOptions,
) -> Result<WriteSummary> {
    let site = data::load_or_builtin(content)?;
    let pages = build_site(&site, options);
    write_site(&pages, options)
}
