//! Plain text rendering of rich-text content.

use crate::model::ContentNode;

use super::content::{dispatch, display_text, Slot};
use super::visitor::DefaultVisitor;
use super::{RenderOptions, RenderStats};

/// Convert nodes to plain text.
///
/// Paragraphs are separated by a blank line; runs inside a paragraph are
/// concatenated as-is.
pub fn to_text(nodes: &[ContentNode], options: &RenderOptions) -> String {
    let mut visitor = DefaultVisitor;
    let mut stats = RenderStats::new();
    let mut blocks: Vec<String> = Vec::with_capacity(nodes.len());

    for (index, node) in nodes.iter().enumerate() {
        match dispatch(index, node, &mut visitor, &mut stats) {
            Slot::Paragraph(p) => blocks.push(
                p.content
                    .iter()
                    .map(|run| display_text(&run.value, options))
                    .collect(),
            ),
            Slot::Replaced(text) => blocks.push(text),
            Slot::Nothing => {}
        }
    }

    blocks.join("\n\n").trim().to_string()
}
