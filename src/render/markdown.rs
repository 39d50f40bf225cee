//! Markdown rendering of rich-text content.

use crate::model::{ContentNode, Paragraph};

use super::content::{dispatch, display_text, Slot};
use super::visitor::{ContentVisitor, DefaultVisitor};
use super::{RenderOptions, RenderResult, RenderStats};

/// Convert nodes to Markdown.
pub fn to_markdown(nodes: &[ContentNode], options: &RenderOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(nodes)
}

/// Convert nodes to Markdown with statistics.
pub fn to_markdown_with_stats(nodes: &[ContentNode], options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    MarkdownRenderer::new(options).render_with_stats(nodes)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
    visitor: Box<dyn ContentVisitor>,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
            visitor: Box::new(DefaultVisitor),
        }
    }

    /// Use a visitor to customize output.
    pub fn with_visitor<V: ContentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitor = Box::new(visitor);
        self
    }

    /// Render nodes to Markdown.
    pub fn render(mut self, nodes: &[ContentNode]) -> String {
        self.render_internal(nodes)
    }

    /// Render nodes to Markdown with statistics.
    pub fn render_with_stats(mut self, nodes: &[ContentNode]) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render_internal(nodes);
        RenderResult::new(content, self.stats)
    }

    fn render_internal(&mut self, nodes: &[ContentNode]) -> String {
        let mut output = String::new();
        for (index, node) in nodes.iter().enumerate() {
            match dispatch(index, node, self.visitor.as_mut(), &mut self.stats) {
                Slot::Paragraph(p) => self.render_paragraph(&mut output, p),
                Slot::Replaced(text) => {
                    output.push_str(&text);
                    output.push_str("\n\n");
                }
                Slot::Nothing => {}
            }
        }
        output.trim().to_string()
    }

    fn render_paragraph(&mut self, output: &mut String, para: &Paragraph) {
        let mut line = String::new();
        for run in &para.content {
            let text = display_text(&run.value, &self.options);
            if self.options.collect_stats {
                self.stats.count_text(&text);
            }
            if self.options.escape_special_chars {
                line.push_str(&escape_markdown(&text));
            } else {
                line.push_str(&text);
            }
        }
        if line.trim().is_empty() {
            return;
        }
        output.push_str(line.trim_end());
        output.push_str("\n\n");
    }
}

/// Escape characters that would otherwise start Markdown formatting.
fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
