//! HTML rendering of rich-text content.
//!
//! Every input node gets exactly one slot in the output container:
//! paragraphs become `<p>` blocks of `<span>` runs, nodes without a renderer
//! become [`Node::Empty`]. Nothing here can fail.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::model::{ContentNode, Paragraph};

use super::element::{Element, Node};
use super::visitor::{ContentVisitor, DefaultVisitor, VisitorAction};
use super::{RenderOptions, RenderResult, RenderStats};

/// Tag of the rendered container.
pub const CONTAINER_TAG: &str = "div";
/// Tag of a rendered paragraph.
pub const PARAGRAPH_TAG: &str = "p";
/// Tag of a rendered text run.
pub const TEXT_RUN_TAG: &str = "span";

/// Render nodes into a container carrying `class`.
pub fn render_content(nodes: &[ContentNode], class: &str) -> Element {
    let options = RenderOptions::new().with_class(class);
    ContentRenderer::new(options).render(nodes)
}

/// Render nodes to an HTML string.
pub fn to_html(nodes: &[ContentNode], options: &RenderOptions) -> String {
    ContentRenderer::new(options.clone()).render(nodes).to_html()
}

/// Render nodes to an HTML string with statistics.
pub fn to_html_with_stats(nodes: &[ContentNode], options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    ContentRenderer::new(options).render_with_stats(nodes)
}

/// What a single node turns into once the visitor has had its say.
pub(crate) enum Slot<'a> {
    /// Render the paragraph normally
    Paragraph(&'a Paragraph),
    /// Emit visitor-provided output
    Replaced(String),
    /// Emit nothing
    Nothing,
}

/// Resolve one node against the visitor, updating `stats`.
pub(crate) fn dispatch<'a>(
    index: usize,
    node: &'a ContentNode,
    visitor: &mut dyn ContentVisitor,
    stats: &mut RenderStats,
) -> Slot<'a> {
    stats.node_count += 1;
    let action = match node {
        ContentNode::Paragraph(p) => visitor.visit_paragraph(index, p),
        ContentNode::Unsupported(u) => visitor.visit_unsupported(index, u),
    };

    match (node, action) {
        (_, VisitorAction::Replace(output)) => {
            stats.replaced_count += 1;
            Slot::Replaced(output)
        }
        (ContentNode::Paragraph(p), VisitorAction::Continue) => {
            stats.paragraph_count += 1;
            stats.text_run_count += p.content.len() as u32;
            Slot::Paragraph(p)
        }
        (ContentNode::Paragraph(_), VisitorAction::Skip) => {
            stats.skipped_count += 1;
            Slot::Nothing
        }
        (ContentNode::Unsupported(u), _) => {
            log::debug!("Skipping unsupported content node '{}' at {}", u.kind, index);
            stats.skipped_count += 1;
            Slot::Nothing
        }
    }
}

/// Apply the text normalization selected in `options`.
pub(crate) fn display_text<'a>(value: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.normalize_unicode && !value.is_ascii() {
        Cow::Owned(value.nfc().collect())
    } else {
        Cow::Borrowed(value)
    }
}

/// HTML content renderer.
pub struct ContentRenderer {
    options: RenderOptions,
    stats: RenderStats,
    visitor: Box<dyn ContentVisitor>,
}

impl ContentRenderer {
    /// Create a new renderer.
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

    /// Render nodes into the container element.
    pub fn render(mut self, nodes: &[ContentNode]) -> Element {
        self.render_internal(nodes)
    }

    /// Render nodes to HTML with statistics.
    pub fn render_with_stats(mut self, nodes: &[ContentNode]) -> RenderResult {
        self.options.collect_stats = true;
        let html = self.render_internal(nodes).to_html();
        RenderResult::new(html, self.stats)
    }

    fn render_internal(&mut self, nodes: &[ContentNode]) -> Element {
        let children: Vec<Node> = nodes
            .iter()
            .enumerate()
            .map(|(index, node)| self.render_node(index, node))
            .collect();

        if self.options.collect_stats && self.stats.skipped_count > 0 {
            log::warn!(
                "{} of {} content nodes rendered nothing",
                self.stats.skipped_count,
                self.stats.node_count
            );
        }

        Element::new(CONTAINER_TAG)
            .class(&self.options.class)
            .children(children)
    }

    fn render_node(&mut self, index: usize, node: &ContentNode) -> Node {
        match dispatch(index, node, self.visitor.as_mut(), &mut self.stats) {
            Slot::Paragraph(p) => self.render_paragraph(index, p).into(),
            Slot::Replaced(html) => Node::raw(html),
            Slot::Nothing => Node::Empty,
        }
    }

    fn render_paragraph(&mut self, index: usize, para: &Paragraph) -> Element {
        let runs = para.content.iter().enumerate().map(|(i, run)| {
            let text = display_text(&run.value, &self.options);
            if self.options.collect_stats {
                self.stats.count_text(&text);
            }
            Element::new(TEXT_RUN_TAG).key(i).text(text.into_owned())
        });
        let runs: Vec<Element> = runs.collect();
        Element::new(PARAGRAPH_TAG).key(index).children(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UnsupportedNode;
    use crate::render::visitor::{SkipEmptyParagraphsVisitor, UnsupportedMarkerVisitor};

    fn paragraphs(el: &Element) -> Vec<&Element> {
        el.child_elements().collect()
    }

    #[test]
    fn test_hola() {
        let nodes = vec![ContentNode::paragraph("Hola")];
        let el = render_content(&nodes, "");
        let blocks = paragraphs(&el);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].tag, "p");
        let spans: Vec<&Element> = blocks[0].child_elements().collect();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].tag, "span");
        assert_eq!(Node::from(spans[0].clone()).text_content(), "Hola");
    }

    #[test]
    fn test_one_slot_per_node() {
        let nodes = vec![
            ContentNode::paragraph("a"),
            ContentNode::unsupported("image"),
            ContentNode::paragraph("b"),
        ];
        let el = render_content(&nodes, "prose");
        assert_eq!(el.children.len(), 3);
        assert!(el.children[1].is_empty());
        assert_eq!(paragraphs(&el).len(), 2);
        assert_eq!(el.get_attr("class"), Some("prose"));
    }

    #[test]
    fn test_keys_follow_positions() {
        let nodes = vec![
            ContentNode::unsupported("image"),
            ContentNode::paragraph_runs(["x", "y"]),
        ];
        let el = render_content(&nodes, "");
        let p = paragraphs(&el)[0];
        assert_eq!(p.key, Some(1));
        let keys: Vec<Option<usize>> = p.child_elements().map(|s| s.key).collect();
        assert_eq!(keys, vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_html_output() {
        let nodes = vec![ContentNode::paragraph_runs(["A", "B"])];
        let html = to_html(&nodes, &RenderOptions::new().with_class("text-lg"));
        assert_eq!(
            html,
            r#"<div class="text-lg"><p><span>A</span><span>B</span></p></div>"#
        );
    }

    #[test]
    fn test_text_is_escaped() {
        let nodes = vec![ContentNode::paragraph("<script>alert(1)</script>")];
        let html = to_html(&nodes, &RenderOptions::default());
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_normalization() {
        let decomposed = "disen\u{0303}o";
        let nodes = vec![ContentNode::paragraph(decomposed)];
        let html = to_html(&nodes, &RenderOptions::default());
        assert!(html.contains(decomposed));

        let normalized = to_html(&nodes, &RenderOptions::new().with_normalization(true));
        assert!(normalized.contains("diseño"));
        assert!(!normalized.contains(decomposed));
    }

    #[test]
    fn test_render_content_keeps_value_bytes() {
        let value = "Cafe\u{0301}";
        let html = render_content(&[ContentNode::paragraph(value)], "").to_html();
        assert_eq!(html, format!("<div><p><span>{}</span></p></div>", value));
    }

    #[test]
    fn test_renderer_stats_without_opt_in() {
        let nodes = vec![ContentNode::paragraph("uno dos tres")];
        let result = ContentRenderer::new(RenderOptions::default()).render_with_stats(&nodes);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.text_run_count, 1);
        assert_eq!(result.stats.word_count, 3);
        assert_eq!(result.stats.char_count, 10);
    }

    #[test]
    fn test_stats() {
        let nodes = vec![
            ContentNode::paragraph_runs(["Hola ", "mundo"]),
            ContentNode::unsupported("video"),
        ];
        let result = to_html_with_stats(&nodes, &RenderOptions::default());
        assert_eq!(result.stats.node_count, 2);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.text_run_count, 2);
        assert_eq!(result.stats.skipped_count, 1);
        assert_eq!(result.stats.word_count, 2);
    }

    #[test]
    fn test_visitor_skip_and_replace() {
        let nodes = vec![
            ContentNode::Paragraph(Paragraph::new()),
            ContentNode::Unsupported(UnsupportedNode::new("image")),
        ];
        let html = ContentRenderer::new(RenderOptions::default())
            .with_visitor(SkipEmptyParagraphsVisitor)
            .render(&nodes)
            .to_html();
        assert_eq!(html, "<div></div>");

        let html = ContentRenderer::new(RenderOptions::default())
            .with_visitor(UnsupportedMarkerVisitor)
            .render(&nodes)
            .to_html();
        assert_eq!(html, "<div><p></p><!-- unsupported node: image --></div>");
    }
}
