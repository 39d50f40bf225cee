//! Integration tests for render visitors.

use folio::model::{Paragraph, UnsupportedNode};
use folio::render::visitor::{
    CompositeVisitor, ContentVisitor, DefaultVisitor, SkipEmptyParagraphsVisitor,
    UnsupportedMarkerVisitor, VisitorAction,
};
use folio::render::{ContentRenderer, MarkdownRenderer, RenderOptions};
use folio::ContentNode;

/// Custom visitor that tracks visit counts.
#[derive(Default)]
struct CountingVisitor {
    paragraphs: usize,
    unsupported: Vec<String>,
}

impl ContentVisitor for CountingVisitor {
    fn visit_paragraph(&mut self, _index: usize, _para: &Paragraph) -> VisitorAction {
        self.paragraphs += 1;
        VisitorAction::Continue
    }

    fn visit_unsupported(&mut self, _index: usize, node: &UnsupportedNode) -> VisitorAction {
        self.unsupported.push(node.kind.clone());
        VisitorAction::Continue
    }
}

/// Replaces the paragraph at one position.
struct ReplaceAt(usize);

impl ContentVisitor for ReplaceAt {
    fn visit_paragraph(&mut self, index: usize, _para: &Paragraph) -> VisitorAction {
        if index == self.0 {
            VisitorAction::Replace("<hr>".to_string())
        } else {
            VisitorAction::Continue
        }
    }
}

fn sample() -> Vec<ContentNode> {
    vec![
        ContentNode::paragraph("uno"),
        ContentNode::unsupported("image"),
        ContentNode::Paragraph(Paragraph::new()),
        ContentNode::paragraph("dos"),
    ]
}

#[test]
fn test_counting_visitor() {
    let mut visitor = CountingVisitor::default();
    for (i, node) in sample().iter().enumerate() {
        match node {
            ContentNode::Paragraph(p) => visitor.visit_paragraph(i, p),
            ContentNode::Unsupported(u) => visitor.visit_unsupported(i, u),
        };
    }
    assert_eq!(visitor.paragraphs, 3);
    assert_eq!(visitor.unsupported, vec!["image".to_string()]);
}

#[test]
fn test_default_visitor_matches_plain_render() {
    let nodes = sample();
    let plain = ContentRenderer::new(RenderOptions::default()).render(&nodes);
    let visited = ContentRenderer::new(RenderOptions::default())
        .with_visitor(DefaultVisitor::new())
        .render(&nodes);
    assert_eq!(plain, visited);
}

#[test]
fn test_replace_in_html() {
    let html = ContentRenderer::new(RenderOptions::default())
        .with_visitor(ReplaceAt(3))
        .render(&sample())
        .to_html();
    assert_eq!(html, "<div><p><span>uno</span></p><p></p><hr></div>");
}

#[test]
fn test_composite_first_non_continue_wins() {
    let composite = CompositeVisitor::new()
        .with_visitor(SkipEmptyParagraphsVisitor)
        .with_visitor(UnsupportedMarkerVisitor);
    let result = ContentRenderer::new(RenderOptions::default().with_stats(true))
        .with_visitor(composite)
        .render_with_stats(&sample());
    assert_eq!(
        result.content,
        "<div><p><span>uno</span></p><!-- unsupported node: image --><p><span>dos</span></p></div>"
    );
    assert_eq!(result.stats.paragraph_count, 2);
    assert_eq!(result.stats.skipped_count, 1);
    assert_eq!(result.stats.replaced_count, 1);
}

#[test]
fn test_markdown_with_visitor() {
    let md = MarkdownRenderer::new(RenderOptions::default())
        .with_visitor(ReplaceAt(0))
        .render(&sample());
    assert_eq!(md, "<hr>\n\ndos");
}
