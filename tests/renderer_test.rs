//! Integration tests for the rich-text renderer.

use folio::render::{to_html, to_markdown, to_text, Element, RenderOptions};
use folio::{parse_nodes, render_content, ContentNode};

fn blocks(el: &Element) -> Vec<&Element> {
    el.child_elements().collect()
}

#[test]
fn test_block_count_matches_paragraph_count() {
    for n in [0usize, 1, 2, 7, 32] {
        let nodes: Vec<ContentNode> = (0..n)
            .map(|i| ContentNode::paragraph(format!("p{}", i)))
            .collect();
        let el = render_content(&nodes, "");
        assert_eq!(blocks(&el).len(), n);
        assert_eq!(el.children.len(), n);
    }
}

#[test]
fn test_unknown_types_render_nothing() {
    for kind in ["image", "heading", "list", "", "Paragraph", "text"] {
        let nodes = vec![ContentNode::unsupported(kind)];
        let el = render_content(&nodes, "x");
        assert!(blocks(&el).is_empty(), "type {:?} produced a block", kind);
        assert_eq!(el.to_html(), r#"<div class="x"></div>"#);
    }
}

#[test]
fn test_run_order_is_preserved() {
    let nodes = parse_nodes(
        r#"[{"type":"paragraph","content":[
            {"type":"text","value":"A"},
            {"type":"text","value":"B"}
        ]}]"#,
    )
    .unwrap();
    let html = render_content(&nodes, "").to_html();
    let a = html.find("A").unwrap();
    let b = html.find("B").unwrap();
    assert!(a < b);
    assert_eq!(to_text(&nodes, &RenderOptions::default()), "AB");
}

#[test]
fn test_missing_content_renders_empty_paragraph() {
    let nodes = parse_nodes(r#"[{"type":"paragraph"}]"#).unwrap();
    let el = render_content(&nodes, "");
    let b = blocks(&el);
    assert_eq!(b.len(), 1);
    assert_eq!(b[0].tag, "p");
    assert!(b[0].children.is_empty());
    assert_eq!(el.to_html(), "<div><p></p></div>");
}

#[test]
fn test_rendering_is_idempotent() {
    let nodes = parse_nodes(
        r#"[
            {"type":"paragraph","content":[{"type":"text","value":"uno"}]},
            {"type":"image"},
            {"type":"paragraph","content":[{"type":"text","value":"dos"},{"type":"text","value":"tres"}]}
        ]"#,
    )
    .unwrap();
    let snapshot = nodes.clone();
    let first = render_content(&nodes, "prose");
    let second = render_content(&nodes, "prose");
    assert_eq!(first, second);
    assert_eq!(first.to_html(), second.to_html());
    assert_eq!(nodes, snapshot);
}

#[test]
fn test_hola_end_to_end() {
    let nodes =
        parse_nodes(r#"[{"type":"paragraph","content":[{"type":"text","value":"Hola"}]}]"#)
            .unwrap();
    let el = render_content(&nodes, "");
    let b = blocks(&el);
    assert_eq!(b.len(), 1);
    let spans: Vec<&Element> = b[0].child_elements().collect();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].tag, "span");
    assert_eq!(spans[0].to_html(), "<span>Hola</span>");
}

#[test]
fn test_image_end_to_end() {
    let nodes = parse_nodes(r#"[{"type":"image"}]"#).unwrap();
    let el = render_content(&nodes, "");
    assert!(blocks(&el).is_empty());
    assert_eq!(to_text(&nodes, &RenderOptions::default()), "");
    assert_eq!(to_markdown(&nodes, &RenderOptions::default()), "");
}

#[test]
fn test_children_are_not_rendered() {
    let nodes = parse_nodes(
        r#"[{"type":"paragraph",
             "content":[{"type":"text","value":"top"}],
             "children":[{"type":"paragraph","content":[{"type":"text","value":"nested"}]}]}]"#,
    )
    .unwrap();
    assert_eq!(nodes[0].children().len(), 1);
    let html = to_html(&nodes, &RenderOptions::default());
    assert!(html.contains("top"));
    assert!(!html.contains("nested"));
}

#[test]
fn test_class_applies_to_container_only() {
    let nodes = vec![ContentNode::paragraph("a"), ContentNode::paragraph("b")];
    let html = to_html(&nodes, &RenderOptions::new().with_class("text-lg mb-4"));
    assert_eq!(
        html,
        r#"<div class="text-lg mb-4"><p><span>a</span></p><p><span>b</span></p></div>"#
    );
}

#[test]
fn test_unsupported_node_content_is_not_rendered() {
    let nodes = parse_nodes(
        r#"[{"type":"quote","content":[{"type":"text","value":"oculto"}]}]"#,
    )
    .unwrap();
    assert!(!nodes[0].is_paragraph());

    let el = render_content(&nodes, "");
    assert!(blocks(&el).is_empty());
    assert_eq!(el.to_html(), "<div></div>");
    assert_eq!(to_text(&nodes, &RenderOptions::default()), "");
    assert_eq!(to_markdown(&nodes, &RenderOptions::default()), "");

    let json = serde_json::to_string(&nodes).unwrap();
    assert!(json.contains("oculto"));
}

#[test]
fn test_literal_value_in_span() {
    let value = "Cafe\u{0301} & \u{1F600}";
    let nodes = vec![ContentNode::paragraph(value)];
    let el = render_content(&nodes, "");
    assert_eq!(blocks(&el)[0].to_html(), "<p><span>Cafe\u{0301} &amp; \u{1F600}</span></p>");
}
