//! Rich-text content nodes.

use serde::{Deserialize, Serialize};

/// Discriminator carried by every [`TextNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextKind {
    /// Literal text
    #[default]
    Text,
}

/// A leaf run of literal text inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextNode {
    /// Always `"text"`
    #[serde(rename = "type", default)]
    pub kind: TextKind,

    /// The text to display
    pub value: String,
}

impl TextNode {
    /// Create a text node.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Text,
            value: value.into(),
        }
    }
}

/// A paragraph block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Paragraph {
    /// Text runs in display order
    pub content: Vec<TextNode>,

    /// Nested nodes. Part of the schema but never rendered.
    pub children: Vec<ContentNode>,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Append a text run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(TextNode::new(text));
    }

    /// Concatenated text of all runs.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(|t| t.value.as_str()).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|t| t.value.trim().is_empty())
    }
}

/// A node whose `type` has no renderer.
///
/// Whatever `content` and `children` it carried are kept so the node
/// survives a JSON round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UnsupportedNode {
    /// The original `type` string
    pub kind: String,

    /// Text runs, if the source node had any
    pub content: Option<Vec<TextNode>>,

    /// Nested nodes
    pub children: Vec<ContentNode>,
}

impl UnsupportedNode {
    /// Create an unsupported node of the given type.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }
}

/// One block of rich text, dispatched on its `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawNode", into = "RawNode")]
pub enum ContentNode {
    /// `"paragraph"`
    Paragraph(Paragraph),

    /// Any other type
    Unsupported(UnsupportedNode),
}

impl ContentNode {
    /// Discriminator string used in serialized form.
    pub const PARAGRAPH: &'static str = "paragraph";

    /// Create a paragraph node with a single text run.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentNode::Paragraph(Paragraph::with_text(text))
    }

    /// Create a paragraph node from several text runs.
    pub fn paragraph_runs<I, S>(runs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ContentNode::Paragraph(Paragraph {
            content: runs.into_iter().map(TextNode::new).collect(),
            children: Vec::new(),
        })
    }

    /// Create a node of a type that has no renderer.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        ContentNode::Unsupported(UnsupportedNode::new(kind))
    }

    /// The `type` string of this node.
    pub fn kind(&self) -> &str {
        match self {
            ContentNode::Paragraph(_) => Self::PARAGRAPH,
            ContentNode::Unsupported(u) => &u.kind,
        }
    }

    /// Nested nodes (schema only).
    pub fn children(&self) -> &[ContentNode] {
        match self {
            ContentNode::Paragraph(p) => &p.children,
            ContentNode::Unsupported(u) => &u.children,
        }
    }

    /// Check if this node is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, ContentNode::Paragraph(_))
    }

    /// Get the paragraph, if this is one.
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            ContentNode::Paragraph(p) => Some(p),
            ContentNode::Unsupported(_) => None,
        }
    }
}

/// Wire shape shared by every node type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawNode {
    #[serde(rename = "type")]
    kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<Vec<TextNode>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    children: Option<Vec<ContentNode>>,
}

impl From<RawNode> for ContentNode {
    fn from(raw: RawNode) -> Self {
        let children = raw.children.unwrap_or_default();
        if raw.kind == ContentNode::PARAGRAPH {
            ContentNode::Paragraph(Paragraph {
                content: raw.content.unwrap_or_default(),
                children,
            })
        } else {
            ContentNode::Unsupported(UnsupportedNode {
                kind: raw.kind,
                content: raw.content,
                children,
            })
        }
    }
}

impl From<ContentNode> for RawNode {
    fn from(node: ContentNode) -> Self {
        let non_empty = |children: Vec<ContentNode>| (!children.is_empty()).then_some(children);
        match node {
            ContentNode::Paragraph(p) => RawNode {
                kind: ContentNode::PARAGRAPH.to_string(),
                content: Some(p.content),
                children: non_empty(p.children),
            },
            ContentNode::Unsupported(u) => RawNode {
                kind: u.kind,
                content: u.content,
                children: non_empty(u.children),
            },
        }
    }
}

/// A rich-text field as it appears in site data: `{ "nodes": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RichText {
    /// Nodes in display order
    #[serde(default)]
    pub nodes: Vec<ContentNode>,
}

impl RichText {
    /// Wrap a node sequence.
    pub fn new(nodes: Vec<ContentNode>) -> Self {
        Self { nodes }
    }

    /// Rich text made of one single-run paragraph.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(vec![ContentNode::paragraph(text)])
    }

    /// Plain text of all paragraphs, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.nodes
            .iter()
            .filter_map(ContentNode::as_paragraph)
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
