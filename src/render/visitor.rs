//! Visitor pattern for customizing content rendering.
//!
//! A visitor sees every node before the renderer does and can keep the
//! default output, drop the node, or substitute its own output. The
//! substitute is markup for the HTML renderer and plain text for the text
//! and Markdown renderers.
//!
//! # Example
//!
//! ```
//! use folio::model::UnsupportedNode;
//! use folio::render::visitor::{ContentVisitor, VisitorAction};
//!
//! struct ShowImages;
//!
//! impl ContentVisitor for ShowImages {
//!     fn visit_unsupported(&mut self, _index: usize, node: &UnsupportedNode) -> VisitorAction {
//!         if node.kind == "image" {
//!             VisitorAction::Replace("<figure></figure>".to_string())
//!         } else {
//!             VisitorAction::Continue
//!         }
//!     }
//! }
//! ```

use crate::model::{Paragraph, UnsupportedNode};

use super::element::escape_html;

/// Action returned by visitor methods to control rendering behavior.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum VisitorAction {
    /// Continue with default rendering.
    #[default]
    Continue,

    /// Replace the node with custom output.
    Replace(String),

    /// Skip this node entirely (produce no output).
    Skip,
}

impl VisitorAction {
    /// Check if this action indicates the node should be skipped.
    pub fn should_skip(&self) -> bool {
        matches!(self, VisitorAction::Skip)
    }

    /// Check if this action provides replacement content.
    pub fn is_replace(&self) -> bool {
        matches!(self, VisitorAction::Replace(_))
    }

    /// Get replacement content if available.
    pub fn replacement(&self) -> Option<&str> {
        match self {
            VisitorAction::Replace(s) => Some(s),
            _ => None,
        }
    }
}

/// Trait for visiting content nodes during rendering.
///
/// All methods return `VisitorAction::Continue` by default.
pub trait ContentVisitor: Send + Sync {
    /// Called before rendering the paragraph at `index`.
    fn visit_paragraph(&mut self, index: usize, para: &Paragraph) -> VisitorAction {
        let _ = (index, para);
        VisitorAction::Continue
    }

    /// Called for a node whose type has no renderer.
    ///
    /// `Continue` keeps the default, which renders nothing.
    fn visit_unsupported(&mut self, index: usize, node: &UnsupportedNode) -> VisitorAction {
        let _ = (index, node);
        VisitorAction::Continue
    }
}

/// Default visitor that performs no customization.
#[derive(Debug, Clone, Default)]
pub struct DefaultVisitor;

impl DefaultVisitor {
    /// Create a new default visitor.
    pub fn new() -> Self {
        Self
    }
}

impl ContentVisitor for DefaultVisitor {}

/// Visitor that drops paragraphs without visible text.
#[derive(Debug, Clone, Default)]
pub struct SkipEmptyParagraphsVisitor;

impl ContentVisitor for SkipEmptyParagraphsVisitor {
    fn visit_paragraph(&mut self, _index: usize, para: &Paragraph) -> VisitorAction {
        if para.is_empty() {
            VisitorAction::Skip
        } else {
            VisitorAction::Continue
        }
    }
}

/// Visitor that leaves an HTML comment where an unsupported node was.
///
/// Handy when authoring content, to see which nodes were dropped.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedMarkerVisitor;

impl ContentVisitor for UnsupportedMarkerVisitor {
    fn visit_unsupported(&mut self, _index: usize, node: &UnsupportedNode) -> VisitorAction {
        let kind = escape_html(&node.kind).replace("--", "- -");
        VisitorAction::Replace(format!("<!-- unsupported node: {} -->", kind))
    }
}

/// Composite visitor that chains multiple visitors.
///
/// Visitors are called in order. The first visitor that returns
/// a non-Continue action determines the result.
pub struct CompositeVisitor {
    visitors: Vec<Box<dyn ContentVisitor>>,
}

impl CompositeVisitor {
    /// Create a new composite visitor.
    pub fn new() -> Self {
        Self {
            visitors: Vec::new(),
        }
    }

    /// Add a visitor to the chain.
    pub fn with_visitor<V: ContentVisitor + 'static>(mut self, visitor: V) -> Self {
        self.visitors.push(Box::new(visitor));
        self
    }
}

impl Default for CompositeVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentVisitor for CompositeVisitor {
    fn visit_paragraph(&mut self, index: usize, para: &Paragraph) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_paragraph(index, para);
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }

    fn visit_unsupported(&mut self, index: usize, node: &UnsupportedNode) -> VisitorAction {
        for visitor in &mut self.visitors {
            let action = visitor.visit_unsupported(index, node);
            if action != VisitorAction::Continue {
                return action;
            }
        }
        VisitorAction::Continue
    }
}
