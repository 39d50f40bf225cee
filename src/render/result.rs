//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, Markdown, text)
    pub content: String,

    /// Render statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RenderStats::default(),
        }
    }
}

/// Statistics collected while rendering a node sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of input nodes
    pub node_count: u32,

    /// Paragraphs rendered
    pub paragraph_count: u32,

    /// Text runs rendered
    pub text_run_count: u32,

    /// Nodes that produced no output (unsupported or skipped by a visitor)
    pub skipped_count: u32,

    /// Nodes replaced by a visitor
    pub replaced_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        self.node_count += other.node_count;
        self.paragraph_count += other.paragraph_count;
        self.text_run_count += other.text_run_count;
        self.skipped_count += other.skipped_count;
        self.replaced_count += other.replaced_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
