//! Rendering options and configuration.

/// Options for rendering rich-text content.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Class token applied to the rendered container (empty = none)
    pub class: String,

    /// Normalize text values to Unicode NFC
    pub normalize_unicode: bool,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Collect render statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container class token.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            class: String::new(),
            normalize_unicode: false,
            escape_special_chars: true,
            collect_stats: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_class("prose")
            .with_normalization(true)
            .with_stats(true);
        assert_eq!(options.class, "prose");
        assert!(options.normalize_unicode);
        assert!(options.escape_special_chars);
        assert!(options.collect_stats);
    }

    #[test]
    fn test_defaults_keep_text_literal() {
        let options = RenderOptions::default();
        assert!(!options.normalize_unicode);
        assert!(!options.collect_stats);
    }
}
