//! Content model types.
//!
//! Rich-text nodes are the input of every renderer; the site types hold the
//! static data the pages are built from. Both deserialize from the same JSON
//! shape the content is authored in.

mod content;
mod site;

pub use content::{ContentNode, Paragraph, RichText, TextKind, TextNode, UnsupportedNode};
pub use site::{
    AboutSection, Degree, HomeSection, Image, PortfolioItem, PortfolioSection, Seo, SiteData,
    Timestamp, WorkHistoryItem,
};
