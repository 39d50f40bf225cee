//! Static site generation.
//!
//! Pages are composed from the element model and the rich-text renderer,
//! serialized to complete HTML documents and written under an output
//! directory, one `index.html` per route.
//!
//! # Example
//!
//! ```no_run
//! use folio::site::{build_site, write_site, BuildOptions};
//!
//! fn main() -> folio::Result<()> {
//!     let data = folio::data::builtin()?;
//!     let options = BuildOptions::new().with_output_dir("public");
//!     let pages = build_site(&data, &options);
//!     let summary = write_site(&pages, &options)?;
//!     println!("{} files written", summary.files_written);
//!     Ok(())
//! }
//! ```

mod layout;
mod pages;

pub use layout::NavItem;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use flate2::write::GzEncoder;
use flate2::Compression;
use rayon::prelude::*;

use crate::contact::DEFAULT_RELAY_ENDPOINT;
use crate::error::Result;
use crate::model::SiteData;
use crate::theme::Theme;

/// Class tokens handed to the rich-text renderer and page chrome.
#[derive(Debug, Clone)]
pub struct ContentClasses {
    /// `<body>` class
    pub body: String,
    /// Container of the home hero description
    pub hero: String,
    /// Container of every other rich-text field
    pub content: String,
}

impl Default for ContentClasses {
    fn default() -> Self {
        Self {
            body: "bg-surface text-content".to_string(),
            hero: "hero-description".to_string(),
            content: "prose".to_string(),
        }
    }
}

/// An external profile link shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

impl SocialLink {
    /// Create a link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Options for building the site.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory the site is written to
    pub output_dir: PathBuf,

    /// Theme applied before the visitor's stored preference is known
    pub theme: Theme,

    /// Document language
    pub lang: String,

    /// Stylesheet URL
    pub stylesheet: String,

    /// Class tokens
    pub classes: ContentClasses,

    /// Normalize rich text to Unicode NFC (off by default)
    pub normalize_unicode: bool,

    /// Also write a gzip-compressed `.gz` next to every page
    pub precompress: bool,

    /// Contact form target
    pub relay_endpoint: String,

    /// Relay access key embedded in the contact form
    pub access_key: Option<String>,

    /// Address shown in the footer
    pub contact_email: Option<String>,

    /// Footer profile links
    pub social_links: Vec<SocialLink>,

    /// Reference time for the copyright year and job durations
    pub now: DateTime<Utc>,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the default theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Enable or disable gzip precompression.
    pub fn with_precompress(mut self, precompress: bool) -> Self {
        self.precompress = precompress;
        self
    }

    /// Set the class tokens.
    pub fn with_classes(mut self, classes: ContentClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Set the contact relay endpoint.
    pub fn with_relay_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.relay_endpoint = endpoint.into();
        self
    }

    /// Set the relay access key.
    pub fn with_access_key(mut self, key: impl Into<String>) -> Self {
        self.access_key = Some(key.into());
        self
    }

    /// Set the footer contact address.
    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = Some(email.into());
        self
    }

    /// Set the reference time.
    pub fn with_now(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
            theme: Theme::Light,
            lang: "es".to_string(),
            stylesheet: "/styles.css".to_string(),
            classes: ContentClasses::default(),
            normalize_unicode: false,
            precompress: false,
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            access_key: None,
            contact_email: None,
            social_links: vec![
                SocialLink::new(
                    "LinkedIn",
                    "https://www.linkedin.com/in/diego-rios-fullstack/",
                ),
                SocialLink::new("Github", "https://github.com/diego-rios-fullstack/"),
            ],
            now: Utc::now(),
        }
    }
}

/// One generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    /// Path relative to the output directory
    pub path: PathBuf,

    /// Complete HTML document
    pub html: String,
}

impl SitePage {
    fn new(route: &str, html: String) -> Self {
        let mut path = PathBuf::new();
        for segment in route.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push("index.html");
        Self { path, html }
    }
}

/// What [`write_site`] produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Files written, including `.gz` siblings
    pub files_written: usize,

    /// Total bytes of uncompressed HTML
    pub html_bytes: usize,

    /// Total bytes of gzip output
    pub compressed_bytes: usize,
}

/// Render every page of the site, sorted by path.
pub fn build_site(data: &SiteData, options: &BuildOptions) -> Vec<SitePage> {
    let mut site = vec![
        SitePage::new(NavItem::Home.href(), pages::home(data, options)),
        SitePage::new(NavItem::About.href(), pages::about(data, options)),
        SitePage::new(NavItem::Portfolio.href(), pages::portfolio(data, options)),
        SitePage::new(NavItem::Contact.href(), pages::contact(data, options)),
    ];

    let items: Vec<SitePage> = data
        .portfolio
        .items
        .par_iter()
        .map(|item| {
            log::debug!("Rendering portfolio item '{}'", item.slug);
            let route = format!("{}/{}", NavItem::Portfolio.href(), item.slug);
            SitePage::new(&route, pages::portfolio_item(data, item, options))
        })
        .collect();
    site.extend(items);

    site.sort_by(|a, b| a.path.cmp(&b.path));
    site
}

fn gzip(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

fn gz_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".gz");
    PathBuf::from(name)
}

/// Write pages under `options.output_dir`.
pub fn write_site(site: &[SitePage], options: &BuildOptions) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for page in site {
        let path = options.output_dir.join(&page.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        log::debug!("Writing {}", path.display());
        fs::write(&path, &page.html)?;
        summary.files_written += 1;
        summary.html_bytes += page.html.len();

        if options.precompress {
            let compressed = gzip(page.html.as_bytes())?;
            fs::write(gz_path(&path), &compressed)?;
            summary.files_written += 1;
            summary.compressed_bytes += compressed.len();
        }
    }

    log::info!(
        "Wrote {} files to {}",
        summary.files_written,
        options.output_dir.display()
    );
    Ok(summary)
}

/// Write pages asynchronously.
#[cfg(feature = "async")]
pub async fn write_site_async(site: &[SitePage], options: &BuildOptions) -> Result<WriteSummary> {
    let mut summary = WriteSummary::default();

    for page in site {
        let path = options.output_dir.join(&page.path);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        log::debug!("Writing {}", path.display());
        tokio::fs::write(&path, page.html.as_bytes()).await?;
        summary.files_written += 1;
        summary.html_bytes += page.html.len();

        if options.precompress {
            let compressed = gzip(page.html.as_bytes())?;
            tokio::fs::write(gz_path(&path), &compressed).await?;
            summary.files_written += 1;
            summary.compressed_bytes += compressed.len();
        }
    }

    log::info!(
        "Wrote {} files to {}",
        summary.files_written,
        options.output_dir.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_paths() {
        assert_eq!(SitePage::new("/", String::new()).path, PathBuf::from("index.html"));
        assert_eq!(
            SitePage::new("/portfolio/project-1", String::new()).path,
            Path::new("portfolio").join("project-1").join("index.html")
        );
    }

    #[test]
    fn test_gz_path() {
        assert_eq!(
            gz_path(Path::new("out/index.html")),
            PathBuf::from("out/index.html.gz")
        );
    }

    #[test]
    fn test_gzip_round_trip() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let compressed = gzip(b"<p>hola</p>").unwrap();
        let mut out = String::new();
        GzDecoder::new(&compressed[..])
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "<p>hola</p>");
    }

    #[cfg(feature = "async")]
    #[test]
    fn test_write_site_async_matches_sync() {
        let data = crate::data::builtin().unwrap();
        let sync_dir = tempfile::tempdir().unwrap();
        let async_dir = tempfile::tempdir().unwrap();
        let options = BuildOptions::new().with_precompress(true);
        let pages = build_site(&data, &options);

        let sync_options = options.clone().with_output_dir(sync_dir.path());
        let expected = write_site(&pages, &sync_options).unwrap();

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let async_options = options.with_output_dir(async_dir.path());
        let summary = runtime
            .block_on(write_site_async(&pages, &async_options))
            .unwrap();

        assert_eq!(summary, expected);
        for page in &pages {
            let written = fs::read_to_string(async_dir.path().join(&page.path)).unwrap();
            assert_eq!(written, page.html);
            assert!(gz_path(&async_dir.path().join(&page.path)).exists());
        }
    }
}
