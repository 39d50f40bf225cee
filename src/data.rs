//! Built-in site content and loading of user-supplied content files.

use std::path::Path;

use crate::error::Result;
use crate::model::SiteData;

/// The bundled content as JSON.
pub const BUILTIN_JSON: &str = include_str!("../data/portfolio.json");

/// The bundled site content.
pub fn builtin() -> Result<SiteData> {
    SiteData::from_json(BUILTIN_JSON)
}

/// Load and validate site content from a JSON file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<SiteData> {
    let path = path.as_ref();
    log::debug!("Loading site data from {}", path.display());
    let json = std::fs::read_to_string(path)?;
    SiteData::from_json(&json)
}

/// Load site content from `path`, or the bundled content when `None`.
pub fn load_or_builtin<P: AsRef<Path>>(path: Option<P>) -> Result<SiteData> {
    match path {
        Some(p) => load_file(p),
        None => builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_parses() {
        let data = SiteData::from_json(BUILTIN_JSON).unwrap();
        assert_eq!(data.home.title, "Diego Rios");
        assert_eq!(data.portfolio.items.len(), 2);
        assert_eq!(data.about.work_history_items.len(), 2);
        assert!(data.about.work_history_items[0].is_current());
    }

    #[test]
    fn test_builtin_lookup_by_slug() {
        let data = builtin().unwrap();
        let item = data.portfolio_item("project-2").unwrap();
        assert_eq!(item.title, "Conicet - Sistema Monitoreo");
        assert!(data.portfolio_item("missing").is_none());
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUILTIN_JSON.as_bytes()).unwrap();
        let data = load_file(file.path()).unwrap();
        assert_eq!(data, builtin().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_file("/nonexistent/portfolio.json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }

    #[test]
    fn test_load_or_builtin_none() {
        let data = load_or_builtin::<&Path>(None).unwrap();
        assert_eq!(data.about.title, "Sobre Mí");
    }
}
