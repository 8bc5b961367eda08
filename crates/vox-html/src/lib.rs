//! vox HTML parser
//!
//! Parses HTML5 text into `vox-dom` documents via html5ever.

mod parser;

pub use parser::HtmlParser;

use vox_dom::Document;

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}

/// Load error
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Read and parse an HTML file
pub fn parse_file(path: &str) -> Result<Document, LoadError> {
    let html = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    Ok(HtmlParser::new().parse_with_url(&html, path))
}
