//! `sitemap.xml` rendering and writing.

use std::fmt::Display;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::debug;

use crate::error::{Result, SitemapError};

/// Name of the document written into the site root.
pub const SITEMAP_FILE_NAME: &str = "sitemap.xml";

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Spaces per nesting level.
pub const SITEMAP_INDENT: usize = 4;

/// Renders a URL list as a `urlset` document.
///
/// Output is a pure function of the input: UTF-8, one element per line,
/// entries in the order given. The writer only emits markup and never
/// resolves entities, schemas or stylesheets.
#[derive(Debug, Default, Clone, Copy)]
pub struct SitemapWriter;

impl SitemapWriter {
    /// Render the document into memory.
    ///
    /// # Errors
    /// Returns an error if the XML writer fails.
    pub fn render(&self, urls: &[String]) -> Result<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', SITEMAP_INDENT);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("no"))))
            .map_err(xml_error)?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NAMESPACE));
        writer.write_event(Event::Start(urlset)).map_err(xml_error)?;

        for url in urls {
            writer
                .write_event(Event::Start(BytesStart::new("url")))
                .map_err(xml_error)?;
            writer
                .write_event(Event::Start(BytesStart::new("loc")))
                .map_err(xml_error)?;
            writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(url))))
                .map_err(xml_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("loc")))
                .map_err(xml_error)?;
            writer
                .write_event(Event::End(BytesEnd::new("url")))
                .map_err(xml_error)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new("urlset")))
            .map_err(xml_error)?;

        let mut document = writer.into_inner();
        document.push(b'\n');
        Ok(document)
    }

    /// Render `urls` and replace the file at `path` with the result.
    ///
    /// The document goes to a sibling temporary file first and is renamed
    /// into place, so a failed run leaves any previous sitemap untouched.
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write(&self, urls: &[String], path: &Path) -> Result<()> {
        let document = self.render(urls)?;
        let temp_path = temp_path_for(path);

        if let Err(source) = write_file(&temp_path, &document) {
            let _ = fs::remove_file(&temp_path);
            return Err(SitemapError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        if let Err(source) = fs::rename(&temp_path, path) {
            let _ = fs::remove_file(&temp_path);
            return Err(SitemapError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        debug!(path = %path.display(), bytes = document.len(), "sitemap written");
        Ok(())
    }
}

fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| SITEMAP_FILE_NAME.into(), |n| n.to_string_lossy());
    path.with_file_name(format!(".{name}.tmp"))
}

fn xml_error(e: impl Display) -> SitemapError {
    SitemapError::Xml(e.to_string())
}

#[cfg(test)]
#[path = "sitemap_tests.rs"]
mod tests;
