//! Sitemap document building.
//!
//! Assembles a sitemap.xml document from scanned pages.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"
//!         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
//!         xsi:schemaLocation="...">
//!   <url>
//!     <loc>https://example.com/index.html</loc>
//!     <lastmod>2025-01-01</lastmod>
//!   </url>
//! </urlset>
//! ```
//!
//! Only `loc` and `lastmod` are emitted. Configured priorities and the
//! change frequency are not attached to `url` elements.

use crate::error::{SitemapError, SitemapResult};
use crate::sitemap::SitemapEntry;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs;
use std::path::Path;

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 \
                                   http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// In-memory sitemap document
#[derive(Debug, Clone, Default)]
pub struct Sitemap {
    urls: Vec<SitemapEntry>,
}

impl Sitemap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page; pages keep the order they were pushed in
    pub fn push(&mut self, entry: SitemapEntry) {
        self.urls.push(entry);
    }

    /// Encode as a UTF-8 XML document with declaration
    pub fn to_xml(&self) -> SitemapResult<Vec<u8>> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut urlset = BytesStart::new("urlset");
        urlset.push_attribute(("xmlns", SITEMAP_NS));
        urlset.push_attribute(("xmlns:xsi", XSI_NS));
        urlset.push_attribute(("xsi:schemaLocation", SCHEMA_LOCATION));
        write(&mut writer, Event::Start(urlset))?;

        for entry in &self.urls {
            write(&mut writer, Event::Start(BytesStart::new("url")))?;
            write_text_element(&mut writer, "loc", &entry.loc)?;
            write_text_element(&mut writer, "lastmod", &entry.lastmod)?;
            write(&mut writer, Event::End(BytesEnd::new("url")))?;
        }

        write(&mut writer, Event::End(BytesEnd::new("urlset")))?;

        let mut xml = writer.into_inner();
        xml.push(b'\n');
        Ok(xml)
    }

    /// Encode and write to `path`, replacing any existing file
    pub fn write_to(&self, path: &Path) -> SitemapResult<()> {
        let xml = self.to_xml()?;
        fs::write(path, xml).map_err(|e| SitemapError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl FromIterator<SitemapEntry> for Sitemap {
    fn from_iter<I: IntoIterator<Item = SitemapEntry>>(iter: I) -> Self {
        Sitemap {
            urls: iter.into_iter().collect(),
        }
    }
}

/// Build a sitemap from `entries` and write it to `output_path`
pub fn build<I>(entries: I, output_path: &Path) -> SitemapResult<()>
where
    I: IntoIterator<Item = SitemapEntry>,
{
    entries.into_iter().collect::<Sitemap>().write_to(output_path)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> SitemapResult<()> {
    writer
        .write_event(event)
        .map_err(|e| SitemapError::Encode(e.to_string()))
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> SitemapResult<()> {
    write(writer, Event::Start(BytesStart::new(name)))?;
    write(writer, Event::Text(BytesText::new(text)))?;
    write(writer, Event::End(BytesEnd::new(name)))
}
