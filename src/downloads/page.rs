//! Host page handling: locating the designated container, the built-in page
//! template, minification and the gzip companion.

use std::fs;
use std::io::Write;
use std::ops::Range;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use minijinja::{context, Environment};
use tracing::{debug, info};

use crate::config::DownloadsConfig;
use crate::core::{Error, Result};
use crate::downloads::render::{render_catalog, RenderTarget};
use crate::downloads::types::ReleaseCatalog;

/// The embedded downloads page used when no host page is supplied.
const PAGE_TEMPLATE: &str = include_str!("template.html");

/// An HTML document with one designated container element.
#[derive(Debug, Clone)]
pub struct HostPage {
    html: String,
    container_id: String,
    /// Byte range of the container's inner content.
    inner: Range<usize>,
}

impl HostPage {
    /// Wrap a document, locating the element whose `id` is `container_id`.
    pub fn parse(html: impl Into<String>, container_id: &str) -> Result<Self> {
        let html = html.into();
        let inner =
            locate_container(&html, container_id).ok_or_else(|| Error::ContainerNotFound {
                id: container_id.to_string(),
            })?;
        Ok(Self {
            html,
            container_id: container_id.to_string(),
            inner,
        })
    }

    /// Read a host page from disk.
    pub fn load(path: impl AsRef<Path>, container_id: &str) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::parse(fs::read_to_string(path)?, container_id)
    }

    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    /// Current content of the container element.
    pub fn inner_html(&self) -> &str {
        &self.html[self.inner.clone()]
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl RenderTarget for HostPage {
    fn clear(&mut self) {
        self.html.replace_range(self.inner.clone(), "");
        self.inner.end = self.inner.start;
    }

    fn append(&mut self, markup: &str) {
        self.html.insert_str(self.inner.end, markup);
        self.inner.end += markup.len();
    }
}

/// Find the inner content range of the element carrying `id="{id}"`.
///
/// Comments and `<script>`/`<style>` bodies are not searched. Attribute
/// values containing `>` are not supported in the container's own opening tag.
fn locate_container(html: &str, id: &str) -> Option<Range<usize>> {
    // ASCII lowering keeps byte offsets intact.
    let lower = html.to_ascii_lowercase();
    let opaque = opaque_spans(&lower);

    for quote in ['"', '\''] {
        let needle = format!("id={quote}{id}{quote}");
        let mut from = 0;
        while let Some(pos) = html[from..].find(&needle).map(|p| p + from) {
            from = pos + needle.len();

            if in_spans(&opaque, pos) {
                continue;
            }
            if !html[..pos].ends_with(|c: char| c.is_ascii_whitespace()) {
                continue;
            }
            let Some(tag_start) = html[..pos].rfind('<') else {
                continue;
            };
            if html[tag_start..pos].contains('>') {
                continue;
            }
            let name: String = lower[tag_start + 1..]
                .chars()
                .take_while(char::is_ascii_alphanumeric)
                .collect();
            if name.is_empty() {
                continue;
            }
            let open_end = html[from..].find('>').map(|p| p + from + 1)?;
            if html[..open_end].ends_with("/>") {
                continue;
            }
            if let Some(close) = matching_close(&lower, &opaque, &name, open_end) {
                return Some(open_end..close);
            }
        }
    }
    None
}

/// Byte ranges holding text that is not markup: comments and the bodies of
/// `script` and `style` elements.
fn opaque_spans(lower: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(lt) = lower[pos..].find('<').map(|p| p + pos) {
        let rest = &lower[lt..];
        if rest.starts_with("<!--") {
            let end = lower[lt + 4..]
                .find("-->")
                .map_or(lower.len(), |p| lt + 4 + p + 3);
            spans.push(lt..end);
            pos = end;
            continue;
        }

        let raw = ["script", "style"]
            .into_iter()
            .find(|name| rest[1..].starts_with(name) && is_name_end(&rest[1 + name.len()..]));
        match raw {
            Some(name) => {
                let body = rest.find('>').map_or(lower.len(), |p| lt + p + 1);
                let close = format!("</{name}");
                let end = lower[body..].find(&close).map_or(lower.len(), |p| body + p);
                spans.push(body..end);
                pos = end;
            }
            None => pos = lt + 1,
        }
    }
    spans
}

fn in_spans(spans: &[Range<usize>], pos: usize) -> bool {
    spans.iter().any(|span| span.contains(&pos))
}

fn is_name_end(rest: &str) -> bool {
    matches!(rest.chars().next(), Some(c) if c.is_ascii_whitespace() || c == '>' || c == '/')
}

/// First occurrence of `needle` at or after `from` that is not inside an opaque span.
fn find_markup(lower: &str, opaque: &[Range<usize>], needle: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = lower[pos..].find(needle).map(|p| p + pos) {
        if !in_spans(opaque, found) {
            return Some(found);
        }
        pos = found + needle.len();
    }
    None
}

/// Position of the close tag matching an element opened just before `from`.
fn matching_close(lower: &str, opaque: &[Range<usize>], name: &str, from: usize) -> Option<usize> {
    let open = format!("<{name}");
    let close = format!("</{name}");
    let mut depth = 1usize;
    let mut pos = from;

    loop {
        let next_close = find_markup(lower, opaque, &close, pos)?;
        match find_open_tag(lower, opaque, &open, pos) {
            Some(next_open) if next_open < next_close => {
                depth += 1;
                pos = next_open + open.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(next_close);
                }
                pos = next_close + close.len();
            }
        }
    }
}

fn find_open_tag(lower: &str, opaque: &[Range<usize>], open: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = find_markup(lower, opaque, open, pos) {
        if is_name_end(&lower[found + open.len()..]) {
            return Some(found);
        }
        pos = found + open.len();
    }
    None
}

/// PageRenderer assembles full download pages.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Create a new renderer with the embedded page template.
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template("downloads.html", PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// The built-in page with an empty container.
    pub fn default_page(&self, config: &DownloadsConfig) -> Result<String> {
        let tmpl = self.env.get_template("downloads.html")?;
        let rendered = tmpl.render(context! {
            title => &config.title,
            stylesheet => &config.stylesheet,
            container_id => &config.container_id,
        })?;
        Ok(rendered)
    }

    /// Render `catalog` into `host` (or the built-in page) and return the document bytes.
    pub fn render_page(
        &self,
        catalog: &ReleaseCatalog,
        host: Option<&str>,
        config: &DownloadsConfig,
    ) -> Result<Vec<u8>> {
        let source = match host {
            Some(html) => html.to_string(),
            None => self.default_page(config)?,
        };
        let mut page = HostPage::parse(source, &config.container_id)?;
        render_catalog(catalog, &mut page);

        let html = page.into_html();
        if config.minify {
            debug!(bytes = html.len(), "minifying page");
            Ok(minify_html_output(html.as_bytes()))
        } else {
            Ok(html.into_bytes())
        }
    }

    /// Write a page to a file, optionally with a `.html.gz` companion.
    pub fn write_page(output: &[u8], output_path: &Path, gzip: bool) -> Result<()> {
        fs::write(output_path, output)?;
        info!(path = %output_path.display(), "wrote downloads page");

        if gzip {
            let gz_path = Self::gz_path(output_path);
            let gz_file = fs::File::create(&gz_path)?;
            let mut encoder = GzEncoder::new(gz_file, Compression::best());
            encoder.write_all(output)?;
            encoder.finish()?;
            info!(path = %gz_path.display(), "wrote gzip companion");
        }

        Ok(())
    }

    /// Return the gzip companion path for a given output path.
    pub fn gz_path(output_path: &Path) -> PathBuf {
        output_path.with_extension("html.gz")
    }
}

fn minify_html_output(input: &[u8]) -> Vec<u8> {
    let cfg = minify_html::Cfg {
        minify_css: true,
        ..Default::default()
    };
    minify_html::minify(input, &cfg)
}
