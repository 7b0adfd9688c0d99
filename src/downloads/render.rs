//! Release markup rendering.
//!
//! Rendering goes item -> group -> release -> catalog. Every function here is
//! pure except [`render_catalog`], which writes into the designated page region.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tracing::{debug, info};

use crate::core::Result;
use crate::downloads::catalog::CatalogFormat;
use crate::downloads::types::{
    ArtifactGroup, ArtifactItem, Release, ReleaseCatalog, SeparatorSize,
};

/// Style of the block that shows a malformed entry.
const MALFORMED_STYLE: &str = "display:inline-block; background-color:#f20; color:#000; \
border-radius:5px; padding:5px; max-width:100%; white-space:pre-wrap;";

/// A page region that receives the rendered catalog.
pub trait RenderTarget {
    /// Remove all content of the region.
    fn clear(&mut self);

    /// Append markup at the end of the region.
    fn append(&mut self, markup: &str);
}

impl RenderTarget for String {
    fn clear(&mut self) {
        String::clear(self);
    }

    fn append(&mut self, markup: &str) {
        self.push_str(markup);
    }
}

/// Render one item inside its list entry container.
pub fn render_item(item: &ArtifactItem) -> String {
    let mut html = String::from("<div class=\"dlDataItem\">");

    match item {
        ArtifactItem::Text { text } => html.push_str(text),
        ArtifactItem::Link {
            text,
            href,
            download,
            new_tab,
        } => {
            html.push_str("<a href=\"");
            html.push_str(href);
            html.push('"');
            if *download {
                html.push_str(" download");
            }
            if *new_tab {
                html.push_str(" target=\"_blank\"");
            }
            html.push('>');
            html.push_str(text);
            html.push_str("</a>");
        }
        ArtifactItem::Separator { size } => {
            let height = size.as_ref().map_or_else(|| "0".to_string(), SeparatorSize::to_css);
            html.push_str(&format!(
                "<div class=\"dlDataSep\" style=\"width:0; height:{height};\"></div>"
            ));
        }
        ArtifactItem::Unknown { raw } => {
            debug!(entry = %raw, "rendering malformed entry");
            html.push_str(&format!(
                "<div class=\"dlDataMalformed\" style=\"{MALFORMED_STYLE}\">"
            ));
            html.push_str(&escape_text(&pretty_dump(raw)));
            html.push_str("</div>");
        }
    }

    html.push_str("</div>");
    html
}

/// Render a titled group of items.
pub fn render_group(label: &str, group: &ArtifactGroup) -> String {
    let mut html = String::from("<div class=\"releaseData\">");
    html.push_str("<div class=\"releaseDataTitle\">");
    html.push_str(label);
    html.push_str("</div>");
    html.push_str("<div class=\"releaseDataContent\">");
    for item in group.iter() {
        html.push_str(&render_item(item));
    }
    html.push_str("</div>");
    html.push_str("</div>");
    html
}

/// Render a release title followed by its present groups. The title carries no id.
pub fn render_release(release: &Release) -> String {
    let mut html = String::from("<div class=\"releaseContainer\">");
    html.push_str("<div class=\"releaseTitle\">");
    html.push_str(&release.title);
    html.push_str("</div>");
    for (role, group) in release.groups() {
        html.push_str(&render_group(role.label(), group));
    }
    html.push_str("</div>");
    html
}

/// Markup of all releases, in catalog order.
pub fn render_catalog_markup(catalog: &ReleaseCatalog) -> String {
    catalog.iter().map(render_release).collect()
}

/// Replace the content of `target` with the rendered catalog.
///
/// The markup is complete before the target is touched, and the region is
/// cleared before writing, so repeated calls leave the same content.
pub fn render_catalog<T: RenderTarget + ?Sized>(catalog: &ReleaseCatalog, target: &mut T) {
    let markup = render_catalog_markup(catalog);
    target.clear();
    target.append(&markup);
    info!(releases = catalog.len(), bytes = markup.len(), "rendered catalog");
}

/// Parse `source` and render it into `target`.
///
/// On a catalog failure the error is returned and `target` keeps its content.
pub fn render_catalog_source<T: RenderTarget + ?Sized>(
    source: &str,
    format: CatalogFormat,
    target: &mut T,
) -> Result<()> {
    let catalog = ReleaseCatalog::parse(source, format)?;
    render_catalog(&catalog, target);
    Ok(())
}

/// Pretty-print a value with one space per nesting level.
fn pretty_dump(raw: &Value) -> String {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b" "));
    if raw.serialize(&mut serializer).is_err() {
        return raw.to_string();
    }
    String::from_utf8(buf).unwrap_or_else(|_| raw.to_string())
}

/// Escape the characters that would let a diagnostic dump open or close tags.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> ArtifactItem {
        ArtifactItem::from_value(value)
    }

    #[test]
    fn test_text_item_is_verbatim() {
        let html = render_item(&item(json!({"type": "text", "text": "Lorem <b>ipsum</b>"})));
        assert_eq!(html, "<div class=\"dlDataItem\">Lorem <b>ipsum</b></div>");
    }

    #[test]
    fn test_plain_link() {
        let html = render_item(&item(json!({
            "type": "link", "text": "Online", "href": "../doc/#"
        })));
        insta::assert_snapshot!(html, @r##"<div class="dlDataItem"><a href="../doc/#">Online</a></div>"##);
    }

    #[test]
    fn test_download_link() {
        let html = render_item(&item(json!({
            "type": "link", "text": "PDF", "href": "./files/asdf.pdf", "download": true
        })));
        assert_eq!(
            html,
            "<div class=\"dlDataItem\"><a href=\"./files/asdf.pdf\" download>PDF</a></div>"
        );
    }

    #[test]
    fn test_new_tab_link() {
        let html = render_item(&item(json!({
            "newTab": true, "href": "./files/asdf.pdf", "text": "Online PDF", "type": "link"
        })));
        assert!(html.contains("target=\"_blank\""));
        assert!(!html.contains(" download"));
    }

    #[test]
    fn test_separator_css_length_passes_through() {
        let html = render_item(&item(json!({"type": "sep", "size": "0.1em"})));
        assert!(html.contains("height:0.1em;"), "{html}");
    }

    #[test]
    fn test_separator_number_is_pixels() {
        let html = render_item(&item(json!({"type": "sep", "size": 5})));
        assert!(html.contains("height:5px;"), "{html}");
    }

    #[test]
    fn test_separator_without_size() {
        let html = render_item(&ArtifactItem::Separator { size: None });
        assert!(html.contains("height:0;"));
    }

    #[test]
    fn test_separator_string_number_not_reinterpreted() {
        let html = render_item(&ArtifactItem::Separator {
            size: Some(SeparatorSize::Css("5".to_string())),
        });
        assert!(html.contains("height:5;"));
        assert!(!html.contains("5px"));
    }

    #[test]
    fn test_unknown_item_dumps_raw_entry() {
        let html = render_item(&item(json!({
            "type": "asdf", "text": "asdf", "href": "./files/#"
        })));
        assert!(html.contains("dlDataMalformed"));
        assert!(html.contains("\"asdf\""));
        assert!(html.contains("\"./files/#\""));
        assert!(html.contains("{\n \"type\": \"asdf\",\n \"text\": \"asdf\""));
    }

    #[test]
    fn test_unknown_item_escapes_markup() {
        let html = render_item(&item(json!({"type": "bogus", "text": "</div>"})));
        assert!(html.contains("&lt;/div&gt;"));
        assert_eq!(html.matches("</div>").count(), 2);
    }

    #[test]
    fn test_group_wraps_items_in_order() {
        let group = ArtifactGroup::new(vec![
            item(json!({"type": "text", "text": "first"})),
            item(json!({"type": "text", "text": "second"})),
        ]);
        let html = render_group("Binaries", &group);
        assert!(html.starts_with(
            "<div class=\"releaseData\"><div class=\"releaseDataTitle\">Binaries</div>"
        ));
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("class=\"dlDataItem\"").count(), 2);
    }

    #[test]
    fn test_empty_group_still_renders_block() {
        let html = render_group("Source", &ArtifactGroup::default());
        assert_eq!(
            html,
            "<div class=\"releaseData\"><div class=\"releaseDataTitle\">Source</div>\
             <div class=\"releaseDataContent\"></div></div>"
        );
    }

    #[test]
    fn test_source_only_release() {
        let release: Release = serde_json::from_value(json!({
            "title": "Release v0.2.0",
            "source": [{
                "type": "link", "text": "Source (zip)",
                "href": "./files/omw_src_v0.2.0.zip", "download": true
            }]
        }))
        .unwrap();
        let html = render_release(&release);
        assert!(html.contains("<div class=\"releaseTitle\">Release v0.2.0</div>"));
        assert_eq!(html.matches("class=\"releaseDataTitle\"").count(), 1);
        assert!(html.contains(">Source<"));
        assert!(!html.contains(">Binaries<"));
        assert!(!html.contains(">Documentation<"));
        assert!(html.contains("<a href=\"./files/omw_src_v0.2.0.zip\" download>Source (zip)</a>"));
        assert!(!html.contains(" id="));
    }

    #[test]
    fn test_release_group_order() {
        let release: Release = serde_json::from_value(json!({
            "doc": [],
            "source": [],
            "binaries": [],
            "title": "Release v0.1.0"
        }))
        .unwrap();
        let html = render_release(&release);
        let binaries = html.find(">Binaries<").unwrap();
        let source = html.find(">Source<").unwrap();
        let doc = html.find(">Documentation<").unwrap();
        assert!(binaries < source && source < doc);
    }

    #[test]
    fn test_render_catalog_is_idempotent() {
        let catalog = ReleaseCatalog::from_json_str(
            r#"[{"title": "Release v0.1.1", "doc": [{"type": "text", "text": "HTML"}]}]"#,
        )
        .unwrap();
        let mut target = String::from("<p>stale</p>");
        render_catalog(&catalog, &mut target);
        let once = target.clone();
        render_catalog(&catalog, &mut target);
        assert_eq!(target, once);
        assert!(!target.contains("stale"));
    }

    #[test]
    fn test_render_catalog_source_failure_keeps_target() {
        let mut target = String::from("previous content");
        let result = render_catalog_source("{\"not\": \"a list\"}", CatalogFormat::Json, &mut target);
        assert!(result.is_err());
        assert_eq!(target, "previous content");
    }

    #[test]
    fn test_render_catalog_keeps_release_order() {
        let catalog = ReleaseCatalog::from_json_str(
            r#"[{"title": "Release v0.1.1"}, {"title": "Release v0.1.0"}]"#,
        )
        .unwrap();
        let mut target = String::new();
        render_catalog(&catalog, &mut target);
        let newer = target.find("v0.1.1").unwrap();
        let older = target.find("v0.1.0").unwrap();
        assert!(newer < older);
    }
}
