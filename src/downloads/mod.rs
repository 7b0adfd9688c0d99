//! Release downloads page generation.
//!
//! A hand-authored [`ReleaseCatalog`] is rendered into the download sections
//! of a static page. Each release becomes a title block followed by its
//! Binaries, Source and Documentation groups (whichever are present), and each
//! group lists its items: text, links, spacers, or a visible diagnostic block
//! for entries that do not match any known shape.
//!
//! # Example
//!
//! ```
//! use omw_tools::downloads::{render_catalog, ReleaseCatalog};
//!
//! let catalog = ReleaseCatalog::from_json_str(r#"[
//!     { "title": "Release v0.2.0",
//!       "source": [{ "type": "link", "text": "Source (zip)",
//!                    "href": "./files/omw_src_v0.2.0.zip", "download": true }] }
//! ]"#).unwrap();
//!
//! let mut region = String::new();
//! render_catalog(&catalog, &mut region);
//! assert!(region.contains("Release v0.2.0"));
//! ```

mod catalog;
mod page;
mod render;
mod types;

pub use catalog::{CatalogFormat, Diagnostic, ReleaseSummary};
pub use page::{HostPage, PageRenderer};
pub use render::{
    render_catalog, render_catalog_markup, render_catalog_source, render_group, render_item,
    render_release, RenderTarget,
};
pub use types::{
    ArtifactGroup, ArtifactItem, GroupRole, Release, ReleaseCatalog, SeparatorSize,
};
