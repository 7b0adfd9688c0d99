//! Release catalog data model.
//!
//! Items are parsed leniently: anything that does not match one of the known
//! item shapes is kept as [`ArtifactItem::Unknown`] so it can be rendered as a
//! visible diagnostic instead of failing the whole catalog.

use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// One entry of an artifact group.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactItem {
    /// Plain author text, emitted verbatim.
    Text { text: String },
    /// Anchor to a release file or page.
    Link {
        text: String,
        href: String,
        download: bool,
        new_tab: bool,
    },
    /// Vertical spacer between items.
    Separator { size: Option<SeparatorSize> },
    /// Anything with a missing or unrecognized `type`, or with mistyped fields.
    Unknown { raw: Value },
}

/// Height of a separator item.
#[derive(Debug, Clone, PartialEq)]
pub enum SeparatorSize {
    /// A bare number, interpreted as pixels.
    Pixels(Number),
    /// A CSS length passed through untouched.
    Css(String),
}

impl SeparatorSize {
    /// CSS length for this size.
    pub fn to_css(&self) -> String {
        match self {
            // Whole floats print without a fraction: `5.0` -> `5px`.
            Self::Pixels(n) => match n.as_f64() {
                Some(value) if n.is_f64() => format!("{value}px"),
                _ => format!("{n}px"),
            },
            Self::Css(length) => length.clone(),
        }
    }
}

#[derive(Deserialize)]
struct TextFields {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LinkFields {
    text: Option<String>,
    href: Option<String>,
    download: Option<bool>,
    new_tab: Option<bool>,
}

impl ArtifactItem {
    /// Build an item from its raw JSON form. Never fails.
    pub fn from_value(raw: Value) -> Self {
        let tag = raw.get("type").and_then(Value::as_str);
        let known = match tag {
            Some("text") => TextFields::deserialize(&raw).ok().map(|f| Self::Text {
                text: f.text.unwrap_or_default(),
            }),
            Some("link") => LinkFields::deserialize(&raw).ok().map(|f| Self::Link {
                text: f.text.unwrap_or_default(),
                href: f.href.unwrap_or_default(),
                download: f.download.unwrap_or(false),
                new_tab: f.new_tab.unwrap_or(false),
            }),
            Some("sep") => separator_size(raw.get("size")).map(|size| Self::Separator { size }),
            _ => None,
        };
        known.unwrap_or(Self::Unknown { raw })
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// `None` when the size has a type that cannot describe a length.
fn separator_size(value: Option<&Value>) -> Option<Option<SeparatorSize>> {
    match value {
        None | Some(Value::Null) => Some(None),
        Some(Value::Number(n)) => Some(Some(SeparatorSize::Pixels(n.clone()))),
        Some(Value::String(s)) => Some(Some(SeparatorSize::Css(s.clone()))),
        Some(_) => None,
    }
}

impl<'de> Deserialize<'de> for ArtifactItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(Self::from_value(raw))
    }
}

/// Role of an artifact group inside a release, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    Binaries,
    Source,
    Documentation,
}

impl GroupRole {
    /// All roles in the order they are rendered.
    pub const ALL: [GroupRole; 3] = [Self::Binaries, Self::Source, Self::Documentation];

    /// Title shown above the group.
    pub fn label(self) -> &'static str {
        match self {
            Self::Binaries => "Binaries",
            Self::Source => "Source",
            Self::Documentation => "Documentation",
        }
    }

    /// Key of the group in catalog data.
    pub fn key(self) -> &'static str {
        match self {
            Self::Binaries => "binaries",
            Self::Source => "source",
            Self::Documentation => "doc",
        }
    }
}

/// Ordered items of one group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactGroup {
    pub items: Vec<ArtifactItem>,
}

impl ArtifactGroup {
    pub fn new(items: Vec<ArtifactItem>) -> Self {
        Self { items }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArtifactItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'de> Deserialize<'de> for ArtifactGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(values) => values.into_iter().map(ArtifactItem::from_value).collect(),
            // A group that is not a list still renders, as a single diagnostic.
            other => vec![ArtifactItem::Unknown { raw: other }],
        };
        Ok(Self { items })
    }
}

/// One versioned entry of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(deserialize_with = "lenient_title")]
    pub title: String,
    pub binaries: Option<ArtifactGroup>,
    pub source: Option<ArtifactGroup>,
    pub doc: Option<ArtifactGroup>,
}

impl Release {
    pub fn group(&self, role: GroupRole) -> Option<&ArtifactGroup> {
        match role {
            GroupRole::Binaries => self.binaries.as_ref(),
            GroupRole::Source => self.source.as_ref(),
            GroupRole::Documentation => self.doc.as_ref(),
        }
    }

    /// Present groups in rendering order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupRole, &ArtifactGroup)> {
        GroupRole::ALL
            .into_iter()
            .filter_map(|role| self.group(role).map(|group| (role, group)))
    }
}

/// `null` becomes an empty title, other non-strings their JSON text.
fn lenient_title<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(title) => title,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// All releases of the downloads page, newest first by convention.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseCatalog {
    pub releases: Vec<Release>,
}

impl ReleaseCatalog {
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Release> {
        self.releases.iter()
    }

    pub fn len(&self) -> usize {
        self.releases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}
