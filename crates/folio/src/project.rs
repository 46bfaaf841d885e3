//! Project record types.
//!
//! A [`ProjectRecord`] is the display-ready form of one project document.
//! Field names follow the documents (`teamSize`, `applicationCategory`), so
//! records serialize back out in the same shape consumers already expect.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Team size as written in a document: a head count or free text like "3-5".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeamSize {
    /// A plain number.
    Count(u64),
    /// Anything else.
    Text(String),
}

impl std::fmt::Display for TeamSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// Kind of a gallery entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A still image; its `src` is flattened into the public directory.
    Image,
    /// A video; its `src` is left as written.
    Video,
    /// Any kind the resolver does not interpret.
    #[serde(other)]
    Other,
}

/// One gallery entry.
///
/// Sub-fields are not validated; missing ones stay `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MediaItem {
    /// Image or video.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
    /// Asset path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Alt text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Caption title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Caption body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// External link for the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl MediaItem {
    /// Whether this entry is an image.
    #[must_use]
    pub fn is_image(&self) -> bool {
        self.kind == Some(MediaKind::Image)
    }
}

/// Structured-data hints carried through from the document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoInfo {
    /// Schema type, e.g. `SoftwareApplication`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Application category.
    pub application_category: String,
    /// Operating system.
    pub operating_system: String,
}

/// A display-ready portfolio project.
///
/// Built fresh from its document on every read and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectRecord {
    /// Stable identifier, assigned from the known slug list.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// One-line summary.
    pub summary: String,
    /// Longer description.
    pub description: String,
    /// Time span, free text.
    pub period: String,
    /// Display state such as "active" or "completed".
    pub status: String,
    /// Role on the project.
    pub role: String,
    /// Team size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<TeamSize>,
    /// Technologies, in display order.
    pub stack: Vec<String>,
    /// Link kind (github, demo, cad, youtube, ...) to URL, in document order.
    pub links: IndexMap<String, String>,
    /// Achievements.
    pub impact: Vec<String>,
    /// Listed first and shown with more prominence.
    pub featured: bool,
    /// Cover asset path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Media gallery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<MediaItem>>,
    /// Free-text labels.
    pub tags: Vec<String>,
    /// Structured-data hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoInfo>,
}

impl ProjectRecord {
    /// Look up a link by kind.
    #[must_use]
    pub fn link(&self, kind: &str) -> Option<&str> {
        self.links.get(kind).map(String::as_str)
    }

    /// Rewrite the cover image and every image gallery entry with `rewrite`.
    ///
    /// Videos and untyped entries are left alone.
    #[must_use]
    pub fn map_image_paths(mut self, rewrite: impl Fn(&str) -> String) -> Self {
        if let Some(image) = self.image.as_mut() {
            *image = rewrite(image);
        }
        if let Some(gallery) = self.gallery.as_mut() {
            for item in gallery.iter_mut().filter(|item| item.is_image()) {
                if let Some(src) = item.src.as_mut() {
                    *src = rewrite(src);
                }
            }
        }
        self
    }
}

/// A project plus its rendered body, for the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPage {
    /// The record.
    pub record: ProjectRecord,
    /// Body text as written.
    pub body: String,
    /// Body rendered to an HTML fragment.
    pub html: String,
}
