//! Project resolution.
//!
//! [`ProjectResolver`] turns the configured, ordered list of known slugs into
//! display-ready [`ProjectRecord`]s. Each call reads the documents again;
//! nothing is cached.
//!
//! Document failures (missing file, no frontmatter, bad YAML) are logged and
//! the project is left out. Only [`ProjectResolver::load`] and
//! [`ProjectResolver::check`] hand the error back to the caller.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::assets::normalize_asset_path;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::frontmatter::{Document, SplitError};
use crate::project::{ProjectPage, ProjectRecord};
use crate::render::render_markdown;

/// Default document extension.
const DEFAULT_EXTENSION: &str = "mdx";

/// Default project asset prefix.
const DEFAULT_ASSET_PREFIX: &str = "/projects/";

/// Builds project records from documents on disk.
#[derive(Debug, Clone)]
pub struct ProjectResolver {
    /// Directory holding `<slug>.<extension>` documents.
    projects_dir: PathBuf,
    /// Document extension, without the dot.
    extension: String,
    /// Prefix marking project-relative asset paths.
    asset_prefix: String,
    /// Known slugs, in source order.
    slugs: Vec<String>,
}

impl ProjectResolver {
    /// Create a resolver over `projects_dir` for the given known slugs.
    #[must_use]
    pub fn new(projects_dir: impl Into<PathBuf>, slugs: Vec<String>) -> Self {
        Self {
            projects_dir: projects_dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            slugs,
        }
    }

    /// Create a resolver from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.projects_dir(), config.content.slugs.clone())
            .with_extension(config.content.extension.clone())
            .with_asset_prefix(config.assets.prefix.clone())
    }

    /// Set the document extension.
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Set the asset prefix used when normalizing image paths.
    #[must_use]
    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }

    /// Known slugs, in source order.
    ///
    /// Page routing should enumerate these rather than keep its own list.
    #[must_use]
    pub fn slugs(&self) -> &[String] {
        &self.slugs
    }

    /// Whether `slug` is a known project.
    #[must_use]
    pub fn is_known(&self, slug: &str) -> bool {
        self.slugs.iter().any(|s| s == slug)
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn projects_dir(&self) -> &Path {
        &self.projects_dir
    }

    /// Path of the document for `slug`.
    #[must_use]
    pub fn document_path(&self, slug: &str) -> PathBuf {
        self.projects_dir.join(format!("{slug}.{}", self.extension))
    }

    /// Load one project with its rendered body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownProject`] for slugs outside the known list, or
    /// the read/parse error for the document.
    pub fn load(&self, slug: &str) -> Result<ProjectPage> {
        let (record, body) = self.read_record(slug)?;
        let html = render_markdown(&body);
        Ok(ProjectPage { record, body, html })
    }

    /// Resolve one project, or `None` if it is unknown or fails to load.
    #[must_use]
    pub fn project(&self, slug: &str) -> Option<ProjectRecord> {
        self.read_record(slug)
            .map(|(record, _)| record)
            .map_err(|e| self.log_failure(slug, &e))
            .ok()
    }

    /// Resolve one project's detail page, or `None`.
    #[must_use]
    pub fn page(&self, slug: &str) -> Option<ProjectPage> {
        self.load(slug).map_err(|e| self.log_failure(slug, &e)).ok()
    }

    /// All resolvable projects, featured first.
    ///
    /// Within each tier the known-slug order is kept. No other key is
    /// applied; `period` does not affect order.
    #[must_use]
    pub fn all_projects(&self) -> Vec<ProjectRecord> {
        let (mut featured, rest): (Vec<_>, Vec<_>) = self
            .slugs
            .iter()
            .filter_map(|slug| self.project(slug))
            .partition(|record| record.featured);

        debug!(
            featured = featured.len(),
            other = rest.len(),
            known = self.slugs.len(),
            "Resolved projects"
        );
        featured.extend(rest);
        featured
    }

    /// Featured projects only, in known-slug order.
    #[must_use]
    pub fn featured_projects(&self) -> Vec<ProjectRecord> {
        self.all_projects()
            .into_iter()
            .filter(|record| record.featured)
            .collect()
    }

    /// Load every known slug and report each outcome.
    #[must_use]
    pub fn check(&self) -> Vec<(String, Result<ProjectRecord>)> {
        self.slugs
            .iter()
            .map(|slug| {
                let outcome = self.read_record(slug).map(|(record, _)| record);
                (slug.clone(), outcome)
            })
            .collect()
    }

    fn read_record(&self, slug: &str) -> Result<(ProjectRecord, String)> {
        if !self.is_known(slug) {
            return Err(Error::unknown_project(slug));
        }

        let path = self.document_path(slug);
        let contents = std::fs::read_to_string(&path).map_err(|source| Error::ContentRead {
            path: path.clone(),
            source,
        })?;

        let doc = Document::split(&contents).map_err(|e| match e {
            SplitError::Missing => Error::MissingFrontmatter { path: path.clone() },
            SplitError::Unterminated => Error::UnterminatedFrontmatter { path: path.clone() },
        })?;
        let mut record: ProjectRecord = doc.parse().map_err(|source| Error::Metadata {
            path: path.clone(),
            source,
        })?;

        record.slug = slug.to_string();
        let record =
            record.map_image_paths(|p| normalize_asset_path(p, slug, &self.asset_prefix));

        debug!(slug, path = %path.display(), "Loaded project");
        Ok((record, doc.body.to_string()))
    }

    fn log_failure(&self, slug: &str, err: &Error) {
        if err.is_unknown_project() {
            debug!(slug, "Not a known project");
        } else {
            warn!(
                slug,
                path = %self.document_path(slug).display(),
                error = %err,
                "Error loading project"
            );
        }
    }
}
