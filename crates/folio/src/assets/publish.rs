//! Copy per-project media into the flat public directory.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::naming::public_asset_name;
use crate::config::Config;
use crate::error::{Error, Result};

/// What happened to one asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PublishAction {
    /// Written to the public directory (or would be, in a dry run).
    Copied,
    /// Destination already holds identical bytes.
    Unchanged,
}

/// One published asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedAsset {
    /// Owning project directory name.
    pub slug: String,
    /// File under the project directory.
    pub source: PathBuf,
    /// File in the public directory.
    pub destination: PathBuf,
    /// URL path the site serves it from.
    pub public_path: String,
    /// Outcome.
    pub action: PublishAction,
}

/// Summary of a publish run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublishReport {
    /// Whether anything was actually written.
    pub dry_run: bool,
    /// Files copied.
    pub copied: usize,
    /// Files already up to date.
    pub unchanged: usize,
    /// Files ignored because their extension is not a media type.
    pub skipped: usize,
    /// Per-file detail, in directory then file name order.
    pub assets: Vec<PublishedAsset>,
}

/// Copies `<source_dir>/<slug>/<file>` to `<public_dir>/<slug>-<file>`.
#[derive(Debug, Clone)]
pub struct AssetPublisher {
    source_dir: PathBuf,
    public_dir: PathBuf,
    extensions: Vec<String>,
    known_slugs: Vec<String>,
    dry_run: bool,
}

impl AssetPublisher {
    /// Create a publisher for explicit directories.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            public_dir: public_dir.into(),
            extensions: Vec::new(),
            known_slugs: Vec::new(),
            dry_run: false,
        }
    }

    /// Create a publisher from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.asset_source_dir(), config.public_dir())
            .with_extensions(config.assets.extensions.clone())
            .with_known_slugs(config.content.slugs.clone())
    }

    /// Set the media extensions to copy (case-insensitive, no dot).
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Set the known slugs; other project directories are copied with a warning.
    #[must_use]
    pub fn with_known_slugs(mut self, slugs: Vec<String>) -> Self {
        self.known_slugs = slugs;
        self
    }

    /// Report without writing.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether `path` has one of the configured media extensions.
    #[must_use]
    pub fn is_media(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }

    /// Run the copy.
    ///
    /// A missing source directory yields an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be listed or a file cannot be
    /// hashed or copied.
    pub fn publish(&self) -> Result<PublishReport> {
        let mut report = PublishReport {
            dry_run: self.dry_run,
            ..PublishReport::default()
        };

        if !self.source_dir.is_dir() {
            info!(
                "Asset directory {} not found, nothing to publish",
                self.source_dir.display()
            );
            return Ok(report);
        }

        for project_dir in sorted_entries(&self.source_dir)? {
            if !project_dir.is_dir() {
                continue;
            }
            let Some(slug) = project_dir.file_name().and_then(|n| n.to_str()) else {
                warn!("Skipping non UTF-8 directory {}", project_dir.display());
                continue;
            };
            if !self.known_slugs.is_empty() && !self.known_slugs.iter().any(|s| s == slug) {
                warn!(slug, "Publishing assets for a project that is not in the slug list");
            }

            for source in sorted_entries(&project_dir)? {
                if !source.is_file() {
                    continue;
                }
                if !self.is_media(&source) {
                    debug!("Skipping non-media file {}", source.display());
                    report.skipped += 1;
                    continue;
                }
                let Some(file_name) = source.file_name().and_then(|n| n.to_str()) else {
                    report.skipped += 1;
                    continue;
                };

                let asset = self.publish_file(slug, file_name, &source)?;
                match asset.action {
                    PublishAction::Copied => report.copied += 1,
                    PublishAction::Unchanged => report.unchanged += 1,
                }
                report.assets.push(asset);
            }
        }

        info!(
            copied = report.copied,
            unchanged = report.unchanged,
            skipped = report.skipped,
            dry_run = self.dry_run,
            "Asset publish finished"
        );
        Ok(report)
    }

    fn publish_file(&self, slug: &str, file_name: &str, source: &Path) -> Result<PublishedAsset> {
        let public_name = public_asset_name(slug, file_name);
        let destination = self.public_dir.join(&public_name);

        let action = if destination.is_file() && same_contents(source, &destination)? {
            PublishAction::Unchanged
        } else {
            if !self.dry_run {
                fs::copy(source, &destination).map_err(|e| Error::AssetCopy {
                    from: source.to_path_buf(),
                    to: destination.clone(),
                    source: e,
                })?;
            }
            debug!("Copied {} -> {}", source.display(), destination.display());
            PublishAction::Copied
        };

        Ok(PublishedAsset {
            slug: slug.to_string(),
            source: source.to_path_buf(),
            destination,
            public_path: format!("/{public_name}"),
            action,
        })
    }
}

/// Directory entries sorted by path.
fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_err = |source: io::Error| Error::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };
    let mut entries = fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()
        .map_err(read_err)?;
    entries.sort();
    Ok(entries)
}

fn same_contents(a: &Path, b: &Path) -> Result<bool> {
    if fs::metadata(a)?.len() != fs::metadata(b)?.len() {
        return Ok(false);
    }
    Ok(file_hash(a)? == file_hash(b)?)
}

fn file_hash(path: &Path) -> Result<blake3::Hash> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn media_exts() -> Vec<String> {
        ["png", "jpg", "mp4"].into_iter().map(String::from).collect()
    }

    /// Lay out `public/projects/<slug>/<file>` with the given contents.
    fn site(files: &[(&str, &str, &str)]) -> (TempDir, AssetPublisher) {
        let dir = tempfile::tempdir().unwrap();
        let public = dir.path().join("public");
        let source = public.join("projects");
        for (slug, name, contents) in files {
            let project = source.join(slug);
            fs::create_dir_all(&project).unwrap();
            fs::write(project.join(name), contents).unwrap();
        }
        let publisher = AssetPublisher::new(source, public).with_extensions(media_exts());
        (dir, publisher)
    }

    #[test]
    fn test_copies_with_slug_prefix() {
        let (dir, publisher) = site(&[
            ("comsafe", "cover.png", "one"),
            ("linear-odo", "cover.png", "two"),
        ]);

        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 2);
        let public = dir.path().join("public");
        assert_eq!(fs::read(public.join("comsafe-cover.png")).unwrap(), b"one");
        assert_eq!(fs::read(public.join("linear-odo-cover.png")).unwrap(), b"two");
        assert_eq!(report.assets[0].public_path, "/comsafe-cover.png");
    }

    #[test]
    fn test_matches_normalized_record_path() {
        let (_dir, publisher) = site(&[("demo", "shot.v2.JPG", "x")]);

        let report = publisher.publish().unwrap();

        assert_eq!(
            report.assets[0].public_path,
            crate::assets::normalize_asset_path("/projects/demo/shot.v2.JPG", "demo", "/projects/")
        );
    }

    #[test]
    fn test_skips_non_media() {
        let (_dir, publisher) = site(&[("demo", "notes.txt", "x"), ("demo", "clip.mp4", "y")]);

        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.assets[0].destination.file_name().unwrap(), "demo-clip.mp4");
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let (_dir, publisher) = site(&[("demo", "cover.png", "same")]);

        publisher.publish().unwrap();
        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 0);
        assert_eq!(report.unchanged, 1);
        assert_eq!(report.assets[0].action, PublishAction::Unchanged);
    }

    #[test]
    fn test_changed_source_is_recopied() {
        let (dir, publisher) = site(&[("demo", "cover.png", "old")]);
        publisher.publish().unwrap();

        let source = dir.path().join("public/projects/demo/cover.png");
        fs::write(&source, b"new!").unwrap();
        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(
            fs::read(dir.path().join("public/demo-cover.png")).unwrap(),
            b"new!"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (dir, publisher) = site(&[("demo", "cover.png", "x")]);

        let report = publisher.dry_run(true).publish().unwrap();

        assert!(report.dry_run);
        assert_eq!(report.copied, 1);
        assert!(!dir.path().join("public/demo-cover.png").exists());
    }

    #[test]
    fn test_missing_source_dir_is_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        let publisher = AssetPublisher::new(dir.path().join("nope"), dir.path())
            .with_extensions(media_exts());

        let report = publisher.publish().unwrap();

        assert_eq!(report, PublishReport::default());
    }

    #[test]
    fn test_unknown_project_dir_still_published() {
        let (_dir, publisher) = site(&[("stray", "a.png", "x")]);
        let publisher = publisher.with_known_slugs(vec!["comsafe".into()]);

        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.assets[0].slug, "stray");
    }

    #[test]
    fn test_loose_files_in_source_root_ignored() {
        let (dir, publisher) = site(&[("demo", "a.png", "x")]);
        fs::write(dir.path().join("public/projects/loose.png"), b"y").unwrap();

        let report = publisher.publish().unwrap();

        assert_eq!(report.copied, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_is_media_case_insensitive() {
        let publisher = AssetPublisher::new("a", "b").with_extensions(media_exts());
        assert!(publisher.is_media(Path::new("x.PNG")));
        assert!(!publisher.is_media(Path::new("x.txt")));
        assert!(!publisher.is_media(Path::new("png")));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::default();
        config.content.root = PathBuf::from("/site");
        let publisher = AssetPublisher::from_config(&config);

        assert_eq!(publisher.source_dir, PathBuf::from("/site/public/projects"));
        assert_eq!(publisher.public_dir, PathBuf::from("/site/public"));
        assert!(publisher.is_media(Path::new("a.webm")));
    }
}
