//! `folio` - Content pipeline for a portfolio site
//!
//! This library turns per-project documents (YAML frontmatter plus a Markdown
//! body) into display-ready project records, and keeps the flat public asset
//! directory in step with the paths those records point at.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod logging;
pub mod project;
pub mod render;
pub mod resolver;

pub use assets::{normalize_asset_path, public_asset_name, AssetPublisher, PublishReport};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use project::{MediaItem, MediaKind, ProjectPage, ProjectRecord, SeoInfo, TeamSize};
pub use resolver::ProjectResolver;
