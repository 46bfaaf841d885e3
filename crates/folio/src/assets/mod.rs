//! Project asset paths and publishing.
//!
//! - **Naming**: [`public_asset_name`] is the one rule that maps a project's
//!   file to its flat public name.
//!
//! - **Normalizing**: [`normalize_asset_path`] rewrites asset paths found in
//!   project metadata with that rule.
//!
//! - **Publishing**: [`AssetPublisher`] copies the files themselves into the
//!   public directory under the same names.
//!
//! # Example
//!
//! ```
//! use folio::assets::{normalize_asset_path, public_asset_name};
//!
//! assert_eq!(public_asset_name("comsafe", "cover.png"), "comsafe-cover.png");
//! assert_eq!(
//!     normalize_asset_path("/projects/comsafe/cover.png", "comsafe", "/projects/"),
//!     "/comsafe-cover.png"
//! );
//! ```

mod naming;
mod publish;

pub use naming::{normalize_asset_path, public_asset_name};
pub use publish::{AssetPublisher, PublishAction, PublishReport, PublishedAsset};
