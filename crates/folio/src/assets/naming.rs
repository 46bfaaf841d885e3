//! The public asset naming rule.
//!
//! Project assets live under `public/projects/<slug>/` but are served from a
//! single flat directory. Prefixing every file with its owning slug keeps two
//! projects' `cover.png` apart. The publisher and the path normalizer both
//! go through [`public_asset_name`], so the files on disk and the paths in
//! records cannot disagree.

/// Flat public file name for `file_name` owned by `slug`.
///
/// The stem and extension are kept as written (`a.b.png` stays stem `a.b`,
/// extension `png`), giving `"{slug}-{stem}.{ext}"`. A name without a dot
/// becomes `"{slug}-{file_name}"`.
#[must_use]
pub fn public_asset_name(slug: &str, file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) => format!("{slug}-{stem}.{ext}"),
        None => format!("{slug}-{file_name}"),
    }
}

/// Rewrite a project-relative asset path into its flat public path.
///
/// Paths not under `prefix` (external URLs, already-public files) come back
/// unchanged, as do paths with no file name after the last `/`. Matching
/// paths become `"/" + public_asset_name(slug, file_name)`.
///
/// ```
/// use folio::assets::normalize_asset_path;
///
/// assert_eq!(
///     normalize_asset_path("/projects/demo/cover.png", "demo", "/projects/"),
///     "/demo-cover.png"
/// );
/// assert_eq!(
///     normalize_asset_path("https://example.com/a.png", "demo", "/projects/"),
///     "https://example.com/a.png"
/// );
/// ```
#[must_use]
pub fn normalize_asset_path(path: &str, slug: &str, prefix: &str) -> String {
    let Some(rest) = path.strip_prefix(prefix) else {
        return path.to_string();
    };

    let file_name = rest.rsplit('/').next().unwrap_or_default();
    if file_name.is_empty() {
        return path.to_string();
    }

    format!("/{}", public_asset_name(slug, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PREFIX: &str = "/projects/";

    #[test]
    fn test_public_asset_name() {
        assert_eq!(public_asset_name("comsafe", "cover.png"), "comsafe-cover.png");
        assert_eq!(public_asset_name("comsafe", "a.b.png"), "comsafe-a.b.png");
        assert_eq!(public_asset_name("comsafe", "README"), "comsafe-README");
    }

    #[test]
    fn test_normalize_demo_cover() {
        assert_eq!(
            normalize_asset_path("/projects/demo/cover.png", "demo", PREFIX),
            "/demo-cover.png"
        );
    }

    #[test]
    fn test_normalize_uses_owner_slug_not_directory() {
        assert_eq!(
            normalize_asset_path("/projects/other/shot.jpg", "demo", PREFIX),
            "/demo-shot.jpg"
        );
    }

    #[test]
    fn test_normalize_nested_directories() {
        assert_eq!(
            normalize_asset_path("/projects/demo/img/large/hero.webp", "demo", PREFIX),
            "/demo-hero.webp"
        );
    }

    #[test]
    fn test_normalize_multiple_dots() {
        assert_eq!(
            normalize_asset_path("/projects/demo/a.b.png", "demo", PREFIX),
            "/demo-a.b.png"
        );
    }

    #[test]
    fn test_normalize_no_file_name() {
        assert_eq!(
            normalize_asset_path("/projects/demo/", "demo", PREFIX),
            "/projects/demo/"
        );
        assert_eq!(normalize_asset_path("/projects/", "demo", PREFIX), "/projects/");
    }

    #[test]
    fn test_normalize_pass_through() {
        for path in [
            "",
            "/cover.png",
            "projects/demo/cover.png",
            "/Projects/demo/cover.png",
            "https://cdn.example.com/projects/demo/cover.png",
        ] {
            assert_eq!(normalize_asset_path(path, "demo", PREFIX), path);
        }
    }

    #[test]
    fn test_normalize_custom_prefix() {
        assert_eq!(
            normalize_asset_path("/media/x/clip.png", "x", "/media/"),
            "/x-clip.png"
        );
        assert_eq!(
            normalize_asset_path("/projects/x/clip.png", "x", "/media/"),
            "/projects/x/clip.png"
        );
    }

    proptest! {
        #[test]
        fn prop_rewrite_keeps_slug_and_extension(
            slug in "[a-z0-9]{1,8}(-[a-z0-9]{1,8}){0,2}",
            dirs in prop::collection::vec("[a-z0-9_-]{1,8}", 0..3),
            stem in "[A-Za-z0-9_.-]{1,12}",
            ext in "[a-z0-9]{1,5}",
        ) {
            let mut path = String::from(PREFIX);
            for dir in &dirs {
                path.push_str(dir);
                path.push('/');
            }
            path.push_str(&format!("{stem}.{ext}"));

            let out = normalize_asset_path(&path, &slug, PREFIX);
            let slug_prefix = format!("/{slug}-");
            let ext_suffix = format!(".{ext}");
            prop_assert!(out.starts_with(&slug_prefix));
            prop_assert!(out.ends_with(&ext_suffix));
            prop_assert_eq!(out.matches('/').count(), 1);
        }

        #[test]
        fn prop_non_matching_paths_pass_through(
            path in "[^/].{0,40}|/[a-oq-z].{0,40}",
            slug in "[a-z]{1,8}",
        ) {
            prop_assert_eq!(normalize_asset_path(&path, &slug, PREFIX), path);
        }
    }
}
