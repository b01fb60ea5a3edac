//! Static file lookup under a root directory.

use std::path::{Component, Path, PathBuf};

use crate::AssetLoadFailure;

/// Map a page-relative URL (e.g. `/img/hero.png?v=2`) to a file under `root`.
///
/// Query strings and fragments are dropped. External URLs and paths that
/// would leave `root` are rejected.
pub fn resolve_url(root: &Path, url: &str) -> Result<PathBuf, AssetLoadFailure> {
    if url.starts_with("http://")
        || url.starts_with("https://")
        || url.starts_with("//")
        || url.starts_with("data:")
    {
        return Err(AssetLoadFailure::InvalidUrl(url.to_owned()));
    }

    let path_part = url.split(['?', '#']).next().unwrap_or_default();
    let relative = Path::new(path_part.trim_start_matches('/'));

    let mut resolved = root.to_path_buf();
    let mut depth = 0usize;
    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                resolved.push(segment);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(AssetLoadFailure::InvalidUrl(url.to_owned()));
            }
        }
    }

    if depth == 0 {
        return Err(AssetLoadFailure::InvalidUrl(url.to_owned()));
    }

    Ok(resolved)
}

/// Return the MIME type string for the given file path.
pub fn mime_for(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_owned()
}
