//! Filesystem-backed resource loader.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::static_files::{mime_for, resolve_url};
use crate::{AssetLoadFailure, AssetLoader, ImageAsset};

/// Number of leading bytes inspected to recognise an image header.
const SNIFF_LEN: usize = 12;

/// Loads assets from a static directory.
///
/// An asset URL such as `/img/hero.png` maps to `<root>/img/hero.png`. The
/// load fails when the file is missing, is not an image type, is empty, or its
/// header does not match the image type implied by its extension.
#[derive(Clone, Debug)]
pub struct FsAssetLoader {
    root: PathBuf,
}

impl FsAssetLoader {
    /// Create a loader rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Static directory this loader reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetLoader for FsAssetLoader {
    fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure> {
        let path = resolve_url(&self.root, asset.source_url())?;

        let mime = mime_for(asset.source_url().split(['?', '#']).next().unwrap_or_default());
        if !mime.starts_with("image/") {
            return Err(AssetLoadFailure::NotAnImage { path, mime });
        }

        let metadata = match std::fs::metadata(&path) {
            Ok(m) if m.is_file() => m,
            Ok(_) => return Err(AssetLoadFailure::NotFound(path)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(AssetLoadFailure::NotFound(path));
            }
            Err(source) => return Err(AssetLoadFailure::Io { path, source }),
        };
        if metadata.len() == 0 {
            return Err(AssetLoadFailure::Empty(path));
        }

        let header = match read_header(&path) {
            Ok(header) => header,
            Err(source) => return Err(AssetLoadFailure::Io { path, source }),
        };
        if !header_matches(&mime, &header) {
            return Err(AssetLoadFailure::Undecodable { path, mime });
        }

        tracing::trace!(asset = asset.id(), path = %path.display(), "Asset loaded");
        Ok(())
    }
}

fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut header = Vec::with_capacity(SNIFF_LEN);
    std::fs::File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    Ok(header)
}

/// Check magic bytes for raster formats; other image types are accepted as-is.
fn header_matches(mime: &str, header: &[u8]) -> bool {
    match mime {
        "image/png" => header.starts_with(b"\x89PNG\r\n\x1a\n"),
        "image/jpeg" => header.starts_with(&[0xFF, 0xD8, 0xFF]),
        "image/gif" => header.starts_with(b"GIF87a") || header.starts_with(b"GIF89a"),
        "image/webp" => header.len() >= 12 && &header[..4] == b"RIFF" && &header[8..12] == b"WEBP",
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    fn setup() -> (tempfile::TempDir, FsAssetLoader) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("img")).unwrap();
        let loader = FsAssetLoader::new(dir.path());
        (dir, loader)
    }

    #[test]
    fn test_load_valid_png() {
        let (dir, loader) = setup();
        std::fs::write(dir.path().join("img/hero.png"), PNG_HEADER).unwrap();

        let asset = ImageAsset::new("hero", "/img/hero.png", "");
        assert!(loader.load(&asset).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, loader) = setup();
        let asset = ImageAsset::new("hero", "/img/hero.png", "");

        let err = loader.load(&asset).unwrap_err();
        assert!(matches!(err, AssetLoadFailure::NotFound(_)));
    }

    #[test]
    fn test_load_directory_is_not_found() {
        let (dir, loader) = setup();
        std::fs::create_dir(dir.path().join("img/dir.png")).unwrap();
        let asset = ImageAsset::new("dir", "/img/dir.png", "");

        assert!(matches!(
            loader.load(&asset).unwrap_err(),
            AssetLoadFailure::NotFound(_)
        ));
    }

    #[test]
    fn test_load_not_an_image() {
        let (dir, loader) = setup();
        std::fs::write(dir.path().join("img/readme.txt"), "text").unwrap();
        let asset = ImageAsset::new("txt", "/img/readme.txt", "");

        let err = loader.load(&asset).unwrap_err();
        assert!(matches!(err, AssetLoadFailure::NotAnImage { ref mime, .. } if mime == "text/plain"));
    }

    #[test]
    fn test_load_empty_file() {
        let (dir, loader) = setup();
        std::fs::write(dir.path().join("img/empty.png"), b"").unwrap();
        let asset = ImageAsset::new("empty", "/img/empty.png", "");

        assert!(matches!(
            loader.load(&asset).unwrap_err(),
            AssetLoadFailure::Empty(_)
        ));
    }

    #[test]
    fn test_load_corrupt_png() {
        let (dir, loader) = setup();
        std::fs::write(dir.path().join("img/broken.png"), b"<html>404</html>").unwrap();
        let asset = ImageAsset::new("broken", "/img/broken.png", "");

        assert!(matches!(
            loader.load(&asset).unwrap_err(),
            AssetLoadFailure::Undecodable { .. }
        ));
    }

    #[test]
    fn test_load_svg_without_sniffing() {
        let (dir, loader) = setup();
        std::fs::write(dir.path().join("img/logo.svg"), "<svg/>").unwrap();
        let asset = ImageAsset::new("logo", "/img/logo.svg", "");

        assert!(loader.load(&asset).is_ok());
    }

    #[test]
    fn test_load_external_url() {
        let (_dir, loader) = setup();
        let asset = ImageAsset::new("cdn", "https://cdn.example.com/a.png", "");

        assert!(matches!(
            loader.load(&asset).unwrap_err(),
            AssetLoadFailure::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_load_does_not_touch_display_state() {
        let (_dir, loader) = setup();
        let asset = ImageAsset::new("hero", "/img/hero.png", "");

        let _ = loader.load(&asset);
        assert!(asset.is_visible());
    }

    #[test]
    fn test_header_matches() {
        assert!(header_matches("image/jpeg", &[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(header_matches("image/gif", b"GIF89a\x01\x00"));
        assert!(header_matches("image/webp", b"RIFF\0\0\0\0WEBPVP8 "));
        assert!(!header_matches("image/webp", b"RIFF\0\0\0\0WAVE"));
        assert!(header_matches("image/x-icon", b"anything"));
    }
}
