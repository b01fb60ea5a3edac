//! Resource loader seam.
//!
//! The loader is an external collaborator: it decides how an image is
//! fetched and whether it could be decoded. The page only consumes its
//! failure signal.

use std::path::PathBuf;

use crate::ImageAsset;

/// An image resource could not be fetched or decoded.
#[derive(Debug, thiserror::Error)]
pub enum AssetLoadFailure {
    /// No file behind the URL.
    #[error("Image not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but its type is not an image.
    #[error("Not an image ({mime}): {}", path.display())]
    NotAnImage {
        /// Resolved file path.
        path: PathBuf,
        /// Guessed MIME type.
        mime: String,
    },
    /// Zero-byte file.
    #[error("Empty image: {}", .0.display())]
    Empty(PathBuf),
    /// The file header does not match its image type.
    #[error("Cannot decode {mime} image: {}", path.display())]
    Undecodable {
        /// Resolved file path.
        path: PathBuf,
        /// Image type the header was checked against.
        mime: String,
    },
    /// The URL cannot be served by this loader (external or escaping the root).
    #[error("Invalid asset URL: {0}")]
    InvalidUrl(String),
    /// I/O error while reading the file.
    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        /// Resolved file path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Loader-specific failure without a filesystem cause.
    #[error("Image unavailable: {0}")]
    Unavailable(String),
}

/// External resource loader.
///
/// Implementations must be callable from several threads at once; each call
/// concerns exactly one asset.
pub trait AssetLoader: Send + Sync {
    /// Try to load the asset's resource.
    ///
    /// `Ok(())` means the image can be shown; the caller does nothing.
    fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure>;
}

impl<L: AssetLoader + ?Sized> AssetLoader for &L {
    fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure> {
        (**self).load(asset)
    }
}

impl<L: AssetLoader + ?Sized> AssetLoader for std::sync::Arc<L> {
    fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure> {
        (**self).load(asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl AssetLoader for Rejecting {
        fn load(&self, asset: &ImageAsset) -> Result<(), AssetLoadFailure> {
            Err(AssetLoadFailure::Unavailable(asset.id().to_owned()))
        }
    }

    #[test]
    fn test_error_messages() {
        let err = AssetLoadFailure::NotFound(PathBuf::from("static/img/a.png"));
        assert_eq!(err.to_string(), "Image not found: static/img/a.png");

        let err = AssetLoadFailure::NotAnImage {
            path: PathBuf::from("static/img/a.txt"),
            mime: "text/plain".to_owned(),
        };
        assert_eq!(err.to_string(), "Not an image (text/plain): static/img/a.txt");
    }

    #[test]
    fn test_loader_through_arc_and_ref() {
        let asset = ImageAsset::new("a", "/img/a.png", "");
        let loader = std::sync::Arc::new(Rejecting);

        assert!(loader.load(&asset).is_err());
        assert!((&Rejecting).load(&asset).is_err());
    }
}
