use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::canvas::CanvasSurface;
use crate::error::FileError;
use crate::raster;

/// Extension appended when a save selection carries none.
pub const DEFAULT_EXTENSION: &str = "png";

/// Resolves a save selection into a concrete path: a selection with no
/// extension (or an empty one, "drawing.") gets the default appended; an
/// existing extension is kept verbatim.
pub fn ensure_extension(selection: &str, default_ext: &str) -> PathBuf {
    let mut path = PathBuf::from(selection);
    match path.extension() {
        Some(ext) if !ext.is_empty() => {}
        _ => {
            path.set_extension(default_ext);
        }
    }
    path
}

/// Rasterizes the current surface and encodes it at `path`. The format is
/// chosen by the image crate from the path's extension.
pub fn export_snapshot(canvas: &CanvasSurface, path: &Path) -> Result<(), FileError> {
    let image = raster::snapshot(canvas);
    image.save(path).map_err(|source| FileError::Save {
        path: path.to_owned(),
        source,
    })?;
    log::info!(
        "saved {}x{} drawing to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Decodes the image at `path` into the RGBA raster used as the canvas base
/// layer.
pub fn load_backdrop(path: &Path) -> Result<RgbaImage, FileError> {
    let image = image::open(path)
        .map_err(|source| FileError::Load {
            path: path.to_owned(),
            source,
        })?
        .to_rgba8();
    log::info!(
        "loaded {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_gets_the_default() {
        assert_eq!(
            ensure_extension("drawing", DEFAULT_EXTENSION),
            PathBuf::from("drawing.png")
        );
        assert_eq!(
            ensure_extension("out/sketch", DEFAULT_EXTENSION),
            PathBuf::from("out/sketch.png")
        );
    }

    #[test]
    fn existing_extension_is_kept() {
        assert_eq!(
            ensure_extension("drawing.jpg", DEFAULT_EXTENSION),
            PathBuf::from("drawing.jpg")
        );
    }

    #[test]
    fn trailing_dot_counts_as_missing() {
        assert_eq!(
            ensure_extension("drawing.", DEFAULT_EXTENSION),
            PathBuf::from("drawing.png")
        );
    }
}
