use std::path::PathBuf;

/// Errors from the save/load boundary. Decode and encode failures come from
/// the image codec; everything else is plain I/O.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("could not save drawing to {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("could not open image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
