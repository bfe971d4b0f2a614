//! Rendering errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read font '{}': {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a usable TrueType/OpenType font", path.display())]
    InvalidFont { path: PathBuf },

    #[error("nothing to render: the snippet has no lines")]
    EmptyCanvas,

    #[error("cannot encode image: {0}")]
    Encode(#[from] image::ImageError),
}
