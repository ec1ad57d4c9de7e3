// Asset management system
//
// Loads animation frame sequences and sound effects from the on-disk
// asset layout. Loading is all-or-nothing: a failure here aborts entity
// construction instead of producing a degraded entity.

mod library;
mod loader;

pub use library::{AnimationSet, Frame};
pub use loader::{AssetLoader, AssetType};

/// Asset loading errors
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("No animation folders under {0}")]
    NoAnimations(String),

    #[error("Unknown animation: {0}")]
    UnknownAnimation(String),

    #[error("Animation '{0}' has no frames")]
    EmptySequence(String),

    #[error("Frame name is not numeric: {0}")]
    InvalidFrameName(String),

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
