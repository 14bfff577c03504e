//! Error types for the gallery library.
//!
//! Configuration mistakes (empty slide lists, zero intervals) are reported at
//! construction time. Runtime navigation is total except for `go_to`, which
//! rejects an out-of-range index instead of clamping it.

use std::path::PathBuf;

/// Errors from building or driving the hero carousel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    /// A deck needs at least one slide.
    #[error("slide deck is empty")]
    EmptyDeck,

    /// Two slides share the same id.
    #[error("duplicate slide id {0}")]
    DuplicateSlideId(u32),

    /// `go_to` was called with an index the deck does not have.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    /// The auto-advance period must be positive.
    #[error("carousel period must be greater than zero")]
    ZeroPeriod,
}

/// Errors from validating command line configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The auto-advance period must be positive.
    #[error("slide interval must be greater than zero")]
    ZeroInterval,

    /// The window needs a visible area.
    #[error("window size {width}x{height} is invalid")]
    InvalidWindowSize { width: i32, height: i32 },

    /// The assets path exists but is not a directory.
    #[error("assets path {0:?} is not a directory")]
    AssetsNotDirectory(PathBuf),
}

/// Errors from submitting the contact or newsletter forms.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email field does not look like an address.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// Errors from looking up catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No artwork with this id is in the collection.
    #[error("artwork {0} is not in the collection")]
    UnknownArtwork(u32),
}

/// Errors from reading local image assets.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Reading the file failed.
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not an image type we can decode.
    #[error("unsupported image type for {0:?}")]
    UnsupportedType(PathBuf),
}
