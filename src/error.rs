//! Error types for connected-texture resolution and variant packing.

use thiserror::Error;

/// Result type alias using CtmError.
pub type Result<T> = std::result::Result<T, CtmError>;

/// Main error type for content loading and packing.
///
/// Everything here is a configuration error: it is reported at the call
/// boundary and never retried. Out-of-range tile lookups are programmer
/// errors and panic instead.
#[derive(Error, Debug)]
pub enum CtmError {
    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read or process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// A submap grid must have at least one row and one column.
    #[error("Invalid submap grid: {rows} rows x {cols} columns")]
    InvalidGrid { rows: u32, cols: u32 },

    /// A submap is smaller than the grid its connection method addresses.
    #[error("Submap {sprite} is {cols}x{rows}, method {method} needs {need_cols}x{need_rows}")]
    SubmapTooSmall {
        sprite: String,
        cols: u32,
        rows: u32,
        method: String,
        need_cols: u32,
        need_rows: u32,
    },

    /// Slot set capacity must be at least one.
    #[error("Invalid slot set capacity: {0}")]
    InvalidCapacity(usize),

    /// A block was built without any variations.
    #[error("Block {0} must have at least one variation")]
    EmptyRequest(String),

    /// A variation is malformed (e.g. empty name).
    #[error("Invalid variation: {0}")]
    InvalidVariant(String),

    /// Two variations of one block share a name.
    #[error("Duplicate variation {name} in block {block}")]
    DuplicateVariant { block: String, name: String },

    /// A feature refers to a parent that does not exist.
    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    /// Features name each other as parents in a loop.
    #[error("Feature parent cycle through: {0}")]
    FeatureCycle(String),

    /// A registry name was registered twice.
    #[error("Block already registered: {0}")]
    DuplicateBlock(String),

    /// Two connected textures were attached to one texture location.
    #[error("Texture already registered: {0}")]
    DuplicateTexture(String),

    /// Two features of a manifest share a name.
    #[error("Duplicate feature: {0}")]
    DuplicateFeature(String),
}
