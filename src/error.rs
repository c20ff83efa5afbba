//! Error types for canvas construction and state operations.

use thiserror::Error;

/// Errors reported by the graphics layer.
///
/// Drawing calls themselves are fire-and-forget and never return these;
/// only construction, texture loading, explicit state operations
/// (transform-stack pop) and snapshot export can fail.
#[derive(Debug, Error)]
pub enum GraphicsError {
    /// Popping the transform stack while nothing is pushed.
    #[error("Stack is empty")]
    EmptyStack,

    /// Cairo refused to create the surface or drawing context.
    #[error("Cairo backend error: {0}")]
    Backend(#[from] cairo::Error),

    /// PNG texture data could not be decoded.
    #[error("Failed to decode texture: {0}")]
    Texture(cairo::IoError),

    /// Canvas snapshot could not be written out.
    #[error("Failed to export canvas: {0}")]
    Snapshot(cairo::IoError),
}
