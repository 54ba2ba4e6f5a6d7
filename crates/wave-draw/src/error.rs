//! Error types for wave-draw

use thiserror::Error;

/// Errors raised for precondition violations.
///
/// All variants are caller errors. Degenerate-but-valid inputs (an empty
/// buffer, a buffer shorter than one bucket) are not errors; they simply
/// produce zero buckets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Zoom factor below 1, NaN, or non-finite
    #[error("Invalid zoom factor {zoom_factor}: must be finite and >= 1")]
    InvalidZoomFactor { zoom_factor: f64 },

    /// Converter given a non-positive view width
    #[error("Invalid view width {view_width}: must be > 0")]
    InvalidViewWidth { view_width: f64 },

    /// Line width plus spacing is non-positive, the per-bar stride would divide by zero
    #[error("Invalid bar stride: line_width {line_width} + spacing {spacing} must be > 0")]
    InvalidStride { line_width: f64, spacing: f64 },

    /// Negative or non-finite layout parameter
    #[error("Invalid layout parameter {name} = {value}: must be finite and >= 0")]
    InvalidLayout { name: &'static str, value: f64 },
}

/// Result type for wave-draw operations
pub type DrawResult<T> = Result<T, DrawError>;
