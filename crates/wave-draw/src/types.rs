//! Common types and tuning constants for wave-draw
//!
//! This module contains the fundamental types shared by the bucket
//! reduction pass and the geometry emission step, plus the named tuning
//! constants that control the reduction heuristics.

/// Audio sample type (32-bit float amplitude, typically in `[-1, 1]`)
pub type Sample = f32;

/// Coordinate type for all emitted geometry
pub type Coord = f64;

/// Collected bucket values, one entry per rendered bar
pub type Buckets = Vec<Sample>;

/// Minimum within-bucket scan stride.
///
/// The stride grows with the bucket size (see [`STRIDE_BUCKET_DIVISOR`])
/// but never drops below this, so small buckets are scanned exhaustively.
pub const MIN_STEP_COUNT: usize = 1;

/// Minimum height of an emitted bar in output units.
///
/// A silent bucket still renders as a hairline instead of disappearing.
pub const MIN_LINE_HEIGHT: Coord = 2.0;

/// Divisor that bounds per-bucket scan cost.
///
/// A bucket spanning `n` samples is probed with stride
/// `max(MIN_STEP_COUNT, n / STRIDE_BUCKET_DIVISOR)`, capping the work at
/// roughly this many probes per bucket no matter how far the view is
/// zoomed out. 720 matches typical on-screen bucket counts; there is no
/// adaptive policy.
pub const STRIDE_BUCKET_DIVISOR: usize = 720;

/// One bar of waveform geometry, handed to the draw sink.
///
/// The origin sits at the bucket's horizontal offset; the bar is
/// vertically centered about the canvas mid-line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DrawData {
    /// Left edge of the bar
    pub x: Coord,
    /// Top edge of the bar
    pub y: Coord,
    /// Bar width (the configured line width)
    pub width: Coord,
    /// Bar height, floor-clamped to [`MIN_LINE_HEIGHT`]
    pub height: Coord,
}
