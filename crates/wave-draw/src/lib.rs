//! Waveform bar geometry from raw audio buffers
//!
//! This crate reduces an audio sample buffer into a compact sequence of
//! vertical bar rectangles for waveform display, at an arbitrary zoom
//! level. An audio buffer may contain millions of samples while a screen
//! shows a few hundred bars, so amplitude is reduced per visible column
//! with a strided max-amplitude scan that bounds work even for very large
//! buffers.
//!
//! ## Architecture
//!
//! The caller provides:
//! - The decoded sample buffer (a borrowed slice, never copied)
//! - A zoom factor, directly or derived via [`compute_zoom_factor`]
//! - Bar layout and canvas dimensions
//! - A sink that receives one rectangle per bar and does the painting
//!
//! This crate handles:
//! - Bucket reduction with performance-bounded striding ([`buckets`])
//! - Bar geometry with minimum-height clamping ([`drawer`])
//! - Zoom factor / view width conversion ([`zoom`])
//!
//! ## Usage
//!
//! ```
//! use wave_draw::Drawer;
//!
//! let samples = vec![0.5f32; 7200];
//! let drawer = Drawer::new(&samples, 10.0)
//!     .setup_wave(2.0, 1.0)
//!     .setup_dimensions(2160.0, 100.0)
//!     .build()
//!     .unwrap();
//!
//! drawer.draw(|rect, index| {
//!     // hand `rect` to the UI layer
//!     let _ = (rect, index);
//! });
//! ```
//!
//! Rendering, audio decoding, and UI event handling live entirely on the
//! caller's side of the sink boundary.

pub mod buckets;
pub mod drawer;
pub mod error;
pub mod types;
pub mod zoom;

// Re-export commonly used items
pub use buckets::{collect_buckets, compute_buckets, BucketScan};
pub use drawer::{Drawer, DrawerBuilder};
pub use error::{DrawError, DrawResult};
pub use types::{
    Buckets, Coord, DrawData, Sample,
    // Tuning constants
    MIN_LINE_HEIGHT, MIN_STEP_COUNT, STRIDE_BUCKET_DIVISOR,
};
pub use zoom::{compute_view_width, compute_zoom_factor};
