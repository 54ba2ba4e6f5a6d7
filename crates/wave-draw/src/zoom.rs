//! Zoom factor / view width conversion
//!
//! Two stateless functions relating "zoom factor" (samples represented
//! per output unit) and "view width" (output units needed to display the
//! whole buffer), given the horizontal bar geometry. They are exact
//! algebraic inverses of each other whenever the forward direction does
//! not hit the clamp-to-1 floor.

use crate::error::{DrawError, DrawResult};
use crate::types::{Coord, Sample};

/// Calculate the zoom factor that fits the whole buffer into `view_width`.
///
/// `view_width / (line_width + spacing)` is the number of bars that fit
/// in the view; dividing the sample count by that gives samples-per-bar.
/// The result is floored at 1 so the buffer is never stretched beyond one
/// sample per bar (no upsampling past source resolution).
///
/// Fails fast on a non-positive `view_width` or a non-positive bar stride
/// (`line_width + spacing`), both of which would divide by zero.
pub fn compute_zoom_factor(
    samples: &[Sample],
    view_width: Coord,
    line_width: Coord,
    spacing: Coord,
) -> DrawResult<f64> {
    if !(view_width > 0.0) || !view_width.is_finite() {
        return Err(DrawError::InvalidViewWidth { view_width });
    }
    let x_offset = line_width + spacing;
    if !(x_offset > 0.0) || !x_offset.is_finite() {
        return Err(DrawError::InvalidStride {
            line_width,
            spacing,
        });
    }

    let num_bars = view_width / x_offset;
    let res = samples.len() as f64 / num_bars;

    // At least one sample per rendered unit
    Ok(res.max(1.0))
}

/// Calculate the view width needed to display the whole buffer at `zoom_factor`.
///
/// `(N / zoom_factor)` is the number of bars the buffer reduces to; each
/// bar occupies `line_width + spacing` output units.
pub fn compute_view_width(
    samples: &[Sample],
    zoom_factor: f64,
    line_width: Coord,
    spacing: Coord,
) -> DrawResult<Coord> {
    if !(zoom_factor >= 1.0) || !zoom_factor.is_finite() {
        return Err(DrawError::InvalidZoomFactor { zoom_factor });
    }

    let num_samples = samples.len() as f64;
    Ok((num_samples / zoom_factor) * (line_width + spacing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_factor_basic() {
        // 7200 samples into a 2160-unit view with 3-unit bars: 720 bars,
        // 10 samples each
        let samples = vec![0.0f32; 7200];
        let zoom = compute_zoom_factor(&samples, 2160.0, 2.0, 1.0).unwrap();
        assert_eq!(zoom, 10.0);
    }

    #[test]
    fn test_zoom_factor_never_below_one() {
        // 10 samples spread over a huge view would need upsampling;
        // the factor must clamp to 1 instead
        let samples = vec![0.0f32; 10];
        let zoom = compute_zoom_factor(&samples, 100_000.0, 2.0, 1.0).unwrap();
        assert_eq!(zoom, 1.0, "Zoom factor must never drop below 1");

        let empty: Vec<Sample> = Vec::new();
        let zoom = compute_zoom_factor(&empty, 800.0, 2.0, 1.0).unwrap();
        assert_eq!(zoom, 1.0, "Empty buffer still clamps to 1");
    }

    #[test]
    fn test_round_trip() {
        // compute_view_width(compute_zoom_factor(vw)) == vw whenever the
        // forward call did not hit the clamp-to-1 floor
        let samples = vec![0.0f32; 1_000_000];
        for &vw in &[800.0, 1280.0, 2160.0, 333.5] {
            let zoom = compute_zoom_factor(&samples, vw, 2.0, 1.0).unwrap();
            assert!(zoom > 1.0, "Test premise: forward call must not clamp");
            let back = compute_view_width(&samples, zoom, 2.0, 1.0).unwrap();
            assert!(
                (back - vw).abs() < 1e-6,
                "Round trip should recover the view width: got {back}, expected {vw}"
            );
        }
    }

    #[test]
    fn test_view_width_basic() {
        let samples = vec![0.0f32; 7200];
        let vw = compute_view_width(&samples, 10.0, 2.0, 1.0).unwrap();
        assert_eq!(vw, 2160.0);
    }

    #[test]
    fn test_zero_divisors_rejected() {
        let samples = vec![0.0f32; 100];

        assert_eq!(
            compute_zoom_factor(&samples, 0.0, 2.0, 1.0),
            Err(DrawError::InvalidViewWidth { view_width: 0.0 })
        );
        assert_eq!(
            compute_zoom_factor(&samples, 800.0, 0.0, 0.0),
            Err(DrawError::InvalidStride {
                line_width: 0.0,
                spacing: 0.0
            })
        );
        assert!(matches!(
            compute_view_width(&samples, 0.0, 2.0, 1.0),
            Err(DrawError::InvalidZoomFactor { .. })
        ));
        assert!(matches!(
            compute_view_width(&samples, 0.5, 2.0, 1.0),
            Err(DrawError::InvalidZoomFactor { .. })
        ));
        assert!(matches!(
            compute_view_width(&samples, f64::NAN, 2.0, 1.0),
            Err(DrawError::InvalidZoomFactor { .. })
        ));
    }
}
