//! Waveform drawer
//!
//! Turns bucket values into positioned bar rectangles and hands them to a
//! caller-supplied sink. The sink is the sole rendering boundary; this
//! module computes geometry only and never paints.

use crate::buckets::BucketScan;
use crate::error::{DrawError, DrawResult};
use crate::types::{Coord, DrawData, Sample, MIN_LINE_HEIGHT};

/// Stepwise builder for a [`Drawer`].
///
/// Every parameter defaults to zero; [`build`](Self::build) validates the
/// whole configuration at once, so a partially configured builder can
/// never be drawn by accident.
#[derive(Debug, Clone)]
pub struct DrawerBuilder<'a> {
    samples: &'a [Sample],
    zoom_factor: f64,
    line_width: Coord,
    spacing: Coord,
    width: Coord,
    height: Coord,
}

impl<'a> DrawerBuilder<'a> {
    /// Set the horizontal bar geometry: bar width and the gap between bars.
    pub fn setup_wave(mut self, line_width: Coord, spacing: Coord) -> Self {
        self.line_width = line_width;
        self.spacing = spacing;
        self
    }

    /// Set the available drawing area. Height determines the maximum bar
    /// height; width is informational (bars past it are not clipped).
    pub fn setup_dimensions(mut self, width: Coord, height: Coord) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Validate the configuration and produce an immutable [`Drawer`].
    ///
    /// Fails fast on a zoom factor below 1 or any negative or non-finite
    /// layout parameter.
    pub fn build(self) -> DrawResult<Drawer<'a>> {
        for (name, value) in [
            ("line_width", self.line_width),
            ("spacing", self.spacing),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DrawError::InvalidLayout { name, value });
            }
        }

        // Validates the zoom factor and fixes the bucket layout up front
        let scan = BucketScan::new(self.samples, self.zoom_factor)?;

        Ok(Drawer {
            scan,
            zoom_factor: self.zoom_factor,
            line_width: self.line_width,
            spacing: self.spacing,
            width: self.width,
            height: self.height,
        })
    }
}

/// Immutable waveform drawer.
///
/// Holds a non-owning view of the caller's sample buffer together with a
/// validated zoom factor and layout. [`draw`](Self::draw) may be called
/// any number of times and always produces the identical rectangle
/// sequence; nothing is mutated between passes.
#[derive(Debug, Clone)]
pub struct Drawer<'a> {
    scan: BucketScan<'a>,
    zoom_factor: f64,
    line_width: Coord,
    spacing: Coord,
    width: Coord,
    height: Coord,
}

impl<'a> Drawer<'a> {
    /// Start configuring a drawer over `samples` at `zoom_factor`
    /// (samples represented per rendered unit, at least 1).
    pub fn new(samples: &'a [Sample], zoom_factor: f64) -> DrawerBuilder<'a> {
        DrawerBuilder {
            samples,
            zoom_factor,
            line_width: 0.0,
            spacing: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// The validated zoom factor
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Number of bars a draw pass will emit
    pub fn bucket_count(&self) -> usize {
        self.scan.bucket_count()
    }

    /// Configured canvas width (informational, bars are not clipped to it)
    pub fn canvas_width(&self) -> Coord {
        self.width
    }

    /// Configured canvas height
    pub fn canvas_height(&self) -> Coord {
        self.height
    }

    /// Run one reduction-and-emission pass, invoking `func` once per bar
    /// in increasing bucket-index order.
    ///
    /// A buffer shorter than one bucket emits nothing and returns
    /// normally. Amplitude zero still yields a bar of
    /// [`MIN_LINE_HEIGHT`] so silence renders as a hairline.
    pub fn draw<F>(&self, mut func: F)
    where
        F: FnMut(DrawData, usize),
    {
        let done = self.try_draw::<std::convert::Infallible, _>(|data, index| {
            func(data, index);
            Ok(())
        });
        match done {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Like [`draw`](Self::draw), but with a fallible sink.
    ///
    /// The first sink error aborts the pass and propagates unchanged; no
    /// further buckets are scanned. A sink can use this to cancel a very
    /// large pass cooperatively.
    pub fn try_draw<E, F>(&self, mut func: F) -> Result<(), E>
    where
        F: FnMut(DrawData, usize) -> Result<(), E>,
    {
        let scan = self.scan.clone();
        log::debug!(
            "Draw pass: {} buckets of {} samples, probe step {}",
            scan.bucket_count(),
            scan.bucket_sample_count(),
            scan.step(),
        );

        let x_offset = self.line_width + self.spacing;
        let y_center = self.height * 0.5;

        for (bucket_index, value) in scan.enumerate() {
            let line_height = (self.height * value as Coord).max(MIN_LINE_HEIGHT);

            let data = DrawData {
                x: bucket_index as Coord * x_offset,
                y: y_center - line_height * 0.5,
                width: self.line_width,
                height: line_height,
            };

            func(data, bucket_index)?;
        }

        Ok(())
    }
}
