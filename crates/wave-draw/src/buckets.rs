//! Bucket reduction for waveform display
//!
//! Downsamples an audio buffer into amplitude buckets, one per rendered
//! bar. Each bucket is the running maximum of absolute sample values over
//! its range, probed with a stride so that a fully zoomed-out view of a
//! multi-million-sample buffer still reduces in bounded time.
//!
//! ## Policy decisions
//!
//! - `bucket_sample_count` is the zoom factor **truncated** to an integer
//!   (the "many small buckets" variant, not round-to-nearest).
//! - `bucket_count = N / bucket_sample_count` with integer division.
//!   Remainder samples past the last full-bucket boundary are merged into
//!   the final bucket (its scan range extends to `N`), so the bucket
//!   count stays at exactly `floor(N / floor(zoom))` and no amplitude
//!   information is silently discarded.
//! - A buffer shorter than one bucket yields zero buckets. That is a
//!   valid degenerate input, not an error.

use crate::error::{DrawError, DrawResult};
use crate::types::{Buckets, Sample, MIN_STEP_COUNT, STRIDE_BUCKET_DIVISOR};

/// Strided max-amplitude scan over a sample buffer.
///
/// Yields one reduced value per bucket, in increasing bucket order. The
/// buffer is borrowed for the lifetime of the iterator; nothing is
/// copied.
#[derive(Debug, Clone)]
pub struct BucketScan<'a> {
    samples: &'a [Sample],
    bucket_sample_count: usize,
    bucket_count: usize,
    step: usize,
    bucket_index: usize,
}

impl<'a> BucketScan<'a> {
    /// Set up a scan of `samples` at `samples_per_bucket` (the zoom factor).
    ///
    /// Fails fast when `samples_per_bucket` truncates to zero or is not
    /// finite, both of which would divide by zero downstream.
    pub fn new(samples: &'a [Sample], samples_per_bucket: f64) -> DrawResult<Self> {
        if !samples_per_bucket.is_finite() || samples_per_bucket < 1.0 {
            return Err(DrawError::InvalidZoomFactor {
                zoom_factor: samples_per_bucket,
            });
        }

        let bucket_sample_count = samples_per_bucket as usize;
        let bucket_count = samples.len() / bucket_sample_count;

        // The step grows with the bucket size. This preserves detail when
        // zoomed in but bounds the scan to ~STRIDE_BUCKET_DIVISOR probes
        // per bucket when the buffer is very big.
        let step = MIN_STEP_COUNT.max(bucket_sample_count / STRIDE_BUCKET_DIVISOR);

        Ok(Self {
            samples,
            bucket_sample_count,
            bucket_count,
            step,
            bucket_index: 0,
        })
    }

    /// Number of full samples each bucket spans (zoom factor truncated)
    pub fn bucket_sample_count(&self) -> usize {
        self.bucket_sample_count
    }

    /// Total number of buckets this scan will yield
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Within-bucket probe stride
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for BucketScan<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.bucket_index >= self.bucket_count {
            return None;
        }

        let start = self.bucket_index * self.bucket_sample_count;
        // The final bucket absorbs any remainder samples
        let end = if self.bucket_index + 1 == self.bucket_count {
            self.samples.len()
        } else {
            start + self.bucket_sample_count
        };

        let max_sample_value = self.samples[start..end]
            .iter()
            .step_by(self.step)
            .fold(0.0, |acc: Sample, s| acc.max(s.abs()));

        self.bucket_index += 1;
        Some(max_sample_value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bucket_count - self.bucket_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BucketScan<'_> {}

/// Reduce `samples` into buckets, invoking `func(bucket_index, value)`
/// once per bucket in increasing index order.
pub fn compute_buckets<F>(
    samples: &[Sample],
    samples_per_bucket: f64,
    mut func: F,
) -> DrawResult<()>
where
    F: FnMut(usize, Sample),
{
    for (bucket_index, value) in BucketScan::new(samples, samples_per_bucket)?.enumerate() {
        func(bucket_index, value);
    }
    Ok(())
}

/// Reduce `samples` into a collected [`Buckets`] vector.
pub fn collect_buckets(samples: &[Sample], samples_per_bucket: f64) -> DrawResult<Buckets> {
    Ok(BucketScan::new(samples, samples_per_bucket)?.collect())
}
