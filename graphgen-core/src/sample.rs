//! Exclusion-aware uniform sampling of distinct integers.
//!
//! Draws `k` distinct values uniformly from `[lo, hi)` while skipping a
//! sorted exclusion set, without materializing the complement. The raw draws
//! land in a range shrunk by `k` and by the exclusion count; sorting and the
//! `+i` shift spread collisions into distinct values, and the `+j` shift hops
//! over exclusions, each hop pushing later samples one position higher.

use tracing::debug;

use crate::{error::SampleError, rng::XorShift64};

/// Draw `k` distinct integers uniformly from `[lo, hi)`, avoiding
/// `exclusions`.
///
/// The exclusion list does not need to be sorted or deduplicated; values
/// outside the range are ignored. The output is strictly increasing.
///
/// # Errors
/// Returns [`SampleError::EmptyRange`] when `lo > hi` and
/// [`SampleError::TooManySamples`] when fewer than `k` values remain in the
/// range once the exclusions are removed.
pub fn sample_excluding(
    rng: &mut XorShift64,
    k: u64,
    lo: u64,
    hi: u64,
    exclusions: Vec<u64>,
) -> Result<Vec<u64>, SampleError> {
    if lo > hi {
        return Err(SampleError::EmptyRange { lo, hi });
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut exclusions = exclusions;
    exclusions.sort_unstable();
    exclusions.dedup();
    exclusions.retain(|value| (lo..hi).contains(value));

    let excluded = exclusions.len() as u64;
    let available = (hi - lo).saturating_sub(excluded);
    if available < k {
        return Err(SampleError::TooManySamples {
            requested: k,
            lo,
            hi,
            excluded,
        });
    }

    debug!(k, lo, hi, excluded, "drawing exclusion-aware sample");

    // The reduced range collapses when the sample fills the complement
    // exactly; every raw draw is then the lower bound and the shift walk
    // enumerates the whole complement.
    let top = hi - k - excluded;
    let count = usize::try_from(k).unwrap_or(usize::MAX);
    let mut draws: Vec<u64> = (0..count)
        .map(|_| if top > lo { rng.randrange(lo, top) } else { lo })
        .collect();
    draws.sort_unstable();

    let mut out = Vec::with_capacity(count);
    let mut hops = 0usize;
    for (index, draw) in draws.into_iter().enumerate() {
        let mut value = draw + index as u64 + hops as u64;
        while hops < exclusions.len() && exclusions[hops] <= value {
            hops += 1;
            value += 1;
        }
        out.push(value);
    }
    Ok(out)
}

/// A one-shot sampler over `[lo, hi)` with an optional exclusion set.
///
/// # Examples
/// ```
/// use graphgen_core::{RangeSampler, XorShift64};
///
/// let mut rng = XorShift64::new(1);
/// let sample = RangeSampler::new(3, 0, 10)
///     .exclude(vec![2, 5])
///     .draw(&mut rng)
///     .expect("eight candidates remain for three samples");
/// let values: Vec<u64> = sample.collect();
/// assert_eq!(values.len(), 3);
/// assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
/// assert!(values.iter().all(|v| *v != 2 && *v != 5 && *v < 10));
/// ```
#[derive(Clone, Debug)]
pub struct RangeSampler {
    k: u64,
    lo: u64,
    hi: u64,
    exclusions: Vec<u64>,
}

impl RangeSampler {
    /// Configure a sampler for `k` values in `[lo, hi)`.
    #[must_use]
    pub const fn new(k: u64, lo: u64, hi: u64) -> Self {
        Self {
            k,
            lo,
            hi,
            exclusions: Vec::new(),
        }
    }

    /// Attach an exclusion set; order and duplicates do not matter.
    #[must_use]
    pub fn exclude(mut self, values: Vec<u64>) -> Self {
        self.exclusions = values;
        self
    }

    /// Draw the sample, consuming the configuration.
    ///
    /// # Errors
    /// Propagates the failures of [`sample_excluding`].
    pub fn draw(self, rng: &mut XorShift64) -> Result<RangeSample, SampleError> {
        let values = sample_excluding(rng, self.k, self.lo, self.hi, self.exclusions)?;
        Ok(RangeSample {
            values: values.into_iter(),
        })
    }
}

/// The finite, non-restartable ascending sequence produced by a
/// [`RangeSampler`].
#[derive(Clone, Debug)]
pub struct RangeSample {
    values: std::vec::IntoIter<u64>,
}

impl Iterator for RangeSample {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.values.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl ExactSizeIterator for RangeSample {}
