//! Luma histogram
//!
//! A fixed 256-bin histogram of 8-bit luma values, filled by the sampler and
//! consumed by threshold selection.

/// Number of bins in a luma histogram
pub const HISTOGRAM_BINS: usize = 256;

/// 256-bin histogram of luma values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LumaHistogram {
    bins: [u32; HISTOGRAM_BINS],
    total: u64,
}

impl Default for LumaHistogram {
    fn default() -> Self {
        Self::new()
    }
}

impl LumaHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self {
            bins: [0; HISTOGRAM_BINS],
            total: 0,
        }
    }

    /// Build a histogram from a slice of luma values
    pub fn from_values(values: &[u8]) -> Self {
        let mut hist = Self::new();
        for &v in values {
            hist.add(v);
        }
        hist
    }

    /// Count one occurrence of `value`
    #[inline]
    pub fn add(&mut self, value: u8) {
        self.bins[value as usize] += 1;
        self.total += 1;
    }

    /// Count for a single bin
    #[inline]
    pub fn count(&self, value: u8) -> u32 {
        self.bins[value as usize]
    }

    /// All bins
    pub fn bins(&self) -> &[u32; HISTOGRAM_BINS] {
        &self.bins
    }

    /// Sum of all bins
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Weighted sum of values, `sum(i * bins[i])`
    pub fn weighted_sum(&self) -> f64 {
        self.bins
            .iter()
            .enumerate()
            .map(|(i, &c)| i as f64 * c as f64)
            .sum()
    }

    /// Mean luma value, or `None` for an empty histogram
    pub fn mean(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.weighted_sum() / self.total as f64)
        }
    }

    /// Most frequent value (lowest on ties), or `None` for an empty histogram
    pub fn mode(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let mut best = 0usize;
        for (i, &c) in self.bins.iter().enumerate() {
            if c > self.bins[best] {
                best = i;
            }
        }
        Some(best as u8)
    }
}
