//! BinaryMask - Foreground/background classification of a sample grid

/// Boolean mask parallel to a sampled luma grid; `true` marks foreground
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl BinaryMask {
    /// Create an all-background mask
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; width as usize * height as usize],
        }
    }

    /// Wrap row-major bits; `None` if the length does not match
    pub fn from_bits(width: u32, height: u32, bits: Vec<bool>) -> Option<Self> {
        if bits.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            bits,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major bits
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Value at (x, y); out of bounds reads as background
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[y as usize * self.width as usize + x as usize]
    }

    /// Set the value at (x, y); out of bounds writes are ignored
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width && y < self.height {
            self.bits[y as usize * self.width as usize + x as usize] = value;
        }
    }

    /// Set the value at a row-major index; out of bounds writes are ignored
    pub fn set_index(&mut self, index: usize, value: bool) {
        if let Some(bit) = self.bits.get_mut(index) {
            *bit = value;
        }
    }

    /// Number of foreground cells
    pub fn count_foreground(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut mask = BinaryMask::new(4, 3);
        assert_eq!(mask.len(), 12);
        mask.set(1, 2, true);
        mask.set(9, 9, true);
        assert!(mask.get(1, 2));
        assert!(!mask.get(9, 9));
        assert_eq!(mask.count_foreground(), 1);
    }

    #[test]
    fn test_from_bits() {
        assert!(BinaryMask::from_bits(2, 2, vec![true; 3]).is_none());
        let mask = BinaryMask::from_bits(2, 2, vec![true, false, false, true]).unwrap();
        assert!(mask.get(1, 1));
        assert!(!mask.get(1, 0));
    }
}
