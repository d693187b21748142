//! Row bands for parallel rendering.
//!
//! The image is divided into horizontal strips of whole rows that can be
//! rendered independently with rayon, each writing only its own rows.

use std::ops::Range;

/// A contiguous range of image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Position of this band, top to bottom
    pub index: usize,
    /// First row (inclusive)
    pub start_row: u32,
    /// Last row (exclusive)
    pub end_row: u32,
}

impl Band {
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row
    }
}

/// Split `height` rows into at most `count` bands.
///
/// Bands are as even as possible (sizes differ by at most one row, larger
/// bands first), never empty, and cover `0..height` exactly in order. A
/// zero-height image yields no bands.
pub fn split_rows(height: u32, count: usize) -> Vec<Band> {
    if height == 0 {
        return Vec::new();
    }

    let count = count.clamp(1, height as usize) as u32;
    let base = height / count;
    let extra = height % count;

    let mut bands = Vec::with_capacity(count as usize);
    let mut start_row = 0;
    for index in 0..count {
        let rows = base + u32::from(index < extra);
        bands.push(Band {
            index: index as usize,
            start_row,
            end_row: start_row + rows,
        });
        start_row += rows;
    }

    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_covers(bands: &[Band], height: u32) {
        let mut next = 0;
        for (i, band) in bands.iter().enumerate() {
            assert_eq!(band.index, i);
            assert_eq!(band.start_row, next);
            assert!(band.row_count() > 0);
            next = band.end_row;
        }
        assert_eq!(next, height);
    }

    #[test]
    fn test_split_exact_fit() {
        let bands = split_rows(768, 8);
        assert_eq!(bands.len(), 8);
        assert!(bands.iter().all(|b| b.row_count() == 96));
        assert_covers(&bands, 768);
    }

    #[test]
    fn test_split_uneven() {
        let bands = split_rows(10, 4);
        let sizes: Vec<u32> = bands.iter().map(Band::row_count).collect();

        assert_eq!(sizes, vec![3, 3, 2, 2]);
        assert_covers(&bands, 10);
    }

    #[test]
    fn test_more_bands_than_rows() {
        let bands = split_rows(3, 16);
        assert_eq!(bands.len(), 3);
        assert_covers(&bands, 3);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(split_rows(0, 4).is_empty());

        // Zero bands is treated as one
        let bands = split_rows(5, 0);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].rows(), 0..5);
    }
}
