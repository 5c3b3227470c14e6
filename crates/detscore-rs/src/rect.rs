//! Axis-aligned rectangles and the overlap test used for detection matching.

use crate::error::{Error, Result};

/// Fraction of either rectangle's own area the intersection must cover for
/// the containment test. Deployment value.
pub const DEFAULT_MATCH_THRESH: f64 = 0.75;

/// Minimum intersection-over-union for the general overlap test. Deployment
/// value.
pub const DEFAULT_OVERLAP_THRESH: f64 = 0.33;

/// An axis-aligned rectangle, origin top-left.
///
/// Dimensions are validated at construction and never negative. Zero-area
/// rectangles are valid values; they overlap nothing, not even themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Create a rectangle, rejecting negative dimensions.
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Result<Self> {
        if width < 0 || height < 0 {
            return Err(Error::InvalidRectangle { width, height });
        }
        Ok(Rect {
            left,
            top,
            width,
            height,
        })
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Area in pixels, widened to `i64` so large rectangles cannot overflow.
    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Decide whether `self` and `other` denote the same detected object.
    ///
    /// The intersection is computed by axis-aligned clipping; an empty
    /// intersection never matches, regardless of thresholds. Otherwise the
    /// rectangles match if the intersection covers at least `match_thresh`
    /// of either rectangle's own area (one rectangle mostly containing the
    /// other), or if the intersection-over-union reaches `overlap_thresh`
    /// (two similarly sized, partially overlapping rectangles).
    ///
    /// Thresholds are not validated; callers pass values in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use detscore_rs::Rect;
    ///
    /// let a = Rect::new(0, 0, 10, 10).unwrap();
    /// let b = Rect::new(2, 2, 2, 2).unwrap();
    /// assert!(a.overlaps(&b, 0.75, 0.33));
    /// ```
    pub fn overlaps(&self, other: &Rect, match_thresh: f64, overlap_thresh: f64) -> bool {
        let ileft = self.left.max(other.left);
        let iright = self.right().min(other.right());
        if ileft >= iright {
            return false;
        }
        let itop = self.top.max(other.top);
        let ibottom = self.bottom().min(other.bottom());
        if itop >= ibottom {
            return false;
        }

        let area_i = (iright - ileft) as i64 * (ibottom - itop) as i64;
        let area_a = self.area();
        if area_i as f64 >= match_thresh * area_a as f64 {
            return true;
        }
        let area_b = other.area();
        if area_i as f64 >= match_thresh * area_b as f64 {
            return true;
        }
        let area_u = area_a + area_b - area_i;
        area_i as f64 >= overlap_thresh * area_u as f64
    }
}

/// Drop rectangles that overlap an earlier, already-kept rectangle.
///
/// Detectors emit near-duplicate windows around the same object; this is the
/// keep-first greedy pass that reduces them to one rectangle each before
/// scoring.
pub fn suppress_overlapping(rects: &[Rect], match_thresh: f64, overlap_thresh: f64) -> Vec<Rect> {
    let mut kept: Vec<Rect> = Vec::new();
    for rect in rects {
        if !kept
            .iter()
            .any(|other| rect.overlaps(other, match_thresh, overlap_thresh))
        {
            kept.push(*rect);
        }
    }
    kept
}
