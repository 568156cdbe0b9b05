//! Contour is an ordered sequence of points: one path of a road centerline.
//!
//! Contours here are always **open**: the first and the last vertices are not connected. A path with fewer than two
//! vertices is valid but has no segments.

use crate::segment::Segment;

/// Sequence of points. See module level documentation for details.
pub trait Contour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over segments between consecutive points of the contour.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(self.iter_points())
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P: 'a, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        let next_point = self.points_iter.next()?;
        let prev_point = self.prev_point.replace(next_point);

        match prev_point {
            Some(prev) => Some(Segment(prev, next_point)),
            None => self.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Point2d;
    use crate::impls;

    #[test]
    fn segments_connect_consecutive_points() {
        let points = [
            Point2d::new(0.0, 0.0),
            Point2d::new(0.0, 1.0),
            Point2d::new(1.0, 1.0),
        ];
        let contour = impls::Contour::new(points.to_vec());

        let segments: Vec<_> = contour.iter_segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0], Segment(&points[0], &points[1]));
        assert_eq!(segments[1], Segment(&points[1], &points[2]));
    }

    #[test]
    fn short_contours_have_no_segments() {
        let single = impls::Contour::new(vec![Point2d::new(5.0, 5.0)]);
        assert_eq!(single.iter_segments().count(), 0);

        let empty = impls::Contour::<Point2d>::new(vec![]);
        assert_eq!(empty.iter_segments().count(), 0);
    }
}
