use crate::math::{Point3, Vector3};

/// Result of projecting a point onto a finite segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentProjection {
    /// The closest point on the segment.
    pub point: Point3,
    /// Offset along the segment, in `[0, length]`.
    pub offset: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Projects `point` onto the finite segment starting at `start`, running
/// along unit `direction` for `length`.
///
/// The projection is clamped to the segment's endpoints, never extrapolated.
/// A degenerate segment (zero length, zero direction) projects everything
/// onto `start` at offset 0.
#[must_use]
pub fn project_point_to_segment(
    point: &Point3,
    start: &Point3,
    direction: &Vector3,
    length: f64,
) -> SegmentProjection {
    let local = point - start;
    let offset = local.dot(direction).clamp(0.0, length);
    let closest = start + direction * offset;

    SegmentProjection {
        point: closest,
        offset,
        distance: (point - closest).norm(),
    }
}
