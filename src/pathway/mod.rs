mod polyline;

pub use polyline::PolylinePathway;

use crate::math::{Point3, Vector3};

/// Result of mapping a point to its nearest location on a pathway.
#[derive(Debug, Clone, Copy)]
pub struct PathProjection {
    /// The nearest point lying on the pathway.
    pub on_path: Point3,
    /// Unit direction of the segment nearest to the query point.
    pub tangent: Vector3,
    /// Signed distance from the tube surface; negative means the query
    /// point is inside the tube.
    pub outside: f64,
    /// Index of the winning segment, or `None` for an empty pathway.
    pub segment: Option<usize>,
}

/// Trait for tube-shaped routes through 3D space.
///
/// A pathway maps arbitrary points to their nearest on-path location and
/// converts between points and scalar distances along the route. This
/// polyline-free contract admits other shapes (e.g. a spline pathway)
/// behind the same queries.
pub trait Pathway {
    /// Returns the first waypoint, or `None` for an empty pathway.
    fn first_point(&self) -> Option<&Point3>;

    /// Returns the last waypoint, or `None` for an empty pathway.
    fn last_point(&self) -> Option<&Point3>;

    /// Returns the total length of the pathway.
    fn total_length(&self) -> f64;

    /// Returns the number of segment slots, including the sentinel slot
    /// for the first waypoint.
    fn segment_count(&self) -> usize;

    /// Maps a point to the nearest on-path point, tangent, and signed
    /// outside distance.
    fn map_point_to_path(&self, point: &Point3) -> PathProjection;

    /// Maps a point to the scalar distance along the pathway of its
    /// nearest projection.
    fn map_point_to_path_distance(&self, point: &Point3) -> f64;

    /// Maps a scalar distance along the pathway back to a 3D point,
    /// clamping to the endpoints or wrapping around a cyclic route.
    fn map_path_distance_to_point(&self, distance: f64) -> Point3;
}
