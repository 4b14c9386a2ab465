use crate::error::{PolypathError, Result};
use crate::math::segment::project_point_to_segment;
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{PathProjection, Pathway};

/// A tube-shaped polyline pathway through 3D space.
///
/// Built from an ordered waypoint list; each segment between consecutive
/// waypoints carries a precomputed length and unit direction. Slot 0 of the
/// segment tables is a zero-length, zero-direction sentinel for the first
/// waypoint, so segment index `i` is the edge from waypoint `i-1` to
/// waypoint `i`. For cyclic pathways, the first waypoint is appended again
/// as the closing waypoint during construction.
#[derive(Debug, Clone)]
pub struct PolylinePathway {
    points: Vec<Point3>,
    lengths: Vec<f64>,
    directions: Vec<Vector3>,
    radius: f64,
    cyclic: bool,
    total_length: f64,
}

impl PolylinePathway {
    /// Creates a pathway from an ordered waypoint list.
    ///
    /// An empty list is valid and yields an empty pathway. When `cyclic`,
    /// a copy of the first waypoint is appended as the closing point so
    /// the loop is geometrically continuous.
    ///
    /// # Errors
    ///
    /// Returns an error if `radius` is negative.
    pub fn new(points: &[Point3], radius: f64, cyclic: bool) -> Result<Self> {
        if radius < 0.0 {
            return Err(PolypathError::NegativeRadius(radius));
        }

        let capacity = points.len() + usize::from(cyclic);
        let mut pathway = Self {
            points: Vec::with_capacity(capacity),
            lengths: Vec::with_capacity(capacity),
            directions: Vec::with_capacity(capacity),
            radius,
            cyclic,
            total_length: 0.0,
        };

        for point in points {
            pathway.add_point(*point);
        }
        if cyclic {
            if let Some(first) = points.first().copied() {
                pathway.add_point(first);
            }
        }

        Ok(pathway)
    }

    /// Appends one waypoint, computing its incoming segment's length and
    /// direction and adding to the running total. Append-only; earlier
    /// entries are never mutated. O(1) per point.
    pub fn add_point(&mut self, point: Point3) {
        if let Some(last) = self.points.last() {
            let delta = point - last;
            let length = delta.norm();
            let direction = if length < TOLERANCE {
                // Coincident waypoints: keep a zero-length segment.
                Vector3::zeros()
            } else {
                delta / length
            };
            self.lengths.push(length);
            self.directions.push(direction);
            self.total_length += length;
        } else {
            // Sentinel slot for the first waypoint: no incoming edge.
            self.lengths.push(0.0);
            self.directions.push(Vector3::zeros());
        }
        self.points.push(point);
    }

    /// Returns the tube radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns whether the pathway wraps around from its end to its start.
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Returns the waypoints, including any cyclic closing point.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }
}

impl Pathway for PolylinePathway {
    fn first_point(&self) -> Option<&Point3> {
        self.points.first()
    }

    fn last_point(&self) -> Option<&Point3> {
        self.points.last()
    }

    fn total_length(&self) -> f64 {
        self.total_length
    }

    fn segment_count(&self) -> usize {
        self.points.len()
    }

    /// Scans every real segment (the slot-0 sentinel is skipped) for the
    /// endpoint-clamped projection nearest to `point`. The first segment
    /// achieving the strict minimum wins, so equal-distance ties keep the
    /// lower index.
    fn map_point_to_path(&self, point: &Point3) -> PathProjection {
        let mut min_distance = f64::INFINITY;
        let mut on_path = Point3::origin();
        let mut tangent = Vector3::zeros();
        let mut segment = None;

        for i in 1..self.points.len() {
            let proj = project_point_to_segment(
                point,
                &self.points[i - 1],
                &self.directions[i],
                self.lengths[i],
            );
            if proj.distance < min_distance {
                min_distance = proj.distance;
                on_path = proj.point;
                tangent = self.directions[i];
                segment = Some(i);
            }
        }

        PathProjection {
            on_path,
            tangent,
            outside: (on_path - point).norm() - self.radius,
            segment,
        }
    }

    fn map_point_to_path_distance(&self, point: &Point3) -> f64 {
        if self.points.len() < 2 {
            return 0.0;
        }

        let mut min_distance = f64::INFINITY;
        let mut segment_length_total = 0.0;
        let mut path_distance = 0.0;

        for i in 1..self.points.len() {
            let proj = project_point_to_segment(
                point,
                &self.points[i - 1],
                &self.directions[i],
                self.lengths[i],
            );
            if proj.distance < min_distance {
                min_distance = proj.distance;
                path_distance = segment_length_total + proj.offset;
            }
            segment_length_total += self.lengths[i];
        }

        path_distance
    }

    fn map_path_distance_to_point(&self, distance: f64) -> Point3 {
        let mut remaining = distance;

        if self.cyclic {
            if self.total_length < TOLERANCE {
                return self.points.first().copied().unwrap_or_else(Point3::origin);
            }
            remaining = distance - self.total_length * (distance / self.total_length).floor();
        } else {
            if distance < 0.0 {
                return self.points.first().copied().unwrap_or_else(Point3::origin);
            }
            if distance >= self.total_length {
                return self.points.last().copied().unwrap_or_else(Point3::origin);
            }
        }

        for i in 1..self.points.len() {
            let length = self.lengths[i];
            // Strict skip: a distance landing exactly on a segment boundary
            // interpolates within the first segment whose end reaches it.
            if length < remaining {
                remaining -= length;
            } else {
                let ratio = if length < TOLERANCE {
                    0.0
                } else {
                    remaining / length
                };
                return self.points[i - 1] + (self.points[i] - self.points[i - 1]) * ratio;
            }
        }

        self.points.last().copied().unwrap_or_else(Point3::origin)
    }
}
