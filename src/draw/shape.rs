//! Polyline shape definition.

use super::color::Color;
use crate::util::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canvas-relative pointer position in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity of a polyline.
///
/// Shapes move between owners (the drawing machine, the committed frame and
/// the commands in the history), so they are referred to by id rather than by
/// reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An open polyline: an ordered sequence of vertices with a stroke.
///
/// While the polyline is being drawn its last point is the preview point that
/// follows the pointer; once committed every point is a vertex.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    id: ShapeId,
    points: Vec<Point>,
    color: Color,
    thick: f64,
}

impl Polyline {
    /// Starts a polyline at `origin` with two coincident points, so a
    /// zero-length segment exists before the second vertex is placed.
    pub fn start(id: ShapeId, origin: Point, color: Color, thick: f64) -> Self {
        Self {
            id,
            points: vec![origin, origin],
            color,
            thick,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub(crate) fn points_mut(&mut self) -> &mut Vec<Point> {
        &mut self.points
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Stroke width in pixels.
    pub fn thickness(&self) -> f64 {
        self.thick
    }

    /// Number of stored points, preview point included.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the axis-aligned bounding box expanded to cover the stroke width.
    pub fn bounding_box(&self) -> Option<Rect> {
        bounding_box_for_points(&self.points, self.thick)
    }
}

fn stroke_padding(thick: f64) -> i32 {
    let padding = (thick / 2.0).ceil() as i32;
    padding.max(1)
}

pub(crate) fn bounding_box_for_points(points: &[Point], thick: f64) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);

    for point in rest {
        min_x = min_x.min(point.x);
        max_x = max_x.max(point.x);
        min_y = min_y.min(point.y);
        max_y = max_y.max(point.y);
    }

    let padding = stroke_padding(thick);
    // A vertical or horizontal polyline still covers one pixel across.
    Rect::from_min_max(
        min_x.saturating_sub(padding),
        min_y.saturating_sub(padding),
        max_x.max(min_x.saturating_add(1)).saturating_add(padding),
        max_y.max(min_y.saturating_add(1)).saturating_add(padding),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};

    #[test]
    fn start_creates_degenerate_first_segment() {
        let line = Polyline::start(ShapeId(1), Point::new(10, 10), RED, 2.0);
        assert_eq!(line.points(), &[Point::new(10, 10), Point::new(10, 10)]);
        assert_eq!(line.point_count(), 2);
        assert_eq!(line.color(), RED);
    }

    #[test]
    fn bounding_box_expands_with_thickness() {
        let mut line = Polyline::start(ShapeId(1), Point::new(10, 20), BLACK, 6.0);
        line.points_mut()[1] = Point::new(30, 40);

        let rect = line.bounding_box().expect("polyline should have bounds");
        assert_eq!(rect.x, 7);
        assert_eq!(rect.y, 17);
        assert_eq!(rect.width, 26);
        assert_eq!(rect.height, 26);
    }

    #[test]
    fn degenerate_polyline_still_has_bounds() {
        let line = Polyline::start(ShapeId(1), Point::new(5, 5), BLACK, 1.0);
        let rect = line.bounding_box().expect("single point should have bounds");
        assert_eq!(rect, Rect::new(4, 4, 3, 3).unwrap());
    }

    #[test]
    fn bounding_box_clamps_at_coordinate_limits() {
        let edge = [Point::new(i32::MAX, 0), Point::new(i32::MAX, 10)];
        let far = bounding_box_for_points(&edge, 2.0).expect("edge polyline should have bounds");
        assert_eq!(far.x, i32::MAX - 1);
        assert_eq!(far.width, 1);

        let near = bounding_box_for_points(&[Point::new(i32::MIN, i32::MIN)], 2.0)
            .expect("edge point should have bounds");
        assert_eq!((near.x, near.y), (i32::MIN, i32::MIN));
        assert_eq!(near.width, 2);

        let across = [Point::new(i32::MIN, 0), Point::new(i32::MAX, 0)];
        let spanning =
            bounding_box_for_points(&across, 2.0).expect("spanning polyline should have bounds");
        assert_eq!(spanning.width, i32::MAX);
    }

    #[test]
    fn bounding_box_of_empty_points_is_none() {
        assert!(bounding_box_for_points(&[], 2.0).is_none());
    }
}
