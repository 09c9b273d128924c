use crate::types::Point;

/// Circle in the mechanism plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Both intersection points with `other`, or `None` when the circles do
    /// not meet: centers further apart than the combined radii, one circle
    /// contained in the other (negative radicand), or coincident centers.
    ///
    /// For tangent circles both returned points coincide.
    pub fn intersect(&self, other: &Circle) -> Option<(Point, Point)> {
        let delta = other.center - self.center;
        let distance = delta.length();
        if distance == 0.0 {
            return None;
        }
        if distance > self.radius + other.radius {
            return None;
        }

        let alpha = (self.radius.powi(2) - other.radius.powi(2) + distance.powi(2))
            / (2.0 * distance);
        let radicand = self.radius.powi(2) - alpha.powi(2);
        if radicand < 0.0 {
            return None;
        }
        let beta = radicand.sqrt();

        let midpoint = self.center + delta * (alpha / distance);
        // perp(x, y) = (y, -x)
        let offset = Point::new(delta.y, -delta.x) * (beta / distance);
        Some((midpoint + offset, midpoint - offset))
    }
}
