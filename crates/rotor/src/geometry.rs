use crate::angle::pointer_angle_clockwise;
use crate::error::RotaryError;

/// A point in screen space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Bounding rectangle of a control, in the same space as pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn is_usable(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }

    /// `None` while the layout has no area, e.g. mid-reflow.
    pub fn center(&self) -> Option<Point> {
        self.is_usable().then(|| {
            Point::new(
                self.x + self.width / 2.0,
                self.y + self.height / 2.0,
            )
        })
    }

    /// Radius of the circle inscribed in the bounds.
    pub fn radius(&self) -> Option<f64> {
        self.is_usable()
            .then(|| self.width.min(self.height) / 2.0)
    }

    /// Clockwise angle of `point` around the center. A pointer sitting
    /// exactly on the center has no direction.
    pub fn angle_of(&self, point: Point) -> Result<f64, RotaryError> {
        let center = self.center().ok_or(RotaryError::GeometryUnavailable)?;
        if !point.x.is_finite() || !point.y.is_finite() || center == point {
            return Err(RotaryError::GeometryUnavailable);
        }
        Ok(pointer_angle_clockwise(center, point))
    }
}
