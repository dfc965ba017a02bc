#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A body the simulation can move.
///
/// The simulation only ever touches the position; velocity bookkeeping stays inside
/// [`crate::Simulation`]. `radius` drives the charge strength (`charge_scale * radius^2`), so
/// larger bodies push harder, in proportion to their area.
pub trait Particle {
    fn position(&self) -> Point;
    fn set_position(&mut self, position: Point);
    fn radius(&self) -> f64;
}

impl Particle for Point {
    fn position(&self) -> Point {
        *self
    }

    fn set_position(&mut self, position: Point) {
        *self = position;
    }

    fn radius(&self) -> f64 {
        1.0
    }
}
