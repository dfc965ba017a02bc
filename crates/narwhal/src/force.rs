use crate::error::{Error, Result};
use crate::particle::Point;

#[derive(Debug, Clone)]
pub struct ForceOptions {
    /// Canvas size; gravity pulls toward its center.
    pub width: f64,
    pub height: f64,
    /// Multiplier applied to each body's velocity every tick (`0 <= friction < 1`).
    pub friction: f64,
    /// Strength of the uniform pull toward the canvas center, scaled by alpha.
    pub gravity: f64,
    /// Repulsion strength per unit of squared radius.
    pub charge_scale: f64,
    /// Barnes–Hut opening criterion. A quadtree cell of width `w` at distance `d` is treated as a
    /// single body when `w / d < theta`. `0.0` disables the approximation.
    pub theta: f64,
    /// Alpha installed by [`crate::Simulation::start`].
    pub alpha_start: f64,
    /// Fraction of alpha lost every tick.
    pub alpha_decay: f64,
    /// The simulation stops once alpha falls below this value.
    pub alpha_min: f64,
    /// Lower bound for the distance used by the charge falloff.
    pub distance_min: f64,
}

impl Default for ForceOptions {
    fn default() -> Self {
        Self {
            width: 940.0,
            height: 600.0,
            friction: 0.9,
            gravity: 0.01,
            charge_scale: 0.125,
            theta: 0.8,
            alpha_start: 1.0,
            alpha_decay: 0.01,
            alpha_min: 0.005,
            distance_min: 1.0,
        }
    }
}

impl ForceOptions {
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Number of ticks between `start()` and the tick that reports convergence.
    pub fn ticks_to_converge(&self) -> usize {
        let ratio = self.alpha_min / self.alpha_start;
        let per_tick = (1.0 - self.alpha_decay).ln();
        (ratio.ln() / per_tick).floor().max(0.0) as usize + 1
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(message: impl Into<String>) -> Result<()> {
            Err(Error::InvalidOptions {
                message: message.into(),
            })
        }

        if !(self.width.is_finite() && self.width > 0.0)
            || !(self.height.is_finite() && self.height > 0.0)
        {
            return invalid(format!(
                "canvas size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if !(0.0..1.0).contains(&self.friction) {
            return invalid(format!("friction must be in [0, 1), got {}", self.friction));
        }
        if !self.gravity.is_finite() || !self.charge_scale.is_finite() {
            return invalid("gravity and charge_scale must be finite");
        }
        if !(self.theta.is_finite() && self.theta >= 0.0) {
            return invalid(format!("theta must be >= 0, got {}", self.theta));
        }
        if !(self.alpha_decay > 0.0 && self.alpha_decay < 1.0) {
            return invalid(format!(
                "alpha_decay must be in (0, 1), got {}",
                self.alpha_decay
            ));
        }
        if !(self.alpha_min > 0.0 && self.alpha_start > self.alpha_min) {
            return invalid(format!(
                "expected 0 < alpha_min < alpha_start, got alpha_min={} alpha_start={}",
                self.alpha_min, self.alpha_start
            ));
        }
        if !(self.distance_min.is_finite() && self.distance_min >= 0.0) {
            return invalid(format!(
                "distance_min must be >= 0, got {}",
                self.distance_min
            ));
        }
        Ok(())
    }
}
