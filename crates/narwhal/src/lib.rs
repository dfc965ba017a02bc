#![forbid(unsafe_code)]

//! Headless force-directed particle simulation.
//!
//! `narwhal` is used by `bubbles` as the chart's layout engine. It is runtime-agnostic: callers
//! drive it one [`Simulation::tick`] at a time (from a timer, an animation frame, or a plain loop)
//! and read positions back from the particles they handed over.
//!
//! Each tick applies, in order: alpha decay, a weak gravity toward the canvas center, pairwise
//! charge repulsion (Barnes–Hut approximated, see [`ForceOptions::theta`]), position Verlet
//! integration with friction, and finally the installed [`Displacement`] strategy.

pub mod error;
pub mod force;
pub mod particle;
pub mod quadtree;
pub mod simulation;

pub use error::{Error, Result};
pub use force::ForceOptions;
pub use particle::{Particle, Point};
pub use simulation::{Displacement, Simulation, Tick};
