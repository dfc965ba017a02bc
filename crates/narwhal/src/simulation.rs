use crate::error::Result;
use crate::force::ForceOptions;
use crate::particle::{Particle, Point};
use crate::quadtree::QuadTree;

/// Per-tick position adjustment applied after the physical forces.
///
/// Implementations receive the body index (stable for the lifetime of the simulation), the body
/// itself and the current alpha.
pub trait Displacement<N> {
    fn displace(&self, index: usize, node: &mut N, alpha: f64);
}

impl<N, F> Displacement<N> for F
where
    F: Fn(usize, &mut N, f64),
{
    fn displace(&self, index: usize, node: &mut N, alpha: f64) {
        self(index, node, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// Forces were applied; carries the alpha used for this tick.
    Advanced { alpha: f64 },
    /// Alpha dropped below `alpha_min` on this tick. The simulation is now stopped.
    Converged,
    /// The simulation was not running; nothing moved.
    Idle,
}

/// Force simulation over an owned set of bodies.
///
/// Positions live in the bodies themselves. Verlet state (the previous position of each body)
/// stays here, so velocities survive `stop()`/`start()` cycles and strategy swaps.
#[derive(Debug, Clone)]
pub struct Simulation<N, D> {
    nodes: Vec<N>,
    previous: Vec<Point>,
    options: ForceOptions,
    displacement: Option<D>,
    alpha: f64,
    running: bool,
    ticks: usize,
    // Scratch buffers reused across ticks.
    positions: Vec<Point>,
    charges: Vec<f64>,
}

impl<N, D> Simulation<N, D>
where
    N: Particle,
    D: Displacement<N>,
{
    pub fn new(nodes: Vec<N>, options: ForceOptions) -> Result<Self> {
        options.validate()?;
        let previous = nodes.iter().map(Particle::position).collect();
        let n = nodes.len();
        Ok(Self {
            nodes,
            previous,
            options,
            displacement: None,
            alpha: 0.0,
            running: false,
            ticks: 0,
            positions: Vec::with_capacity(n),
            charges: Vec::with_capacity(n),
        })
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    pub fn options(&self) -> &ForceOptions {
        &self.options
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks applied since the last `start()`.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn displacement(&self) -> Option<&D> {
        self.displacement.as_ref()
    }

    /// Swaps the per-tick strategy. Positions and velocities are left untouched.
    pub fn set_displacement(&mut self, displacement: D) {
        self.displacement = Some(displacement);
    }

    /// Re-heats the simulation from wherever the bodies currently are.
    pub fn start(&mut self) {
        self.alpha = self.options.alpha_start;
        self.running = true;
        self.ticks = 0;
        tracing::debug!(alpha = self.alpha, nodes = self.nodes.len(), "simulation started");
    }

    /// Halts ticking. Safe to call any number of times.
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(ticks = self.ticks, alpha = self.alpha, "simulation stopped");
        }
        self.alpha = 0.0;
        self.running = false;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.alpha *= 1.0 - self.options.alpha_decay;
        if self.alpha < self.options.alpha_min {
            tracing::debug!(ticks = self.ticks, "simulation converged");
            self.alpha = 0.0;
            self.running = false;
            return Tick::Converged;
        }
        let alpha = self.alpha;
        self.ticks += 1;

        self.apply_gravity(alpha);
        self.apply_charges(alpha);
        self.integrate();

        if let Some(displacement) = &self.displacement {
            for (i, node) in self.nodes.iter_mut().enumerate() {
                displacement.displace(i, node, alpha);
            }
        }

        Tick::Advanced { alpha }
    }

    /// Ticks until the simulation stops or `max_ticks` ticks were applied, calling `on_tick` with
    /// the bodies after every advancing tick. Returns the number of advancing ticks.
    pub fn run<F>(&mut self, max_ticks: usize, mut on_tick: F) -> usize
    where
        F: FnMut(&[N], f64),
    {
        let mut advanced = 0;
        while advanced < max_ticks {
            match self.tick() {
                Tick::Advanced { alpha } => {
                    advanced += 1;
                    on_tick(&self.nodes, alpha);
                }
                Tick::Converged | Tick::Idle => break,
            }
        }
        advanced
    }

    fn apply_gravity(&mut self, alpha: f64) {
        let k = alpha * self.options.gravity;
        if k == 0.0 {
            return;
        }
        let center = self.options.center();
        for node in &mut self.nodes {
            let p = node.position();
            node.set_position(Point::new(
                p.x + (center.x - p.x) * k,
                p.y + (center.y - p.y) * k,
            ));
        }
    }

    fn apply_charges(&mut self, alpha: f64) {
        let scale = alpha * self.options.charge_scale;
        if scale == 0.0 {
            return;
        }

        self.positions.clear();
        self.positions
            .extend(self.nodes.iter().map(Particle::position));
        self.charges.clear();
        self.charges
            .extend(self.nodes.iter().map(|n| scale * n.radius() * n.radius()));

        let Some(tree) = QuadTree::build(&self.positions, &self.charges) else {
            return;
        };
        let theta2 = self.options.theta * self.options.theta;
        let distance_min2 = self.options.distance_min * self.options.distance_min;

        // Moving the previous position backwards adds velocity away from the sources.
        for (i, prev) in self.previous.iter_mut().enumerate() {
            let push = tree.repulsion(i, theta2, distance_min2);
            prev.x -= push.x;
            prev.y -= push.y;
        }
    }

    fn integrate(&mut self) {
        let friction = self.options.friction;
        for (node, prev) in self.nodes.iter_mut().zip(self.previous.iter_mut()) {
            let p = node.position();
            let next = Point::new(
                p.x + (p.x - prev.x) * friction,
                p.y + (p.y - prev.y) * friction,
            );
            *prev = p;
            node.set_position(next);
        }
    }
}
