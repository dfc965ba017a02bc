use bubbles_core::{Mode, ModeCatalog, Node, Particle, Point};
use narwhal::Displacement;

/// Per-tick pull of every bubble toward its mode target.
///
/// Each tick moves a body by `(target - position) * strength * alpha`, where `strength` is the
/// damper times the mode's boost.
#[derive(Debug, Clone, PartialEq)]
pub enum TargetPull {
    /// Everyone shares one target.
    Center { center: Point, strength: f64 },
    /// One target per body, indexed like the simulation's bodies.
    Split { targets: Vec<Point>, strength: f64 },
}

impl TargetPull {
    pub fn for_mode(
        catalog: &ModeCatalog,
        mode: Mode,
        nodes: &[Node],
    ) -> bubbles_core::Result<Self> {
        let strength = catalog.damper() * catalog.boost(mode);
        if mode == Mode::Default {
            return Ok(TargetPull::Center {
                center: catalog.center(),
                strength,
            });
        }
        Ok(TargetPull::Split {
            targets: catalog.targets(mode, nodes)?,
            strength,
        })
    }

    pub fn strength(&self) -> f64 {
        match self {
            TargetPull::Center { strength, .. } | TargetPull::Split { strength, .. } => *strength,
        }
    }

    pub fn target(&self, index: usize) -> Option<Point> {
        match self {
            TargetPull::Center { center, .. } => Some(*center),
            TargetPull::Split { targets, .. } => targets.get(index).copied(),
        }
    }
}

impl<N: Particle> Displacement<N> for TargetPull {
    fn displace(&self, index: usize, node: &mut N, alpha: f64) {
        let Some(target) = self.target(index) else {
            return;
        };
        let k = self.strength() * alpha;
        let p = node.position();
        node.set_position(Point::new(
            p.x + (target.x - p.x) * k,
            p.y + (target.y - p.y) * k,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::TargetPull;
    use bubbles_core::{ChartConfig, Mode, ModeCatalog, Point};
    use narwhal::Displacement;

    #[test]
    fn pull_moves_a_fraction_of_the_gap() {
        let pull = TargetPull::Center {
            center: Point::new(100.0, 100.0),
            strength: 0.1,
        };
        let mut p = Point::new(0.0, 50.0);
        pull.displace(0, &mut p, 0.5);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!((p.y - 52.5).abs() < 1e-12);
    }

    #[test]
    fn split_pull_leaves_bodies_without_a_target_alone() {
        let pull = TargetPull::Split {
            targets: vec![Point::new(10.0, 10.0)],
            strength: 1.0,
        };
        let mut p = Point::new(3.0, 4.0);
        pull.displace(1, &mut p, 1.0);
        assert_eq!(p, Point::new(3.0, 4.0));
        pull.displace(0, &mut p, 1.0);
        assert_eq!(p, Point::new(10.0, 10.0));
    }

    #[test]
    fn default_mode_pulls_to_the_center_without_boost() {
        let catalog = ModeCatalog::from_config(&ChartConfig::default());
        let pull = TargetPull::for_mode(&catalog, Mode::Default, &[]).expect("center");
        assert_eq!(
            pull,
            TargetPull::Center {
                center: Point::new(470.0, 300.0),
                strength: 0.102,
            }
        );
        let split = TargetPull::for_mode(&catalog, Mode::Media, &[]).expect("split");
        assert!((split.strength() - 0.102 * 1.1).abs() < 1e-12);
    }
}
