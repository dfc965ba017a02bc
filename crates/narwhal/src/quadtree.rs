//! Barnes–Hut quadtree used for charge repulsion.
//!
//! Cells are stored in a flat arena and addressed by index. A leaf holds every body that landed in
//! it: at most one distinct position unless [`MAX_DEPTH`] was reached, so bodies sitting on the
//! same spot never force an endless subdivision.

use crate::particle::Point;

const MAX_DEPTH: usize = 32;

#[derive(Debug, Clone)]
struct Cell {
    x0: f64,
    y0: f64,
    size: f64,
    children: [Option<usize>; 4],
    leaf: bool,
    bodies: Vec<usize>,
    /// Total charge of the bodies below this cell.
    charge: f64,
    /// Charge-weighted center of the bodies below this cell.
    cx: f64,
    cy: f64,
}

impl Cell {
    fn new(x0: f64, y0: f64, size: f64) -> Self {
        Self {
            x0,
            y0,
            size,
            children: [None; 4],
            leaf: true,
            bodies: Vec::new(),
            charge: 0.0,
            cx: 0.0,
            cy: 0.0,
        }
    }

    fn quadrant(&self, p: Point) -> (usize, f64, f64) {
        let half = self.size / 2.0;
        let right = p.x >= self.x0 + half;
        let below = p.y >= self.y0 + half;
        let idx = (right as usize) | ((below as usize) << 1);
        let x0 = if right { self.x0 + half } else { self.x0 };
        let y0 = if below { self.y0 + half } else { self.y0 };
        (idx, x0, y0)
    }
}

#[derive(Debug, Clone)]
pub struct QuadTree<'a> {
    cells: Vec<Cell>,
    positions: &'a [Point],
    charges: &'a [f64],
}

impl<'a> QuadTree<'a> {
    /// Builds the tree and accumulates the charge of every cell.
    ///
    /// `positions` and `charges` are indexed by body. Returns `None` when there are no bodies.
    pub fn build(positions: &'a [Point], charges: &'a [f64]) -> Option<Self> {
        debug_assert_eq!(positions.len(), charges.len());
        let first = positions.first()?;

        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in positions.iter().skip(1) {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        // Square root cell, nudged open so the max corner still lands inside.
        let size = (max_x - min_x).max(max_y - min_y).max(1.0) * (1.0 + 1e-9);

        let mut tree = Self {
            cells: vec![Cell::new(min_x, min_y, size)],
            positions,
            charges,
        };
        for (i, p) in positions.iter().enumerate() {
            tree.insert(0, i, *p, 0);
        }
        tree.accumulate(0);
        Some(tree)
    }

    fn insert(&mut self, cell: usize, body: usize, p: Point, depth: usize) {
        if !self.cells[cell].leaf {
            self.insert_child(cell, body, p, depth);
            return;
        }

        let coincident = self.cells[cell]
            .bodies
            .iter()
            .all(|&other| self.positions[other] == p);
        if coincident || depth >= MAX_DEPTH {
            self.cells[cell].bodies.push(body);
            return;
        }

        let existing = std::mem::take(&mut self.cells[cell].bodies);
        self.cells[cell].leaf = false;
        for other in existing {
            let q = self.positions[other];
            self.insert_child(cell, other, q, depth);
        }
        self.insert_child(cell, body, p, depth);
    }

    fn insert_child(&mut self, cell: usize, body: usize, p: Point, depth: usize) {
        let (idx, x0, y0) = self.cells[cell].quadrant(p);
        let child = match self.cells[cell].children[idx] {
            Some(child) => child,
            None => {
                let size = self.cells[cell].size / 2.0;
                self.cells.push(Cell::new(x0, y0, size));
                let child = self.cells.len() - 1;
                self.cells[cell].children[idx] = Some(child);
                child
            }
        };
        self.insert(child, body, p, depth + 1);
    }

    fn accumulate(&mut self, cell: usize) {
        let (mut charge, mut sx, mut sy) = (0.0, 0.0, 0.0);
        let (mut gx, mut gy, mut count) = (0.0, 0.0, 0usize);

        if self.cells[cell].leaf {
            for &b in &self.cells[cell].bodies {
                let p = self.positions[b];
                let q = self.charges[b];
                charge += q;
                sx += p.x * q;
                sy += p.y * q;
                gx += p.x;
                gy += p.y;
                count += 1;
            }
        } else {
            let children = self.cells[cell].children;
            for child in children.into_iter().flatten() {
                self.accumulate(child);
                let c = &self.cells[child];
                charge += c.charge;
                sx += c.cx * c.charge;
                sy += c.cy * c.charge;
                gx += c.cx;
                gy += c.cy;
                count += 1;
            }
        }

        let c = &mut self.cells[cell];
        c.charge = charge;
        if charge != 0.0 {
            c.cx = sx / charge;
            c.cy = sy / charge;
        } else if count > 0 {
            c.cx = gx / count as f64;
            c.cy = gy / count as f64;
        }
    }

    /// Velocity change that pushes `body` away from every other body.
    ///
    /// Each source of charge `q` at offset `d` contributes `-d * q / |d|^2`, with `|d|^2` clamped
    /// below by `distance_min2`. Sources sitting exactly on `body` are skipped.
    pub fn repulsion(&self, body: usize, theta2: f64, distance_min2: f64) -> Point {
        let p = self.positions[body];
        let (mut vx, mut vy) = (0.0, 0.0);
        let mut stack = vec![0usize];

        while let Some(idx) = stack.pop() {
            let cell = &self.cells[idx];
            if cell.charge == 0.0 {
                continue;
            }

            let dx = cell.cx - p.x;
            let dy = cell.cy - p.y;
            let dn = dx * dx + dy * dy;

            if !cell.leaf {
                if theta2 > 0.0 && cell.size * cell.size / theta2 < dn {
                    let k = cell.charge / dn.max(distance_min2);
                    vx -= dx * k;
                    vy -= dy * k;
                } else {
                    stack.extend(cell.children.iter().flatten().copied());
                }
                continue;
            }

            for &other in &cell.bodies {
                if other == body {
                    continue;
                }
                let q = self.positions[other];
                let dx = q.x - p.x;
                let dy = q.y - p.y;
                let dn = dx * dx + dy * dy;
                if dn == 0.0 {
                    continue;
                }
                let k = self.charges[other] / dn.max(distance_min2);
                vx -= dx * k;
                vy -= dy * k;
            }
        }

        Point::new(vx, vy)
    }
}

#[cfg(test)]
mod tests {
    use super::QuadTree;
    use crate::particle::Point;

    fn exact(positions: &[Point], charges: &[f64], body: usize) -> Point {
        let p = positions[body];
        let (mut vx, mut vy) = (0.0, 0.0);
        for (j, q) in positions.iter().enumerate() {
            if j == body {
                continue;
            }
            let dx = q.x - p.x;
            let dy = q.y - p.y;
            let dn = dx * dx + dy * dy;
            vx -= dx * charges[j] / dn;
            vy -= dy * charges[j] / dn;
        }
        Point::new(vx, vy)
    }

    fn scattered(n: usize) -> Vec<Point> {
        // Deterministic scatter over a 500x500 square.
        (0..n)
            .map(|i| {
                let t = i as f64;
                Point::new((t * 73.13).rem_euclid(500.0), (t * 191.71).rem_euclid(500.0))
            })
            .collect()
    }

    #[test]
    fn theta_zero_matches_exact_pairwise_sum() {
        let positions = scattered(40);
        let charges: Vec<f64> = (0..40).map(|i| 1.0 + i as f64).collect();
        let tree = QuadTree::build(&positions, &charges).expect("tree");
        for i in 0..positions.len() {
            let got = tree.repulsion(i, 0.0, 0.0);
            let want = exact(&positions, &charges, i);
            assert!((got.x - want.x).abs() < 1e-9, "body {i}: {got:?} vs {want:?}");
            assert!((got.y - want.y).abs() < 1e-9, "body {i}: {got:?} vs {want:?}");
        }
    }

    #[test]
    fn approximation_stays_close_to_exact() {
        let positions = scattered(200);
        let charges = vec![10.0; 200];
        let tree = QuadTree::build(&positions, &charges).expect("tree");
        for i in (0..positions.len()).step_by(17) {
            let got = tree.repulsion(i, 0.25, 0.0);
            let want = exact(&positions, &charges, i);
            let err = ((got.x - want.x).powi(2) + (got.y - want.y).powi(2)).sqrt();
            // Net forces cancel in the interior, so bound against the summed magnitudes.
            let p = positions[i];
            let total: f64 = positions
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(j, q)| charges[j] / p.distance(*q))
                .sum();
            assert!(err <= 0.1 * total, "body {i}: err={err} total={total}");
        }
    }

    #[test]
    fn repulsion_points_away_from_the_other_body() {
        let positions = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let charges = [5.0, 5.0];
        let tree = QuadTree::build(&positions, &charges).expect("tree");
        let push = tree.repulsion(0, 0.64, 1.0);
        assert!(push.x < 0.0);
        assert_eq!(push.y, 0.0);
        // |d| * q / |d|^2 = q / |d|
        assert!((push.x + 0.5).abs() < 1e-12);
    }

    #[test]
    fn coincident_bodies_do_not_recurse_forever_and_exert_no_force() {
        let positions = vec![Point::new(3.0, 3.0); 5];
        let charges = vec![1.0; 5];
        let tree = QuadTree::build(&positions, &charges).expect("tree");
        assert_eq!(tree.repulsion(2, 0.64, 1.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn empty_input_builds_no_tree() {
        assert!(QuadTree::build(&[], &[]).is_none());
    }
}
