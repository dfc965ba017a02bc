/// Power scale: `range0 + (f(v) - f(d0)) / (f(d1) - f(d0)) * (range1 - range0)` with
/// `f(v) = sign(v) * |v|^exponent`.
///
/// With exponent 0.5 and a domain starting at 0, circle *area* grows linearly with the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowScale {
    exponent: f64,
    domain: [f64; 2],
    range: [f64; 2],
}

impl PowScale {
    pub fn new(exponent: f64, domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            exponent,
            domain,
            range,
        }
    }

    /// Square-root scale over `[0, headroom * max]`.
    pub fn sqrt_with_headroom(max: f64, headroom: f64, range: [f64; 2]) -> Self {
        Self::new(0.5, [0.0, headroom * max], range)
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    fn raise(&self, v: f64) -> f64 {
        v.signum() * v.abs().powf(self.exponent)
    }

    pub fn apply(&self, v: f64) -> f64 {
        let lo = self.raise(self.domain[0]);
        let span = self.raise(self.domain[1]) - lo;
        // A degenerate domain maps everything to the start of the range.
        let t = if span == 0.0 {
            0.0
        } else {
            (self.raise(v) - lo) / span
        };
        self.range[0] + t * (self.range[1] - self.range[0])
    }
}

#[cfg(test)]
mod tests {
    use super::PowScale;

    #[test]
    fn endpoints_map_to_range() {
        let s = PowScale::new(0.5, [0.0, 400.0], [2.0, 85.0]);
        assert_eq!(s.apply(0.0), 2.0);
        assert_eq!(s.apply(400.0), 85.0);
        assert!((s.apply(100.0) - (2.0 + 83.0 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn headroom_widens_the_domain() {
        let s = PowScale::sqrt_with_headroom(1000.0, 5.0, [2.0, 85.0]);
        assert_eq!(s.domain(), [0.0, 5000.0]);
        assert!(s.apply(1000.0) < 85.0);
    }

    #[test]
    fn degenerate_domain_maps_to_range_start() {
        let s = PowScale::sqrt_with_headroom(0.0, 5.0, [2.0, 85.0]);
        assert_eq!(s.apply(0.0), 2.0);
    }
}
