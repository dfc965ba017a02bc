use crate::error::{Error, Result};
use narwhal::{ForceOptions, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chart settings. Every field has a default, so a config file only lists what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    /// Output range of the radius scale, in pixels.
    pub radius_range: [f64; 2],
    /// The radius scale domain ends at `domain_headroom * max(total_amount)`.
    pub domain_headroom: f64,
    /// Fraction of the remaining distance to its anchor a node covers per tick (times alpha).
    pub damper: f64,
    /// Extra pull applied in split modes.
    pub group_boost: f64,
    /// Baseline of the mode labels.
    pub label_y: f64,
    /// Distance of the outer labels from the canvas edges.
    pub label_inset: f64,
    /// Seed for the initial scatter. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Duration of the bubble "grow in" animation.
    pub grow_in_ms: u64,
    pub physics: PhysicsConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 940.0,
            height: 600.0,
            radius_range: [2.0, 85.0],
            domain_headroom: 5.0,
            damper: 0.102,
            group_boost: 1.1,
            label_y: 40.0,
            label_inset: 160.0,
            seed: None,
            grow_in_ms: 2000,
            physics: PhysicsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub friction: f64,
    pub gravity: f64,
    pub charge_scale: f64,
    pub theta: f64,
    pub alpha_start: f64,
    pub alpha_decay: f64,
    pub alpha_min: f64,
    pub distance_min: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        let f = ForceOptions::default();
        Self {
            friction: f.friction,
            gravity: f.gravity,
            charge_scale: f.charge_scale,
            theta: f.theta,
            alpha_start: f.alpha_start,
            alpha_decay: f.alpha_decay,
            alpha_min: f.alpha_min,
            distance_min: f.distance_min,
        }
    }
}

impl ChartConfig {
    /// Reads a config file; `.yaml`/`.yml` files are parsed as YAML, anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));
        let config = if is_yaml {
            Self::from_yaml_str(&text)?
        } else {
            Self::from_json_str(&text)?
        };
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn force_options(&self) -> ForceOptions {
        let p = &self.physics;
        ForceOptions {
            width: self.width,
            height: self.height,
            friction: p.friction,
            gravity: p.gravity,
            charge_scale: p.charge_scale,
            theta: p.theta,
            alpha_start: p.alpha_start,
            alpha_decay: p.alpha_decay,
            alpha_min: p.alpha_min,
            distance_min: p.distance_min,
        }
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(message: String) -> Result<()> {
            Err(Error::InvalidConfig { message })
        }

        let [r0, r1] = self.radius_range;
        if !(r0.is_finite() && r1.is_finite() && 0.0 <= r0 && r0 < r1) {
            return invalid(format!("radius_range must satisfy 0 <= min < max, got [{r0}, {r1}]"));
        }
        if !(self.domain_headroom.is_finite() && self.domain_headroom >= 1.0) {
            return invalid(format!(
                "domain_headroom must be >= 1, got {}",
                self.domain_headroom
            ));
        }
        if !(self.damper > 0.0 && self.damper <= 1.0) {
            return invalid(format!("damper must be in (0, 1], got {}", self.damper));
        }
        if !(self.group_boost.is_finite() && self.group_boost > 0.0) {
            return invalid(format!("group_boost must be > 0, got {}", self.group_boost));
        }
        if !(self.label_y.is_finite() && self.label_inset.is_finite()) {
            return invalid("label_y and label_inset must be finite".to_string());
        }
        self.force_options().validate()?;
        Ok(())
    }
}
