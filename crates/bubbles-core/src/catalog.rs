//! Anchor maps and label sets of the split modes.

use crate::config::ChartConfig;
use crate::error::{Error, Result};
use crate::mode::Mode;
use crate::node::{Attribute, Node};
use indexmap::IndexMap;
use narwhal::Point;

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub key: String,
    pub x: f64,
    pub y: f64,
}

/// Anchors and labels of one split mode. Keys of both maps are the attribute's categories.
#[derive(Debug, Clone)]
pub struct ModeLayout {
    pub mode: Mode,
    pub attribute: Attribute,
    pub anchors: IndexMap<String, Point>,
    pub labels: Vec<Label>,
}

impl ModeLayout {
    pub fn anchor(&self, category: &str) -> Option<Point> {
        self.anchors.get(category).copied()
    }

    /// CSS class of the mode's label primitives.
    pub fn label_class(&self) -> &'static str {
        self.mode.trigger()
    }
}

#[derive(Debug, Clone)]
pub struct ModeCatalog {
    center: Point,
    damper: f64,
    group_boost: f64,
    layouts: Vec<ModeLayout>,
}

impl ModeCatalog {
    /// The published chart: three buckets for support and office, two for the yes/no attributes.
    pub fn from_config(config: &ChartConfig) -> Self {
        let (w, h) = (config.width, config.height);
        let left = Point::new(w / 3.0, h / 2.0);
        let middle = Point::new(w / 2.0, h / 2.0);
        let right = Point::new(2.0 * w / 3.0, h / 2.0);
        let (label_left, label_middle, label_right) =
            (config.label_inset, w / 2.0, w - config.label_inset);

        let three = |mode, attribute, keys: [&str; 3]| {
            let anchors = [left, middle, right];
            let xs = [label_left, label_middle, label_right];
            layout(mode, attribute, &keys, &anchors, &xs, config.label_y)
        };
        let two = |mode, attribute, keys: [&str; 2]| {
            let anchors = [left, right];
            let xs = [label_left, label_right];
            layout(mode, attribute, &keys, &anchors, &xs, config.label_y)
        };

        Self {
            center: config.center(),
            damper: config.damper,
            group_boost: config.group_boost,
            layouts: vec![
                three(
                    Mode::Support,
                    Attribute::Support,
                    ["Sarkozy", "indéterminé", "Hollande"],
                ),
                three(
                    Mode::Office,
                    Attribute::Office,
                    ["Elus", "Cabinets ministériels", "Autres"],
                ),
                two(Mode::Ministry, Attribute::Ministry, ["oui", "non"]),
                two(Mode::Media, Attribute::Media, ["oui", "non"]),
            ],
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn damper(&self) -> f64 {
        self.damper
    }

    /// Pull multiplier of `mode`: 1 in the default mode, the configured boost otherwise.
    pub fn boost(&self, mode: Mode) -> f64 {
        if mode == Mode::Default {
            1.0
        } else {
            self.group_boost
        }
    }

    pub fn layout(&self, mode: Mode) -> Option<&ModeLayout> {
        self.layouts.iter().find(|l| l.mode == mode)
    }

    pub fn layouts(&self) -> &[ModeLayout] {
        &self.layouts
    }

    /// Labels shown while `mode` is active. Empty for the default mode.
    pub fn labels(&self, mode: Mode) -> &[Label] {
        match self.layout(mode) {
            Some(layout) => &layout.labels,
            None => &[],
        }
    }

    /// Point `node` is pulled toward in `mode`.
    pub fn target(&self, mode: Mode, node: &Node) -> Result<Point> {
        let Some(layout) = self.layout(mode) else {
            return Ok(self.center);
        };
        let value = node.category(layout.attribute);
        layout.anchor(value).ok_or_else(|| Error::UnknownCategory {
            mode: mode.trigger(),
            attribute: layout.attribute.column(),
            value: value.to_string(),
            node_id: node.id().to_string(),
        })
    }

    /// Targets of every node in `mode`, in node order.
    pub fn targets(&self, mode: Mode, nodes: &[Node]) -> Result<Vec<Point>> {
        nodes.iter().map(|n| self.target(mode, n)).collect()
    }

    /// Checks that every mode can place every node and that each mode labels exactly its
    /// anchored categories.
    pub fn validate(&self, nodes: &[Node]) -> Result<()> {
        for layout in &self.layouts {
            let label_keys = layout.labels.iter().map(|l| l.key.as_str());
            for key in label_keys.clone() {
                if !layout.anchors.contains_key(key) {
                    return Err(Error::LabelMismatch {
                        mode: layout.mode.trigger(),
                        key: key.to_string(),
                    });
                }
            }
            for key in layout.anchors.keys() {
                if !label_keys.clone().any(|k| k == key.as_str()) {
                    return Err(Error::LabelMismatch {
                        mode: layout.mode.trigger(),
                        key: key.clone(),
                    });
                }
            }
        }
        for mode in Mode::ALL {
            self.targets(mode, nodes)?;
        }
        Ok(())
    }
}

fn layout(
    mode: Mode,
    attribute: Attribute,
    keys: &[&str],
    anchors: &[Point],
    label_xs: &[f64],
    label_y: f64,
) -> ModeLayout {
    ModeLayout {
        mode,
        attribute,
        anchors: keys
            .iter()
            .zip(anchors)
            .map(|(k, p)| (k.to_string(), *p))
            .collect(),
        labels: keys
            .iter()
            .zip(label_xs)
            .map(|(k, x)| Label {
                key: k.to_string(),
                x: *x,
                y: label_y,
            })
            .collect(),
    }
}
