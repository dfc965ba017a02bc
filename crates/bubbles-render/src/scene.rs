use crate::RenderSync;
use crate::color::{BLACK, Color, Palette};
use crate::tooltip::tooltip_html;
use bubbles_core::{Detail, Label, Node};
use indexmap::IndexMap;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub hovered: bool,
}

impl Bubble {
    /// Outline currently drawn: black while hovered.
    pub fn current_stroke(&self) -> Color {
        if self.hovered { BLACK } else { self.stroke }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub class: String,
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub node_id: String,
    pub detail: Detail,
    pub html: String,
}

/// Retained model of what a display would show.
///
/// Bubbles keep creation order, which is also their stacking order.
#[derive(Debug, Clone)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    grow_in: Duration,
    palette: Palette,
    bubbles: IndexMap<String, Bubble>,
    labels: Vec<SceneLabel>,
    tooltip: Option<Tooltip>,
    description: String,
    active_trigger: Option<String>,
}

impl Scene {
    pub fn new(width: f64, height: f64, grow_in: Duration) -> Self {
        Self::with_palette(width, height, grow_in, Palette::default())
    }

    pub fn with_palette(width: f64, height: f64, grow_in: Duration, palette: Palette) -> Self {
        Self {
            width,
            height,
            grow_in,
            palette,
            bubbles: IndexMap::new(),
            labels: Vec::new(),
            tooltip: None,
            description: String::new(),
            active_trigger: None,
        }
    }

    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.bubbles.values()
    }

    pub fn bubble(&self, id: &str) -> Option<&Bubble> {
        self.bubbles.get(id)
    }

    pub fn labels(&self) -> &[SceneLabel] {
        &self.labels
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn active_trigger(&self) -> Option<&str> {
        self.active_trigger.as_deref()
    }

    pub fn grow_in(&self) -> Duration {
        self.grow_in
    }

    /// Displayed radius of bubble `id`, `elapsed` after it was created.
    pub fn radius_at(&self, id: &str, elapsed: Duration) -> Option<f64> {
        let bubble = self.bubbles.get(id)?;
        Some(bubble.radius * grow_progress(elapsed, self.grow_in))
    }
}

/// Cubic in-out easing of the grow-in transition, in `[0, 1]`.
fn grow_progress(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() || elapsed >= total {
        return 1.0;
    }
    let t = elapsed.as_secs_f64() / total.as_secs_f64();
    let t2 = t * 2.0;
    if t2 <= 1.0 {
        t2 * t2 * t2 / 2.0
    } else {
        let u = t2 - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

impl RenderSync for Scene {
    fn create_bubble(&mut self, node: &Node) {
        let fill = self.palette.fill(node.group());
        self.bubbles.insert(
            node.id().to_string(),
            Bubble {
                id: node.id().to_string(),
                cx: node.x(),
                cy: node.y(),
                radius: node.radius(),
                fill,
                stroke: Palette::stroke(fill),
                stroke_width: 2.0,
                hovered: false,
            },
        );
    }

    fn move_bubbles(&mut self, nodes: &[Node]) {
        for node in nodes {
            if let Some(b) = self.bubbles.get_mut(node.id()) {
                b.cx = node.x();
                b.cy = node.y();
            }
        }
    }

    fn remove_bubble(&mut self, id: &str) {
        self.bubbles.shift_remove(id);
        if self.tooltip.as_ref().is_some_and(|t| t.node_id == id) {
            self.tooltip = None;
        }
    }

    fn show_labels(&mut self, class: &str, labels: &[Label]) {
        self.labels.extend(labels.iter().map(|l| SceneLabel {
            class: class.to_string(),
            text: l.key.clone(),
            x: l.x,
            y: l.y,
        }));
    }

    fn hide_labels(&mut self, class: &str) {
        self.labels.retain(|l| l.class != class);
    }

    fn show_detail(&mut self, id: &str, detail: &Detail) {
        if let Some(b) = self.bubbles.get_mut(id) {
            b.hovered = true;
        }
        self.tooltip = Some(Tooltip {
            node_id: id.to_string(),
            detail: detail.clone(),
            html: tooltip_html(detail),
        });
    }

    fn hide_detail(&mut self, id: &str) {
        if let Some(b) = self.bubbles.get_mut(id) {
            b.hovered = false;
        }
        self.tooltip = None;
    }

    fn set_description(&mut self, text: &str) {
        self.description = text.to_string();
    }

    fn set_active_trigger(&mut self, trigger: &str) {
        self.active_trigger = Some(trigger.to_string());
    }
}
