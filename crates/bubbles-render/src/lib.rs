#![forbid(unsafe_code)]

//! Visual side of the bubbles chart.
//!
//! The controller only talks to a [`RenderSync`]. [`Scene`] is the retained, display-free
//! implementation used for snapshots ([`svg::render_svg`]) and tests; [`NullRender`] discards
//! everything for headless layout runs.

pub mod color;
pub mod scene;
pub mod svg;
pub mod tooltip;

pub use color::{Color, Palette};
pub use scene::{Bubble, Scene, SceneLabel, Tooltip};
pub use svg::{SvgOptions, render_svg};
pub use tooltip::tooltip_html;

use bubbles_core::{Detail, Label, Node};

/// What the chart needs from a display surface.
pub trait RenderSync {
    /// Creates the persistent primitive of `node`, keyed by its id. The primitive starts with
    /// radius 0 and grows to `node.radius()`.
    fn create_bubble(&mut self, node: &Node);

    /// Moves every primitive to its node's current position. Called once per tick.
    fn move_bubbles(&mut self, nodes: &[Node]);

    fn remove_bubble(&mut self, id: &str);

    /// Creates one text primitive per label, tagged with `class`.
    fn show_labels(&mut self, class: &str, labels: &[Label]);

    /// Removes every text primitive tagged with `class`. No-op when there is none.
    fn hide_labels(&mut self, class: &str);

    /// Shows the hover overlay for bubble `id` and outlines the bubble.
    fn show_detail(&mut self, id: &str, detail: &Detail);

    /// Hides the hover overlay and restores the outline of bubble `id`.
    fn hide_detail(&mut self, id: &str);

    fn set_description(&mut self, text: &str);

    /// Marks `trigger` as the only active toolbar button.
    fn set_active_trigger(&mut self, trigger: &str);
}

impl<R: RenderSync + ?Sized> RenderSync for &mut R {
    fn create_bubble(&mut self, node: &Node) {
        (**self).create_bubble(node)
    }

    fn move_bubbles(&mut self, nodes: &[Node]) {
        (**self).move_bubbles(nodes)
    }

    fn remove_bubble(&mut self, id: &str) {
        (**self).remove_bubble(id)
    }

    fn show_labels(&mut self, class: &str, labels: &[Label]) {
        (**self).show_labels(class, labels)
    }

    fn hide_labels(&mut self, class: &str) {
        (**self).hide_labels(class)
    }

    fn show_detail(&mut self, id: &str, detail: &Detail) {
        (**self).show_detail(id, detail)
    }

    fn hide_detail(&mut self, id: &str) {
        (**self).hide_detail(id)
    }

    fn set_description(&mut self, text: &str) {
        (**self).set_description(text)
    }

    fn set_active_trigger(&mut self, trigger: &str) {
        (**self).set_active_trigger(trigger)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl RenderSync for NullRender {
    fn create_bubble(&mut self, _node: &Node) {}
    fn move_bubbles(&mut self, _nodes: &[Node]) {}
    fn remove_bubble(&mut self, _id: &str) {}
    fn show_labels(&mut self, _class: &str, _labels: &[Label]) {}
    fn hide_labels(&mut self, _class: &str) {}
    fn show_detail(&mut self, _id: &str, _detail: &Detail) {}
    fn hide_detail(&mut self, _id: &str) {}
    fn set_description(&mut self, _text: &str) {}
    fn set_active_trigger(&mut self, _trigger: &str) {}
}
