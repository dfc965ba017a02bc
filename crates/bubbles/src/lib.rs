#![forbid(unsafe_code)]

//! `bubbles` is a headless force-directed bubble chart.
//!
//! Bubbles are sized by a monetary amount and pulled, tick after tick, toward the anchor of their
//! category in the active grouping mode while repelling each other. Switching modes swaps the
//! pull and re-heats the layout from wherever the bubbles are, so transitions never jump.
//!
//! ```no_run
//! use bubbles::{Chart, ChartConfig, Command, NullRender};
//!
//! # fn main() -> bubbles::Result<()> {
//! let records = bubbles::load_dataset_sync("soutiens.csv")?;
//! let mut chart = Chart::new(&records, &ChartConfig::default(), NullRender)?;
//! chart.dispatch(Command::SwitchMode("soutien".to_string()))?;
//! chart.run_to_convergence(1_000);
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod command;
pub mod displacement;
pub mod error;

pub use bubbles_core::{
    Attribute, Categories, ChartConfig, Detail, Label, Mode, ModeCatalog, Node, PhysicsConfig,
    Point, Record,
};
pub use bubbles_render::{NullRender, RenderSync, Scene, SvgOptions, render_svg};
pub use chart::Chart;
pub use command::{Command, Outcome};
pub use displacement::TargetPull;
pub use error::{Error, Result};
pub use narwhal::Tick;

use std::path::Path;

/// Reads the dataset once. Runtime-agnostic: the body does not await anything.
pub async fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    load_dataset_sync(path)
}

/// Synchronous variant of [`load_dataset`].
pub fn load_dataset_sync(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    Ok(bubbles_core::load_records(path)?)
}
