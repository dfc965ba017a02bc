#![forbid(unsafe_code)]

//! Data side of the bubbles chart (headless).
//!
//! - [`record`]: CSV rows as published
//! - [`builder`]: rows to sized, scattered [`Node`]s, largest first
//! - [`catalog`]: grouping modes, their anchor maps and label sets
//! - [`config`]: chart geometry and physics settings

pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod mode;
pub mod node;
pub mod record;
pub mod scale;

pub use builder::{build_nodes, radius_scale};
pub use catalog::{Label, ModeCatalog, ModeLayout};
pub use config::{ChartConfig, PhysicsConfig};
pub use error::{Error, Result};
pub use mode::Mode;
pub use node::{Attribute, Categories, Detail, Node};
pub use record::{Record, load_records, read_records};
pub use scale::PowScale;

pub use narwhal::{Particle, Point};
