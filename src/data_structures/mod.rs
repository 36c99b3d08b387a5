//! Engine data structures: scene graphs and per-node transforms.
//!
//! - `instance` holds per-node transformation data and axis helpers
//! - `scene_graph` enables hierarchical scene organization

pub mod instance;
pub mod scene_graph;
