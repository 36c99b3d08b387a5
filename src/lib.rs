//! flow-rig
//!
//! A lightweight model viewer core for native and WASM targets. Models are
//! imported into a scene graph and their node names are interpreted through
//! the standard naming system: `Feature_*` nodes get per-axis scale/rotation
//! controls and `Attached_*` nodes are kept on their `Pivot_*` counterparts.
//!
//! High-level modules
//! - `data_structures`: scene graph and per-node transforms
//! - `naming`: name parsing, scene scan, control binding, attachment propagation
//! - `gui`: GUI host trait and the retained control panel
//! - `resources`: helpers to load files and import glTF hierarchies
//! - `viewer`: model catalogue, model switching and control routing
//!

pub mod data_structures;
pub mod gui;
pub mod naming;
pub mod resources;
pub mod viewer;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
