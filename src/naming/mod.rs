//! The standard naming system.
//!
//! Node names authored in a modelling tool encode interactive controls and
//! positional links between parts:
//!
//! - `parser` turns a single name into a feature or attachment descriptor
//! - `scan` classifies a whole node tree and builds the name index
//! - `binder` derives per-axis scale/rotation controls from features
//! - `propagate` keeps attached nodes on their pivots' world positions
//! - `session` owns the generated controls for one loaded model

pub mod binder;
pub mod parser;
pub mod propagate;
pub mod scan;
pub mod session;

pub use binder::{ControlBinding, ControlSpec, GeneratedControl, derive_controls, scale_bounds};
pub use parser::{
    AttachmentKind, AttachmentName, FeatureName, Operation, parse_attachment_name,
    parse_feature_name,
};
pub use propagate::{AttachmentSet, propagate, resolve_driver};
pub use scan::{Attachment, Feature, NodeIndex, ScanReport, SkipReason, SkippedName, scan};
pub use session::{NamingSession, SessionSummary};
