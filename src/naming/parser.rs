//! Name parsing for the standard naming system.
//!
//! Authoring tools only offer a plain text field for node names, so the
//! convention is a prefix plus `_`-separated segments:
//!
//! - `Feature_<axes>_<operation>_<object name>`, e.g. `Feature_XY_Scale_Box1`
//! - `Attached_<target>` and `Pivot_<target>`, e.g. `Attached_leg1`
//!
//! Both parsers are pure and return `None` for names outside the convention.

use crate::data_structures::instance::Axis;

pub const FEATURE_PREFIX: &str = "Feature_";
pub const ATTACHED_PREFIX: &str = "Attached_";
pub const PIVOT_PREFIX: &str = "Pivot_";

/// Transform kind a feature's operation token resolves to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Scale,
    Rotation,
    Unsupported,
}

impl Operation {
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("scale") {
            Operation::Scale
        } else if token.eq_ignore_ascii_case("rotation") || token.eq_ignore_ascii_case("rotate") {
            Operation::Rotation
        } else {
            Operation::Unsupported
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureName {
    /// Distinct axes in order of first appearance.
    pub axes: Vec<Axis>,
    /// Operation token with its original casing.
    pub operation: String,
    pub object_name: String,
}

impl FeatureName {
    pub fn kind(&self) -> Operation {
        Operation::from_token(&self.operation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttachmentKind {
    Attached,
    Pivot,
}

impl AttachmentKind {
    pub fn prefix(self) -> &'static str {
        match self {
            AttachmentKind::Attached => ATTACHED_PREFIX,
            AttachmentKind::Pivot => PIVOT_PREFIX,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttachmentName {
    pub kind: AttachmentKind,
    pub target_name: String,
}

pub fn parse_feature_name(name: &str) -> Option<FeatureName> {
    let rest = name.strip_prefix(FEATURE_PREFIX)?;
    let segments: Vec<&str> = rest.split('_').collect();
    if segments.len() < 3 {
        return None;
    }

    let mut axes = Vec::with_capacity(3);
    for axis in segments[0].chars().filter_map(Axis::from_char) {
        if !axes.contains(&axis) {
            axes.push(axis);
        }
    }

    Some(FeatureName {
        axes,
        operation: segments[1].to_string(),
        object_name: segments[2..].join("_"),
    })
}

pub fn parse_attachment_name(name: &str) -> Option<AttachmentName> {
    [AttachmentKind::Attached, AttachmentKind::Pivot]
        .into_iter()
        .find_map(|kind| {
            name.strip_prefix(kind.prefix()).map(|target| AttachmentName {
                kind,
                target_name: target.to_string(),
            })
        })
}

/// `true` when the name carries the feature prefix, even if it fails to parse.
pub(crate) fn has_feature_prefix(name: &str) -> bool {
    name.starts_with(FEATURE_PREFIX)
}
