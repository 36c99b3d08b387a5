use flow_rig::{
    data_structures::instance::Axis,
    naming::{AttachmentKind, Operation, parse_attachment_name, parse_feature_name},
};

#[test]
fn should_parse_multi_axis_scale_feature() {
    let feature = parse_feature_name("Feature_XY_Scale_Box1").expect("feature");
    assert_eq!(feature.axes, vec![Axis::X, Axis::Y]);
    assert_eq!(feature.operation, "Scale");
    assert_eq!(feature.object_name, "Box1");
    assert_eq!(feature.kind(), Operation::Scale);
}

#[test]
fn should_keep_underscores_in_object_name() {
    let feature = parse_feature_name("Feature_Z_Rotate_Leg_Back").expect("feature");
    assert_eq!(feature.axes, vec![Axis::Z]);
    assert_eq!(feature.operation, "Rotate");
    assert_eq!(feature.object_name, "Leg_Back");
    assert_eq!(feature.kind(), Operation::Rotation);
}

#[test]
fn should_reject_feature_with_two_segments() {
    assert_eq!(parse_feature_name("Feature_X_Scale"), None);
    assert_eq!(parse_feature_name("Feature_X"), None);
    assert_eq!(parse_feature_name("Feature_"), None);
}

#[test]
fn should_lowercase_dedupe_and_filter_axes() {
    let feature = parse_feature_name("Feature_zxXQz_scale_Lid").expect("feature");
    assert_eq!(feature.axes, vec![Axis::Z, Axis::X]);

    let feature = parse_feature_name("Feature_XQ_Scale_Box").expect("feature");
    assert_eq!(feature.axes, vec![Axis::X]);

    let feature = parse_feature_name("Feature_Q_Scale_Box").expect("feature");
    assert!(feature.axes.is_empty());
}

#[test]
fn should_match_operations_case_insensitively() {
    assert_eq!(Operation::from_token("SCALE"), Operation::Scale);
    assert_eq!(Operation::from_token("rotation"), Operation::Rotation);
    assert_eq!(Operation::from_token("ROTATE"), Operation::Rotation);
    assert_eq!(Operation::from_token("Stretch"), Operation::Unsupported);

    let feature = parse_feature_name("Feature_X_Stretch_Box").expect("feature");
    assert_eq!(feature.operation, "Stretch");
    assert_eq!(feature.kind(), Operation::Unsupported);
}

#[test]
fn should_parse_attachments_and_pivots() {
    let attached = parse_attachment_name("Attached_leg1").expect("attachment");
    assert_eq!(attached.kind, AttachmentKind::Attached);
    assert_eq!(attached.target_name, "leg1");

    let pivot = parse_attachment_name("Pivot_leg1").expect("pivot");
    assert_eq!(pivot.kind, AttachmentKind::Pivot);
    assert_eq!(pivot.target_name, "leg1");

    let nested = parse_attachment_name("Pivot_front_leg").expect("pivot");
    assert_eq!(nested.target_name, "front_leg");
}

#[test]
fn should_ignore_names_outside_the_convention() {
    for name in [
        "Box",
        "feature_X_Scale_Box",
        "attached_leg",
        "pivot_leg",
        "MyFeature_X_Scale_Box",
        "Leg_Pivot_1",
    ] {
        assert_eq!(parse_feature_name(name), None, "{}", name);
        assert_eq!(parse_attachment_name(name), None, "{}", name);
    }
}

#[test]
fn should_not_treat_features_as_attachments() {
    assert_eq!(parse_attachment_name("Feature_X_Scale_Pivot_leg"), None);
    assert!(parse_feature_name("Feature_X_Scale_Pivot_leg").is_some());
}
