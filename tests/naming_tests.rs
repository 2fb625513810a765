//! Structured name tests
//!
//! Tests for:
//! - Backward-scan decoding of every field combination
//! - Encode/decode round trips on encoder output
//! - Side and category invariants
//! - Builder methods leaving the source untouched
//! - Mirroring and malformed-input rejection

use rigpie::naming::{MalformedReason, NameError};
use rigpie::{RigError, Side, StructuredName, category};

fn decode(s: &str) -> StructuredName {
    StructuredName::decode(s).unwrap()
}

fn fields(name: &StructuredName) -> [&str; 5] {
    [
        name.side(),
        name.descriptor(),
        name.iterator(),
        name.category(),
        name.instance(),
    ]
}

// ============================================================================
// Decoding
// ============================================================================

#[test]
fn decode_all_fields() {
    let name = decode("LfElbowFk2Ctrl3");
    assert_eq!(fields(&name), ["Lf", "ElbowFk", "2", "Ctrl", "3"]);
    assert_eq!(name.encode(), "LfElbowFk2Ctrl3");
}

#[test]
fn decode_without_optional_fields() {
    let name = decode("CnSpineJnt");
    assert_eq!(fields(&name), ["Cn", "Spine", "", "Jnt", ""]);
}

#[test]
fn decode_iterator_only() {
    let name = decode("RtFinger12Jnt");
    assert_eq!(fields(&name), ["Rt", "Finger", "12", "Jnt", ""]);
}

#[test]
fn decode_instance_only() {
    let name = decode("LfLegNull42");
    assert_eq!(fields(&name), ["Lf", "Leg", "", "Null", "42"]);
}

#[test]
fn decode_camel_case_descriptor_uses_last_capital() {
    let name = decode("LfFootBankOutCtrl");
    assert_eq!(name.descriptor(), "FootBankOut");
    assert_eq!(name.category(), "Ctrl");
}

#[test]
fn decode_keeps_zero_padding() {
    let name = decode("CnSpine03Ctrl007");
    assert_eq!(name.iterator(), "03");
    assert_eq!(name.instance(), "007");
    assert_eq!(name.to_string(), "CnSpine03Ctrl007");
}

#[test]
fn decode_via_from_str_and_try_from() {
    let parsed: StructuredName = "LfArmDag".parse().unwrap();
    let converted = StructuredName::try_from("LfArmDag").unwrap();
    assert_eq!(parsed, converted);
}

// ============================================================================
// Invariants
// ============================================================================

const SAMPLES: &[&str] = &[
    "LfElbowFk2Ctrl3",
    "CnDefaultCtrl",
    "RtFinger12Jnt",
    "LfLegNull42",
    "CnSpineIkhandle",
    "LfArmFkDag",
    "RtToeIkEffector",
    "CnHead1Curve2",
    "LfArmPlusminusaverage",
];

#[test]
fn round_trip_on_encoder_output() {
    for s in SAMPLES {
        let encoded = decode(s).encode();
        assert_eq!(&encoded, s);
        assert_eq!(decode(&encoded).encode(), encoded);
    }
}

#[test]
fn side_is_first_two_chars() {
    for s in SAMPLES {
        assert_eq!(decode(s).side(), &s[0..2]);
    }
}

#[test]
fn category_starts_uppercase() {
    for s in SAMPLES {
        let name = decode(s);
        assert!(name.category().chars().next().unwrap().is_uppercase(), "{s}");
    }
}

#[test]
fn round_trip_builder_output() {
    let base = StructuredName::new(Side::Left, "Thumb", category::JNT);
    for i in 0..12 {
        let name = base.with_iterator(i).with_instance(i + 1);
        assert!(name.is_canonical(), "{name}");
        assert_eq!(decode(&name.encode()), name);
    }
}

// ============================================================================
// Builders
// ============================================================================

#[test]
fn builders_do_not_mutate_source() {
    let joint = decode("LfElbowJnt");
    let control = joint.with_category(category::CTRL);
    let fk = joint.append_descriptor("Fk");
    let numbered = joint.with_iterator(2).with_instance(1);

    assert_eq!(joint.to_string(), "LfElbowJnt");
    assert_eq!(control.to_string(), "LfElbowCtrl");
    assert_eq!(fk.to_string(), "LfElbowFkJnt");
    assert_eq!(numbered.to_string(), "LfElbow2Jnt1");
}

#[test]
fn clone_is_independent() {
    let original = decode("LfElbowJnt");
    let copy = original.clone();
    let changed = copy.with_descriptor("Knee");
    assert_eq!(original, copy);
    assert_ne!(changed, copy);
}

#[test]
fn numeric_fields_use_plain_decimal() {
    let name = StructuredName::default().with_iterator(7_u32).with_instance("07");
    assert_eq!(name.iterator(), "7");
    assert_eq!(name.instance(), "07");
    assert_eq!(name.without_iterator().without_instance(), StructuredName::default());
}

#[test]
fn default_is_center_control() {
    let name = StructuredName::default();
    assert_eq!(name.side_kind(), Some(Side::Center));
    assert_eq!(name.to_string(), "CnDefaultCtrl");
}

// ============================================================================
// Mirroring
// ============================================================================

#[test]
fn mirrored_swaps_left_and_right() {
    let left = decode("LfShoulderFk1Ctrl");
    let right = left.mirrored();
    assert_eq!(right.to_string(), "RtShoulderFk1Ctrl");
    assert_eq!(right.mirrored(), left);
}

#[test]
fn center_mirrors_onto_itself() {
    let spine = decode("CnSpine2Ctrl");
    assert_eq!(spine.mirrored(), spine);
}

// ============================================================================
// Malformed input
// ============================================================================

#[test]
fn malformed_names_are_rejected() {
    let cases = [
        ("", MalformedReason::EmptyName),
        ("L", MalformedReason::TooShort),
        ("LfC", MalformedReason::TooShort),
        ("Lfelbowctrl", MalformedReason::MissingCategory),
        ("Lf2024", MalformedReason::MissingCategory),
        ("LfCtrl", MalformedReason::EmptyDescriptor),
        ("Lf3Ctrl1", MalformedReason::EmptyDescriptor),
    ];

    for (input, expected) in cases {
        match StructuredName::decode(input) {
            Err(NameError::Malformed { name, reason }) => {
                assert_eq!(name, input);
                assert_eq!(reason, expected, "{input:?}");
            }
            other => panic!("{input:?} decoded to {other:?}"),
        }
    }
}

#[test]
fn malformed_name_converts_to_rig_error() {
    let err: RigError = StructuredName::decode("nope").unwrap_err().into();
    assert!(err.is_malformed_name());
    assert!(!err.is_singular_matrix());
}

#[test]
fn unchecked_builders_are_caught_by_validation() {
    let empty_descriptor = StructuredName::new(Side::Left, "", category::CTRL);
    assert!(!empty_descriptor.is_canonical());
    assert!(matches!(
        empty_descriptor.validated(),
        Err(NameError::Malformed { reason: MalformedReason::EmptyDescriptor, .. })
    ));

    let lowercase_category = StructuredName::default().with_category("ctrl");
    assert!(matches!(lowercase_category.validated(), Err(NameError::Malformed { .. })));

    let digit_descriptor = StructuredName::default().with_descriptor("Arm2");
    assert_eq!(
        digit_descriptor.validated(),
        Err(NameError::NonCanonical { name: "CnArm2Ctrl".to_string() })
    );

    for category in category::ALL {
        assert!(StructuredName::try_new(Side::Right, "Arm", category).is_ok(), "{category}");
    }
}
